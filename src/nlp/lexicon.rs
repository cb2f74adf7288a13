//! Word lists backing the tagger.
//!
//! Closed classes are listed exhaustively enough for conversational English.
//! The open-class lists lean towards the vocabulary people use to describe how
//! they feel; anything unlisted falls through to suffix rules.

use std::collections::HashSet;

use super::token::PartOfSpeech;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "no",
    "another", "either", "neither", "all", "both", "much", "many", "few", "several", "enough",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "mine", "yours",
    "something", "anything", "nothing", "everything", "someone", "anyone", "what", "who",
    "which", "whom",
];

const POSSESSIVES: &[&str] = &["my", "your", "his", "its", "our", "their"];

/// Pronouns that can head a clause ("I cough", "it hurts").
const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they"];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "'m", "'re", "'s", "'d", "'ll",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "ca", "wo", "cannot",
];

/// Forms of "have", auxiliary or main verb depending on what follows.
const HAVE_FORMS: &[&str] = &["have", "has", "had", "'ve"];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "to", "for", "of", "with", "without", "from", "by", "about", "into",
    "onto", "over", "under", "after", "before", "during", "since", "around", "through", "near",
    "behind", "between", "across", "against", "like", "per", "than", "until", "within",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "plus"];

const SUBORDINATORS: &[&str] = &[
    "because", "if", "when", "while", "although", "though", "unless", "whenever", "whether",
    "once", "where",
];

const PARTICLES: &[&str] = &["not", "n't", "up", "out", "off", "down"];

const ADVERBS: &[&str] = &[
    "very", "really", "quite", "so", "too", "also", "just", "always", "often", "sometimes",
    "usually", "still", "now", "then", "today", "tonight", "yesterday", "lately", "recently",
    "again", "already", "even", "almost", "barely", "hardly", "never", "ever", "here", "there",
    "how", "why", "kind", "sort", "somewhat", "pretty", "all", "much", "more", "most", "less",
    "least", "later", "soon", "ago", "well", "maybe", "perhaps", "constantly",
];

const INTERJECTIONS: &[&str] = &[
    "hi", "hello", "hey", "bye", "goodbye", "thanks", "thank", "please", "ok", "okay", "yes",
    "yeah", "um", "uh", "oh", "hmm", "ugh", "ouch", "ow",
];

const NUMBERS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "dozen",
    "hundred",
];

const ADJECTIVES: &[&str] = &[
    "sore", "runny", "stuffy", "itchy", "high", "low", "mild", "severe", "sharp", "dull", "dry",
    "wet", "hot", "cold", "warm", "bad", "terrible", "awful", "horrible", "constant",
    "persistent", "frequent", "chronic", "acute", "sudden", "dizzy", "tired", "weak",
    "nauseous", "nauseated", "sick", "ill", "red", "swollen", "painful", "puffy", "watery",
    "blurry", "blurred", "loose", "upset", "achy", "sweaty", "shaky", "sleepy", "fatigued",
    "exhausted", "feverish", "congested", "irritated", "inflamed", "stiff", "numb", "tingly",
    "tender", "bloated", "queasy", "light-headed", "lightheaded", "short", "heavy", "light",
    "slight", "little", "big", "small", "new", "good", "better", "worse", "worst", "fine",
    "great", "unwell", "stressed", "anxious", "nervous", "restless", "depressed", "burning",
    "throbbing", "pounding", "stabbing", "bloody", "oily", "cloudy", "dark", "pale",
    "blocked", "raw", "scratchy", "hoarse", "clammy", "faint", "groggy", "cranky", "crampy",
    "wheezy", "sensitive", "uncomfortable", "awake", "asleep", "strange",
    "weird", "whole", "entire", "same", "other", "last", "first", "next", "past", "full",
    "empty", "lower", "upper", "left", "right", "nasal", "sunburned",
];

const VERBS: &[&str] = &[
    "get", "gets", "got", "getting", "gotten", "feel", "feels", "felt", "feeling",
    "experience", "experiences", "experiencing", "experienced", "suffer", "suffers",
    "suffering", "suffered", "hurt", "hurts", "hurting", "keep", "keeps", "kept", "keeping",
    "notice", "notices", "noticed", "noticing", "think", "thinks", "thought", "know", "knew",
    "seem", "seems", "seemed", "look", "looks", "looked", "become", "becomes", "became",
    "start", "starts", "started", "begin", "began", "begun", "develop", "develops",
    "developed", "wake", "woke", "sleep", "slept", "eat", "ate", "eaten", "drink", "drank",
    "need", "needs", "needed", "want", "wants", "wanted", "take", "takes", "took", "taken",
    "help", "make", "makes", "made", "go", "goes", "went", "gone", "come", "comes", "came",
    "see", "saw", "seen", "itch", "itches", "itched", "swell", "swells", "swelled", "bleed",
    "bleeds", "bled", "breathe", "breathes", "breathed", "throw", "throws", "threw", "thrown",
    "catch", "caught", "run", "runs", "ran", "stop", "stops", "stopped", "worry",
    "worried", "tell", "told", "say", "said", "ask", "asked", "tried", "try",
];

/// Words that read as a noun after a determiner and as a verb after a subject.
const NOUN_VERB: &[&str] = &[
    "cough", "coughs", "ache", "aches", "sneeze", "sneezes", "vomit", "sweat", "sweats",
    "cramp", "cramps", "burn", "burns", "pain", "itch", "throb", "bruise", "bruises",
];

/// Verbs after which an -ing form is a verb complement ("keep coughing").
const ASPECTUAL_VERBS: &[&str] = &[
    "keep", "keeps", "kept", "start", "starts", "started", "stop", "stops", "stopped", "begin",
    "began", "begun", "been",
];

/// Nouns that suffix rules would otherwise misread.
const NOUN_OVERRIDES: &[&str] = &[
    "belly", "family", "body", "assembly", "morning", "evening", "ceiling", "building",
    "ring", "thing", "spring", "string", "wing", "king", "bed", "head",
];

const ADJ_SUFFIXES: &[&str] = &["ous", "ful", "ive", "less", "able", "ible", "ish", "ical"];

/// What the lexicon alone can say about a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalClass {
    Fixed(PartOfSpeech),
    /// Noun after a determiner, verb after a subject.
    NounOrVerb,
    /// A form of "have".
    Have,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    determiners: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    possessives: HashSet<&'static str>,
    subjects: HashSet<&'static str>,
    auxiliaries: HashSet<&'static str>,
    have_forms: HashSet<&'static str>,
    adpositions: HashSet<&'static str>,
    coordinators: HashSet<&'static str>,
    subordinators: HashSet<&'static str>,
    particles: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    interjections: HashSet<&'static str>,
    numbers: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
    noun_verb: HashSet<&'static str>,
    aspectual: HashSet<&'static str>,
    noun_overrides: HashSet<&'static str>,
}

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            determiners: set(DETERMINERS),
            pronouns: set(PRONOUNS),
            possessives: set(POSSESSIVES),
            subjects: set(SUBJECT_PRONOUNS),
            auxiliaries: set(AUXILIARIES),
            have_forms: set(HAVE_FORMS),
            adpositions: set(ADPOSITIONS),
            coordinators: set(COORDINATORS),
            subordinators: set(SUBORDINATORS),
            particles: set(PARTICLES),
            adverbs: set(ADVERBS),
            interjections: set(INTERJECTIONS),
            numbers: set(NUMBERS),
            adjectives: set(ADJECTIVES),
            verbs: set(VERBS),
            noun_verb: set(NOUN_VERB),
            aspectual: set(ASPECTUAL_VERBS),
            noun_overrides: set(NOUN_OVERRIDES),
        }
    }
}

impl Lexicon {
    /// Context-free classification of a lowercased word.
    pub fn classify(&self, word: &str) -> LexicalClass {
        use PartOfSpeech::*;

        if word.is_empty() {
            return LexicalClass::Fixed(Other);
        }
        if !word.chars().any(|c| c.is_alphanumeric()) {
            return LexicalClass::Fixed(Punct);
        }
        if word.chars().all(|c| c.is_ascii_digit()) || self.numbers.contains(word) {
            return LexicalClass::Fixed(Num);
        }
        if self.have_forms.contains(word) {
            return LexicalClass::Have;
        }

        // Closed classes first; order matters for words listed twice ("all", "much").
        let closed: [(&HashSet<&'static str>, PartOfSpeech); 11] = [
            (&self.determiners, Det),
            (&self.possessives, Pron),
            (&self.pronouns, Pron),
            (&self.auxiliaries, Aux),
            (&self.particles, Part),
            (&self.coordinators, CConj),
            (&self.subordinators, SConj),
            (&self.adpositions, Adp),
            (&self.interjections, Intj),
            (&self.adverbs, Adv),
            (&self.noun_overrides, Noun),
        ];
        if let Some((_, pos)) = closed.iter().find(|(words, _)| words.contains(word)) {
            return LexicalClass::Fixed(*pos);
        }

        if self.noun_verb.contains(word) {
            return LexicalClass::NounOrVerb;
        }
        if self.adjectives.contains(word) {
            return LexicalClass::Fixed(Adj);
        }
        if self.verbs.contains(word) {
            return LexicalClass::Fixed(Verb);
        }

        self.classify_by_suffix(word)
    }

    fn classify_by_suffix(&self, word: &str) -> LexicalClass {
        use PartOfSpeech::*;

        let len = word.chars().count();
        if len > 4 && word.ends_with("ly") {
            return LexicalClass::Fixed(Adv);
        }
        if len > 4 && ADJ_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return LexicalClass::Fixed(Adj);
        }
        if len > 4 && word.ends_with("ing") {
            return LexicalClass::NounOrVerb;
        }
        if len > 3 && word.ends_with("ed") {
            return LexicalClass::Fixed(Verb);
        }
        LexicalClass::Fixed(Noun)
    }

    pub fn is_possessive(&self, word: &str) -> bool {
        self.possessives.contains(word)
    }

    pub fn is_subject(&self, word: &str) -> bool {
        self.subjects.contains(word)
    }

    pub fn is_aspectual(&self, word: &str) -> bool {
        self.aspectual.contains(word)
    }
}

use super::lexicon::{LexicalClass, Lexicon};
use super::token::{DepRole, PartOfSpeech, Token};
use super::tokenizer::tokenize;

/// Irregular participles that turn a preceding "have" into an auxiliary.
const PARTICIPLES: &[&str] = &[
    "been", "had", "got", "gotten", "felt", "kept", "caught", "thought", "made", "slept",
    "bled", "woke", "come", "gone", "run", "begun", "taken", "seen", "told", "said", "eaten",
    "thrown", "become",
];

/// Heuristic part-of-speech and dependency tagger.
///
/// Three passes over the token stream:
/// 1. lexical lookup
/// 2. context resolution for noun/verb ambiguity and auxiliary "have"
/// 3. dependency roles: `Root` for the first main verb of each sentence,
///    `Amod` for adjectives sitting in front of a noun
#[derive(Debug, Clone, Default)]
pub struct Tagger {
    lexicon: Lexicon,
}

impl Tagger {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn tag(&self, text: &str) -> Vec<Token> {
        let mut tokens = tokenize(text);
        self.annotate(&mut tokens);
        tokens
    }

    pub fn annotate(&self, tokens: &mut [Token]) {
        let classes: Vec<LexicalClass> = tokens
            .iter()
            .map(|t| self.lexicon.classify(&t.lower))
            .collect();

        // Which tokens were ambiguous, so coordination can copy a resolution.
        let mut ambiguous = vec![false; tokens.len()];

        for i in 0..tokens.len() {
            let pos = match classes[i] {
                LexicalClass::Fixed(pos) => pos,
                LexicalClass::Have => self.resolve_have(tokens, &classes, i),
                LexicalClass::NounOrVerb => {
                    ambiguous[i] = true;
                    self.resolve_noun_or_verb(tokens, &ambiguous, i)
                }
            };
            tokens[i].pos = pos;
        }

        assign_roles(tokens);
    }

    fn resolve_have(&self, tokens: &[Token], classes: &[LexicalClass], i: usize) -> PartOfSpeech {
        let next = (i + 1..tokens.len()).find(|&j| {
            !matches!(
                classes[j],
                LexicalClass::Fixed(PartOfSpeech::Adv) | LexicalClass::Fixed(PartOfSpeech::Part)
            )
        });
        let Some(j) = next else {
            return PartOfSpeech::Verb;
        };

        let word = tokens[j].lower.as_str();
        let participle = PARTICIPLES.contains(&word)
            || (classes[j] == LexicalClass::Fixed(PartOfSpeech::Verb)
                && (word.ends_with("ed") || word.ends_with("en")));
        if participle {
            PartOfSpeech::Aux
        } else {
            PartOfSpeech::Verb
        }
    }

    fn resolve_noun_or_verb(&self, tokens: &[Token], ambiguous: &[bool], i: usize) -> PartOfSpeech {
        let Some(prev) = i.checked_sub(1).map(|p| &tokens[p]) else {
            return PartOfSpeech::Noun;
        };

        if prev.lower == "to" {
            return PartOfSpeech::Verb;
        }

        match prev.pos {
            PartOfSpeech::Det | PartOfSpeech::Adj | PartOfSpeech::Num | PartOfSpeech::Adp => {
                PartOfSpeech::Noun
            }
            PartOfSpeech::Pron if self.lexicon.is_possessive(&prev.lower) => PartOfSpeech::Noun,
            PartOfSpeech::Pron if self.lexicon.is_subject(&prev.lower) => PartOfSpeech::Verb,
            PartOfSpeech::Aux | PartOfSpeech::Part => PartOfSpeech::Verb,
            PartOfSpeech::Verb if self.lexicon.is_aspectual(&prev.lower) => PartOfSpeech::Verb,
            PartOfSpeech::CConj if i >= 2 && ambiguous[i - 2] => tokens[i - 2].pos,
            _ => PartOfSpeech::Noun,
        }
    }
}

fn assign_roles(tokens: &mut [Token]) {
    let mut root_found = false;
    for token in tokens.iter_mut() {
        if token.is_sentence_break() {
            root_found = false;
            continue;
        }
        if !root_found && token.pos == PartOfSpeech::Verb {
            token.dep = DepRole::Root;
            root_found = true;
        }
    }

    for i in 0..tokens.len() {
        if tokens[i].pos != PartOfSpeech::Adj {
            continue;
        }
        let head = tokens[i + 1..]
            .iter()
            .find(|t| t.pos != PartOfSpeech::Adj);
        if matches!(head, Some(t) if t.pos == PartOfSpeech::Noun) {
            tokens[i].dep = DepRole::Amod;
        }
    }
}

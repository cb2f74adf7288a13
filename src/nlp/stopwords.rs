use std::collections::HashSet;

/// Function words and light verbs carrying no symptom content.
///
/// Body-part and position words ("back", "side", "top") stay out: they are
/// part of the phrases the weight table looks for.
const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "also", "am", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "are", "around", "as", "at", "be",
    "became", "because", "become", "becomes", "been", "before", "being", "both", "but", "by",
    "ca", "can", "cannot", "could", "did", "do", "does", "doing", "done", "during", "each",
    "either", "else", "even", "ever", "every", "for", "from", "further", "get", "gets",
    "getting", "got", "gotten", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "keep", "keeps", "kept", "keeping", "made", "make", "makes", "many", "may",
    "me", "might", "mine", "more", "most", "much", "must", "my", "myself", "n't", "neither",
    "no", "nor", "not", "now", "of", "often", "on", "once", "only", "or", "other", "our",
    "ours", "ourselves", "own", "quite", "rather", "really", "same", "seem", "seemed", "seems",
    "she", "should", "so", "some", "something", "still", "such", "than", "that", "the", "their",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "though", "through",
    "to", "too", "under", "until", "up", "us", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "yet", "you",
    "your", "yours", "yourself", "'d", "'ll", "'m", "'re", "'s", "'ve",
];

#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().copied())
    }
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Expects a lowercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Coarse universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Aux,
    Adj,
    Adv,
    Pron,
    Det,
    Adp,
    CConj,
    SConj,
    Part,
    Num,
    Intj,
    Punct,
    Other,
}

/// The only dependency labels the symptom patterns look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepRole {
    /// Main verb of its sentence.
    Root,
    /// Adjective modifying the noun that follows it.
    Amod,
    Dep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Lowercased, with typographic apostrophes folded to `'`.
    pub lower: String,
    /// Byte offsets into the source text.
    pub start: usize,
    pub end: usize,
    pub pos: PartOfSpeech,
    pub dep: DepRole,
}

impl Token {
    pub fn new(text: &str, start: usize) -> Self {
        Self {
            text: text.to_string(),
            lower: text.to_lowercase().replace('\u{2019}', "'"),
            start,
            end: start + text.len(),
            pos: PartOfSpeech::Other,
            dep: DepRole::Dep,
        }
    }

    pub fn is_sentence_break(&self) -> bool {
        self.pos == PartOfSpeech::Punct && matches!(self.lower.as_str(), "." | "!" | "?" | ";")
    }
}

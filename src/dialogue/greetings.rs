/// Canned conversational replies, checked in this order.
pub const GREETINGS: &[(&str, &str)] = &[
    ("hi", "Hello! How can I assist you today?"),
    ("hello", "Hi there! How can I help you?"),
    (
        "how are you",
        "I'm functioning well, thank you! How can I assist you with your health questions?",
    ),
    ("bye", "Take care! Remember, I'm here if you need any health information."),
    ("thanks", "You're welcome! Is there anything else I can help you with?"),
];

pub const WELCOME_BACK: &str = "Welcome back!";
pub const HELLO_GUEST: &str = "Hello! How can I assist you today?";
pub const GOODBYE: &str = "Goodbye!";

/// Word tokens of an already-lowercased utterance.
pub fn words(text_lower: &str) -> Vec<&str> {
    text_lower
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|w| !w.is_empty())
        .collect()
}

/// True when `keyword` appears as a whole word (or whole word sequence).
pub fn contains_keyword(words: &[&str], keyword: &str) -> bool {
    let needle: Vec<&str> = keyword.split_whitespace().collect();
    if needle.is_empty() || needle.len() > words.len() {
        return false;
    }
    words.windows(needle.len()).any(|w| w == needle.as_slice())
}

/// "hello" and "bye" are answered ahead of the table; "hello" depends on
/// whether the session is signed in.
pub fn match_greeting(text_lower: &str, signed_in: bool) -> Option<&'static str> {
    let words = words(text_lower);

    if contains_keyword(&words, "hello") {
        return Some(if signed_in { WELCOME_BACK } else { HELLO_GUEST });
    }
    if contains_keyword(&words, "bye") {
        return Some(GOODBYE);
    }

    GREETINGS
        .iter()
        .find(|(keyword, _)| contains_keyword(&words, keyword))
        .map(|(_, reply)| *reply)
}

use super::token::Token;

const CLITICS: &[&str] = &["s", "m", "re", "ve", "ll", "d"];

fn is_apostrophe(ch: char) -> bool {
    ch == '\'' || ch == '\u{2019}'
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || is_apostrophe(ch) || ch == '-'
}

/// Splits text into word and punctuation tokens with byte offsets.
///
/// Clitics are split off the way English treebanks do it:
/// "I've" -> "I" "'ve", "don't" -> "do" "n't".
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, ch) in text.char_indices() {
        if is_word_char(ch) {
            if word_start.is_none() {
                word_start = Some(i);
            }
            continue;
        }
        if let Some(start) = word_start.take() {
            push_word(&mut tokens, &text[start..i], start);
        }
        if !ch.is_whitespace() {
            tokens.push(Token::new(&text[i..i + ch.len_utf8()], i));
        }
    }
    if let Some(start) = word_start {
        push_word(&mut tokens, &text[start..], start);
    }

    tokens
}

fn push_word(tokens: &mut Vec<Token>, word: &str, offset: usize) {
    // Quotes and dashes hugging the word become punctuation.
    let mut start = 0;
    for (i, ch) in word.char_indices() {
        if is_apostrophe(ch) || ch == '-' {
            tokens.push(Token::new(&word[i..i + ch.len_utf8()], offset + i));
            start = i + ch.len_utf8();
        } else {
            break;
        }
    }
    let mut end = word.len();
    let mut trailing = Vec::new();
    while let Some(ch) = word[start..end].chars().next_back() {
        if ch != '-' && !is_apostrophe(ch) {
            break;
        }
        end -= ch.len_utf8();
        trailing.push(Token::new(&word[end..end + ch.len_utf8()], offset + end));
    }

    let core = &word[start..end];
    if !core.is_empty() {
        match clitic_split(core) {
            Some(split) => {
                tokens.push(Token::new(&core[..split], offset + start));
                tokens.push(Token::new(&core[split..], offset + start + split));
            }
            None => tokens.push(Token::new(core, offset + start)),
        }
    }

    tokens.extend(trailing.into_iter().rev());
}

/// Byte index where a trailing clitic starts, if any.
fn clitic_split(word: &str) -> Option<usize> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let n = chars.len();

    if n > 3 {
        let (n_at, n_ch) = chars[n - 3];
        let (_, apos) = chars[n - 2];
        let (_, t) = chars[n - 1];
        if n_ch.eq_ignore_ascii_case(&'n') && is_apostrophe(apos) && t.eq_ignore_ascii_case(&'t') {
            return Some(n_at);
        }
    }

    let (apos_at, _) = *chars.iter().rev().find(|(_, ch)| is_apostrophe(*ch))?;
    if apos_at == 0 {
        return None;
    }
    let suffix = word[apos_at..]
        .chars()
        .skip(1)
        .collect::<String>()
        .to_lowercase();
    if CLITICS.contains(&suffix.as_str()) {
        Some(apos_at)
    } else {
        None
    }
}

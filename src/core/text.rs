use regex::Regex;
use std::sync::LazyLock;

static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());
// Whitespace includes the \x1c-\x1f information separators.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http[^\s\x1c-\x1f]+").unwrap());
static NON_LETTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s\x1c-\x1f]").unwrap());
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x1c-\x1f]+").unwrap());

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Normalizes a tweet into the form the vectorizer was trained on.
///
/// Mentions and URLs must be stripped before punctuation.
pub fn clean_text(text: &str) -> String {
    let text = text.to_lowercase();
    let text = MENTION_REGEX.replace_all(&text, "");
    let text = URL_REGEX.replace_all(&text, "");
    let text = NON_LETTER_REGEX.replace_all(&text, "");
    WHITESPACE_REGEX
        .replace_all(&text, " ")
        .trim_matches(is_space)
        .to_string()
}

/// The only input gate: checked on the raw text, before cleaning.
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(is_space).is_empty()
}

use once_cell::sync::Lazy;
use regex::Regex;

/// Phrases that count as a call to action in a meta description
pub const CALL_TO_ACTION_PHRASES: [&str; 7] = [
    "learn more",
    "get started",
    "contact us",
    "call now",
    "visit",
    "click",
    "download",
];

// Cached patterns so every analysis reuses the same compiled automata
static HEADING_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h[1-6][\s>/]").expect("heading regex should be valid"));
static IMAGE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<img[\s>/]").expect("image regex should be valid"));
static INTERNAL_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bhref\s*=\s*["']?/([^/]|$)"#).expect("internal href regex should be valid")
});

/// Case-insensitive substring test. `needle` must already be lower-cased.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// True when any of the (lower-cased) keywords appears in `text`
pub fn contains_any_keyword<'a, I>(text: &str, keywords: I) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    let lowered = text.to_lowercase();
    keywords
        .into_iter()
        .any(|keyword| lowered.contains(keyword.as_str()))
}

pub fn has_call_to_action(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CALL_TO_ACTION_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A keyword edge that is a word character needs a non-word neighbour, like
/// `\b`. A punctuation edge (`c++`, `.net`) needs a neighbour that is
/// neither a word character nor a repeat of the edge itself.
fn edge_is_bounded(edge: Option<char>, neighbour: Option<char>) -> bool {
    match (edge, neighbour) {
        (_, None) | (None, _) => true,
        (Some(edge), Some(next)) if is_word_char(edge) => !is_word_char(next),
        (Some(edge), Some(next)) => !is_word_char(next) && next != edge,
    }
}

/// Counts case-insensitive whole-word occurrences of `word` in `text`.
/// Words of a multi-word keyword may be separated by any run of whitespace.
pub fn count_whole_word(text: &str, word: &str) -> usize {
    let tokens: Vec<String> = word.split_whitespace().map(regex::escape).collect();
    if tokens.is_empty() {
        return 0;
    }

    let pattern = match Regex::new(&format!("(?i){}", tokens.join(r"\s+"))) {
        Ok(pattern) => pattern,
        Err(e) => {
            tracing::warn!(word = %word, error = %e, "Could not build keyword pattern");
            return 0;
        }
    };

    let word = word.trim();
    let first = word.chars().next();
    let last = word.chars().next_back();

    let mut count = 0;
    let mut pos = 0;
    while let Some(found) = pattern.find_at(text, pos) {
        let before = text[..found.start()].chars().next_back();
        let after = text[found.end()..].chars().next();

        if edge_is_bounded(first, before) && edge_is_bounded(last, after) {
            count += 1;
            pos = found.end();
        } else {
            // retry one character further so an overlapping match is not lost
            pos = found.start() + text[found.start()..].chars().next().map_or(1, char::len_utf8);
        }

        if pos > text.len() {
            break;
        }
    }
    count
}

pub fn has_heading_markup(content: &str) -> bool {
    HEADING_TAG.is_match(content)
}

pub fn has_image_markup(content: &str) -> bool {
    IMAGE_TAG.is_match(content)
}

/// True for an `href` whose value starts with `/` but not `//`
pub fn has_internal_link_markup(content: &str) -> bool {
    INTERNAL_HREF.is_match(content)
}

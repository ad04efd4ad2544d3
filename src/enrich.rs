//! Per-message text features.
//!
//! Pure functions computing the text-derived fields of a
//! [`MessageRecord`](crate::record::MessageRecord): word, link and emoji
//! counts. Date-derived fields live on [`Calendar`](crate::record::Calendar).

use std::sync::LazyLock;

use regex::Regex;

/// Scheme-optional link heuristic.
///
/// Anything with an explicit scheme is a link. Without a scheme, a dotted
/// host name must end in a known top-level domain, which keeps `e.g.` and
/// `v1.2` out while catching `www.example.com` and `bit.ly/x`.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?ix)
        \b(?:
            (?:https?|ftp)://[^\s<>"]+
          |
            (?:www\.)?
            (?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+
            (?:com|org|net|edu|gov|mil|int|info|biz|io|co|in|uk|us|ca|au|de|fr|es|it|nl|ru|br|jp|cn|me|tv|ly|gl|be|ai|app|dev|xyz|site|online|tech|store|blog|news)
            \b
            (?::\d{2,5})?
            (?:/[^\s<>"]*)?
        )"#,
    )
    .expect("URL pattern is valid")
});

/// One emoji: a flag pair, a keycap, or a pictograph with its modifiers,
/// variation selectors, tags and ZWJ-joined continuations.
static EMOJI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        [\x{1F1E6}-\x{1F1FF}]{2}
      | [\#*0-9]\x{FE0F}?\x{20E3}
      | \p{Extended_Pictographic}
        [\x{FE0F}\x{1F3FB}-\x{1F3FF}\x{E0020}-\x{E007F}]*
        (?:\x{200D}\p{Extended_Pictographic}[\x{FE0F}\x{1F3FB}-\x{1F3FF}]*)*
        ",
    )
    .expect("emoji pattern is valid")
});

/// Trailing characters that are punctuation around a link, not part of it.
const LINK_TRAILERS: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '\'', '"'];

/// Counts whitespace-delimited tokens.
///
/// ```
/// use chatstat::enrich::word_count;
///
/// assert_eq!(word_count("Hello there"), 2);
/// assert_eq!(word_count("  "), 0);
/// assert_eq!(word_count("<Media omitted>"), 2);
/// ```
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Returns every link found in the text, trailing punctuation stripped.
///
/// ```
/// use chatstat::enrich::find_urls;
///
/// let urls = find_urls("see https://example.com/a, or www.rust-lang.org.");
/// assert_eq!(urls, vec!["https://example.com/a", "www.rust-lang.org"]);
/// ```
pub fn find_urls(text: &str) -> Vec<&str> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(LINK_TRAILERS))
        .filter(|url| !url.is_empty())
        .collect()
}

/// Counts links in the text.
pub fn url_count(text: &str) -> usize {
    find_urls(text).len()
}

/// Returns every emoji in the text, in order of appearance.
///
/// Multi-code-point sequences (skin tones, families, flags) are returned
/// as one item.
pub fn find_emojis(text: &str) -> Vec<&str> {
    EMOJI_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Counts emoji in the text.
///
/// ```
/// use chatstat::enrich::emoji_count;
///
/// assert_eq!(emoji_count("good morning 😀🔥"), 2);
/// assert_eq!(emoji_count("👨‍👩‍👧‍👦"), 1);
/// assert_eq!(emoji_count("no emoji, 123"), 0);
/// ```
pub fn emoji_count(text: &str) -> usize {
    EMOJI_PATTERN.find_iter(text).count()
}

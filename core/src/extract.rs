use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WEIGHTED_TAGS: Selector =
        Selector::parse("h1, h2, h3, title, b, p").expect("valid selector");
    static ref ALNUM: Regex = Regex::new(r"^[\p{L}\p{N}]+$").expect("valid regex");
}

/// Structural tags that contribute text to the index. Anything outside this
/// set is never scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    H1,
    H2,
    H3,
    Title,
    Bold,
    Paragraph,
}

impl TagKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "h1" => Some(TagKind::H1),
            "h2" => Some(TagKind::H2),
            "h3" => Some(TagKind::H3),
            "title" => Some(TagKind::Title),
            "b" => Some(TagKind::Bold),
            "p" => Some(TagKind::Paragraph),
            _ => None,
        }
    }

    /// Structural weight applied to every word inside this tag.
    pub fn importance(self) -> f32 {
        match self {
            TagKind::H1 | TagKind::Title => 3.0,
            TagKind::H2 | TagKind::H3 => 2.0,
            TagKind::Bold => 1.5,
            TagKind::Paragraph => 1.0,
        }
    }
}

/// Outcome of scanning one document's markup. Malformed markup never fails;
/// it downgrades to `Degraded` with whatever tokens the parser recovered.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Clean(Vec<(String, f32)>),
    Degraded(Vec<(String, f32)>),
}

impl Extraction {
    pub fn tokens(&self) -> &[(String, f32)] {
        match self {
            Extraction::Clean(t) | Extraction::Degraded(t) => t,
        }
    }

    pub fn into_tokens(self) -> Vec<(String, f32)> {
        match self {
            Extraction::Clean(t) | Extraction::Degraded(t) => t,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Extraction::Degraded(_))
    }
}

/// Extract `(raw_word, importance)` pairs from an HTML fragment.
///
/// Matched elements are visited in document order and contribute their full
/// descendant text, so a `<b>` nested in a `<p>` is seen twice, once at each
/// weight. Words are NFKC-normalized, lowercased, and kept only if entirely
/// alphanumeric.
pub fn extract(markup: &str) -> Extraction {
    let fragment = Html::parse_fragment(markup);
    let mut tokens = Vec::new();
    for element in fragment.select(&WEIGHTED_TAGS) {
        // The selector is closed over the allow-list, so the fallback weight
        // (paragraph) is unreachable in practice.
        let kind = TagKind::from_name(element.value().name()).unwrap_or(TagKind::Paragraph);
        let text: String = element.text().collect();
        for word in filter_words(&text) {
            tokens.push((word, kind.importance()));
        }
    }
    if fragment.errors.is_empty() {
        Extraction::Clean(tokens)
    } else {
        tracing::debug!(errors = fragment.errors.len(), "markup parsed with recoverable errors");
        Extraction::Degraded(tokens)
    }
}

fn filter_words(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    normalized
        .split_whitespace()
        .filter(|w| ALNUM.is_match(w))
        .map(str::to_string)
        .collect()
}

use crate::extractor::trim_to_complete_url;

/// The distinct literal spellings of one candidate URL that must all map
/// to the same local asset.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlVariants {
    /// The match exactly as it appeared in the document.
    pub raw: String,
    /// The match trimmed of embedded markup, with one trailing `&` stripped.
    pub cleaned: String,
    /// The cleaned form with HTML entities decoded (e.g. `&amp;` -> `&`).
    /// This is the form the fetcher is given.
    pub decoded: String,
}

/// Derive the variant set for a raw match.
pub fn variants(raw: &str) -> UrlVariants {
    let mut cleaned = trim_to_complete_url(raw).to_string();

    if cleaned.ends_with('&') {
        cleaned.pop();
    }

    let decoded = html_escape::decode_html_entities(&cleaned).into_owned();

    UrlVariants {
        raw: raw.to_string(),
        cleaned,
        decoded,
    }
}

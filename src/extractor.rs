/// HTML markers that can terminate a URL match. The single-character
/// delimiters also stop the scan itself; the compound closing tags only
/// show up spliced into a match when the surrounding markup is malformed.
const HTML_TERMINATORS: [&str; 6] = ["<", ">", "\"", "'", "</a>", "</span>"];

#[derive(Debug, Clone)]
pub struct UrlExtractor {
    host_prefix: String,
}

impl UrlExtractor {
    pub fn new(host_prefix: &str) -> Self {
        Self {
            host_prefix: host_prefix.to_string(),
        }
    }

    /// Scan the document for candidate resource URLs: every occurrence of
    /// the host prefix extended greedily until the first whitespace, `<`,
    /// `>`, `"` or `'` byte. Matches are ordered and non-overlapping, and
    /// a match must extend at least one character past the prefix.
    /// Duplicates are kept; deduplication is the caller's responsibility.
    pub fn extract<'a>(&self, content: &'a str) -> Vec<&'a str> {
        let mut matches = Vec::new();
        let bytes = content.as_bytes();
        let mut pos = 0;

        while let Some(found) = content[pos..].find(&self.host_prefix) {
            let start = pos + found;
            let mut end = start + self.host_prefix.len();

            while end < bytes.len() && !is_url_terminator(bytes[end]) {
                end += 1;
            }

            // A bare prefix with nothing after it is not a resource URL
            if end > start + self.host_prefix.len() {
                matches.push(&content[start..end]);
            }

            pos = end;
        }

        matches
    }
}

fn is_url_terminator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || matches!(byte, b'<' | b'>' | b'"' | b'\'')
}

/// Trim a raw match at the earliest HTML boundary marker found at a
/// position greater than zero; the leftmost marker wins. Returns the
/// match unchanged when no marker is present.
pub fn trim_to_complete_url(raw: &str) -> &str {
    let mut earliest = raw.len();

    for marker in HTML_TERMINATORS {
        if let Some(pos) = raw.find(marker) {
            if pos > 0 && pos < earliest {
                earliest = pos;
            }
        }
    }

    &raw[..earliest]
}

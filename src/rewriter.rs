use std::collections::HashMap;

/// Accumulated mapping from every known literal URL spelling to its local
/// replacement path. Built incrementally while candidates are processed,
/// then applied once to the whole document.
#[derive(Debug, Default, Clone)]
pub struct Replacements {
    map: HashMap<String, String>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, literal: &str) -> bool {
        self.map.contains_key(literal)
    }

    /// Associate a literal spelling with a local path. Existing entries
    /// win: later candidates skip strings that are already mapped.
    pub fn insert(&mut self, literal: &str, local_path: &str) {
        self.map
            .entry(literal.to_string())
            .or_insert_with(|| local_path.to_string());
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Keys longest-first, so a short key that is a substring of a longer
    /// one can never corrupt the longer key's occurrences. Ties are broken
    /// arbitrarily.
    pub fn ordered_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .map
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort_by_key(|(literal, _)| std::cmp::Reverse(literal.len()));
        pairs
    }

    /// Rewrite the document: global literal replacement of every key by its
    /// local path, applied longest key first against the current state of
    /// the buffer.
    pub fn apply(&self, content: &str) -> String {
        let mut result = content.to_string();

        for (literal, local_path) in self.ordered_pairs() {
            result = result.replace(literal, local_path);
        }

        result
    }
}

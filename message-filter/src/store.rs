//! In-memory set of normalized banned words.

use std::collections::HashSet;

use crate::normalize::NormalizedText;

/// Normalized banned words, unique by byte content.
///
/// Never holds an empty key: an empty needle would match every message.
#[derive(Debug, Clone, Default)]
pub struct BannedWords {
    words: HashSet<Vec<u8>>,
}

impl BannedWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a normalized word. Returns `true` if it was not present yet.
    /// Empty words are ignored.
    pub fn insert(&mut self, word: NormalizedText) -> bool {
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.into_bytes())
    }

    /// Remove a normalized word. Returns `true` if it was present.
    pub fn remove(&mut self, word: &[u8]) -> bool {
        self.words.remove(word)
    }

    pub fn contains(&self, word: &[u8]) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Keys in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.words.iter().map(Vec::as_slice)
    }

    /// Every key as raw bytes, sorted bytewise. Lossless.
    pub fn to_sorted_bytes(&self) -> Vec<Vec<u8>> {
        let mut out: Vec<Vec<u8>> = self.words.iter().cloned().collect();
        out.sort();
        out
    }

    /// Lossy UTF-8 rendering of every key, sorted for stable output.
    ///
    /// Keys holding invalid UTF-8 render with U+FFFD, so two distinct keys can
    /// print the same. Use [`to_sorted_bytes`](Self::to_sorted_bytes) when the
    /// exact keys matter.
    pub fn to_sorted_strings(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .iter()
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .collect();
        out.sort();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn insert_is_idempotent() {
        let mut set = BannedWords::new();
        assert!(set.insert(normalize("Spam")));
        assert!(!set.insert(normalize("s.p.a.m")));
        assert_eq!(set.len(), 1);
        assert!(set.contains(b"spam"));
    }

    #[test]
    fn empty_keys_are_never_stored() {
        let mut set = BannedWords::new();
        assert!(!set.insert(normalize("- -")));
        assert!(set.is_empty());
    }

    #[test]
    fn remove_reports_presence() {
        let mut set = BannedWords::new();
        set.insert(normalize("scam"));
        assert!(!set.remove(b"spam"));
        assert!(set.remove(b"scam"));
        assert!(set.is_empty());
    }

    #[test]
    fn sorted_bytes_keep_keys_distinct() {
        let mut set = BannedWords::new();
        set.insert(normalize(b"\xE1AAx"));
        set.insert(normalize(b"\xE0AAx"));
        assert_eq!(
            set.to_sorted_bytes(),
            vec![b"\xE0AAx".to_vec(), b"\xE1AAx".to_vec()]
        );
    }

    #[test]
    fn sorted_strings_are_deterministic() {
        let mut set = BannedWords::new();
        for w in ["zeta", "alpha", "mid"] {
            set.insert(normalize(w));
        }
        assert_eq!(set.to_sorted_strings(), vec!["alpha", "mid", "zeta"]);
    }
}

//! Literal substring matching over normalized bytes.

/// Byte-exact substring test, equivalent to a naive window scan.
/// An empty needle never matches.
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// First word found inside `message`, in iteration order of `words`.
pub fn first_match<'a, I>(message: &[u8], words: I) -> Option<&'a [u8]>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    words.into_iter().find(|w| contains(message, w))
}

/// Every word found inside `message`.
pub fn all_matches<'a, I>(message: &[u8], words: I) -> Vec<&'a [u8]>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    words.into_iter().filter(|w| contains(message, w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_literal_substrings() {
        assert!(contains(b"thisisatestmessage", b"test"));
        assert!(contains(b"test", b"test"));
        assert!(!contains(b"tset", b"test"));
        assert!(!contains(b"tes", b"test"));
    }

    #[test]
    fn empty_needle_never_matches() {
        assert!(!contains(b"anything", b""));
        assert!(!contains(b"", b""));
    }

    #[test]
    fn overlapping_prefix_does_not_hide_match() {
        assert!(contains(b"aaab", b"aab"));
    }

    #[test]
    fn collects_every_match() {
        let words: Vec<&[u8]> = vec![&b"spam"[..], &b"ham"[..], &b"eggs"[..]];
        let mut found = all_matches(b"spamandham", words.iter().copied());
        found.sort();
        assert_eq!(found, vec![&b"ham"[..], &b"spam"[..]]);
        assert_eq!(first_match(b"eggsonly", words.iter().copied()), Some(&b"eggs"[..]));
        assert_eq!(first_match(b"nothing", words.iter().copied()), None);
    }
}

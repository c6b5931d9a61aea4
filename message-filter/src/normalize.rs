//! Byte-level normalization used for both banned words and checked messages.
//!
//! Policy:
//! - ASCII: drop noise characters (space `.` `-` `_` `*`), lowercase the rest.
//! - Two-byte sequences: fold homoglyphs to a lowercase Latin letter, keep other
//!   Cyrillic as-is, drop everything else.
//! - Three- and four-byte sequences: copied through undecoded.
//! - Stray or truncated lead bytes: skipped one byte at a time.
//!
//! Input does not have to be valid UTF-8. Each rule emits at most as many bytes
//! as it consumes, so output never outgrows input.
//!
//! Two-byte sequences outside the Cyrillic block (Latin-1 accents, Greek, ...)
//! are dropped while longer sequences survive. That asymmetry is long-standing
//! behavior of the filter and banned lists rely on it.

use std::borrow::Cow;
use std::fmt;

use crate::homoglyph;

/// Characters removed so `b.a-d` and `b a d` compare equal to `bad`.
pub const NOISE: [u8; 5] = *b" .-_*";

pub fn is_noise(byte: u8) -> bool {
    NOISE.contains(&byte)
}

/// Owned result of [`normalize`]. 8-bit clean; length is the byte length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(Vec<u8>);

impl NormalizedText {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Lossy UTF-8 view for display and reporting.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl AsRef<[u8]> for NormalizedText {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Normalize `input` into its canonical comparable form.
pub fn normalize(input: impl AsRef<[u8]>) -> NormalizedText {
    let input = input.as_ref();
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0usize;

    while i < input.len() {
        let lead = input[i];
        let remaining = input.len() - i;

        if lead < 0x80 {
            if !is_noise(lead) {
                out.push(lead.to_ascii_lowercase());
            }
            i += 1;
        } else if lead & 0xE0 == 0xC0 && remaining >= 2 {
            let codepoint = (u32::from(lead & 0x1F) << 6) | u32::from(input[i + 1] & 0x3F);
            if let Some(latin) = homoglyph::lookup(codepoint) {
                out.push(latin.to_ascii_lowercase());
            } else if homoglyph::is_cyrillic(codepoint) {
                out.extend_from_slice(&input[i..i + 2]);
            }
            i += 2;
        } else if lead & 0xF0 == 0xE0 && remaining >= 3 {
            out.extend_from_slice(&input[i..i + 3]);
            i += 3;
        } else if lead & 0xF8 == 0xF0 && remaining >= 4 {
            out.extend_from_slice(&input[i..i + 4]);
            i += 4;
        } else {
            i += 1;
        }
    }

    NormalizedText(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        normalize(s).to_string_lossy().into_owned()
    }

    #[test]
    fn ascii_is_lowercased_and_noise_stripped() {
        assert_eq!(norm("Hello World"), "helloworld");
        assert_eq!(norm("b.a-d_w*o r d"), "badword");
        assert_eq!(norm("a!b?c"), "a!b?c");
    }

    #[test]
    fn cyrillic_homoglyphs_fold_to_latin() {
        assert_eq!(norm("хуй"), "xui");
        assert_eq!(norm("ТЕСТ"), "test");
        assert_eq!(norm("Спам"), "spam");
    }

    #[test]
    fn unmapped_cyrillic_passes_through() {
        assert_eq!(norm("жук"), "жuk");
        assert_eq!(norm("Ш"), "Ш");
    }

    #[test]
    fn non_cyrillic_two_byte_sequences_are_dropped() {
        assert_eq!(norm("café"), "caf");
        assert_eq!(norm("ßigma"), "igma");
    }

    #[test]
    fn three_and_four_byte_sequences_are_copied() {
        assert_eq!(norm("a€b"), "a€b");
        assert_eq!(norm("x😀y"), "x😀y");
        assert_eq!(norm("漢字"), "漢字");
    }

    #[test]
    fn malformed_bytes_are_skipped() {
        assert!(normalize(b"\xD0").is_empty());
        assert_eq!(normalize(b"\x80ab\xFF").as_bytes(), b"ab");
        assert_eq!(normalize(b"\xE2\x82").as_bytes(), b"");
        assert_eq!(normalize(b"a\xF0\x9F\x98").as_bytes(), b"a");
    }

    #[test]
    fn copied_sequences_keep_their_bytes_verbatim() {
        // continuation bytes are not validated, so ASCII inside a copied unit survives
        assert_eq!(normalize(b"\xE0. ").as_bytes(), b"\xE0. ");
        assert_eq!(normalize(b"\xD0A").as_bytes(), b"\xD0A");
        assert_eq!(normalize(b"\xF0A-*").as_bytes(), b"\xF0A-*");
    }

    #[test]
    fn noise_only_input_is_empty() {
        assert!(normalize(" .-_* ").is_empty());
    }
}

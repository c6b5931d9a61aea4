//! Curated Cyrillic to Latin homoglyph table.
//!
//! Policy:
//! - Visual mapping where the glyphs are indistinguishable (Х, О, А).
//! - Phonetic mapping everywhere else, so transliterated spellings fold to the
//!   same key as look-alike ones (С is `s`, not `c`; Н is `n`, not `h`).
//!
//! Only code points listed here are folded. Other Cyrillic letters pass through
//! the normalizer untouched.

use std::ops::RangeInclusive;

/// Cyrillic Unicode block.
pub const CYRILLIC_BLOCK: RangeInclusive<u32> = 0x0400..=0x04FF;

/// One table row: a Cyrillic code point and the Latin letter it folds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomoglyphEntry {
    pub cyrillic: u32,
    pub latin: u8,
}

const fn entry(cyrillic: u32, latin: u8) -> HomoglyphEntry {
    HomoglyphEntry { cyrillic, latin }
}

static TABLE: &[HomoglyphEntry] = &[
    // visual
    entry(0x0425, b'X'), entry(0x0445, b'x'), // Х х
    entry(0x041E, b'O'), entry(0x043E, b'o'), // О о
    entry(0x0410, b'A'), entry(0x0430, b'a'), // А а
    // phonetic, where the shape would suggest a different letter
    entry(0x0421, b'S'), entry(0x0441, b's'), // С с
    entry(0x0412, b'V'), entry(0x0432, b'v'), // В в
    entry(0x041D, b'N'), entry(0x043D, b'n'), // Н н
    entry(0x0420, b'R'), entry(0x0440, b'r'), // Р р
    // phonetic
    entry(0x0415, b'E'), entry(0x0435, b'e'), // Е е
    entry(0x0418, b'I'), entry(0x0438, b'i'), // И и
    entry(0x0419, b'I'), entry(0x0439, b'i'), // Й й
    entry(0x0423, b'U'), entry(0x0443, b'u'), // У у
    entry(0x0411, b'B'), entry(0x0431, b'b'), // Б б
    entry(0x0413, b'G'), entry(0x0433, b'g'), // Г г
    entry(0x0414, b'D'), entry(0x0434, b'd'), // Д д
    entry(0x0417, b'Z'), entry(0x0437, b'z'), // З з
    entry(0x041A, b'K'), entry(0x043A, b'k'), // К к
    entry(0x041B, b'L'), entry(0x043B, b'l'), // Л л
    entry(0x041C, b'M'), entry(0x043C, b'm'), // М м
    entry(0x041F, b'P'), entry(0x043F, b'p'), // П п
    entry(0x0422, b'T'), entry(0x0442, b't'), // Т т
    entry(0x0424, b'F'), entry(0x0444, b'f'), // Ф ф
    entry(0x0406, b'I'), entry(0x0456, b'i'), // І і
];

/// Latin letter for `codepoint`, if the table folds it. Case is kept as listed.
pub fn lookup(codepoint: u32) -> Option<u8> {
    TABLE
        .iter()
        .find(|e| e.cyrillic == codepoint)
        .map(|e| e.latin)
}

/// The full static table.
pub fn entries() -> &'static [HomoglyphEntry] {
    TABLE
}

pub fn is_cyrillic(codepoint: u32) -> bool {
    CYRILLIC_BLOCK.contains(&codepoint)
}

// src/fonts/tables.rs
//! Glyph tables for the styles that cannot be expressed as a codepoint offset.

use std::collections::HashMap;
use lazy_static::lazy_static;

const BUBBLES: &[(char, char)] = &[
    ('A', 'Ⓐ'), ('B', 'Ⓑ'), ('C', 'Ⓒ'), ('D', 'Ⓓ'), ('E', 'Ⓔ'), ('F', 'Ⓕ'), ('G', 'Ⓖ'),
    ('H', 'Ⓗ'), ('I', 'Ⓘ'), ('J', 'Ⓙ'), ('K', 'Ⓚ'), ('L', 'Ⓛ'), ('M', 'Ⓜ'), ('N', 'Ⓝ'),
    ('O', 'Ⓞ'), ('P', 'Ⓟ'), ('Q', 'Ⓠ'), ('R', 'Ⓡ'), ('S', 'Ⓢ'), ('T', 'Ⓣ'), ('U', 'Ⓤ'),
    ('V', 'Ⓥ'), ('W', 'Ⓦ'), ('X', 'Ⓧ'), ('Y', 'Ⓨ'), ('Z', 'Ⓩ'),
    ('a', 'ⓐ'), ('b', 'ⓑ'), ('c', 'ⓒ'), ('d', 'ⓓ'), ('e', 'ⓔ'), ('f', 'ⓕ'), ('g', 'ⓖ'),
    ('h', 'ⓗ'), ('i', 'ⓘ'), ('j', 'ⓙ'), ('k', 'ⓚ'), ('l', 'ⓛ'), ('m', 'ⓜ'), ('n', 'ⓝ'),
    ('o', 'ⓞ'), ('p', 'ⓟ'), ('q', 'ⓠ'), ('r', 'ⓡ'), ('s', 'ⓢ'), ('t', 'ⓣ'), ('u', 'ⓤ'),
    ('v', 'ⓥ'), ('w', 'ⓦ'), ('x', 'ⓧ'), ('y', 'ⓨ'), ('z', 'ⓩ'),
];

// Unicode has no squared lowercase; both cases share the capital glyph.
// `G` is U+1F136 (squared G). Older copies of this table carried U+1F13F
// (squared P) there.
const SQUARES: &[(char, char)] = &[
    ('A', '🄰'), ('B', '🄱'), ('C', '🄲'), ('D', '🄳'), ('E', '🄴'), ('F', '🄵'), ('G', '🄶'),
    ('H', '🄷'), ('I', '🄸'), ('J', '🄹'), ('K', '🄺'), ('L', '🄻'), ('M', '🄼'), ('N', '🄽'),
    ('O', '🄾'), ('P', '🄿'), ('Q', '🅀'), ('R', '🅁'), ('S', '🅂'), ('T', '🅃'), ('U', '🅄'),
    ('V', '🅅'), ('W', '🅆'), ('X', '🅇'), ('Y', '🅈'), ('Z', '🅉'),
    ('a', '🄰'), ('b', '🄱'), ('c', '🄲'), ('d', '🄳'), ('e', '🄴'), ('f', '🄵'), ('g', '🄶'),
    ('h', '🄷'), ('i', '🄸'), ('j', '🄹'), ('k', '🄺'), ('l', '🄻'), ('m', '🄼'), ('n', '🄽'),
    ('o', '🄾'), ('p', '🄿'), ('q', '🅀'), ('r', '🅁'), ('s', '🅂'), ('t', '🅃'), ('u', '🅄'),
    ('v', '🅅'), ('w', '🅆'), ('x', '🅇'), ('y', '🅈'), ('z', '🅉'),
];

// Lowercase keys only; lookups fold case first.
const SMALL_CAPS: &[(char, char)] = &[
    ('a', 'ᴀ'), ('b', 'ʙ'), ('c', 'ᴄ'), ('d', 'ᴅ'), ('e', 'ᴇ'), ('f', 'ғ'), ('g', 'ɢ'),
    ('h', 'ʜ'), ('i', 'ɪ'), ('j', 'ᴊ'), ('k', 'ᴋ'), ('l', 'ʟ'), ('m', 'ᴍ'), ('n', 'ɴ'),
    ('o', 'ᴏ'), ('p', 'ᴘ'), ('q', 'ǫ'), ('r', 'ʀ'), ('s', 's'), ('t', 'ᴛ'), ('u', 'ᴜ'),
    ('v', 'ᴠ'), ('w', 'ᴡ'), ('x', 'x'), ('y', 'ʏ'), ('z', 'ᴢ'),
];

const UPSIDE_DOWN: &[(char, char)] = &[
    ('a', 'ɐ'), ('b', 'q'), ('c', 'ɔ'), ('d', 'p'), ('e', 'ǝ'), ('f', 'ɟ'), ('g', 'ƃ'),
    ('h', 'ɥ'), ('i', 'ᴉ'), ('j', 'ɾ'), ('k', 'ʞ'), ('l', 'l'), ('m', 'ɯ'), ('n', 'u'),
    ('o', 'o'), ('p', 'd'), ('q', 'b'), ('r', 'ɹ'), ('s', 's'), ('t', 'ʇ'), ('u', 'n'),
    ('v', 'ʌ'), ('w', 'ʍ'), ('x', 'x'), ('y', 'ʎ'), ('z', 'z'),
    ('A', '∀'), ('B', 'B'), ('C', 'Ɔ'), ('D', 'D'), ('E', 'Ǝ'), ('F', 'Ⅎ'), ('G', 'פ'),
    ('H', 'H'), ('I', 'I'), ('J', 'ſ'), ('K', 'ʞ'), ('L', '˥'), ('M', 'W'), ('N', 'N'),
    ('O', 'O'), ('P', 'Ԁ'), ('Q', 'Ό'), ('R', 'ᴚ'), ('S', 'S'), ('T', '⊥'), ('U', '∩'),
    ('V', 'Λ'), ('W', 'M'), ('X', 'X'), ('Y', '⅄'), ('Z', 'Z'),
];

lazy_static! {
    static ref BUBBLES_MAP: HashMap<char, char> = BUBBLES.iter().copied().collect();
    static ref SQUARES_MAP: HashMap<char, char> = SQUARES.iter().copied().collect();
    static ref SMALL_CAPS_MAP: HashMap<char, char> = SMALL_CAPS.iter().copied().collect();
    static ref UPSIDE_DOWN_MAP: HashMap<char, char> = UPSIDE_DOWN.iter().copied().collect();
}

/// Identifies one of the static glyph tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphTable {
    Bubbles,
    Squares,
    SmallCaps,
    UpsideDown,
}

impl GlyphTable {
    pub fn map(&self) -> &'static HashMap<char, char> {
        match self {
            GlyphTable::Bubbles => &*BUBBLES_MAP,
            GlyphTable::Squares => &*SQUARES_MAP,
            GlyphTable::SmallCaps => &*SMALL_CAPS_MAP,
            GlyphTable::UpsideDown => &*UPSIDE_DOWN_MAP,
        }
    }

    pub fn lookup(&self, c: char) -> Option<char> {
        self.map().get(&c).copied()
    }
}

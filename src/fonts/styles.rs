// src/fonts/styles.rs
use crate::fonts::tables::GlyphTable;

/// How a style rewrites text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Shift ASCII letters into a contiguous Unicode alphabet block.
    Offset { base: u32, lowercase_offset: u32 },
    /// Substitute letters from a glyph table. `fold_case` lower-cases the
    /// key before lookup; `reverse` flips the order of the result.
    Lookup { table: GlyphTable, fold_case: bool, reverse: bool },
}

impl Transform {
    pub fn apply(&self, text: &str) -> String {
        match *self {
            Transform::Offset { base, lowercase_offset } => char_map(text, base, lowercase_offset),
            Transform::Lookup { table, fold_case, reverse } => {
                let substitute = |c: char| {
                    let key = if fold_case { c.to_ascii_lowercase() } else { c };
                    table.lookup(key).unwrap_or(c)
                };
                if reverse {
                    text.chars().rev().map(substitute).collect()
                } else {
                    text.chars().map(substitute).collect()
                }
            }
        }
    }
}

/// Remap ASCII letters into the block starting at `base`.
///
/// `A..Z` become `base..base+25`, `a..z` become
/// `base+lowercase_offset..`; every other character is kept.
pub fn char_map(text: &str, base: u32, lowercase_offset: u32) -> String {
    text.chars()
        .map(|c| {
            let code = match c {
                'A'..='Z' => base + (c as u32 - 'A' as u32),
                'a'..='z' => base + lowercase_offset + (c as u32 - 'a' as u32),
                _ => return c,
            };
            char::from_u32(code).unwrap_or(c)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub transform: Transform,
}

impl StyleDefinition {
    pub fn apply(&self, text: &str) -> String {
        self.transform.apply(text)
    }
}

const fn offset(id: &'static str, name: &'static str, base: u32) -> StyleDefinition {
    StyleDefinition {
        id,
        name,
        transform: Transform::Offset { base, lowercase_offset: 26 },
    }
}

const fn lookup(id: &'static str, name: &'static str, table: GlyphTable, fold_case: bool, reverse: bool) -> StyleDefinition {
    StyleDefinition {
        id,
        name,
        transform: Transform::Lookup { table, fold_case, reverse },
    }
}

/// Every style, in render order.
pub static STYLES: [StyleDefinition; 15] = [
    offset("bold-serif", "Bold Serif", 0x1D400),
    offset("italic-serif", "Italic Serif", 0x1D434),
    offset("bold-italic-serif", "Bold Italic", 0x1D468),
    offset("script", "Script", 0x1D49C),
    offset("bold-script", "Bold Script", 0x1D4D0),
    offset("fraktur", "Fraktur / Gothic", 0x1D504),
    offset("bold-fraktur", "Bold Fraktur", 0x1D56C),
    offset("double-struck", "Double Struck (Outline)", 0x1D538),
    offset("sans-bold", "Sans Bold", 0x1D5D4),
    offset("sans-italic", "Sans Italic", 0x1D608),
    offset("monospace", "Monospace", 0x1D670),
    lookup("bubbles", "Bubbles", GlyphTable::Bubbles, false, false),
    lookup("squares", "Squares", GlyphTable::Squares, false, false),
    lookup("small-caps", "Small Caps", GlyphTable::SmallCaps, true, false),
    lookup("reversed", "Reversed", GlyphTable::UpsideDown, false, true),
];

// src/fonts/mod.rs
//! Decorative Unicode renderings of plain text.
//!
//! The engine is literal: empty input produces empty output for every
//! style. Substituting a placeholder for blank input is left to the caller
//! (see [`crate::core::Config::font_input`]).

pub mod styles;
pub mod tables;

pub use styles::{char_map, StyleDefinition, Transform, STYLES};

use crate::models::GeneratedResult;

/// Render `text` in every registered style, in registry order.
pub fn apply_all(text: &str) -> Vec<GeneratedResult> {
    STYLES.iter().map(|style| render(style, text)).collect()
}

pub fn find_style(id: &str) -> Option<&'static StyleDefinition> {
    STYLES.iter().find(|style| style.id == id)
}

/// Render `text` in a single style, or `None` for an unknown id.
pub fn apply_style(id: &str, text: &str) -> Option<GeneratedResult> {
    find_style(id).map(|style| render(style, text))
}

fn render(style: &StyleDefinition, text: &str) -> GeneratedResult {
    GeneratedResult {
        style_id: style.id.to_string(),
        style_name: style.name.to_string(),
        text: style.apply(text),
    }
}

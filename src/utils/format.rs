// src/utils/format.rs

// Render a score as a fixed-width meter, e.g. "███░░" for 3 of 5
pub fn strength_meter(score: u8, max: u8) -> String {
    let filled = score.min(max) as usize;
    let empty = max as usize - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

// Format an entropy estimate for display
pub fn format_entropy(bits: f64) -> String {
    format!("{:.1} bits", bits)
}

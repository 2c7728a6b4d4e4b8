// src/models.rs
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 32;

/// Strength tier shown next to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    Empty,
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Tier for a non-empty password, indexed directly by score.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLabel::VeryWeak,
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Moderate,
            3 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn color(&self) -> console::Color {
        match self {
            StrengthLabel::Empty => console::Color::White,
            StrengthLabel::VeryWeak => console::Color::Red,
            StrengthLabel::Weak => console::Color::Magenta,
            StrengthLabel::Moderate => console::Color::Yellow,
            StrengthLabel::Strong => console::Color::Cyan,
            StrengthLabel::VeryStrong => console::Color::Green,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::Empty => write!(f, "Empty"),
            StrengthLabel::VeryWeak => write!(f, "Very Weak"),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Moderate => write!(f, "Moderate"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// Rough time an offline guesser would need, bucketed by entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CrackTimeBucket {
    Seconds,
    Minutes,
    Days,
    Months,
    Years,
    Centuries,
}

impl CrackTimeBucket {
    pub fn from_entropy(bits: f64) -> Self {
        if bits > 100.0 {
            CrackTimeBucket::Centuries
        } else if bits > 80.0 {
            CrackTimeBucket::Years
        } else if bits > 60.0 {
            CrackTimeBucket::Months
        } else if bits > 40.0 {
            CrackTimeBucket::Days
        } else if bits > 20.0 {
            CrackTimeBucket::Minutes
        } else {
            CrackTimeBucket::Seconds
        }
    }
}

impl std::fmt::Display for CrackTimeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrackTimeBucket::Seconds => write!(f, "seconds"),
            CrackTimeBucket::Minutes => write!(f, "minutes"),
            CrackTimeBucket::Days => write!(f, "days"),
            CrackTimeBucket::Months => write!(f, "months"),
            CrackTimeBucket::Years => write!(f, "years"),
            CrackTimeBucket::Centuries => write!(f, "centuries"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
    pub feedback: Vec<String>,
    pub crack_time: CrackTimeBucket,
    pub entropy_bits: f64,
}

impl StrengthResult {
    pub fn empty() -> Self {
        Self {
            score: 0,
            label: StrengthLabel::Empty,
            feedback: Vec::new(),
            crack_time: CrackTimeBucket::Seconds,
            entropy_bits: 0.0,
        }
    }

    /// Display phrase for the crack-time bucket ("0 seconds" for empty input).
    pub fn crack_time_text(&self) -> String {
        match self.label {
            StrengthLabel::Empty => "0 seconds".to_string(),
            _ => self.crack_time.to_string(),
        }
    }
}

// Serialized form also includes `crack_time_text`
impl Serialize for StrengthResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StrengthResult", 6)?;
        state.serialize_field("score", &self.score)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("feedback", &self.feedback)?;
        state.serialize_field("crack_time", &self.crack_time)?;
        state.serialize_field("crack_time_text", &self.crack_time_text())?;
        state.serialize_field("entropy_bits", &self.entropy_bits)?;
        state.end()
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GeneratorConfig {
    /// Same flags, length clamped into the supported range.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = clamp_length(length);
        self
    }

    pub fn clamped_length(&self) -> usize {
        clamp_length(self.length)
    }
}

pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
}

/// One rendering of the input text in a single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedResult {
    pub style_id: String,
    pub style_name: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_indexed_by_score() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(2), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_score(4), StrengthLabel::VeryStrong);
    }

    #[test]
    fn crack_time_thresholds_are_exclusive() {
        assert_eq!(CrackTimeBucket::from_entropy(0.0), CrackTimeBucket::Seconds);
        assert_eq!(CrackTimeBucket::from_entropy(20.0), CrackTimeBucket::Seconds);
        assert_eq!(CrackTimeBucket::from_entropy(20.5), CrackTimeBucket::Minutes);
        assert_eq!(CrackTimeBucket::from_entropy(40.5), CrackTimeBucket::Days);
        assert_eq!(CrackTimeBucket::from_entropy(60.5), CrackTimeBucket::Months);
        assert_eq!(CrackTimeBucket::from_entropy(100.0), CrackTimeBucket::Years);
        assert_eq!(CrackTimeBucket::from_entropy(100.1), CrackTimeBucket::Centuries);
    }

    #[test]
    fn empty_result_reads_zero_seconds() {
        let result = StrengthResult::empty();
        assert_eq!(result.crack_time_text(), "0 seconds");
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn serialized_result_carries_crack_time_text() {
        let value = serde_json::to_value(StrengthResult::empty()).unwrap();
        assert_eq!(value["crack_time_text"], "0 seconds");
        assert_eq!(value["crack_time"], "Seconds");

        let weak = StrengthResult {
            score: 1,
            label: StrengthLabel::Weak,
            feedback: vec![],
            crack_time: CrackTimeBucket::Minutes,
            entropy_bits: 30.0,
        };
        let value = serde_json::to_value(&weak).unwrap();
        assert_eq!(value["crack_time_text"], "minutes");
    }

    #[test]
    fn serialized_result_reads_back() {
        let result = StrengthResult::empty();
        let json = serde_json::to_string(&result).unwrap();
        let back: StrengthResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn with_length_clamps() {
        assert_eq!(GeneratorConfig::default().with_length(3).length, 8);
        assert_eq!(GeneratorConfig::default().with_length(64).length, 32);
        assert_eq!(GeneratorConfig::default().with_length(20).length, 20);
    }
}

// src/core/strength.rs
use crate::core::charset::ClassSet;
use crate::models::{CrackTimeBucket, StrengthLabel, StrengthResult};

pub const MAX_SCORE: u8 = 4;

pub const FEEDBACK_TOO_SHORT: &str = "Password is too short. Use at least 12 characters.";
pub const FEEDBACK_LOW_VARIETY: &str = "Add numbers, symbols and mixed case letters.";

/// Score a password on a 0-4 scale and bucket its crack time.
///
/// Each bonus is checked independently against the password:
/// length >= 8, length >= 12, at least three character classes, and
/// length >= 16 together with three classes.
pub fn estimate(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::empty();
    }

    let length = password.chars().count();
    let classes = ClassSet::scan(password);
    let diversity = classes.diversity();

    let mut score: u8 = 0;
    let mut feedback = Vec::new();

    if length >= 8 {
        score += 1;
    }

    if length >= 12 {
        score += 1;
    } else {
        feedback.push(FEEDBACK_TOO_SHORT.to_string());
    }

    if diversity >= 3 {
        score += 1;
    } else {
        feedback.push(FEEDBACK_LOW_VARIETY.to_string());
    }

    if length >= 16 && diversity >= 3 {
        score += 1;
    }

    let score = score.min(MAX_SCORE);
    let entropy_bits = entropy_bits(length, &classes);

    log::debug!(
        "Estimated strength: score={} diversity={} entropy={:.1} bits",
        score,
        diversity,
        entropy_bits
    );

    StrengthResult {
        score,
        label: StrengthLabel::from_score(score),
        feedback,
        crack_time: CrackTimeBucket::from_entropy(entropy_bits),
        entropy_bits,
    }
}

pub fn entropy_bits(length: usize, classes: &ClassSet) -> f64 {
    length as f64 * (classes.pool_size() as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_short_circuits() {
        let result = estimate("");
        assert_eq!(result.score, 0);
        assert_eq!(result.label, StrengthLabel::Empty);
        assert!(result.feedback.is_empty());
        assert_eq!(result.crack_time_text(), "0 seconds");
    }

    #[test]
    fn short_single_class_is_very_weak() {
        let result = estimate("abc");
        assert_eq!(result.score, 0);
        assert_eq!(result.label, StrengthLabel::VeryWeak);
        assert_eq!(result.feedback, vec![FEEDBACK_TOO_SHORT, FEEDBACK_LOW_VARIETY]);
        assert_eq!(result.crack_time, CrackTimeBucket::Seconds);
        assert_eq!(result.crack_time_text(), "seconds");
    }

    #[test]
    fn seven_chars_with_four_classes() {
        let result = estimate("Abc123!");
        assert_eq!(result.score, 1);
        assert_eq!(result.label, StrengthLabel::Weak);
        assert_eq!(result.feedback, vec![FEEDBACK_TOO_SHORT]);
    }

    #[test]
    fn eight_chars_with_four_classes_is_moderate() {
        let result = estimate("Abc123!x");
        assert_eq!(result.score, 2);
        assert_eq!(result.label, StrengthLabel::Moderate);
        // 8 * log2(94) ~= 52.4 bits
        assert_eq!(result.crack_time, CrackTimeBucket::Days);
    }

    #[test]
    fn twelve_chars_mixed_is_strong() {
        let result = estimate("Abcdef123!xy");
        assert_eq!(result.score, 3);
        assert_eq!(result.label, StrengthLabel::Strong);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn sixteen_chars_mixed_is_very_strong() {
        let result = estimate("Abcdef123!xyZw9#");
        assert_eq!(result.score, 4);
        assert_eq!(result.label, StrengthLabel::VeryStrong);
        assert_eq!(result.crack_time, CrackTimeBucket::Centuries);
    }

    #[test]
    fn long_low_variety_caps_at_two() {
        let result = estimate(&"a".repeat(40));
        assert_eq!(result.score, 2);
        assert_eq!(result.feedback, vec![FEEDBACK_LOW_VARIETY]);
        // 40 * log2(26) ~= 188 bits
        assert_eq!(result.crack_time, CrackTimeBucket::Centuries);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // four two-byte characters
        let result = estimate("éééé");
        assert_eq!(result.score, 0);
        assert_eq!(result.feedback.len(), 2);
    }

    #[test]
    fn score_never_drops_when_extended_with_diversity() {
        let base = "Ab1!";
        let mut previous = estimate(base).score;
        let mut password = base.to_string();
        for c in "cdefghijklmnopqrstu".chars() {
            password.push(c);
            let score = estimate(&password).score;
            assert!(score >= previous, "score dropped at {password:?}");
            assert!(score <= MAX_SCORE);
            previous = score;
        }
        assert_eq!(previous, MAX_SCORE);
    }

    #[test]
    fn entropy_uses_pool_of_present_classes() {
        let classes = ClassSet::scan("0000");
        let bits = entropy_bits(4, &classes);
        assert!((bits - 4.0 * 10f64.log2()).abs() < 1e-9);
    }
}

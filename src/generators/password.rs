// src/generators/password.rs
use crate::core::charset::{LOWERCASE, DIGITS, SYMBOLS, UPPERCASE};
use crate::core::strength;
use crate::crypto::{self, SecureRandom};
use crate::models::{GeneratorConfig, StrengthResult};

/// Characters a password may be drawn from, in the fixed order
/// uppercase, lowercase, digits, symbols. Falls back to lowercase
/// when every class is disabled.
pub fn build_charset(config: &GeneratorConfig) -> Vec<u8> {
    let mut chars = Vec::new();

    if config.include_uppercase {
        chars.extend_from_slice(UPPERCASE);
    }
    if config.include_lowercase {
        chars.extend_from_slice(LOWERCASE);
    }
    if config.include_numbers {
        chars.extend_from_slice(DIGITS);
    }
    if config.include_symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    if chars.is_empty() {
        chars.extend_from_slice(LOWERCASE);
    }

    chars
}

/// Generate a password from the operating system's secure random source.
///
/// The length is clamped into `[MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH]`.
pub fn generate(config: &GeneratorConfig) -> crypto::Result<String> {
    generate_with(config, &mut crypto::system_random())
}

/// Generate a password drawing exactly one `u32` per character from `rng`.
pub fn generate_with<R: SecureRandom>(config: &GeneratorConfig, rng: &mut R) -> crypto::Result<String> {
    let chars = build_charset(config);
    let length = config.clamped_length();
    if length != config.length {
        log::debug!("Clamped password length {} to {}", config.length, length);
    }

    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let value = rng.next_u32_secure()?;
        password.push(chars[value as usize % chars.len()] as char);
    }

    log::debug!("Generated password of {} chars from a pool of {}", length, chars.len());
    Ok(password)
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, config: &GeneratorConfig) -> crypto::Result<String> {
        generate(config)
    }

    /// Generate `count` independent passwords.
    pub fn generate_batch(&self, config: &GeneratorConfig, count: usize) -> crypto::Result<Vec<String>> {
        (0..count).map(|_| generate(config)).collect()
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthResult {
        strength::estimate(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::CryptoError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn config(length: usize, upper: bool, lower: bool, numbers: bool, symbols: bool) -> GeneratorConfig {
        GeneratorConfig {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    /// Counts draws and returns a fixed sequence.
    struct Scripted {
        values: Vec<u32>,
        draws: usize,
    }

    impl SecureRandom for Scripted {
        fn next_u32_secure(&mut self) -> crypto::Result<u32> {
            let value = self.values[self.draws % self.values.len()];
            self.draws += 1;
            Ok(value)
        }
    }

    struct Unavailable;

    impl SecureRandom for Unavailable {
        fn next_u32_secure(&mut self) -> crypto::Result<u32> {
            let err = std::io::Error::new(std::io::ErrorKind::Other, "no entropy");
            Err(CryptoError::RandomSource(rand::Error::new(err)))
        }
    }

    #[test]
    fn charset_order_is_stable() {
        let chars = build_charset(&config(16, true, true, true, true));
        assert_eq!(chars.len(), 26 + 26 + 10 + 26);
        assert_eq!(chars[0], b'A');
        assert_eq!(chars[26], b'a');
        assert_eq!(chars[52], b'0');
        assert_eq!(chars[62], b'!');
    }

    #[test]
    fn empty_selection_falls_back_to_lowercase() {
        assert_eq!(build_charset(&config(10, false, false, false, false)), LOWERCASE.to_vec());
    }

    #[test]
    fn all_classes_sixteen_chars() {
        let cfg = config(16, true, true, true, true);
        let pool = build_charset(&cfg);
        for _ in 0..50 {
            let password = generate(&cfg).unwrap();
            assert_eq!(password.chars().count(), 16);
            assert!(password.bytes().all(|b| pool.contains(&b)), "unexpected char in {password}");
        }
    }

    #[test]
    fn no_classes_draws_lowercase_only() {
        let cfg = config(10, false, false, false, false);
        let password = generate(&cfg).unwrap();
        assert_eq!(password.len(), 10);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn digits_only() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let password = generate_with(&config(12, false, false, true, false), &mut rng).unwrap();
        assert_eq!(password.len(), 12);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn one_draw_per_character_mapped_by_modulo() {
        let mut rng = Scripted { values: vec![0, 1, 26, 27, 62 + 26], draws: 0 };
        let password = generate_with(&config(8, true, true, false, false), &mut rng).unwrap();
        assert_eq!(rng.draws, 8);
        // 52-char pool: 0 -> A, 1 -> B, 26 -> a, 27 -> b, 88 % 52 = 36 -> k
        assert_eq!(password, "ABabkABa");
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let cfg = GeneratorConfig::default();
        let a = generate_with(&cfg, &mut ChaCha20Rng::seed_from_u64(9)).unwrap();
        let b = generate_with(&cfg, &mut ChaCha20Rng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_lengths_are_clamped() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(generate_with(&config(0, true, true, true, true), &mut rng).unwrap().len(), 8);
        assert_eq!(generate_with(&config(500, true, true, true, true), &mut rng).unwrap().len(), 32);
    }

    #[test]
    fn random_source_failure_is_reported() {
        let err = generate_with(&GeneratorConfig::default(), &mut Unavailable).unwrap_err();
        assert!(err.to_string().contains("Secure random source unavailable"));
    }

    #[test]
    fn batch_generates_requested_count() {
        let generator = PasswordGenerator::new();
        let batch = generator.generate_batch(&GeneratorConfig::default(), 5).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.len() == 16));
    }

    #[test]
    fn generated_default_password_scores_high() {
        let generator = PasswordGenerator::new();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let password = generate_with(&GeneratorConfig::default(), &mut rng).unwrap();
        let result = generator.analyze_password_strength(&password);
        // 16 chars: length bonuses always fire, diversity depends on the draw
        assert!(result.score >= 2);
    }
}

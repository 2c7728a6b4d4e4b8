// src/crypto.rs
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Secure random source unavailable: {0}")]
    RandomSource(#[from] rand::Error),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Source of cryptographically secure 32-bit values.
///
/// Implemented for every `RngCore + CryptoRng`, so the operating system
/// generator and seeded CSPRNGs (for tests) both qualify. A deterministic
/// non-crypto generator does not.
pub trait SecureRandom {
    fn next_u32_secure(&mut self) -> Result<u32>;
}

impl<R: RngCore + CryptoRng> SecureRandom for R {
    fn next_u32_secure(&mut self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        self.try_fill_bytes(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }
}

/// The operating system's random source.
pub fn system_random() -> OsRng {
    OsRng
}

//! # securecheck
//!
//! Password strength estimation, secure password generation and decorative
//! Unicode text styles.
//!
//! The three engines are independent and stateless:
//!
//! - [`estimate`] scores a password from 0 to 4, with feedback and a rough
//!   crack-time bucket derived from an entropy estimate.
//! - [`generate`] draws a password from the operating system's secure random
//!   source, using the character classes enabled in a [`GeneratorConfig`].
//! - [`apply_all`] renders text in every registered style
//!   (mathematical bold, script, Fraktur, circled letters, small caps,
//!   upside-down text and more).
//!
//! ```rust
//! use securecheck::{apply_all, estimate, generate, GeneratorConfig, StrengthLabel};
//!
//! let result = estimate("correct horse battery staple");
//! assert_eq!(result.label, StrengthLabel::Moderate);
//!
//! let password = generate(&GeneratorConfig::default()).unwrap();
//! assert_eq!(password.len(), 16);
//!
//! for styled in apply_all("Hello") {
//!     println!("{}: {}", styled.style_name, styled.text);
//! }
//! ```

pub mod cli;
pub mod core;
pub mod crypto;
pub mod fonts;
pub mod generators;
pub mod models;
pub mod utils;

pub use crate::core::strength::estimate;
pub use crate::crypto::{CryptoError, SecureRandom};
pub use crate::fonts::{apply_all, apply_style, char_map, find_style, StyleDefinition, Transform, STYLES};
pub use crate::generators::{generate, generate_with, PasswordGenerator};
pub use crate::models::{
    CrackTimeBucket, GeneratedResult, GeneratorConfig, StrengthLabel, StrengthResult,
    MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};

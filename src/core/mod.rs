// src/core/mod.rs
pub mod charset;
pub mod config;
pub mod strength;

pub use config::Config;
pub use strength::estimate;

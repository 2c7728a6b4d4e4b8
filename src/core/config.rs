// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::{clamp_length, GeneratorConfig};

pub const DEFAULT_PLACEHOLDER_TEXT: &str = "Type something...";
pub const DEFAULT_SAMPLE_TEXT: &str = "Hello Instagram!";

// Configuration for the terminal tools
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub generator: GeneratorConfig,

    // Font Generator
    pub placeholder_text: String,
    pub sample_text: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),

            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),

            log_level: LevelFilter::Warn,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup; unparseable values keep the
    /// default and leave a message in `warnings`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => config.generator.length = clamp_length(length),
                Err(_) => warnings.push(format!("Invalid DEFAULT_PASSWORD_LENGTH '{}', using default", val)),
            }
        }

        let flags = [
            ("DEFAULT_INCLUDE_UPPERCASE", &mut config.generator.include_uppercase),
            ("DEFAULT_INCLUDE_LOWERCASE", &mut config.generator.include_lowercase),
            ("DEFAULT_INCLUDE_NUMBERS", &mut config.generator.include_numbers),
            ("DEFAULT_INCLUDE_SYMBOLS", &mut config.generator.include_symbols),
        ];
        for (key, flag) in flags {
            if let Some(val) = lookup(key) {
                match parse_bool(&val) {
                    Some(enabled) => *flag = enabled,
                    None => warnings.push(format!("Invalid {} '{}', using default", key, val)),
                }
            }
        }

        // Font Generator
        if let Some(text) = lookup("FONT_PLACEHOLDER_TEXT") {
            if !text.trim().is_empty() {
                config.placeholder_text = text;
            }
        }

        if let Some(text) = lookup("FONT_SAMPLE_TEXT") {
            config.sample_text = text;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_level(&level) {
                Some(filter) => config.log_level = filter,
                None => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config.warnings = warnings;
        config
    }

    /// Text handed to the style engine: the placeholder stands in for blank input.
    pub fn font_input<'a>(&'a self, text: &'a str) -> &'a str {
        if text.trim().is_empty() {
            &self.placeholder_text
        } else {
            text
        }
    }
}

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

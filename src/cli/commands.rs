// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};

use crate::models::GeneratorConfig;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Estimate the strength of a password
    Check {
        /// Password to check (prompted for when omitted)
        password: Option<String>,
    },

    /// Generate random passwords
    Generate(GenerateArgs),

    /// Render text in decorative Unicode styles
    Fonts {
        /// Text to render (prompted for when omitted)
        text: Option<String>,

        /// Render a single style by id (see `styles`)
        #[arg(long, short)]
        style: Option<String>,
    },

    /// List the available text styles
    Styles,

    /// Open the interactive menu
    Menu,
}

#[derive(ClapArgs, Debug, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Password length, clamped to 8..=32
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Number of passwords to generate
    #[arg(long, short, default_value_t = 1)]
    pub count: usize,
}

impl GenerateArgs {
    /// Overlay the command-line flags on the configured defaults.
    pub fn to_config(&self, defaults: &GeneratorConfig) -> GeneratorConfig {
        let config = GeneratorConfig {
            length: defaults.length,
            include_uppercase: defaults.include_uppercase && !self.no_uppercase,
            include_lowercase: defaults.include_lowercase && !self.no_lowercase,
            include_numbers: defaults.include_numbers && !self.no_numbers,
            include_symbols: defaults.include_symbols && !self.no_symbols,
        };
        config.with_length(self.length.unwrap_or(defaults.length))
    }
}

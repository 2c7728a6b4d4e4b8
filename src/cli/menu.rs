// src/cli/menu.rs
use anyhow::Result;
use inquire::{Confirm, CustomType, InquireError, Password, Select, Text};

use crate::cli::handlers::{render_fonts, render_strength};
use crate::core::Config;
use crate::fonts;
use crate::generators::PasswordGenerator;
use crate::models::{clamp_length, GeneratorConfig, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

const CHECK: &str = "🔍  Check password strength";
const GENERATE: &str = "🔐  Generate secure password";
const FONTS: &str = "✨  Stylish text generator";
const EXIT: &str = "❌  Exit";

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Stay,
    Leave,
}

// Decide whether the menu keeps running after a tool returns
fn after_tool(outcome: Result<(), InquireError>) -> Result<Step, InquireError> {
    match outcome {
        Ok(()) => Ok(Step::Stay),
        // Esc inside a tool returns to the main menu
        Err(InquireError::OperationCanceled) => Ok(Step::Stay),
        Err(InquireError::Custom(e)) => {
            log::warn!("Menu input rejected: {}", e);
            eprintln!("⚠️ {}", e);
            Ok(Step::Stay)
        }
        Err(InquireError::OperationInterrupted) => Ok(Step::Leave),
        Err(e) => Err(e),
    }
}

pub fn run_cli_menu(config: &Config) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🛡️  SECURECHECK TOOLKIT        ║");
    println!("╚══════════════════════════════════════╝");

    // Last values entered, offered again as defaults
    let mut generator_config = config.generator.clone();
    let mut font_text = config.sample_text.clone();

    loop {
        let options = vec![CHECK, GENERATE, FONTS, EXIT];

        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc or Ctrl+C to exit.")
            .prompt_skippable();

        let outcome = match selection {
            Ok(Some(CHECK)) => check_password(),
            Ok(Some(GENERATE)) => generate_password(&mut generator_config),
            Ok(Some(FONTS)) => style_text(config, &mut font_text),
            Ok(Some(_)) | Ok(None) => break,
            Err(InquireError::OperationInterrupted) | Err(InquireError::OperationCanceled) => break,
            Err(e) => return Err(e.into()),
        };

        if after_tool(outcome)? == Step::Leave {
            break;
        }
    }

    log::info!("Interactive menu closed");
    println!("👋 Goodbye!");
    Ok(())
}

fn check_password() -> Result<(), InquireError> {
    // An empty entry ends the loop
    loop {
        let password = Password::new("Password to check (empty to go back):")
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?;

        if password.is_empty() {
            return Ok(());
        }

        println!("{}\n", render_strength(&crate::core::estimate(&password)));
    }
}

fn generate_password(current: &mut GeneratorConfig) -> Result<(), InquireError> {
    let length = CustomType::<usize>::new(&format!(
        "Password length ({}-{}):",
        MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
    ))
    .with_default(current.length)
    .with_error_message("Please type a whole number")
    .prompt()?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(current.include_uppercase)
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(current.include_lowercase)
        .prompt()?;

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(current.include_numbers)
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(current.include_symbols)
        .prompt()?;

    *current = GeneratorConfig {
        length: clamp_length(length),
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_symbols,
    };
    if current.length != length {
        println!("ℹ️  Length adjusted to {}", current.length);
    }

    let generator = PasswordGenerator::new();
    loop {
        match generator.generate_password(current) {
            Ok(generated) => {
                println!("\nGenerated Password: {}", console::style(&generated).bold());
                println!("{}\n", render_strength(&generator.analyze_password_strength(&generated)));
            }
            Err(e) => {
                log::error!("Password generation failed: {}", e);
                eprintln!("❌ Failed to generate password: {}", e);
                return Ok(());
            }
        }

        let again = Confirm::new("Generate another?").with_default(false).prompt()?;
        if !again {
            return Ok(());
        }
    }
}

fn style_text(config: &Config, last_text: &mut String) -> Result<(), InquireError> {
    let text = Text::new("Text to style:")
        .with_default(last_text.as_str())
        .prompt()?;

    let results = fonts::apply_all(config.font_input(&text));
    println!("\n{}\n", render_fonts(&results));

    *last_text = text;
    Ok(())
}

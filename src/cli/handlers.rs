// src/cli/handlers.rs
use anyhow::{anyhow, Context, Result};
use console::style;
use inquire::{Password, Text};
use serde::Serialize;

use crate::cli::{Args, CliCommand, GenerateArgs};
use crate::core::strength::{self, MAX_SCORE};
use crate::core::Config;
use crate::fonts;
use crate::generators::PasswordGenerator;
use crate::models::{GeneratedResult, GeneratorConfig, StrengthResult};
use crate::utils::{format_entropy, strength_meter};

#[derive(Debug, Serialize)]
struct GeneratedPassword {
    password: String,
    strength: StrengthResult,
}

#[derive(Debug, Serialize)]
struct StyleInfo {
    id: &'static str,
    name: &'static str,
}

// Run a parsed command line against the loaded configuration
pub fn dispatch(args: Args, config: &Config) -> Result<()> {
    let json = args.json;
    match args.command.unwrap_or(CliCommand::Menu) {
        CliCommand::Check { password } => {
            let password = match password {
                Some(password) => password,
                None => Password::new("Password to check:")
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()?,
            };
            println!("{}", handle_check(&password, json)?);
        }
        CliCommand::Generate(generate) => {
            println!("{}", handle_generate(&generate, &config.generator, json)?);
        }
        CliCommand::Fonts { text, style } => {
            let text = match text {
                Some(text) => text,
                None => Text::new("Text to style:")
                    .with_default(&config.sample_text)
                    .prompt()?,
            };
            println!("{}", handle_fonts(config, &text, style.as_deref(), json)?);
        }
        CliCommand::Styles => {
            println!("{}", handle_styles(json)?);
        }
        CliCommand::Menu => {
            crate::cli::menu::run_cli_menu(config)?;
        }
    }
    Ok(())
}

pub fn handle_check(password: &str, json: bool) -> Result<String> {
    let result = strength::estimate(password);
    if json {
        return serde_json::to_string_pretty(&result).context("Failed to serialize strength result");
    }
    Ok(render_strength(&result))
}

pub fn handle_generate(generate: &GenerateArgs, defaults: &GeneratorConfig, json: bool) -> Result<String> {
    let config = generate.to_config(defaults);
    let generator = PasswordGenerator::new();

    let passwords = generator
        .generate_batch(&config, generate.count.max(1))
        .context("Failed to generate password")?;

    let generated: Vec<GeneratedPassword> = passwords
        .into_iter()
        .map(|password| {
            let strength = generator.analyze_password_strength(&password);
            GeneratedPassword { password, strength }
        })
        .collect();

    if json {
        return serde_json::to_string_pretty(&generated).context("Failed to serialize passwords");
    }

    let lines: Vec<String> = generated
        .iter()
        .map(|g| {
            format!(
                "{}  {}",
                style(&g.password).bold(),
                style(format!("[{}]", g.strength.label)).fg(g.strength.label.color())
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn handle_fonts(config: &Config, text: &str, style_id: Option<&str>, json: bool) -> Result<String> {
    let input = config.font_input(text);

    let results = match style_id {
        Some(id) => vec![fonts::apply_style(id, input)
            .ok_or_else(|| anyhow!("Unknown style '{}'. Run `styles` to list them.", id))?],
        None => fonts::apply_all(input),
    };
    log::debug!("Rendered {} style(s)", results.len());

    if json {
        return serde_json::to_string_pretty(&results).context("Failed to serialize styled text");
    }
    Ok(render_fonts(&results))
}

pub fn handle_styles(json: bool) -> Result<String> {
    let styles: Vec<StyleInfo> = fonts::STYLES
        .iter()
        .map(|s| StyleInfo { id: s.id, name: s.name })
        .collect();

    if json {
        return serde_json::to_string_pretty(&styles).context("Failed to serialize style list");
    }

    let lines: Vec<String> = styles
        .iter()
        .map(|s| format!("{:<20} {}", s.id, s.name))
        .collect();
    Ok(lines.join("\n"))
}

pub fn render_strength(result: &StrengthResult) -> String {
    let color = result.label.color();
    let mut out = format!(
        "Strength: {} {} ({}/{})\nEntropy: {}\nTime to crack: {}",
        style(strength_meter(result.score, MAX_SCORE)).fg(color),
        style(result.label).fg(color).bold(),
        result.score,
        MAX_SCORE,
        format_entropy(result.entropy_bits),
        result.crack_time_text(),
    );
    for tip in &result.feedback {
        out.push_str(&format!("\n  • {}", tip));
    }
    out
}

pub fn render_fonts(results: &[GeneratedResult]) -> String {
    results
        .iter()
        .map(|r| format!("{}\n  {}", style(&r.style_name).dim(), r.text))
        .collect::<Vec<_>>()
        .join("\n")
}

use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use securecheck::cli::{handlers, Args};
use securecheck::core::config::{parse_level, Config};

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true);

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }

    builder.try_init()?;
    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();
    let mut config = Config::load();

    if let Some(level) = &args.log_level {
        match parse_level(level) {
            Some(filter) => config.log_level = filter,
            None => eprintln!("⚠️ Unknown log level '{}', using {}", level, config.log_level),
        }
    }

    match init_logging(&config) {
        Ok(()) => {
            for warning in &config.warnings {
                log::warn!("{}", warning);
            }
        }
        Err(e) => {
            eprintln!("⚠️ Failed to initialise logging: {e:#}");
            for warning in &config.warnings {
                eprintln!("⚠️ {}", warning);
            }
        }
    }

    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Loaded config: {:?}", config);

    match handlers::dispatch(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

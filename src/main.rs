use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

mod cli;

use cli::{Args, Command};
use playerkit::i18n;
use playerkit::utils::{self, format_duration_secs, make_error, parse_duration};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let config = utils::load_config().context("Failed to load configuration")?;

    // Initialize logging
    let log_level = if args.debug { "debug" } else { config.general.log_level.as_str() };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    debug!("Starting playerkit v{}", env!("CARGO_PKG_VERSION"));

    let mut locale_config = config.locale.clone();
    if let Some(locale) = args.locale {
        locale_config.language = Some(locale);
    }
    let locale = i18n::init(&locale_config).context("Failed to set up localization")?;
    debug!("Using locale {}", locale);

    match args.command {
        Command::Duration { seconds } => {
            println!("{}", format_duration_secs(seconds));
        }
        Command::Parse { text } => {
            let seconds = parse_duration(&text)?;
            println!("{}", seconds);
        }
        Command::Localize { key, args } => {
            let pairs: Vec<(&str, &str)> = args
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            println!("{}", i18n::localize_args(&key, &pairs));
        }
        Command::Error {
            domain,
            code,
            message,
            json,
        } => {
            let record = make_error(domain, code, message);
            info!("Built error record in domain '{}'", record.domain());
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", record);
            }
        }
    }

    Ok(())
}

//! Command line arguments for the playerkit binary

use clap::{Parser, Subcommand};

/// playerkit - time labels, error records and localized strings for media players
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Display language (e.g. "en-US", "zh-CN"); overrides the config file
    #[arg(short, long, global = true, value_name = "TAG")]
    pub locale: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format a number of seconds as a playback time label
    Duration {
        /// Seconds; negative values print as 0:00
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },

    /// Parse a M:SS or H:MM:SS label back into seconds
    Parse {
        /// Time label
        text: String,
    },

    /// Look up a localized string
    Localize {
        /// Message key
        key: String,

        /// Named argument for the message
        #[arg(short, long = "arg", value_name = "NAME=VALUE", value_parser = parse_key_value)]
        args: Vec<(String, String)>,
    },

    /// Build an error record
    Error {
        /// Subsystem the error belongs to
        domain: String,

        /// Numeric code within the domain
        #[arg(allow_negative_numbers = true)]
        code: i64,

        /// Human-readable message
        message: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    Ok((name.to_string(), value.to_string()))
}

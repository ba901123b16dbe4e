//! playerkit - shared utilities for media player front-ends
//!
//! Playback time labels, domain-scoped error records and localized
//! display strings. Everything here is synchronous and safe to call from
//! any thread.

pub mod i18n;
pub mod utils;

pub use i18n::{localize, localize_args, Localizer};
pub use utils::{
    fail, format_duration, format_duration_secs, make_error, parse_duration, Config,
    DurationParts, ErrorRecord, PlayerError, Result,
};

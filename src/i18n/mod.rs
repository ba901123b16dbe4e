//! Localized display strings
//!
//! The free functions here read from one process-wide [`Localizer`]. It
//! starts out on the system locale and can be switched with
//! [`set_locale`] or rebuilt from configuration with [`init`]. Lookups take
//! a shared read lock, so any number of threads may translate at once.

mod localizer;

pub use localizer::{negotiate, Localizer, FALLBACK_LOCALE};

use log::info;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use unic_langid::LanguageIdentifier;

use crate::utils::config::LocaleConfig;
use crate::utils::error::Result;

static LOCALIZER: OnceCell<RwLock<Localizer>> = OnceCell::new();

fn shared() -> &'static RwLock<Localizer> {
    LOCALIZER.get_or_init(|| RwLock::new(Localizer::system()))
}

/// Localized string for `key`, or `key` itself when no translation exists
pub fn localize(key: &str) -> String {
    shared().read().localize(key)
}

/// Localized string for `key` with named arguments substituted
pub fn localize_args(key: &str, args: &[(&str, &str)]) -> String {
    shared().read().localize_args(key, args)
}

/// Locale the process-wide localizer resolved to
pub fn current_locale() -> LanguageIdentifier {
    shared().read().locale().clone()
}

/// Switch the display language, keeping the current resource directory
///
/// Returns the negotiated locale, which may differ from `tag`
/// (e.g. `zh-TW` resolves to `zh-CN`).
pub fn set_locale(tag: &str) -> Result<LanguageIdentifier> {
    let resource_dir = shared().read().resource_dir().map(|dir| dir.to_path_buf());
    let localizer = match resource_dir {
        Some(dir) => Localizer::with_resource_dir(tag, dir)?,
        None => Localizer::new(tag)?,
    };
    install(localizer)
}

/// Rebuild the process-wide localizer from configuration
///
/// An unset language means the system locale. Broken resource files are
/// reported whichever way the language was chosen.
pub fn init(config: &LocaleConfig) -> Result<LanguageIdentifier> {
    let system_tag = sys_locale::get_locale();
    let localizer = Localizer::from_config(config, system_tag.as_deref())?;
    install(localizer)
}

fn install(localizer: Localizer) -> Result<LanguageIdentifier> {
    let locale = localizer.locale().clone();
    if let Err(lock) = LOCALIZER.set(RwLock::new(localizer)) {
        *shared().write() = lock.into_inner();
    }
    info!("Display language set to {}", locale);
    Ok(locale)
}

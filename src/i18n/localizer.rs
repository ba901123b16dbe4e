//! Fluent-backed string tables
//!
//! Each [`Localizer`] owns the bundle for its negotiated locale plus the
//! `en-US` bundle used when a key is missing there. Built-in strings are
//! compiled in; a resource directory laid out as `<dir>/<locale>/*.ftl`
//! is layered on top and may add locales of its own.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use log::{debug, warn};
use unic_langid::{langid, LanguageIdentifier};

use crate::utils::config::LocaleConfig;
use crate::utils::error::{IntoPlayerError, PlayerError, Result};

/// Locale used when nothing better matches, and for keys a locale lacks
pub const FALLBACK_LOCALE: &str = "en-US";

const EN_US: &str = include_str!("../../locales/en-US/playerkit.ftl");
const ZH_CN: &str = include_str!("../../locales/zh-CN/playerkit.ftl");

type Bundle = FluentBundle<FluentResource>;

fn fallback_locale() -> LanguageIdentifier {
    langid!("en-US")
}

fn builtin_locales() -> Vec<(LanguageIdentifier, &'static str)> {
    vec![(langid!("en-US"), EN_US), (langid!("zh-CN"), ZH_CN)]
}

/// Looks up display strings for one locale
pub struct Localizer {
    locale: LanguageIdentifier,
    resource_dir: Option<PathBuf>,
    bundle: Bundle,
    fallback: Option<Bundle>,
}

impl Localizer {
    /// Localizer for `tag` using only the built-in strings
    pub fn new(tag: &str) -> Result<Self> {
        Self::build(tag, None)
    }

    /// Localizer for `tag` with `.ftl` overrides read from `dir`
    pub fn with_resource_dir<P: Into<PathBuf>>(tag: &str, dir: P) -> Result<Self> {
        Self::build(tag, Some(dir.into()))
    }

    /// Localizer for the operating system's display language
    ///
    /// Falls back to `en-US` when the system locale is missing or unusable.
    pub fn system() -> Self {
        let system_tag = sys_locale::get_locale();
        Self::from_config(&LocaleConfig::default(), system_tag.as_deref()).unwrap_or_else(|e| {
            warn!("Using {} strings: {}", FALLBACK_LOCALE, e);
            Self::default()
        })
    }

    /// Localizer for a locale configuration
    ///
    /// An unset language means `system_tag`. A system tag that is not a
    /// valid language identifier is logged and replaced with `en-US`; any
    /// other failure, such as a broken resource file, is returned.
    pub fn from_config(config: &LocaleConfig, system_tag: Option<&str>) -> Result<Self> {
        let tag = match (&config.language, system_tag) {
            (Some(tag), _) => tag.clone(),
            (None, Some(tag)) if tag.parse::<LanguageIdentifier>().is_ok() => tag.to_string(),
            (None, Some(tag)) => {
                warn!("Ignoring system locale '{}'", tag);
                FALLBACK_LOCALE.to_string()
            }
            (None, None) => FALLBACK_LOCALE.to_string(),
        };
        Self::build(&tag, config.resource_dir.clone())
    }

    fn build(tag: &str, resource_dir: Option<PathBuf>) -> Result<Self> {
        let requested: LanguageIdentifier = tag
            .parse()
            .locale_err(&format!("Invalid locale '{}'", tag))?;

        if let Some(dir) = &resource_dir {
            if !dir.is_dir() {
                return Err(PlayerError::NotFound(format!(
                    "locale resource directory {}",
                    dir.display()
                )));
            }
        }

        let available = available_locales(resource_dir.as_deref())?;
        let locale = negotiate(&requested, &available);
        debug!("Negotiated locale {} for requested {}", locale, requested);

        let mut bundle = builtin_bundle(&locale);
        if let Some(dir) = &resource_dir {
            overlay_resources(&mut bundle, &locale, dir)?;
        }

        let fallback_id = fallback_locale();
        let fallback = if locale == fallback_id {
            None
        } else {
            let mut fallback = builtin_bundle(&fallback_id);
            if let Some(dir) = &resource_dir {
                overlay_resources(&mut fallback, &fallback_id, dir)?;
            }
            Some(fallback)
        };

        Ok(Self {
            locale,
            resource_dir,
            bundle,
            fallback,
        })
    }

    /// Negotiated locale
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Resource directory this localizer was built with
    pub fn resource_dir(&self) -> Option<&Path> {
        self.resource_dir.as_deref()
    }

    /// Whether `key` resolves without falling back to the key itself
    pub fn has_message(&self, key: &str) -> bool {
        self.bundle.has_message(key)
            || self
                .fallback
                .as_ref()
                .is_some_and(|fallback| fallback.has_message(key))
    }

    /// Localized string for `key`, or `key` itself when no table has it
    pub fn localize(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    /// Like [`Localizer::localize`] with named placeables filled in
    pub fn localize_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.lookup(key, Some(&fluent_args))
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> String {
        format_message(&self.bundle, key, args)
            .or_else(|| {
                self.fallback
                    .as_ref()
                    .and_then(|fallback| format_message(fallback, key, args))
            })
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for Localizer {
    fn default() -> Self {
        let locale = fallback_locale();
        Self {
            bundle: builtin_bundle(&locale),
            locale,
            resource_dir: None,
            fallback: None,
        }
    }
}

impl fmt::Debug for Localizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localizer")
            .field("locale", &self.locale)
            .field("resource_dir", &self.resource_dir)
            .finish_non_exhaustive()
    }
}

fn format_message(bundle: &Bundle, key: &str, args: Option<&FluentArgs>) -> Option<String> {
    let message = bundle.get_message(key)?;
    let pattern = message.value()?;

    let mut errors = Vec::new();
    let value = bundle.format_pattern(pattern, args, &mut errors);
    if !errors.is_empty() {
        debug!("Formatting '{}' reported {} errors", key, errors.len());
    }

    Some(value.into_owned())
}

/// Pick the best available locale: exact tag, then same language, then `en-US`
pub fn negotiate(requested: &LanguageIdentifier, available: &[LanguageIdentifier]) -> LanguageIdentifier {
    available
        .iter()
        .find(|candidate| *candidate == requested)
        .or_else(|| {
            available
                .iter()
                .find(|candidate| candidate.language == requested.language)
        })
        .cloned()
        .unwrap_or_else(fallback_locale)
}

fn available_locales(resource_dir: Option<&Path>) -> Result<Vec<LanguageIdentifier>> {
    let mut available: Vec<LanguageIdentifier> =
        builtin_locales().into_iter().map(|(id, _)| id).collect();

    let Some(dir) = resource_dir else {
        return Ok(available);
    };

    let mut extra = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        match name.parse::<LanguageIdentifier>() {
            Ok(id) if !available.contains(&id) && !extra.contains(&id) => extra.push(id),
            Ok(_) => {}
            Err(_) => debug!("Skipping non-locale directory {}", entry.path().display()),
        }
    }

    extra.sort_by_key(|id| id.to_string());
    available.extend(extra);
    Ok(available)
}

fn builtin_bundle(locale: &LanguageIdentifier) -> Bundle {
    let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
    bundle.set_use_isolating(false);

    let source = builtin_locales()
        .into_iter()
        .find(|(id, _)| id == locale)
        .map(|(_, source)| source);

    if let Some(source) = source {
        let resource = match FluentResource::try_new(source.to_string()) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                warn!("Built-in {} strings have {} syntax errors", locale, errors.len());
                resource
            }
        };
        bundle.add_resource_overriding(resource);
    }

    bundle
}

fn overlay_resources(bundle: &mut Bundle, locale: &LanguageIdentifier, dir: &Path) -> Result<()> {
    let locale_dir = dir.join(locale.to_string());
    if !locale_dir.is_dir() {
        return Ok(());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&locale_dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "ftl") {
            files.push(path);
        }
    }
    files.sort();

    for path in files {
        let source = fs::read_to_string(&path)?;
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            PlayerError::Locale(format!(
                "{} has {} syntax errors",
                path.display(),
                errors.len()
            ))
        })?;
        debug!("Loaded {} strings from {}", locale, path.display());
        bundle.add_resource_overriding(resource);
    }

    Ok(())
}

//! Config-driven linter setup.
//!
//! Turns an `a11y-lint.toml` (or an already parsed [`Config`]) into a ready
//! [`Linter`]: preset selection, per-rule options, severity overrides and
//! the component mapping.

use a11y_lint_core::{Config, ConfigError, Linter, LinterError};
use a11y_lint_rules::{registry, Preset};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Config file names to search for, in priority order.
pub const CONFIG_CANDIDATES: &[&str] = &["a11y-lint.toml", ".a11y-lint.toml"];

/// Builds a linter from a parsed configuration.
///
/// The preset defaults to `recommended`. Rule tables naming no built-in
/// rule are reported through `tracing` and otherwise ignored.
///
/// # Errors
///
/// Returns an error for an unknown preset or an invalid component mapping.
pub fn linter_from_config(config: Config) -> Result<Linter, LinterError> {
    let preset = resolve_preset(&config)?;

    for name in config.rules.keys() {
        if registry::find_rule(name).is_none() {
            warn!("Unknown rule '{name}' in config, ignoring");
        }
    }

    let rules = preset.configured_rules(&config);
    debug!("Using preset {preset:?} with {} rules", rules.len());

    Linter::builder().rules(rules).config(config).build()
}

/// Builds a linter from TOML text.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or the configuration is rejected.
pub fn linter_from_toml(content: &str) -> Result<Linter, LinterError> {
    if content.trim().is_empty() {
        return linter_from_config(Config::default());
    }
    linter_from_config(Config::parse(content)?)
}

/// Builds a linter from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its configuration is rejected.
pub fn linter_from_file(path: &Path) -> Result<Linter, LinterError> {
    debug!("Loading config from {}", path.display());
    linter_from_config(Config::from_file(path)?)
}

/// Finds the nearest config file, searching `start` and its ancestors.
#[must_use]
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

/// Builds a linter from the nearest config file, or the defaults if none exists.
///
/// # Errors
///
/// Returns an error if a config file is found but rejected.
pub fn linter_for_dir(start: &Path) -> Result<Linter, LinterError> {
    match find_config(start) {
        Some(path) => linter_from_file(&path),
        None => {
            debug!("No config found above {}, using defaults", start.display());
            linter_from_config(Config::default())
        }
    }
}

fn resolve_preset(config: &Config) -> Result<Preset, ConfigError> {
    config
        .preset
        .as_deref()
        .map_or(Ok(Preset::default()), str::parse)
}

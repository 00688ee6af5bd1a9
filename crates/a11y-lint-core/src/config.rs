//! Configuration types for a11y-lint.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Top-level configuration for a11y-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use (e.g., "recommended", "strict", "minimal").
    #[serde(default)]
    pub preset: Option<String>,

    /// Linter configuration.
    #[serde(default)]
    pub linter: LinterConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,

    /// Shared settings, including the component mapping.
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Gets the configuration block for a rule.
    #[must_use]
    pub fn rule(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }
}

/// Linter-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Whether `a11y-lint: allow(...)` comments are honoured.
    #[serde(default = "default_true")]
    pub allow_directives: bool,

    /// How far (in bytes) before an element an allow directive is searched for.
    #[serde(default = "default_allow_window")]
    pub allow_window: usize,
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            allow_directives: true,
            allow_window: default_allow_window(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_allow_window() -> usize {
    256
}

/// Shared settings read by the core resolvers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Default polymorphic prop names (default: `["as", "component"]`).
    #[serde(default)]
    pub polymorphic_prop_names: Option<Vec<String>>,

    /// Components allowed to use polymorphic props (default: all).
    #[serde(default)]
    pub polymorphic_allow_list: Option<Vec<String>>,

    /// Custom component to native element mapping.
    #[serde(default)]
    pub components: BTreeMap<String, ComponentSetting>,
}

/// One `[settings.components]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentSetting {
    /// `Link = "a"`
    Tag(String),
    /// `Button = { native_tag = "button", polymorphic_prop_names = ["as"] }`
    Detailed {
        /// Native tag the component renders.
        native_tag: String,
        /// Polymorphic props overriding the default list.
        #[serde(default)]
        polymorphic_prop_names: Option<Vec<String>>,
    },
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }

    /// Gets a string array option.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Vec<String> {
        self.options
            .get(key)
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A component maps to something that is not a native element.
    #[error("Component '{component}' maps to unknown native tag '{native_tag}'")]
    UnknownNativeTag {
        /// Component name.
        component: String,
        /// Configured tag.
        native_tag: String,
    },

    /// A component maps to other components in a loop or too deep a chain.
    #[error("Component '{component}' does not resolve to a native tag (cyclic or too deep)")]
    ComponentChain {
        /// Component where resolution started.
        component: String,
    },

    /// A component entry has an empty name.
    #[error("Component mapping contains an empty component name")]
    EmptyComponentName,

    /// A polymorphic prop list contains an empty name.
    #[error("Empty polymorphic prop name in {owner}")]
    EmptyPolymorphicProp {
        /// Component name, or `settings` for the default list.
        owner: String,
    },

    /// The configured preset does not exist.
    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.linter.allow_directives);
        assert_eq!(config.linter.allow_window, 256);
        assert!(config.rules.is_empty());
        assert!(config.settings.components.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
preset = "strict"

[linter]
allow_window = 64

[rules.no-autofocus]
enabled = false

[rules.anchor-is-valid]
severity = "warning"
aspects = ["noHref", "invalidHref"]

[settings]
polymorphic_prop_names = ["as"]

[settings.components]
Link = "a"
Button = { native_tag = "button", polymorphic_prop_names = ["renderAs"] }
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.preset.as_deref(), Some("strict"));
        assert_eq!(config.linter.allow_window, 64);
        assert!(!config.is_rule_enabled("no-autofocus"));
        assert!(config.is_rule_enabled("scope"));
        assert_eq!(config.rule_severity("anchor-is-valid"), Some(Severity::Warning));

        let rule_config = config.rule("anchor-is-valid").expect("rule block");
        assert_eq!(rule_config.get_str_array("aspects"), ["noHref", "invalidHref"]);
        assert!(rule_config.get_bool("missing", true));

        assert_eq!(
            config.settings.components.get("Link"),
            Some(&ComponentSetting::Tag("a".into()))
        );
        assert!(matches!(
            config.settings.components.get("Button"),
            Some(ComponentSetting::Detailed { native_tag, .. }) if native_tag == "button"
        ));
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("preset = [").expect_err("invalid toml");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("a11y-lint.toml");
        std::fs::write(&path, "[settings.components]\nNav = \"nav\"\n").expect("write config");

        let config = Config::from_file(&path).expect("config loads");
        assert_eq!(config.settings.components.len(), 1);

        let missing = Config::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}

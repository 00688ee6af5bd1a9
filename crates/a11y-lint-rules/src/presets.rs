//! Rule presets for common configurations.

use crate::registry::{self, RULES};
use crate::{AltText, AnchorIsValid, AriaRole, FormControlHasLabel};
use a11y_lint_core::{Config, ConfigError, RuleBox, RuleConfig, Severity};
use std::str::FromStr;

const MINIMAL: &[&str] = &[
    crate::alt_text::NAME,
    crate::form_control_has_label::NAME,
    crate::anchor_is_valid::NAME,
    crate::aria_role::NAME,
];

/// Preset configurations for a11y-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Every built-in rule at its default severity.
    #[default]
    Recommended,
    /// Every built-in rule at `Error`.
    Strict,
    /// A small set for gradual adoption.
    Minimal,
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recommended" => Ok(Self::Recommended),
            "strict" => Ok(Self::Strict),
            "minimal" => Ok(Self::Minimal),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }

    /// Names of the rules this preset enables.
    #[must_use]
    pub fn rule_names(self) -> Vec<&'static str> {
        match self {
            Self::Recommended | Self::Strict => registry::rule_names(),
            Self::Minimal => MINIMAL.to_vec(),
        }
    }

    /// Builds this preset's rules with options from `config`.
    ///
    /// Rules outside the preset are added when their table sets
    /// `enabled = true`. Rules disabled in `config` are still returned; the
    /// linter skips them.
    #[must_use]
    pub fn configured_rules(self, config: &Config) -> Vec<RuleBox> {
        let included = self.rule_names();
        RULES
            .iter()
            .filter(|info| {
                included.contains(&info.name)
                    || config.rule(info.name).and_then(|r| r.enabled) == Some(true)
            })
            .map(|info| {
                let mut rule_config = config.rule(info.name).cloned().unwrap_or_default();
                if self == Self::Strict && rule_config.severity.is_none() {
                    rule_config.severity = Some(Severity::Error);
                }
                (info.build)(&rule_config)
            })
            .collect()
    }
}

/// Returns the recommended set of rules: every built-in rule.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    all_rules()
}

/// Returns the strict set of rules.
///
/// Same rules as [`recommended_rules`], all reporting at `Error`.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    let config = RuleConfig {
        severity: Some(Severity::Error),
        ..RuleConfig::default()
    };
    RULES.iter().map(|info| (info.build)(&config)).collect()
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes:
/// - `alt-text` (A11Y012)
/// - `form-control-has-label` (A11Y005)
/// - `anchor-is-valid` (A11Y002)
/// - `aria-role` (A11Y008)
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![
        Box::new(AltText::new()),
        Box::new(FormControlHasLabel::new()),
        Box::new(AnchorIsValid::new()),
        Box::new(AriaRole::new()),
    ]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    let config = RuleConfig::default();
    RULES.iter().map(|info| (info.build)(&config)).collect()
}

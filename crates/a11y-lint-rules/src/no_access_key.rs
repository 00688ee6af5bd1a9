//! Rule forbidding `accessKey`.
//!
//! # Rationale
//!
//! Access keys collide with shortcuts of browsers and assistive technology
//! and are rarely discoverable.
//!
//! # Configuration
//!
//! No options.
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(no-access-key) reason="..." */}`

use a11y_lint_core::attributes::get_attribute;
use a11y_lint_core::{
    AttributeValue, Diagnostic, ElementNode, Rule, RuleConfig, RuleContext, Severity,
    StaticValue, Suggestion,
};

/// Rule code for no-access-key.
pub const CODE: &str = "A11Y014";

/// Rule name for no-access-key.
pub const NAME: &str = "no-access-key";

/// Forbids `accessKey` / `accesskey`.
#[derive(Debug, Clone)]
pub struct NoAccessKey {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoAccessKey {
    fn default() -> Self {
        Self::new()
    }
}

impl NoAccessKey {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Creates the rule from its `[rules.no-access-key]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let mut rule = Self::new();
        if let Some(severity) = config.severity {
            rule.severity = severity;
        }
        rule
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoAccessKey {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "accessKey must not be used"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[(
            "noAccessKey",
            "No access key attribute allowed; inconsistencies between keyboard shortcuts and keyboard commands used by screen readers and keyboard-only users create accessibility complications",
        )]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        let Some(attr) = get_attribute(node, "accessKey") else {
            return Vec::new();
        };
        // An empty value assigns no key.
        if let AttributeValue::Static(StaticValue::Str(s)) = attr.value {
            if s.trim().is_empty() {
                return Vec::new();
            }
        }

        vec![ctx
            .report_at(self, attr.span, "noAccessKey")
            .with_suggestion(Suggestion::with_fix(
                "Remove the accessKey attribute",
                ctx.removal(attr.span),
            ))]
    }
}

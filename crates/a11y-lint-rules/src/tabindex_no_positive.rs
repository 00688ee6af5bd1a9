//! Rule forbidding positive `tabIndex` values.
//!
//! # Rationale
//!
//! A positive `tabIndex` pulls the element ahead of the document order,
//! which breaks the expected focus sequence. Use `0` to make an element
//! focusable and `-1` to make it programmatically focusable.
//!
//! # Configuration
//!
//! No options.
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(tabindex-no-positive) reason="..." */}`

use a11y_lint_core::attributes::{get_attribute, get_static_value};
use a11y_lint_core::{Diagnostic, ElementNode, Rule, RuleConfig, RuleContext, Severity};

/// Rule code for tabindex-no-positive.
pub const CODE: &str = "A11Y010";

/// Rule name for tabindex-no-positive.
pub const NAME: &str = "tabindex-no-positive";

/// Forbids `tabIndex` greater than zero.
#[derive(Debug, Clone)]
pub struct TabindexNoPositive {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for TabindexNoPositive {
    fn default() -> Self {
        Self::new()
    }
}

impl TabindexNoPositive {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Creates the rule from its `[rules.tabindex-no-positive]` table.
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

impl Rule for TabindexNoPositive {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "tabIndex must not be greater than zero"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[(
            "positiveTabIndex",
            "Avoid positive tabIndex values ({{value}}); use 0 or -1",
        )]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        let Some(value) = get_static_value(node, "tabIndex") else {
            return Vec::new();
        };
        if !value.as_number().is_some_and(|n| n > 0.0) {
            return Vec::new();
        }

        let span = get_attribute(node, "tabIndex").map_or(node.span(), |attr| attr.span);
        vec![ctx
            .report_at(self, span, "positiveTabIndex")
            .with_data("value", value.to_string())]
    }
}

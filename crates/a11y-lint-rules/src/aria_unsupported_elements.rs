//! Rule forbidding ARIA on elements that cannot carry it.
//!
//! # Rationale
//!
//! Elements such as `<meta>`, `<html>`, `<script>` and `<style>` are never
//! rendered to the accessibility tree, so `role` and `aria-*` on them are
//! dead markup.
//!
//! # Configuration
//!
//! No options.
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(aria-unsupported-elements) reason="..." */}`

use crate::aria::RESERVED_ELEMENTS;
use a11y_lint_core::attributes::attributes;
use a11y_lint_core::{
    Diagnostic, ElementNode, Rule, RuleConfig, RuleContext, Severity, Suggestion,
};

/// Rule code for aria-unsupported-elements.
pub const CODE: &str = "A11Y015";

/// Rule name for aria-unsupported-elements.
pub const NAME: &str = "aria-unsupported-elements";

/// Forbids `role` and `aria-*` on reserved elements.
#[derive(Debug, Clone)]
pub struct AriaUnsupportedElements {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for AriaUnsupportedElements {
    fn default() -> Self {
        Self::new()
    }
}

impl AriaUnsupportedElements {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.aria-unsupported-elements]` table.
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

impl Rule for AriaUnsupportedElements {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Reserved elements must not have role or aria-* attributes"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[(
            "unsupportedAttribute",
            "<{{element}}> does not support ARIA roles, states or properties; remove '{{attribute}}'",
        )]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        let Some(tag) = ctx.native_tag(node) else {
            return Vec::new();
        };
        if !RESERVED_ELEMENTS.contains(&tag) {
            return Vec::new();
        }

        attributes(node)
            .filter_map(|entry| {
                let name = entry.name?;
                let lower = name.to_ascii_lowercase();
                (lower == "role" || lower.starts_with("aria-")).then(|| {
                    ctx.report_at(self, entry.span, "unsupportedAttribute")
                        .with_data("element", node.name())
                        .with_data("attribute", name)
                        .with_suggestion(Suggestion::with_fix(
                            format!("Remove {name}"),
                            ctx.removal(entry.span),
                        ))
                })
            })
            .collect()
    }
}

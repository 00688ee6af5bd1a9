//! Rule requiring anchors to have accessible content.
//!
//! # Rationale
//!
//! A link with no text is announced as "link" and nothing else. Content may
//! come from text, a non-hidden child element, an expression, or a label
//! attribute (`aria-label`, `aria-labelledby`, `title`).
//!
//! Anchors with a spread are skipped since the spread may pass `children`.
//!
//! # Configuration
//!
//! No options.
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(anchor-has-content) reason="..." */}`

use crate::aria::is_truthy;
use a11y_lint_core::attributes::{get_static_value, has_any_attribute, has_directive, has_spread};
use a11y_lint_core::{
    Diagnostic, ElementNode, JsExpr, NodeChild, Rule, RuleConfig, RuleContext, Severity,
};

/// Rule code for anchor-has-content.
pub const CODE: &str = "A11Y013";

/// Rule name for anchor-has-content.
pub const NAME: &str = "anchor-has-content";

const CONTENT_ATTRIBUTES: &[&str] = &[
    "aria-label",
    "aria-labelledby",
    "title",
    "children",
    "dangerouslySetInnerHTML",
];

/// Requires anchors to render something a screen reader can announce.
#[derive(Debug, Clone)]
pub struct AnchorHasContent {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for AnchorHasContent {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorHasContent {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.anchor-has-content]` table.
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

fn is_empty_expression(expr: &JsExpr) -> bool {
    match expr {
        JsExpr::Null | JsExpr::Bool(_) => true,
        JsExpr::Identifier(name) => name == "undefined",
        JsExpr::String(s) => s.trim().is_empty(),
        JsExpr::Template(quasis) => quasis.len() == 1 && quasis[0].trim().is_empty(),
        JsExpr::Number(_) | JsExpr::Other(_) => false,
    }
}

fn has_accessible_child(node: ElementNode<'_>) -> bool {
    node.children().into_iter().any(|child| match child {
        NodeChild::Text(text) => !text.trim().is_empty(),
        NodeChild::Expression(expr) => !is_empty_expression(expr),
        NodeChild::Element(el) => !is_truthy(get_static_value(el, "aria-hidden")),
    })
}

impl Rule for AnchorHasContent {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Anchors must have content that screen readers can announce"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[(
            "missingContent",
            "Anchors must have content and the content must be accessible to screen readers",
        )]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        if ctx.native_tag(node) != Some("a") {
            return Vec::new();
        }
        if has_accessible_child(node)
            || has_any_attribute(node, CONTENT_ATTRIBUTES)
            || has_directive(node, "html")
            || has_directive(node, "text")
            || has_spread(node)
        {
            return Vec::new();
        }
        vec![ctx.report(self, node, "missingContent")]
    }
}

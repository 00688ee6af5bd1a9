//! Rule requiring alternative text on images and image-like controls.
//!
//! # Rationale
//!
//! Screen readers announce an image without `alt` by its file name, or not
//! at all. `alt=""` is the correct way to mark an image as decorative.
//!
//! Checked elements: `<img>`, `<area>` and `<input type="image">`. An
//! element with a spread is skipped since the spread may supply `alt`.
//!
//! # Configuration
//!
//! No options.
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(alt-text) reason="..." */}`

use crate::aria::{input_type, is_presentation_role, primary_role};
use a11y_lint_core::attributes::{has_any_attribute, has_attribute, has_spread};
use a11y_lint_core::{Diagnostic, ElementNode, Rule, RuleConfig, RuleContext, Severity};

/// Rule code for alt-text.
pub const CODE: &str = "A11Y012";

/// Rule name for alt-text.
pub const NAME: &str = "alt-text";

const LABEL_ATTRIBUTES: &[&str] = &["aria-label", "aria-labelledby"];

/// Requires `alt` (or an ARIA label) on image elements.
#[derive(Debug, Clone)]
pub struct AltText {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for AltText {
    fn default() -> Self {
        Self::new()
    }
}

impl AltText {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.alt-text]` table.
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

impl Rule for AltText {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Images, image maps and image buttons must have alternative text"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[
            (
                "missingAlt",
                "<{{element}}> must have an alt attribute; use alt=\"\" for decorative images",
            ),
            (
                "preferAlt",
                "<{{element}}> with role '{{role}}' should use alt=\"\" instead",
            ),
            (
                "missingAreaAlt",
                "<{{element}}> must have alt, aria-label or aria-labelledby describing the link target",
            ),
            (
                "missingInputAlt",
                "<{{element}} type=\"image\"> must have alt, aria-label or aria-labelledby",
            ),
        ]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        let message_id = match ctx.native_tag(node) {
            Some("img") => "missingAlt",
            Some("area") => "missingAreaAlt",
            Some("input") if input_type(node).as_deref() == Some("image") => "missingInputAlt",
            _ => return Vec::new(),
        };
        if has_attribute(node, "alt")
            || has_any_attribute(node, LABEL_ATTRIBUTES)
            || has_spread(node)
        {
            return Vec::new();
        }

        if message_id == "missingAlt" && is_presentation_role(node) {
            return vec![ctx
                .report(self, node, "preferAlt")
                .with_data("element", node.name())
                .with_data("role", primary_role(node).unwrap_or_default())];
        }
        vec![ctx
            .report(self, node, message_id)
            .with_data("element", node.name())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lint_jsx, lint_template};
    use a11y_lint_core::{JsExpr, JsxElement, TemplateElement};

    fn check(root: JsxElement) -> Vec<Diagnostic> {
        lint_jsx(AltText::new(), root)
    }

    #[test]
    fn test_missing_alt() {
        let violations = check(JsxElement::new("img").attr("src", "logo.png"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].message_id, "missingAlt");
    }

    #[test]
    fn test_alt_or_label_passes() {
        assert!(check(JsxElement::new("img").attr("alt", "")).is_empty());
        assert!(check(JsxElement::new("img").attr_expr("alt", "caption")).is_empty());
        assert!(check(JsxElement::new("area").attr("aria-label", "Home")).is_empty());
    }

    #[test]
    fn test_presentation_prefers_empty_alt() {
        let violations = check(JsxElement::new("img").attr("role", "presentation"));
        assert_eq!(violations[0].message_id, "preferAlt");
        assert_eq!(violations[0].data["role"], "presentation");
    }

    #[test]
    fn test_image_inputs_and_areas() {
        assert_eq!(check(JsxElement::new("area"))[0].message_id, "missingAreaAlt");
        assert_eq!(
            check(JsxElement::new("input").attr("type", "image"))[0].message_id,
            "missingInputAlt"
        );
        assert!(check(JsxElement::new("input").attr("type", "text")).is_empty());
    }

    #[test]
    fn test_spread_may_supply_alt() {
        assert!(check(JsxElement::new("img").spread()).is_empty());
        let vue = TemplateElement::new("img").directive("v-bind", JsExpr::Identifier("image".into()));
        assert!(lint_template(AltText::new(), vue).is_empty());
    }
}

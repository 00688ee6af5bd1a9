//! Rule restricting the `scope` attribute to table headers.
//!
//! # Rationale
//!
//! Screen readers use `scope` on `<th>` to associate header cells with the
//! data they label. Anywhere else, or with an unknown value, it is ignored
//! and the table reads without headers.
//!
//! # Configuration
//!
//! No options.
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(scope) reason="..." */}`

use a11y_lint_core::attributes::{get_static_string_value, has_attribute};
use a11y_lint_core::{Diagnostic, ElementNode, Rule, RuleConfig, RuleContext, Severity};

/// Rule code for scope.
pub const CODE: &str = "A11Y003";

/// Rule name for scope.
pub const NAME: &str = "scope";

const VALID_SCOPES: &[&str] = &["col", "row", "colgroup", "rowgroup"];

/// Validates placement and value of `scope`.
#[derive(Debug, Clone)]
pub struct Scope {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.scope]` table.
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

impl Rule for Scope {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "The scope attribute is only valid on <th> with col, row, colgroup or rowgroup"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[
            (
                "invalidElement",
                "The scope attribute can only be used on <th> elements, not <{{element}}>",
            ),
            (
                "invalidValue",
                "'{{value}}' is not a valid scope; use col, row, colgroup or rowgroup",
            ),
        ]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        if !has_attribute(node, "scope") {
            return Vec::new();
        }
        let Some(tag) = ctx.native_tag(node) else {
            return Vec::new();
        };

        if tag != "th" {
            return vec![ctx
                .report(self, node, "invalidElement")
                .with_data("element", node.name())];
        }

        match get_static_string_value(node, "scope") {
            Some(value) if !VALID_SCOPES.contains(&value.trim().to_ascii_lowercase().as_str()) => {
                vec![ctx
                    .report(self, node, "invalidValue")
                    .with_data("value", value)]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lint_jsx, lint_template};
    use a11y_lint_core::{JsxElement, TemplateElement};

    fn check(root: JsxElement) -> Vec<Diagnostic> {
        lint_jsx(Scope::new(), root)
    }

    #[test]
    fn test_valid_header_scope() {
        assert!(check(JsxElement::new("th").attr("scope", "col")).is_empty());
        assert!(check(JsxElement::new("th").attr("scope", "RowGroup")).is_empty());
        assert!(check(JsxElement::new("th").attr_expr("scope", "dir")).is_empty());
    }

    #[test]
    fn test_invalid_value() {
        let violations = check(JsxElement::new("th").attr("scope", "column"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].message_id, "invalidValue");
        assert_eq!(violations[0].data["value"], "column");
    }

    #[test]
    fn test_invalid_element() {
        let violations = check(JsxElement::new("td").attr("scope", "col"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message_id, "invalidElement");
        assert_eq!(violations[0].data["element"], "td");
    }

    #[test]
    fn test_components_are_skipped() {
        assert!(check(JsxElement::new("Cell").attr("scope", "col")).is_empty());
    }

    #[test]
    fn test_template_attribute_case() {
        let violations = lint_template(Scope::new(), TemplateElement::new("td").attr("SCOPE", "row"));
        assert_eq!(violations[0].message_id, "invalidElement");
    }
}

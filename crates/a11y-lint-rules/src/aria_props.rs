//! Rule requiring `aria-*` attributes to be real ARIA properties.
//!
//! # Rationale
//!
//! A typo such as `aria-labeledby` silently drops the label. Every
//! `aria-*` attribute must name a WAI-ARIA state or property.
//!
//! # Configuration
//!
//! No options.
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(aria-props) reason="..." */}`

use crate::aria::is_aria_prop;
use a11y_lint_core::attributes::attributes;
use a11y_lint_core::{Diagnostic, ElementNode, Rule, RuleConfig, RuleContext, Severity};

/// Rule code for aria-props.
pub const CODE: &str = "A11Y009";

/// Rule name for aria-props.
pub const NAME: &str = "aria-props";

/// Reports unknown `aria-*` attribute names.
#[derive(Debug, Clone)]
pub struct AriaProps {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for AriaProps {
    fn default() -> Self {
        Self::new()
    }
}

impl AriaProps {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.aria-props]` table.
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

impl Rule for AriaProps {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "aria-* attributes must be valid ARIA properties"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[("invalidProp", "'{{name}}' is not a valid ARIA property")]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        let fold_case = matches!(node, ElementNode::Template(_));
        attributes(node)
            .filter_map(|entry| {
                let name = entry.name?;
                let lower = name.to_ascii_lowercase();
                if !lower.starts_with("aria-") {
                    return None;
                }
                let known = if fold_case {
                    is_aria_prop(&lower)
                } else {
                    is_aria_prop(name)
                };
                (!known).then(|| {
                    ctx.report_at(self, entry.span, "invalidProp")
                        .with_data("name", name)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lint_jsx, lint_template};
    use a11y_lint_core::{JsExpr, JsxElement, TemplateElement};

    fn check(root: JsxElement) -> Vec<Diagnostic> {
        lint_jsx(AriaProps::new(), root)
    }

    #[test]
    fn test_known_props_pass() {
        let el = JsxElement::new("div")
            .attr("aria-label", "Close")
            .attr_expr("aria-expanded", "open")
            .attr("data-aria", "x");
        assert!(check(el).is_empty());
    }

    #[test]
    fn test_misspelled_prop() {
        let violations = check(JsxElement::new("input").attr("aria-labeledby", "name"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].data["name"], "aria-labeledby");
    }

    #[test]
    fn test_jsx_names_are_case_sensitive() {
        assert_eq!(check(JsxElement::new("div").attr("aria-Label", "x")).len(), 1);
    }

    #[test]
    fn test_template_bindings_and_case() {
        let el = TemplateElement::new("div")
            .attr("ARIA-HIDDEN", "true")
            .directive(":aria-describedby", JsExpr::Identifier("id".into()))
            .directive(":aria-foo", JsExpr::Identifier("id".into()));
        let violations = lint_template(AriaProps::new(), el);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].data["name"], "aria-foo");
    }
}

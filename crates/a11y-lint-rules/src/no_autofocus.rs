//! Rule forbidding `autoFocus`.
//!
//! # Rationale
//!
//! Moving focus on load skips content before the focused element and can
//! disorient screen reader users.
//!
//! # Configuration
//!
//! - `ignore_non_dom`: Skip components that do not resolve to a native
//!   element (default: false)
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(no-autofocus) reason="..." */}`

use a11y_lint_core::attributes::get_attribute;
use a11y_lint_core::{
    AttributeValue, Diagnostic, ElementNode, Rule, RuleConfig, RuleContext, Severity, StaticValue,
};

/// Rule code for no-autofocus.
pub const CODE: &str = "A11Y011";

/// Rule name for no-autofocus.
pub const NAME: &str = "no-autofocus";

/// Forbids `autoFocus` / `autofocus`.
#[derive(Debug, Clone)]
pub struct NoAutofocus {
    /// Skip unresolved components.
    pub ignore_non_dom: bool,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoAutofocus {
    fn default() -> Self {
        Self::new()
    }
}

impl NoAutofocus {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ignore_non_dom: false,
            severity: Severity::Warning,
        }
    }

    /// Creates the rule from its `[rules.no-autofocus]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let mut rule = Self::new().ignore_non_dom(config.get_bool("ignore_non_dom", false));
        if let Some(severity) = config.severity {
            rule.severity = severity;
        }
        rule
    }

    /// Sets whether unresolved components are skipped.
    #[must_use]
    pub fn ignore_non_dom(mut self, ignore: bool) -> Self {
        self.ignore_non_dom = ignore;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// `autoFocus={false}` and `autofocus="false"` are no-ops.
fn is_disabled(value: AttributeValue<'_>) -> bool {
    match value {
        AttributeValue::Static(StaticValue::Bool(b)) => !b,
        AttributeValue::Static(StaticValue::Str(s)) => s.trim().eq_ignore_ascii_case("false"),
        _ => false,
    }
}

impl Rule for NoAutofocus {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "autoFocus must not be used"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[(
            "noAutofocus",
            "The autoFocus attribute reduces usability and accessibility",
        )]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        if self.ignore_non_dom && ctx.native_tag(node).is_none() {
            return Vec::new();
        }

        // Template lookups already ignore case.
        let names: &[&str] = match node {
            ElementNode::Jsx(_) => &["autoFocus", "autofocus"],
            ElementNode::Template(_) => &["autofocus"],
        };
        names
            .iter()
            .filter_map(|name| get_attribute(node, name))
            .filter(|attr| !is_disabled(attr.value))
            .map(|attr| {
                ctx.report_at(self, attr.span, "noAutofocus")
                    .with_fix(ctx.removal(attr.span))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lint_file, lint_jsx, lint_template};
    use a11y_lint_core::{ComponentMapping, JsxAttribute, JsxElement, SourceFile, Span, TemplateElement};

    fn check(root: JsxElement) -> Vec<Diagnostic> {
        lint_jsx(NoAutofocus::new(), root)
    }

    #[test]
    fn test_autofocus_reported() {
        let violations = check(JsxElement::new("input").flag("autoFocus"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert!(violations[0].is_fixable());
    }

    #[test]
    fn test_false_and_absent_pass() {
        assert!(check(JsxElement::new("input").attr("autoFocus", false)).is_empty());
        assert!(check(JsxElement::new("input")).is_empty());
    }

    #[test]
    fn test_template_reported_once() {
        let violations = lint_template(NoAutofocus::new(), TemplateElement::new("input").flag("autofocus"));
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_ignore_non_dom() {
        let el = JsxElement::new("SearchBox").flag("autoFocus");
        assert_eq!(check(el.clone()).len(), 1);
        assert!(lint_jsx(NoAutofocus::new().ignore_non_dom(true), el).is_empty());
    }

    #[test]
    fn test_fix_span() {
        let source = "<input autoFocus />";
        let mut input = JsxElement::new("input").at(0, 19);
        input.attributes.push(JsxAttribute::Attribute {
            name: "autoFocus".into(),
            value: None,
            span: Span::new(7, 16),
        });
        let file = SourceFile::new("Search.tsx", source).with_jsx(input);
        let violations = lint_file(NoAutofocus::new(), file, ComponentMapping::default());

        let fix = violations[0].fix.as_ref().expect("fix should be attached");
        assert_eq!((fix.location.offset, fix.location.length), (6, 10));
        assert_eq!(violations[0].location.column, 8);
    }
}

//! Rule requiring hover handlers to have focus equivalents.
//!
//! # Rationale
//!
//! Content revealed on `mouseover` must also be revealed on `focus`, and
//! hidden again on `blur` where `mouseout` hides it, so keyboard users see
//! the same thing.
//!
//! # Configuration
//!
//! - `hover_in_handlers`: DOM events that need `focus` (default: `["mouseover"]`)
//! - `hover_out_handlers`: DOM events that need `blur` (default: `["mouseout"]`)
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(mouse-events-have-key-events) reason="..." */}`

use a11y_lint_core::handlers::has_event_handler;
use a11y_lint_core::{Diagnostic, ElementNode, Rule, RuleConfig, RuleContext, Severity};

/// Rule code for mouse-events-have-key-events.
pub const CODE: &str = "A11Y007";

/// Rule name for mouse-events-have-key-events.
pub const NAME: &str = "mouse-events-have-key-events";

/// Requires `focus`/`blur` next to hover handlers.
#[derive(Debug, Clone)]
pub struct MouseEventsHaveKeyEvents {
    /// Events that must be paired with `focus`.
    pub hover_in_handlers: Vec<String>,
    /// Events that must be paired with `blur`.
    pub hover_out_handlers: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MouseEventsHaveKeyEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseEventsHaveKeyEvents {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hover_in_handlers: vec!["mouseover".to_string()],
            hover_out_handlers: vec!["mouseout".to_string()],
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.mouse-events-have-key-events]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let mut rule = Self::new();
        if config.options.contains_key("hover_in_handlers") {
            rule = rule.hover_in_handlers(config.get_str_array("hover_in_handlers"));
        }
        if config.options.contains_key("hover_out_handlers") {
            rule = rule.hover_out_handlers(config.get_str_array("hover_out_handlers"));
        }
        if let Some(severity) = config.severity {
            rule.severity = severity;
        }
        rule
    }

    /// Sets events that must be paired with `focus`.
    #[must_use]
    pub fn hover_in_handlers<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hover_in_handlers = events.into_iter().map(Into::into).collect();
        self
    }

    /// Sets events that must be paired with `blur`.
    #[must_use]
    pub fn hover_out_handlers<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hover_out_handlers = events.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for MouseEventsHaveKeyEvents {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Hover handlers must be accompanied by focus and blur handlers"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("missingFocus", "'{{event}}' must be accompanied by a focus handler"),
            ("missingBlur", "'{{event}}' must be accompanied by a blur handler"),
        ]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        if ctx.native_tag(node).is_none() {
            return Vec::new();
        }

        let pairs = [
            (&self.hover_in_handlers, "focus", "missingFocus"),
            (&self.hover_out_handlers, "blur", "missingBlur"),
        ];
        let mut diagnostics = Vec::new();
        for (events, required, message_id) in pairs {
            if has_event_handler(node, required) {
                continue;
            }
            if let Some(event) = events.iter().find(|e| has_event_handler(node, e)) {
                diagnostics.push(
                    ctx.report(self, node, message_id)
                        .with_data("event", event.as_str()),
                );
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lint_jsx, lint_template};
    use a11y_lint_core::{JsExpr, JsxElement, TemplateElement};

    fn check(root: JsxElement) -> Vec<Diagnostic> {
        lint_jsx(MouseEventsHaveKeyEvents::new(), root)
    }

    #[test]
    fn test_hover_without_focus_or_blur() {
        let el = JsxElement::new("div")
            .attr_expr("onMouseOver", "show")
            .attr_expr("onMouseOut", "hide");
        let violations = check(el);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].message_id, "missingFocus");
        assert_eq!(violations[1].message_id, "missingBlur");
        assert_eq!(violations[1].data["event"], "mouseout");
    }

    #[test]
    fn test_paired_handlers_pass() {
        let el = JsxElement::new("div")
            .attr_expr("onMouseOver", "show")
            .attr_expr("onFocus", "show")
            .attr_expr("onMouseOut", "hide")
            .attr_expr("onBlur", "hide");
        assert!(check(el).is_empty());
    }

    #[test]
    fn test_custom_hover_events() {
        let el = JsxElement::new("div").attr_expr("onMouseEnter", "show");
        assert!(check(el.clone()).is_empty());

        let rule = MouseEventsHaveKeyEvents::new().hover_in_handlers(["mouseover", "mouseenter"]);
        assert_eq!(lint_jsx(rule, el).len(), 1);
    }

    #[test]
    fn test_template_listeners() {
        let el = TemplateElement::new("li")
            .directive("@mouseover", JsExpr::Identifier("show".into()))
            .directive("@focus", JsExpr::Identifier("show".into()));
        assert!(lint_template(MouseEventsHaveKeyEvents::new(), el).is_empty());
    }
}

//! Rule requiring click handlers to be paired with keyboard handlers.
//!
//! # Rationale
//!
//! A click handler on a `<div>` is unreachable for keyboard and switch
//! users. Native controls already translate Enter and Space into clicks, so
//! only non-interactive elements are checked.
//!
//! # Configuration
//!
//! No options.
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(click-events-have-key-events) reason="..." */}`

use crate::aria::{is_hidden_from_screen_reader, is_interactive_element, is_presentation_role};
use a11y_lint_core::handlers::handler_categories;
use a11y_lint_core::{
    Diagnostic, ElementNode, HandlerCategory, Rule, RuleConfig, RuleContext, Severity,
};

/// Rule code for click-events-have-key-events.
pub const CODE: &str = "A11Y006";

/// Rule name for click-events-have-key-events.
pub const NAME: &str = "click-events-have-key-events";

/// Requires a keyboard handler next to every click handler.
#[derive(Debug, Clone)]
pub struct ClickEventsHaveKeyEvents {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ClickEventsHaveKeyEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickEventsHaveKeyEvents {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.click-events-have-key-events]` table.
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

impl Rule for ClickEventsHaveKeyEvents {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Click handlers on non-interactive elements need a keyboard handler"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[(
            "missingKeyEvent",
            "<{{element}}> has a click handler but no keyboard handler (keydown, keyup or keypress)",
        )]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        let categories = handler_categories(node);
        if !categories.contains(HandlerCategory::Click)
            || categories.contains(HandlerCategory::Keyboard)
        {
            return Vec::new();
        }
        let Some(tag) = ctx.native_tag(node) else {
            return Vec::new();
        };
        if is_interactive_element(tag, node)
            || is_hidden_from_screen_reader(tag, node)
            || is_presentation_role(node)
        {
            return Vec::new();
        }

        vec![ctx
            .report(self, node, "missingKeyEvent")
            .with_data("element", node.name())]
    }
}

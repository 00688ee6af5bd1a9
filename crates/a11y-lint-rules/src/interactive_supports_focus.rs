//! Rule requiring elements with interactive roles to be focusable.
//!
//! # Rationale
//!
//! A `<div role="button">` looks like a button to assistive technology but
//! cannot be reached with the Tab key unless it has a `tabIndex`, and does
//! nothing on Enter or Space unless it listens for keyboard events.
//!
//! # Configuration
//!
//! No options.
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(interactive-supports-focus) reason="..." */}`

use crate::aria::{
    is_hidden_from_screen_reader, is_interactive_element, is_interactive_role, primary_role,
    is_truthy,
};
use a11y_lint_core::attributes::{get_static_value, has_attribute};
use a11y_lint_core::handlers::has_handler;
use a11y_lint_core::{
    Diagnostic, ElementNode, HandlerCategory, Rule, RuleConfig, RuleContext, Severity,
};

/// Rule code for interactive-supports-focus.
pub const CODE: &str = "A11Y001";

/// Rule name for interactive-supports-focus.
pub const NAME: &str = "interactive-supports-focus";

/// Requires `tabIndex` and a keyboard handler on non-native widgets.
#[derive(Debug, Clone)]
pub struct InteractiveSupportsFocus {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for InteractiveSupportsFocus {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveSupportsFocus {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.interactive-supports-focus]` table.
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

impl Rule for InteractiveSupportsFocus {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Elements with interactive roles must be focusable and keyboard operable"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[
            (
                "notFocusable",
                "<{{element}}> with the interactive role '{{role}}' must be focusable: add tabIndex and a keyboard handler",
            ),
            (
                "noKeyboardHandler",
                "<{{element}}> with the interactive role '{{role}}' must handle keyboard events",
            ),
        ]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        let Some(tag) = ctx.native_tag(node) else {
            return Vec::new();
        };
        let Some(role) = primary_role(node) else {
            return Vec::new();
        };
        if !is_interactive_role(&role)
            || is_interactive_element(tag, node)
            || is_hidden_from_screen_reader(tag, node)
            || is_truthy(get_static_value(node, "aria-disabled"))
        {
            return Vec::new();
        }

        let focusable = has_attribute(node, "tabIndex");
        let keyboard = has_handler(node, HandlerCategory::Keyboard);
        let message_id = match (focusable, keyboard) {
            (true, true) => return Vec::new(),
            (false, _) => "notFocusable",
            (true, false) => "noKeyboardHandler",
        };

        vec![ctx
            .report(self, node, message_id)
            .with_data("element", node.name())
            .with_data("role", role)]
    }
}

//! Rule requiring `role` values to be concrete ARIA roles.
//!
//! # Rationale
//!
//! Misspelled or abstract roles (`role="buton"`, `role="widget"`) are
//! ignored by assistive technology, leaving the element without the
//! semantics the author intended.
//!
//! # Configuration
//!
//! - `ignore_non_dom`: Skip components that do not resolve to a native
//!   element (default: false)
//! - `allowed_invalid_roles`: Role tokens accepted anyway (default: none)
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(aria-role) reason="..." */}`

use crate::aria::{is_abstract_role, is_valid_role};
use a11y_lint_core::attributes::get_static_value;
use a11y_lint_core::{Diagnostic, ElementNode, Rule, RuleConfig, RuleContext, Severity};

/// Rule code for aria-role.
pub const CODE: &str = "A11Y008";

/// Rule name for aria-role.
pub const NAME: &str = "aria-role";

/// Validates every token of `role`.
#[derive(Debug, Clone)]
pub struct AriaRole {
    /// Skip unresolved components.
    pub ignore_non_dom: bool,
    /// Tokens accepted without checking.
    pub allowed_invalid_roles: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for AriaRole {
    fn default() -> Self {
        Self::new()
    }
}

impl AriaRole {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ignore_non_dom: false,
            allowed_invalid_roles: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.aria-role]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let mut rule = Self::new()
            .ignore_non_dom(config.get_bool("ignore_non_dom", false))
            .allowed_invalid_roles(config.get_str_array("allowed_invalid_roles"));
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

    /// Sets tokens accepted without checking.
    #[must_use]
    pub fn allowed_invalid_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_invalid_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for AriaRole {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Elements with ARIA roles must use valid, non-abstract roles"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("invalidRole", "'{{role}}' is not a valid ARIA role"),
            (
                "abstractRole",
                "'{{role}}' is an abstract ARIA role and must not be used in markup",
            ),
        ]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        if self.ignore_non_dom && ctx.native_tag(node).is_none() {
            return Vec::new();
        }
        let Some(value) = get_static_value(node, "role") else {
            return Vec::new();
        };

        let value = value.to_string().to_ascii_lowercase();
        let tokens: Vec<&str> = value.split_whitespace().collect();
        if tokens.is_empty() {
            return vec![ctx.report(self, node, "invalidRole").with_data("role", "")];
        }

        tokens
            .into_iter()
            .filter(|token| !self.allowed_invalid_roles.iter().any(|r| r.eq_ignore_ascii_case(token)))
            .filter_map(|token| {
                let message_id = if is_abstract_role(token) {
                    "abstractRole"
                } else if is_valid_role(token) {
                    return None;
                } else {
                    "invalidRole"
                };
                Some(ctx.report(self, node, message_id).with_data("role", token))
            })
            .collect()
    }
}

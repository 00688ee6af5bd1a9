//! Rule forbidding explicit roles that repeat the implicit one.
//!
//! # Rationale
//!
//! `<nav role="navigation">` says the same thing twice. Redundant roles add
//! noise and drift out of sync when the element changes.
//!
//! Components are judged by the native element they render, so with
//! `Nav = "nav"` configured, `<Nav role="navigation">` is reported as well.
//!
//! # Configuration
//!
//! - `ignore_roles`: Roles never reported as redundant (default: none)
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(no-redundant-roles) reason="..." */}`

use crate::aria::{implicit_role, static_role};
use a11y_lint_core::attributes::get_attribute;
use a11y_lint_core::{Diagnostic, ElementNode, Rule, RuleConfig, RuleContext, Severity};

/// Rule code for no-redundant-roles.
pub const CODE: &str = "A11Y004";

/// Rule name for no-redundant-roles.
pub const NAME: &str = "no-redundant-roles";

/// Forbids `role` values equal to the element's implicit role.
#[derive(Debug, Clone)]
pub struct NoRedundantRoles {
    /// Roles that are never reported.
    pub ignore_roles: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoRedundantRoles {
    fn default() -> Self {
        Self::new()
    }
}

impl NoRedundantRoles {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ignore_roles: Vec::new(),
            severity: Severity::Warning,
        }
    }

    /// Creates the rule from its `[rules.no-redundant-roles]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let mut rule = Self::new().ignore_roles(config.get_str_array("ignore_roles"));
        if let Some(severity) = config.severity {
            rule.severity = severity;
        }
        rule
    }

    /// Sets roles that are never reported.
    #[must_use]
    pub fn ignore_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoRedundantRoles {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Explicit roles must not repeat the implicit role of the element"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[(
            "redundantRole",
            "<{{element}}> already has the implicit role '{{role}}'; remove the role attribute",
        )]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        let Some(tag) = ctx.native_tag(node) else {
            return Vec::new();
        };
        let Some(role) = static_role(node) else {
            return Vec::new();
        };
        if implicit_role(tag, node) != Some(role.as_str())
            || self.ignore_roles.iter().any(|r| r.eq_ignore_ascii_case(&role))
        {
            return Vec::new();
        }

        let mut diagnostic = ctx
            .report(self, node, "redundantRole")
            .with_data("element", node.name())
            .with_data("role", role);
        if let Some(attr) = get_attribute(node, "role") {
            diagnostic = diagnostic.with_fix(ctx.removal(attr.span));
        }
        vec![diagnostic]
    }
}

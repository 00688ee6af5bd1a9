//! Rule requiring form controls to have an accessible label.
//!
//! # Rationale
//!
//! An unlabeled `<input>` is announced only as "edit text". Controls need
//! `aria-label`, `aria-labelledby`, an `id` a `<label for>` can point at,
//! or an enclosing `<label>`.
//!
//! A spread (`{...props}`, `v-bind="attrs"`) is not taken as a label: the
//! control is reported unless a label is visible in the markup.
//!
//! # Configuration
//!
//! - `label_attributes`: Extra attributes accepted as a label, e.g. `label`
//!   for a design-system input (default: none)
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(form-control-has-label) reason="..." */}`

use crate::aria::{input_type, UNLABELLED_INPUT_TYPES};
use a11y_lint_core::attributes::has_any_attribute;
use a11y_lint_core::{Diagnostic, ElementNode, Rule, RuleConfig, RuleContext, Severity};

/// Rule code for form-control-has-label.
pub const CODE: &str = "A11Y005";

/// Rule name for form-control-has-label.
pub const NAME: &str = "form-control-has-label";

const LABEL_ATTRIBUTES: &[&str] = &["aria-label", "aria-labelledby", "id"];

/// Requires `input`, `select` and `textarea` to be labelled.
#[derive(Debug, Clone)]
pub struct FormControlHasLabel {
    /// Extra attributes that count as a label.
    pub label_attributes: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for FormControlHasLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl FormControlHasLabel {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            label_attributes: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.form-control-has-label]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let mut rule = Self::new().label_attributes(config.get_str_array("label_attributes"));
        if let Some(severity) = config.severity {
            rule.severity = severity;
        }
        rule
    }

    /// Sets extra attributes that count as a label.
    #[must_use]
    pub fn label_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_attributes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn has_label_attribute(&self, node: ElementNode<'_>) -> bool {
        let extra: Vec<&str> = self.label_attributes.iter().map(String::as_str).collect();
        has_any_attribute(node, LABEL_ATTRIBUTES) || has_any_attribute(node, &extra)
    }
}

impl Rule for FormControlHasLabel {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Form controls must have an associated label"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[(
            "missingLabel",
            "<{{element}}> must have an accessible label: add aria-label, aria-labelledby, an id referenced by <label for>, or wrap it in <label>",
        )]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        match ctx.native_tag(node) {
            Some("select" | "textarea") => {}
            Some("input") => {
                let exempt = input_type(node)
                    .is_some_and(|t| UNLABELLED_INPUT_TYPES.contains(&t.as_str()));
                if exempt {
                    return Vec::new();
                }
            }
            _ => return Vec::new(),
        }

        if self.has_label_attribute(node) {
            return Vec::new();
        }
        let wrapped = ctx
            .find_ancestor(|ancestor| ctx.native_tag(ancestor) == Some("label"))
            .is_some();
        if wrapped {
            return Vec::new();
        }

        vec![ctx
            .report(self, node, "missingLabel")
            .with_data("element", node.name())]
    }
}

//! Rule trait for defining lint rules.

use crate::context::RuleContext;
use crate::node::{Dialect, ElementNode};
use crate::types::{Diagnostic, Severity};

/// Both dialects.
pub const ALL_DIALECTS: &[Dialect] = &[Dialect::Jsx, Dialect::Template];

/// A per-element accessibility rule.
///
/// The linter streams every element node of a file to every enabled rule
/// that registered for the node's dialect. Rules read through the
/// [`RuleContext`] and return their findings; they hold no mutable state.
///
/// # Example
///
/// ```ignore
/// use a11y_lint_core::{Diagnostic, ElementNode, Rule, RuleContext};
///
/// pub struct NoMarquee;
///
/// impl Rule for NoMarquee {
///     fn name(&self) -> &'static str { "no-marquee" }
///     fn code(&self) -> &'static str { "X001" }
///     fn messages(&self) -> &'static [(&'static str, &'static str)] {
///         &[("noMarquee", "Avoid <marquee>")]
///     }
///
///     fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
///         if node.name() == "marquee" {
///             vec![ctx.report(self, node, "noMarquee")]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "alt-text").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "A11Y012").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether an allow directive for this rule must carry a reason, given
    /// the severity the rule runs at.
    fn requires_allow_reason(&self, severity: Severity) -> bool {
        severity == Severity::Error
    }

    /// Dialects this rule registers for.
    fn dialects(&self) -> &'static [Dialect] {
        ALL_DIALECTS
    }

    /// Message templates keyed by message id.
    fn messages(&self) -> &'static [(&'static str, &'static str)];

    /// Looks up the template for `message_id`.
    fn message(&self, message_id: &str) -> Option<&'static str> {
        self.messages()
            .iter()
            .find(|(id, _)| *id == message_id)
            .map(|(_, template)| *template)
    }

    /// Checks one element and returns any diagnostics found.
    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }
        fn dialects(&self) -> &'static [Dialect] {
            &[Dialect::Template]
        }
        fn messages(&self) -> &'static [(&'static str, &'static str)] {
            &[("found", "Found <{{element}}>")]
        }

        fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
            vec![ctx.report(self, node, "found").with_data("element", node.name())]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert!(rule.requires_allow_reason(Severity::Error));
        assert!(!rule.requires_allow_reason(Severity::Warning));
        assert_eq!(rule.dialects(), &[Dialect::Template]);
        assert_eq!(rule.message("found"), Some("Found <{{element}}>"));
        assert_eq!(rule.message("missing"), None);
    }

    #[test]
    fn test_rule_is_object_safe() {
        let boxed: RuleBox = Box::new(TestRule);
        assert_eq!(boxed.code(), "TEST001");
    }
}

//! Rule requiring anchors to be real links.
//!
//! # Rationale
//!
//! An anchor without a usable `href` is not announced as a link, cannot be
//! opened in a new tab and is skipped by keyboard users. Anchors that only
//! exist to run a click handler should be buttons.
//!
//! # Configuration
//!
//! - `aspects`: Checks to run, any of `noHref`, `invalidHref`, `preferButton`
//!   (default: all three)
//! - `special_link`: Extra attributes that act as `href`, e.g. `to` for
//!   router links (default: none)
//!
//! # Suppression
//!
//! - `{/* a11y-lint: allow(anchor-is-valid) reason="..." */}`

use a11y_lint_core::attributes::{get_attribute, get_static_value};
use a11y_lint_core::handlers::has_handler;
use a11y_lint_core::{
    Diagnostic, ElementNode, HandlerCategory, Rule, RuleConfig, RuleContext, Severity,
};

/// Rule code for anchor-is-valid.
pub const CODE: &str = "A11Y002";

/// Rule name for anchor-is-valid.
pub const NAME: &str = "anchor-is-valid";

/// The independent checks of [`AnchorIsValid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    /// Anchor without any `href`.
    NoHref,
    /// `href` is `#`, empty or a `javascript:` URL.
    InvalidHref,
    /// Anchor used as a click target.
    PreferButton,
}

impl Aspect {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "noHref" => Some(Self::NoHref),
            "invalidHref" => Some(Self::InvalidHref),
            "preferButton" => Some(Self::PreferButton),
            _ => None,
        }
    }
}

/// Requires anchors to carry a navigable `href`.
#[derive(Debug, Clone)]
pub struct AnchorIsValid {
    /// Enabled checks.
    pub aspects: Vec<Aspect>,
    /// Attributes treated like `href`.
    pub special_link: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for AnchorIsValid {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorIsValid {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            aspects: vec![Aspect::NoHref, Aspect::InvalidHref, Aspect::PreferButton],
            special_link: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.anchor-is-valid]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let mut rule = Self::new().special_link(config.get_str_array("special_link"));
        let aspects = config.get_str_array("aspects");
        if !aspects.is_empty() {
            let parsed: Vec<Aspect> = aspects
                .iter()
                .filter_map(|name| {
                    let aspect = Aspect::parse(name);
                    if aspect.is_none() {
                        tracing::warn!(rule = NAME, aspect = %name, "ignoring unknown aspect");
                    }
                    aspect
                })
                .collect();
            rule = rule.aspects(parsed);
        }
        if let Some(severity) = config.severity {
            rule.severity = severity;
        }
        rule
    }

    /// Sets the enabled checks.
    #[must_use]
    pub fn aspects(mut self, aspects: impl IntoIterator<Item = Aspect>) -> Self {
        self.aspects = aspects.into_iter().collect();
        self
    }

    /// Sets extra attributes that act as `href`.
    #[must_use]
    pub fn special_link<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_link = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn enabled(&self, aspect: Aspect) -> bool {
        self.aspects.contains(&aspect)
    }
}

/// `#`, empty, or a `javascript:` URL.
fn is_invalid_href(href: &str) -> bool {
    let trimmed = href.trim();
    if trimmed.is_empty() || trimmed == "#" {
        return true;
    }
    let scheme = trimmed.trim_start_matches(|c: char| !c.is_alphanumeric());
    scheme
        .get(..11)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("javascript:"))
}

impl Rule for AnchorIsValid {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Anchors must have a valid href and must not stand in for buttons"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[
            (
                "noHref",
                "The href attribute is required for an anchor to be keyboard accessible",
            ),
            (
                "invalidHref",
                "'{{href}}' is not a valid href; provide a URL or path to navigate to",
            ),
            (
                "preferButton",
                "Anchor used as a button; use a <button> for click actions",
            ),
        ]
    }

    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        if ctx.native_tag(node) != Some("a") {
            return Vec::new();
        }

        let href_names = std::iter::once("href").chain(self.special_link.iter().map(String::as_str));
        let hrefs: Vec<&str> = href_names
            .filter(|name| get_attribute(node, name).is_some())
            .collect();
        let clickable = has_handler(node, HandlerCategory::Click);

        if hrefs.is_empty() {
            if clickable {
                return self.report_if(ctx, node, Aspect::PreferButton, None);
            }
            return self.report_if(ctx, node, Aspect::NoHref, None);
        }

        // Only literal values can be judged; any dynamic href is trusted.
        let invalid = hrefs.iter().find_map(|name| {
            let value = get_static_value(node, name)?.to_string();
            is_invalid_href(&value).then_some(value)
        });
        match invalid {
            Some(_) if clickable => self.report_if(ctx, node, Aspect::PreferButton, None),
            Some(href) => self.report_if(ctx, node, Aspect::InvalidHref, Some(href)),
            None => Vec::new(),
        }
    }
}

impl AnchorIsValid {
    fn report_if(
        &self,
        ctx: &RuleContext<'_>,
        node: ElementNode<'_>,
        aspect: Aspect,
        href: Option<String>,
    ) -> Vec<Diagnostic> {
        if !self.enabled(aspect) {
            return Vec::new();
        }
        let message_id = match aspect {
            Aspect::NoHref => "noHref",
            Aspect::InvalidHref => "invalidHref",
            Aspect::PreferButton => "preferButton",
        };
        let diagnostic = ctx.report(self, node, message_id);
        vec![match href {
            Some(href) => diagnostic.with_data("href", href),
            None => diagnostic,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lint_jsx, lint_mapped, lint_template};
    use a11y_lint_core::{ComponentMapping, JsExpr, JsxElement, TemplateElement};

    fn check(root: JsxElement) -> Vec<Diagnostic> {
        lint_jsx(AnchorIsValid::new(), root)
    }

    #[test]
    fn test_valid_links_pass() {
        assert!(check(JsxElement::new("a").attr("href", "/home").text("Home")).is_empty());
        assert!(check(JsxElement::new("a").attr_expr("href", "url")).is_empty());
        assert!(check(JsxElement::new("a").attr("href", "#section")).is_empty());
    }

    #[test]
    fn test_javascript_href() {
        let violations = check(JsxElement::new("a").attr("href", "javascript:void(0)").text("Go"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].message_id, "invalidHref");
        assert_eq!(violations[0].data["href"], "javascript:void(0)");
        insta::assert_snapshot!(
            violations[0].message,
            @"'javascript:void(0)' is not a valid href; provide a URL or path to navigate to"
        );
    }

    #[test]
    fn test_hash_and_empty_hrefs() {
        assert_eq!(check(JsxElement::new("a").attr("href", "#"))[0].message_id, "invalidHref");
        assert_eq!(check(JsxElement::new("a").attr("href", ""))[0].message_id, "invalidHref");
        assert_eq!(
            check(JsxElement::new("a").attr("href", "  JavaScript:alert(1)"))[0].message_id,
            "invalidHref"
        );
    }

    #[test]
    fn test_missing_href() {
        let violations = check(JsxElement::new("a").text("Nowhere"));
        assert_eq!(violations[0].message_id, "noHref");
    }

    #[test]
    fn test_click_handlers_prefer_button() {
        let no_href = JsxElement::new("a").attr_expr("onClick", "go");
        let hash = JsxElement::new("a").attr("href", "#").attr_expr("onClick", "go");
        assert_eq!(check(no_href)[0].message_id, "preferButton");
        assert_eq!(check(hash)[0].message_id, "preferButton");
    }

    #[test]
    fn test_aspects_filter_reports() {
        let rule = AnchorIsValid::new().aspects([Aspect::InvalidHref]);
        assert!(lint_jsx(rule, JsxElement::new("a")).is_empty());
    }

    #[test]
    fn test_special_link_on_mapped_component() {
        let mapping = ComponentMapping::builder()
            .component("Link", "a")
            .build()
            .expect("mapping should build");
        let link = JsxElement::new("Link").attr("to", "/about");
        assert_eq!(lint_mapped(AnchorIsValid::new(), link.clone(), mapping.clone()).len(), 1);

        let rule = AnchorIsValid::new().special_link(["to"]);
        assert!(lint_mapped(rule, link, mapping).is_empty());
    }

    #[test]
    fn test_template_bindings() {
        let literal = TemplateElement::new("a").directive(":href", "#");
        let dynamic = TemplateElement::new("a").directive(":href", JsExpr::Identifier("to".into()));
        assert_eq!(lint_template(AnchorIsValid::new(), literal).len(), 1);
        assert!(lint_template(AnchorIsValid::new(), dynamic).is_empty());
    }
}

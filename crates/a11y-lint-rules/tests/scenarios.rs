//! End-to-end behaviour of the built-in rules through the linter.

use a11y_lint_core::{
    Comment, CommentKind, ComponentMapping, Diagnostic, JsExpr, JsxElement, Linter, Severity,
    SourceFile, Span, TemplateElement,
};
use a11y_lint_rules::{
    all_rules, AltText, AnchorIsValid, FormControlHasLabel, InteractiveSupportsFocus,
    NoRedundantRoles, Preset, Scope,
};
use std::sync::Arc;

fn jsx(root: JsxElement) -> Arc<SourceFile> {
    Arc::new(SourceFile::new("App.tsx", "").with_jsx(root))
}

fn lint_with(linter: &Linter, file: &Arc<SourceFile>) -> Vec<Diagnostic> {
    linter.lint(file).diagnostics
}

#[test]
fn focusable_widget_is_clean() {
    let linter = Linter::builder()
        .rule(InteractiveSupportsFocus::new())
        .build()
        .expect("linter should build");
    let file = jsx(
        JsxElement::new("div")
            .attr("role", "button")
            .attr("tabIndex", 0)
            .attr_expr("onKeyDown", "fn"),
    );
    assert!(lint_with(&linter, &file).is_empty());
}

#[test]
fn role_without_focus_is_reported() {
    let linter = Linter::builder()
        .rule(InteractiveSupportsFocus::new())
        .build()
        .expect("linter should build");
    let diagnostics = lint_with(&linter, &jsx(JsxElement::new("div").attr("role", "button")));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, "interactive-supports-focus");
    assert_eq!(diagnostics[0].data["element"], "div");
    assert_eq!(diagnostics[0].data["role"], "button");
}

#[test]
fn javascript_href_is_invalid() {
    let linter = Linter::builder()
        .rule(AnchorIsValid::new())
        .build()
        .expect("linter should build");
    let file = jsx(JsxElement::new("a").attr("href", "javascript:void(0)").text("Go"));
    let diagnostics = lint_with(&linter, &file);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message_id, "invalidHref");
    assert_eq!(diagnostics[0].data["href"], "javascript:void(0)");
}

#[test]
fn scope_value_and_placement() {
    let linter = Linter::builder()
        .rule(Scope::new())
        .build()
        .expect("linter should build");

    let header = lint_with(&linter, &jsx(JsxElement::new("th").attr("scope", "column")));
    assert_eq!(header.len(), 1);
    assert_eq!(header[0].message_id, "invalidValue");

    let cell = lint_with(&linter, &jsx(JsxElement::new("td").attr("scope", "col")));
    assert_eq!(cell.len(), 1);
    assert_eq!(cell[0].message_id, "invalidElement");
}

#[test]
fn mapped_component_has_redundant_role() {
    let mapping = ComponentMapping::builder()
        .component("Nav", "nav")
        .build()
        .expect("mapping should build");
    let linter = Linter::builder()
        .rule(NoRedundantRoles::new())
        .components(mapping)
        .build()
        .expect("linter should build");

    let diagnostics = lint_with(&linter, &jsx(JsxElement::new("Nav").attr("role", "navigation")));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, "no-redundant-roles");
}

#[test]
fn template_spread_does_not_label_input() {
    let linter = Linter::builder()
        .rule(FormControlHasLabel::new())
        .build()
        .expect("linter should build");
    let input = TemplateElement::new("input").directive("v-bind", JsExpr::Identifier("attrs".into()));
    let file = Arc::new(SourceFile::new("Form.vue", "").with_template(input));

    let diagnostics = lint_with(&linter, &file);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, "form-control-has-label");
}

fn sample_page() -> Arc<SourceFile> {
    jsx(
        JsxElement::new("main")
            .attr("role", "main")
            .child(JsxElement::new("img").attr("src", "hero.png"))
            .child(
                JsxElement::new("a")
                    .attr("href", "#")
                    .attr("tabIndex", 2)
                    .attr("accessKey", "h"),
            )
            .child(JsxElement::new("div").attr_expr("onClick", "open").attr("role", "widget"))
            .child(JsxElement::new("input").flag("autoFocus")),
    )
}

#[test]
fn relinting_gives_identical_results() {
    let linter = Linter::builder()
        .rules(all_rules())
        .build()
        .expect("linter should build");
    let file = sample_page();
    assert_eq!(lint_with(&linter, &file), lint_with(&linter, &file));
}

#[test]
fn single_pass_matches_rule_by_rule() {
    let file = sample_page();
    let together = Linter::builder()
        .rules(all_rules())
        .build()
        .expect("linter should build");
    let combined = lint_with(&together, &file);

    let mut separate: Vec<Diagnostic> = all_rules()
        .into_iter()
        .flat_map(|rule| {
            let linter = Linter::builder()
                .rule_box(rule)
                .build()
                .expect("linter should build");
            lint_with(&linter, &file)
        })
        .collect();
    separate.sort_by(|a, b| {
        a.location
            .offset
            .cmp(&b.location.offset)
            .then_with(|| a.code.cmp(&b.code))
    });

    assert_eq!(combined.len(), separate.len());
    let mut combined_keys: Vec<_> = combined.iter().map(|d| (d.code.clone(), d.message_id.clone())).collect();
    let mut separate_keys: Vec<_> = separate.iter().map(|d| (d.code.clone(), d.message_id.clone())).collect();
    combined_keys.sort();
    separate_keys.sort();
    assert_eq!(combined_keys, separate_keys);
}

#[test]
fn sample_page_reports_each_problem() {
    let linter = Linter::builder()
        .rules(Preset::Recommended.rules())
        .build()
        .expect("linter should build");
    let rules: Vec<String> = lint_with(&linter, &sample_page())
        .into_iter()
        .map(|d| d.rule)
        .collect();

    for expected in [
        "no-redundant-roles",
        "alt-text",
        "anchor-is-valid",
        "tabindex-no-positive",
        "no-access-key",
        "aria-role",
        "click-events-have-key-events",
        "no-autofocus",
        "form-control-has-label",
    ] {
        assert!(rules.iter().any(|r| r == expected), "missing {expected} in {rules:?}");
    }
}

#[test]
fn polymorphic_prop_changes_the_checked_element() {
    let mapping = ComponentMapping::builder()
        .component("Button", "button")
        .build()
        .expect("mapping should build");
    let linter = Linter::builder()
        .rule(AnchorIsValid::new())
        .components(mapping)
        .build()
        .expect("linter should build");

    let as_button = lint_with(&linter, &jsx(JsxElement::new("Button").text("Save")));
    let as_link = lint_with(&linter, &jsx(JsxElement::new("Button").attr("as", "a").text("Save")));
    assert!(as_button.is_empty());
    assert_eq!(as_link.len(), 1);
    assert_eq!(as_link[0].message_id, "noHref");
}

#[test]
fn spread_never_creates_violations() {
    let linter = Linter::builder()
        .rules(all_rules())
        .build()
        .expect("linter should build");
    let plain = JsxElement::new("img").attr("src", "a.png");
    let spread = plain.clone().spread();

    let without = lint_with(&linter, &jsx(plain));
    let with = lint_with(&linter, &jsx(spread));
    assert!(with.len() <= without.len());
    assert!(with.is_empty());
}

#[test]
fn allow_directive_with_reason_suppresses_builtin_rule() {
    let source = "<div>\n  {/* a11y-lint: allow(alt-text) reason=\"decorative sprite\" */}\n  <img src=\"x.png\" />\n</div>\n";
    let img_start = source.find("<img").expect("img in source");
    let img_end = img_start + "<img src=\"x.png\" />".len();
    let comment_start = source.find("/*").expect("comment in source");
    let comment_end = source.find("*/").expect("comment end") + 2;

    let root = JsxElement::new("div")
        .at(0, source.len() - 1)
        .child(JsxElement::new("img").attr("src", "x.png").at(img_start, img_end));
    let file = Arc::new(
        SourceFile::new("Sprite.tsx", source)
            .with_jsx(root)
            .with_comment(Comment::new(
                CommentKind::Block,
                " a11y-lint: allow(alt-text) reason=\"decorative sprite\" ",
                Span::new(comment_start, comment_end),
            )),
    );

    let linter = Linter::builder()
        .rule(AltText::new())
        .build()
        .expect("linter should build");
    assert!(lint_with(&linter, &file).is_empty());
}

#[test]
fn allow_directive_without_reason_warns_for_error_rules() {
    let source = "<div>\n  {/* a11y-lint: allow(alt-text) */}\n  <img />\n</div>\n";
    let img_start = source.find("<img").expect("img in source");
    let comment_start = source.find("/*").expect("comment in source");
    let comment_end = source.find("*/").expect("comment end") + 2;

    let root = JsxElement::new("div")
        .at(0, source.len() - 1)
        .child(JsxElement::new("img").at(img_start, img_start + 7));
    let file = Arc::new(
        SourceFile::new("Sprite.tsx", source)
            .with_jsx(root)
            .with_comment(Comment::new(
                CommentKind::Block,
                " a11y-lint: allow(alt-text) ",
                Span::new(comment_start, comment_end),
            )),
    );

    let linter = Linter::builder()
        .rule(AltText::new())
        .build()
        .expect("linter should build");
    let diagnostics = lint_with(&linter, &file);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].message_id, "missingAllowReason");
}

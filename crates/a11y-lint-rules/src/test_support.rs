//! Helpers that run a single rule through the linter.

use a11y_lint_core::{
    ComponentMapping, Diagnostic, JsxElement, Linter, Rule, SourceFile, TemplateElement,
};
use std::sync::Arc;

pub(crate) fn lint_file<R: Rule + 'static>(
    rule: R,
    file: SourceFile,
    components: ComponentMapping,
) -> Vec<Diagnostic> {
    let linter = Linter::builder()
        .rule(rule)
        .components(components)
        .build()
        .expect("linter should build");
    linter.lint(&Arc::new(file)).diagnostics
}

pub(crate) fn lint_jsx<R: Rule + 'static>(rule: R, root: JsxElement) -> Vec<Diagnostic> {
    lint_file(
        rule,
        SourceFile::new("Test.tsx", "").with_jsx(root),
        ComponentMapping::default(),
    )
}

pub(crate) fn lint_template<R: Rule + 'static>(rule: R, root: TemplateElement) -> Vec<Diagnostic> {
    lint_file(
        rule,
        SourceFile::new("Test.vue", "").with_template(root),
        ComponentMapping::default(),
    )
}

pub(crate) fn lint_mapped<R: Rule + 'static>(
    rule: R,
    root: JsxElement,
    components: ComponentMapping,
) -> Vec<Diagnostic> {
    lint_file(rule, SourceFile::new("Test.tsx", "").with_jsx(root), components)
}

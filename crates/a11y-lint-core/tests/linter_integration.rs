//! Integration test: host JSON trees through the linter end-to-end.
//!
//! Uses fixture files under `tests/fixtures/` to verify that a file handed
//! over as JSON deserializes, walks, honours allow directives and reports
//! positions derived from the source text.

use a11y_lint_core::{
    Diagnostic, ElementNode, Linter, Rule, RuleContext, Severity, SourceFile,
};
use std::path::PathBuf;
use std::sync::Arc;

struct NoDiv;

impl Rule for NoDiv {
    fn name(&self) -> &'static str {
        "no-div"
    }
    fn code(&self) -> &'static str {
        "T100"
    }
    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        &[("noDiv", "<div> inside <{{parent}}>")]
    }
    fn check<'a>(&self, ctx: &RuleContext<'a>, node: ElementNode<'a>) -> Vec<Diagnostic> {
        if node.name() != "div" {
            return vec![];
        }
        let parent = ctx.parent().map_or("root", ElementNode::name);
        vec![ctx.report(self, node, "noDiv").with_data("parent", parent)]
    }
}

fn fixture(name: &str) -> Arc<SourceFile> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let json = std::fs::read_to_string(path).expect("fixture should exist");
    Arc::new(serde_json::from_str(&json).expect("fixture should deserialize"))
}

#[test]
fn json_fixture_lints_with_allow_directive() {
    let file = fixture("menu.json");
    let linter = Linter::builder().rule(NoDiv).build().expect("linter should build");
    let result = linter.lint(&file);

    assert_eq!(
        result.diagnostics.len(),
        1,
        "expected only the second <div>: {:#?}",
        result.diagnostics
    );
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.location.line, 4);
    assert_eq!(diagnostic.location.column, 3);
    assert_eq!(diagnostic.severity, Severity::Error);
    insta::assert_snapshot!(diagnostic.to_string(), @"src/Menu.tsx:4:3: error [T100] <div> inside <nav>");
}

#[test]
fn relinting_is_idempotent_and_reuses_cache() {
    let file = fixture("menu.json");
    let linter = Linter::builder().rule(NoDiv).build().expect("linter should build");

    let first = linter.lint(&file);
    let cached = linter.comment_cache().comments(&file);
    let second = linter.lint(&file);

    assert_eq!(first.diagnostics, second.diagnostics);
    assert!(std::rc::Rc::ptr_eq(&cached, &linter.comment_cache().comments(&file)));
}

#[test]
fn dropped_files_leave_the_cache() {
    let linter = Linter::builder().rule(NoDiv).build().expect("linter should build");
    {
        let file = fixture("menu.json");
        let _ = linter.lint(&file);
        assert_eq!(linter.comment_cache().len(), 1);
    }
    assert!(linter.comment_cache().is_empty());
}

#[test]
fn result_serializes_for_hosts() {
    let file = fixture("menu.json");
    let linter = Linter::builder().rule(NoDiv).build().expect("linter should build");
    let result = linter.lint(&file);

    let json = serde_json::to_value(&result).expect("result should serialize");
    assert_eq!(json["files_checked"], 1);
    assert_eq!(json["diagnostics"][0]["rule"], "no-div");
    assert_eq!(json["diagnostics"][0]["data"]["parent"], "nav");
}

//! Context types for rule execution.

use crate::comments::{CommentCache, NearbyComments};
use crate::components::{resolve_native_tag, ComponentMapping};
use crate::node::{ElementNode, SourceFile, Span};
use crate::rule::Rule;
use crate::types::{Diagnostic, Location, Replacement};
use std::path::Path;
use std::sync::Arc;

/// Position lookup for one file.
///
/// Line starts are computed once so that every diagnostic's location is a
/// binary search instead of a scan.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path of the file relative to the project root.
    pub path: &'a Path,
    /// File contents.
    pub content: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            path,
            content,
            line_starts,
        }
    }

    /// Converts a byte offset into a 1-indexed `(line, column)` pair.
    ///
    /// Columns count characters. Offsets past the end clamp to the end.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line.saturating_sub(1)];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        (line, column + 1)
    }

    /// Location of `span` in this file.
    #[must_use]
    pub fn location(&self, span: Span) -> Location {
        let (line, column) = self.line_col(span.start);
        Location::new(self.path.to_path_buf(), line, column).with_span(span.start, span.len())
    }

    /// Source text covered by `span`, if it lies on character boundaries.
    #[must_use]
    pub fn text(&self, span: Span) -> Option<&'a str> {
        self.content.get(span.start..span.end)
    }
}

/// Everything a rule may read while checking one node.
pub struct RuleContext<'a> {
    /// Position lookup for the file.
    pub file: &'a FileContext<'a>,
    /// The file being linted.
    pub source: &'a Arc<SourceFile>,
    /// Component mapping of the run.
    pub components: &'a ComponentMapping,
    /// Enclosing elements, outermost first.
    pub ancestors: &'a [ElementNode<'a>],
    comments: &'a CommentCache,
}

impl<'a> RuleContext<'a> {
    /// Creates a new rule context.
    #[must_use]
    pub fn new(
        file: &'a FileContext<'a>,
        source: &'a Arc<SourceFile>,
        components: &'a ComponentMapping,
        ancestors: &'a [ElementNode<'a>],
        comments: &'a CommentCache,
    ) -> Self {
        Self {
            file,
            source,
            components,
            ancestors,
            comments,
        }
    }

    /// Native tag `node` renders, per the component mapping.
    #[must_use]
    pub fn native_tag<'n>(&self, node: ElementNode<'n>) -> Option<&'n str>
    where
        'a: 'n,
    {
        resolve_native_tag(node, self.components)
    }

    /// Direct parent of the node being checked.
    #[must_use]
    pub fn parent(&self) -> Option<ElementNode<'a>> {
        self.ancestors.last().copied()
    }

    /// Nearest enclosing element matching `predicate`.
    pub fn find_ancestor(
        &self,
        mut predicate: impl FnMut(ElementNode<'a>) -> bool,
    ) -> Option<ElementNode<'a>> {
        self.ancestors.iter().rev().copied().find(|n| predicate(*n))
    }

    /// Comments within `window` bytes of `span`.
    #[must_use]
    pub fn comments_near(&self, span: Span, window: usize) -> NearbyComments {
        self.comments.comments_near(self.source, span, window)
    }

    /// Starts a diagnostic for `rule` on `node` with message `message_id`.
    #[must_use]
    pub fn report(&self, rule: &dyn Rule, node: ElementNode<'_>, message_id: &str) -> Diagnostic {
        self.report_at(rule, node.span(), message_id)
    }

    /// Starts a diagnostic for `rule` at `span`.
    ///
    /// Uses the rule's default severity; the linter applies overrides.
    #[must_use]
    pub fn report_at(&self, rule: &dyn Rule, span: Span, message_id: &str) -> Diagnostic {
        Diagnostic::new(
            rule.code(),
            rule.name(),
            rule.default_severity(),
            self.file.location(span),
            message_id,
            rule.message(message_id).unwrap_or(message_id),
        )
    }

    /// A replacement that deletes `span` along with the whitespace before it.
    #[must_use]
    pub fn removal(&self, span: Span) -> Replacement {
        let before = self.file.content.get(..span.start).unwrap_or("");
        let start = before.trim_end().len().min(span.start);
        let removed = Span::new(start, span.end);
        Replacement::new(self.file.location(removed), "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::JsxElement;

    #[test]
    fn test_line_col() {
        let content = "line1\nline2\nline3";
        let ctx = FileContext::new(Path::new("test.tsx"), content);

        assert_eq!(ctx.line_col(0), (1, 1));
        assert_eq!(ctx.line_col(6), (2, 1));
        assert_eq!(ctx.line_col(8), (2, 3));
        assert_eq!(ctx.line_col(5), (1, 6));
        assert_eq!(ctx.line_col(1000), (3, 6));
    }

    #[test]
    fn test_line_col_counts_characters() {
        let content = "<p>é<img/></p>";
        let ctx = FileContext::new(Path::new("test.tsx"), content);
        let img = content.find("<img").expect("img present");
        assert_eq!(ctx.line_col(img), (1, 5));
    }

    #[test]
    fn test_location_carries_span() {
        let content = "<div>\n  <img />\n</div>";
        let ctx = FileContext::new(Path::new("a.tsx"), content);
        let location = ctx.location(Span::new(8, 15));
        assert_eq!((location.line, location.column), (2, 3));
        assert_eq!((location.offset, location.length), (8, 7));
    }

    #[test]
    fn test_removal_eats_leading_whitespace() {
        let source = r#"<input  autoFocus />"#;
        let file = Arc::new(SourceFile::new("a.tsx", source));
        let file_ctx = FileContext::new(&file.path, &file.source);
        let mapping = ComponentMapping::default();
        let cache = CommentCache::new();
        let ctx = RuleContext::new(&file_ctx, &file, &mapping, &[], &cache);

        let attr = Span::new(8, 17);
        let fix = ctx.removal(attr);
        assert_eq!(fix.location.offset, 6);
        assert_eq!(fix.location.length, 11);
        assert_eq!(fix.new_text, "");
    }

    #[test]
    fn test_ancestor_lookup() {
        let file = Arc::new(SourceFile::new("a.tsx", ""));
        let file_ctx = FileContext::new(&file.path, &file.source);
        let mapping = ComponentMapping::default();
        let cache = CommentCache::new();
        let label = JsxElement::new("label");
        let span = JsxElement::new("span");
        let ancestors = [ElementNode::Jsx(&label), ElementNode::Jsx(&span)];
        let ctx = RuleContext::new(&file_ctx, &file, &mapping, &ancestors, &cache);

        assert_eq!(ctx.parent().map(ElementNode::name), Some("span"));
        assert!(ctx.find_ancestor(|n| n.name() == "label").is_some());
        assert!(ctx.find_ancestor(|n| n.name() == "form").is_none());
    }
}

//! Syntax tree model for the two template dialects.
//!
//! Trees are produced by host parser adapters and handed to the linter as a
//! [`SourceFile`]. Rules never see the owned trees directly; they receive an
//! [`ElementNode`], a borrowed tagged view over either dialect that is only
//! valid for the duration of one traversal.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Which template syntax a node was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// JSX / TSX element trees.
    Jsx,
    /// Template element trees (`<template>` blocks, Vue style directives).
    Template,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jsx => write!(f, "jsx"),
            Self::Template => write!(f, "template"),
        }
    }
}

/// Byte range `[start, end)` into the file's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub const fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true for zero-length spans.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Statically inspectable shape of an expression.
///
/// Parser adapters reduce arbitrary expressions to this form. Anything that
/// is not a plain literal ends up as [`JsExpr::Identifier`] or
/// [`JsExpr::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum JsExpr {
    /// String literal.
    String(String),
    /// Numeric literal.
    Number(f64),
    /// Boolean literal.
    Bool(bool),
    /// `null`.
    Null,
    /// Template literal; a single quasi means no substitutions.
    Template(Vec<String>),
    /// Bare identifier (including `undefined`).
    Identifier(String),
    /// Any other expression, carried as raw source text.
    Other(String),
}

impl From<&str> for JsExpr {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for JsExpr {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for JsExpr {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for JsExpr {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for JsExpr {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A JSX attribute or spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JsxAttribute {
    /// `name`, `name="literal"` or `name={expr}`.
    Attribute {
        /// Attribute name as written (`onClick`, `aria-label`, `xlink:href`).
        name: String,
        /// Value; `None` for valueless attributes.
        #[serde(default)]
        value: Option<JsExpr>,
        /// Source range of the whole attribute.
        #[serde(default)]
        span: Span,
    },
    /// `{...props}`.
    Spread {
        /// Source range of the spread.
        #[serde(default)]
        span: Span,
    },
}

/// Child of a JSX element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JsxChild {
    /// Nested element.
    Element(JsxElement),
    /// `<>...</>`.
    Fragment {
        /// Fragment children.
        children: Vec<JsxChild>,
    },
    /// Raw text.
    Text {
        /// Text content.
        text: String,
    },
    /// `{expr}` container.
    Expression {
        /// Contained expression.
        expr: JsExpr,
    },
}

/// A JSX element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxElement {
    /// Tag name (`div`, `Button`, `Foo.Bar`).
    pub name: String,
    /// Attributes in source order.
    #[serde(default)]
    pub attributes: Vec<JsxAttribute>,
    /// Children in source order.
    #[serde(default)]
    pub children: Vec<JsxChild>,
    /// Source range of the element.
    #[serde(default)]
    pub span: Span,
}

impl JsxElement {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            span: Span::default(),
        }
    }

    /// Adds `name={value}` (string values model `name="value"`).
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<JsExpr>) -> Self {
        self.attributes.push(JsxAttribute::Attribute {
            name: name.into(),
            value: Some(value.into()),
            span: Span::default(),
        });
        self
    }

    /// Adds an attribute whose value is an expression the host could not reduce.
    #[must_use]
    pub fn attr_expr(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.attr(name, JsExpr::Other(source.into()))
    }

    /// Adds a valueless attribute.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(JsxAttribute::Attribute {
            name: name.into(),
            value: None,
            span: Span::default(),
        });
        self
    }

    /// Adds `{...props}`.
    #[must_use]
    pub fn spread(mut self) -> Self {
        self.attributes.push(JsxAttribute::Spread {
            span: Span::default(),
        });
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn child(mut self, child: JsxElement) -> Self {
        self.children.push(JsxChild::Element(child));
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(JsxChild::Text { text: text.into() });
        self
    }

    /// Appends an expression container child.
    #[must_use]
    pub fn expr_child(mut self, expr: JsExpr) -> Self {
        self.children.push(JsxChild::Expression { expr });
        self
    }

    /// Sets the source range.
    #[must_use]
    pub fn at(mut self, start: usize, end: usize) -> Self {
        self.span = Span::new(start, end);
        self
    }
}

/// Value of a template attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateValue {
    /// Quoted text of a plain attribute.
    Text {
        /// Attribute text.
        text: String,
    },
    /// Parsed expression of a directive.
    Expression {
        /// Directive expression.
        expr: JsExpr,
    },
}

/// A template attribute or directive, keyed exactly as written.
///
/// `href`, `:href`, `v-bind:href.prop`, `v-bind`, `@click.stop`,
/// `v-on:keydown`, `v-model` are all carried verbatim in `key`; the attribute
/// resolver interprets the directive syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateAttribute {
    /// Raw attribute key.
    pub key: String,
    /// Value; `None` for valueless attributes.
    #[serde(default)]
    pub value: Option<TemplateValue>,
    /// Source range of the whole attribute.
    #[serde(default)]
    pub span: Span,
}

/// Child of a template element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateChild {
    /// Nested element.
    Element(TemplateElement),
    /// Raw text.
    Text {
        /// Text content.
        text: String,
    },
    /// `{{ expr }}`.
    Interpolation {
        /// Interpolated expression.
        expr: JsExpr,
    },
}

/// A template element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateElement {
    /// Tag name as written (`div`, `my-button`, `RouterLink`).
    pub name: String,
    /// Attributes and directives in source order.
    #[serde(default)]
    pub attributes: Vec<TemplateAttribute>,
    /// Children in source order.
    #[serde(default)]
    pub children: Vec<TemplateChild>,
    /// Source range of the element.
    #[serde(default)]
    pub span: Span,
}

impl TemplateElement {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            span: Span::default(),
        }
    }

    /// Adds a plain `key="text"` attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.attributes.push(TemplateAttribute {
            key: key.into(),
            value: Some(TemplateValue::Text { text: text.into() }),
            span: Span::default(),
        });
        self
    }

    /// Adds a directive with a parsed expression (`:href="url"`, `@click="go"`).
    #[must_use]
    pub fn directive(mut self, key: impl Into<String>, expr: impl Into<JsExpr>) -> Self {
        self.attributes.push(TemplateAttribute {
            key: key.into(),
            value: Some(TemplateValue::Expression { expr: expr.into() }),
            span: Span::default(),
        });
        self
    }

    /// Adds a valueless attribute or directive.
    #[must_use]
    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.attributes.push(TemplateAttribute {
            key: key.into(),
            value: None,
            span: Span::default(),
        });
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn child(mut self, child: TemplateElement) -> Self {
        self.children.push(TemplateChild::Element(child));
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(TemplateChild::Text { text: text.into() });
        self
    }

    /// Sets the source range.
    #[must_use]
    pub fn at(mut self, start: usize, end: usize) -> Self {
        self.span = Span::new(start, end);
        self
    }
}

/// Comment syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
    /// `<!-- ... -->`
    Html,
}

/// A comment token as reported by the parser adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment syntax.
    pub kind: CommentKind,
    /// Comment body without delimiters.
    pub text: String,
    /// Source range including delimiters.
    pub span: Span,
}

impl Comment {
    /// Creates a new comment.
    #[must_use]
    pub fn new(kind: CommentKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

/// A parsed file as handed over by the host.
///
/// Linting takes the file as `Arc<SourceFile>`; the allocation's identity is
/// the file identity used by the comment cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path of the file, relative to the host's project root.
    pub path: PathBuf,
    /// Full source text.
    #[serde(default)]
    pub source: String,
    /// Outermost JSX elements of the script.
    #[serde(default)]
    pub jsx: Vec<JsxElement>,
    /// Children of the template root.
    #[serde(default)]
    pub template: Vec<TemplateChild>,
    /// Script comments, in any order.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Template comments, in any order.
    #[serde(default)]
    pub template_comments: Vec<Comment>,
}

impl SourceFile {
    /// Creates an empty file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
            ..Self::default()
        }
    }

    /// Adds a top-level JSX element.
    #[must_use]
    pub fn with_jsx(mut self, element: JsxElement) -> Self {
        self.jsx.push(element);
        self
    }

    /// Adds a top-level template element.
    #[must_use]
    pub fn with_template(mut self, element: TemplateElement) -> Self {
        self.template.push(TemplateChild::Element(element));
        self
    }

    /// Adds a comment; HTML comments go to the template list.
    #[must_use]
    pub fn with_comment(mut self, comment: Comment) -> Self {
        if comment.kind == CommentKind::Html {
            self.template_comments.push(comment);
        } else {
            self.comments.push(comment);
        }
        self
    }
}

/// Structural problem found on a node before rules run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// The element has no tag name.
    #[error("element has an empty tag name")]
    EmptyTagName,

    /// The span ends before it starts.
    #[error("element span {start}..{end} is inverted")]
    InvertedSpan {
        /// Span start.
        start: usize,
        /// Span end.
        end: usize,
    },

    /// The span reaches past the end of the source.
    #[error("element span ends at {end} but the source is {len} bytes long")]
    SpanOutOfBounds {
        /// Span end.
        end: usize,
        /// Source length.
        len: usize,
    },
}

/// Borrowed view over an element of either dialect.
#[derive(Debug, Clone, Copy)]
pub enum ElementNode<'a> {
    /// JSX element.
    Jsx(&'a JsxElement),
    /// Template element.
    Template(&'a TemplateElement),
}

/// Child of an [`ElementNode`], with JSX fragments flattened away.
#[derive(Debug, Clone, Copy)]
pub enum NodeChild<'a> {
    /// Nested element.
    Element(ElementNode<'a>),
    /// Raw text.
    Text(&'a str),
    /// Expression container or interpolation.
    Expression(&'a JsExpr),
}

impl<'a> ElementNode<'a> {
    /// Dialect of this node.
    #[must_use]
    pub fn dialect(self) -> Dialect {
        match self {
            Self::Jsx(_) => Dialect::Jsx,
            Self::Template(_) => Dialect::Template,
        }
    }

    /// Tag name as written.
    #[must_use]
    pub fn name(self) -> &'a str {
        match self {
            Self::Jsx(el) => &el.name,
            Self::Template(el) => &el.name,
        }
    }

    /// Source range of the element.
    #[must_use]
    pub fn span(self) -> Span {
        match self {
            Self::Jsx(el) => el.span,
            Self::Template(el) => el.span,
        }
    }

    /// Children in source order, JSX fragments flattened.
    #[must_use]
    pub fn children(self) -> Vec<NodeChild<'a>> {
        let mut out = Vec::new();
        match self {
            Self::Jsx(el) => collect_jsx_children(&el.children, &mut out),
            Self::Template(el) => {
                for child in &el.children {
                    out.push(match child {
                        TemplateChild::Element(e) => NodeChild::Element(Self::Template(e)),
                        TemplateChild::Text { text } => NodeChild::Text(text),
                        TemplateChild::Interpolation { expr } => NodeChild::Expression(expr),
                    });
                }
            }
        }
        out
    }

    /// Child elements in source order.
    #[must_use]
    pub fn child_elements(self) -> Vec<ElementNode<'a>> {
        self.children()
            .into_iter()
            .filter_map(|child| match child {
                NodeChild::Element(node) => Some(node),
                _ => None,
            })
            .collect()
    }

    /// Checks the structural invariants rules rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(self, source_len: usize) -> Result<(), NodeError> {
        if self.name().trim().is_empty() {
            return Err(NodeError::EmptyTagName);
        }
        let span = self.span();
        if span.start > span.end {
            return Err(NodeError::InvertedSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > source_len {
            return Err(NodeError::SpanOutOfBounds {
                end: span.end,
                len: source_len,
            });
        }
        Ok(())
    }
}

fn collect_jsx_children<'a>(children: &'a [JsxChild], out: &mut Vec<NodeChild<'a>>) {
    for child in children {
        match child {
            JsxChild::Element(e) => out.push(NodeChild::Element(ElementNode::Jsx(e))),
            JsxChild::Fragment { children } => collect_jsx_children(children, out),
            JsxChild::Text { text } => out.push(NodeChild::Text(text)),
            JsxChild::Expression { expr } => out.push(NodeChild::Expression(expr)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_are_flattened() {
        let mut el = JsxElement::new("ul");
        el.children.push(JsxChild::Fragment {
            children: vec![
                JsxChild::Element(JsxElement::new("li")),
                JsxChild::Element(JsxElement::new("li")),
            ],
        });
        let el = el.text("tail");

        let node = ElementNode::Jsx(&el);
        assert_eq!(node.child_elements().len(), 2);
        assert_eq!(node.children().len(), 3);
    }

    #[test]
    fn validate_reports_structural_problems() {
        let empty = JsxElement::new("");
        assert_eq!(
            ElementNode::Jsx(&empty).validate(0),
            Err(NodeError::EmptyTagName)
        );

        let inverted = TemplateElement::new("div").at(5, 2);
        assert!(matches!(
            ElementNode::Template(&inverted).validate(10),
            Err(NodeError::InvertedSpan { .. })
        ));

        let past_end = TemplateElement::new("div").at(0, 20);
        assert!(matches!(
            ElementNode::Template(&past_end).validate(10),
            Err(NodeError::SpanOutOfBounds { end: 20, len: 10 })
        ));

        let ok = JsxElement::new("div").at(0, 7);
        assert!(ElementNode::Jsx(&ok).validate(7).is_ok());
    }

    #[test]
    fn html_comments_go_to_template_list() {
        let file = SourceFile::new("App.vue", "")
            .with_comment(Comment::new(CommentKind::Html, "x", Span::new(0, 8)))
            .with_comment(Comment::new(CommentKind::Line, "y", Span::new(9, 13)));
        assert_eq!(file.template_comments.len(), 1);
        assert_eq!(file.comments.len(), 1);
    }

    #[test]
    fn deserializes_host_json() {
        let json = r##"{
            "name": "a",
            "attributes": [
                { "kind": "attribute", "name": "href", "value": { "type": "string", "value": "#" } },
                { "kind": "spread" }
            ],
            "children": [ { "kind": "text", "text": "Go" } ]
        }"##;
        let el: JsxElement = serde_json::from_str(json).expect("valid element json");
        assert_eq!(el.name, "a");
        assert_eq!(el.attributes.len(), 2);
        assert!(matches!(el.attributes[1], JsxAttribute::Spread { .. }));
    }
}

//! Dialect-agnostic attribute resolution.
//!
//! Both dialects are adapted into a stream of [`AttributeEntry`] values:
//!
//! - JSX: `name`, `name="x"`, `name={expr}` and `{...spread}`.
//! - Template: plain attributes, `:name` / `v-bind:name` bindings and
//!   `v-bind="obj"` spreads. Event listeners (`@click`, `v-on:click`) and
//!   other directives (`v-model`, `v-if`) are not attributes.
//!
//! Spreads never make an attribute present. A literal followed by a spread
//! is still present, but its value is unknown because the spread may
//! override it.

use crate::node::{ElementNode, JsExpr, JsxAttribute, Span, TemplateAttribute, TemplateValue};

/// A literal known at analysis time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StaticValue<'a> {
    /// String literal.
    Str(&'a str),
    /// Numeric literal.
    Number(f64),
    /// Boolean literal (JSX valueless attributes are `true`).
    Bool(bool),
}

impl StaticValue<'_> {
    /// Returns the string if this is a string literal.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number, parsing string literals.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Str(s) => s.trim().parse().ok(),
            Self::Number(n) => Some(*n),
            Self::Bool(_) => None,
        }
    }
}

impl std::fmt::Display for StaticValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Resolved value of an attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue<'a> {
    /// Literal value.
    Static(StaticValue<'a>),
    /// Value exists but cannot be resolved statically. Not absent, not falsy.
    Dynamic,
}

impl<'a> AttributeValue<'a> {
    /// Returns the literal, if known.
    #[must_use]
    pub fn as_static(self) -> Option<StaticValue<'a>> {
        match self {
            Self::Static(v) => Some(v),
            Self::Dynamic => None,
        }
    }
}

/// One attribute of an element, resolved independently of dialect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeEntry<'a> {
    /// Attribute name; `None` for spreads and dynamically named bindings.
    pub name: Option<&'a str>,
    /// True for spreads (`{...props}`, `v-bind="obj"`, `:[name]="x"`).
    pub is_spread: bool,
    /// Attribute value.
    pub value: AttributeValue<'a>,
    /// Source range of the attribute.
    pub span: Span,
}

/// Parsed form of a raw template attribute key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TemplateKey<'a> {
    /// Plain attribute.
    Plain(&'a str),
    /// `:name`, `v-bind:name`, `.name`; `None` for spreads and `:[dynamic]`.
    Bind(Option<&'a str>),
    /// `@event`, `v-on:event`; `None` for `v-on="obj"` and `@[dynamic]`.
    On(Option<&'a str>),
    /// Any other directive, by name without the `v-` prefix.
    Directive(&'a str),
}

/// Strips directive modifiers and rejects dynamic arguments.
fn directive_argument(arg: &str) -> Option<&str> {
    if arg.starts_with('[') {
        return None;
    }
    let name = arg.split('.').next().unwrap_or(arg);
    (!name.is_empty()).then_some(name)
}

pub(crate) fn parse_template_key(key: &str) -> TemplateKey<'_> {
    if let Some(arg) = key.strip_prefix("v-bind:").or_else(|| key.strip_prefix(':')) {
        return TemplateKey::Bind(directive_argument(arg));
    }
    if let Some(arg) = key.strip_prefix('.') {
        return TemplateKey::Bind(directive_argument(arg));
    }
    if let Some(arg) = key.strip_prefix("v-on:").or_else(|| key.strip_prefix('@')) {
        return TemplateKey::On(directive_argument(arg));
    }
    if key == "v-bind" || key.starts_with("v-bind.") {
        return TemplateKey::Bind(None);
    }
    if key == "v-on" || key.starts_with("v-on.") {
        return TemplateKey::On(None);
    }
    if let Some(rest) = key.strip_prefix("v-") {
        let name = rest.split([':', '.']).next().unwrap_or(rest);
        return TemplateKey::Directive(name);
    }
    if key.starts_with('#') {
        return TemplateKey::Directive("slot");
    }
    TemplateKey::Plain(key)
}

fn expr_value(expr: &JsExpr) -> AttributeValue<'_> {
    match expr {
        JsExpr::String(s) => AttributeValue::Static(StaticValue::Str(s)),
        JsExpr::Number(n) => AttributeValue::Static(StaticValue::Number(*n)),
        JsExpr::Bool(b) => AttributeValue::Static(StaticValue::Bool(*b)),
        JsExpr::Template(quasis) if quasis.len() == 1 => {
            AttributeValue::Static(StaticValue::Str(&quasis[0]))
        }
        _ => AttributeValue::Dynamic,
    }
}

fn jsx_entry(attr: &JsxAttribute) -> AttributeEntry<'_> {
    match attr {
        JsxAttribute::Attribute { name, value, span } => AttributeEntry {
            name: Some(name),
            is_spread: false,
            value: value
                .as_ref()
                .map_or(AttributeValue::Static(StaticValue::Bool(true)), expr_value),
            span: *span,
        },
        JsxAttribute::Spread { span } => AttributeEntry {
            name: None,
            is_spread: true,
            value: AttributeValue::Dynamic,
            span: *span,
        },
    }
}

fn template_entry(attr: &TemplateAttribute) -> Option<AttributeEntry<'_>> {
    match parse_template_key(&attr.key) {
        TemplateKey::Plain(name) => Some(AttributeEntry {
            name: Some(name),
            is_spread: false,
            value: match &attr.value {
                None => AttributeValue::Static(StaticValue::Str("")),
                Some(TemplateValue::Text { text }) => AttributeValue::Static(StaticValue::Str(text)),
                Some(TemplateValue::Expression { expr }) => expr_value(expr),
            },
            span: attr.span,
        }),
        TemplateKey::Bind(name) => Some(AttributeEntry {
            name,
            is_spread: name.is_none(),
            value: match &attr.value {
                Some(TemplateValue::Expression { expr }) if name.is_some() => expr_value(expr),
                _ => AttributeValue::Dynamic,
            },
            span: attr.span,
        }),
        TemplateKey::On(_) | TemplateKey::Directive(_) => None,
    }
}

/// Iterator over the resolved attributes of a node.
#[derive(Debug, Clone)]
pub enum Attributes<'a> {
    /// JSX attributes.
    Jsx(std::slice::Iter<'a, JsxAttribute>),
    /// Template attributes.
    Template(std::slice::Iter<'a, TemplateAttribute>),
}

impl<'a> Iterator for Attributes<'a> {
    type Item = AttributeEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Jsx(iter) => iter.next().map(jsx_entry),
            Self::Template(iter) => iter.find_map(template_entry),
        }
    }
}

/// Resolved attributes of `node` in source order, spreads included.
#[must_use]
pub fn attributes(node: ElementNode<'_>) -> Attributes<'_> {
    match node {
        ElementNode::Jsx(el) => Attributes::Jsx(el.attributes.iter()),
        ElementNode::Template(el) => Attributes::Template(el.attributes.iter()),
    }
}

/// Name comparison: exact for JSX, ASCII case-insensitive for templates.
fn name_matches(node: ElementNode<'_>, entry: &AttributeEntry<'_>, wanted: &str) -> bool {
    match (node, entry.name) {
        (_, None) => false,
        (ElementNode::Jsx(_), Some(name)) => name == wanted,
        (ElementNode::Template(_), Some(name)) => name.eq_ignore_ascii_case(wanted),
    }
}

/// Returns true if `node` carries a non-spread attribute called `name`.
#[must_use]
pub fn has_attribute(node: ElementNode<'_>, name: &str) -> bool {
    attributes(node).any(|entry| name_matches(node, &entry, name))
}

/// Returns true if `node` carries any of `names`.
#[must_use]
pub fn has_any_attribute(node: ElementNode<'_>, names: &[&str]) -> bool {
    attributes(node).any(|entry| names.iter().any(|n| name_matches(node, &entry, n)))
}

/// Returns true if `node` has a spread attribute.
#[must_use]
pub fn has_spread(node: ElementNode<'_>) -> bool {
    attributes(node).any(|entry| entry.is_spread)
}

/// Returns the last attribute named `name`.
#[must_use]
pub fn get_attribute<'a>(node: ElementNode<'a>, name: &str) -> Option<AttributeEntry<'a>> {
    attributes(node)
        .filter(|entry| name_matches(node, entry, name))
        .last()
}

/// Returns the literal value of `name`, unless missing, dynamic, or
/// overridable by a later spread.
#[must_use]
pub fn get_static_value<'a>(node: ElementNode<'a>, name: &str) -> Option<StaticValue<'a>> {
    let mut found = None;
    let mut covered = false;
    for entry in attributes(node) {
        if entry.is_spread {
            covered |= found.is_some();
        } else if name_matches(node, &entry, name) {
            found = Some(entry);
            covered = false;
        }
    }
    if covered {
        return None;
    }
    found.and_then(|entry| entry.value.as_static())
}

/// Statically known value of `name` rendered as a string.
///
/// The value is returned exactly as written; callers normalize casing.
#[must_use]
pub fn get_static_string_value(node: ElementNode<'_>, name: &str) -> Option<String> {
    get_static_value(node, name).map(|value| value.to_string())
}

/// Borrowed string literal value of `name`; numbers and booleans are `None`.
#[must_use]
pub fn get_static_str<'a>(node: ElementNode<'a>, name: &str) -> Option<&'a str> {
    match get_static_value(node, name)? {
        StaticValue::Str(s) => Some(s),
        _ => None,
    }
}

/// Returns true if a template node carries directive `v-{name}`.
///
/// Always false for JSX.
#[must_use]
pub fn has_directive(node: ElementNode<'_>, name: &str) -> bool {
    match node {
        ElementNode::Jsx(_) => false,
        ElementNode::Template(el) => el.attributes.iter().any(|attr| {
            matches!(parse_template_key(&attr.key), TemplateKey::Directive(d) if d == name)
        }),
    }
}

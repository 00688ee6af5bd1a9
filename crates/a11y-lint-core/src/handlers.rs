//! Event-handler classification.
//!
//! Every supported DOM event belongs to exactly one [`HandlerCategory`]. The
//! event table is indexed once per dialect into a hash map keyed by the name
//! as it appears on the element (`onClick` / `onClickCapture` in JSX, the
//! directive argument `click` in templates). Template HTML handler
//! attributes such as `onclick` go through the template map too. A query is
//! one pass over the node's attributes with one map lookup per attribute.

use crate::attributes::{parse_template_key, TemplateKey};
use crate::node::{ElementNode, JsxAttribute, TemplateAttribute};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Handler category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerCategory {
    /// Click-like activation (`click`, `dblclick`, `contextmenu`).
    Click,
    /// Keyboard events.
    Keyboard,
    /// Pointer movement and button events other than click.
    Mouse,
    /// Focus changes.
    Focus,
}

impl HandlerCategory {
    /// All categories.
    pub const ALL: [Self; 4] = [Self::Click, Self::Keyboard, Self::Mouse, Self::Focus];

    const fn bit(self) -> u8 {
        match self {
            Self::Click => 1,
            Self::Keyboard => 2,
            Self::Mouse => 4,
            Self::Focus => 8,
        }
    }
}

/// Set of handler categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategorySet(u8);

impl CategorySet {
    /// Empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Adds a category.
    pub fn insert(&mut self, category: HandlerCategory) {
        self.0 |= category.bit();
    }

    /// Returns true if `category` is in the set.
    #[must_use]
    pub const fn contains(self, category: HandlerCategory) -> bool {
        self.0 & category.bit() != 0
    }

    /// Returns true if no category is in the set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A DOM event with its JSX prop name and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDef {
    /// DOM event name, as used in template listeners.
    pub dom: &'static str,
    /// JSX prop name (bubble phase).
    pub jsx: &'static str,
    /// Category the event belongs to.
    pub category: HandlerCategory,
}

const fn event(dom: &'static str, jsx: &'static str, category: HandlerCategory) -> EventDef {
    EventDef { dom, jsx, category }
}

/// Every event the classifier recognizes.
pub const EVENTS: &[EventDef] = &[
    event("click", "onClick", HandlerCategory::Click),
    event("dblclick", "onDoubleClick", HandlerCategory::Click),
    event("contextmenu", "onContextMenu", HandlerCategory::Click),
    event("auxclick", "onAuxClick", HandlerCategory::Click),
    event("keydown", "onKeyDown", HandlerCategory::Keyboard),
    event("keypress", "onKeyPress", HandlerCategory::Keyboard),
    event("keyup", "onKeyUp", HandlerCategory::Keyboard),
    event("mousedown", "onMouseDown", HandlerCategory::Mouse),
    event("mouseup", "onMouseUp", HandlerCategory::Mouse),
    event("mouseenter", "onMouseEnter", HandlerCategory::Mouse),
    event("mouseleave", "onMouseLeave", HandlerCategory::Mouse),
    event("mousemove", "onMouseMove", HandlerCategory::Mouse),
    event("mouseout", "onMouseOut", HandlerCategory::Mouse),
    event("mouseover", "onMouseOver", HandlerCategory::Mouse),
    event("drag", "onDrag", HandlerCategory::Mouse),
    event("dragend", "onDragEnd", HandlerCategory::Mouse),
    event("dragenter", "onDragEnter", HandlerCategory::Mouse),
    event("dragexit", "onDragExit", HandlerCategory::Mouse),
    event("dragleave", "onDragLeave", HandlerCategory::Mouse),
    event("dragover", "onDragOver", HandlerCategory::Mouse),
    event("dragstart", "onDragStart", HandlerCategory::Mouse),
    event("drop", "onDrop", HandlerCategory::Mouse),
    event("focus", "onFocus", HandlerCategory::Focus),
    event("blur", "onBlur", HandlerCategory::Focus),
    event("focusin", "onFocusIn", HandlerCategory::Focus),
    event("focusout", "onFocusOut", HandlerCategory::Focus),
];

/// JSX prop name (with and without `Capture`) to event.
static JSX_EVENTS: LazyLock<HashMap<String, &'static EventDef>> = LazyLock::new(|| {
    EVENTS
        .iter()
        .flat_map(|def| [(def.jsx.to_string(), def), (format!("{}Capture", def.jsx), def)])
        .collect()
});

/// Template listener argument to event.
static TEMPLATE_EVENTS: LazyLock<HashMap<&'static str, &'static EventDef>> =
    LazyLock::new(|| EVENTS.iter().map(|def| (def.dom, def)).collect());

fn jsx_event(attr: &JsxAttribute) -> Option<&'static EventDef> {
    match attr {
        JsxAttribute::Attribute { name, .. } => JSX_EVENTS.get(name.as_str()).copied(),
        JsxAttribute::Spread { .. } => None,
    }
}

fn template_event(attr: &TemplateAttribute) -> Option<&'static EventDef> {
    match parse_template_key(&attr.key) {
        TemplateKey::On(Some(name)) => TEMPLATE_EVENTS.get(name).copied(),
        TemplateKey::Plain(name) | TemplateKey::Bind(Some(name)) => html_event_attribute(name),
        _ => None,
    }
}

/// HTML handler attributes (`onclick`, `:onClick`), matched ASCII case-insensitively.
fn html_event_attribute(name: &str) -> Option<&'static EventDef> {
    let prefix = name.get(..2)?;
    if !prefix.eq_ignore_ascii_case("on") {
        return None;
    }
    let event = name[2..].to_ascii_lowercase();
    TEMPLATE_EVENTS.get(event.as_str()).copied()
}

/// Iterator over the recognized event handlers of a node.
#[derive(Debug, Clone)]
pub enum HandlerEvents<'a> {
    /// JSX attributes.
    Jsx(std::slice::Iter<'a, JsxAttribute>),
    /// Template attributes.
    Template(std::slice::Iter<'a, TemplateAttribute>),
}

impl Iterator for HandlerEvents<'_> {
    type Item = &'static EventDef;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Jsx(iter) => iter.find_map(jsx_event),
            Self::Template(iter) => iter.find_map(template_event),
        }
    }
}

/// Recognized event handlers on `node`, in source order.
#[must_use]
pub fn handler_events(node: ElementNode<'_>) -> HandlerEvents<'_> {
    match node {
        ElementNode::Jsx(el) => HandlerEvents::Jsx(el.attributes.iter()),
        ElementNode::Template(el) => HandlerEvents::Template(el.attributes.iter()),
    }
}

/// Returns true if `node` handles any event in `category`.
#[must_use]
pub fn has_handler(node: ElementNode<'_>, category: HandlerCategory) -> bool {
    handler_events(node).any(|def| def.category == category)
}

/// Returns true if `node` handles any recognized event.
#[must_use]
pub fn has_any_handler(node: ElementNode<'_>) -> bool {
    handler_events(node).next().is_some()
}

/// All categories handled by `node`, collected in one pass.
#[must_use]
pub fn handler_categories(node: ElementNode<'_>) -> CategorySet {
    let mut set = CategorySet::empty();
    for def in handler_events(node) {
        set.insert(def.category);
    }
    set
}

/// Returns true if `node` handles the DOM event `dom_event` (e.g. `mouseover`).
#[must_use]
pub fn has_event_handler(node: ElementNode<'_>, dom_event: &str) -> bool {
    handler_events(node).any(|def| def.dom == dom_event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{JsExpr, JsxElement, TemplateElement};
    use std::collections::HashSet;

    fn handler() -> JsExpr {
        JsExpr::Identifier("fn".into())
    }

    #[test]
    fn categories_are_disjoint_per_dialect() {
        let mut jsx_seen = HashSet::new();
        let mut dom_seen = HashSet::new();
        for def in EVENTS {
            assert!(jsx_seen.insert(def.jsx), "duplicate JSX name {}", def.jsx);
            assert!(dom_seen.insert(def.dom), "duplicate event {}", def.dom);
        }
        assert_eq!(JSX_EVENTS.len(), EVENTS.len() * 2);
        assert_eq!(TEMPLATE_EVENTS.len(), EVENTS.len());
    }

    #[test]
    fn capture_variant_counts_like_bubble() {
        let el = JsxElement::new("div").attr("onClickCapture", handler());
        let node = ElementNode::Jsx(&el);
        assert!(has_handler(node, HandlerCategory::Click));
        assert!(has_event_handler(node, "click"));
    }

    #[test]
    fn template_listener_syntaxes() {
        for key in ["@click", "v-on:click", "@click.prevent", "v-on:click.stop.once"] {
            let el = TemplateElement::new("div").directive(key, handler());
            assert!(
                has_handler(ElementNode::Template(&el), HandlerCategory::Click),
                "{key}"
            );
        }
    }

    #[test]
    fn spreads_and_dynamic_names_never_match() {
        let el = JsxElement::new("div").spread();
        assert!(!has_any_handler(ElementNode::Jsx(&el)));

        let el = TemplateElement::new("div")
            .directive("v-on", handler())
            .directive("@[event]", handler())
            .attr("click", "x");
        assert!(!has_any_handler(ElementNode::Template(&el)));
    }

    fn assert_union_of_categories(node: ElementNode<'_>) {
        let union = HandlerCategory::ALL
            .iter()
            .any(|category| has_handler(node, *category));
        assert_eq!(has_any_handler(node), union, "{}", node.name());
        assert_eq!(handler_categories(node).is_empty(), !union, "{}", node.name());
    }

    #[test]
    fn any_handler_is_union_of_categories() {
        let jsx_nodes = [
            JsxElement::new("div"),
            JsxElement::new("div").attr("onKeyDown", handler()),
            JsxElement::new("div").attr("onMouseOver", handler()),
            JsxElement::new("div").attr("onBlur", handler()),
            JsxElement::new("div").attr("onChange", handler()),
            JsxElement::new("div")
                .attr("onClick", handler())
                .attr("onFocus", handler()),
        ];
        for el in &jsx_nodes {
            assert_union_of_categories(ElementNode::Jsx(el));
        }

        let template_nodes = [
            TemplateElement::new("div"),
            TemplateElement::new("div").directive("@keydown", handler()),
            TemplateElement::new("div").directive("v-on:mouseover", handler()),
            TemplateElement::new("div").directive("v-on", handler()),
            TemplateElement::new("div").directive("@[event]", handler()),
            TemplateElement::new("div").attr("onclick", "go()"),
            TemplateElement::new("div")
                .directive("v-on", handler())
                .directive("@focus", handler()),
        ];
        for el in &template_nodes {
            assert_union_of_categories(ElementNode::Template(el));
        }
    }

    #[test]
    fn template_html_handler_attributes() {
        let plain = TemplateElement::new("div").attr("onclick", "go()");
        assert!(has_handler(ElementNode::Template(&plain), HandlerCategory::Click));

        let bound = TemplateElement::new("div").directive(":onKeyDown", handler());
        assert!(has_event_handler(ElementNode::Template(&bound), "keydown"));

        let unknown = TemplateElement::new("div").attr("onchange", "save()");
        assert!(!has_any_handler(ElementNode::Template(&unknown)));
    }

    #[test]
    fn collects_categories_in_one_pass() {
        let el = TemplateElement::new("div")
            .directive("@keydown.enter", handler())
            .directive("@focus", handler());
        let set = handler_categories(ElementNode::Template(&el));
        assert!(set.contains(HandlerCategory::Keyboard));
        assert!(set.contains(HandlerCategory::Focus));
        assert!(!set.contains(HandlerCategory::Click));
        assert!(!set.contains(HandlerCategory::Mouse));
    }

    #[test]
    fn unknown_jsx_props_are_not_handlers() {
        let el = JsxElement::new("input").attr("onChange", handler());
        assert!(!has_any_handler(ElementNode::Jsx(&el)));
    }
}

//! ARIA and HTML semantics shared by the built-in rules.
//!
//! Vocabulary tables follow WAI-ARIA 1.2 (plus the DPUB and Graphics
//! modules). They are plain constants indexed once into hash sets.

use a11y_lint_core::attributes::{get_static_str, get_static_value, has_attribute};
use a11y_lint_core::{ElementNode, StaticValue};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Concrete (non-abstract) ARIA roles.
pub const ROLES: &[&str] = &[
    "alert", "alertdialog", "application", "article", "banner", "blockquote", "button",
    "caption", "cell", "checkbox", "code", "columnheader", "combobox", "complementary",
    "contentinfo", "definition", "deletion", "dialog", "directory", "document", "emphasis",
    "feed", "figure", "form", "generic", "grid", "gridcell", "group", "heading", "img",
    "insertion", "link", "list", "listbox", "listitem", "log", "main", "mark", "marquee", "math",
    "menu", "menubar", "menuitem", "menuitemcheckbox", "menuitemradio", "meter", "navigation",
    "none", "note", "option", "paragraph", "presentation", "progressbar", "radio", "radiogroup",
    "region", "row", "rowgroup", "rowheader", "scrollbar", "search", "searchbox", "separator",
    "slider", "spinbutton", "status", "strong", "subscript", "superscript", "switch", "tab",
    "table", "tablist", "tabpanel", "term", "textbox", "time", "timer", "toolbar", "tooltip",
    "tree", "treegrid", "treeitem",
    "doc-abstract", "doc-acknowledgments", "doc-afterword", "doc-appendix", "doc-backlink",
    "doc-biblioentry", "doc-bibliography", "doc-biblioref", "doc-chapter", "doc-colophon",
    "doc-conclusion", "doc-cover", "doc-credit", "doc-credits", "doc-dedication", "doc-endnote",
    "doc-endnotes", "doc-epigraph", "doc-epilogue", "doc-errata", "doc-example", "doc-footnote",
    "doc-foreword", "doc-glossary", "doc-glossref", "doc-index", "doc-introduction",
    "doc-noteref", "doc-notice", "doc-pagebreak", "doc-pagelist", "doc-part", "doc-preface",
    "doc-prologue", "doc-pullquote", "doc-qna", "doc-subtitle", "doc-tip", "doc-toc",
    "graphics-document", "graphics-object", "graphics-symbol",
];

/// Abstract roles; authors must not use them.
pub const ABSTRACT_ROLES: &[&str] = &[
    "command", "composite", "input", "landmark", "range", "roletype", "section", "sectionhead",
    "select", "structure", "widget", "window",
];

/// Roles of widgets users operate directly.
pub const INTERACTIVE_ROLES: &[&str] = &[
    "button", "checkbox", "columnheader", "combobox", "grid", "gridcell", "link", "listbox",
    "menu", "menubar", "menuitem", "menuitemcheckbox", "menuitemradio", "option", "radio",
    "radiogroup", "row", "rowheader", "scrollbar", "searchbox", "slider", "spinbutton",
    "switch", "tab", "tablist", "textbox", "toolbar", "tree", "treegrid", "treeitem",
];

/// ARIA states and properties.
pub const ARIA_PROPS: &[&str] = &[
    "aria-activedescendant", "aria-atomic", "aria-autocomplete", "aria-braillelabel",
    "aria-brailleroledescription", "aria-busy", "aria-checked", "aria-colcount",
    "aria-colindex", "aria-colindextext", "aria-colspan", "aria-controls", "aria-current",
    "aria-describedby", "aria-description", "aria-details", "aria-disabled", "aria-dropeffect",
    "aria-errormessage", "aria-expanded", "aria-flowto", "aria-grabbed", "aria-haspopup",
    "aria-hidden", "aria-invalid", "aria-keyshortcuts", "aria-label", "aria-labelledby",
    "aria-level", "aria-live", "aria-modal", "aria-multiline", "aria-multiselectable",
    "aria-orientation", "aria-owns", "aria-placeholder", "aria-posinset", "aria-pressed",
    "aria-readonly", "aria-relevant", "aria-required", "aria-roledescription", "aria-rowcount",
    "aria-rowindex", "aria-rowindextext", "aria-rowspan", "aria-selected", "aria-setsize",
    "aria-sort", "aria-valuemax", "aria-valuemin", "aria-valuenow", "aria-valuetext",
];

/// Elements that take no ARIA roles, states or properties.
pub const RESERVED_ELEMENTS: &[&str] = &[
    "base", "col", "colgroup", "head", "html", "link", "meta", "noscript", "param", "picture",
    "script", "source", "style", "title", "track",
];

/// Input types that never need a visible label.
pub const UNLABELLED_INPUT_TYPES: &[&str] = &["hidden", "submit", "reset", "button", "image"];

static ROLE_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| ROLES.iter().copied().collect());
static ABSTRACT_ROLE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ABSTRACT_ROLES.iter().copied().collect());
static INTERACTIVE_ROLE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INTERACTIVE_ROLES.iter().copied().collect());
static ARIA_PROP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ARIA_PROPS.iter().copied().collect());

/// Returns true for concrete ARIA roles.
#[must_use]
pub fn is_valid_role(role: &str) -> bool {
    ROLE_SET.contains(role)
}

/// Returns true for abstract ARIA roles.
#[must_use]
pub fn is_abstract_role(role: &str) -> bool {
    ABSTRACT_ROLE_SET.contains(role)
}

/// Returns true for widget roles.
#[must_use]
pub fn is_interactive_role(role: &str) -> bool {
    INTERACTIVE_ROLE_SET.contains(role)
}

/// Returns true for known `aria-*` attribute names (lower-case).
#[must_use]
pub fn is_aria_prop(name: &str) -> bool {
    ARIA_PROP_SET.contains(name)
}

/// Literal `role` of `node`, trimmed and lower-cased.
#[must_use]
pub fn static_role(node: ElementNode<'_>) -> Option<String> {
    get_static_str(node, "role").map(|role| role.trim().to_ascii_lowercase())
}

/// First token of the literal `role`; browsers fall back through the list.
#[must_use]
pub fn primary_role(node: ElementNode<'_>) -> Option<String> {
    static_role(node).and_then(|role| role.split_whitespace().next().map(str::to_string))
}

/// Lower-cased literal `type` of `node`.
#[must_use]
pub fn input_type(node: ElementNode<'_>) -> Option<String> {
    get_static_str(node, "type").map(|t| t.trim().to_ascii_lowercase())
}

/// Returns true when a literal is `true` or `"true"`.
#[must_use]
pub fn is_truthy(value: Option<StaticValue<'_>>) -> bool {
    match value {
        Some(StaticValue::Bool(b)) => b,
        Some(StaticValue::Str(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Implicit ARIA role of a native element.
#[must_use]
pub fn implicit_role(tag: &str, node: ElementNode<'_>) -> Option<&'static str> {
    let role = match tag {
        "a" | "area" => {
            if has_attribute(node, "href") {
                "link"
            } else {
                return None;
            }
        }
        "article" => "article",
        "aside" => "complementary",
        "blockquote" => "blockquote",
        "button" => "button",
        "caption" => "caption",
        "code" => "code",
        "datalist" => "listbox",
        "dd" => "definition",
        "del" => "deletion",
        "details" | "fieldset" | "optgroup" => "group",
        "dfn" | "dt" => "term",
        "dialog" => "dialog",
        "em" => "emphasis",
        "figure" => "figure",
        "footer" => "contentinfo",
        "form" => "form",
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => "heading",
        "header" => "banner",
        "hr" => "separator",
        "img" => {
            if get_static_str(node, "alt").is_some_and(str::is_empty) {
                "presentation"
            } else {
                "img"
            }
        }
        "input" => return implicit_input_role(node),
        "ins" => "insertion",
        "li" => "listitem",
        "main" => "main",
        "math" => "math",
        "menu" | "ol" | "ul" => "list",
        "meter" => "meter",
        "nav" => "navigation",
        "option" => "option",
        "output" => "status",
        "p" => "paragraph",
        "progress" => "progressbar",
        "search" => "search",
        "section" => "region",
        "select" => {
            let multiple = has_attribute(node, "multiple");
            let tall = get_static_value(node, "size")
                .and_then(|v| v.as_number())
                .is_some_and(|size| size > 1.0);
            if multiple || tall {
                "listbox"
            } else {
                "combobox"
            }
        }
        "strong" => "strong",
        "sub" => "subscript",
        "sup" => "superscript",
        "table" => "table",
        "tbody" | "tfoot" | "thead" => "rowgroup",
        "td" => "cell",
        "textarea" => "textbox",
        "th" => "columnheader",
        "time" => "time",
        "tr" => "row",
        _ => return None,
    };
    Some(role)
}

fn implicit_input_role(node: ElementNode<'_>) -> Option<&'static str> {
    let role = match input_type(node).as_deref() {
        None | Some("text" | "email" | "tel" | "url" | "") => "textbox",
        Some("button" | "image" | "reset" | "submit") => "button",
        Some("checkbox") => "checkbox",
        Some("number") => "spinbutton",
        Some("radio") => "radio",
        Some("range") => "slider",
        Some("search") => "searchbox",
        Some(_) => return None,
    };
    Some(role)
}

/// Returns true for natively focusable, operable elements.
#[must_use]
pub fn is_interactive_element(tag: &str, node: ElementNode<'_>) -> bool {
    match tag {
        "a" | "area" => has_attribute(node, "href"),
        "input" => input_type(node).as_deref() != Some("hidden"),
        "audio" | "video" => has_attribute(node, "controls"),
        "button" | "details" | "embed" | "iframe" | "option" | "select" | "summary"
        | "textarea" => true,
        _ => false,
    }
}

/// Returns true if the element is removed from the accessibility tree.
#[must_use]
pub fn is_hidden_from_screen_reader(tag: &str, node: ElementNode<'_>) -> bool {
    if tag == "input" && input_type(node).as_deref() == Some("hidden") {
        return true;
    }
    is_truthy(get_static_value(node, "aria-hidden"))
}

/// Returns true for `role="presentation"` / `role="none"`.
#[must_use]
pub fn is_presentation_role(node: ElementNode<'_>) -> bool {
    matches!(primary_role(node).as_deref(), Some("presentation" | "none"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_lint_core::{JsxElement, TemplateElement};

    #[test]
    fn role_tables_are_disjoint() {
        for role in ABSTRACT_ROLES {
            assert!(!is_valid_role(role), "{role}");
        }
        for role in INTERACTIVE_ROLES {
            assert!(is_valid_role(role), "{role}");
        }
    }

    #[test]
    fn implicit_roles_depend_on_attributes() {
        let link = JsxElement::new("a").attr("href", "/home");
        let bare = JsxElement::new("a");
        assert_eq!(implicit_role("a", ElementNode::Jsx(&link)), Some("link"));
        assert_eq!(implicit_role("a", ElementNode::Jsx(&bare)), None);

        let checkbox = TemplateElement::new("input").attr("type", "Checkbox");
        assert_eq!(implicit_role("input", ElementNode::Template(&checkbox)), Some("checkbox"));

        let multi = JsxElement::new("select").flag("multiple");
        assert_eq!(implicit_role("select", ElementNode::Jsx(&multi)), Some("listbox"));

        let nav = JsxElement::new("Nav");
        assert_eq!(implicit_role("nav", ElementNode::Jsx(&nav)), Some("navigation"));
    }

    #[test]
    fn interactive_elements() {
        let hidden = JsxElement::new("input").attr("type", "hidden");
        let text = JsxElement::new("input");
        let div = JsxElement::new("div");
        assert!(!is_interactive_element("input", ElementNode::Jsx(&hidden)));
        assert!(is_interactive_element("input", ElementNode::Jsx(&text)));
        assert!(!is_interactive_element("div", ElementNode::Jsx(&div)));
    }

    #[test]
    fn hidden_and_presentation() {
        let hidden = JsxElement::new("div").attr("aria-hidden", true);
        let hidden_str = TemplateElement::new("div").attr("aria-hidden", "true");
        let none = JsxElement::new("div").attr("role", "none presentation");
        assert!(is_hidden_from_screen_reader("div", ElementNode::Jsx(&hidden)));
        assert!(is_hidden_from_screen_reader("div", ElementNode::Template(&hidden_str)));
        assert!(is_presentation_role(ElementNode::Jsx(&none)));
    }
}

//! Native element vocabulary.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lower-case HTML (and inline SVG root) element names.
pub const NATIVE_TAGS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col", "colgroup",
    "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt", "em", "embed",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hgroup", "hr", "html", "i", "iframe", "img", "input", "ins", "kbd",
    "label", "legend", "li", "link", "main", "map", "mark", "menu", "meta", "meter", "nav",
    "noscript", "object", "ol", "optgroup", "option", "output", "p", "param", "picture", "pre",
    "progress", "q", "rp", "rt", "ruby", "s", "samp", "script", "search", "section", "select",
    "slot", "small", "source", "span", "strong", "style", "sub", "summary", "sup", "svg",
    "table", "tbody", "td", "template", "textarea", "tfoot", "th", "thead", "time", "title",
    "tr", "track", "u", "ul", "var", "video", "wbr",
];

static NATIVE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NATIVE_TAGS.iter().copied().collect());

/// Returns true for recognized native element names (exact, lower-case).
#[must_use]
pub fn is_native_tag(name: &str) -> bool {
    NATIVE_TAG_SET.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_lowercase_html() {
        assert!(is_native_tag("div"));
        assert!(is_native_tag("nav"));
        assert!(!is_native_tag("Div"));
        assert!(!is_native_tag("Button"));
        assert!(!is_native_tag("my-button"));
    }
}

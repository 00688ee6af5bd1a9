//! Lookup of built-in rules by name or code.

use crate::{
    alt_text, anchor_has_content, anchor_is_valid, aria_props, aria_role,
    aria_unsupported_elements, click_events_have_key_events, form_control_has_label,
    interactive_supports_focus, mouse_events_have_key_events, no_access_key, no_autofocus,
    no_redundant_roles, scope, tabindex_no_positive, AltText, AnchorHasContent, AnchorIsValid,
    AriaProps, AriaRole, AriaUnsupportedElements, ClickEventsHaveKeyEvents, FormControlHasLabel,
    InteractiveSupportsFocus, MouseEventsHaveKeyEvents, NoAccessKey, NoAutofocus,
    NoRedundantRoles, Scope, TabindexNoPositive,
};
use a11y_lint_core::{RuleBox, RuleConfig};

/// A built-in rule and its constructor.
#[derive(Debug, Clone, Copy)]
pub struct RuleInfo {
    /// Rule name (e.g. `alt-text`).
    pub name: &'static str,
    /// Rule code (e.g. `A11Y012`).
    pub code: &'static str,
    /// Builds the rule from its configuration table.
    pub build: fn(&RuleConfig) -> RuleBox,
}

/// Every built-in rule, in code order.
pub static RULES: &[RuleInfo] = &[
    RuleInfo {
        name: interactive_supports_focus::NAME,
        code: interactive_supports_focus::CODE,
        build: |c| Box::new(InteractiveSupportsFocus::from_config(c)),
    },
    RuleInfo {
        name: anchor_is_valid::NAME,
        code: anchor_is_valid::CODE,
        build: |c| Box::new(AnchorIsValid::from_config(c)),
    },
    RuleInfo {
        name: scope::NAME,
        code: scope::CODE,
        build: |c| Box::new(Scope::from_config(c)),
    },
    RuleInfo {
        name: no_redundant_roles::NAME,
        code: no_redundant_roles::CODE,
        build: |c| Box::new(NoRedundantRoles::from_config(c)),
    },
    RuleInfo {
        name: form_control_has_label::NAME,
        code: form_control_has_label::CODE,
        build: |c| Box::new(FormControlHasLabel::from_config(c)),
    },
    RuleInfo {
        name: click_events_have_key_events::NAME,
        code: click_events_have_key_events::CODE,
        build: |c| Box::new(ClickEventsHaveKeyEvents::from_config(c)),
    },
    RuleInfo {
        name: mouse_events_have_key_events::NAME,
        code: mouse_events_have_key_events::CODE,
        build: |c| Box::new(MouseEventsHaveKeyEvents::from_config(c)),
    },
    RuleInfo {
        name: aria_role::NAME,
        code: aria_role::CODE,
        build: |c| Box::new(AriaRole::from_config(c)),
    },
    RuleInfo {
        name: aria_props::NAME,
        code: aria_props::CODE,
        build: |c| Box::new(AriaProps::from_config(c)),
    },
    RuleInfo {
        name: tabindex_no_positive::NAME,
        code: tabindex_no_positive::CODE,
        build: |c| Box::new(TabindexNoPositive::from_config(c)),
    },
    RuleInfo {
        name: no_autofocus::NAME,
        code: no_autofocus::CODE,
        build: |c| Box::new(NoAutofocus::from_config(c)),
    },
    RuleInfo {
        name: alt_text::NAME,
        code: alt_text::CODE,
        build: |c| Box::new(AltText::from_config(c)),
    },
    RuleInfo {
        name: anchor_has_content::NAME,
        code: anchor_has_content::CODE,
        build: |c| Box::new(AnchorHasContent::from_config(c)),
    },
    RuleInfo {
        name: no_access_key::NAME,
        code: no_access_key::CODE,
        build: |c| Box::new(NoAccessKey::from_config(c)),
    },
    RuleInfo {
        name: aria_unsupported_elements::NAME,
        code: aria_unsupported_elements::CODE,
        build: |c| Box::new(AriaUnsupportedElements::from_config(c)),
    },
];

/// Finds a built-in rule by name or code.
#[must_use]
pub fn find_rule(name_or_code: &str) -> Option<&'static RuleInfo> {
    RULES
        .iter()
        .find(|info| info.name == name_or_code || info.code.eq_ignore_ascii_case(name_or_code))
}

/// Builds a built-in rule by name or code.
#[must_use]
pub fn build_rule(name_or_code: &str, config: &RuleConfig) -> Option<RuleBox> {
    find_rule(name_or_code).map(|info| (info.build)(config))
}

/// Names of all built-in rules.
#[must_use]
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|info| info.name).collect()
}

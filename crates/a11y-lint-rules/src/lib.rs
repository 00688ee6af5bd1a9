//! # a11y-lint-rules
//!
//! Built-in accessibility rules for a11y-lint.
//!
//! Every rule runs on both JSX and template trees and judges components by
//! the native element they render, per the configured component mapping.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | A11Y001 | `interactive-supports-focus` | Elements with interactive roles must be focusable and keyboard operable |
//! | A11Y002 | `anchor-is-valid` | Anchors need a navigable `href` and must not stand in for buttons |
//! | A11Y003 | `scope` | `scope` only on `<th>`, with a valid value |
//! | A11Y004 | `no-redundant-roles` | Explicit roles must not repeat the implicit role (fixable) |
//! | A11Y005 | `form-control-has-label` | Form controls need an accessible label |
//! | A11Y006 | `click-events-have-key-events` | Click handlers on non-interactive elements need a keyboard handler |
//! | A11Y007 | `mouse-events-have-key-events` | `mouseover`/`mouseout` need `focus`/`blur` |
//! | A11Y008 | `aria-role` | Roles must be valid, non-abstract ARIA roles |
//! | A11Y009 | `aria-props` | `aria-*` attributes must be known ARIA properties |
//! | A11Y010 | `tabindex-no-positive` | `tabIndex` must not be positive |
//! | A11Y011 | `no-autofocus` | No `autoFocus` (fixable) |
//! | A11Y012 | `alt-text` | Images, image maps and image buttons need alternative text |
//! | A11Y013 | `anchor-has-content` | Anchors need accessible content |
//! | A11Y014 | `no-access-key` | No `accessKey` |
//! | A11Y015 | `aria-unsupported-elements` | Reserved elements take no `role`/`aria-*` |
//!
//! ## Usage
//!
//! ```ignore
//! use a11y_lint_core::Linter;
//! use a11y_lint_rules::{AltText, Preset};
//!
//! let linter = Linter::builder()
//!     .rules(Preset::Minimal.rules())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aria;
pub mod registry;

mod alt_text;
mod anchor_has_content;
mod anchor_is_valid;
mod aria_props;
mod aria_role;
mod aria_unsupported_elements;
mod click_events_have_key_events;
mod form_control_has_label;
mod interactive_supports_focus;
mod mouse_events_have_key_events;
mod no_access_key;
mod no_autofocus;
mod no_redundant_roles;
mod presets;
mod scope;
mod tabindex_no_positive;

#[cfg(test)]
mod test_support;

pub use alt_text::AltText;
pub use anchor_has_content::AnchorHasContent;
pub use anchor_is_valid::{AnchorIsValid, Aspect};
pub use aria_props::AriaProps;
pub use aria_role::AriaRole;
pub use aria_unsupported_elements::AriaUnsupportedElements;
pub use click_events_have_key_events::ClickEventsHaveKeyEvents;
pub use form_control_has_label::FormControlHasLabel;
pub use interactive_supports_focus::InteractiveSupportsFocus;
pub use mouse_events_have_key_events::MouseEventsHaveKeyEvents;
pub use no_access_key::NoAccessKey;
pub use no_autofocus::NoAutofocus;
pub use no_redundant_roles::NoRedundantRoles;
pub use presets::{all_rules, minimal_rules, recommended_rules, strict_rules, Preset};
pub use registry::{build_rule, find_rule, RuleInfo};
pub use scope::Scope;
pub use tabindex_no_positive::TabindexNoPositive;

/// Re-export core types for convenience.
pub use a11y_lint_core::{Diagnostic, Rule, Severity};

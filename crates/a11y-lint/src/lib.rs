//! # a11y-lint
//!
//! Accessibility linter for JSX and template component trees.
//!
//! This is the main facade crate that re-exports core functionality and the
//! built-in rules, and turns an `a11y-lint.toml` into a ready linter.
//!
//! ## Configuration
//!
//! ```toml
//! preset = "recommended"
//!
//! [rules.anchor-is-valid]
//! aspects = ["noHref", "invalidHref"]
//!
//! [rules.no-autofocus]
//! enabled = false
//!
//! [settings.components]
//! Link = "a"
//! ```
//!
//! ## Suppression Comments
//!
//! ```jsx
//! {/* a11y-lint: allow(alt-text) reason="decorative sprite" */}
//! <img src="sprite.png" />
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use a11y_lint::{linter_for_dir, SourceFile};
//! use std::sync::Arc;
//!
//! let linter = linter_for_dir(Path::new("."))?;
//! let result = linter.lint(&Arc::new(file));
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use a11y_lint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use a11y_lint_rules::*;
}

mod setup;

pub use setup::{
    find_config, linter_for_dir, linter_from_config, linter_from_file, linter_from_toml,
    CONFIG_CANDIDATES,
};

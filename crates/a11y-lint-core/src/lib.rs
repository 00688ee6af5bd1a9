//! # a11y-lint-core
//!
//! Shared analysis substrate for accessibility linting of component
//! templates, in two dialects: JSX element trees and Vue-style template
//! trees.
//!
//! This crate provides:
//!
//! - the node model handed over by host parsers ([`SourceFile`], [`ElementNode`])
//! - dialect-agnostic attribute resolution ([`attributes`])
//! - event-handler classification ([`handlers`])
//! - component-to-native-element resolution ([`components`])
//! - a per-file comment-proximity cache ([`CommentCache`])
//! - the [`Rule`] trait, [`Diagnostic`] and the [`Linter`] driving rules
//!
//! ## Example
//!
//! ```ignore
//! use a11y_lint_core::{Linter, SourceFile};
//! use std::sync::Arc;
//!
//! let linter = Linter::builder().rule(MyRule::new()).build()?;
//! let file = Arc::new(SourceFile::new("App.tsx", source).with_jsx(tree));
//! let result = linter.lint(&file);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod attributes;
mod comments;
pub mod components;
mod config;
mod context;
pub mod handlers;
pub mod html;
mod linter;
pub mod node;
mod rule;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use attributes::{AttributeEntry, AttributeValue, StaticValue};
pub use comments::{CommentCache, CommentEntry, NearbyComments};
pub use components::{resolve_native_tag, ComponentEntry, ComponentMapping, ComponentMappingBuilder};
pub use config::{ComponentSetting, Config, ConfigError, LinterConfig, RuleConfig, Settings};
pub use context::{FileContext, RuleContext};
pub use handlers::{CategorySet, HandlerCategory};
pub use linter::{Linter, LinterBuilder, LinterError, INTERNAL_ERROR_CODE, INTERNAL_ERROR_RULE};
pub use node::{
    Comment, CommentKind, Dialect, ElementNode, JsExpr, JsxAttribute, JsxChild, JsxElement,
    NodeChild, NodeError, SourceFile, Span, TemplateAttribute, TemplateChild, TemplateElement,
    TemplateValue,
};
pub use rule::{Rule, RuleBox, ALL_DIALECTS};
pub use types::{Diagnostic, DiagnosticReport, LintResult, Location, Replacement, Severity, Suggestion};
pub use utils::allowance::{AllowCheck, AllowDirective};

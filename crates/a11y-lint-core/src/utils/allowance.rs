//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! {/* a11y-lint: allow(no-autofocus) reason="search page" */}
//! <input autoFocus />
//!
//! <!-- a11y-lint: allow(anchor-is-valid, anchor-has-content) -->
//! <a @click="open"></a>
//! ```
//!
//! A directive applies to the element that immediately follows it: only
//! whitespace and JSX expression braces may separate the two. Several
//! directive comments stacked above one element combine.

use crate::comments::CommentEntry;
use std::collections::BTreeSet;

/// Result of checking for an allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowDirective {
    /// Rule names that are allowed.
    pub rules: BTreeSet<String>,
    /// Optional reason for the allowance.
    pub reason: Option<String>,
}

impl AllowDirective {
    /// Checks whether `rule_name` is covered (`all` covers every rule).
    #[must_use]
    pub fn check(&self, rule_name: &str) -> AllowCheck {
        if self.rules.contains(rule_name) || self.rules.contains("all") {
            AllowCheck::Allowed {
                reason: self.reason.clone(),
            }
        } else {
            AllowCheck::Denied
        }
    }

    fn merge(&mut self, other: Self) {
        self.rules.extend(other.rules);
        if self.reason.is_none() {
            self.reason = other.reason;
        }
    }
}

/// Parses an allowance directive from a comment body.
///
/// The body is the comment text without its `//`, `/* */` or `<!-- -->`
/// delimiters; doc-comment markers left in the body are skipped.
#[must_use]
pub fn parse_allow_directive(comment: &str) -> Option<AllowDirective> {
    let body = comment.trim_start_matches(['/', '*', '!']).trim();

    let directive = body.strip_prefix("a11y-lint:")?.trim();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules: BTreeSet<String> = allow_content[..paren_end]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = allow_content[paren_end + 1..].trim();
    let reason = rest
        .strip_prefix("reason=")
        .map(str::trim)
        .and_then(|r| r.strip_prefix('"'))
        .and_then(|r| r.find('"').map(|end| r[..end].to_string()))
        .filter(|r| !r.trim().is_empty());

    Some(AllowDirective { rules, reason })
}

/// Finds the directives that apply to an element starting at `node_start`.
///
/// `comments` must be sorted by position (as returned by the comment
/// cache). Walks backwards from the element over adjacent comments and
/// stops at the first gap containing anything besides whitespace and braces.
#[must_use]
pub fn find_allow_directive(
    source: &str,
    comments: &[CommentEntry],
    node_start: usize,
) -> Option<AllowDirective> {
    let mut cursor = node_start;
    let mut found: Option<AllowDirective> = None;

    for comment in comments.iter().rev().filter(|c| c.end <= node_start) {
        if comment.end > cursor || !is_transparent_gap(source, comment.end, cursor) {
            break;
        }
        if let Some(directive) = parse_allow_directive(&comment.text) {
            match &mut found {
                Some(existing) => existing.merge(directive),
                None => found = Some(directive),
            }
        }
        cursor = comment.start;
    }

    found
}

fn is_transparent_gap(source: &str, start: usize, end: usize) -> bool {
    source
        .get(start..end)
        .is_some_and(|gap| gap.chars().all(|c| c.is_whitespace() || c == '{' || c == '}'))
}

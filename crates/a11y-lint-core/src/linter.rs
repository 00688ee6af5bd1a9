//! Linter for orchestrating rule execution over parsed files.

use crate::comments::CommentCache;
use crate::components::ComponentMapping;
use crate::config::{Config, ConfigError, RuleConfig};
use crate::context::{FileContext, RuleContext};
use crate::node::{ElementNode, NodeError, SourceFile, Span, TemplateChild};
use crate::rule::{Rule, RuleBox};
use crate::types::{Diagnostic, LintResult, Severity};
use crate::utils::allowance::{find_allow_directive, AllowCheck, AllowDirective};

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Code of diagnostics raised for malformed nodes.
pub const INTERNAL_ERROR_CODE: &str = "A11Y000";

/// Rule name of diagnostics raised for malformed nodes.
pub const INTERNAL_ERROR_RULE: &str = "internal-error";

/// Errors that can occur while building a linter.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Two registered rules share a name.
    #[error("Rule '{0}' is registered more than once")]
    DuplicateRule(String),
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
    components: Option<ComponentMapping>,
    severities: HashMap<String, Severity>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the linter.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the component mapping, replacing the one built from
    /// `[settings]` in the configuration.
    #[must_use]
    pub fn components(mut self, components: ComponentMapping) -> Self {
        self.components = Some(components);
        self
    }

    /// Sets a baseline severity for a rule.
    ///
    /// A `severity` in the rule's configuration block still wins.
    #[must_use]
    pub fn severity(mut self, rule_name: impl Into<String>, severity: Severity) -> Self {
        self.severities.insert(rule_name.into(), severity);
        self
    }

    /// Builds the linter.
    ///
    /// # Errors
    ///
    /// Returns an error if two rules share a name or the component mapping
    /// in the configuration is invalid.
    pub fn build(self) -> Result<Linter, LinterError> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.name()) {
                return Err(LinterError::DuplicateRule(rule.name().to_string()));
            }
        }

        let config = self.config.unwrap_or_default();
        let components = match self.components {
            Some(components) => components,
            None => ComponentMapping::from_settings(&config.settings)?,
        };

        let mut severities = self.severities;
        for (name, rule_config) in &config.rules {
            if let Some(severity) = rule_config.severity {
                severities.insert(name.clone(), severity);
            }
        }

        debug!("Built linter with {} rules", self.rules.len());

        Ok(Linter {
            rules: self.rules,
            config,
            components,
            severities,
            comments: CommentCache::new(),
        })
    }
}

/// The linter that streams every element of a file through the rules.
///
/// Use [`Linter::builder()`] to construct an instance. A linter owns a
/// comment cache with interior mutability and stays on the thread that
/// built it; parallel hosts build one linter per worker.
pub struct Linter {
    rules: Vec<RuleBox>,
    config: Config,
    components: ComponentMapping,
    severities: HashMap<String, Severity>,
    comments: CommentCache,
}

struct ActiveRule<'r> {
    rule: &'r dyn Rule,
    severity: Severity,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Names of the registered rules, in registration order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the rule configuration for a specific rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.config.rule(rule_name)
    }

    /// Returns the component mapping.
    #[must_use]
    pub fn components(&self) -> &ComponentMapping {
        &self.components
    }

    /// Returns the comment cache shared by all files this linter sees.
    #[must_use]
    pub fn comment_cache(&self) -> &CommentCache {
        &self.comments
    }

    /// Severity a rule's diagnostics are reported at.
    #[must_use]
    pub fn effective_severity(&self, rule: &dyn Rule) -> Severity {
        self.severities
            .get(rule.name())
            .copied()
            .unwrap_or_else(|| rule.default_severity())
    }

    /// Lints several files.
    pub fn lint_all<'f>(&self, files: impl IntoIterator<Item = &'f Arc<SourceFile>>) -> LintResult {
        let mut result = LintResult::new();
        for file in files {
            result.extend(self.lint(file));
        }
        result
    }

    /// Lints one file.
    pub fn lint(&self, file: &Arc<SourceFile>) -> LintResult {
        info!("Linting {}", file.path.display());

        let file_ctx = FileContext::new(&file.path, &file.source);
        let active: Vec<ActiveRule<'_>> = self
            .rules
            .iter()
            .filter(|rule| {
                let enabled = self.config.is_rule_enabled(rule.name());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .map(|rule| ActiveRule {
                rule: rule.as_ref(),
                severity: self.effective_severity(rule.as_ref()),
            })
            .collect();

        let mut stack: Vec<(ElementNode<'_>, usize)> = Vec::new();
        for child in file.template.iter().rev() {
            if let TemplateChild::Element(el) = child {
                stack.push((ElementNode::Template(el), 0));
            }
        }
        for el in file.jsx.iter().rev() {
            stack.push((ElementNode::Jsx(el), 0));
        }

        let mut ancestors: Vec<ElementNode<'_>> = Vec::new();
        let mut diagnostics = Vec::new();
        while let Some((node, depth)) = stack.pop() {
            ancestors.truncate(depth);
            diagnostics.extend(self.check_node(file, &file_ctx, &active, &ancestors, node));
            ancestors.push(node);
            for child in node.child_elements().into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        diagnostics.sort_by(|a, b| {
            a.location
                .offset
                .cmp(&b.location.offset)
                .then_with(|| a.code.cmp(&b.code))
        });

        info!(
            "Linted {}: {} diagnostics",
            file.path.display(),
            diagnostics.len()
        );

        LintResult {
            diagnostics,
            files_checked: 1,
        }
    }

    fn check_node<'a>(
        &'a self,
        file: &'a Arc<SourceFile>,
        file_ctx: &'a FileContext<'a>,
        rules: &[ActiveRule<'_>],
        ancestors: &'a [ElementNode<'a>],
        node: ElementNode<'a>,
    ) -> Vec<Diagnostic> {
        if let Err(error) = node.validate(file.source.len()) {
            warn!(
                "Malformed <{}> in {}: {}",
                node.name(),
                file.path.display(),
                error
            );
            return vec![internal_error(file_ctx, node, &error)];
        }

        let ctx = RuleContext::new(file_ctx, file, &self.components, ancestors, &self.comments);
        let mut directive: Option<Option<AllowDirective>> = None;
        let mut out = Vec::new();

        for active in rules {
            if !active.rule.dialects().contains(&node.dialect()) {
                continue;
            }

            let mut found = active.rule.check(&ctx, node);
            if found.is_empty() {
                continue;
            }
            for diagnostic in &mut found {
                diagnostic.severity = active.severity;
            }

            if self.config.linter.allow_directives {
                let allow = directive.get_or_insert_with(|| self.allow_directive(&ctx, node));
                if let Some(allow) = allow {
                    if let AllowCheck::Allowed { reason } = allow.check(active.rule.name()) {
                        debug!(
                            "Suppressed {} diagnostic(s) from {} on <{}>",
                            found.len(),
                            active.rule.name(),
                            node.name()
                        );
                        if reason.is_none() && active.rule.requires_allow_reason(active.severity) {
                            out.push(missing_reason(&ctx, active.rule, node));
                        }
                        continue;
                    }
                }
            }

            out.extend(found);
        }

        out
    }

    fn allow_directive(&self, ctx: &RuleContext<'_>, node: ElementNode<'_>) -> Option<AllowDirective> {
        let start = node.span().start;
        let nearby = ctx.comments_near(Span::new(start, start), self.config.linter.allow_window);
        find_allow_directive(&ctx.source.source, &nearby, start)
    }
}

fn internal_error(file_ctx: &FileContext<'_>, node: ElementNode<'_>, error: &NodeError) -> Diagnostic {
    Diagnostic::new(
        INTERNAL_ERROR_CODE,
        INTERNAL_ERROR_RULE,
        Severity::Error,
        file_ctx.location(node.span()),
        "invalidNode",
        "Malformed <{{element}}> node skipped: {{error}}",
    )
    .with_data("element", node.name())
    .with_data("error", error.to_string())
}

fn missing_reason(ctx: &RuleContext<'_>, rule: &dyn Rule, node: ElementNode<'_>) -> Diagnostic {
    Diagnostic::new(
        rule.code(),
        rule.name(),
        Severity::Warning,
        ctx.file.location(node.span()),
        "missingAllowReason",
        "Allow directive for '{{rule}}' must give a reason=\"...\"",
    )
    .with_data("rule", rule.name())
}

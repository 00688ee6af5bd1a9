//! Component-to-native-element resolution.
//!
//! Design systems wrap native elements in components (`<Button>`,
//! `<Nav>`) and let callers swap the rendered element through a polymorphic
//! prop (`<Button as="a">`). Rules that key off native semantics ask this
//! module for the element a node effectively renders.

use crate::attributes::get_static_str;
use crate::config::{ComponentSetting, ConfigError, Settings};
use crate::html::is_native_tag;
use crate::node::ElementNode;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Polymorphic prop names used when neither the entry nor the settings say otherwise.
pub const DEFAULT_POLYMORPHIC_PROPS: &[&str] = &["as", "component"];

/// Longest component-to-component chain followed before giving up.
pub const MAX_CHAIN_DEPTH: usize = 8;

/// Mapping entry for one custom component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    /// Native tag the component renders, after following chains.
    pub native_tag: String,
    /// Polymorphic props for this component, overriding the default list.
    pub polymorphic_prop_names: Option<Vec<String>>,
}

/// Validated component mapping, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMapping {
    components: HashMap<String, ComponentEntry>,
    default_polymorphic_props: Vec<String>,
    polymorphic_allow_list: Option<HashSet<String>>,
}

impl Default for ComponentMapping {
    fn default() -> Self {
        Self {
            components: HashMap::new(),
            default_polymorphic_props: DEFAULT_POLYMORPHIC_PROPS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            polymorphic_allow_list: None,
        }
    }
}

impl ComponentMapping {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> ComponentMappingBuilder {
        ComponentMappingBuilder::default()
    }

    /// Builds the mapping from `[settings]`.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry maps to an unknown native tag or names
    /// an empty component or prop.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(props) = &settings.polymorphic_prop_names {
            builder = builder.default_polymorphic_props(props.iter().cloned());
        }
        if let Some(list) = &settings.polymorphic_allow_list {
            builder = builder.polymorphic_allow_list(list.iter().cloned());
        }
        for (name, setting) in &settings.components {
            builder = match setting {
                ComponentSetting::Tag(tag) => builder.component(name.clone(), tag.clone()),
                ComponentSetting::Detailed {
                    native_tag,
                    polymorphic_prop_names: Some(props),
                } => builder.component_with_props(name.clone(), native_tag.clone(), props.clone()),
                ComponentSetting::Detailed {
                    native_tag,
                    polymorphic_prop_names: None,
                } => builder.component(name.clone(), native_tag.clone()),
            };
        }
        builder.build()
    }

    /// Looks up a component entry.
    #[must_use]
    pub fn get(&self, component: &str) -> Option<&ComponentEntry> {
        self.components.get(component)
    }

    /// Number of mapped components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if no component is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns true if `component` may change its element through polymorphic props.
    #[must_use]
    pub fn is_polymorphic(&self, component: &str) -> bool {
        self.polymorphic_allow_list
            .as_ref()
            .map_or(true, |list| list.contains(component))
    }

    /// Polymorphic props consulted for `component`.
    #[must_use]
    pub fn polymorphic_props(&self, component: &str) -> &[String] {
        self.components
            .get(component)
            .and_then(|entry| entry.polymorphic_prop_names.as_deref())
            .unwrap_or(&self.default_polymorphic_props)
    }

    /// Resolves a polymorphic prop value to a native tag.
    fn resolve_target<'a>(&'a self, value: &'a str) -> Option<&'a str> {
        if is_native_tag(value) {
            return Some(value);
        }
        self.components
            .get(value)
            .map(|entry| entry.native_tag.as_str())
    }
}

/// Builder for [`ComponentMapping`].
#[derive(Debug, Default)]
pub struct ComponentMappingBuilder {
    components: Vec<(String, String, Option<Vec<String>>)>,
    default_polymorphic_props: Option<Vec<String>>,
    polymorphic_allow_list: Option<Vec<String>>,
}

impl ComponentMappingBuilder {
    /// Maps `component` to `native_tag`.
    #[must_use]
    pub fn component(mut self, component: impl Into<String>, native_tag: impl Into<String>) -> Self {
        self.components
            .push((component.into(), native_tag.into(), None));
        self
    }

    /// Maps `component` to `native_tag` with its own polymorphic props.
    #[must_use]
    pub fn component_with_props<I, S>(
        mut self,
        component: impl Into<String>,
        native_tag: impl Into<String>,
        props: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components.push((
            component.into(),
            native_tag.into(),
            Some(props.into_iter().map(Into::into).collect()),
        ));
        self
    }

    /// Replaces the default polymorphic prop list.
    #[must_use]
    pub fn default_polymorphic_props<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_polymorphic_props = Some(props.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts polymorphic props to the listed components.
    #[must_use]
    pub fn polymorphic_allow_list<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.polymorphic_allow_list = Some(components.into_iter().map(Into::into).collect());
        self
    }

    /// Validates and builds the mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry maps to an unknown native tag, starts a
    /// chain that loops or runs past [`MAX_CHAIN_DEPTH`], or names an empty
    /// component or prop.
    pub fn build(self) -> Result<ComponentMapping, ConfigError> {
        let mut mapping = ComponentMapping::default();

        if let Some(props) = self.default_polymorphic_props {
            validate_props("settings", &props)?;
            mapping.default_polymorphic_props = props;
        }

        let mut targets: HashMap<String, String> = HashMap::new();
        for (component, target, props) in &self.components {
            if component.trim().is_empty() {
                return Err(ConfigError::EmptyComponentName);
            }
            if let Some(props) = props {
                validate_props(component, props)?;
            }
            targets.insert(component.clone(), target.clone());
        }

        for (component, _, props) in self.components {
            let native_tag = resolve_chain(&component, &targets)?;
            mapping.components.insert(
                component,
                ComponentEntry {
                    native_tag,
                    polymorphic_prop_names: props,
                },
            );
        }

        mapping.polymorphic_allow_list = self
            .polymorphic_allow_list
            .map(|list| list.into_iter().collect());

        debug!("Built component mapping with {} entries", mapping.len());
        Ok(mapping)
    }
}

/// Follows `component` through the mapping until it reaches a native tag.
fn resolve_chain(component: &str, targets: &HashMap<String, String>) -> Result<String, ConfigError> {
    let mut seen = HashSet::new();
    let mut current = component;
    loop {
        let Some(target) = targets.get(current) else {
            return Err(ConfigError::UnknownNativeTag {
                component: component.to_string(),
                native_tag: current.to_string(),
            });
        };
        if is_native_tag(target) {
            return Ok(target.clone());
        }
        if !seen.insert(current) || seen.len() >= MAX_CHAIN_DEPTH {
            return Err(ConfigError::ComponentChain {
                component: component.to_string(),
            });
        }
        current = target;
    }
}

fn validate_props(owner: &str, props: &[String]) -> Result<(), ConfigError> {
    if props.iter().any(|p| p.trim().is_empty()) {
        return Err(ConfigError::EmptyPolymorphicProp {
            owner: owner.to_string(),
        });
    }
    Ok(())
}

/// Native tag `node` effectively renders, or `None` when it cannot be known.
///
/// Native tags resolve to themselves. Custom components resolve through
/// the mapping, and a polymorphic prop with a literal naming a native tag
/// or another mapped component overrides the mapping.
#[must_use]
pub fn resolve_native_tag<'a>(node: ElementNode<'a>, mapping: &'a ComponentMapping) -> Option<&'a str> {
    let name = node.name();
    if is_native_tag(name) {
        return Some(name);
    }

    if mapping.is_polymorphic(name) {
        for prop in mapping.polymorphic_props(name) {
            if let Some(target) = get_static_str(node, prop).and_then(|v| mapping.resolve_target(v)) {
                return Some(target);
            }
        }
    }

    mapping.get(name).map(|entry| entry.native_tag.as_str())
}

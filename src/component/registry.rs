//! Component type registry, backed by a slotmap arena.
//!
//! Registration resolves a declaration against its parent once: the merged
//! properties and style map are stored on the [`ComponentType`] and never
//! looked up through the parent again.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use heck::ToKebabCase;
use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::attributes::{AllowList, HtmlAttributes};
use crate::component::declaration::{ComponentDeclaration, PropertiesSource, StyleSource};
use crate::component::instance::{is_valid_tag, ComponentInstance};
use crate::config::Config;
use crate::error::{ConfigError, ValidationError};
use crate::properties::{registry as property_registry, PropertiesDefinition, PropertyValues};
use crate::style::{registry as style_registry, StyleMap};
use crate::value::Breakpoints;

/// Root tag used when neither the declaration nor its parent names one.
pub const DEFAULT_TAG: &str = "div";

static NEXT_REGISTRY: AtomicU64 = AtomicU64::new(1);

new_key_type! {
    /// Slot of a component type in one registry's arena.
    struct TypeKey;
}

/// Key of a registered component type in a [`ComponentRegistry`].
///
/// Carries the identity of the issuing registry; any other registry treats
/// it as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentTypeId {
    registry: u64,
    key: TypeKey,
}

/// An immutable, fully resolved component type.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentType {
    name: String,
    parent: Option<ComponentTypeId>,
    properties: Option<PropertiesDefinition>,
    style_map: Option<StyleMap>,
    allowed_attributes: AllowList,
    default_tag: String,
    test_selector: String,
    breakpoints: Breakpoints,
}

impl ComponentType {
    /// The component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type this one was declared on top of.
    pub fn parent(&self) -> Option<ComponentTypeId> {
        self.parent
    }

    /// Declared properties, if any were declared.
    pub fn properties(&self) -> Option<&PropertiesDefinition> {
        self.properties.as_ref()
    }

    /// The style map, if one was declared.
    pub fn style_map(&self) -> Option<&StyleMap> {
        self.style_map.as_ref()
    }

    /// Attribute names accepted on top of the base allow-list.
    pub fn allowed_attributes(&self) -> &AllowList {
        &self.allowed_attributes
    }

    /// Root tag used when no valid `tag` property is supplied.
    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    /// Value of the `data-test-selector` attribute derived from the name.
    pub fn test_selector(&self) -> &str {
        &self.test_selector
    }

    /// Breakpoints the style map was expanded over. Responsive values are
    /// validated against these.
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Construct an instance of this type.
    pub fn instantiate<'a>(
        &'a self,
        config: &'a Config,
        property_values: PropertyValues,
        html_attributes: HtmlAttributes,
    ) -> Result<ComponentInstance<'a>, ValidationError> {
        ComponentInstance::new(self, config, property_values, html_attributes)
    }
}

/// Arena of registered component types.
#[derive(Debug)]
pub struct ComponentRegistry {
    id: u64,
    types: SlotMap<TypeKey, ComponentType>,
    by_name: HashMap<String, ComponentTypeId>,
    breakpoints: Breakpoints,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ComponentRegistry {
    /// Create an empty registry using the breakpoints from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            id: NEXT_REGISTRY.fetch_add(1, Ordering::Relaxed),
            types: SlotMap::with_key(),
            by_name: HashMap::new(),
            breakpoints: config.breakpoints.clone(),
        }
    }

    /// Resolve and store a declaration.
    pub fn register(&mut self, declaration: ComponentDeclaration) -> Result<ComponentTypeId, ConfigError> {
        let ComponentDeclaration {
            name,
            parent,
            properties,
            style,
            allowed_attributes,
            default_tag,
        } = declaration;

        if name.is_empty() {
            return Err(ConfigError::EmptyComponentName);
        }
        if self.by_name.contains_key(&name) {
            return Err(ConfigError::DuplicateComponent(name));
        }

        let parent_type = match parent {
            Some(id) => Some(
                self.get(id)
                    .ok_or_else(|| ConfigError::UnknownParent { component: name.clone() })?,
            ),
            None => None,
        };

        let properties = match properties {
            Some(PropertiesSource::Define(defs)) => Some(property_registry::define(defs)?),
            Some(PropertiesSource::Extend(defs)) => Some(property_registry::extend(
                parent_type.and_then(ComponentType::properties),
                defs,
            )?),
            None => None,
        };

        let style_map = match style {
            Some(StyleSource::Define(decl)) => Some(style_registry::define(&decl, &self.breakpoints)),
            Some(StyleSource::Extend(decl)) => Some(style_registry::extend(
                parent_type.and_then(ComponentType::style_map),
                &decl,
                &self.breakpoints,
            )),
            None => None,
        };

        let default_tag = match default_tag {
            Some(tag) => tag,
            None => parent_type
                .map(|p| p.default_tag.clone())
                .unwrap_or_else(|| DEFAULT_TAG.to_owned()),
        };
        if !is_valid_tag(&default_tag) {
            return Err(ConfigError::InvalidDefaultTag {
                component: name,
                tag: default_tag,
            });
        }

        let component = ComponentType {
            test_selector: test_selector_for(&name),
            name: name.clone(),
            parent,
            properties,
            style_map,
            allowed_attributes: AllowList::new(allowed_attributes),
            default_tag,
            breakpoints: self.breakpoints.clone(),
        };

        debug!(
            component = %name,
            properties = component.properties.as_ref().map_or(0, PropertiesDefinition::len),
            style_keys = component.style_map.as_ref().map_or(0, StyleMap::len),
            "registered component type"
        );

        let id = ComponentTypeId {
            registry: self.id,
            key: self.types.insert(component),
        };
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Look up a type by id. Ids issued by another registry are never found.
    pub fn get(&self, id: ComponentTypeId) -> Option<&ComponentType> {
        if id.registry != self.id {
            return None;
        }
        self.types.get(id.key)
    }

    /// Look up a type id by component name.
    pub fn find(&self, name: &str) -> Option<ComponentTypeId> {
        self.by_name.get(name).copied()
    }

    /// Breakpoints used for responsive expansion.
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Derive a kebab-case selector from a component name:
/// `Primer::Alpha::ActionList` → `primer-alpha-action-list`.
pub fn test_selector_for(name: &str) -> String {
    name.to_kebab_case()
}

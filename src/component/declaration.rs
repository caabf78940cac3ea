//! Component type declarations.
//!
//! A [`ComponentDeclaration`] describes one component type: its properties,
//! style map, extra allowed attributes, and optional parent. Nothing is
//! computed here; [`ComponentRegistry::register`](super::registry::ComponentRegistry::register)
//! turns a declaration into an immutable [`ComponentType`](super::registry::ComponentType).

use crate::component::registry::ComponentTypeId;
use crate::properties::PropertiesDefinition;
use crate::style::{StyleDeclaration, StyleTable};

/// How a declaration's properties relate to its parent's.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertiesSource {
    /// Replace: the parent's properties are ignored.
    Define(PropertiesDefinition),
    /// Overlay on the parent's properties.
    Extend(PropertiesDefinition),
}

/// How a declaration's style map relates to its parent's.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleSource {
    /// Replace: the parent's style map is ignored.
    Define(StyleDeclaration),
    /// Overlay on the parent's style map.
    Extend(StyleDeclaration),
}

/// Declaration of a component type.
///
/// # Examples
///
/// ```ignore
/// let stack = ComponentDeclaration::new("Primer::Alpha::Stack")
///     .properties(properties)
///     .style_map(general, responsive, with_responsive)
///     .allow_html_attributes(["href"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDeclaration {
    pub(crate) name: String,
    pub(crate) parent: Option<ComponentTypeId>,
    pub(crate) properties: Option<PropertiesSource>,
    pub(crate) style: Option<StyleSource>,
    pub(crate) allowed_attributes: Vec<String>,
    pub(crate) default_tag: Option<String>,
}

impl ComponentDeclaration {
    /// Start a declaration for the component called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            properties: None,
            style: None,
            allowed_attributes: Vec::new(),
            default_tag: None,
        }
    }

    /// Base this component on an already registered type (builder).
    pub fn parent(mut self, parent: ComponentTypeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Declare the full property set (builder).
    pub fn properties(mut self, properties: PropertiesDefinition) -> Self {
        self.properties = Some(PropertiesSource::Define(properties));
        self
    }

    /// Add to or override the parent's properties (builder).
    pub fn extend_properties(mut self, properties: PropertiesDefinition) -> Self {
        self.properties = Some(PropertiesSource::Extend(properties));
        self
    }

    /// Declare the style map (builder).
    pub fn style_map(
        mut self,
        general: StyleTable,
        responsive: StyleTable,
        with_responsive: StyleTable,
    ) -> Self {
        self.style = Some(StyleSource::Define(
            StyleDeclaration::new()
                .general(general)
                .responsive(responsive)
                .with_responsive(with_responsive),
        ));
        self
    }

    /// Add to the parent's style map (builder).
    pub fn extend_style_map(
        mut self,
        general: StyleTable,
        responsive: StyleTable,
        with_responsive: StyleTable,
    ) -> Self {
        self.style = Some(StyleSource::Extend(
            StyleDeclaration::new()
                .general(general)
                .responsive(responsive)
                .with_responsive(with_responsive),
        ));
        self
    }

    /// Accept these attribute names in addition to the base allow-list (builder).
    ///
    /// Replaces any names given by an earlier call.
    pub fn allow_html_attributes(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.allowed_attributes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Root tag used when no valid `tag` property is supplied (builder).
    pub fn default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = Some(tag.into());
        self
    }

    /// The component name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

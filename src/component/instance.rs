//! ComponentInstance: one rendered component's values and attributes.
//!
//! Construction runs a fixed sequence: strict validation (if configured),
//! sanitization, tag resolution, marker and test-selector injection, then
//! the `classes` → `class` rename. Default filling, value validation, and
//! style resolution are left to the caller.

use tracing::trace;

use crate::attributes::sanitize;
use crate::attributes::HtmlAttributes;
use crate::component::registry::ComponentType;
use crate::config::Config;
use crate::error::ValidationError;
use crate::properties::{registry as property_registry, PropertyValues};
use crate::style::{resolve, StyleMap};

/// Reserved property naming the root tag.
pub const TAG_PROPERTY: &str = "tag";
/// Marker attribute identifying library-managed elements.
pub const MARKER_ATTRIBUTE: &str = "data-view-component";
/// Attribute carrying the test selector.
pub const TEST_SELECTOR_ATTRIBUTE: &str = "data-test-selector";
/// Staging key for an explicit test selector.
pub const TEST_SELECTOR_KEY: &str = "test_selector";
/// Staging key renamed to `class` during construction.
pub const CLASSES_KEY: &str = "classes";

/// Lifecycle state of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    /// Constructed; styles not resolved yet.
    Constructed,
    /// The filtered style class cache is populated.
    StylesResolved,
}

/// A single component instance.
#[derive(Debug, Clone)]
pub struct ComponentInstance<'a> {
    component: &'a ComponentType,
    config: &'a Config,
    property_values: PropertyValues,
    html_attributes: HtmlAttributes,
    tag: String,
    filtered_classes: Option<Vec<String>>,
}

impl<'a> ComponentInstance<'a> {
    /// Construct an instance.
    ///
    /// Only fails when `config.strict_attributes` is set and an attribute is
    /// outside the allow-list.
    pub fn new(
        component: &'a ComponentType,
        config: &'a Config,
        property_values: PropertyValues,
        html_attributes: HtmlAttributes,
    ) -> Result<Self, ValidationError> {
        let mut instance = Self {
            component,
            config,
            property_values,
            html_attributes,
            tag: component.default_tag().to_owned(),
            filtered_classes: None,
        };

        if config.strict_attributes {
            instance.validate_html_attributes(None)?;
        }
        instance.sanitize_html_attributes_in_place();

        if let Some(tag) = instance
            .property_values
            .get(TAG_PROPERTY)
            .and_then(|value| value.as_single())
            .and_then(|value| value.as_str())
            .filter(|tag| is_valid_tag(tag))
        {
            instance.tag = tag.to_owned();
        }

        let attrs = &mut instance.html_attributes;
        attrs.insert(MARKER_ATTRIBUTE, true);
        let selector = match attrs.remove(TEST_SELECTOR_KEY) {
            Some(explicit) => explicit,
            None => component.test_selector().into(),
        };
        attrs.insert(TEST_SELECTOR_ATTRIBUTE, selector);

        if let Some(classes) = attrs.get(CLASSES_KEY).cloned() {
            attrs.insert("class", classes);
            attrs.remove(CLASSES_KEY);
        }

        Ok(instance)
    }

    /// The component type.
    pub fn component(&self) -> &'a ComponentType {
        self.component
    }

    /// Current property values.
    pub fn property_values(&self) -> &PropertyValues {
        &self.property_values
    }

    /// Current HTML attributes.
    pub fn html_attributes(&self) -> &HtmlAttributes {
        &self.html_attributes
    }

    /// The resolved root tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Lifecycle state.
    pub fn state(&self) -> InstanceState {
        if self.filtered_classes.is_some() {
            InstanceState::StylesResolved
        } else {
            InstanceState::Constructed
        }
    }

    // -- attributes ----------------------------------------------------------

    /// Validate `attributes`, or the instance's own when `None`.
    pub fn validate_html_attributes(&self, attributes: Option<&HtmlAttributes>) -> Result<(), ValidationError> {
        sanitize::validate(
            attributes.unwrap_or(&self.html_attributes),
            &self.config.base_allow_list,
            self.component.allowed_attributes(),
        )
    }

    /// Sanitized copy of `attributes`.
    pub fn sanitize_html_attributes(&self, attributes: &HtmlAttributes) -> HtmlAttributes {
        sanitize::sanitize(
            attributes,
            &self.config.base_allow_list,
            self.component.allowed_attributes(),
        )
    }

    /// Sanitize the instance's own attributes.
    pub fn sanitize_html_attributes_in_place(&mut self) {
        self.html_attributes = self.sanitize_html_attributes(&self.html_attributes);
    }

    /// Serialize the instance's attributes.
    pub fn render_html_attributes(&self) -> String {
        self.html_attributes.render()
    }

    // -- property values -----------------------------------------------------

    /// `values` with defaults filled in for missing declared properties.
    ///
    /// Defaults apply when `fallback_to_default` is set or the configured mode
    /// is production.
    pub fn fill_default_values(&self, values: &PropertyValues, fallback_to_default: bool) -> PropertyValues {
        match self.component.properties() {
            Some(definitions) => {
                property_registry::fill_defaults(definitions, values, fallback_to_default, self.config.mode)
            }
            None => values.clone(),
        }
    }

    /// Fill defaults into the instance's own values.
    ///
    /// Does not touch the style cache; call
    /// [`filtered_style_class_map`](Self::filtered_style_class_map) with
    /// `force` to pick up the new values.
    pub fn fill_default_values_in_place(&mut self, fallback_to_default: bool) {
        self.property_values = self.fill_default_values(&self.property_values, fallback_to_default);
    }

    /// Validate `values`, or the instance's own when `None`.
    ///
    /// A type that declares no properties accepts no property values.
    /// Responsive values must name one of the type's breakpoints.
    pub fn validate_values(&self, values: Option<&PropertyValues>) -> Result<(), Vec<ValidationError>> {
        let values = values.unwrap_or(&self.property_values);
        let breakpoints = self.component.breakpoints();
        match self.component.properties() {
            Some(definitions) => property_registry::validate(definitions, values, breakpoints),
            None => property_registry::validate(&Default::default(), values, breakpoints),
        }
    }

    // -- styles --------------------------------------------------------------

    /// The type's style map.
    pub fn style_class_map(&self) -> Option<&'a StyleMap> {
        self.component.style_map()
    }

    /// Resolved classes for the instance's values, computed once and cached.
    ///
    /// The cache is only recomputed when `force` is set.
    pub fn filtered_style_class_map(&mut self, force: bool) -> &[String] {
        if force || self.filtered_classes.is_none() {
            trace!(component = %self.component.name(), force, "computing style classes");
            self.filtered_classes = Some(self.filter_style_class_map(None));
        }
        self.filtered_classes.as_deref().unwrap_or_default()
    }

    /// Resolved classes for `values`, or the instance's own when `None`. Not cached.
    pub fn filter_style_class_map(&self, values: Option<&PropertyValues>) -> Vec<String> {
        match self.component.style_map() {
            Some(map) => resolve(map, values.unwrap_or(&self.property_values)),
            None => Vec::new(),
        }
    }
}

/// Whether `tag` is a plausible HTML element name: an ASCII letter followed
/// by ASCII alphanumerics or hyphens.
pub fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{AllowList, AttributeValue};
    use crate::component::declaration::ComponentDeclaration;
    use crate::component::registry::{ComponentRegistry, ComponentTypeId};
    use crate::config::ExecutionMode;
    use crate::properties::{PropertiesDefinition, PropertyDefinition, PropertyValue};
    use crate::style::StyleTable;
    use crate::value::{Breakpoints, Value};
    use pretty_assertions::assert_eq;

    fn config() -> Config {
        Config::new().with_breakpoints(Breakpoints::new(["narrow", "wide"]))
    }

    fn stack(config: &Config) -> (ComponentRegistry, ComponentTypeId) {
        let mut registry = ComponentRegistry::new(config);
        let id = registry
            .register(
                ComponentDeclaration::new("Primer::Alpha::Stack")
                    .properties(
                        PropertiesDefinition::new()
                            .with(PropertyDefinition::new("tag").allowed(["div", "ul", "nav"]).default_value("div"))
                            .with(
                                PropertyDefinition::new("gap")
                                    .allowed(["none", "normal", "spacious"])
                                    .default_value("normal")
                                    .responsive(true),
                            )
                            .with(PropertyDefinition::new("wrap").allowed([true, false]).default_value(false)),
                    )
                    .style_map(
                        StyleTable::new().with("wrap", true, ["Stack--wrap"]),
                        StyleTable::new()
                            .with("gap", "normal", ["Stack--gap-normal"])
                            .with("gap", "spacious", ["Stack--gap-spacious"]),
                        StyleTable::new(),
                    )
                    .allow_html_attributes(["href"]),
            )
            .unwrap();
        (registry, id)
    }

    #[test]
    fn construction_sanitizes_and_injects() {
        let config = config();
        let (registry, id) = stack(&config);
        let ty = registry.get(id).unwrap();

        let attrs = HtmlAttributes::new()
            .with("id", "main")
            .with("onclick", "evil()")
            .with("href", "/")
            .with("classes", "mt-2 mb-2");
        let instance = ComponentInstance::new(ty, &config, PropertyValues::new(), attrs).unwrap();

        assert_eq!(
            instance.html_attributes().names().collect::<Vec<_>>(),
            vec!["id", "href", "data-view-component", "data-test-selector", "class"]
        );
        assert_eq!(
            instance.html_attributes().get("class"),
            Some(&AttributeValue::from("mt-2 mb-2"))
        );
        assert_eq!(instance.state(), InstanceState::Constructed);
        insta::assert_snapshot!(
            instance.render_html_attributes(),
            @r#"id="main" href="/" data-view-component="true" data-test-selector="primer-alpha-stack" class="mt-2 mb-2""#
        );
    }

    #[test]
    fn explicit_test_selector_wins() {
        let config = config();
        let (registry, id) = stack(&config);
        let attrs = HtmlAttributes::new().with("test_selector", "my-stack");
        let instance = ComponentInstance::new(registry.get(id).unwrap(), &config, PropertyValues::new(), attrs).unwrap();
        assert_eq!(
            instance.html_attributes().get(TEST_SELECTOR_ATTRIBUTE),
            Some(&AttributeValue::from("my-stack"))
        );
        assert!(!instance.html_attributes().contains(TEST_SELECTOR_KEY));
    }

    #[test]
    fn strict_mode_rejects_disallowed_attributes() {
        let config = config().with_strict_attributes(true);
        let (registry, id) = stack(&config);
        let attrs = HtmlAttributes::new().with("onclick", "evil()");
        let result = ComponentInstance::new(registry.get(id).unwrap(), &config, PropertyValues::new(), attrs);
        assert_eq!(
            result.err(),
            Some(ValidationError::DisallowedAttributes {
                names: vec!["onclick".into()]
            })
        );
    }

    #[test]
    fn strict_mode_accepts_component_extras() {
        let config = config().with_strict_attributes(true);
        let (registry, id) = stack(&config);
        let attrs = HtmlAttributes::new().with("href", "/").with("aria-label", "Menu");
        assert!(ComponentInstance::new(registry.get(id).unwrap(), &config, PropertyValues::new(), attrs).is_ok());
    }

    #[test]
    fn custom_base_allow_list() {
        let config = config().with_base_allow_list(AllowList::new(["id"]));
        let (registry, id) = stack(&config);
        let attrs = HtmlAttributes::new().with("id", "x").with("role", "list");
        let instance = ComponentInstance::new(registry.get(id).unwrap(), &config, PropertyValues::new(), attrs).unwrap();
        assert!(!instance.html_attributes().contains("role"));
    }

    #[test]
    fn tag_resolution() {
        let config = config();
        let (registry, id) = stack(&config);
        let ty = registry.get(id).unwrap();

        let nav = ComponentInstance::new(ty, &config, PropertyValues::new().with("tag", "nav"), HtmlAttributes::new()).unwrap();
        assert_eq!(nav.tag(), "nav");

        let bogus = ComponentInstance::new(ty, &config, PropertyValues::new().with("tag", "<script>"), HtmlAttributes::new()).unwrap();
        assert_eq!(bogus.tag(), "div");

        let numeric = ComponentInstance::new(ty, &config, PropertyValues::new().with("tag", 1), HtmlAttributes::new()).unwrap();
        assert_eq!(numeric.tag(), "div");
    }

    #[test]
    fn defaults_are_not_filled_eagerly() {
        let config = config();
        let (registry, id) = stack(&config);
        let mut instance =
            ComponentInstance::new(registry.get(id).unwrap(), &config, PropertyValues::new(), HtmlAttributes::new()).unwrap();
        assert!(instance.property_values().is_empty());

        instance.fill_default_values_in_place(false);
        assert!(instance.property_values().is_empty());

        instance.fill_default_values_in_place(true);
        assert_eq!(instance.property_values().get("gap"), Some(&PropertyValue::from("normal")));
        assert_eq!(instance.property_values().len(), 3);
    }

    #[test]
    fn production_mode_fills_defaults() {
        let config = config().with_mode(ExecutionMode::Production);
        let (registry, id) = stack(&config);
        let instance =
            ComponentInstance::new(registry.get(id).unwrap(), &config, PropertyValues::new(), HtmlAttributes::new()).unwrap();
        let filled = instance.fill_default_values(&PropertyValues::new().with("tag", "ul"), false);
        assert_eq!(filled.get("tag"), Some(&PropertyValue::from("ul")));
        assert_eq!(filled.get("wrap"), Some(&PropertyValue::from(false)));
    }

    #[test]
    fn validate_values_reports_errors() {
        let config = config();
        let (registry, id) = stack(&config);
        let values = PropertyValues::new().with("gap", "huge").with("size", "large");
        let instance = ComponentInstance::new(registry.get(id).unwrap(), &config, values, HtmlAttributes::new()).unwrap();
        let errors = instance.validate_values(None).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ValueNotAllowed {
                    property: "gap".into(),
                    value: Value::from("huge"),
                },
                ValidationError::UnknownProperty {
                    property: "size".into()
                },
            ]
        );
        assert_eq!(instance.validate_values(Some(&PropertyValues::new().with("wrap", true))), Ok(()));
    }

    #[test]
    fn responsive_values_follow_the_type_breakpoints() {
        let (registry, id) = stack(&config());
        // A host config with the default breakpoint set.
        let host = Config::new();
        let ty = registry.get(id).unwrap();

        let mut instance = ComponentInstance::new(
            ty,
            &host,
            PropertyValues::new().with("gap", PropertyValue::responsive([("wide", "spacious")])),
            HtmlAttributes::new(),
        )
        .unwrap();
        assert_eq!(instance.validate_values(None), Ok(()));
        assert_eq!(instance.filtered_style_class_map(false).to_vec(), vec!["Stack--gap-spacious"]);

        let regular = PropertyValues::new().with("gap", PropertyValue::responsive([("regular", "normal")]));
        assert_eq!(
            instance.validate_values(Some(&regular)),
            Err(vec![ValidationError::UnknownBreakpoint {
                property: "gap".into(),
                breakpoint: "regular".into(),
            }])
        );
    }

    #[test]
    fn filtered_style_class_map_is_cached_until_forced() {
        let config = config();
        let (registry, id) = stack(&config);
        let values = PropertyValues::new()
            .with("wrap", true)
            .with("gap", PropertyValue::responsive([("wide", "spacious")]));
        let mut instance = ComponentInstance::new(registry.get(id).unwrap(), &config, values, HtmlAttributes::new()).unwrap();

        assert_eq!(
            instance.filtered_style_class_map(false).to_vec(),
            vec!["Stack--wrap", "Stack--gap-spacious"]
        );
        assert_eq!(instance.state(), InstanceState::StylesResolved);

        instance.property_values.insert("wrap", false);
        assert_eq!(
            instance.filtered_style_class_map(false).to_vec(),
            vec!["Stack--wrap", "Stack--gap-spacious"]
        );
        assert_eq!(
            instance.filtered_style_class_map(true).to_vec(),
            vec!["Stack--gap-spacious"]
        );
    }

    #[test]
    fn filter_style_class_map_with_other_values() {
        let config = config();
        let (registry, id) = stack(&config);
        let instance =
            ComponentInstance::new(registry.get(id).unwrap(), &config, PropertyValues::new(), HtmlAttributes::new()).unwrap();
        let values = PropertyValues::new().with("gap", PropertyValue::responsive([("narrow", "normal")]));
        assert_eq!(instance.filter_style_class_map(Some(&values)), vec!["Stack--gap-normal"]);
        assert_eq!(instance.state(), InstanceState::Constructed);
    }

    #[test]
    fn type_without_style_map_resolves_nothing() {
        let config = config();
        let mut registry = ComponentRegistry::new(&config);
        let id = registry.register(ComponentDeclaration::new("Plain")).unwrap();
        let mut instance = registry
            .get(id)
            .unwrap()
            .instantiate(&config, PropertyValues::new().with("x", 1), HtmlAttributes::new())
            .unwrap();
        assert!(instance.filtered_style_class_map(false).is_empty());
        assert!(instance.style_class_map().is_none());
        assert!(instance.validate_values(None).is_err());
    }

    #[test]
    fn valid_tags() {
        assert!(is_valid_tag("div"));
        assert!(is_valid_tag("h1"));
        assert!(is_valid_tag("my-element"));
        assert!(!is_valid_tag(""));
        assert!(!is_valid_tag("1div"));
        assert!(!is_valid_tag("di v"));
    }
}

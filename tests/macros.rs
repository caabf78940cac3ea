//! Declaration macros used the way component authors use them.

#![cfg(feature = "macros")]

use pretty_assertions::assert_eq;

use primer_responsive::properties::PropertyValues;
use primer_responsive::{properties, style_table, ComponentDeclaration, ComponentRegistry, Config, Value};

#[test]
fn test_style_table_macro() {
    let table = style_table! {
        scheme: {
            primary: "Label--primary",
            danger: ["Label--danger", "text-bold"],
            default: [],
        },
        inline: { true: "Label--inline" },
    };

    assert_eq!(table.len(), 2);
    assert_eq!(
        table.get("scheme", &Value::from("danger")),
        Some(&["Label--danger".to_string(), "text-bold".to_string()][..])
    );
    assert_eq!(table.get("scheme", &Value::from("default")), Some(&[] as &[String]));
    assert_eq!(
        table.get("inline", &Value::Bool(true)),
        Some(&["Label--inline".to_string()][..])
    );
}

#[test]
fn test_properties_macro() {
    let definitions = properties! {
        tag: { allowed: [span, summary, a, div], default: span },
        size: { allowed: [medium, large], default: medium, responsive },
        title,
    };

    assert_eq!(definitions.names().collect::<Vec<_>>(), vec!["tag", "size", "title"]);
    let size = definitions.get("size").unwrap();
    assert!(size.is_responsive());
    assert_eq!(size.default(), Some(&Value::from("medium")));
    assert!(definitions.get("title").unwrap().allowed_values().is_none());
}

#[test]
fn test_macros_drive_a_component() {
    let config = Config::new();
    let mut registry = ComponentRegistry::new(&config);
    let id = registry
        .register(
            ComponentDeclaration::new("Primer::Beta::Label")
                .properties(properties! {
                    scheme: { allowed: [default, primary, danger], default: default },
                    size: { allowed: [medium, large], default: medium, responsive },
                })
                .style_map(
                    style_table! { scheme: { primary: "Label--primary", danger: "Label--danger" } },
                    style_table! { size: { large: "Label--large" } },
                    style_table! {},
                ),
        )
        .unwrap();

    let mut instance = registry
        .get(id)
        .unwrap()
        .instantiate(
            &config,
            PropertyValues::new().with("scheme", "danger").with(
                "size",
                primer_responsive::properties::PropertyValue::responsive([("wide", "large")]),
            ),
            Default::default(),
        )
        .unwrap();
    assert_eq!(
        instance.filtered_style_class_map(false).to_vec(),
        vec!["Label--danger", "Label--large"]
    );
}

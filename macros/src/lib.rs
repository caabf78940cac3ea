//! Proc macros for primer-responsive: `style_table!` and `properties!` declaration DSLs.
//!
//! This crate is not meant to be used directly. Enable the `macros` feature on `primer-responsive`.

use proc_macro::TokenStream;

mod properties_macro;
mod style_table_macro;
mod value;

/// Compile-time style table declaration.
///
/// Produces a `primer_responsive::style::StyleTable`. Each property maps
/// values to a single class or a bracketed list of classes. Values may be
/// identifiers (kebab-case allowed), strings, integers, or booleans.
///
/// # Example
///
/// ```ignore
/// let general = style_table! {
///     variant: {
///         primary: "btn-primary",
///         danger: ["btn", "btn-danger"],
///     },
///     wrap: { true: "flex-wrap" },
/// };
/// ```
///
/// Duplicate properties or values and class names containing whitespace are
/// compile errors.
#[proc_macro]
pub fn style_table(input: TokenStream) -> TokenStream {
    style_table_macro::style_table_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Compile-time property declarations.
///
/// Produces a `primer_responsive::properties::PropertiesDefinition`.
///
/// # Syntax
///
/// ```ignore
/// let properties = properties! {
///     tag: { allowed: [div, ul, nav], default: div },
///     gap: { allowed: [none, normal, spacious], default: normal, responsive },
///     label,
/// };
/// ```
///
/// A default outside the allowed values is a compile error.
#[proc_macro]
pub fn properties(input: TokenStream) -> TokenStream {
    properties_macro::properties_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

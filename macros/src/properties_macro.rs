//! properties! macro: parse property declarations and check defaults at compile time.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{braced, bracketed, Error, Ident, LitBool, Result, Token};

use crate::value::{parse_name, parse_value, LiteralValue};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A single declared property.
#[derive(Debug, Clone)]
pub(crate) struct PropertyDecl {
    pub name: String,
    pub name_span: Span,
    pub allowed: Option<Vec<LiteralValue>>,
    pub default: Option<LiteralValue>,
    pub responsive: bool,
}

#[derive(Debug)]
struct PropertiesInput {
    properties: Vec<PropertyDecl>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for PropertiesInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut properties = Vec::new();
        while !input.is_empty() {
            properties.push(parse_property(input)?);
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(PropertiesInput { properties })
    }
}

/// Parse `name` or `name: { allowed: [..], default: .., responsive }`.
fn parse_property(input: ParseStream) -> Result<PropertyDecl> {
    let (name, name_span) = parse_name(input)?;
    let mut decl = PropertyDecl {
        name,
        name_span,
        allowed: None,
        default: None,
        responsive: false,
    };

    if !input.peek(Token![:]) {
        return Ok(decl);
    }
    input.parse::<Token![:]>()?;

    let content;
    braced!(content in input);

    let mut seen: Vec<String> = Vec::new();
    while !content.is_empty() {
        let field: Ident = content.parse()?;
        let field_name = field.to_string();
        if seen.contains(&field_name) {
            return Err(Error::new(field.span(), format!("field `{field_name}` is given twice")));
        }
        seen.push(field_name.clone());

        match field_name.as_str() {
            "allowed" => {
                content.parse::<Token![:]>()?;
                let list;
                bracketed!(list in content);
                let values = list.parse_terminated(parse_value, Token![,])?;
                decl.allowed = Some(values.into_iter().collect());
            }
            "default" => {
                content.parse::<Token![:]>()?;
                decl.default = Some(parse_value(&content)?);
            }
            "responsive" => {
                decl.responsive = if content.peek(Token![:]) {
                    content.parse::<Token![:]>()?;
                    content.parse::<LitBool>()?.value
                } else {
                    true
                };
            }
            other => {
                return Err(Error::new(
                    field.span(),
                    format!("unknown field `{other}`, expected `allowed`, `default`, or `responsive`"),
                ));
            }
        }

        if content.is_empty() {
            break;
        }
        content.parse::<Token![,]>()?;
    }

    Ok(decl)
}

// ---------------------------------------------------------------------------
// Validation and code generation
// ---------------------------------------------------------------------------

fn check_property(decl: &PropertyDecl, earlier: &[PropertyDecl]) -> Result<()> {
    if earlier.iter().any(|other| other.name == decl.name) {
        return Err(Error::new(
            decl.name_span,
            format!("property `{}` is declared twice", decl.name),
        ));
    }
    if let Some(allowed) = &decl.allowed {
        if allowed.is_empty() {
            return Err(Error::new(
                decl.name_span,
                format!("property `{}` allows no values", decl.name),
            ));
        }
        if let Some(default) = &decl.default {
            if !allowed.iter().any(|value| value.same(default)) {
                return Err(Error::new(
                    default.span(),
                    format!(
                        "default `{}` is not an allowed value of property `{}`",
                        default.describe(),
                        decl.name
                    ),
                ));
            }
        }
    }
    Ok(())
}

fn generate_property(decl: &PropertyDecl) -> TokenStream {
    let name = &decl.name;
    let mut definition = quote! {
        primer_responsive::properties::PropertyDefinition::new(#name)
    };
    if let Some(allowed) = &decl.allowed {
        let values = allowed.iter().map(LiteralValue::to_value_tokens);
        definition = quote! { #definition.allowed([#(#values),*]) };
    }
    if let Some(default) = &decl.default {
        let value = default.to_value_tokens();
        definition = quote! { #definition.default_value(#value) };
    }
    if decl.responsive {
        definition = quote! { #definition.responsive(true) };
    }
    quote! { __properties.insert(#definition); }
}

/// Entry point: generate code for the entire properties! macro.
pub(crate) fn properties_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: PropertiesInput = syn::parse2(input)?;

    if parsed.properties.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "properties! macro requires at least one property",
        ));
    }

    let mut inserts = Vec::new();
    for (i, decl) in parsed.properties.iter().enumerate() {
        check_property(decl, &parsed.properties[..i])?;
        inserts.push(generate_property(decl));
    }

    Ok(quote! {
        {
            let mut __properties = primer_responsive::properties::PropertiesDefinition::new();
            #(#inserts)*
            __properties
        }
    })
}

// ===========================================================================
// Tests
// ===========================================================================

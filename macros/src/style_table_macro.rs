//! style_table! macro: parse a property → value → classes table at compile time.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{braced, bracketed, Error, LitStr, Result, Token};

use crate::value::{parse_name, parse_value, LiteralValue};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// One `value: classes` entry.
#[derive(Debug, Clone)]
pub(crate) struct ValueEntry {
    pub value: LiteralValue,
    pub classes: Vec<(String, Span)>,
}

/// One `property: { ... }` block.
#[derive(Debug, Clone)]
pub(crate) struct PropertyBlock {
    pub name: String,
    pub name_span: Span,
    pub entries: Vec<ValueEntry>,
}

#[derive(Debug)]
struct TableInput {
    properties: Vec<PropertyBlock>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for TableInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut properties = Vec::new();
        while !input.is_empty() {
            properties.push(parse_property_block(input)?);
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(TableInput { properties })
    }
}

fn parse_property_block(input: ParseStream) -> Result<PropertyBlock> {
    let (name, name_span) = parse_name(input)?;
    input.parse::<Token![:]>()?;

    let content;
    braced!(content in input);

    let mut entries = Vec::new();
    while !content.is_empty() {
        let value = parse_value(&content)?;
        content.parse::<Token![:]>()?;
        let classes = parse_classes(&content)?;
        entries.push(ValueEntry { value, classes });
        if content.is_empty() {
            break;
        }
        content.parse::<Token![,]>()?;
    }

    Ok(PropertyBlock {
        name,
        name_span,
        entries,
    })
}

/// Parse `"a"` or `["a", "b"]` (possibly empty).
fn parse_classes(input: ParseStream) -> Result<Vec<(String, Span)>> {
    let literals: Vec<LitStr> = if input.peek(LitStr) {
        vec![input.parse()?]
    } else {
        let content;
        bracketed!(content in input);
        content
            .parse_terminated(<LitStr as Parse>::parse, Token![,])?
            .into_iter()
            .collect()
    };

    let mut classes = Vec::with_capacity(literals.len());
    for lit in literals {
        let class = lit.value();
        if class.is_empty() || class.chars().any(char::is_whitespace) {
            return Err(Error::new(
                lit.span(),
                format!("invalid class name `{class}`: must be a single non-empty token"),
            ));
        }
        classes.push((class, lit.span()));
    }
    Ok(classes)
}

// ---------------------------------------------------------------------------
// Validation and code generation
// ---------------------------------------------------------------------------

fn check_duplicates(properties: &[PropertyBlock]) -> Result<()> {
    for (i, block) in properties.iter().enumerate() {
        if properties[..i].iter().any(|earlier| earlier.name == block.name) {
            return Err(Error::new(
                block.name_span,
                format!("property `{}` is declared twice", block.name),
            ));
        }
        for (j, entry) in block.entries.iter().enumerate() {
            if block.entries[..j].iter().any(|earlier| earlier.value.same(&entry.value)) {
                return Err(Error::new(
                    entry.value.span(),
                    format!(
                        "value `{}` of property `{}` is declared twice",
                        entry.value.describe(),
                        block.name
                    ),
                ));
            }
        }
    }
    Ok(())
}

/// Entry point: generate code for the entire style_table! macro.
pub(crate) fn style_table_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: TableInput = syn::parse2(input)?;
    check_duplicates(&parsed.properties)?;

    let mut inserts = Vec::new();
    for block in &parsed.properties {
        let name = &block.name;
        for entry in &block.entries {
            let value = entry.value.to_value_tokens();
            let classes = entry.classes.iter().map(|(class, _)| class);
            inserts.push(quote! {
                __table.insert(#name, #value, ::std::vec::Vec::<&str>::from([#(#classes),*]));
            });
        }
    }

    Ok(quote! {
        {
            let mut __table = primer_responsive::style::StyleTable::new();
            #(#inserts)*
            __table
        }
    })
}

// ===========================================================================
// Tests
// ===========================================================================

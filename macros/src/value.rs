//! Shared parsing for names and property values in declaration macros.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{Error, Ident, LitBool, LitInt, LitStr, Result, Token};

/// A property value literal: `primary`, `"primary"`, `2`, `-1`, `true`.
#[derive(Debug, Clone)]
pub(crate) enum LiteralValue {
    Str(String, Span),
    Int(i64, Span),
    Bool(bool, Span),
}

impl LiteralValue {
    pub(crate) fn span(&self) -> Span {
        match self {
            LiteralValue::Str(_, s) | LiteralValue::Int(_, s) | LiteralValue::Bool(_, s) => *s,
        }
    }

    /// Equality ignoring spans.
    pub(crate) fn same(&self, other: &LiteralValue) -> bool {
        match (self, other) {
            (LiteralValue::Str(a, _), LiteralValue::Str(b, _)) => a == b,
            (LiteralValue::Int(a, _), LiteralValue::Int(b, _)) => a == b,
            (LiteralValue::Bool(a, _), LiteralValue::Bool(b, _)) => a == b,
            _ => false,
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            LiteralValue::Str(s, _) => s.clone(),
            LiteralValue::Int(n, _) => n.to_string(),
            LiteralValue::Bool(b, _) => b.to_string(),
        }
    }

    /// Code building a `primer_responsive::value::Value`.
    pub(crate) fn to_value_tokens(&self) -> TokenStream {
        match self {
            LiteralValue::Str(s, _) => {
                quote! { primer_responsive::value::Value::Str(::std::string::String::from(#s)) }
            }
            LiteralValue::Int(n, _) => quote! { primer_responsive::value::Value::Int(#n) },
            LiteralValue::Bool(b, _) => quote! { primer_responsive::value::Value::Bool(#b) },
        }
    }
}

/// Parse a name: a kebab-case identifier chain (`justify-content`) or a string literal.
pub(crate) fn parse_name(input: ParseStream) -> Result<(String, Span)> {
    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        if lit.value().is_empty() {
            return Err(Error::new(lit.span(), "name must not be empty"));
        }
        return Ok((lit.value(), lit.span()));
    }

    let first = Ident::parse_any(input)?;
    let span = first.span();
    let mut name = first.to_string();
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        let next = Ident::parse_any(input)?;
        name.push('-');
        name.push_str(&next.to_string());
    }
    Ok((name, span))
}

/// Parse a single value literal.
pub(crate) fn parse_value(input: ParseStream) -> Result<LiteralValue> {
    if input.peek(LitBool) {
        let lit: LitBool = input.parse()?;
        return Ok(LiteralValue::Bool(lit.value, lit.span));
    }

    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        return Ok(LiteralValue::Str(lit.value(), lit.span()));
    }

    if input.peek(LitInt) {
        let lit: LitInt = input.parse()?;
        return Ok(LiteralValue::Int(lit.base10_parse()?, lit.span()));
    }

    if input.peek(Token![-]) && input.peek2(LitInt) {
        let neg = input.parse::<Token![-]>()?;
        let lit: LitInt = input.parse()?;
        let value: i64 = lit.base10_parse()?;
        return Ok(LiteralValue::Int(-value, neg.spans[0]));
    }

    if input.peek(Ident::peek_any) {
        let (name, span) = parse_name(input)?;
        return Ok(LiteralValue::Str(name, span));
    }

    Err(input.error("expected a property value: identifier, string, integer, or boolean"))
}

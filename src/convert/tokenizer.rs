//! logos-based tokenizer for `class` attribute values.

use logos::Logos;

/// A token of a `class` attribute: one class name. Whitespace is skipped.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum ClassToken {
    #[regex(r"[^ \t\n\r\f]+")]
    Class,
}

/// Split a `class` attribute value into class names, in order.
pub fn class_names(input: &str) -> Vec<&str> {
    ClassToken::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|_| &input[span]))
        .collect()
}

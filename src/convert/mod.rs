//! Converting raw markup attributes back into component arguments.

pub mod mapper;
pub mod tokenizer;

pub use mapper::{ClassArgumentMapper, ConversionError, ConvertedArguments};

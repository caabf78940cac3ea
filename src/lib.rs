//! # primer-responsive
//!
//! Property-validated, responsive HTML components.
//!
//! Component types declare their properties (allowed values, defaults) and a
//! style map from property values to CSS classes, with per-breakpoint
//! variants. Instances hold one set of property values and HTML attributes,
//! sanitize the attributes against an allow-list, and resolve their classes
//! on demand. Markup generation is left to the host.
//!
//! ## Core Systems
//!
//! - **[`value`]**: Property values and breakpoints
//! - **[`properties`]**: Property declarations, default filling, validation
//! - **[`style`]**: Style tables, responsive expansion, class resolution
//! - **[`attributes`]**: HTML attributes, allow-lists, sanitization, rendering
//! - **[`component`]**: Component type registry and instances
//! - **[`convert`]**: Class-to-argument mapping for markup rewriting
//! - **[`config`]**: Execution mode and runtime configuration
//! - **[`error`]**: Declaration and validation errors

// Foundation
pub mod config;
pub mod error;
pub mod value;

// Core systems
pub mod attributes;
pub mod properties;
pub mod style;

// Components
pub mod component;

// Markup conversion
pub mod convert;

pub use component::{ComponentDeclaration, ComponentInstance, ComponentRegistry};
pub use config::{Config, ExecutionMode};
pub use error::{ConfigError, ValidationError};
pub use value::{Breakpoint, Breakpoints, Value};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use primer_responsive_macros::{properties, style_table};

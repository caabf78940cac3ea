//! Style-class maps: declaration tables, responsive expansion, resolution.

pub mod map;
pub mod registry;
pub mod resolve;
pub mod responsive;
pub mod table;

pub use map::{StyleKey, StyleMap};
pub use registry::StyleDeclaration;
pub use resolve::resolve;
pub use responsive::responsive_expand;
pub use table::StyleTable;

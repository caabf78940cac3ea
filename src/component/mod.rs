//! Component types and instances.

pub mod declaration;
pub mod instance;
pub mod registry;

pub use declaration::ComponentDeclaration;
pub use instance::{ComponentInstance, InstanceState};
pub use registry::{ComponentRegistry, ComponentType, ComponentTypeId};

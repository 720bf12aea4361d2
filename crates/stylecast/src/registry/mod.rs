//! Named, reusable style classes.
//!
//! - [`ClassRegistry`]: the injectable store, keyed by sanitized name
//! - [`ClassDefinition`]: a named bundle with label, description and tag
//! - [`sanitize`]: the name normalization every operation applies
//! - [`SharedClassRegistry`]: a thread-safe handle for shared use
//!
//! Classes are referenced from elements by name only. Resolution treats a
//! name that is not in the registry as contributing nothing.

mod class;
mod classes;
mod error;
mod sanitize;
mod shared;

pub use class::{ClassCategory, ClassDefinition, ClassPatch, CreateOptions};
pub use classes::ClassRegistry;
pub use error::RegistryError;
pub use sanitize::sanitize;
pub use shared::SharedClassRegistry;

//! Style cascade resolution and CSS serialization.
//!
//! `stylecast` takes a sparse, multi-tiered description of an element's
//! visual properties and produces two things:
//!
//! - the effective CSS declarations to render, as an ordered
//!   [`CssProperties`] map with a fixed text grammar
//! - a per-leaf [`ProvenanceMap`] telling an editor which tier supplied each
//!   value and whether a breakpoint override was involved
//!
//! # Modules
//!
//! - [`schema`]: the closed field vocabulary ([`StyleBundle`], [`Field`])
//! - [`registry`]: named, reusable classes ([`ClassRegistry`])
//! - [`cascade`]: tier merging and provenance ([`resolve`])
//! - [`css`]: serialization ([`to_css_properties`])
//! - [`store`]: JSON/YAML loading and saving
//!
//! # Tiers
//!
//! From lowest to highest precedence: default constants, global theme,
//! applied classes (later wins), the element's own bundle, active-breakpoint
//! overrides, active-state overlays, and the manual override. Each tier is a
//! partial bundle; absent fields have no opinion, and `null` (unset) fields
//! explicitly fall through.
//!
//! # Example
//!
//! ```rust
//! use stylecast::{render, ClassDefinition, ClassRegistry, ResolveContext, StyleBundle};
//! use stylecast::schema::{Breakpoint, InteractionState};
//! use serde_json::json;
//!
//! let mut registry = ClassRegistry::new();
//! registry.create(ClassDefinition::new(
//!     "button",
//!     StyleBundle::from_value(&json!({
//!         "typography": {"color": "#222"},
//!         "states": {"hover": {"typography": {"color": "#000"}}}
//!     }))?,
//! ))?;
//!
//! let element = StyleBundle::from_value(&json!({
//!     "responsive": {"mobile": {"layout": {"padding": {"top": "4px"}}}}
//! }))?;
//!
//! let context = ResolveContext::new()
//!     .breakpoint(Breakpoint::Mobile)
//!     .state(InteractionState::Hover)
//!     .classes(["button"])
//!     .registry(&registry);
//!
//! let (css, resolution) = render(&element, &context);
//! assert_eq!(css.get("color"), Some("#000"));
//! assert_eq!(css.get("padding"), Some("4px 0 0 0"));
//! assert!(resolution.provenance.is_responsive("layout.padding.top"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cascade;
pub mod css;
pub mod registry;
pub mod schema;
pub mod store;

pub use cascade::{resolve, ProvenanceMap, Resolution, ResolveContext, Source};
pub use css::{to_css_properties, CssProperties};
pub use registry::{ClassDefinition, ClassRegistry, RegistryError, SharedClassRegistry};
pub use schema::{BundleError, Field, StyleBundle};
pub use store::StoreError;

/// Resolves an element and serializes the result in one step.
///
/// Equivalent to [`resolve`] followed by [`to_css_properties`] on the
/// effective bundle.
pub fn render(element: &StyleBundle, context: &ResolveContext<'_>) -> (CssProperties, Resolution) {
    let resolution = resolve(element, context);
    let css = to_css_properties(&resolution.bundle);
    (css, resolution)
}

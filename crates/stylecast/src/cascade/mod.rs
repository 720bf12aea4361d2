//! The cascade resolver.
//!
//! [`resolve`] merges a sparse tier stack into one effective [`StyleBundle`]
//! and answers, per leaf path, which tier category supplied the value:
//!
//! | Tier | Reported source |
//! |------|-----------------|
//! | default constants | `default` |
//! | global theme (and its overlays) | `global` |
//! | applied classes (and their overlays) | `class` |
//! | element bundle (and its overlays), manual override | `user` |
//!
//! The breakpoint and interaction-state axes are orthogonal: both overlays
//! apply when both are active, state above breakpoint.
//!
//! # Example
//!
//! ```rust
//! use stylecast::cascade::{resolve, ResolveContext, Source};
//! use stylecast::registry::{ClassDefinition, ClassRegistry};
//! use stylecast::schema::StyleBundle;
//! use serde_json::json;
//!
//! let mut registry = ClassRegistry::new();
//! let spacer = StyleBundle::from_value(&json!({"layout": {"margin": {"top": "20px"}}}))?;
//! registry.create(ClassDefinition::new("spacer", spacer))?;
//!
//! let manual = StyleBundle::from_value(&json!({"layout": {"margin": {"left": "5px"}}}))?;
//! let context = ResolveContext::new()
//!     .classes(["spacer"])
//!     .registry(&registry)
//!     .manual(&manual);
//!
//! let resolution = resolve(&StyleBundle::default(), &context);
//! assert_eq!(resolution.provenance.source("layout.margin.top"), Some(Source::Class));
//! assert_eq!(resolution.provenance.source("layout.margin.left"), Some(Source::User));
//! assert_eq!(resolution.provenance.source("layout.margin.right"), Some(Source::Default));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`StyleBundle`]: crate::schema::StyleBundle

mod context;
mod provenance;
mod resolver;

pub use context::ResolveContext;
pub use provenance::{ProvenanceEntry, ProvenanceMap, Source};
pub use resolver::{resolve, Resolution};

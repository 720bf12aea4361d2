//! The typed style vocabulary.
//!
//! This module defines the closed, versioned field schema every tier of the
//! cascade is expressed in:
//!
//! - [`StyleBundle`]: one sparse record per [`StyleCategory`], plus the
//!   breakpoint and interaction-state overlay axes
//! - [`Field`]: a tri-state leaf (absent, unset, set)
//! - [`StyleNode`]: uniform traversal used by merging and provenance
//! - [`is_neutral`]: the per-field identity values the serializer omits
//!
//! # Persisted format
//!
//! Bundles are stored as camelCase JSON (or YAML). Absent keys mean "no
//! opinion"; `null` is the explicit unset sentinel. Unknown keys and values
//! of the wrong shape are rejected with the exact leaf path:
//!
//! ```rust
//! use stylecast::schema::StyleBundle;
//! use serde_json::json;
//!
//! let err = StyleBundle::from_value(&json!({
//!     "layout": {"margin": {"top": 20}}
//! }))
//! .unwrap_err();
//! assert_eq!(err.path(), Some("layout.margin.top"));
//! ```

pub(crate) mod field;

mod axes;
mod background;
mod border;
mod bundle;
mod category;
mod effects;
mod error;
mod layout;
mod motion;
mod shadow;
mod typography;
mod validate;

pub use axes::{Breakpoint, InteractionState};
pub use background::{
    BackgroundKind, BackgroundSettings, GradientKind, GradientSettings, GradientStop,
    ImageSettings,
};
pub use border::{BorderRadius, BorderSettings, BorderSide};
pub use bundle::StyleBundle;
pub use category::{is_neutral, Neutral, StyleCategory};
pub(crate) use category::{is_neutral_number, is_neutral_text};
pub use effects::{BackdropFilterSettings, BoxShadow, FilterChain, FilterSettings, FILTER_FUNCTIONS};
pub use error::{BundleError, UnknownVariant};
pub use field::{Field, Presence, StyleNode};
pub use layout::{
    Dimensions, FlexContainer, FlexItem, GridContainer, LayoutSettings, PositionSettings, Spacing,
};
pub use motion::{TransformOrigin, TransformSettings, TransitionSettings};
pub use shadow::{ShadowEntry, ShadowList};
pub use typography::{TextShadow, TypographySettings};
pub use validate::decode;

//! CSS serialization of resolved bundles.
//!
//! [`to_css_properties`] is a pure function from an effective
//! [`StyleBundle`] to an ordered [`CssProperties`] map. Its output is a
//! stable text format: property names, value grammar, omission rules and
//! ordering are all fixed.
//!
//! # Ordering
//!
//! Categories are emitted in this order, each with a fixed internal order:
//!
//! | Category | Properties |
//! |----------|------------|
//! | layout | `display`, `position`, offsets, `z-index`, dimensions, `margin`, `padding`, overflow, flex/grid container, flex item |
//! | typography | font and text properties, `color`, `text-decoration`, `text-shadow` |
//! | background | `background-color` or `background-image` (+ size, position, repeat, attachment) |
//! | border | `border-top`, `border-right`, `border-bottom`, `border-left`, `border-radius` |
//! | box-shadow | `box-shadow` |
//! | transform | `transform`, `perspective`, `transform-origin` |
//! | transition | `transition` |
//! | filter | `filter` |
//! | backdrop-filter | `backdrop-filter`, `-webkit-backdrop-filter` |
//!
//! # Omission
//!
//! A field is omitted when it is absent, unset, empty, or equal to its
//! neutral value (see [`is_neutral`](crate::schema::is_neutral)).
//!
//! # Example
//!
//! ```rust
//! use stylecast::css::to_css_properties;
//! use stylecast::schema::StyleBundle;
//! use serde_json::json;
//!
//! let bundle = StyleBundle::from_value(&json!({
//!     "transform": {"translateX": "10px", "rotateZ": 45, "scaleX": 1.5, "scaleY": 1}
//! }))?;
//!
//! let css = to_css_properties(&bundle);
//! assert_eq!(css.get("transform"), Some("translateX(10px) rotateZ(45deg) scaleX(1.5)"));
//! # Ok::<(), stylecast::schema::BundleError>(())
//! ```

mod background;
mod border;
mod effects;
mod format;
mod layout;
mod motion;
mod properties;
mod typography;

pub use properties::CssProperties;

use crate::schema::StyleBundle;

/// Serializes an effective bundle into CSS declarations.
///
/// Overlay maps on the bundle are ignored; resolve first to apply them.
pub fn to_css_properties(bundle: &StyleBundle) -> CssProperties {
    let mut out = CssProperties::new();
    layout::write(&bundle.layout, &mut out);
    typography::write(&bundle.typography, &mut out);
    background::write(&bundle.background, &mut out);
    border::write(&bundle.border, &mut out);
    if let Some(shadows) = bundle.box_shadow.value() {
        effects::write_box_shadow(shadows, &mut out);
    }
    motion::write_transform(&bundle.transform, &mut out);
    motion::write_transition(&bundle.transition, &mut out);
    effects::write_filter(&bundle.filter, &mut out);
    effects::write_backdrop_filter(&bundle.backdrop_filter, &mut out);
    out
}

//! Style categories, their field enumeration, and neutral values.
//!
//! The serializer's omission rules depend on knowing each field's "no-op"
//! value: a neutral value is one whose CSS emission would have no visual
//! effect. This module is the single source of those values.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::background::BackgroundSettings;
use super::border::BorderSettings;
use super::effects::{BackdropFilterSettings, BoxShadow, FilterSettings};
use super::error::UnknownVariant;
use super::layout::LayoutSettings;
use super::motion::{TransformSettings, TransitionSettings};
use super::typography::TypographySettings;
use super::{Field, StyleNode};

/// A top-level group of style fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleCategory {
    Layout,
    Typography,
    Background,
    Border,
    Transform,
    Transition,
    Filter,
    BackdropFilter,
    BoxShadow,
}

impl StyleCategory {
    pub const ALL: [StyleCategory; 9] = [
        StyleCategory::Layout,
        StyleCategory::Typography,
        StyleCategory::Background,
        StyleCategory::Border,
        StyleCategory::Transform,
        StyleCategory::Transition,
        StyleCategory::Filter,
        StyleCategory::BackdropFilter,
        StyleCategory::BoxShadow,
    ];

    /// The key used in stored bundles and provenance paths.
    pub fn key(self) -> &'static str {
        match self {
            StyleCategory::Layout => "layout",
            StyleCategory::Typography => "typography",
            StyleCategory::Background => "background",
            StyleCategory::Border => "border",
            StyleCategory::Transform => "transform",
            StyleCategory::Transition => "transition",
            StyleCategory::Filter => "filter",
            StyleCategory::BackdropFilter => "backdropFilter",
            StyleCategory::BoxShadow => "boxShadow",
        }
    }

    /// The kebab-case name (`backdrop-filter`, `box-shadow`, ...).
    pub fn css_name(self) -> &'static str {
        match self {
            StyleCategory::BackdropFilter => "backdrop-filter",
            StyleCategory::BoxShadow => "box-shadow",
            other => other.key(),
        }
    }

    /// Returns true for categories stored as an ordered list.
    pub fn is_list(self) -> bool {
        self == StyleCategory::BoxShadow
    }

    /// Every leaf path of the category, relative to the category key.
    ///
    /// List categories have a single leaf, the list itself, reported as `""`.
    pub fn fields(self) -> Vec<String> {
        let mut out = Vec::new();
        match self {
            StyleCategory::Layout => LayoutSettings::schema_paths("", &mut out),
            StyleCategory::Typography => TypographySettings::schema_paths("", &mut out),
            StyleCategory::Background => BackgroundSettings::schema_paths("", &mut out),
            StyleCategory::Border => BorderSettings::schema_paths("", &mut out),
            StyleCategory::Transform => TransformSettings::schema_paths("", &mut out),
            StyleCategory::Transition => TransitionSettings::schema_paths("", &mut out),
            StyleCategory::Filter => FilterSettings::schema_paths("", &mut out),
            StyleCategory::BackdropFilter => BackdropFilterSettings::schema_paths("", &mut out),
            StyleCategory::BoxShadow => Field::<Vec<BoxShadow>>::schema_paths("", &mut out),
        }
        out
    }

    /// The neutral value of a field, if it has one.
    pub fn neutral(self, field: &str) -> Option<Neutral> {
        use Neutral::{EmptyList, Flag, Number, Text};
        use StyleCategory as C;

        let neutral = match (self, field) {
            (C::Layout, "dimensions.width" | "dimensions.height") => Text("auto"),
            (
                C::Layout,
                "dimensions.minWidth" | "dimensions.minHeight" | "dimensions.maxWidth"
                | "dimensions.maxHeight",
            ) => Text(""),
            (C::Layout, f) if f.starts_with("margin.") || f.starts_with("padding.") => Text("0"),
            (C::Layout, "flexItem.order" | "flexItem.grow") => Number(0.0),
            (C::Layout, "flexItem.shrink") => Number(1.0),
            (C::Layout, "flexItem.basis" | "flexItem.alignSelf") => Text("auto"),

            (C::Typography, "textDecoration") => Text("none"),
            (C::Typography, "textShadow") => EmptyList,

            (C::Background, "type") => Text("none"),

            (C::Border, f) if f.ends_with(".style") && !f.starts_with("radius") => Text("none"),
            (C::Border, f) if f.ends_with(".width") => Number(0.0),
            (
                C::Border,
                "radius.topLeft" | "radius.topRight" | "radius.bottomRight" | "radius.bottomLeft",
            ) => Number(0.0),

            (C::Transform, "translateX" | "translateY" | "translateZ") => Text("0"),
            (C::Transform, "rotateX" | "rotateY" | "rotateZ" | "skewX" | "skewY") => Number(0.0),
            (C::Transform, "scaleX" | "scaleY") => Number(1.0),
            (C::Transform, "perspective") => Text("none"),
            (C::Transform, "origin.x" | "origin.y") => Text("center"),

            (C::Transition, "enabled") => Flag(false),

            (C::BackdropFilter, "enabled") => Flag(false),
            (C::Filter | C::BackdropFilter, "blur" | "grayscale" | "hueRotate" | "invert" | "sepia") => {
                Number(0.0)
            }
            (C::Filter | C::BackdropFilter, "brightness" | "contrast" | "saturate" | "opacity") => {
                Number(100.0)
            }

            (C::BoxShadow, "") => EmptyList,
            _ => return None,
        };
        Some(neutral)
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

impl FromStr for StyleCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleCategory::ALL
            .into_iter()
            .find(|c| c.key() == s || c.css_name() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "style category",
                value: s.to_string(),
                available: StyleCategory::ALL.iter().map(|c| c.key()).collect(),
            })
    }
}

/// A field's identity value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Neutral {
    Number(f64),
    Text(&'static str),
    Flag(bool),
    EmptyList,
}

impl Neutral {
    /// Returns true if the JSON value equals this neutral value.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Neutral::Number(n) => value.as_f64() == Some(*n),
            Neutral::Text(t) => value.as_str() == Some(*t),
            Neutral::Flag(b) => value.as_bool() == Some(*b),
            Neutral::EmptyList => value.as_array().is_some_and(|a| a.is_empty()),
        }
    }
}

/// Returns true if `value` is the neutral value of `category.field`.
///
/// Fields without a neutral value are never neutral.
///
/// # Example
///
/// ```rust
/// use stylecast::schema::{is_neutral, StyleCategory};
/// use serde_json::json;
///
/// assert!(is_neutral(StyleCategory::Transform, "scaleX", &json!(1)));
/// assert!(!is_neutral(StyleCategory::Transform, "scaleX", &json!(1.5)));
/// assert!(is_neutral(StyleCategory::Filter, "brightness", &json!(100)));
/// ```
pub fn is_neutral(category: StyleCategory, field: &str, value: &Value) -> bool {
    category
        .neutral(field)
        .is_some_and(|neutral| neutral.matches(value))
}

/// Typed shortcut for numeric fields.
pub(crate) fn is_neutral_number(category: StyleCategory, field: &str, value: f64) -> bool {
    matches!(category.neutral(field), Some(Neutral::Number(n)) if n == value)
}

/// Typed shortcut for string fields.
pub(crate) fn is_neutral_text(category: StyleCategory, field: &str, value: &str) -> bool {
    matches!(category.neutral(field), Some(Neutral::Text(t)) if t == value)
}

//! Filter, backdrop-filter and box-shadow categories.

use serde::{Deserialize, Serialize};

use super::field::style_record;
use super::shadow::ShadowEntry;
use super::Field;

/// Filter function names in emission order, with their CSS units.
pub const FILTER_FUNCTIONS: [(&str, &str, &str); 9] = [
    ("blur", "blur", "px"),
    ("brightness", "brightness", "%"),
    ("contrast", "contrast", "%"),
    ("grayscale", "grayscale", "%"),
    ("saturate", "saturate", "%"),
    ("hueRotate", "hue-rotate", "deg"),
    ("invert", "invert", "%"),
    ("sepia", "sepia", "%"),
    ("opacity", "opacity", "%"),
];

style_record! {
    /// `filter` functions. Identities: 0 for blur, grayscale, hue-rotate,
    /// invert and sepia; 100 for brightness, contrast, saturate and opacity.
    pub struct FilterSettings {
        blur: Field<f64> => "blur",
        brightness: Field<f64> => "brightness",
        contrast: Field<f64> => "contrast",
        grayscale: Field<f64> => "grayscale",
        saturate: Field<f64> => "saturate",
        hue_rotate: Field<f64> => "hueRotate",
        invert: Field<f64> => "invert",
        sepia: Field<f64> => "sepia",
        opacity: Field<f64> => "opacity",
    }
}

style_record! {
    /// `backdrop-filter` functions, rendered only while `enabled`.
    pub struct BackdropFilterSettings {
        enabled: Field<bool> => "enabled",
        blur: Field<f64> => "blur",
        brightness: Field<f64> => "brightness",
        contrast: Field<f64> => "contrast",
        grayscale: Field<f64> => "grayscale",
        saturate: Field<f64> => "saturate",
        hue_rotate: Field<f64> => "hueRotate",
        invert: Field<f64> => "invert",
        sepia: Field<f64> => "sepia",
        opacity: Field<f64> => "opacity",
    }
}

/// Read access to a filter chain, shared by both filter categories.
pub trait FilterChain {
    /// Values in [`FILTER_FUNCTIONS`] order.
    fn values(&self) -> [&Field<f64>; 9];
}

impl FilterChain for FilterSettings {
    fn values(&self) -> [&Field<f64>; 9] {
        [
            &self.blur,
            &self.brightness,
            &self.contrast,
            &self.grayscale,
            &self.saturate,
            &self.hue_rotate,
            &self.invert,
            &self.sepia,
            &self.opacity,
        ]
    }
}

impl FilterChain for BackdropFilterSettings {
    fn values(&self) -> [&Field<f64>; 9] {
        [
            &self.blur,
            &self.brightness,
            &self.contrast,
            &self.grayscale,
            &self.saturate,
            &self.hue_rotate,
            &self.invert,
            &self.sepia,
            &self.opacity,
        ]
    }
}

/// One `box-shadow` layer. Offsets, blur and spread are in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxShadow {
    /// Stable identity for list editing; never consulted by the cascade.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub inset: bool,
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
}

impl Default for BoxShadow {
    fn default() -> Self {
        Self {
            id: String::new(),
            inset: false,
            x: 0.0,
            y: 2.0,
            blur: 4.0,
            spread: 0.0,
            color: "rgba(0, 0, 0, 0.1)".to_string(),
        }
    }
}

impl ShadowEntry for BoxShadow {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

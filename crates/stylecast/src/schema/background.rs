//! Background category.
//!
//! The `type` discriminant decides which of the sub-records is rendered;
//! the others may still be stored so switching back and forth in an editor
//! does not lose settings.

use serde::{Deserialize, Serialize};

use super::field::style_record;
use super::Field;

/// Which kind of background is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    None,
    Color,
    Gradient,
    Image,
}

/// Gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

style_record! {
    pub struct BackgroundSettings {
        kind: Field<BackgroundKind> => "type",
        color: Field<String> => "color",
        gradient: GradientSettings => "gradient",
        image: ImageSettings => "image",
    }
}

style_record! {
    /// Linear angles default to 180deg; radial shapes default to `circle`.
    pub struct GradientSettings {
        kind: Field<GradientKind> => "type",
        angle: Field<f64> => "angle",
        shape: Field<String> => "shape",
        /// Radial center, e.g. `center` or `30% 40%`.
        position: Field<String> => "position",
        stops: Field<Vec<GradientStop>> => "stops",
    }
}

/// A color stop; `position` is a percentage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientStop {
    pub color: String,
    pub position: f64,
}

impl GradientStop {
    pub fn new(color: &str, position: f64) -> Self {
        Self {
            color: color.to_string(),
            position,
        }
    }
}

style_record! {
    /// Image backgrounds. `size` and `position` accept named presets or
    /// `custom`, in which case the explicit coordinates are used.
    pub struct ImageSettings {
        url: Field<String> => "url",
        /// `cover`, `contain`, `auto` or `custom`.
        size: Field<String> => "size",
        custom_width: Field<String> => "customWidth",
        custom_height: Field<String> => "customHeight",
        /// `center`, `top`, `top-left`, ... or `custom`.
        position: Field<String> => "position",
        position_x: Field<String> => "positionX",
        position_y: Field<String> => "positionY",
        repeat: Field<String> => "repeat",
        attachment: Field<String> => "attachment",
    }
}

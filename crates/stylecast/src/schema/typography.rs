//! Typography category.

use serde::{Deserialize, Serialize};

use super::field::style_record;
use super::shadow::ShadowEntry;
use super::Field;

style_record! {
    /// Font and text settings.
    pub struct TypographySettings {
        font_family: Field<String> => "fontFamily",
        font_size: Field<String> => "fontSize",
        font_weight: Field<String> => "fontWeight",
        font_style: Field<String> => "fontStyle",
        line_height: Field<String> => "lineHeight",
        letter_spacing: Field<String> => "letterSpacing",
        text_align: Field<String> => "textAlign",
        text_transform: Field<String> => "textTransform",
        white_space: Field<String> => "whiteSpace",
        color: Field<String> => "color",
        /// `none`, `underline`, `overline` or `line-through`.
        decoration: Field<String> => "textDecoration",
        decoration_style: Field<String> => "textDecorationStyle",
        decoration_color: Field<String> => "textDecorationColor",
        /// Replaced wholesale by the highest tier that defines it.
        text_shadow: Field<Vec<TextShadow>> => "textShadow",
    }
}

/// One `text-shadow` layer. Offsets and blur are in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextShadow {
    /// Stable identity for list editing; never consulted by the cascade.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub color: String,
}

impl Default for TextShadow {
    fn default() -> Self {
        Self {
            id: String::new(),
            x: 0.0,
            y: 1.0,
            blur: 2.0,
            color: "rgba(0, 0, 0, 0.25)".to_string(),
        }
    }
}

impl ShadowEntry for TextShadow {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

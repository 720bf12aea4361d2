//! Typography declarations.

use super::format::px;
use super::CssProperties;
use crate::schema::{is_neutral_text, StyleCategory, TextShadow, TypographySettings};

pub(crate) fn write(typography: &TypographySettings, out: &mut CssProperties) {
    for (property, field) in [
        ("font-family", &typography.font_family),
        ("font-size", &typography.font_size),
        ("font-weight", &typography.font_weight),
        ("font-style", &typography.font_style),
        ("line-height", &typography.line_height),
        ("letter-spacing", &typography.letter_spacing),
        ("text-align", &typography.text_align),
        ("text-transform", &typography.text_transform),
        ("white-space", &typography.white_space),
        ("color", &typography.color),
    ] {
        if let Some(value) = field.non_empty() {
            out.insert(property, value);
        }
    }

    if let Some(decoration) = typography.decoration.non_empty() {
        if !is_neutral_text(StyleCategory::Typography, "textDecoration", decoration) {
            let parts: Vec<&str> = [
                Some(decoration),
                typography.decoration_style.non_empty(),
                typography.decoration_color.non_empty(),
            ]
            .into_iter()
            .flatten()
            .collect();
            out.insert("text-decoration", parts.join(" "));
        }
    }

    if let Some(shadows) = typography.text_shadow.value() {
        if !shadows.is_empty() {
            let value = shadows.iter().map(text_shadow).collect::<Vec<_>>().join(", ");
            out.insert("text-shadow", value);
        }
    }
}

fn text_shadow(shadow: &TextShadow) -> String {
    format!(
        "{} {} {} {}",
        px(shadow.x),
        px(shadow.y),
        px(shadow.blur),
        shadow.color
    )
}

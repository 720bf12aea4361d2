//! Border declarations.

use super::format::px;
use super::CssProperties;
use crate::schema::{is_neutral_number, BorderRadius, BorderSettings, StyleCategory};

pub(crate) fn write(border: &BorderSettings, out: &mut CssProperties) {
    for (side, settings) in border.sides() {
        let Some(style) = settings.style.non_empty() else {
            continue;
        };
        if style == "none" {
            continue;
        }
        let width = settings.width.value_or(0.0);
        let color = settings.color.non_empty().unwrap_or("currentcolor");
        out.insert(
            format!("border-{}", side),
            format!("{} {} {}", px(width), style, color),
        );
    }

    if let Some(radius) = radius(&border.radius) {
        out.insert("border-radius", radius);
    }
}

/// A single value when linked (driven by the top-left corner), otherwise
/// the four corners clockwise from top-left. Omitted when every emitted
/// corner is zero.
fn radius(radius: &BorderRadius) -> Option<String> {
    let corners = [
        ("radius.topLeft", &radius.top_left),
        ("radius.topRight", &radius.top_right),
        ("radius.bottomRight", &radius.bottom_right),
        ("radius.bottomLeft", &radius.bottom_left),
    ];
    let linked = radius.linked.value_or(true);
    let used = if linked { &corners[..1] } else { &corners[..] };

    if used.iter().all(|(key, field)| {
        field
            .value()
            .map_or(true, |&v| is_neutral_number(StyleCategory::Border, key, v))
    }) {
        return None;
    }

    let value = used
        .iter()
        .map(|(_, field)| px(field.value_or(0.0)))
        .collect::<Vec<_>>()
        .join(" ");
    Some(value)
}

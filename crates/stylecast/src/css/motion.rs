//! Transform and transition declarations.

use super::format::{number, with_unit};
use super::CssProperties;
use crate::schema::{
    is_neutral_number, is_neutral_text, StyleCategory, TransformOrigin, TransformSettings,
    TransitionSettings,
};

const CUSTOM_ORIGIN_FALLBACK: &str = "50%";

pub(crate) fn write_transform(transform: &TransformSettings, out: &mut CssProperties) {
    let mut functions = Vec::new();

    for (name, field) in [
        ("translateX", &transform.translate_x),
        ("translateY", &transform.translate_y),
        ("translateZ", &transform.translate_z),
    ] {
        if let Some(value) = field.non_empty() {
            if !is_neutral_text(StyleCategory::Transform, name, value) {
                functions.push(format!("{}({})", name, value));
            }
        }
    }

    let numeric = [
        ("rotateX", &transform.rotate_x, "deg"),
        ("rotateY", &transform.rotate_y, "deg"),
        ("rotateZ", &transform.rotate_z, "deg"),
        ("scaleX", &transform.scale_x, ""),
        ("scaleY", &transform.scale_y, ""),
        ("skewX", &transform.skew_x, "deg"),
        ("skewY", &transform.skew_y, "deg"),
    ];
    for (name, field, unit) in numeric {
        if let Some(&value) = field.value() {
            if !is_neutral_number(StyleCategory::Transform, name, value) {
                functions.push(format!("{}({})", name, with_unit(value, unit)));
            }
        }
    }

    if !functions.is_empty() {
        out.insert("transform", functions.join(" "));
    }

    if let Some(perspective) = transform.perspective.non_empty() {
        if !is_neutral_text(StyleCategory::Transform, "perspective", perspective) {
            out.insert("perspective", perspective);
        }
    }

    if let Some(origin) = origin(&transform.origin) {
        out.insert("transform-origin", origin);
    }
}

/// `None` when both axes are at the default `center`.
fn origin(origin: &TransformOrigin) -> Option<String> {
    let x = origin.x.non_empty().unwrap_or("center");
    let y = origin.y.non_empty().unwrap_or("center");
    if is_neutral_text(StyleCategory::Transform, "origin.x", x)
        && is_neutral_text(StyleCategory::Transform, "origin.y", y)
    {
        return None;
    }
    let x = match x {
        "custom" => origin.custom_x.non_empty().unwrap_or(CUSTOM_ORIGIN_FALLBACK),
        preset => preset,
    };
    let y = match y {
        "custom" => origin.custom_y.non_empty().unwrap_or(CUSTOM_ORIGIN_FALLBACK),
        preset => preset,
    };
    Some(format!("{} {}", x, y))
}

/// `<property> <duration>ms <timing> <delay>ms`, only while enabled.
pub(crate) fn write_transition(transition: &TransitionSettings, out: &mut CssProperties) {
    if transition.enabled.value() != Some(&true) {
        return;
    }

    let property = match transition.property.non_empty() {
        Some("custom") => transition
            .custom_property
            .non_empty()
            .unwrap_or(TransitionSettings::DEFAULT_PROPERTY),
        Some(property) => property,
        None => TransitionSettings::DEFAULT_PROPERTY,
    };
    let duration = transition
        .duration
        .value_or(TransitionSettings::DEFAULT_DURATION_MS);
    let timing = match transition.timing.non_empty() {
        Some("cubic-bezier") => {
            let [a, b, c, d] = transition
                .cubic_bezier
                .value_or(TransitionSettings::DEFAULT_CUBIC_BEZIER);
            format!(
                "cubic-bezier({}, {}, {}, {})",
                number(a),
                number(b),
                number(c),
                number(d)
            )
        }
        Some(timing) => timing.to_string(),
        None => TransitionSettings::DEFAULT_TIMING.to_string(),
    };
    let delay = transition.delay.value_or(0.0);

    out.insert(
        "transition",
        format!(
            "{} {} {} {}",
            property,
            with_unit(duration, "ms"),
            timing,
            with_unit(delay, "ms")
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::StyleBundle;
    use serde_json::json;

    fn bundle(value: serde_json::Value) -> StyleBundle {
        StyleBundle::from_value(&value).unwrap()
    }

    fn transform(value: serde_json::Value) -> CssProperties {
        let mut out = CssProperties::new();
        write_transform(&bundle(json!({ "transform": value })).transform, &mut out);
        out
    }

    fn transition(value: serde_json::Value) -> CssProperties {
        let mut out = CssProperties::new();
        write_transition(&bundle(json!({ "transition": value })).transition, &mut out);
        out
    }

    #[test]
    fn test_transform_order_and_omission() {
        let out = transform(json!({
            "scaleX": 1.5, "rotateZ": 45, "translateX": "10px",
            "translateY": "0", "scaleY": 1, "skewX": 0
        }));
        assert_eq!(
            out.get("transform"),
            Some("translateX(10px) rotateZ(45deg) scaleX(1.5)")
        );
    }

    #[test]
    fn test_neutral_transform_emits_nothing() {
        let mut out = CssProperties::new();
        write_transform(&StyleBundle::defaults().transform, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_perspective_and_origin() {
        let out = transform(json!({
            "perspective": "800px",
            "origin": {"x": "left", "y": "custom", "customY": "30%"}
        }));
        assert_eq!(out.get("perspective"), Some("800px"));
        assert_eq!(out.get("transform-origin"), Some("left 30%"));

        let out = transform(json!({"origin": {"x": "custom"}}));
        assert_eq!(out.get("transform-origin"), Some("50% center"));
    }

    #[test]
    fn test_disabled_transition_emits_nothing() {
        assert!(transition(json!({"enabled": false, "duration": 200})).is_empty());
        assert!(transition(json!({"duration": 200})).is_empty());
    }

    #[test]
    fn test_transition_defaults() {
        let out = transition(json!({"enabled": true}));
        assert_eq!(out.get("transition"), Some("all 300ms ease 0ms"));
    }

    #[test]
    fn test_transition_custom_property_and_cubic_bezier() {
        let out = transition(json!({
            "enabled": true,
            "property": "custom",
            "customProperty": "opacity",
            "duration": 150,
            "timing": "cubic-bezier",
            "cubicBezier": [0.4, 0, 0.2, 1],
            "delay": 50
        }));
        assert_eq!(
            out.get("transition"),
            Some("opacity 150ms cubic-bezier(0.4, 0, 0.2, 1) 50ms")
        );
    }
}

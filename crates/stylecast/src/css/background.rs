//! Background declarations, dispatched on the background `type`.

use super::format::with_unit;
use super::CssProperties;
use crate::schema::{
    BackgroundKind, BackgroundSettings, GradientKind, GradientSettings, GradientStop,
    ImageSettings,
};

const DEFAULT_LINEAR_ANGLE: f64 = 180.0;
const DEFAULT_RADIAL_SHAPE: &str = "circle";
const CUSTOM_FALLBACK_POSITION: &str = "50%";
const CUSTOM_FALLBACK_SIZE: &str = "auto";

pub(crate) fn write(background: &BackgroundSettings, out: &mut CssProperties) {
    match background.kind.value() {
        None | Some(BackgroundKind::None) => {}
        Some(BackgroundKind::Color) => {
            if let Some(color) = background.color.non_empty() {
                out.insert("background-color", color);
            }
        }
        Some(BackgroundKind::Gradient) => {
            if let Some(gradient) = gradient(&background.gradient) {
                out.insert("background-image", gradient);
            }
        }
        Some(BackgroundKind::Image) => image(&background.image, out),
    }
}

fn gradient(settings: &GradientSettings) -> Option<String> {
    let mut stops: Vec<&GradientStop> = settings.stops.value()?.iter().collect();
    if stops.is_empty() {
        return None;
    }
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    let stops = stops
        .iter()
        .map(|stop| format!("{} {}", stop.color, with_unit(stop.position, "%")))
        .collect::<Vec<_>>()
        .join(", ");

    let value = match settings.kind.value().copied().unwrap_or_default() {
        GradientKind::Linear => {
            let angle = settings.angle.value_or(DEFAULT_LINEAR_ANGLE);
            format!("linear-gradient({}, {})", with_unit(angle, "deg"), stops)
        }
        GradientKind::Radial => {
            let shape = settings.shape.non_empty().unwrap_or(DEFAULT_RADIAL_SHAPE);
            match settings.position.non_empty() {
                Some(position) => format!("radial-gradient({} at {}, {})", shape, position, stops),
                None => format!("radial-gradient({}, {})", shape, stops),
            }
        }
    };
    Some(value)
}

fn image(settings: &ImageSettings, out: &mut CssProperties) {
    let Some(url) = settings.url.non_empty() else {
        return;
    };
    out.insert("background-image", format!("url(\"{}\")", url));

    match settings.size.non_empty() {
        Some("custom") => {
            let width = settings.custom_width.non_empty().unwrap_or(CUSTOM_FALLBACK_SIZE);
            let height = settings.custom_height.non_empty().unwrap_or(CUSTOM_FALLBACK_SIZE);
            out.insert("background-size", format!("{} {}", width, height));
        }
        Some(preset) => out.insert("background-size", preset),
        None => {}
    }

    match settings.position.non_empty() {
        Some("custom") => {
            let x = settings.position_x.non_empty().unwrap_or(CUSTOM_FALLBACK_POSITION);
            let y = settings.position_y.non_empty().unwrap_or(CUSTOM_FALLBACK_POSITION);
            out.insert("background-position", format!("{} {}", x, y));
        }
        // Presets are stored dash-joined (`top-left`)
        Some(preset) => out.insert("background-position", preset.replace('-', " ")),
        None => {}
    }

    if let Some(repeat) = settings.repeat.non_empty() {
        out.insert("background-repeat", repeat);
    }
    if let Some(attachment) = settings.attachment.non_empty() {
        out.insert("background-attachment", attachment);
    }
}

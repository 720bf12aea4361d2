//! Transform and transition categories.

use super::field::style_record;
use super::Field;

style_record! {
    /// 2D/3D transform functions. Translations carry their unit
    /// (`'10px'`); rotations and skews are degrees; scales are factors.
    pub struct TransformSettings {
        translate_x: Field<String> => "translateX",
        translate_y: Field<String> => "translateY",
        translate_z: Field<String> => "translateZ",
        rotate_x: Field<f64> => "rotateX",
        rotate_y: Field<f64> => "rotateY",
        rotate_z: Field<f64> => "rotateZ",
        scale_x: Field<f64> => "scaleX",
        scale_y: Field<f64> => "scaleY",
        skew_x: Field<f64> => "skewX",
        skew_y: Field<f64> => "skewY",
        /// Separate `perspective` property; `none` is the placeholder.
        perspective: Field<String> => "perspective",
        origin: TransformOrigin => "origin",
    }
}

style_record! {
    /// Each axis is a keyword (`left`, `center`, `top`, ...) or `custom`,
    /// in which case the matching custom coordinate is used.
    pub struct TransformOrigin {
        x: Field<String> => "x",
        y: Field<String> => "y",
        custom_x: Field<String> => "customX",
        custom_y: Field<String> => "customY",
    }
}

style_record! {
    /// A single transition. Durations and delays are milliseconds.
    pub struct TransitionSettings {
        enabled: Field<bool> => "enabled",
        /// A CSS property name, `all`, or `custom`.
        property: Field<String> => "property",
        custom_property: Field<String> => "customProperty",
        duration: Field<f64> => "duration",
        /// A timing keyword or `cubic-bezier`.
        timing: Field<String> => "timing",
        cubic_bezier: Field<[f64; 4]> => "cubicBezier",
        delay: Field<f64> => "delay",
    }
}

impl TransitionSettings {
    pub const DEFAULT_PROPERTY: &'static str = "all";
    pub const DEFAULT_DURATION_MS: f64 = 300.0;
    pub const DEFAULT_TIMING: &'static str = "ease";
    pub const DEFAULT_CUBIC_BEZIER: [f64; 4] = [0.25, 0.1, 0.25, 1.0];
}

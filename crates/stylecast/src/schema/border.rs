//! Border category.

use super::field::style_record;
use super::Field;

style_record! {
    pub struct BorderSettings {
        top: BorderSide => "top",
        right: BorderSide => "right",
        bottom: BorderSide => "bottom",
        left: BorderSide => "left",
        radius: BorderRadius => "radius",
    }
}

style_record! {
    /// One border edge; rendered only when `style` is not `none`.
    pub struct BorderSide {
        /// Pixels.
        width: Field<f64> => "width",
        style: Field<String> => "style",
        color: Field<String> => "color",
    }
}

style_record! {
    /// Corner radii in pixels. When `linked`, `topLeft` drives all corners.
    pub struct BorderRadius {
        linked: Field<bool> => "linked",
        top_left: Field<f64> => "topLeft",
        top_right: Field<f64> => "topRight",
        bottom_right: Field<f64> => "bottomRight",
        bottom_left: Field<f64> => "bottomLeft",
    }
}

impl BorderSettings {
    /// The four edges paired with their CSS side names, in emission order.
    pub fn sides(&self) -> [(&'static str, &BorderSide); 4] {
        [
            ("top", &self.top),
            ("right", &self.right),
            ("bottom", &self.bottom),
            ("left", &self.left),
        ]
    }
}

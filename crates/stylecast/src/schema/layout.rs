//! Layout category: display, positioning, box model and flex/grid settings.

use super::field::style_record;
use super::Field;

style_record! {
    /// Box-model and positioning settings.
    pub struct LayoutSettings {
        /// CSS `display` keyword (`block`, `flex`, `inline-flex`, `grid`, ...).
        display: Field<String> => "display",
        position: PositionSettings => "position",
        dimensions: Dimensions => "dimensions",
        margin: Spacing => "margin",
        padding: Spacing => "padding",
        overflow: Field<String> => "overflow",
        overflow_x: Field<String> => "overflowX",
        overflow_y: Field<String> => "overflowY",
        /// Container fields, only emitted for flex displays.
        flex: FlexContainer => "flex",
        /// Item fields, emitted whenever they differ from their neutral value.
        flex_item: FlexItem => "flexItem",
        /// Container fields, only emitted for grid displays.
        grid: GridContainer => "grid",
    }
}

style_record! {
    /// `position` and its offsets.
    pub struct PositionSettings {
        /// `static`, `relative`, `absolute`, `fixed` or `sticky`.
        kind: Field<String> => "type",
        top: Field<String> => "top",
        right: Field<String> => "right",
        bottom: Field<String> => "bottom",
        left: Field<String> => "left",
        z_index: Field<i32> => "zIndex",
    }
}

style_record! {
    /// Width/height and their bounds. `auto` is the placeholder for width
    /// and height; bounds are emitted only when non-empty.
    pub struct Dimensions {
        width: Field<String> => "width",
        height: Field<String> => "height",
        min_width: Field<String> => "minWidth",
        min_height: Field<String> => "minHeight",
        max_width: Field<String> => "maxWidth",
        max_height: Field<String> => "maxHeight",
    }
}

style_record! {
    /// Four-sided spacing used by margin and padding. Values carry their unit.
    pub struct Spacing {
        top: Field<String> => "top",
        right: Field<String> => "right",
        bottom: Field<String> => "bottom",
        left: Field<String> => "left",
    }
}

impl Spacing {
    /// Builds a spacing record with all four sides set.
    pub fn all(value: &str) -> Self {
        Self {
            top: value.into(),
            right: value.into(),
            bottom: value.into(),
            left: value.into(),
        }
    }
}

style_record! {
    pub struct FlexContainer {
        direction: Field<String> => "direction",
        wrap: Field<String> => "wrap",
        justify_content: Field<String> => "justifyContent",
        align_items: Field<String> => "alignItems",
        align_content: Field<String> => "alignContent",
        gap: Field<String> => "gap",
        row_gap: Field<String> => "rowGap",
        column_gap: Field<String> => "columnGap",
    }
}

style_record! {
    /// Flex item settings. Neutral values: order 0, grow 0, shrink 1,
    /// basis `auto`, align-self `auto`.
    pub struct FlexItem {
        order: Field<i32> => "order",
        grow: Field<f64> => "grow",
        shrink: Field<f64> => "shrink",
        basis: Field<String> => "basis",
        align_self: Field<String> => "alignSelf",
    }
}

style_record! {
    pub struct GridContainer {
        template_columns: Field<String> => "templateColumns",
        template_rows: Field<String> => "templateRows",
        auto_flow: Field<String> => "autoFlow",
        gap: Field<String> => "gap",
    }
}

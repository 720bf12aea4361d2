//! Layout declarations.

use super::format::number;
use super::CssProperties;
use crate::schema::{
    is_neutral_number, is_neutral_text, Field, FlexContainer, FlexItem, GridContainer,
    LayoutSettings, Spacing, StyleCategory,
};

pub(crate) fn write(layout: &LayoutSettings, out: &mut CssProperties) {
    let display = layout.display.non_empty();
    if let Some(display) = display {
        out.insert("display", display);
    }

    let position = &layout.position;
    optional(out, "position", &position.kind);
    optional(out, "top", &position.top);
    optional(out, "right", &position.right);
    optional(out, "bottom", &position.bottom);
    optional(out, "left", &position.left);
    if let Some(z) = position.z_index.value() {
        out.insert("z-index", z.to_string());
    }

    let dims = &layout.dimensions;
    for (property, field, key) in [
        ("width", &dims.width, "dimensions.width"),
        ("height", &dims.height, "dimensions.height"),
    ] {
        if let Some(value) = field.non_empty() {
            if !is_neutral_text(StyleCategory::Layout, key, value) {
                out.insert(property, value);
            }
        }
    }
    optional(out, "min-width", &dims.min_width);
    optional(out, "min-height", &dims.min_height);
    optional(out, "max-width", &dims.max_width);
    optional(out, "max-height", &dims.max_height);

    spacing(out, "margin", &layout.margin);
    spacing(out, "padding", &layout.padding);

    optional(out, "overflow", &layout.overflow);
    optional(out, "overflow-x", &layout.overflow_x);
    optional(out, "overflow-y", &layout.overflow_y);

    match display {
        Some("flex" | "inline-flex") => flex_container(out, &layout.flex),
        Some("grid" | "inline-grid") => grid_container(out, &layout.grid),
        _ => {}
    }
    flex_item(out, &layout.flex_item);
}

fn optional(out: &mut CssProperties, property: &str, field: &Field<String>) {
    if let Some(value) = field.non_empty() {
        out.insert(property, value);
    }
}

/// Four-value shorthand; sides without a value contribute `0`.
fn spacing(out: &mut CssProperties, property: &str, spacing: &Spacing) {
    let sides = [&spacing.top, &spacing.right, &spacing.bottom, &spacing.left];
    if sides.iter().all(|side| side.non_empty().is_none()) {
        return;
    }
    let value = sides
        .iter()
        .map(|side| side.non_empty().unwrap_or("0"))
        .collect::<Vec<_>>()
        .join(" ");
    out.insert(property, value);
}

fn flex_container(out: &mut CssProperties, flex: &FlexContainer) {
    optional(out, "flex-direction", &flex.direction);
    optional(out, "flex-wrap", &flex.wrap);
    optional(out, "justify-content", &flex.justify_content);
    optional(out, "align-items", &flex.align_items);
    optional(out, "align-content", &flex.align_content);
    optional(out, "gap", &flex.gap);
    optional(out, "row-gap", &flex.row_gap);
    optional(out, "column-gap", &flex.column_gap);
}

fn grid_container(out: &mut CssProperties, grid: &GridContainer) {
    optional(out, "grid-template-columns", &grid.template_columns);
    optional(out, "grid-template-rows", &grid.template_rows);
    optional(out, "grid-auto-flow", &grid.auto_flow);
    optional(out, "gap", &grid.gap);
}

/// Flex item fields are emitted only when they differ from their neutral.
fn flex_item(out: &mut CssProperties, item: &FlexItem) {
    if let Some(&order) = item.order.value() {
        if !is_neutral_number(StyleCategory::Layout, "flexItem.order", f64::from(order)) {
            out.insert("order", order.to_string());
        }
    }
    for (property, field, key) in [
        ("flex-grow", &item.grow, "flexItem.grow"),
        ("flex-shrink", &item.shrink, "flexItem.shrink"),
    ] {
        if let Some(&value) = field.value() {
            if !is_neutral_number(StyleCategory::Layout, key, value) {
                out.insert(property, number(value));
            }
        }
    }
    for (property, field, key) in [
        ("flex-basis", &item.basis, "flexItem.basis"),
        ("align-self", &item.align_self, "flexItem.alignSelf"),
    ] {
        if let Some(value) = field.non_empty() {
            if !is_neutral_text(StyleCategory::Layout, key, value) {
                out.insert(property, value);
            }
        }
    }
}

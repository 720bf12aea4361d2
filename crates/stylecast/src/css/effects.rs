//! Filter, backdrop-filter and box-shadow declarations.

use super::format::{px, with_unit};
use super::CssProperties;
use crate::schema::{
    is_neutral_number, BackdropFilterSettings, BoxShadow, FilterChain, FilterSettings,
    StyleCategory, FILTER_FUNCTIONS,
};

pub(crate) fn write_filter(filter: &FilterSettings, out: &mut CssProperties) {
    if let Some(chain) = chain(StyleCategory::Filter, filter) {
        out.insert("filter", chain);
    }
}

/// Emitted only while enabled, duplicated onto the `-webkit-` alias.
pub(crate) fn write_backdrop_filter(backdrop: &BackdropFilterSettings, out: &mut CssProperties) {
    if backdrop.enabled.value() != Some(&true) {
        return;
    }
    if let Some(chain) = chain(StyleCategory::BackdropFilter, backdrop) {
        out.insert("backdrop-filter", chain.clone());
        out.insert("-webkit-backdrop-filter", chain);
    }
}

fn chain(category: StyleCategory, filters: &impl FilterChain) -> Option<String> {
    let functions: Vec<String> = FILTER_FUNCTIONS
        .iter()
        .zip(filters.values())
        .filter_map(|(&(key, name, unit), field)| {
            let value = *field.value()?;
            if is_neutral_number(category, key, value) {
                None
            } else {
                Some(format!("{}({})", name, with_unit(value, unit)))
            }
        })
        .collect();
    if functions.is_empty() {
        None
    } else {
        Some(functions.join(" "))
    }
}

pub(crate) fn write_box_shadow(shadows: &[BoxShadow], out: &mut CssProperties) {
    if shadows.is_empty() {
        return;
    }
    let value = shadows.iter().map(box_shadow).collect::<Vec<_>>().join(", ");
    out.insert("box-shadow", value);
}

fn box_shadow(shadow: &BoxShadow) -> String {
    format!(
        "{}{} {} {} {} {}",
        if shadow.inset { "inset " } else { "" },
        px(shadow.x),
        px(shadow.y),
        px(shadow.blur),
        px(shadow.spread),
        shadow.color
    )
}

//! The style bundle: one sparse record per category plus overlay axes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::axes::{Breakpoint, InteractionState};
use super::background::{BackgroundKind, BackgroundSettings};
use super::border::{BorderRadius, BorderSettings, BorderSide};
use super::effects::{BackdropFilterSettings, BoxShadow, FilterSettings};
use super::error::BundleError;
use super::field::join_path;
use super::layout::{Dimensions, FlexItem, LayoutSettings, PositionSettings, Spacing};
use super::motion::{TransformOrigin, TransformSettings, TransitionSettings};
use super::typography::TypographySettings;
use super::validate::decode;
use super::{Field, Presence, StyleNode};

/// A sparse, multi-category record of visual properties for one element,
/// class, or theme.
///
/// Besides the category records, a bundle carries the two overlay axes:
/// `responsive` (per non-base breakpoint) and `states` (per non-default
/// interaction state). Overlay bundles are themselves sparse and may not
/// carry further overlays.
///
/// # Example
///
/// ```rust
/// use stylecast::schema::{StyleBundle, Breakpoint};
/// use serde_json::json;
///
/// let mut bundle = StyleBundle::default();
/// bundle.set_path("layout.margin.top", json!("20px")).unwrap();
/// bundle.set_path("responsive.mobile.layout.margin.top", json!("8px")).unwrap();
///
/// assert!(bundle.responsive.contains_key(&Breakpoint::Mobile));
/// assert_eq!(bundle.get_path("layout.margin.top"), Some(json!("20px")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct StyleBundle {
    #[serde(skip_serializing_if = "StyleNode::is_empty")]
    pub layout: LayoutSettings,
    #[serde(skip_serializing_if = "StyleNode::is_empty")]
    pub typography: TypographySettings,
    #[serde(skip_serializing_if = "StyleNode::is_empty")]
    pub background: BackgroundSettings,
    #[serde(skip_serializing_if = "StyleNode::is_empty")]
    pub border: BorderSettings,
    #[serde(skip_serializing_if = "StyleNode::is_empty")]
    pub transform: TransformSettings,
    #[serde(skip_serializing_if = "StyleNode::is_empty")]
    pub transition: TransitionSettings,
    #[serde(skip_serializing_if = "StyleNode::is_empty")]
    pub filter: FilterSettings,
    #[serde(skip_serializing_if = "StyleNode::is_empty")]
    pub backdrop_filter: BackdropFilterSettings,
    #[serde(skip_serializing_if = "StyleNode::is_empty")]
    pub box_shadow: Field<Vec<BoxShadow>>,
    /// Overrides for the active non-base breakpoint.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub responsive: BTreeMap<Breakpoint, StyleBundle>,
    /// Overlays for the active non-default interaction state.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub states: BTreeMap<InteractionState, StyleBundle>,
}

impl StyleNode for StyleBundle {
    /// Overlays the category records only; overlay axes are never merged.
    fn overlay(&mut self, upper: &Self) {
        self.layout.overlay(&upper.layout);
        self.typography.overlay(&upper.typography);
        self.background.overlay(&upper.background);
        self.border.overlay(&upper.border);
        self.transform.overlay(&upper.transform);
        self.transition.overlay(&upper.transition);
        self.filter.overlay(&upper.filter);
        self.backdrop_filter.overlay(&upper.backdrop_filter);
        self.box_shadow.overlay(&upper.box_shadow);
    }

    fn visit(&self, prefix: &str, visitor: &mut dyn FnMut(&str, Presence)) {
        self.layout.visit(&join_path(prefix, "layout"), visitor);
        self.typography.visit(&join_path(prefix, "typography"), visitor);
        self.background.visit(&join_path(prefix, "background"), visitor);
        self.border.visit(&join_path(prefix, "border"), visitor);
        self.transform.visit(&join_path(prefix, "transform"), visitor);
        self.transition.visit(&join_path(prefix, "transition"), visitor);
        self.filter.visit(&join_path(prefix, "filter"), visitor);
        self.backdrop_filter.visit(&join_path(prefix, "backdropFilter"), visitor);
        self.box_shadow.visit(&join_path(prefix, "boxShadow"), visitor);
    }

    /// True when no category leaf is present (overlays are not considered).
    fn is_empty(&self) -> bool {
        self.layout.is_empty()
            && self.typography.is_empty()
            && self.background.is_empty()
            && self.border.is_empty()
            && self.transform.is_empty()
            && self.transition.is_empty()
            && self.filter.is_empty()
            && self.backdrop_filter.is_empty()
            && self.box_shadow.is_empty()
    }

    fn schema_paths(prefix: &str, out: &mut Vec<String>) {
        LayoutSettings::schema_paths(&join_path(prefix, "layout"), out);
        TypographySettings::schema_paths(&join_path(prefix, "typography"), out);
        BackgroundSettings::schema_paths(&join_path(prefix, "background"), out);
        BorderSettings::schema_paths(&join_path(prefix, "border"), out);
        TransformSettings::schema_paths(&join_path(prefix, "transform"), out);
        TransitionSettings::schema_paths(&join_path(prefix, "transition"), out);
        FilterSettings::schema_paths(&join_path(prefix, "filter"), out);
        BackdropFilterSettings::schema_paths(&join_path(prefix, "backdropFilter"), out);
        Field::<Vec<BoxShadow>>::schema_paths(&join_path(prefix, "boxShadow"), out);
    }
}

impl StyleBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// The Default Constants tier: the bottom of every cascade.
    ///
    /// Holds the identity value of every field that has one, plus the
    /// handful of concrete starting points an element needs (`display:
    /// block`, static positioning, zero spacing).
    pub fn defaults() -> Self {
        let side = BorderSide {
            width: Field::Set(0.0),
            style: "none".into(),
            color: "#000000".into(),
        };

        Self {
            layout: LayoutSettings {
                display: "block".into(),
                position: PositionSettings {
                    kind: "static".into(),
                    ..Default::default()
                },
                dimensions: Dimensions {
                    width: "auto".into(),
                    height: "auto".into(),
                    ..Default::default()
                },
                margin: Spacing::all("0"),
                padding: Spacing::all("0"),
                flex_item: FlexItem {
                    order: Field::Set(0),
                    grow: Field::Set(0.0),
                    shrink: Field::Set(1.0),
                    basis: "auto".into(),
                    align_self: "auto".into(),
                },
                ..Default::default()
            },
            typography: TypographySettings {
                decoration: "none".into(),
                ..Default::default()
            },
            background: BackgroundSettings {
                kind: Field::Set(BackgroundKind::None),
                ..Default::default()
            },
            border: BorderSettings {
                top: side.clone(),
                right: side.clone(),
                bottom: side.clone(),
                left: side,
                radius: BorderRadius {
                    linked: Field::Set(true),
                    top_left: Field::Set(0.0),
                    top_right: Field::Set(0.0),
                    bottom_right: Field::Set(0.0),
                    bottom_left: Field::Set(0.0),
                },
            },
            transform: TransformSettings {
                translate_x: "0".into(),
                translate_y: "0".into(),
                translate_z: "0".into(),
                rotate_x: Field::Set(0.0),
                rotate_y: Field::Set(0.0),
                rotate_z: Field::Set(0.0),
                scale_x: Field::Set(1.0),
                scale_y: Field::Set(1.0),
                skew_x: Field::Set(0.0),
                skew_y: Field::Set(0.0),
                perspective: "none".into(),
                origin: TransformOrigin {
                    x: "center".into(),
                    y: "center".into(),
                    ..Default::default()
                },
            },
            transition: TransitionSettings {
                enabled: Field::Set(false),
                property: TransitionSettings::DEFAULT_PROPERTY.into(),
                duration: Field::Set(TransitionSettings::DEFAULT_DURATION_MS),
                timing: TransitionSettings::DEFAULT_TIMING.into(),
                delay: Field::Set(0.0),
                ..Default::default()
            },
            filter: FilterSettings {
                blur: Field::Set(0.0),
                brightness: Field::Set(100.0),
                contrast: Field::Set(100.0),
                grayscale: Field::Set(0.0),
                saturate: Field::Set(100.0),
                hue_rotate: Field::Set(0.0),
                invert: Field::Set(0.0),
                sepia: Field::Set(0.0),
                opacity: Field::Set(100.0),
            },
            backdrop_filter: BackdropFilterSettings {
                enabled: Field::Set(false),
                blur: Field::Set(0.0),
                brightness: Field::Set(100.0),
                contrast: Field::Set(100.0),
                grayscale: Field::Set(0.0),
                saturate: Field::Set(100.0),
                hue_rotate: Field::Set(0.0),
                invert: Field::Set(0.0),
                sepia: Field::Set(0.0),
                opacity: Field::Set(100.0),
            },
            box_shadow: Field::Absent,
            responsive: BTreeMap::new(),
            states: BTreeMap::new(),
        }
    }

    /// Returns a copy without the overlay axes.
    pub fn base(&self) -> StyleBundle {
        StyleBundle {
            responsive: BTreeMap::new(),
            states: BTreeMap::new(),
            ..self.clone()
        }
    }

    /// The breakpoint override, if any. The base breakpoint never has one.
    pub fn breakpoint_override(&self, breakpoint: Breakpoint) -> Option<&StyleBundle> {
        if breakpoint.is_base() {
            None
        } else {
            self.responsive.get(&breakpoint)
        }
    }

    /// The state overlay, if any. The default state never has one.
    pub fn state_overlay(&self, state: InteractionState) -> Option<&StyleBundle> {
        if state.is_default() {
            None
        } else {
            self.states.get(&state)
        }
    }

    /// Every present leaf path (set or unset) of the category records.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.visit("", &mut |path, _| paths.push(path.to_string()));
        paths
    }

    /// Decodes and validates a bundle from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::Malformed`] with the offending path if a field
    /// has the wrong shape, a key is unknown, or the overlays are invalid.
    pub fn from_value(value: &Value) -> Result<Self, BundleError> {
        let bundle: StyleBundle = decode(value)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Encodes the bundle as a JSON value.
    pub fn to_value(&self) -> Result<Value, BundleError> {
        serde_json::to_value(self).map_err(|e| BundleError::Encoding {
            message: e.to_string(),
        })
    }

    /// Checks the structural rules serde cannot express: overlays may not
    /// target the base breakpoint or default state, and may not nest.
    pub fn validate(&self) -> Result<(), BundleError> {
        for (breakpoint, overlay) in &self.responsive {
            let path = format!("responsive.{}", breakpoint);
            if breakpoint.is_base() {
                return Err(BundleError::malformed(
                    path,
                    "the base breakpoint cannot be overridden",
                ));
            }
            overlay.ensure_flat(&path)?;
        }
        for (state, overlay) in &self.states {
            let path = format!("states.{}", state);
            if state.is_default() {
                return Err(BundleError::malformed(
                    path,
                    "the default state cannot carry an overlay",
                ));
            }
            overlay.ensure_flat(&path)?;
        }
        Ok(())
    }

    fn ensure_flat(&self, path: &str) -> Result<(), BundleError> {
        if !self.responsive.is_empty() {
            return Err(BundleError::malformed(
                format!("{}.responsive", path),
                "overlays cannot be nested",
            ));
        }
        if !self.states.is_empty() {
            return Err(BundleError::malformed(
                format!("{}.states", path),
                "overlays cannot be nested",
            ));
        }
        Ok(())
    }

    /// Reads a stored leaf by dotted path.
    ///
    /// Returns `None` when the key is absent and `Some(Value::Null)` when it
    /// holds the unset sentinel.
    pub fn get_path(&self, path: &str) -> Option<Value> {
        let (head, rest) = split_head(path);
        let node = match head {
            "responsive" | "states" => {
                let Some(rest) = rest else {
                    return self.overlays_value(head);
                };
                let (key, rest) = split_head(rest);
                let overlay = if head == "responsive" {
                    self.responsive.get(&key.parse::<Breakpoint>().ok()?)
                } else {
                    self.states.get(&key.parse::<InteractionState>().ok()?)
                }?;
                return match rest {
                    Some(rest) => overlay.get_path(rest),
                    None => overlay.to_value().ok(),
                };
            }
            "layout" => node_value(&self.layout),
            "typography" => node_value(&self.typography),
            "background" => node_value(&self.background),
            "border" => node_value(&self.border),
            "transform" => node_value(&self.transform),
            "transition" => node_value(&self.transition),
            "filter" => node_value(&self.filter),
            "backdropFilter" => node_value(&self.backdrop_filter),
            "boxShadow" => node_value(&self.box_shadow),
            _ => None,
        }?;
        match rest {
            Some(rest) => rest
                .split('.')
                .try_fold(&node, |node, key| node.get(key))
                .cloned(),
            None => Some(node),
        }
    }

    fn overlays_value(&self, axis: &str) -> Option<Value> {
        let value = match axis {
            "responsive" if !self.responsive.is_empty() => serde_json::to_value(&self.responsive),
            "states" if !self.states.is_empty() => serde_json::to_value(&self.states),
            _ => return None,
        };
        value.ok()
    }

    /// Writes a value at a dotted path, validating the result.
    ///
    /// Paths may address overlays (`responsive.mobile.layout.display`,
    /// `states.hover.typography.color`). On error the bundle is unchanged.
    pub fn set_path(&mut self, path: &str, value: Value) -> Result<(), BundleError> {
        self.edit_path(path, Some(value))
    }

    /// Writes the unset sentinel at a dotted path ("fall through here").
    pub fn unset_path(&mut self, path: &str) -> Result<(), BundleError> {
        self.edit_path(path, Some(Value::Null))
    }

    /// Removes a dotted path entirely ("no opinion").
    pub fn clear_path(&mut self, path: &str) -> Result<(), BundleError> {
        self.edit_path(path, None)
    }

    fn edit_path(&mut self, path: &str, value: Option<Value>) -> Result<(), BundleError> {
        let keys: Vec<&str> = path.split('.').collect();
        if keys.iter().any(|k| k.is_empty()) {
            return Err(BundleError::malformed(path, "empty path segment"));
        }
        let Some((leaf, parents)) = keys.split_last() else {
            return Err(BundleError::malformed(path, "empty path"));
        };

        let mut document = self.to_value()?;
        let mut node = &mut document;
        for (depth, key) in parents.iter().enumerate() {
            let object = node.as_object_mut().ok_or_else(|| {
                BundleError::malformed(keys[..depth].join("."), "not a record")
            })?;
            node = object
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(serde_json::Map::new()));
        }
        let object = node
            .as_object_mut()
            .ok_or_else(|| BundleError::malformed(parents.join("."), "not a record"))?;
        match value {
            Some(value) => {
                object.insert(leaf.to_string(), value);
            }
            None => {
                object.remove(*leaf);
            }
        }

        *self = StyleBundle::from_value(&document)?;
        Ok(())
    }
}

fn split_head(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

/// Encodes one category record; absent records read as `None`.
fn node_value<T: StyleNode + Serialize>(node: &T) -> Option<Value> {
    if node.is_empty() {
        None
    } else {
        serde_json::to_value(node).ok()
    }
}

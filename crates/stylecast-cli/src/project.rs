//! Project files: a theme, a class list and one element to render.
//!
//! ```yaml
//! theme:
//!   typography: {fontFamily: Inter, color: "#222"}
//! classes:
//!   - name: card
//!     styling: {layout: {display: flex}}
//! element:
//!   classes: [card]
//!   styling:
//!     responsive:
//!       mobile: {layout: {padding: {top: 8px}}}
//! manual: {}
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use stylecast::registry::{sanitize, ClassRegistry};
use stylecast::store::{self, classes_from_value, Format, StoreError};
use stylecast::{BundleError, StyleBundle};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawProject {
    theme: Option<Value>,
    classes: Option<Value>,
    element: RawElement,
    manual: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawElement {
    classes: Vec<String>,
    styling: Option<Value>,
}

/// A validated project.
#[derive(Debug, Default)]
pub struct Project {
    pub theme: Option<StyleBundle>,
    pub registry: ClassRegistry,
    /// Sanitized, in applied order.
    pub element_classes: Vec<String>,
    pub element: StyleBundle,
    pub manual: Option<StyleBundle>,
}

impl Project {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read project file {}", path.display()))?;
        Self::parse(&text, Format::from_path(path))
            .with_context(|| format!("invalid project file {}", path.display()))
    }

    pub fn parse(text: &str, format: Format) -> Result<Self> {
        let raw: RawProject = serde_json::from_value(store::parse(text, format)?)
            .context("expected top-level keys theme, classes, element and manual")?;

        let registry = match raw.classes {
            Some(value) => classes_from_value(&value).map_err(|e| match e {
                StoreError::Bundle(e) => StoreError::Bundle(e.with_prefix("classes")),
                other => other,
            })?,
            None => ClassRegistry::new(),
        };

        Ok(Self {
            theme: raw.theme.as_ref().map(|v| bundle(v, "theme")).transpose()?,
            registry,
            element_classes: raw.element.classes.iter().map(|c| sanitize(c)).collect(),
            element: match raw.element.styling {
                Some(value) => bundle(&value, "element.styling")?,
                None => StyleBundle::new(),
            },
            manual: raw.manual.as_ref().map(|v| bundle(v, "manual")).transpose()?,
        })
    }
}

fn bundle(value: &Value, prefix: &str) -> Result<StyleBundle, BundleError> {
    StyleBundle::from_value(value).map_err(|e| e.with_prefix(prefix))
}

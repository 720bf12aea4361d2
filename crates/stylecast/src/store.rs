//! Loading and saving bundles and class lists as JSON or YAML text.
//!
//! Both formats share one document model: text is parsed into a
//! [`serde_json::Value`] first and then validated, so the error paths are
//! identical whichever format the caller stores.
//!
//! ```rust
//! use stylecast::store::{load_bundle, save_bundle, Format};
//!
//! let yaml = "layout:\n  margin:\n    top: 20px\n    left: ~\n";
//! let bundle = load_bundle(yaml, Format::Yaml)?;
//! assert!(bundle.layout.margin.left.is_unset());
//!
//! let json = save_bundle(&bundle, Format::Json)?;
//! assert_eq!(json, r#"{"layout":{"margin":{"top":"20px","left":null}}}"#);
//! # Ok::<(), stylecast::store::StoreError>(())
//! ```

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::registry::{ClassDefinition, ClassRegistry, RegistryError};
use crate::schema::{decode, BundleError, StyleBundle};

/// A supported document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    /// Picks the format from a file extension (`.yaml`/`.yml` or JSON).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("JSON"),
            Format::Yaml => f.write_str("YAML"),
        }
    }
}

/// Error returned when loading or saving documents.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The text is not well-formed JSON/YAML.
    #[error("invalid {format} document: {message}")]
    Syntax { format: Format, message: String },

    /// The document does not match the bundle schema.
    #[error(transparent)]
    Bundle(#[from] BundleError),

    /// The class list has naming conflicts.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A value could not be written in the requested format.
    #[error("failed to write {format}: {message}")]
    Encode { format: Format, message: String },
}

/// Parses text into the shared document model.
pub fn parse(text: &str, format: Format) -> Result<Value, StoreError> {
    let parsed: Result<Value, String> = match format {
        Format::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| StoreError::Syntax { format, message })
}

/// Writes any serializable value in the given format.
///
/// JSON output is compact; YAML output is block style.
pub fn render<T: Serialize>(value: &T, format: Format) -> Result<String, StoreError> {
    let rendered: Result<String, String> = match format {
        Format::Json => serde_json::to_string(value).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
    };
    rendered.map_err(|message| StoreError::Encode { format, message })
}

pub fn load_bundle(text: &str, format: Format) -> Result<StyleBundle, StoreError> {
    Ok(StyleBundle::from_value(&parse(text, format)?)?)
}

pub fn save_bundle(bundle: &StyleBundle, format: Format) -> Result<String, StoreError> {
    render(bundle, format)
}

/// Loads a class list (a sequence of class definitions).
pub fn load_classes(text: &str, format: Format) -> Result<ClassRegistry, StoreError> {
    classes_from_value(&parse(text, format)?)
}

pub fn save_classes(registry: &ClassRegistry, format: Format) -> Result<String, StoreError> {
    let definitions: Vec<&ClassDefinition> = registry.iter().collect();
    render(&definitions, format)
}

/// Validates a class list document and builds a registry from it.
///
/// Errors name the offending entry by index, e.g.
/// `[2].styling.layout.margin.top`. Names are re-sanitized and duplicates
/// rejected.
pub fn classes_from_value(value: &Value) -> Result<ClassRegistry, StoreError> {
    let items = value
        .as_array()
        .ok_or_else(|| BundleError::malformed("", "expected a list of class definitions"))?;

    let mut definitions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let prefix = format!("[{}]", index);
        let def: ClassDefinition = decode(item).map_err(|e| e.with_prefix(&prefix))?;
        def.styling
            .validate()
            .map_err(|e| e.with_prefix(&format!("{}.styling", prefix)))?;
        definitions.push(def);
    }
    Ok(ClassRegistry::from_definitions(definitions)?)
}

impl ClassRegistry {
    /// Serializes the registry as a JSON array of definitions.
    pub fn to_json(&self) -> Result<String, StoreError> {
        save_classes(self, Format::Json)
    }

    /// Loads a registry from a JSON array of definitions.
    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        load_classes(text, Format::Json)
    }
}

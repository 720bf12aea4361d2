//! Class definitions and the edit payloads that create or patch them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::schema::{StyleBundle, UnknownVariant};

/// Organizational tag shown by class pickers. Has no effect on the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassCategory {
    Layout,
    Typography,
    Color,
    Effects,
    Utility,
    #[default]
    Custom,
}

impl ClassCategory {
    pub const ALL: [ClassCategory; 6] = [
        ClassCategory::Layout,
        ClassCategory::Typography,
        ClassCategory::Color,
        ClassCategory::Effects,
        ClassCategory::Utility,
        ClassCategory::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ClassCategory::Layout => "layout",
            ClassCategory::Typography => "typography",
            ClassCategory::Color => "color",
            ClassCategory::Effects => "effects",
            ClassCategory::Utility => "utility",
            ClassCategory::Custom => "custom",
        }
    }
}

impl fmt::Display for ClassCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "class category",
                value: s.to_string(),
                available: ClassCategory::ALL.iter().map(|c| c.as_str()).collect(),
            })
    }
}

/// A named, reusable style bundle.
///
/// Elements reference classes by `name` only. Timestamps are unix epoch
/// milliseconds and are maintained by the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ClassDefinition {
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub styling: StyleBundle,
    pub category: ClassCategory,
    pub created_at: u64,
    pub updated_at: u64,
}

impl ClassDefinition {
    /// Creates a definition with the given (raw) name and styling.
    ///
    /// The name is sanitized and the timestamps stamped when the definition
    /// is handed to [`ClassRegistry::create`](super::ClassRegistry::create).
    pub fn new(name: impl Into<String>, styling: StyleBundle) -> Self {
        Self {
            name: name.into(),
            styling,
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: ClassCategory) -> Self {
        self.category = category;
        self
    }

    /// Case-insensitive substring match over name, label and description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.label.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}

/// Options for snapshotting a bundle into a new class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateOptions {
    pub label: Option<String>,
    pub description: Option<String>,
    pub category: ClassCategory,
}

impl CreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: ClassCategory) -> Self {
        self.category = category;
        self
    }
}

/// A partial update. `None` members leave the stored value untouched.
///
/// Renaming is a separate operation
/// ([`ClassRegistry::rename`](super::ClassRegistry::rename)) because it
/// changes the registry key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassPatch {
    pub label: Option<String>,
    /// `Some(None)` removes the description.
    pub description: Option<Option<String>>,
    pub styling: Option<StyleBundle>,
    pub category: Option<ClassCategory>,
}

impl ClassPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn styling(mut self, styling: StyleBundle) -> Self {
        self.styling = Some(styling);
        self
    }

    pub fn category(mut self, category: ClassCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub(crate) fn apply(self, def: &mut ClassDefinition) {
        if let Some(label) = self.label {
            def.label = label;
        }
        if let Some(description) = self.description {
            def.description = description;
        }
        if let Some(styling) = self.styling {
            def.styling = styling;
        }
        if let Some(category) = self.category {
            def.category = category;
        }
    }
}

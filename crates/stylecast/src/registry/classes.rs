//! The class registry: an injectable store of named style bundles.

use log::debug;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use super::class::{ClassDefinition, ClassPatch, CreateOptions};
use super::error::RegistryError;
use super::sanitize::sanitize;
use crate::schema::StyleBundle;

/// Named, reusable style bundles keyed by sanitized name.
///
/// The registry owns every [`ClassDefinition`]; elements refer to classes by
/// name only, so a deleted class simply stops contributing to resolution.
/// Iteration is in name order.
///
/// # Example
///
/// ```rust
/// use stylecast::registry::{ClassDefinition, ClassRegistry, RegistryError};
/// use stylecast::schema::StyleBundle;
///
/// let mut registry = ClassRegistry::new();
/// registry.create(ClassDefinition::new("My Button!!", StyleBundle::default()))?;
///
/// assert!(registry.get("my-button").is_some());
/// assert!(matches!(
///     registry.create(ClassDefinition::new("my button", StyleBundle::default())),
///     Err(RegistryError::DuplicateName { .. })
/// ));
/// # Ok::<(), RegistryError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassRegistry {
    classes: BTreeMap<String, ClassDefinition>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from stored definitions.
    ///
    /// Names are re-sanitized; stored timestamps are kept as they are.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ClassDefinition>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for mut def in definitions {
            def.name = registry.vacant_name(&def.name, |name| RegistryError::DuplicateName {
                name,
            })?;
            registry.classes.insert(def.name.clone(), def);
        }
        Ok(registry)
    }

    /// Registers a new class.
    ///
    /// The name is sanitized and both timestamps are stamped. An empty label
    /// defaults to the raw name.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateName`] if the sanitized name exists,
    /// [`RegistryError::InvalidName`] if it sanitizes to nothing.
    pub fn create(&mut self, mut def: ClassDefinition) -> Result<&ClassDefinition, RegistryError> {
        let name = self.vacant_name(&def.name, |name| RegistryError::DuplicateName { name })?;
        if def.label.trim().is_empty() {
            def.label = def.name.trim().to_string();
        }
        def.name = name.clone();
        let now = now_millis();
        def.created_at = now;
        def.updated_at = now;

        debug!("created class '{}'", name);
        Ok(self.classes.entry(name).or_insert(def))
    }

    /// Snapshots `styling` verbatim into a new class.
    ///
    /// The bundle is copied as-is, not diffed against the defaults.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NameUnavailable`] if the sanitized name is taken.
    pub fn create_from_styling(
        &mut self,
        name: &str,
        styling: &StyleBundle,
        options: CreateOptions,
    ) -> Result<&ClassDefinition, RegistryError> {
        let sanitized = self.vacant_name(name, |name| RegistryError::NameUnavailable { name })?;
        let mut def = ClassDefinition::new(sanitized, styling.clone())
            .with_label(options.label.unwrap_or_else(|| name.trim().to_string()))
            .with_category(options.category);
        def.description = options.description;
        self.create(def)
    }

    /// Applies a partial update and bumps `updated_at`.
    pub fn update(&mut self, name: &str, patch: ClassPatch) -> Result<&ClassDefinition, RegistryError> {
        let def = self
            .classes
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })?;
        patch.apply(def);
        def.updated_at = now_millis().max(def.updated_at);

        debug!("updated class '{}'", name);
        Ok(def)
    }

    /// Removes a class and returns its definition.
    ///
    /// Elements still listing the name are unaffected until they resolve,
    /// at which point the class contributes nothing.
    pub fn delete(&mut self, name: &str) -> Result<ClassDefinition, RegistryError> {
        let def = self.classes.remove(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })?;

        debug!("deleted class '{}'", name);
        Ok(def)
    }

    /// Moves a class to a new (sanitized) name and bumps `updated_at`.
    pub fn rename(&mut self, name: &str, new_name: &str) -> Result<&ClassDefinition, RegistryError> {
        if !self.classes.contains_key(name) {
            return Err(RegistryError::NotFound {
                name: name.to_string(),
            });
        }
        let target = sanitize(new_name);
        if target == name {
            return self.get(name).ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            });
        }
        let target = self.vacant_name(new_name, |name| RegistryError::NameUnavailable { name })?;

        let mut def = self.classes.remove(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })?;
        def.name = target.clone();
        def.updated_at = now_millis().max(def.updated_at);

        debug!("renamed class '{}' to '{}'", name, target);
        Ok(self.classes.entry(target).or_insert(def))
    }

    /// Copies a class's styling, label, description and category under a
    /// new name.
    pub fn duplicate(&mut self, name: &str, new_name: &str) -> Result<&ClassDefinition, RegistryError> {
        let source = self.get(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })?;
        let mut options = CreateOptions::new()
            .label(source.label.clone())
            .category(source.category);
        options.description = source.description.clone();
        let styling = source.styling.clone();

        self.create_from_styling(new_name, &styling, options)
    }

    /// Looks up a class by its (already sanitized) name.
    pub fn get(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Classes whose name, label or description contains `query`,
    /// case-insensitively. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&ClassDefinition> {
        let query = query.trim();
        self.classes.values().filter(|def| def.matches(query)).collect()
    }

    /// Returns true if `raw` sanitizes to a usable name that is not taken.
    pub fn is_name_available(&self, raw: &str) -> bool {
        let name = sanitize(raw);
        !name.is_empty() && !self.classes.contains_key(&name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn vacant_name(
        &self,
        raw: &str,
        taken: impl FnOnce(String) -> RegistryError,
    ) -> Result<String, RegistryError> {
        let name = sanitize(raw);
        if name.is_empty() {
            return Err(RegistryError::InvalidName {
                raw: raw.to_string(),
            });
        }
        if self.classes.contains_key(&name) {
            return Err(taken(name));
        }
        Ok(name)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ClassCategory;
    use crate::schema::Field;
    use serde_json::json;

    fn spacer() -> StyleBundle {
        StyleBundle::from_value(&json!({"layout": {"margin": {"top": "20px"}}})).unwrap()
    }

    #[test]
    fn test_create_sanitizes_and_stamps() {
        let mut registry = ClassRegistry::new();
        let def = registry
            .create(ClassDefinition::new("Hero Title", StyleBundle::default()))
            .unwrap();
        assert_eq!(def.name, "hero-title");
        assert_eq!(def.label, "Hero Title");
        assert!(def.created_at > 0);
        assert_eq!(def.created_at, def.updated_at);
    }

    #[test]
    fn test_create_duplicate_fails() {
        let mut registry = ClassRegistry::new();
        registry.create(ClassDefinition::new("card", StyleBundle::default())).unwrap();
        let err = registry
            .create(ClassDefinition::new("CARD", StyleBundle::default()))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateName {
                name: "card".to_string()
            }
        );
    }

    #[test]
    fn test_create_invalid_name_fails() {
        let mut registry = ClassRegistry::new();
        let err = registry
            .create(ClassDefinition::new("???", StyleBundle::default()))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidName { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_create_from_styling_snapshots_verbatim() {
        let mut registry = ClassRegistry::new();
        let mut styling = spacer();
        styling.typography.color = Field::Unset;

        let def = registry
            .create_from_styling("Spacer", &styling, CreateOptions::new().category(ClassCategory::Layout))
            .unwrap();
        assert_eq!(def.name, "spacer");
        assert_eq!(def.styling, styling);
        assert_eq!(def.category, ClassCategory::Layout);

        let err = registry
            .create_from_styling("spacer", &styling, CreateOptions::new())
            .unwrap_err();
        assert!(matches!(err, RegistryError::NameUnavailable { .. }));
    }

    #[test]
    fn test_update_patches_and_bumps_timestamp() {
        let mut registry = ClassRegistry::new();
        let created = registry
            .create(ClassDefinition::new("card", StyleBundle::default()))
            .unwrap()
            .updated_at;

        let def = registry
            .update("card", ClassPatch::new().label("Card").styling(spacer()))
            .unwrap();
        assert_eq!(def.label, "Card");
        assert_eq!(def.styling, spacer());
        assert!(def.updated_at >= created);

        assert!(matches!(
            registry.update("missing", ClassPatch::new()),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_delete() {
        let mut registry = ClassRegistry::new();
        registry.create(ClassDefinition::new("card", StyleBundle::default())).unwrap();
        let removed = registry.delete("card").unwrap();
        assert_eq!(removed.name, "card");
        assert!(registry.get("card").is_none());
        assert!(matches!(registry.delete("card"), Err(RegistryError::NotFound { .. })));
    }

    #[test]
    fn test_search_matches_name_label_description() {
        let mut registry = ClassRegistry::new();
        registry
            .create(ClassDefinition::new("btn-primary", StyleBundle::default()).with_label("Primary"))
            .unwrap();
        registry
            .create(
                ClassDefinition::new("card", StyleBundle::default())
                    .with_description("Rounded BUTTON container"),
            )
            .unwrap();
        registry.create(ClassDefinition::new("footer", StyleBundle::default())).unwrap();

        let names: Vec<_> = registry.search("button").into_iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["card"]);
        let names: Vec<_> = registry.search("PRIM").into_iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["btn-primary"]);
        assert_eq!(registry.search("").len(), 3);
    }

    #[test]
    fn test_rename() {
        let mut registry = ClassRegistry::new();
        registry.create(ClassDefinition::new("card", StyleBundle::default())).unwrap();
        registry.create(ClassDefinition::new("panel", StyleBundle::default())).unwrap();

        assert!(matches!(
            registry.rename("card", "Panel"),
            Err(RegistryError::NameUnavailable { .. })
        ));
        assert!(matches!(
            registry.rename("nope", "other"),
            Err(RegistryError::NotFound { .. })
        ));

        let def = registry.rename("card", "Big Card").unwrap();
        assert_eq!(def.name, "big-card");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["big-card", "panel"]);

        // renaming onto itself is a no-op
        assert_eq!(registry.rename("panel", "PANEL").unwrap().name, "panel");
    }

    #[test]
    fn test_duplicate_copies_styling() {
        let mut registry = ClassRegistry::new();
        registry
            .create(ClassDefinition::new("spacer", spacer()).with_label("Spacer"))
            .unwrap();
        let copy = registry.duplicate("spacer", "spacer copy").unwrap();
        assert_eq!(copy.name, "spacer-copy");
        assert_eq!(copy.label, "Spacer");
        assert_eq!(copy.styling, spacer());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_is_name_available() {
        let mut registry = ClassRegistry::new();
        registry.create(ClassDefinition::new("card", StyleBundle::default())).unwrap();
        assert!(!registry.is_name_available("Card"));
        assert!(!registry.is_name_available("!!"));
        assert!(registry.is_name_available("hero"));
    }

    #[test]
    fn test_from_definitions_resanitizes_and_rejects_duplicates() {
        let registry = ClassRegistry::from_definitions(vec![
            ClassDefinition::new("Card", StyleBundle::default()),
            ClassDefinition::new("hero title", StyleBundle::default()),
        ])
        .unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["card", "hero-title"]);

        let err = ClassRegistry::from_definitions(vec![
            ClassDefinition::new("card", StyleBundle::default()),
            ClassDefinition::new("CARD", StyleBundle::default()),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
    }
}

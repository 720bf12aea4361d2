//! Id-based editing for shadow lists.
//!
//! Shadow ids exist only so an editor can address list entries across
//! add/remove/reorder/duplicate operations. They never influence the
//! cascade or the CSS output.

/// A list entry with a stable identifier.
pub trait ShadowEntry: Clone {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// Editing operations on an ordered shadow list.
pub trait ShadowList<T: ShadowEntry> {
    /// Appends an entry, assigning a fresh id when it has none or a
    /// colliding one. Returns the entry's id.
    fn add_shadow(&mut self, entry: T) -> String;

    /// Removes the entry with the given id.
    fn remove_shadow(&mut self, id: &str) -> Option<T>;

    /// Moves the entry to `index` (clamped to the list end).
    /// Returns false when the id is unknown.
    fn move_shadow(&mut self, id: &str, index: usize) -> bool;

    /// Inserts a copy right after the original and returns the copy's id.
    fn duplicate_shadow(&mut self, id: &str) -> Option<String>;
}

impl<T: ShadowEntry> ShadowList<T> for Vec<T> {
    fn add_shadow(&mut self, mut entry: T) -> String {
        if entry.id().is_empty() || self.iter().any(|e| e.id() == entry.id()) {
            entry.set_id(next_id(self));
        }
        let id = entry.id().to_string();
        self.push(entry);
        id
    }

    fn remove_shadow(&mut self, id: &str) -> Option<T> {
        let index = self.iter().position(|e| e.id() == id)?;
        Some(self.remove(index))
    }

    fn move_shadow(&mut self, id: &str, index: usize) -> bool {
        let Some(from) = self.iter().position(|e| e.id() == id) else {
            return false;
        };
        let entry = self.remove(from);
        let index = index.min(self.len());
        self.insert(index, entry);
        true
    }

    fn duplicate_shadow(&mut self, id: &str) -> Option<String> {
        let index = self.iter().position(|e| e.id() == id)?;
        let mut copy = self[index].clone();
        let new_id = next_id(self);
        copy.set_id(new_id.clone());
        self.insert(index + 1, copy);
        Some(new_id)
    }
}

/// Smallest `shadow-<n>` not already used in the list.
fn next_id<T: ShadowEntry>(list: &[T]) -> String {
    (1..)
        .map(|n| format!("shadow-{}", n))
        .find(|candidate| list.iter().all(|e| e.id() != candidate))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::BoxShadow;

    fn ids(list: &[BoxShadow]) -> Vec<&str> {
        list.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_add_assigns_ids() {
        let mut list: Vec<BoxShadow> = Vec::new();
        assert_eq!(list.add_shadow(BoxShadow::default()), "shadow-1");
        assert_eq!(list.add_shadow(BoxShadow::default()), "shadow-2");
    }

    #[test]
    fn test_add_keeps_unique_id() {
        let mut list: Vec<BoxShadow> = Vec::new();
        let shadow = BoxShadow {
            id: "glow".to_string(),
            ..BoxShadow::default()
        };
        assert_eq!(list.add_shadow(shadow.clone()), "glow");
        // A second entry with the same id gets a fresh one
        assert_eq!(list.add_shadow(shadow), "shadow-1");
    }

    #[test]
    fn test_remove_and_move() {
        let mut list: Vec<BoxShadow> = Vec::new();
        for _ in 0..3 {
            list.add_shadow(BoxShadow::default());
        }
        assert!(list.move_shadow("shadow-3", 0));
        assert_eq!(ids(&list), vec!["shadow-3", "shadow-1", "shadow-2"]);
        assert!(list.move_shadow("shadow-3", 99));
        assert_eq!(ids(&list), vec!["shadow-1", "shadow-2", "shadow-3"]);
        assert!(!list.move_shadow("missing", 0));

        let removed = list.remove_shadow("shadow-2").unwrap();
        assert_eq!(removed.id, "shadow-2");
        assert_eq!(ids(&list), vec!["shadow-1", "shadow-3"]);
    }

    #[test]
    fn test_duplicate_inserts_after_original() {
        let mut list: Vec<BoxShadow> = Vec::new();
        list.add_shadow(BoxShadow {
            blur: 9.0,
            ..BoxShadow::default()
        });
        list.add_shadow(BoxShadow::default());

        let copy = list.duplicate_shadow("shadow-1").unwrap();
        assert_eq!(copy, "shadow-3");
        assert_eq!(ids(&list), vec!["shadow-1", "shadow-3", "shadow-2"]);
        assert_eq!(list[1].blur, 9.0);
        assert_eq!(list.duplicate_shadow("nope"), None);
    }
}

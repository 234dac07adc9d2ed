//! Name index — display name → candidate person ids.
//!
//! Names are not keys: several people may share one. The index only
//! exposes the candidate set; picking one is the caller's job
//! (see [`crate::resolve`]).

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::PersonId;

/// Candidates for one name. Almost every name maps to a single person.
pub type Candidates = SmallVec<[PersonId; 1]>;

/// Case-insensitive map from display name to the people carrying it.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    entries: HashMap<String, Candidates>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized lookup key for a display name.
    pub fn normalize(name: &str) -> String {
        name.to_lowercase()
    }

    /// Record that `id` carries `name`. Registering the same pair twice is a no-op.
    pub fn register(&mut self, name: &str, id: PersonId) {
        let ids = self.entries.entry(Self::normalize(name)).or_default();
        if !ids.contains(&id) {
            ids.push(id);
            ids.sort();
        }
    }

    /// Forget that `id` carries `name`. Names left with no candidates are removed.
    pub fn unregister(&mut self, name: &str, id: &PersonId) {
        let key = Self::normalize(name);
        if let Some(ids) = self.entries.get_mut(&key) {
            ids.retain(|candidate| candidate != id);
            if ids.is_empty() {
                self.entries.remove(&key);
            }
        }
    }

    /// All people whose name matches `name`, ignoring case, ordered by id.
    /// Empty when nobody matches.
    pub fn resolve(&self, name: &str) -> Candidates {
        self.entries
            .get(&Self::normalize(name))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of distinct normalized names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ignores_case() {
        let mut idx = NameIndex::new();
        idx.register("John Doe", PersonId::from("1"));

        assert_eq!(idx.resolve("john doe"), idx.resolve("JOHN DOE"));
        assert_eq!(idx.resolve("john doe").as_slice(), &[PersonId::from("1")]);
    }

    #[test]
    fn test_shared_name_yields_all_candidates() {
        let mut idx = NameIndex::new();
        idx.register("Emma Watson", PersonId::from("914612"));
        idx.register("emma watson", PersonId::from("1126"));

        let ids = idx.resolve("Emma Watson");
        assert_eq!(ids.as_slice(), &[PersonId::from("1126"), PersonId::from("914612")]);
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn test_unknown_name_is_empty() {
        let idx = NameIndex::new();
        assert!(idx.resolve("Nobody").is_empty());
    }

    #[test]
    fn test_unregister_keeps_other_candidates() {
        let mut idx = NameIndex::new();
        idx.register("Emma Watson", PersonId::from("914612"));
        idx.register("Emma Watson", PersonId::from("1126"));

        idx.unregister("EMMA WATSON", &PersonId::from("1126"));
        assert_eq!(idx.resolve("emma watson").as_slice(), &[PersonId::from("914612")]);

        idx.unregister("Emma Watson", &PersonId::from("914612"));
        assert!(idx.resolve("emma watson").is_empty());
        assert!(idx.is_empty());
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut idx = NameIndex::new();
        idx.register("Kevin Bacon", PersonId::from("102"));
        idx.register("Kevin Bacon", PersonId::from("102"));
        assert_eq!(idx.resolve("kevin bacon").len(), 1);
    }
}

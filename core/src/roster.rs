//! Ordered, duplicate-free participant list.

use raffle_types::Participant;

use crate::errors::Rejection;

/// Owns the roster.
///
/// Insertion order is preserved and is what the user sees; removal is by
/// position. While a draw is running the store is frozen and every mutation
/// is rejected, so the list used for selection cannot change mid-draw.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    participants: Vec<Participant>,
    frozen: bool,
}

impl RosterStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim `name` and append it.
    ///
    /// Empty and duplicate names are rejected.
    pub fn add(&mut self, name: &str) -> Result<&Participant, Rejection> {
        self.ensure_thawed()?;
        let participant = Participant::new(name).map_err(|_| Rejection::EmptyName)?;
        if self.participants.contains(&participant) {
            return Err(Rejection::DuplicateName {
                name: participant.into_inner(),
            });
        }
        self.participants.push(participant);
        Ok(&self.participants[self.participants.len() - 1])
    }

    /// Remove the participant at `index`, shifting later entries left.
    pub fn remove(&mut self, index: usize) -> Result<Participant, Rejection> {
        self.ensure_thawed()?;
        if index >= self.participants.len() {
            return Err(Rejection::IndexOutOfRange {
                index,
                len: self.participants.len(),
            });
        }
        Ok(self.participants.remove(index))
    }

    pub fn clear(&mut self) -> Result<(), Rejection> {
        self.ensure_thawed()?;
        self.participants.clear();
        Ok(())
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim();
        self.participants.iter().any(|p| p.as_str() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub(crate) fn freeze(&mut self) {
        self.frozen = true;
    }

    pub(crate) fn thaw(&mut self) {
        self.frozen = false;
    }

    fn ensure_thawed(&self) -> Result<(), Rejection> {
        if self.frozen {
            Err(Rejection::DrawInProgress)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Rejection, RosterStore};

    fn names(store: &RosterStore) -> Vec<&str> {
        store.participants().iter().map(|p| p.as_str()).collect()
    }

    fn roster(items: &[&str]) -> RosterStore {
        let mut store = RosterStore::new();
        for item in items {
            store.add(item).unwrap();
        }
        store
    }

    #[test]
    fn add_appends_trimmed_name_at_end() {
        let mut store = roster(&["Alice"]);
        let added = store.add("  Bob  ").unwrap();
        assert_eq!(added.as_str(), "Bob");
        assert_eq!(names(&store), ["Alice", "Bob"]);
    }

    #[test]
    fn add_rejects_blank_names() {
        let mut store = roster(&["Alice"]);
        assert_eq!(store.add("").unwrap_err(), Rejection::EmptyName);
        assert_eq!(store.add("   ").unwrap_err(), Rejection::EmptyName);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_rejects_duplicates_after_trimming() {
        let mut store = roster(&["Alice"]);
        assert_eq!(
            store.add(" Alice ").unwrap_err(),
            Rejection::DuplicateName {
                name: "Alice".to_string()
            }
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        let mut store = roster(&["Alice"]);
        store.add("alice").unwrap();
        assert_eq!(names(&store), ["Alice", "alice"]);
    }

    #[test]
    fn remove_shifts_later_entries_left() {
        let mut store = roster(&["Alice", "Bob", "Carol", "Dave"]);
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.as_str(), "Bob");
        assert_eq!(names(&store), ["Alice", "Carol", "Dave"]);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut store = roster(&["Alice", "Bob"]);
        assert_eq!(
            store.remove(2).unwrap_err(),
            Rejection::IndexOutOfRange { index: 2, len: 2 }
        );
        assert_eq!(names(&store), ["Alice", "Bob"]);
    }

    #[test]
    fn remove_on_empty_roster_is_noop() {
        let mut store = RosterStore::new();
        assert!(store.remove(0).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties_roster() {
        let mut store = roster(&["Alice", "Bob"]);
        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn frozen_store_rejects_every_mutation() {
        let mut store = roster(&["Alice", "Bob"]);
        store.freeze();

        assert_eq!(store.add("Carol").unwrap_err(), Rejection::DrawInProgress);
        assert_eq!(store.remove(0).unwrap_err(), Rejection::DrawInProgress);
        assert_eq!(store.clear().unwrap_err(), Rejection::DrawInProgress);
        assert_eq!(names(&store), ["Alice", "Bob"]);

        store.thaw();
        store.add("Carol").unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn frozen_check_precedes_validation() {
        let mut store = RosterStore::new();
        store.freeze();
        assert_eq!(store.add("").unwrap_err(), Rejection::DrawInProgress);
    }

    #[test]
    fn contains_matches_trimmed_exact_name() {
        let store = roster(&["Alice"]);
        assert!(store.contains("Alice"));
        assert!(store.contains(" Alice "));
        assert!(!store.contains("ALICE"));
    }
}

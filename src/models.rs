//! Frontend Models
//!
//! The to-do list data model. The view layer only ever projects these
//! structures; it never reads state back out of the DOM.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current layout of the persisted snapshot
pub const SNAPSHOT_VERSION: u32 = 1;

/// Opaque per-session item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(ItemId)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub checked: bool,
}

/// Persisted form of an item (identity is positional on disk)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

/// Versioned envelope written under the storage key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub items: Vec<ItemRecord>,
}

impl Snapshot {
    pub fn new(items: Vec<ItemRecord>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            items,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("item text must not be empty")]
    EmptyInput,
}

/// Ordered list of items; insertion order is display order
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<Item>,
    next_id: u32,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new unchecked item. Text is stored trimmed.
    pub fn add_item(&mut self, text: &str) -> Result<ItemId, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        let id = self.issue_id();
        self.items.push(Item {
            id,
            text: text.to_string(),
            checked: false,
        });
        Ok(id)
    }

    /// Flip the checked flag. Returns false if no item has this id.
    pub fn toggle_item(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Remove an item, keeping the order of the rest. Returns false if absent.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Remove every checked item, returning how many went away
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        before - self.items.len()
    }

    /// Replace the whole list with the given records, issuing fresh ids.
    /// Records are held to the same rule as `add_item`: text is trimmed and
    /// blank records are dropped.
    pub fn materialize(&mut self, records: Vec<ItemRecord>) {
        self.items.clear();
        for (index, record) in records.into_iter().enumerate() {
            let text = record.text.trim();
            if text.is_empty() {
                log::warn!("Skipping blank record at position {}", index);
                continue;
            }
            let id = self.issue_id();
            self.items.push(Item {
                id,
                text: text.to_string(),
                checked: record.checked,
            });
        }
    }

    pub fn current_snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.items
                .iter()
                .map(|item| ItemRecord {
                    text: item.text.clone(),
                    checked: item.checked,
                })
                .collect(),
        )
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[cfg(test)]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet checked
    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|item| !item.checked).count()
    }

    fn issue_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(text: &str, checked: bool) -> ItemRecord {
        ItemRecord {
            text: text.to_string(),
            checked,
        }
    }

    fn pairs(list: &TodoList) -> Vec<(String, bool)> {
        list.items()
            .iter()
            .map(|item| (item.text.clone(), item.checked))
            .collect()
    }

    #[test]
    fn test_add_item_trims_and_starts_unchecked() {
        let mut list = TodoList::new();
        let id = list.add_item("  Buy milk \n").expect("add failed");

        let item = list.get(id).unwrap();
        assert_eq!(item.text, "Buy milk");
        assert!(!item.checked);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = TodoList::new();
        assert_eq!(list.add_item(""), Err(ValidationError::EmptyInput));
        assert_eq!(list.add_item("   "), Err(ValidationError::EmptyInput));
        assert_eq!(list.add_item("\t\n"), Err(ValidationError::EmptyInput));
        assert!(list.is_empty());
    }

    #[test]
    fn test_duplicate_text_allowed() {
        let mut list = TodoList::new();
        let a = list.add_item("same").unwrap();
        let b = list.add_item("same").unwrap();
        assert_ne!(a, b);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut list = TodoList::new();
        let id = list.add_item("only").unwrap();
        list.remove_item(id);

        assert!(!list.toggle_item(id));
        assert!(!list.remove_item(id));
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_survive_earlier_deletes() {
        let mut list = TodoList::new();
        let first = list.add_item("first").unwrap();
        let second = list.add_item("second").unwrap();
        let third = list.add_item("third").unwrap();

        assert!(list.remove_item(first));
        assert!(list.toggle_item(third));

        assert!(!list.get(second).unwrap().checked);
        assert!(list.get(third).unwrap().checked);
    }

    #[test]
    fn test_clear_completed_keeps_order() {
        let mut list = TodoList::new();
        list.materialize(vec![
            record("a", true),
            record("b", false),
            record("c", true),
            record("d", false),
        ]);

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(
            pairs(&list),
            vec![("b".to_string(), false), ("d".to_string(), false)]
        );
        assert_eq!(list.clear_completed(), 0);
    }

    #[test]
    fn test_materialize_replaces_and_reissues_ids() {
        let mut list = TodoList::new();
        let old = list.add_item("stale").unwrap();

        list.materialize(vec![record("x", false), record("y", true)]);

        assert!(list.get(old).is_none());
        assert_eq!(
            pairs(&list),
            vec![("x".to_string(), false), ("y".to_string(), true)]
        );
        assert_eq!(list.remaining_count(), 1);
    }

    #[test]
    fn test_materialize_trims_and_drops_blank_records() {
        let mut list = TodoList::new();
        list.materialize(vec![
            record("   ", false),
            record("  Walk dog  ", true),
            record("", true),
            record("Buy milk", false),
        ]);

        assert_eq!(
            pairs(&list),
            vec![("Walk dog".to_string(), true), ("Buy milk".to_string(), false)]
        );
        assert!(list.items().iter().all(|item| !item.text.is_empty()));
    }

    #[test]
    fn test_snapshot_keeps_markup_as_plain_text() {
        let mut list = TodoList::new();
        list.add_item("<b>bold</b> & <script>").unwrap();

        let snapshot = list.current_snapshot();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.items[0].text, "<b>bold</b> & <script>");
    }

    #[test]
    fn test_item_id_parses_from_attribute() {
        let mut list = TodoList::new();
        list.add_item("a").unwrap();
        let id = list.add_item("b").unwrap();

        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-an-id".parse::<ItemId>().is_err());
    }

    proptest! {
        #[test]
        fn prop_add_grows_by_one_unchecked(
            existing in proptest::collection::vec("[a-z]{1,8}", 0..8),
            text in "[ ]{0,3}[a-zA-Z0-9]{1,16}[ ]{0,3}",
        ) {
            let mut list = TodoList::new();
            for t in &existing {
                list.add_item(t).unwrap();
            }
            let before = list.len();
            let id = list.add_item(&text).unwrap();

            prop_assert_eq!(list.len(), before + 1);
            prop_assert!(!list.get(id).unwrap().checked);
        }

        #[test]
        fn prop_blank_never_added(blank in "[ \t\n]{0,6}") {
            let mut list = TodoList::new();
            prop_assert_eq!(list.add_item(&blank), Err(ValidationError::EmptyInput));
            prop_assert_eq!(list.len(), 0);
        }

        #[test]
        fn prop_double_toggle_restores(
            flags in proptest::collection::vec(any::<bool>(), 1..10),
            pick in any::<proptest::sample::Index>(),
        ) {
            let mut list = TodoList::new();
            list.materialize(flags.iter().map(|&c| record("t", c)).collect());
            let before = pairs(&list);
            let id = list.items()[pick.index(list.len())].id;

            list.toggle_item(id);
            list.toggle_item(id);

            prop_assert_eq!(pairs(&list), before);
        }

        #[test]
        fn prop_remove_preserves_others(
            flags in proptest::collection::vec(any::<bool>(), 1..10),
            pick in any::<proptest::sample::Index>(),
        ) {
            let mut list = TodoList::new();
            list.materialize(
                flags.iter().enumerate().map(|(i, &c)| record(&format!("item {}", i), c)).collect(),
            );
            let mut expected = pairs(&list);
            let index = pick.index(list.len());
            let id = list.items()[index].id;

            prop_assert!(list.remove_item(id));
            expected.remove(index);

            prop_assert_eq!(pairs(&list), expected);
        }

        #[test]
        fn prop_snapshot_round_trips(
            flags in proptest::collection::vec(("[a-z ]{0,5}[a-z]", any::<bool>()), 0..10),
        ) {
            let mut list = TodoList::new();
            list.materialize(flags.iter().map(|(t, c)| record(t, *c)).collect());

            let mut restored = TodoList::new();
            restored.materialize(list.current_snapshot().items);

            prop_assert_eq!(pairs(&restored), pairs(&list));
        }
    }
}

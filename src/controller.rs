//! Interaction Controller
//!
//! Turns user intents (submit, click) into list mutations and persists after
//! every successful one. Holds its list and adapter explicitly so several
//! widgets can coexist on a page.

use crate::error::StorageError;
use crate::models::{ItemId, TodoList, ValidationError};
use crate::persistence::{KeyValueStore, PersistenceAdapter};

/// `data-role` value on an item row
pub const ROLE_TOGGLE: &str = "toggle";
/// `data-role` value on a delete button
pub const ROLE_DELETE: &str = "delete";

/// Something the user should be told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Blocking: nothing was added
    EmptyInput,
    /// Non-blocking: the change applied in memory but was not persisted
    StorageWarning(String),
}

impl Notice {
    pub fn is_blocking(&self) -> bool {
        matches!(self, Notice::EmptyInput)
    }

    pub fn message(&self) -> String {
        match self {
            Notice::EmptyInput => "Please enter some text before adding an item.".to_string(),
            Notice::StorageWarning(reason) => {
                format!("Changes may not survive a reload ({}).", reason)
            }
        }
    }
}

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyInput => Notice::EmptyInput,
        }
    }
}

impl From<StorageError> for Notice {
    fn from(err: StorageError) -> Self {
        Notice::StorageWarning(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Item appended; the input should be cleared
    Added { id: ItemId, notice: Option<Notice> },
    /// Nothing changed
    Rejected(Notice),
}

/// Result of a click or bulk action on existing items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Nothing matched; no write happened
    Unchanged,
    /// The list changed; carries a warning if it could not be persisted
    Applied(Option<Notice>),
}

/// What a click inside the list region landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Toggle(ItemId),
    Delete(ItemId),
    None,
}

impl ClickTarget {
    /// Classify from the `data-role` / `data-id` attributes of the nearest
    /// tagged element
    pub fn classify(role: Option<&str>, id: Option<&str>) -> Self {
        let Some(id) = id.and_then(|raw| raw.parse::<ItemId>().ok()) else {
            return ClickTarget::None;
        };
        match role {
            Some(ROLE_DELETE) => ClickTarget::Delete(id),
            Some(ROLE_TOGGLE) => ClickTarget::Toggle(id),
            _ => ClickTarget::None,
        }
    }
}

pub struct TodoController<S> {
    list: TodoList,
    adapter: PersistenceAdapter<S>,
}

impl<S: KeyValueStore> TodoController<S> {
    /// Load the saved snapshot (if any) and materialize it. Never fails:
    /// unreadable data is logged and treated as an empty list.
    pub fn bootstrap(adapter: PersistenceAdapter<S>) -> Self {
        let mut list = TodoList::new();
        match adapter.load() {
            Ok(Some(snapshot)) => {
                list.materialize(snapshot.items);
                log::info!("Restored {} items from '{}'", list.len(), adapter.key());
            }
            Ok(None) => log::info!("No saved list under '{}', starting empty", adapter.key()),
            Err(e) => log::warn!("Ignoring saved list under '{}': {}", adapter.key(), e),
        }
        Self { list, adapter }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn submit(&mut self, input: &str) -> SubmitOutcome {
        match self.list.add_item(input) {
            Ok(id) => SubmitOutcome::Added {
                id,
                notice: self.persist(),
            },
            Err(e) => {
                log::debug!("Rejected submit: {}", e);
                SubmitOutcome::Rejected(e.into())
            }
        }
    }

    pub fn click(&mut self, target: ClickTarget) -> Mutation {
        let changed = match target {
            ClickTarget::Toggle(id) => self.list.toggle_item(id),
            ClickTarget::Delete(id) => self.list.remove_item(id),
            ClickTarget::None => false,
        };
        if !changed {
            return Mutation::Unchanged;
        }
        Mutation::Applied(self.persist())
    }

    pub fn clear_completed(&mut self) -> Mutation {
        let removed = self.list.clear_completed();
        if removed == 0 {
            return Mutation::Unchanged;
        }
        log::debug!("Cleared {} completed items", removed);
        Mutation::Applied(self.persist())
    }

    #[cfg(test)]
    pub fn into_adapter(self) -> PersistenceAdapter<S> {
        self.adapter
    }

    #[cfg(test)]
    pub fn adapter_mut(&mut self) -> &mut PersistenceAdapter<S> {
        &mut self.adapter
    }

    fn persist(&mut self) -> Option<Notice> {
        let result = if self.list.is_empty() {
            self.adapter.clear()
        } else {
            self.adapter.save(&self.list.current_snapshot())
        };
        match result {
            Ok(()) => None,
            Err(e) => {
                log::warn!("Could not persist list: {}", e);
                Some(e.into())
            }
        }
    }
}

//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. This is a
//! projection of the controller's list, refreshed after every dispatch.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, TodoList};

/// Rendered state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items in display order
    pub items: Vec<Item>,
    /// Unchecked item count for the footer
    pub remaining: usize,
    /// Non-blocking storage warning currently shown
    pub warning: Option<String>,
    /// Bumped on every new warning so stale dismiss timers are ignored
    pub warning_version: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the rendered items with the list's current contents
pub fn store_sync_list(store: &AppStore, list: &TodoList) {
    *store.items().write() = list.items().to_vec();
    *store.remaining().write() = list.remaining_count();
}

/// Show a warning, returning the version a timer must present to dismiss it
pub fn store_raise_warning(store: &AppStore, message: String) -> u32 {
    let version = store.warning_version().get_untracked().wrapping_add(1);
    *store.warning_version().write() = version;
    *store.warning().write() = Some(message);
    version
}

/// Hide the warning. With `Some(version)` only the matching warning is hidden.
pub fn store_dismiss_warning(store: &AppStore, version: Option<u32>) {
    if let Some(version) = version {
        if store.warning_version().get_untracked() != version {
            return;
        }
    }
    *store.warning().write() = None;
}

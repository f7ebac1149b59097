//! To-do Widget App
//!
//! Bootstraps one widget instance: opens storage, restores the saved list and
//! provides the context its components dispatch through.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewItemForm, StorageWarningBanner, TodoListView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::{Notice, TodoController};
use crate::persistence::{BrowserStorage, KeyValueStore, MemoryStorage, PersistenceAdapter};
use crate::store::AppState;

/// Prefer `localStorage`; fall back to memory so the widget still works
fn open_storage() -> (Box<dyn KeyValueStore>, Option<Notice>) {
    match BrowserStorage::open() {
        Ok(storage) => (Box::new(storage), None),
        Err(e) => {
            log::warn!("Falling back to in-memory storage: {}", e);
            (Box::new(MemoryStorage::new()), Some(e.into()))
        }
    }
}

#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    let (storage, startup_notice) = open_storage();
    let controller =
        TodoController::bootstrap(PersistenceAdapter::new(storage, config.storage_key.clone()));

    let ctx = AppContext::new(controller, Store::new(AppState::default()), config.warning_timeout_ms);
    provide_context(ctx);

    if let Some(notice) = startup_notice {
        ctx.notify(notice);
    }

    view! {
        <main class="todo-app">
            <h1>"To-do"</h1>
            <StorageWarningBanner />
            <NewItemForm />
            <TodoListView />
        </main>
    }
}

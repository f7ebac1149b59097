//! Application Context
//!
//! Explicit handles for one widget instance, provided via the Leptos Context
//! API. Components dispatch through here instead of touching storage.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::{ClickTarget, Mutation, Notice, SubmitOutcome, TodoController};
use crate::persistence::KeyValueStore;
use crate::store::{store_dismiss_warning, store_raise_warning, store_sync_list, AppStore};

pub type WidgetController = TodoController<Box<dyn KeyValueStore>>;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Owns the list and the persistence adapter
    controller: StoredValue<WidgetController, LocalStorage>,
    /// Rendered state
    pub store: AppStore,
    /// How long a storage warning stays visible
    warning_timeout_ms: u32,
}

impl AppContext {
    pub fn new(controller: WidgetController, store: AppStore, warning_timeout_ms: u32) -> Self {
        store_sync_list(&store, controller.list());
        Self {
            controller: StoredValue::new_local(controller),
            store,
            warning_timeout_ms,
        }
    }

    /// Add an item from the input text. Returns true if the input should be cleared.
    pub fn submit(&self, text: &str) -> bool {
        let Some(outcome) = self.controller.try_update_value(|c| c.submit(text)) else {
            return false;
        };
        match outcome {
            SubmitOutcome::Added { notice, .. } => {
                self.refresh();
                if let Some(notice) = notice {
                    self.notify(notice);
                }
                true
            }
            SubmitOutcome::Rejected(notice) => {
                self.notify(notice);
                false
            }
        }
    }

    pub fn click(&self, target: ClickTarget) {
        if target == ClickTarget::None {
            return;
        }
        if let Some(mutation) = self.controller.try_update_value(|c| c.click(target)) {
            self.apply(mutation);
        }
    }

    pub fn clear_completed(&self) {
        if let Some(mutation) = self.controller.try_update_value(|c| c.clear_completed()) {
            self.apply(mutation);
        }
    }

    /// Blocking notices use `window.alert`; warnings go to the banner and
    /// dismiss themselves after a timeout.
    pub fn notify(&self, notice: Notice) {
        if notice.is_blocking() {
            if let Err(e) = window().alert_with_message(&notice.message()) {
                log::warn!("alert failed: {:?}", e);
            }
            return;
        }

        let store = self.store;
        let version = store_raise_warning(&store, notice.message());
        let timeout = self.warning_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            store_dismiss_warning(&store, Some(version));
        });
    }

    pub fn dismiss_warning(&self) {
        store_dismiss_warning(&self.store, None);
    }

    /// Re-project only when the list actually changed
    fn apply(&self, mutation: Mutation) {
        let Mutation::Applied(notice) = mutation else {
            return;
        };
        self.refresh();
        if let Some(notice) = notice {
            self.notify(notice);
        }
    }

    fn refresh(&self) {
        let store = self.store;
        self.controller.with_value(|c| store_sync_list(&store, c.list()));
    }
}

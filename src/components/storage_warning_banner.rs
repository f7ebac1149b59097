//! Storage Warning Banner Component
//!
//! Non-blocking notice shown when a save fails.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn StorageWarningBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        {move || store.warning().get().map(|message| view! {
            <div class="storage-warning" role="status">
                <span>{message}</span>
                <button type="button" class="dismiss-btn" on:click=move |_| ctx.dismiss_warning()>
                    "✗"
                </button>
            </div>
        })}
    }
}

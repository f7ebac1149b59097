//! New Item Form Component
//!
//! Text entry; Enter (or the Add button) submits.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.submit(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                class="new-item-input"
                placeholder="What needs doing?"
                autofocus=true
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}

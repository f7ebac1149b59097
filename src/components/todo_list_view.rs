//! Todo List View Component
//!
//! Scrollable list region with a single delegated click handler, plus the
//! footer with the remaining count.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::TodoRow;
use crate::context::AppContext;
use crate::controller::ClickTarget;
use crate::models::Item;
use crate::store::AppStateStoreFields;

/// Nearest capability-tagged element at or above the click target
fn click_target(ev: &web_sys::MouseEvent) -> ClickTarget {
    let tagged = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("[data-role]").ok().flatten());

    match tagged {
        Some(el) => ClickTarget::classify(
            el.get_attribute("data-role").as_deref(),
            el.get_attribute("data-id").as_deref(),
        ),
        None => ClickTarget::None,
    }
}

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let on_click = move |ev: web_sys::MouseEvent| ctx.click(click_target(&ev));

    let has_completed = move || store.items().read().len() > store.remaining().get();

    view! {
        <ul class="todo-list" on:click=on_click>
            <For
                each=move || store.items().get()
                // Re-render a row whenever its checked flag flips
                key=|item: &Item| (item.id, item.checked)
                children=move |item: Item| view! { <TodoRow item=item /> }
            />
        </ul>

        <footer class="todo-footer">
            <span class="item-count">
                {move || match store.remaining().get() {
                    1 => "1 item left".to_string(),
                    n => format!("{} items left", n),
                }}
            </span>
            <Show when=has_completed>
                <button type="button" class="clear-completed" on:click=move |_| ctx.clear_completed()>
                    "Clear completed"
                </button>
            </Show>
        </footer>
    }
}

//! Todo Row Component
//!
//! One list entry. The row and its delete button carry `data-role` and
//! `data-id` so the list can route delegated clicks.

use leptos::prelude::*;

use crate::controller::{ROLE_DELETE, ROLE_TOGGLE};
use crate::models::Item;

/// ARIA role of a row; the whole row toggles
const ROW_ARIA_ROLE: &str = "checkbox";

/// Attribute values derived from an item
#[derive(Debug, PartialEq)]
struct RowMarkers {
    data_id: String,
    class: &'static str,
    aria_checked: &'static str,
}

impl RowMarkers {
    fn for_item(item: &Item) -> Self {
        Self {
            data_id: item.id.to_string(),
            class: if item.checked { "todo-row checked" } else { "todo-row" },
            aria_checked: if item.checked { "true" } else { "false" },
        }
    }
}

#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let markers = RowMarkers::for_item(&item);
    let checked = item.checked;
    let row_id = markers.data_id.clone();
    let delete_id = markers.data_id;

    // Text is inserted as a text node, never parsed as markup
    view! {
        <li
            class=markers.class
            data-role=ROLE_TOGGLE
            data-id=row_id
            role=ROW_ARIA_ROLE
            aria-checked=markers.aria_checked
        >
            <span class="checkmark">{if checked { "✓" } else { "" }}</span>
            <span class="item-text">{item.text}</span>
            <button
                type="button"
                class="delete-btn"
                data-role=ROLE_DELETE
                data-id=delete_id
                aria-label="Delete item"
            >
                "×"
            </button>
        </li>
    }
}

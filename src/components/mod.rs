//! UI Components
//!
//! Leptos components projecting the store into the DOM.

mod new_item_form;
mod storage_warning_banner;
mod todo_list_view;
mod todo_row;

pub use new_item_form::NewItemForm;
pub use storage_warning_banner::StorageWarningBanner;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;

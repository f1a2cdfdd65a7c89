//! UI Components
//!
//! Leptos components for the item list page.

mod erase_all_button;
mod item_form;
mod item_list;
mod item_row;

pub use erase_all_button::EraseAllButton;
pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use item_row::ItemRow;

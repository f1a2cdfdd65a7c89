//! Listify Core
//!
//! Target-independent state for the item list manager:
//! - item: entities and identifiers
//! - list: the item collection and its reducer
//! - form: input capture, validation and edit mode

mod error;
mod form;
mod item;
mod list;


pub use error::{FieldErrors, FormError};
pub use form::{Field, FormController, FormMode};
pub use item::{Item, ItemDraft, ItemId};
pub use list::{reduce, Action, ItemList};

/// Heading shown above the form
pub const APP_TITLE: &str = "Listify";

/// Shown in place of the list when it holds no items
pub const EMPTY_MESSAGE: &str = "No items yet.";

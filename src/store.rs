//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use listify_core::{reduce, Action, FormController, ItemList};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The item collection, changed only through [`store_dispatch`]
    pub list: ItemList,
    /// Item form values, edit mode and validation errors
    pub form: FormController,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Run an action through the reducer and store the result
pub fn store_dispatch(store: &AppStore, action: Action) {
    store
        .list()
        .update(|list| *list = reduce(std::mem::take(list), action));
}

//! Listify Frontend App
//!
//! Single-page layout: form, erase-all trigger, then the item list.

use leptos::prelude::*;
use listify_core::APP_TITLE;

use crate::components::{EraseAllButton, ItemForm, ItemList};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();

    // Provide context to all children
    provide_context(ctx);

    view! {
        <main class="listify">
            <h1>{APP_TITLE}</h1>

            <ItemForm />

            <EraseAllButton on_erase=Callback::new(move |_| ctx.erase_all()) />

            <h2>"Items"</h2>
            <ItemList />
        </main>
    }
}

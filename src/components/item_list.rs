//! Item List Component
//!
//! Renders the items in insertion order, or the empty-state message.

use leptos::prelude::*;
use listify_core::EMPTY_MESSAGE;

use crate::components::ItemRow;
use crate::context::use_app_context;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show
            when=move || !ctx.is_empty()
            fallback=|| view! { <p class="empty-state">{EMPTY_MESSAGE}</p> }
        >
            <ul class="item-list">
                <For
                    each=move || ctx.items()
                    // Editable fields are part of the key so updated rows re-render
                    key=|item| (item.id, item.name.clone(), item.description.clone())
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>
        </Show>
    }
}

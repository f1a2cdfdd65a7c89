//! Item Row Component
//!
//! A single `#serial name: description` entry with its edit trigger.

use leptos::prelude::*;
use listify_core::Item;

use crate::context::use_app_context;

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let serial = format!("#{}", item.serial);
    let name = item.name.clone();
    let description = item.description.clone();
    let is_editing = move || ctx.edit_target() == Some(id);

    view! {
        <li class=move || if is_editing() { "item-row editing" } else { "item-row" }>
            <div>
                <span class="item-serial">{serial}</span>
                " "
                <span class="item-name">{name}</span>
                ": "
                <span class="item-description">{description}</span>
            </div>
            <button class="edit-btn" on:click=move |_| ctx.begin_edit(&item)>
                "Edit"
            </button>
        </li>
    }
}

//! Erase All Button Component

use leptos::prelude::*;

/// Full-width button that clears the whole list
///
/// # Arguments
/// * `on_erase` - Callback run on click
#[component]
pub fn EraseAllButton(#[prop(into)] on_erase: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="erase-all-btn"
            on:click=move |_| on_erase.run(())
        >
            "Erase All"
        </button>
    }
}

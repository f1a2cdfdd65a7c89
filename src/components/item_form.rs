//! Item Form Component
//!
//! Name and description inputs with inline validation, submitting either a
//! new item or an update to the item being edited.

use leptos::prelude::*;
use listify_core::Field;

use crate::context::use_app_context;

/// Form for adding items and editing the selected one
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="item-form" on:submit=on_submit>
            <div class="item-form-fields">
                {Field::ALL.into_iter().map(|field| view! { <FormField field=field /> }).collect_view()}
            </div>
            <button type="submit" class="submit-btn">
                {move || ctx.submit_label()}
            </button>
        </form>
    }
}

/// One labeled required input with its error message
#[component]
fn FormField(field: Field) -> impl IntoView {
    let ctx = use_app_context();
    let id = format!("item-{}", field.as_str());
    let invalid = move || ctx.field_error(field).is_some();

    view! {
        <div class="form-field">
            <label for=id.clone()>{field.label()}</label>
            <input
                id=id
                type="text"
                name=field.as_str()
                placeholder=field.placeholder()
                class=move || if invalid() { "invalid" } else { "" }
                aria-invalid=move || if invalid() { "true" } else { "false" }
                prop:value=move || ctx.field_value(field)
                on:input=move |ev| ctx.set_field(field, event_target_value(&ev))
            />
            {move || ctx.field_error(field).map(|error| view! {
                <span class="field-error">{error.to_string()}</span>
            })}
        </div>
    }
}

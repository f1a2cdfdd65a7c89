//! Application Context
//!
//! Event wiring shared via Leptos Context API. Components read state through
//! these accessors and report gestures as intents; only this type touches
//! the store.

use leptos::prelude::*;
use listify_core::{Action, Field, FormError, Item, ItemId};

use crate::store::{store_dispatch, AppState, AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            store: AppStore::new(AppState::default()),
        }
    }

    /// Snapshot of the current items
    pub fn items(&self) -> Vec<Item> {
        self.store.list().read().items().to_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.store.list().read().is_empty()
    }

    pub fn field_value(&self, field: Field) -> String {
        self.store.form().read().value(field).to_string()
    }

    pub fn field_error(&self, field: Field) -> Option<FormError> {
        self.store.form().read().error(field).copied()
    }

    pub fn edit_target(&self) -> Option<ItemId> {
        self.store.form().read().mode().edit_target()
    }

    pub fn submit_label(&self) -> &'static str {
        self.store.form().read().submit_label()
    }

    pub fn set_field(&self, field: Field, value: String) {
        self.store.form().write().set_field(field, value);
    }

    /// Validate the form and dispatch its action; blocked submits only mark
    /// the missing fields
    pub fn submit(&self) {
        let outcome = self.store.form().write().submit();
        if let Ok(action) = outcome {
            self.dispatch(action);
        }
    }

    pub fn begin_edit(&self, item: &Item) {
        self.store.form().write().begin_edit(item);
    }

    pub fn erase_all(&self) {
        self.dispatch(Action::EraseAll);
    }

    fn dispatch(&self, action: Action) {
        store_dispatch(&self.store, action);
        if log::log_enabled!(log::Level::Debug) {
            let field = self.store.list();
            let list = field.read_untracked();
            match serde_json::to_string(&*list) {
                Ok(snapshot) => log::debug!("[APP] {} item(s): {}", list.len(), snapshot),
                Err(e) => log::warn!("[APP] snapshot failed: {}", e),
            }
        }
    }
}

/// Get the app context provided by [`crate::app::App`]
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(ctx: &AppContext, name: &str, description: &str) {
        ctx.set_field(Field::Name, name.to_string());
        ctx.set_field(Field::Description, description.to_string());
    }

    #[test]
    fn test_submit_adds_items() {
        Owner::new().with(|| {
            let ctx = AppContext::new();
            fill(&ctx, "Pen", "Blue ink");
            ctx.submit();
            fill(&ctx, "Book", "Novel");
            ctx.submit();

            let items = ctx.items();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].to_string(), "#1 Pen: Blue ink");
            assert_eq!(items[1].serial, 2);
            assert_eq!(ctx.field_value(Field::Name), "");
            assert_eq!(ctx.submit_label(), "Add Item");
        });
    }

    #[test]
    fn test_blocked_submit_leaves_list_untouched() {
        Owner::new().with(|| {
            let ctx = AppContext::new();
            fill(&ctx, "Pen", "");
            ctx.submit();

            assert!(ctx.is_empty());
            assert!(ctx.field_error(Field::Name).is_none());
            assert_eq!(
                ctx.field_error(Field::Description),
                Some(FormError::RequiredFieldMissing(Field::Description))
            );
            assert_eq!(ctx.field_value(Field::Name), "Pen");
        });
    }

    #[test]
    fn test_edit_updates_in_place() {
        Owner::new().with(|| {
            let ctx = AppContext::new();
            fill(&ctx, "Pen", "Blue ink");
            ctx.submit();
            fill(&ctx, "Book", "Novel");
            ctx.submit();

            let pen = ctx.items()[0].clone();
            ctx.begin_edit(&pen);
            assert_eq!(ctx.edit_target(), Some(pen.id));
            assert_eq!(ctx.submit_label(), "Update Item");
            assert_eq!(ctx.field_value(Field::Description), "Blue ink");

            ctx.set_field(Field::Description, "Black ink".to_string());
            ctx.submit();

            let items = ctx.items();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].id, pen.id);
            assert_eq!(items[0].to_string(), "#1 Pen: Black ink");
            assert_eq!(items[1].to_string(), "#2 Book: Novel");
            assert_eq!(ctx.edit_target(), None);
        });
    }

    #[test]
    fn test_erase_all_empties_store() {
        Owner::new().with(|| {
            let ctx = AppContext::new();
            ctx.erase_all();
            assert!(ctx.is_empty());

            fill(&ctx, "Pen", "Blue ink");
            ctx.submit();
            assert!(!ctx.is_empty());

            ctx.erase_all();
            assert!(ctx.is_empty());
            assert!(ctx.items().is_empty());
        });
    }
}

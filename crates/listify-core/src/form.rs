//! Form Controller
//!
//! Holds the two required text fields, validates them on submit and turns a
//! valid submission into an add or update [`Action`] depending on the mode.

use crate::error::{FieldErrors, FormError};
use crate::item::{Item, ItemDraft, ItemId};
use crate::list::Action;

/// Input fields of the item form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Name, Field::Description];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Item Name",
            Field::Description => "Item Description",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Enter name",
            Field::Description => "Enter description",
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            Field::Name => "Item name is required",
            Field::Description => "Description is required",
        }
    }
}

/// Whether the form creates a new item or edits an existing one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    Editing(ItemId),
}

impl FormMode {
    pub fn edit_target(&self) -> Option<ItemId> {
        match self {
            FormMode::Idle => None,
            FormMode::Editing(id) => Some(*id),
        }
    }
}

/// Form state: field values, edit mode and the errors of the last submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    mode: FormMode,
    values: ItemDraft,
    errors: FieldErrors,
    /// Set by a blocked submit; edits re-validate their field while set
    revalidate: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn values(&self) -> &ItemDraft {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.values.name,
            Field::Description => &self.values.description,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&FormError> {
        self.errors.get(field)
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Idle => "Add Item",
            FormMode::Editing(_) => "Update Item",
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.values.name = value,
            Field::Description => self.values.description = value,
        }
        if self.revalidate {
            match check(field, self.value(field)) {
                Some(error) => self.errors.set(error),
                None => self.errors.clear(field),
            }
        }
    }

    /// Switch to editing `item`, pre-filling its fields
    pub fn begin_edit(&mut self, item: &Item) {
        log::debug!("[FORM] editing item {}", item.id);
        *self = Self {
            mode: FormMode::Editing(item.id),
            values: item.draft(),
            ..Self::default()
        };
    }

    /// Clear fields and errors and return to idle
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check every field without changing state
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if let Some(error) = check(field, self.value(field)) {
                errors.set(error);
            }
        }
        errors
    }

    /// Produce the action for the current values, or keep the form and
    /// record the per-field errors if a required field is blank
    pub fn submit(&mut self) -> Result<Action, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            log::warn!("[FORM] submit blocked, {} field(s) missing", errors.len());
            self.errors = errors.clone();
            self.revalidate = true;
            return Err(errors);
        }

        let draft = std::mem::take(&mut self.values);
        let action = match self.mode {
            FormMode::Idle => Action::Add(draft),
            FormMode::Editing(id) => Action::Update { id, draft },
        };
        self.reset();
        Ok(action)
    }
}

fn check(field: Field, value: &str) -> Option<FormError> {
    value
        .trim()
        .is_empty()
        .then_some(FormError::RequiredFieldMissing(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{reduce, ItemList};

    fn filled(name: &str, description: &str) -> FormController {
        let mut form = FormController::new();
        form.set_field(Field::Name, name);
        form.set_field(Field::Description, description);
        form
    }

    #[test]
    fn test_initial_state_is_idle() {
        let form = FormController::new();
        assert_eq!(form.mode(), FormMode::Idle);
        assert_eq!(form.submit_label(), "Add Item");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_idle_builds_add() {
        let mut form = filled("Pen", "Blue ink");
        let action = form.submit().unwrap();
        assert_eq!(action, Action::Add(ItemDraft::new("Pen", "Blue ink")));
        assert_eq!(form.values(), &ItemDraft::default());
        assert_eq!(form.mode(), FormMode::Idle);
    }

    #[test]
    fn test_submit_empty_fields_rejected() {
        let mut form = FormController::new();
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            form.error(Field::Name),
            Some(&FormError::RequiredFieldMissing(Field::Name))
        );
        assert_eq!(
            form.error(Field::Description).map(ToString::to_string).as_deref(),
            Some("Description is required")
        );
    }

    #[test]
    fn test_whitespace_only_rejected() {
        let mut form = filled("Pen", "   \t");
        let errors = form.submit().unwrap_err();
        assert!(errors.get(Field::Name).is_none());
        assert!(errors.get(Field::Description).is_some());
        // Values are kept so the user can correct them
        assert_eq!(form.value(Field::Name), "Pen");
    }

    #[test]
    fn test_errors_revalidate_after_blocked_submit() {
        let mut form = filled("", "Blue ink");
        assert!(form.submit().is_err());
        assert!(form.error(Field::Name).is_some());

        form.set_field(Field::Name, "P");
        assert!(form.error(Field::Name).is_none());

        form.set_field(Field::Name, "");
        assert!(form.error(Field::Name).is_some());
    }

    #[test]
    fn test_no_errors_before_first_submit() {
        let mut form = FormController::new();
        form.set_field(Field::Name, "x");
        form.set_field(Field::Name, "");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_begin_edit_prefills_and_submits_update() {
        let list = reduce(ItemList::new(), Action::Add(ItemDraft::new("Pen", "Blue ink")));
        let pen = list.items()[0].clone();

        let mut form = FormController::new();
        form.begin_edit(&pen);
        assert_eq!(form.mode(), FormMode::Editing(pen.id));
        assert_eq!(form.mode().edit_target(), Some(pen.id));
        assert_eq!(form.value(Field::Name), "Pen");
        assert_eq!(form.value(Field::Description), "Blue ink");
        assert_eq!(form.submit_label(), "Update Item");

        form.set_field(Field::Description, "Black ink");
        let action = form.submit().unwrap();
        assert_eq!(
            action,
            Action::Update { id: pen.id, draft: ItemDraft::new("Pen", "Black ink") }
        );
        assert_eq!(form.mode(), FormMode::Idle);
    }

    #[test]
    fn test_begin_edit_clears_previous_errors() {
        let list = reduce(ItemList::new(), Action::Add(ItemDraft::new("Pen", "Blue ink")));
        let mut form = FormController::new();
        assert!(form.submit().is_err());

        form.begin_edit(&list.items()[0]);
        assert!(form.errors().is_empty());
    }
}

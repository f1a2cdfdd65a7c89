//! Form Validation Errors

use thiserror::Error;

use crate::form::Field;

/// Validation failure for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{}", .0.required_message())]
    RequiredFieldMissing(Field),
}

impl FormError {
    pub fn field(&self) -> Field {
        match self {
            FormError::RequiredFieldMissing(field) => *field,
        }
    }
}

/// Per-field validation results; a field is valid when it has no entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<FormError>,
    description: Option<FormError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FormError> {
        self.slot(field).as_ref()
    }

    pub fn set(&mut self, error: FormError) {
        *self.slot_mut(error.field()) = Some(error);
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Errors in field order
    pub fn iter(&self) -> impl Iterator<Item = &FormError> {
        self.name.iter().chain(self.description.iter())
    }

    fn slot(&self, field: Field) -> &Option<FormError> {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<FormError> {
        match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
        }
    }
}

//! Concrete address-form state.
//!
//! [`AddressFormState`] is the plain-struct stand-in for the company form:
//! it holds the field values, per-field dirty flags, the CEP field error and
//! the editability of the house number. The CLI drives the autofill over it;
//! tests use it to observe exactly what the controller wrote.

use std::collections::HashMap;

use funil_core::application::ports::{AddressField, AddressForm};

/// Mutable address-form state implementing the [`AddressForm`] port.
#[derive(Debug, Clone, Default)]
pub struct AddressFormState {
    values: HashMap<AddressField, String>,
    dirty: HashMap<AddressField, bool>,
    cep_error: Option<String>,
    numero_editable: bool,
}

impl AddressFormState {
    /// An empty form (create mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled from a stored record (edit mode).
    pub fn from_record(fields: &[(AddressField, &str)]) -> Self {
        let mut form = Self::new();
        for (field, value) in fields {
            form.values.insert(*field, (*value).to_string());
        }
        form
    }

    /// Whether a field was modified by the autofill or the user.
    pub fn is_dirty(&self, field: AddressField) -> bool {
        self.dirty.get(&field).copied().unwrap_or(false)
    }

    /// The current CEP field error, if any.
    pub fn cep_error(&self) -> Option<&str> {
        self.cep_error.as_deref()
    }

    /// Whether the house-number field accepts input.
    pub fn numero_editable(&self) -> bool {
        self.numero_editable
    }
}

impl AddressForm for AddressFormState {
    fn value(&self, field: AddressField) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, field: AddressField, value: &str, dirty: bool) {
        self.values.insert(field, value.to_string());
        self.dirty.insert(field, dirty);
    }

    fn set_cep_error(&mut self, message: &str) {
        self.cep_error = Some(message.to_string());
    }

    fn clear_cep_error(&mut self) {
        self.cep_error = None;
    }

    fn set_numero_editable(&mut self, editable: bool) {
        self.numero_editable = editable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clean_and_locked() {
        let form = AddressFormState::new();
        assert_eq!(form.value(AddressField::Cep), "");
        assert!(!form.is_dirty(AddressField::Cep));
        assert!(!form.numero_editable());
        assert!(form.cep_error().is_none());
    }

    #[test]
    fn tracks_dirty_per_field() {
        let mut form = AddressFormState::new();
        form.set_value(AddressField::Endereco, "Av. Paulista", true);
        form.set_value(AddressField::Numero, "1000", false);

        assert!(form.is_dirty(AddressField::Endereco));
        assert!(!form.is_dirty(AddressField::Numero));
    }

    #[test]
    fn from_record_seeds_values_clean() {
        let form = AddressFormState::from_record(&[
            (AddressField::Cep, "01310-100"),
            (AddressField::Numero, "1000"),
        ]);
        assert_eq!(form.value(AddressField::Cep), "01310-100");
        assert!(!form.is_dirty(AddressField::Cep));
    }
}

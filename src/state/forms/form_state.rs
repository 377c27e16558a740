//! Contact form state

use super::field::FormField;
use crate::i18n::{Catalog, Locale};
use crate::validation::{FieldKind, FieldState};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Index of the submit button row
const SUBMIT_ROW: usize = 4;

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new("name", "form.name", FieldKind::Name, true),
            email: FormField::new("email", "form.email", FieldKind::Email, true),
            phone: FormField::new("phone", "form.phone", FieldKind::Phone, false),
            message: FormField::multiline("message", "form.message", FieldKind::Message, true),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn fields(&self) -> [&FormField; 4] {
        [&self.name, &self.email, &self.phone, &self.message]
    }

    fn fields_mut(&mut self) -> [&mut FormField; 4] {
        [
            &mut self.name,
            &mut self.email,
            &mut self.phone,
            &mut self.message,
        ]
    }

    /// Field values in display order, paired with their rule
    pub fn inputs(&self) -> Vec<(FieldState, FieldKind)> {
        self.fields()
            .iter()
            .map(|f| (f.to_field_state(), f.kind))
            .collect()
    }

    /// Show the errors from a whole-form validation pass and focus the first failure
    pub fn apply_results(&mut self, results: &[FieldState]) {
        for field in self.fields_mut() {
            if let Some(result) = results.iter().find(|r| r.name == field.name) {
                field.apply(result);
            }
        }
        if let Some(index) = self.fields().iter().position(|f| f.has_error()) {
            self.active_field_index = index;
        }
    }

    /// Validate the active field before focus leaves it
    pub fn blur_active(&mut self, locale: Locale, catalog: &Catalog) {
        if let Some(field) = self.get_active_field_mut() {
            field.validate(locale, catalog);
        }
    }

    pub fn relocalize(&mut self, locale: Locale, catalog: &Catalog) {
        for field in self.fields_mut() {
            field.relocalize(locale, catalog);
        }
    }

    pub fn error_count(&self) -> usize {
        self.fields().iter().filter(|f| f.has_error()).count()
    }

    /// Clear every value after a successful submission
    pub fn reset(&mut self) {
        for field in self.fields_mut() {
            field.clear();
        }
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, phone, message, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.message),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.message),
            // Index 4 is the submit row, no FormField for it
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn type_into(field: &mut FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = ContactForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.name.name, "name");
            assert_eq!(form.email.name, "email");
            assert_eq!(form.phone.name, "phone");
            assert_eq!(form.message.name, "message");
            assert!(!form.phone.required);
            assert!(form.message.is_multiline);
        }

        #[test]
        fn test_field_count() {
            assert_eq!(ContactForm::new().field_count(), 5);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = ContactForm::new();
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // Wrapped back
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 4); // Wrapped to submit row
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = ContactForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "name");
            assert_eq!(form.get_field(1).unwrap().name, "email");
            assert_eq!(form.get_field(2).unwrap().name, "phone");
            assert_eq!(form.get_field(3).unwrap().name, "message");
            assert!(form.get_field(4).is_none()); // submit row
        }

        #[test]
        fn test_submit_row_has_no_active_field() {
            let mut form = ContactForm::new();
            form.set_active_field(SUBMIT_ROW);
            assert!(form.get_active_field_mut().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_ROW);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn test_inputs_follow_display_order() {
            let mut form = ContactForm::new();
            type_into(&mut form.name, " Asha ");
            let inputs = form.inputs();
            let names: Vec<&str> = inputs.iter().map(|(f, _)| f.name.as_str()).collect();
            assert_eq!(names, vec!["name", "email", "phone", "message"]);
            assert_eq!(inputs[0].0.trimmed_value, "Asha");
            assert_eq!(inputs[2].1, FieldKind::Phone);
        }

        #[test]
        fn test_blur_validates_only_active_field() {
            let mut form = ContactForm::new();
            form.blur_active(Locale::En, &catalog());
            assert!(form.name.has_error());
            assert!(!form.email.has_error());
        }

        #[test]
        fn test_blur_on_submit_row_is_noop() {
            let mut form = ContactForm::new();
            form.set_active_field(SUBMIT_ROW);
            form.blur_active(Locale::En, &catalog());
            assert_eq!(form.error_count(), 0);
        }

        #[test]
        fn test_apply_results_focuses_first_invalid() {
            let mut form = ContactForm::new();
            form.set_active_field(SUBMIT_ROW);
            let results = vec![
                FieldState::new("name", "Asha", true),
                FieldState::new("email", "x", true).into_invalid("bad email".to_string()),
                FieldState::new("phone", "", false),
                FieldState::new("message", "", true).into_invalid("required".to_string()),
            ];
            form.apply_results(&results);

            assert_eq!(form.error_count(), 2);
            assert_eq!(form.email.error.as_deref(), Some("bad email"));
            assert_eq!(form.active_field_index, 1);
        }

        #[test]
        fn test_relocalize_switches_error_language() {
            let catalog = catalog();
            let mut form = ContactForm::new();
            form.blur_active(Locale::En, &catalog);
            assert_eq!(form.name.error.as_deref(), Some("This field is required"));

            form.relocalize(Locale::Mr, &catalog);
            assert_eq!(form.name.error.as_deref(), Some("हे फील्ड आवश्यक आहे"));
            assert_eq!(form.error_count(), 1);
        }

        #[test]
        fn test_reset_clears_everything() {
            let mut form = ContactForm::new();
            type_into(&mut form.name, "Asha");
            type_into(&mut form.message, "Hello there, friends");
            form.active_field_index = 3;
            form.reset();

            assert!(form.fields().iter().all(|f| f.as_text().is_empty()));
            assert_eq!(form.active_field_index, 0);
        }
    }
}

//! Form field value objects

use crate::i18n::{Catalog, Locale};
use crate::validation::{validate, FieldKind, FieldState};

/// A single contact form input with its configuration, value and shown error
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    /// Catalog key of the label; the placeholder lives under `<key>.placeholder`
    pub label_key: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub is_multiline: bool,
    /// Localized error currently displayed under the field
    pub error: Option<String>,
}

impl FormField {
    pub fn new(name: &str, label_key: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label_key: label_key.to_string(),
            kind,
            required,
            value: String::new(),
            is_multiline: false,
            error: None,
        }
    }

    /// Create a multiline text area
    pub fn multiline(name: &str, label_key: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            is_multiline: true,
            ..Self::new(name, label_key, kind, required)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn placeholder_key(&self) -> String {
        format!("{}.placeholder", self.label_key)
    }

    /// Push a character to the field value; typing clears the shown error
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.error = None;
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.error = None;
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Snapshot for the validator
    pub fn to_field_state(&self) -> FieldState {
        FieldState::new(&self.name, &self.value, self.required)
    }

    /// Show (or clear) the error carried by a validation result
    pub fn apply(&mut self, result: &FieldState) {
        self.error = (!result.is_valid).then(|| result.error_message.clone());
    }

    /// Validate the current value (the field lost focus)
    pub fn validate(&mut self, locale: Locale, catalog: &Catalog) -> bool {
        let result = validate(self.to_field_state(), self.kind, locale, catalog);
        self.apply(&result);
        result.is_valid
    }

    /// Re-render a shown error in another locale; validity is untouched
    pub fn relocalize(&mut self, locale: Locale, catalog: &Catalog) {
        if self.has_error() {
            self.validate(locale, catalog);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[test]
    fn test_new_field_is_empty_without_error() {
        let field = FormField::new("name", "form.name", FieldKind::Name, true);
        assert_eq!(field.as_text(), "");
        assert!(!field.has_error());
        assert!(!field.is_multiline);
        assert_eq!(field.placeholder_key(), "form.name.placeholder");
    }

    #[test]
    fn test_multiline_constructor() {
        let field = FormField::multiline("message", "form.message", FieldKind::Message, true);
        assert!(field.is_multiline);
        assert!(field.required);
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::new("name", "form.name", FieldKind::Name, true);
        field.push_char('A');
        field.push_char('l');
        assert_eq!(field.as_text(), "Al");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_typing_clears_error() {
        let mut field = FormField::new("name", "form.name", FieldKind::Name, true);
        assert!(!field.validate(Locale::En, &catalog()));
        assert!(field.has_error());

        field.push_char('A');
        assert!(!field.has_error());
    }

    #[test]
    fn test_validate_sets_localized_error() {
        let mut field = FormField::new("email", "form.email", FieldKind::Email, true);
        for c in "foo.com".chars() {
            field.push_char(c);
        }
        assert!(!field.validate(Locale::En, &catalog()));
        assert_eq!(
            field.error.as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_relocalize_only_touches_invalid_fields() {
        let catalog = catalog();
        let mut invalid = FormField::new("name", "form.name", FieldKind::Name, true);
        invalid.validate(Locale::En, &catalog);
        let mut valid = FormField::new("phone", "form.phone", FieldKind::Phone, false);
        valid.validate(Locale::En, &catalog);

        invalid.relocalize(Locale::Mr, &catalog);
        valid.relocalize(Locale::Mr, &catalog);

        assert_eq!(invalid.error.as_deref(), Some("हे फील्ड आवश्यक आहे"));
        assert!(!valid.has_error());
    }

    #[test]
    fn test_clear_resets_value_and_error() {
        let mut field = FormField::new("name", "form.name", FieldKind::Name, true);
        field.push_char('A');
        field.validate(Locale::En, &catalog());
        field.clear();
        assert_eq!(field.as_text(), "");
        assert!(!field.has_error());
    }
}

//! Form domain layer
//!
//! Type-safe form handling for the contact form: field values, focus
//! movement and the errors currently on display.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{ContactForm, Form};

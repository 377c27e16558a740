//! Contact form field validation
//!
//! Pure functions only: callers supply the field value, its kind and the
//! active locale, and apply the resulting [`FieldState`] to the UI.

mod field;
mod validator;

pub use field::{FieldKind, FieldState};
pub use validator::validate;

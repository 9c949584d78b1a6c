//! Field-level validation rules.
//!
//! Validation is advisory: callers get a boolean (or the first offending
//! field) and decide whether to proceed. Nothing here touches storage.

use crate::model::Field;

/// A field value that failed its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub value: String,
}

impl Violation {
    pub fn message(&self) -> String {
        if self.field.is_phone() {
            format!(
                "Invalid {}: {:?} must be 8 followed by 10 characters",
                self.field, self.value
            )
        } else {
            format!("Invalid {}: value must not be blank", self.field)
        }
    }
}

/// Name-like fields must be non-blank after trimming; phone-like fields must
/// match the phone format.
pub fn field_is_valid(field: Field, value: &str) -> bool {
    if field.is_phone() {
        phone_ok(value)
    } else {
        !value.trim().is_empty()
    }
}

/// Returns the first field that fails its rule, if any.
pub fn first_violation<'a, I>(fields: I) -> Option<Violation>
where
    I: IntoIterator<Item = (Field, &'a str)>,
{
    fields.into_iter().find_map(|(field, value)| {
        if field_is_valid(field, value) {
            None
        } else {
            Some(Violation {
                field,
                value: value.to_string(),
            })
        }
    })
}

/// True when every given field passes its rule.
pub fn validate<'a, I>(fields: I) -> bool
where
    I: IntoIterator<Item = (Field, &'a str)>,
{
    first_violation(fields).is_none()
}

// A leading literal `8` plus exactly ten further characters, counted as
// chars. The tail is unrestricted; existing data files rely on this.
fn phone_ok(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next() == Some('8') && chars.count() == 10
}

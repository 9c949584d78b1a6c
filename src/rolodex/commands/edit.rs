use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Field;
use crate::store::ContactStore;
use crate::validate;

/// Overwrites one field of the contact at the given 1-based position.
/// Nothing is written unless the new value passes validation (and, for phone
/// fields, the uniqueness scan).
pub fn run<S: ContactStore>(
    store: &mut S,
    position: usize,
    field: Field,
    value: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut contacts = store.load()?;

    if position == 0 || position > contacts.len() {
        result.add_message(CmdMessage::error(format!(
            "No contact at position {}",
            position
        )));
        return Ok(result);
    }

    if let Some(violation) = validate::first_violation([(field, value)]) {
        result.add_message(CmdMessage::error(violation.message()));
        return Ok(result);
    }

    if field.is_phone() {
        if let Some(clash) = helpers::find_clash_any(&contacts, value) {
            result.add_message(CmdMessage::error(clash.message()));
            return Ok(result);
        }
    }

    contacts[position - 1].set_field(field, value.to_string());
    store.save(&contacts)?;

    result.add_message(CmdMessage::success(format!(
        "Updated {} of contact {}",
        field, position
    )));
    result.affected.push(contacts[position - 1].clone());
    Ok(result)
}

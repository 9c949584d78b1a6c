use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactDraft;
use crate::store::ContactStore;
use crate::validate;

pub fn run<S: ContactStore>(store: &mut S, draft: ContactDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(violation) = validate::first_violation(draft.fields()) {
        result.add_message(CmdMessage::error(violation.message()));
        return Ok(result);
    }

    let contacts = store.load_or_empty()?;
    if let Some(clash) = helpers::find_clash(&contacts, &draft.work_phone, &draft.personal_phone) {
        result.add_message(CmdMessage::error(clash.message()));
        return Ok(result);
    }

    let contact = store.append(draft)?;
    result.add_message(CmdMessage::success(format!(
        "Contact added: {} {} (pk {})",
        contact.name, contact.last_name, contact.pk
    )));
    result.affected.push(contact);
    Ok(result)
}

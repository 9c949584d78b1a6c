use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Contact, Field};
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &S, field: Field, target: &str) -> Result<CmdResult> {
    let mut sorted = store.load()?;
    sorted.sort_by(|a, b| a.field(field).cmp(b.field(field)));

    let listed = find_block(&sorted, field, target);
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No contacts with {} = {:?}",
            field, target
        )));
    }
    Ok(result.with_listed(listed))
}

/// Classic binary search over the sorted copy, then linear expansion to both
/// sides while neighbors still equal the target. Equal keys form one
/// contiguous block in a sorted sequence, so the expansion finds every match.
/// Keys compare lexicographically on their string form.
fn find_block(sorted: &[Contact], field: Field, target: &str) -> Vec<Contact> {
    if sorted.is_empty() {
        return Vec::new();
    }

    let mut low = 0usize;
    let mut high = sorted.len() - 1;
    while low <= high {
        let mid = (low + high) / 2;
        let key = sorted[mid].field(field);

        if key == target {
            let mut left = mid;
            while left > 0 && sorted[left - 1].field(field) == target {
                left -= 1;
            }
            let mut right = mid;
            while right + 1 < sorted.len() && sorted[right + 1].field(field) == target {
                right += 1;
            }
            return sorted[left..=right].to_vec();
        } else if key < target {
            low = mid + 1;
        } else {
            if mid == 0 {
                break;
            }
            high = mid - 1;
        }
    }

    Vec::new()
}

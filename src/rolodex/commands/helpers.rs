use crate::model::Contact;

/// A phone value that collided with an existing record, and the column it
/// collided in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneClash {
    Work(String),
    Personal(String),
}

impl PhoneClash {
    pub fn message(&self) -> String {
        match self {
            PhoneClash::Work(value) => {
                format!("Work phone {} is already in the directory", value)
            }
            PhoneClash::Personal(value) => {
                format!("Personal phone {} is already in the directory", value)
            }
        }
    }
}

/// Two-value form: each candidate is checked against its own column.
/// Scans linearly and stops at the first colliding record.
pub fn find_clash(
    contacts: &[Contact],
    work_phone: &str,
    personal_phone: &str,
) -> Option<PhoneClash> {
    for contact in contacts {
        if contact.work_phone == work_phone {
            return Some(PhoneClash::Work(work_phone.to_string()));
        }
        if contact.personal_phone == personal_phone {
            return Some(PhoneClash::Personal(personal_phone.to_string()));
        }
    }
    None
}

/// Single-value form: one candidate checked against both columns.
pub fn find_clash_any(contacts: &[Contact], value: &str) -> Option<PhoneClash> {
    find_clash(contacts, value, value)
}

/// True when neither phone is taken.
pub fn is_unique(contacts: &[Contact], work_phone: &str, personal_phone: &str) -> bool {
    find_clash(contacts, work_phone, personal_phone).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::draft;

    fn contacts() -> Vec<Contact> {
        vec![draft(1).into_contact(1), draft(2).into_contact(2)]
    }

    #[test]
    fn test_two_value_form_checks_respective_columns() {
        let contacts = contacts();

        // draft(1) has work 80000000001, personal 80000005001
        assert!(matches!(
            find_clash(&contacts, "80000000001", "89999999999"),
            Some(PhoneClash::Work(_))
        ));
        assert!(matches!(
            find_clash(&contacts, "89999999999", "80000005002"),
            Some(PhoneClash::Personal(_))
        ));
        assert!(is_unique(&contacts, "89999999999", "89999999998"));

        // A work number used as a personal candidate does not collide in the
        // two-value form.
        assert!(is_unique(&contacts, "89999999999", "80000000001"));
    }

    #[test]
    fn test_single_value_form_checks_both_columns() {
        let contacts = contacts();

        assert!(find_clash_any(&contacts, "80000000002").is_some());
        assert!(find_clash_any(&contacts, "80000005001").is_some());
        assert!(find_clash_any(&contacts, "89999999999").is_none());
    }

    #[test]
    fn test_empty_set_has_no_clashes() {
        assert!(is_unique(&[], "80000000001", "80000000001"));
    }

    #[test]
    fn test_clash_message_names_the_column() {
        let contacts = contacts();
        let clash = find_clash(&contacts, "80000000001", "x").unwrap();
        assert!(clash.message().contains("Work phone 80000000001"));
    }
}

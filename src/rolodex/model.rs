use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One entry in the directory.
///
/// The serde renames pin the on-disk keys to the legacy format
/// (`surname`, `name_company`, `work_number`, `member_phone`) so existing
/// data files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub last_name: String,
    #[serde(rename = "surname")]
    pub patronymic: String,
    #[serde(rename = "name_company")]
    pub company: String,
    #[serde(rename = "work_number")]
    pub work_phone: String,
    #[serde(rename = "member_phone")]
    pub personal_phone: String,
    pub pk: u64,
}

impl Contact {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::LastName => &self.last_name,
            Field::Patronymic => &self.patronymic,
            Field::Company => &self.company,
            Field::WorkPhone => &self.work_phone,
            Field::PersonalPhone => &self.personal_phone,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::LastName => self.last_name = value,
            Field::Patronymic => self.patronymic = value,
            Field::Company => self.company = value,
            Field::WorkPhone => self.work_phone = value,
            Field::PersonalPhone => self.personal_phone = value,
        }
    }
}

/// The six collected fields of a contact, before an identifier is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub last_name: String,
    pub patronymic: String,
    pub company: String,
    pub work_phone: String,
    pub personal_phone: String,
}

impl ContactDraft {
    /// All fields paired with their selector, in display order.
    pub fn fields(&self) -> [(Field, &str); 6] {
        [
            (Field::Name, self.name.as_str()),
            (Field::LastName, self.last_name.as_str()),
            (Field::Patronymic, self.patronymic.as_str()),
            (Field::Company, self.company.as_str()),
            (Field::WorkPhone, self.work_phone.as_str()),
            (Field::PersonalPhone, self.personal_phone.as_str()),
        ]
    }

    pub fn into_contact(self, pk: u64) -> Contact {
        Contact {
            name: self.name,
            last_name: self.last_name,
            patronymic: self.patronymic,
            company: self.company,
            work_phone: self.work_phone,
            personal_phone: self.personal_phone,
            pk,
        }
    }
}

/// Selector for one of the six searchable/editable attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    LastName,
    Patronymic,
    Company,
    WorkPhone,
    PersonalPhone,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::LastName,
        Field::Patronymic,
        Field::Company,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    /// Phone-like fields get the phone format rule and the uniqueness scan.
    pub fn is_phone(self) -> bool {
        matches!(self, Field::WorkPhone | Field::PersonalPhone)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::LastName => "last name",
            Field::Patronymic => "patronymic",
            Field::Company => "company",
            Field::WorkPhone => "work phone",
            Field::PersonalPhone => "personal phone",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Field {
    type Err = String;

    /// Accepts the kebab-case name, the on-disk key, or the numeric menu key
    /// `1`-`6` the original console interface used.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "name" => Ok(Field::Name),
            "2" | "last-name" | "last_name" => Ok(Field::LastName),
            "3" | "patronymic" | "surname" => Ok(Field::Patronymic),
            "4" | "company" | "name_company" => Ok(Field::Company),
            "5" | "work-phone" | "work_number" => Ok(Field::WorkPhone),
            "6" | "personal-phone" | "member_phone" => Ok(Field::PersonalPhone),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

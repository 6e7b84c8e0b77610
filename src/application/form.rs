//! Raw text form behind the entry screen and the edit dialog.
//!
//! Field values stay as typed until submit; only `age` is coerced.

use crate::domain::{UserDraft, UserError, UserRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    LastName,
    FirstName,
    Age,
    Email,
    Addresses,
    NationalId,
}

impl UserField {
    /// Display order used by both forms and the table.
    pub const ALL: [UserField; 6] = [
        UserField::LastName,
        UserField::FirstName,
        UserField::Age,
        UserField::Email,
        UserField::Addresses,
        UserField::NationalId,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserField::LastName => "Last Name",
            UserField::FirstName => "First Name",
            UserField::Age => "Age",
            UserField::Email => "Email",
            UserField::Addresses => "Addresses",
            UserField::NationalId => "National ID",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub last_name: String,
    pub first_name: String,
    pub age: String,
    pub email: String,
    pub addresses: String,
    pub national_id: String,
}

impl UserForm {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            last_name: record.last_name.clone(),
            first_name: record.first_name.clone(),
            age: record.age.to_string(),
            email: record.email.clone(),
            addresses: record.addresses.clone(),
            national_id: record.national_id.clone(),
        }
    }

    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::LastName => &self.last_name,
            UserField::FirstName => &self.first_name,
            UserField::Age => &self.age,
            UserField::Email => &self.email,
            UserField::Addresses => &self.addresses,
            UserField::NationalId => &self.national_id,
        }
    }

    pub fn set(&mut self, field: UserField, value: String) {
        let slot = match field {
            UserField::LastName => &mut self.last_name,
            UserField::FirstName => &mut self.first_name,
            UserField::Age => &mut self.age,
            UserField::Email => &mut self.email,
            UserField::Addresses => &mut self.addresses,
            UserField::NationalId => &mut self.national_id,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Coerce the raw values into a draft. Fails only when `age` is not an integer.
    pub fn to_draft(&self) -> Result<UserDraft, UserError> {
        let age = self.age.trim().parse::<i64>().map_err(|_| {
            UserError::invalid_input("age", format!("'{}' is not an integer", self.age))
        })?;

        Ok(UserDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age,
            email: self.email.clone(),
            addresses: self.addresses.clone(),
            national_id: self.national_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> UserForm {
        let mut form = UserForm::default();
        form.set(UserField::LastName, "Doe".into());
        form.set(UserField::FirstName, "Jane".into());
        form.set(UserField::Age, "30".into());
        form.set(UserField::Email, "j@x.com".into());
        form.set(UserField::Addresses, "1 Main St".into());
        form.set(UserField::NationalId, "A123".into());
        form
    }

    #[test]
    fn test_to_draft_coerces_age() {
        let draft = filled_form().to_draft().unwrap();
        assert_eq!(draft.age, 30);
        assert_eq!(draft.first_name, "Jane");
        assert_eq!(draft.last_name, "Doe");
        assert_eq!(draft.national_id, "A123");
    }

    #[test]
    fn test_to_draft_tolerates_surrounding_whitespace() {
        let mut form = filled_form();
        form.set(UserField::Age, " 42 ".into());
        assert_eq!(form.to_draft().unwrap().age, 42);
    }

    #[test]
    fn test_to_draft_rejects_non_numeric_age() {
        for raw in ["", "abc", "30.5", "3 0"] {
            let mut form = filled_form();
            form.set(UserField::Age, raw.into());
            let err = form.to_draft().unwrap_err();
            assert!(
                matches!(err, UserError::InvalidInput { field: "age", .. }),
                "expected InvalidInput for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_other_fields_are_not_validated() {
        let mut form = UserForm::default();
        form.set(UserField::Age, "0".into());
        let draft = form.to_draft().unwrap();
        assert!(draft.email.is_empty());
        assert!(draft.national_id.is_empty());
    }

    #[test]
    fn test_from_record_round_trips_values() {
        let draft = filled_form().to_draft().unwrap();
        let record = UserRecord::from_draft(3, draft);
        let form = UserForm::from_record(&record);
        assert_eq!(form, filled_form());
        for field in UserField::ALL {
            assert_eq!(form.get(field), filled_form().get(field));
        }
    }

    #[test]
    fn test_clear_empties_every_field() {
        let mut form = filled_form();
        form.clear();
        assert!(UserField::ALL.iter().all(|f| form.get(*f).is_empty()));
    }
}

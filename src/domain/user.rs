use serde::{Deserialize, Serialize};

/// Store-assigned row identifier. Monotonic, never reused after a delete.
pub type UserId = i64;

/// The six caller-supplied fields of a user, used for both inserts and updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub addresses: String,
    pub national_id: String,
}

/// A persisted user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub addresses: String,
    pub national_id: String,
}

impl UserRecord {
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            age: draft.age,
            email: draft.email,
            addresses: draft.addresses,
            national_id: draft.national_id,
        }
    }

    /// Editable fields of this record, everything but `id`.
    pub fn draft(&self) -> UserDraft {
        UserDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            email: self.email.clone(),
            addresses: self.addresses.clone(),
            national_id: self.national_id.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

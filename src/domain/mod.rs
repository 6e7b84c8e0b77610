//! Domain types for the user registry.
//! Defines the user record, its editable draft, and the error taxonomy shared by every layer.

pub mod error;
pub mod user;

pub use error::*;
pub use user::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> UserDraft {
        UserDraft {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            age: 30,
            email: "j@x.com".into(),
            addresses: "1 Main St".into(),
            national_id: "A123".into(),
        }
    }

    #[test]
    fn test_record_draft_drops_only_the_id() {
        let record = UserRecord::from_draft(7, sample_draft());
        assert_eq!(record.id, 7);
        assert_eq!(record.draft(), sample_draft());
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        let mut record = UserRecord::from_draft(1, sample_draft());
        assert_eq!(record.full_name(), "Jane Doe");
        record.first_name.clear();
        assert_eq!(record.full_name(), "Doe");
    }

    #[test]
    fn test_user_error_messages() {
        assert_eq!(
            UserError::invalid_input("age", "'abc' is not an integer").to_string(),
            "Invalid age: 'abc' is not an integer"
        );
        assert_eq!(
            UserError::UniquenessViolation("A123".into()).to_string(),
            "National ID A123 is already registered"
        );
        assert_eq!(UserError::NotFound(4).to_string(), "User 4 not found");
        assert!(UserError::invalid_input("age", "x").is_client_side());
        assert!(!UserError::NotFound(1).is_client_side());
    }
}

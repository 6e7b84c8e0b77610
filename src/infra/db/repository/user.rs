use super::DbConn;
use crate::domain::{UserDraft, UserError, UserId, UserRecord};
use rusqlite::{ErrorCode, OptionalExtension, Row};

const SELECT_USER: &str =
    "SELECT id, first_name, last_name, age, email, addresses, national_id FROM users";

/// Repository for the `users` table.
///
/// Statements run in autocommit mode, so every successful write is durable
/// before the call returns and a failed write leaves the table untouched.
pub struct UserRepository {
    conn: DbConn,
}

impl UserRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Append a user and return the id the store assigned to it.
    pub fn insert(&self, draft: &UserDraft) -> Result<UserId, UserError> {
        let conn = self.conn.lock();
        conn.execute(
            r#"
            INSERT INTO users (first_name, last_name, age, email, addresses, national_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            (
                &draft.first_name,
                &draft.last_name,
                draft.age,
                &draft.email,
                &draft.addresses,
                &draft.national_id,
            ),
        )
        .map_err(|err| write_error(err, &draft.national_id))?;
        Ok(conn.last_insert_rowid())
    }

    /// Every user, oldest first.
    pub fn list_all(&self) -> Result<Vec<UserRecord>, UserError> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare(&format!("{SELECT_USER} ORDER BY id ASC"))
            .map_err(store_error)?;

        let rows = stmt.query_map([], row_to_user).map_err(store_error)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(store_error)
    }

    pub fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, UserError> {
        let conn = self.conn.lock();
        conn.query_row(&format!("{SELECT_USER} WHERE id = ?1"), [id], row_to_user)
            .optional()
            .map_err(store_error)
    }

    /// Replace every field but `id`.
    pub fn update(&self, id: UserId, draft: &UserDraft) -> Result<(), UserError> {
        let conn = self.conn.lock();
        let affected = conn
            .execute(
                r#"
                UPDATE users
                SET first_name = ?1, last_name = ?2, age = ?3, email = ?4, addresses = ?5, national_id = ?6
                WHERE id = ?7
                "#,
                (
                    &draft.first_name,
                    &draft.last_name,
                    draft.age,
                    &draft.email,
                    &draft.addresses,
                    &draft.national_id,
                    id,
                ),
            )
            .map_err(|err| write_error(err, &draft.national_id))?;

        if affected == 0 {
            return Err(UserError::NotFound(id));
        }
        Ok(())
    }

    /// Remove a user. Returns whether a row was removed; a missing id is not an error.
    pub fn delete(&self, id: UserId) -> Result<bool, UserError> {
        let conn = self.conn.lock();
        let affected = conn
            .execute("DELETE FROM users WHERE id = ?1", [id])
            .map_err(store_error)?;
        Ok(affected > 0)
    }

    pub fn count(&self) -> Result<usize, UserError> {
        let conn = self.conn.lock();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .map_err(store_error)?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

fn row_to_user(row: &Row<'_>) -> rusqlite::Result<UserRecord> {
    Ok(UserRecord {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        age: row.get(3)?,
        email: row.get(4)?,
        addresses: row.get(5)?,
        national_id: row.get(6)?,
    })
}

fn store_error(err: rusqlite::Error) -> UserError {
    log::error!("user store failure: {}", err);
    UserError::StoreUnavailable(err.to_string())
}

fn write_error(err: rusqlite::Error, national_id: &str) -> UserError {
    let is_unique_violation = matches!(
        &err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    );

    if is_unique_violation {
        log::warn!("rejected duplicate national id {}", national_id);
        UserError::UniquenessViolation(national_id.to_string())
    } else {
        store_error(err)
    }
}

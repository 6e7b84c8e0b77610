use crate::domain::{UserDraft, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDataRefreshReason {
    Manual,
    Navigation,
    AfterUpdate,
    AfterDelete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Authenticate { username: String, password: String },
    InsertUser { draft: UserDraft },
    RefreshUsers { reason: UserDataRefreshReason },
    UpdateUser { id: UserId, draft: UserDraft },
    DeleteUser { id: UserId },
}

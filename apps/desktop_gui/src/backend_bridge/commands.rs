//! Backend commands queued from UI to backend worker.

use shared::{domain::UserId, protocol::UserDraft};

pub enum BackendCommand {
    LoadUsers,
    CreateUser {
        draft: UserDraft,
    },
    UpdateUser {
        user_id: UserId,
        draft: UserDraft,
    },
    DeleteUser {
        user_id: UserId,
    },
}

//! UI/backend events and error modeling for the desktop GUI controller.

use shared::domain::{UserId, UserRecord};

pub enum UiEvent {
    Info(String),
    /// Full replacement of the in-memory user list. Sent after the initial
    /// load and after every mutation; records are never patched in place.
    UsersLoaded(Vec<UserRecord>),
    UserSaved(UserRecord),
    UserDeleted(UserId),
    Error(UiError),
}

/// The logical operation a failure belongs to. Each maps to one fixed
/// user-facing message; the raw error detail is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOp {
    Load,
    Fetch,
    Create,
    Update,
    Delete,
}

pub fn operation_error_message(op: UserOp) -> &'static str {
    match op {
        UserOp::Load => "Error al cargar los usuarios. Asegúrate de que el servidor esté corriendo.",
        UserOp::Fetch => "Usuario no encontrado",
        UserOp::Create => "Error al crear usuario",
        UserOp::Update => "Error al actualizar usuario",
        UserOp::Delete => "Error al eliminar usuario",
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    op: UserOp,
    detail: String,
}

impl UiError {
    pub fn new(op: UserOp, detail: impl Into<String>) -> Self {
        Self {
            op,
            detail: detail.into(),
        }
    }

    pub fn op(&self) -> UserOp {
        self.op
    }

    /// The fixed banner text for this operation. Never includes the detail.
    pub fn message(&self) -> &'static str {
        operation_error_message(self.op)
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_operation_has_a_distinct_fixed_message() {
        let ops = [
            UserOp::Load,
            UserOp::Fetch,
            UserOp::Create,
            UserOp::Update,
            UserOp::Delete,
        ];
        for (i, a) in ops.iter().enumerate() {
            for b in ops.iter().skip(i + 1) {
                assert_ne!(operation_error_message(*a), operation_error_message(*b));
            }
        }
    }

    #[test]
    fn banner_message_hides_the_raw_detail() {
        let err = UiError::new(UserOp::Load, "connection refused (os error 111)");
        assert_eq!(
            err.message(),
            "Error al cargar los usuarios. Asegúrate de que el servidor esté corriendo."
        );
        assert!(!err.message().contains("connection refused"));
        assert_eq!(err.detail(), "connection refused (os error 111)");
    }
}

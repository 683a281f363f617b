//! Wire payloads exchanged with the users REST API.

use serde::{Deserialize, Serialize};

/// Request body for create and update calls. Same shape as a record minus
/// the server-assigned id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_draft_with_camel_case_fields() {
        let draft = UserDraft {
            full_name: "Ana García".to_string(),
            email: "ana@correo.com".to_string(),
            phone_number: None,
        };

        let json = serde_json::to_value(&draft).expect("json");
        assert!(json.get("fullName").is_some());
        assert!(json.get("phoneNumber").is_some());
        assert!(json.get("full_name").is_none());
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// A user record as served by the REST backend. The id is server-assigned
/// and never changes from the client's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_wire_record() {
        let record: UserRecord = serde_json::from_str(
            r#"{"id":7,"fullName":"Ana García","email":"ana@correo.com","phoneNumber":"123456789"}"#,
        )
        .expect("record");

        assert_eq!(record.id, UserId(7));
        assert_eq!(record.full_name, "Ana García");
        assert_eq!(record.phone_number.as_deref(), Some("123456789"));
    }

    #[test]
    fn tolerates_missing_phone_number() {
        let record: UserRecord = serde_json::from_str(
            r#"{"id":1,"fullName":"Juan Pérez","email":"juan@correo.com","phoneNumber":null}"#,
        )
        .expect("record");

        assert_eq!(record.phone_number, None);
    }
}

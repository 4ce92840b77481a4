//! # Account wire types
//!
//! Bodies for the two account endpoints:
//!
//! - `POST /login` takes a [`LoginRequest`] and answers with a [`LoginResponse`]
//!   (`{"message": ..., "user_id": 7, "name": "ann"}`).
//! - `POST /users` takes a [`NewUser`] and answers with a [`CreatedUser`], the
//!   backend's public projection of the stored account (never the password hash).
//!
//! Response fields are all optional so that a well-formed but incomplete answer
//! decodes and can be reported as an unexpected response instead of a decode error.

use serde::{Deserialize, Serialize};
use store::UserId;

/// Credentials sent to `POST /login`. The password travels as typed; the backend hashes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Answer to a successful credential check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Account creation body for `POST /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub mobile_number: String,
    pub email: String,
    pub password: String,
}

/// Account record returned by `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatedUser {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_tolerates_missing_fields() {
        let response: LoginResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(response.user_id, None);
        assert_eq!(response.name, None);

        let response: LoginResponse =
            serde_json::from_str(r#"{"message":"Login successful","user_id":7,"name":"ann"}"#)
                .unwrap();
        assert_eq!(response.user_id, Some(UserId(7)));
        assert_eq!(response.name.as_deref(), Some("ann"));
    }

    #[test]
    fn test_new_user_field_names() {
        let body = serde_json::to_value(NewUser {
            name: "ann".into(),
            mobile_number: "5550100".into(),
            email: "ann@example.com".into(),
            password: "pw".into(),
        })
        .unwrap();
        assert_eq!(body["mobile_number"], "5550100");
        assert_eq!(body["password"], "pw");
        assert!(body.get("password_hash").is_none());
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::shared::constants::DEFAULT_USER_MARKER;

/// Identifier the backend's `/login` expects next to the password.
///
/// The dashboard generation logs in by email, the public page by phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginField {
    Email,
    Phone,
}

impl FromStr for LoginField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(LoginField::Email),
            "phone" => Ok(LoginField::Phone),
            other => Err(format!(
                "DALIL_LOGIN_FIELD must be 'email' or 'phone', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginField::Email => write!(f, "email"),
            LoginField::Phone => write!(f, "phone"),
        }
    }
}

/// Request body for `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

impl LoginRequest {
    pub fn new(field: LoginField, identifier: &str, password: &str) -> Self {
        let (email, phone) = match field {
            LoginField::Email => (Some(identifier.to_string()), None),
            LoginField::Phone => (None, Some(identifier.to_string())),
        };
        Self {
            email,
            phone,
            password: password.to_string(),
        }
    }
}

/// A successful login, by the response shape it arrived in
#[derive(Debug, Clone, PartialEq)]
pub enum LoginGrant {
    /// `{ token, user }` at the top level
    TopLevelToken { token: String, user: Value },
    /// `{ status: "success", data: "<token>" }`
    DataToken { token: String },
    /// `{ data: { token, user } }`
    NestedDataToken { token: String, user: Value },
}

impl LoginGrant {
    /// Pick the token out of a login response body; a body carrying no
    /// token fails with the backend's message.
    pub fn parse(body: &Value) -> Result<Self> {
        if let Some(token) = non_empty_str(body.get("token")) {
            return Ok(LoginGrant::TopLevelToken {
                token,
                user: body.get("user").cloned().unwrap_or(Value::Null),
            });
        }

        let succeeded = body.get("status").and_then(Value::as_str) == Some("success");
        if succeeded {
            if let Some(token) = non_empty_str(body.get("data")) {
                return Ok(LoginGrant::DataToken { token });
            }
        }

        if let Some(data) = body.get("data").filter(|d| d.is_object()) {
            if let Some(token) = non_empty_str(data.get("token")) {
                return Ok(LoginGrant::NestedDataToken {
                    token,
                    user: data.get("user").cloned().unwrap_or(Value::Null),
                });
            }
        }

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("login response did not include a token");
        Err(AppError::Api(message.to_string()))
    }

    pub fn token(&self) -> &str {
        match self {
            LoginGrant::TopLevelToken { token, .. }
            | LoginGrant::DataToken { token }
            | LoginGrant::NestedDataToken { token, .. } => token,
        }
    }

    /// What gets persisted under the `user` key next to the token
    pub fn user_marker(&self) -> Value {
        match self {
            LoginGrant::TopLevelToken { user, .. } | LoginGrant::NestedDataToken { user, .. }
                if !user.is_null() =>
            {
                user.clone()
            }
            _ => Value::String(DEFAULT_USER_MARKER.to_string()),
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

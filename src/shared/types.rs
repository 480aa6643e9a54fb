use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::{AppError, Result};

/// Envelope status the backend reports next to every payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
    /// Anything else the backend may send; treated like success
    #[serde(other)]
    Unknown,
}

/// The `{ status, data, message, token }` wrapper every endpoint returns.
///
/// All fields are optional on the wire: older endpoints omit `status`,
/// the dashboard login answers with a top-level `token`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: Option<EnvelopeStatus>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl Envelope {
    /// Decode an envelope from a parsed body. Non-object bodies fail closed.
    pub fn from_value(body: &Value) -> Result<Self> {
        if !body.is_object() {
            return Err(AppError::Decode(format!(
                "expected a JSON object envelope, got {}",
                json_kind(body)
            )));
        }
        Ok(serde_json::from_value(body.clone())?)
    }

    pub fn is_error(&self) -> bool {
        self.status == Some(EnvelopeStatus::Error)
    }

    /// `data` as a list; absent or null data is an empty list
    pub fn into_list<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        match self.data {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(AppError::from))
                .collect(),
            Some(other) => Err(AppError::Decode(format!(
                "expected a list in `data`, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// `data` as a mapping; absent or null data is an empty mapping
    pub fn into_map(self) -> Result<Map<String, Value>> {
        match self.data {
            None | Some(Value::Null) => Ok(Map::new()),
            Some(Value::Object(map)) => Ok(map),
            Some(other) => Err(AppError::Decode(format!(
                "expected an object in `data`, got {}",
                json_kind(&other)
            ))),
        }
    }
}

/// Payload of a write call: `data` when the backend sent a meaningful one,
/// the whole body otherwise.
pub fn data_or_body(body: Value) -> Value {
    match body.get("data") {
        Some(data) if is_truthy(data) => data.clone(),
        _ => body,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

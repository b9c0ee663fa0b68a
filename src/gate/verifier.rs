//! Name verification against the celebration backend.

use serde::Deserialize;
use serde_json::Value;
use std::error::Error;
use std::fmt;

/// Why a verification attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The request never got a response.
    Transport(String),
    /// The server answered with a non-success status.
    Status { code: u16, body: String },
    /// The response body was not the expected JSON.
    Decode(String),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) | Self::Decode(msg) => write!(f, "{}", msg),
            Self::Status { code, body } if body.trim().is_empty() => write!(f, "HTTP {}", code),
            Self::Status { body, .. } => write!(f, "{}", body.trim()),
        }
    }
}

impl Error for VerifyError {}

/// Decides whether a visitor is the guest of honour.
pub trait NameVerifier: Send + Sync {
    /// Returns true for the birthday guest, false for a well-wisher.
    fn verify(&self, name: &str) -> Result<bool, VerifyError>;
}

/// JSON reply from the auth endpoint. Any truthy flag admits the guest.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VerifyResponse {
    #[serde(rename = "match")]
    pub is_match: Option<Value>,
    #[serde(rename = "isBirthday")]
    pub is_birthday: Option<Value>,
    pub matched: Option<Value>,
}

impl VerifyResponse {
    pub fn is_guest_of_honour(&self) -> bool {
        [&self.is_match, &self.is_birthday, &self.matched]
            .into_iter()
            .flatten()
            .any(is_truthy)
    }
}

/// JavaScript truthiness for a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// POSTs `{"name": ...}` to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpNameVerifier {
    endpoint: String,
}

impl HttpNameVerifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl NameVerifier for HttpNameVerifier {
    fn verify(&self, name: &str) -> Result<bool, VerifyError> {
        let response = ureq::post(&self.endpoint)
            .set("User-Agent", "frolic")
            .send_json(ureq::json!({ "name": name }));

        let response = match response {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(VerifyError::Status { code, body });
            }
            Err(err) => return Err(VerifyError::Transport(err.to_string())),
        };

        let reply: VerifyResponse = response
            .into_json()
            .map_err(|e| VerifyError::Decode(e.to_string()))?;
        Ok(reply.is_guest_of_honour())
    }
}

/// Answers without a network round-trip.
#[derive(Debug, Clone)]
pub struct FixedVerifier {
    pub outcome: Result<bool, VerifyError>,
}

impl FixedVerifier {
    pub fn admit(guest_of_honour: bool) -> Self {
        Self {
            outcome: Ok(guest_of_honour),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            outcome: Err(VerifyError::Transport(message.to_string())),
        }
    }
}

impl NameVerifier for FixedVerifier {
    fn verify(&self, _name: &str) -> Result<bool, VerifyError> {
        self.outcome.clone()
    }
}

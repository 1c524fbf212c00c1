use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The inbound event envelope delivered by the voice platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    pub request: Request,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// Session metadata attached to conversational requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Whether this is the first request of the session.
    #[serde(default)]
    pub new: bool,
}

/// The request itself, discriminated by its `type` field.
///
/// Unknown request types fail deserialization at the host boundary;
/// the host answers those with the generic error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    LaunchRequest(RequestBody),
    IntentRequest(IntentRequestBody),
    SessionEndedRequest(SessionEndedBody),
}

/// Fields common to every request type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Locale tag such as "en-US".
    pub locale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequestBody {
    #[serde(flatten)]
    pub body: RequestBody,
    pub intent: Intent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedBody {
    #[serde(flatten)]
    pub body: RequestBody,
    /// Why the platform ended the session (e.g. "USER_INITIATED").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The caller's inferred purpose, attached to intent requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<serde_json::Value>,
}

impl Request {
    /// The wire name of the request type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Request::LaunchRequest(_) => "LaunchRequest",
            Request::IntentRequest(_) => "IntentRequest",
            Request::SessionEndedRequest(_) => "SessionEndedRequest",
        }
    }

    pub fn locale(&self) -> &str {
        &self.body().locale
    }

    pub fn request_id(&self) -> Option<&str> {
        self.body().request_id.as_deref()
    }

    /// The intent name, for intent requests only.
    pub fn intent_name(&self) -> Option<&str> {
        match self {
            Request::IntentRequest(req) => Some(&req.intent.name),
            _ => None,
        }
    }

    fn body(&self) -> &RequestBody {
        match self {
            Request::LaunchRequest(body) => body,
            Request::IntentRequest(req) => &req.body,
            Request::SessionEndedRequest(req) => &req.body,
        }
    }
}

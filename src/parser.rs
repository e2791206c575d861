use axum::body::{Body, to_bytes};
use axum::http::Request;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error::DecodeError,
    models::notification::{
        MESSAGE, MESSAGE_ID, Notification, SIGNATURE, SIGNATURE_VERSION, SIGNING_CERT_URL,
        SUBJECT, TIMESTAMP, TOPIC_ARN, TYPE, UNSUBSCRIBE_URL,
    },
};

/// Decodes SNS HTTP/S deliveries into `Notification` records.
///
/// Stateless apart from the body limit, so one value can serve any number of
/// concurrent requests.
#[derive(Debug, Clone, Copy)]
pub struct NotificationParser {
    body_limit: usize,
}

impl Default for NotificationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationParser {
    pub fn new() -> Self {
        Self {
            body_limit: usize::MAX,
        }
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }

    pub fn body_limit(&self) -> usize {
        self.body_limit
    }

    /// Reads the request body to completion and decodes it.
    pub async fn parse_request(&self, request: Request<Body>) -> Result<Notification, DecodeError> {
        let bytes = to_bytes(request.into_body(), self.body_limit).await?;
        self.parse_body(&bytes)
    }

    pub fn parse_body(&self, body: &[u8]) -> Result<Notification, DecodeError> {
        let mut fields = match serde_json::from_slice::<Value>(body)? {
            Value::Object(map) => map,
            other => return Err(DecodeError::NotAnObject(json_kind(&other))),
        };

        let notification = Notification {
            kind: take_string(&mut fields, TYPE)?,
            message_id: take_string(&mut fields, MESSAGE_ID)?,
            topic_arn: take_string(&mut fields, TOPIC_ARN)?,
            subject: take_string(&mut fields, SUBJECT)?,
            message: take_string(&mut fields, MESSAGE)?,
            timestamp: take_string(&mut fields, TIMESTAMP)?,
            signature_version: take_string(&mut fields, SIGNATURE_VERSION)?,
            signature: take_string(&mut fields, SIGNATURE)?,
            signing_cert_url: take_string(&mut fields, SIGNING_CERT_URL)?,
            unsubscribe_url: take_string(&mut fields, UNSUBSCRIBE_URL)?,
        };

        debug!(
            message_id = %notification.message_id,
            body_len = body.len(),
            ignored_keys = fields.len(),
            "Decoded notification"
        );

        Ok(notification)
    }
}

// Absent and null both mean "not set".
fn take_string(fields: &mut Map<String, Value>, key: &'static str) -> Result<String, DecodeError> {
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(DecodeError::FieldType {
            field: key,
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

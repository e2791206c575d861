use serde::Serialize;

pub const TYPE: &str = "Type";
pub const MESSAGE_ID: &str = "MessageId";
pub const TOPIC_ARN: &str = "TopicArn";
pub const SUBJECT: &str = "Subject";
pub const MESSAGE: &str = "Message";
pub const TIMESTAMP: &str = "Timestamp";
pub const SIGNATURE_VERSION: &str = "SignatureVersion";
pub const SIGNATURE: &str = "Signature";
pub const SIGNING_CERT_URL: &str = "SigningCertURL";
pub const UNSUBSCRIBE_URL: &str = "UnsubscribeURL";

/// One SNS envelope as delivered to an HTTP/S subscription.
///
/// Every field is kept as the raw text found in the body. Absent keys leave
/// the field empty. `timestamp` is not parsed and `signature` is not decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "MessageId")]
    pub message_id: String,
    #[serde(rename = "TopicArn")]
    pub topic_arn: String,
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "SignatureVersion")]
    pub signature_version: String,
    #[serde(rename = "Signature")]
    pub signature: String,
    #[serde(rename = "SigningCertURL")]
    pub signing_cert_url: String,
    #[serde(rename = "UnsubscribeURL")]
    pub unsubscribe_url: String,
}

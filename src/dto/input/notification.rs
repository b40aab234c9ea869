use serde::Deserialize;

///
/// Submitted notification.
///
/// Missing `type` and `message` deserialize as empty strings so they
/// are reported by validation with a meaningful detail.
///
#[derive(Debug, Deserialize)]
pub struct Notification {
    #[serde(rename = "type", default)]
    pub notification_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub recipient: Option<String>,
}

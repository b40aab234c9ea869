use crate::repository::{self, NotificationStatus};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Notification {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub message: String,
    pub recipient: Option<String>,
    pub status: NotificationStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<repository::Notification> for Notification {
    fn from(value: repository::Notification) -> Self {
        Self {
            id: value.id,
            notification_type: value.notification_type,
            message: value.message,
            recipient: value.recipient,
            status: value.status,
            created_at: value.created_at,
        }
    }
}

use crate::repository::{Notification, NotificationStatus};
use bson::{DateTime, Uuid};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct NotificationEntity {
    pub _id: Uuid,

    #[serde(rename = "type")]
    pub notification_type: String,
    pub message: String,
    pub recipient: Option<String>,
    pub status: NotificationStatus,

    pub created_at: DateTime,

    /// Position in insertion order
    pub sequence: i64,
}

impl NotificationEntity {
    pub fn new(value: &Notification, sequence: i64) -> Self {
        Self {
            _id: value.id.into(),
            notification_type: value.notification_type.clone(),
            message: value.message.clone(),
            recipient: value.recipient.clone(),
            status: value.status,
            created_at: value.created_at.into(),
            sequence,
        }
    }
}

impl From<NotificationEntity> for Notification {
    fn from(value: NotificationEntity) -> Self {
        Self {
            id: value._id.to_uuid_1(),
            notification_type: value.notification_type,
            message: value.message,
            recipient: value.recipient,
            status: value.status,
            created_at: value.created_at.to_time_0_3(),
        }
    }
}

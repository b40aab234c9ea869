use super::NotificationStatus;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub notification_type: String,
    pub message: String,
    pub recipient: Option<String>,
    pub status: NotificationStatus,
    pub created_at: OffsetDateTime,
}

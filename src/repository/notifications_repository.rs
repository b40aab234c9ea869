use super::{
    dto::{Notification, NotificationStatus},
    error::Error,
};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Inserts new notification with fresh id, current UTC `created_at`
    /// and status [NotificationStatus::Pending]
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - notification_type is empty
    ///     - message is empty
    ///
    async fn insert(
        &self,
        notification_type: String,
        message: String,
        recipient: Option<String>,
    ) -> Result<Notification, Error>;

    ///
    /// Finds notification by id
    ///
    /// ### Errors
    /// - [Error::NoDocumentFound] when notification does not exist
    ///
    async fn find(&self, id: Uuid) -> Result<Notification, Error>;

    ///
    /// Finds all notifications in insertion order
    ///
    async fn find_all(&self) -> Result<Vec<Notification>, Error>;

    ///
    /// Advances notification status
    ///
    /// ### Errors
    /// - [Error::NoDocumentFound] when notification does not exist
    /// - [Error::StatusTransition] when current status can't advance to `status`
    ///
    async fn update_status(&self, id: Uuid, status: NotificationStatus) -> Result<(), Error>;
}

pub(super) fn validate_insert(notification_type: &str, message: &str) -> Result<(), Error> {
    if notification_type.trim().is_empty() {
        return Err(Error::Validation("type must not be empty"));
    }
    if message.trim().is_empty() {
        return Err(Error::Validation("message must not be empty"));
    }

    Ok(())
}

///
/// Current UTC time truncated to microseconds, which is the precision
/// `created_at` is exposed with
///
pub(super) fn now_utc() -> time::OffsetDateTime {
    let now = time::OffsetDateTime::now_utc();
    let micros = now.nanosecond() / 1_000 * 1_000;

    now.replace_nanosecond(micros).unwrap_or(now)
}

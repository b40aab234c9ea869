use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Save new notification and make one delivery attempt.
    ///
    /// ### Returns
    /// Saved notification with terminal status (`sent` or `failed`)
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - type is empty
    ///     - message is empty
    ///     - recipient is present but empty
    /// - [Error::ValidationMessageTooLarge] when
    ///     - message is too long
    ///
    async fn submit(&self, notification: input::Notification)
        -> Result<output::Notification, Error>;

    ///
    /// Find notification
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when notification with id does not exist
    ///
    async fn fetch(&self, id: Uuid) -> Result<output::Notification, Error>;

    ///
    /// Find all notifications in insertion order
    ///
    async fn list_all(&self) -> Result<Vec<output::Notification>, Error>;
}

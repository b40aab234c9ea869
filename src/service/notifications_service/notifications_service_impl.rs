use super::{NotificationsService, NotificationsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, NotificationsRepository},
    service::dispatcher_service::DispatcherService,
};
use axum::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct NotificationsServiceImpl {
    config: NotificationsServiceConfig,
    repository: Arc<dyn NotificationsRepository>,
    dispatcher: Arc<dyn DispatcherService>,
}

impl NotificationsServiceImpl {
    pub fn new(
        config: NotificationsServiceConfig,
        repository: Arc<dyn NotificationsRepository>,
        dispatcher: Arc<dyn DispatcherService>,
    ) -> Self {
        Self {
            config,
            repository,
            dispatcher,
        }
    }

    fn validate_submit(&self, notification: &input::Notification) -> Result<(), Error> {
        if notification.notification_type.trim().is_empty() {
            return Err(Error::Validation("type must not be empty"));
        }
        if notification.message.trim().is_empty() {
            return Err(Error::Validation("message must not be empty"));
        }
        if notification.message.len() > self.config.max_message_len {
            return Err(Error::ValidationMessageTooLarge {
                size: notification.message.len(),
                max_size: self.config.max_message_len,
            });
        }
        if let Some(recipient) = &notification.recipient {
            if recipient.trim().is_empty() {
                return Err(Error::Validation("recipient must not be empty"));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn submit(
        &self,
        notification: input::Notification,
    ) -> Result<output::Notification, Error> {
        tracing::info!("creating notification");
        tracing::trace!(?notification);

        self.validate_submit(&notification)?;

        let input::Notification {
            notification_type,
            message,
            recipient,
        } = notification;

        let mut notification = self
            .repository
            .insert(notification_type, message, recipient)
            .await
            .map_err(|err| match err {
                repository::Error::Validation(reason) => Error::Validation(reason),
                err => Error::Database(err),
            })?;
        tracing::info!(id = %notification.id, "created notification");

        let outcome = self.dispatcher.dispatch(&notification).await;
        let status = outcome.status();

        self.repository
            .update_status(notification.id, status)
            .await?;
        notification.status = status;
        tracing::info!(id = %notification.id, %status, "updated status");

        Ok(notification.into())
    }

    async fn fetch(&self, id: Uuid) -> Result<output::Notification, Error> {
        tracing::info!(%id, "finding notification");

        let notification = self
            .repository
            .find(id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentFound => Error::NotificationNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("found notification");

        Ok(notification.into())
    }

    async fn list_all(&self) -> Result<Vec<output::Notification>, Error> {
        tracing::info!("finding notifications");

        let notifications = self.repository.find_all().await?;
        tracing::info!(count = notifications.len(), "found notifications");

        let notifications = notifications
            .into_iter()
            .map(output::Notification::from)
            .collect();

        Ok(notifications)
    }
}

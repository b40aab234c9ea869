use super::{DeliveryChannel, DeliveryError};
use crate::repository::Notification;
use axum::async_trait;

///
/// Channel used when no external transport is configured.
/// It only records delivery in logs and always succeeds.
///
pub struct LogDeliveryChannel;

#[async_trait]
impl DeliveryChannel for LogDeliveryChannel {
    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        tracing::info!(
            id = %notification.id,
            notification_type = %notification.notification_type,
            recipient = notification.recipient.as_deref(),
            "delivered notification"
        );

        Ok(())
    }
}

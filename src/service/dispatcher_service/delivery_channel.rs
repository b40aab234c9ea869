use crate::repository::Notification;
use axum::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

///
/// Transport that hands notification over to its recipient
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError>;
}

use super::DispatchOutcome;
use crate::repository::Notification;
use axum::async_trait;

///
/// Service that attempts delivery of a notification through matching channel
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DispatcherService: Send + Sync {
    ///
    /// Makes exactly one delivery attempt.
    /// Failures are reported in [DispatchOutcome], never raised.
    ///
    async fn dispatch(&self, notification: &Notification) -> DispatchOutcome;
}

use super::{DeliveryChannel, DispatchOutcome, DispatcherService, DispatcherServiceConfig};
use crate::repository::Notification;
use axum::async_trait;
use std::{collections::HashMap, sync::Arc};

pub struct DispatcherServiceImpl {
    config: DispatcherServiceConfig,
    channels: HashMap<String, Arc<dyn DeliveryChannel>>,
    default_channel: Arc<dyn DeliveryChannel>,
}

impl DispatcherServiceImpl {
    pub fn new(config: DispatcherServiceConfig, default_channel: Arc<dyn DeliveryChannel>) -> Self {
        Self {
            config,
            channels: HashMap::new(),
            default_channel,
        }
    }

    ///
    /// Routes notifications of `notification_type` to `channel`
    /// instead of the default one
    ///
    /// This is how transports other than [super::LogDeliveryChannel] are plugged in
    /// by code embedding the library, the binary only registers the default channel.
    /// Registering the same type again replaces the previous channel.
    ///
    pub fn with_channel(
        mut self,
        notification_type: impl Into<String>,
        channel: Arc<dyn DeliveryChannel>,
    ) -> Self {
        self.channels.insert(notification_type.into(), channel);
        self
    }

    fn select_channel(&self, notification_type: &str) -> Option<&Arc<dyn DeliveryChannel>> {
        if let Some(allowed_types) = &self.config.allowed_types {
            if !allowed_types.contains(notification_type) {
                return None;
            }
        }

        Some(
            self.channels
                .get(notification_type)
                .unwrap_or(&self.default_channel),
        )
    }
}

#[async_trait]
impl DispatcherService for DispatcherServiceImpl {
    #[tracing::instrument(
        name = "Dispatch",
        skip_all,
        fields(
            id = %notification.id,
            notification_type = %notification.notification_type,
        )
    )]
    async fn dispatch(&self, notification: &Notification) -> DispatchOutcome {
        let Some(channel) = self.select_channel(&notification.notification_type) else {
            tracing::warn!("notification type not deliverable");
            return DispatchOutcome::Failed {
                detail: format!(
                    "no delivery channel for type '{}'",
                    notification.notification_type
                ),
            };
        };

        tracing::debug!("sending notification");
        match tokio::time::timeout(self.config.timeout, channel.send(notification)).await {
            Ok(Ok(())) => {
                tracing::debug!("notification delivered");
                DispatchOutcome::Delivered
            }
            Ok(Err(err)) => {
                tracing::warn!(%err, "delivery failed");
                DispatchOutcome::Failed {
                    detail: err.to_string(),
                }
            }
            Err(_) => {
                tracing::warn!(timeout = ?self.config.timeout, "delivery timed out");
                DispatchOutcome::Failed {
                    detail: format!("delivery timed out after {:?}", self.config.timeout),
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        repository::NotificationStatus,
        service::dispatcher_service::{DeliveryError, LogDeliveryChannel, MockDeliveryChannel},
    };
    use std::{collections::HashSet, time::Duration};
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn config() -> DispatcherServiceConfig {
        DispatcherServiceConfig {
            timeout: Duration::from_secs(5),
            allowed_types: None,
        }
    }

    fn notification(notification_type: &str) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            notification_type: notification_type.to_string(),
            message: "message".to_string(),
            recipient: Some("user@example.com".to_string()),
            status: NotificationStatus::Pending,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    struct SlowDeliveryChannel;

    #[async_trait]
    impl DeliveryChannel for SlowDeliveryChannel {
        async fn send(&self, _notification: &Notification) -> Result<(), DeliveryError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn dispatch_default_channel_delivers() {
        let service = DispatcherServiceImpl::new(config(), Arc::new(LogDeliveryChannel));

        let outcome = service.dispatch(&notification("cleaning_done")).await;

        assert_eq!(outcome, DispatchOutcome::Delivered);
        assert_eq!(outcome.status(), NotificationStatus::Sent);
    }

    #[tokio::test]
    async fn dispatch_unknown_type_uses_default_channel() {
        let mut default_channel = MockDeliveryChannel::new();
        default_channel.expect_send().times(1).returning(|_| Ok(()));
        let service = DispatcherServiceImpl::new(config(), Arc::new(default_channel));

        let outcome = service.dispatch(&notification("not_known_yet")).await;

        assert_eq!(outcome, DispatchOutcome::Delivered);
    }

    #[tokio::test]
    async fn dispatch_registered_channel_is_preferred() {
        let mut default_channel = MockDeliveryChannel::new();
        default_channel.expect_send().never();
        let mut booking_channel = MockDeliveryChannel::new();
        booking_channel
            .expect_send()
            .withf(|notification| notification.notification_type == "booking_confirmed")
            .times(1)
            .returning(|_| Ok(()));
        let service = DispatcherServiceImpl::new(config(), Arc::new(default_channel))
            .with_channel("booking_confirmed", Arc::new(booking_channel));

        let outcome = service.dispatch(&notification("booking_confirmed")).await;

        assert_eq!(outcome, DispatchOutcome::Delivered);
    }

    #[tokio::test]
    async fn dispatch_registering_type_again_replaces_channel() {
        let mut replaced_channel = MockDeliveryChannel::new();
        replaced_channel.expect_send().never();
        let mut review_channel = MockDeliveryChannel::new();
        review_channel
            .expect_send()
            .times(1)
            .returning(|_| Err(DeliveryError::Rejected("recipient unknown".to_string())));
        let service = DispatcherServiceImpl::new(config(), Arc::new(LogDeliveryChannel))
            .with_channel("review_rejected", Arc::new(replaced_channel))
            .with_channel("review_rejected", Arc::new(review_channel));

        let outcome = service.dispatch(&notification("review_rejected")).await;

        assert_eq!(outcome.status(), NotificationStatus::Failed);
    }

    #[tokio::test]
    async fn dispatch_channel_error_fails() {
        let mut default_channel = MockDeliveryChannel::new();
        default_channel
            .expect_send()
            .times(1)
            .returning(|_| Err(DeliveryError::Rejected("mailbox full".to_string())));
        let service = DispatcherServiceImpl::new(config(), Arc::new(default_channel));

        let outcome = service.dispatch(&notification("order_placed")).await;

        assert_eq!(
            outcome,
            DispatchOutcome::Failed {
                detail: "delivery rejected: mailbox full".to_string()
            }
        );
        assert_eq!(outcome.status(), NotificationStatus::Failed);
    }

    #[tokio::test]
    async fn dispatch_timeout_fails() {
        let config = DispatcherServiceConfig {
            timeout: Duration::from_millis(20),
            allowed_types: None,
        };
        let service = DispatcherServiceImpl::new(config, Arc::new(SlowDeliveryChannel));

        let outcome = service.dispatch(&notification("shift_extended")).await;

        assert!(matches!(outcome, DispatchOutcome::Failed { detail: _ }));
    }

    #[tokio::test]
    async fn dispatch_type_outside_allow_list_fails_without_sending() {
        let config = DispatcherServiceConfig {
            timeout: Duration::from_secs(5),
            allowed_types: Some(HashSet::from(["booking_confirmed".to_string()])),
        };
        let mut default_channel = MockDeliveryChannel::new();
        default_channel.expect_send().never();
        let service = DispatcherServiceImpl::new(config, Arc::new(default_channel));

        let outcome = service.dispatch(&notification("review_rejected")).await;

        assert_eq!(
            outcome,
            DispatchOutcome::Failed {
                detail: "no delivery channel for type 'review_rejected'".to_string()
            }
        );
    }

    #[tokio::test]
    async fn dispatch_type_on_allow_list_delivers() {
        let config = DispatcherServiceConfig {
            timeout: Duration::from_secs(5),
            allowed_types: Some(HashSet::from(["booking_confirmed".to_string()])),
        };
        let service = DispatcherServiceImpl::new(config, Arc::new(LogDeliveryChannel));

        let outcome = service.dispatch(&notification("booking_confirmed")).await;

        assert_eq!(outcome, DispatchOutcome::Delivered);
    }
}

use super::{
    dto::{Notification, NotificationStatus},
    notifications_repository::{now_utc, validate_insert},
    Error, NotificationsRepository,
};
use axum::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Records {
    notifications: Vec<Notification>,
    positions: HashMap<Uuid, usize>,
}

///
/// Record store kept in process memory.
/// Listing preserves insertion order.
///
#[derive(Default)]
pub struct InMemoryNotificationsRepository {
    records: RwLock<Records>,
}

impl InMemoryNotificationsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationsRepository for InMemoryNotificationsRepository {
    async fn insert(
        &self,
        notification_type: String,
        message: String,
        recipient: Option<String>,
    ) -> Result<Notification, Error> {
        validate_insert(&notification_type, &message)?;

        let mut records = self.records.write().await;

        let mut id = Uuid::new_v4();
        while records.positions.contains_key(&id) {
            tracing::warn!(%id, "generated id already taken");
            id = Uuid::new_v4();
        }

        let notification = Notification {
            id,
            notification_type,
            message,
            recipient,
            status: NotificationStatus::Pending,
            created_at: now_utc(),
        };

        let position = records.notifications.len();
        records.notifications.push(notification.clone());
        records.positions.insert(id, position);

        Ok(notification)
    }

    async fn find(&self, id: Uuid) -> Result<Notification, Error> {
        let records = self.records.read().await;

        records
            .positions
            .get(&id)
            .map(|position| records.notifications[*position].clone())
            .ok_or(Error::NoDocumentFound)
    }

    async fn find_all(&self) -> Result<Vec<Notification>, Error> {
        let records = self.records.read().await;

        Ok(records.notifications.clone())
    }

    async fn update_status(&self, id: Uuid, status: NotificationStatus) -> Result<(), Error> {
        let mut records = self.records.write().await;

        let position = *records.positions.get(&id).ok_or(Error::NoDocumentFound)?;
        let notification = &mut records.notifications[position];

        if !notification.status.can_transition_to(status) {
            return Err(Error::StatusTransition {
                from: notification.status,
                to: status,
            });
        }
        notification.status = status;

        Ok(())
    }
}

use super::{
    dto::{Notification, NotificationStatus},
    entity::NotificationEntity,
    notifications_repository::{now_utc, validate_insert},
    Error, NotificationsRepository,
};
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::{
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use uuid::Uuid;

const NOTIFICATIONS: &str = "notifications";
const COUNTERS: &str = "counters";
const INDEX_NAME_SEQUENCE: &str = "unique_index_sequence";

///
/// Record store backed by MongoDB.
///
/// `created_at` is persisted with millisecond precision.
/// Every record gets a `sequence` from the `counters` collection
/// and records are listed ascending by it.
///
pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == NOTIFICATIONS) {
            tracing::debug!(collection = NOTIFICATIONS, "creating collection");
            database.create_collection(NOTIFICATIONS).await?;
        }

        let collection = database.collection::<Document>(NOTIFICATIONS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_SEQUENCE.to_string()) {
            Self::create_sequence_index(&collection).await?;
            tracing::debug!(
                collection = NOTIFICATIONS,
                index = INDEX_NAME_SEQUENCE,
                "created index"
            );
        }

        Ok(Self { database })
    }

    async fn create_sequence_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "sequence": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_SEQUENCE.to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }

    fn collection(&self) -> Collection<NotificationEntity> {
        self.database.collection::<NotificationEntity>(NOTIFICATIONS)
    }

    ///
    /// Atomically increments and returns the notifications counter,
    /// shared by every instance using the database
    ///
    async fn next_sequence(&self) -> Result<i64, Error> {
        let counter = self
            .database
            .collection::<Document>(COUNTERS)
            .find_one_and_update(
                doc! {
                    "_id": NOTIFICATIONS,
                },
                doc! {
                    "$inc": {
                        "sequence": 1_i64,
                    }
                },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(Error::NoDocumentFound)?;

        counter
            .get_i64("sequence")
            .map_err(|_| Error::Validation("counter sequence is not an i64"))
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn insert(
        &self,
        notification_type: String,
        message: String,
        recipient: Option<String>,
    ) -> Result<Notification, Error> {
        validate_insert(&notification_type, &message)?;

        let notification = Notification {
            id: Uuid::new_v4(),
            notification_type,
            message,
            recipient,
            status: NotificationStatus::Pending,
            created_at: now_utc(),
        };

        let sequence = self.next_sequence().await?;

        // _id is unique by itself, a duplicate v4 id surfaces as a write error
        self.collection()
            .insert_one(NotificationEntity::new(&notification, sequence))
            .await?;

        Ok(notification)
    }

    async fn find(&self, id: Uuid) -> Result<Notification, Error> {
        self.collection()
            .find_one(doc! {
                "_id": bson::Uuid::from(id),
            })
            .await?
            .map(Notification::from)
            .ok_or(Error::NoDocumentFound)
    }

    async fn find_all(&self) -> Result<Vec<Notification>, Error> {
        let notifications = self
            .collection()
            .find(doc! {})
            .sort(doc! {
                "sequence": 1,
            })
            .await?
            .try_collect::<Vec<_>>()
            .await?
            .into_iter()
            .map(Notification::from)
            .collect();

        Ok(notifications)
    }

    async fn update_status(&self, id: Uuid, status: NotificationStatus) -> Result<(), Error> {
        let id = bson::Uuid::from(id);
        let predecessors = status
            .predecessors()
            .iter()
            .map(|predecessor| predecessor.as_ref())
            .collect::<Vec<_>>();

        let update_result = self
            .collection()
            .update_one(
                doc! {
                    "_id": id,
                    "status": { "$in": predecessors },
                },
                doc! {
                    "$set": {
                        "status": status.as_ref(),
                    }
                },
            )
            .await?;

        if update_result.matched_count == 1 {
            return Ok(());
        }

        match self.collection().find_one(doc! { "_id": id }).await? {
            Some(entity) => Err(Error::StatusTransition {
                from: entity.status,
                to: status,
            }),
            None => Err(Error::NoDocumentFound),
        }
    }
}

use super::NotificationStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("no document found")]
    NoDocumentFound,

    #[error("status transition not allowed {from} -> {to}")]
    StatusTransition {
        from: NotificationStatus,
        to: NotificationStatus,
    },

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

use crate::repository::NotificationStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Delivered,
    Failed { detail: String },
}

impl DispatchOutcome {
    ///
    /// Terminal status the notification reaches with this outcome
    ///
    pub fn status(&self) -> NotificationStatus {
        match self {
            DispatchOutcome::Delivered => NotificationStatus::Sent,
            DispatchOutcome::Failed { detail: _ } => NotificationStatus::Failed,
        }
    }
}

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

///
/// Lifecycle of a notification.
///
/// `Pending` is held only while the notification is being dispatched,
/// `Sent` and `Failed` are terminal.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationStatus {
    Pending,
    Sent,
    Failed,
}

impl NotificationStatus {
    pub fn can_transition_to(self, next: NotificationStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Sent) | (Self::Pending, Self::Failed)
        )
    }

    ///
    /// States from which a notification may advance to `self`
    ///
    pub fn predecessors(self) -> &'static [NotificationStatus] {
        match self {
            Self::Pending => &[],
            Self::Sent | Self::Failed => &[Self::Pending],
        }
    }
}

mod notification;
mod notification_status;

pub use notification::*;
pub use notification_status::*;

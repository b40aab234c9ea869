mod error_detail;
mod notification;

pub use error_detail::*;
pub use notification::*;

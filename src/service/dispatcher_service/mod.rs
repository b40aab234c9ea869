mod delivery_channel;
mod dispatcher_service;
mod dispatcher_service_impl;
mod dto;
mod log_delivery_channel;

pub use delivery_channel::*;
pub use dispatcher_service::*;
pub use dispatcher_service_impl::*;
pub use dto::*;
pub use log_delivery_channel::*;

mod dispatch_outcome;
mod dispatcher_service_config;

pub use dispatch_outcome::*;
pub use dispatcher_service_config::*;

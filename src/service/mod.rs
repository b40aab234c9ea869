pub mod dispatcher_service;
pub mod notifications_service;

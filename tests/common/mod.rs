#![allow(dead_code)]

use notification_service::application::{self, ApplicationEnv};
use std::{net::SocketAddr, time::Duration};
use tracing::level_filters::LevelFilter;
use tokio::net::TcpListener;

pub const MAX_MESSAGE_LEN: usize = 256;
pub const MAX_HTTP_CONTENT_LEN: usize = 1024;

pub fn test_env() -> ApplicationEnv {
    ApplicationEnv {
        log_directory: std::env::temp_dir().to_string_lossy().to_string(),
        log_filename: "notification-service-test.log".to_string(),
        log_file_level: LevelFilter::OFF,
        bind_address: SocketAddr::from(([127, 0, 0, 1], 0)),
        db_connection_string: None,
        db_name: String::new(),
        max_message_len: MAX_MESSAGE_LEN,
        max_http_content_len: MAX_HTTP_CONTENT_LEN,
        dispatch_timeout: Duration::from_secs(5),
        dispatch_allowed_types: None,
    }
}

pub async fn create_router(env: &ApplicationEnv) -> axum::Router {
    let (state, _) = application::create_state(env).await.unwrap();
    let middleware = application::create_middleware(env);

    application::create_application(state, middleware)
}

///
/// Starts application with fresh in-memory store on an ephemeral port
///
/// ### Returns
/// address the application listens on
///
pub async fn spawn_application(env: ApplicationEnv) -> SocketAddr {
    let router = create_router(&env).await;
    let listener = TcpListener::bind(env.bind_address).await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    address
}

pub fn notifications_url(address: SocketAddr) -> String {
    format!("http://{address}/api/notifications/")
}

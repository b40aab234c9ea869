use super::ApplicationEnv;
use axum::extract::DefaultBodyLimit;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    /// Enforced by body extractors, so oversized bodies are rejected
    /// through [crate::error::Error] like any other invalid body
    pub body_limit: DefaultBodyLimit,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    let body_limit = DefaultBodyLimit::max(env.max_http_content_len);
    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware { body_limit, trace }
}

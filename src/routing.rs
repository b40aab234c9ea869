use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::notifications_service::NotificationsService,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route(
            "/api/notifications",
            get(list_notifications)
                .post(submit_notification)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/notifications/",
            get(list_notifications)
                .post(submit_notification)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/notifications/:id",
            get(get_notification).fallback(method_not_allowed),
        )
        .fallback(route_not_exist)
}

async fn route_not_exist() -> Error {
    Error::RouteNotExist
}

async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}

async fn submit_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    notification: Result<Json<input::Notification>, JsonRejection>,
) -> Result<Json<output::Notification>, Error> {
    let Json(notification) = notification?;
    let notification = service.submit(notification).await?;

    Ok(Json(notification))
}

async fn list_notifications(
    State(service): State<Arc<dyn NotificationsService>>,
) -> Result<Json<Vec<output::Notification>>, Error> {
    let notifications = service.list_all().await?;

    Ok(Json(notifications))
}

async fn get_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    Path(id): Path<String>,
) -> Result<Json<output::Notification>, Error> {
    // malformed ids can't belong to any notification
    let id = Uuid::parse_str(&id).map_err(|_| Error::NotificationNotExist)?;
    let notification = service.fetch(id).await?;

    Ok(Json(notification))
}

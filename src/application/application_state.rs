use super::ApplicationEnv;
use crate::{
    repository::{
        InMemoryNotificationsRepository, NotificationsRepository, NotificationsRepositoryImpl,
    },
    service::{
        dispatcher_service::{DispatcherServiceConfig, DispatcherServiceImpl, LogDeliveryChannel},
        notifications_service::{
            NotificationsService, NotificationsServiceConfig, NotificationsServiceImpl,
        },
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Option<Client>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    let mut db_client = None;
    let notifications_repository: Arc<dyn NotificationsRepository> =
        match &env.db_connection_string {
            Some(db_connection_string) => {
                tracing::info!("connecting to database");
                let db_client_options = ClientOptions::parse(db_connection_string).await?;
                let client = Client::with_options(db_client_options)?;
                let db = client.database(&env.db_name);
                db_client = Some(client);

                tracing::info!("creating repositories");
                Arc::new(NotificationsRepositoryImpl::new(db).await?)
            }
            None => {
                tracing::info!("creating in-memory repositories");
                Arc::new(InMemoryNotificationsRepository::new())
            }
        };

    tracing::info!("creating services");
    let config = DispatcherServiceConfig {
        timeout: env.dispatch_timeout,
        allowed_types: env.dispatch_allowed_types.clone(),
    };
    let dispatcher_service = DispatcherServiceImpl::new(config, Arc::new(LogDeliveryChannel));
    let dispatcher_service = Arc::new(dispatcher_service);

    let config = NotificationsServiceConfig {
        max_message_len: env.max_message_len,
    };
    let notifications_service =
        NotificationsServiceImpl::new(config, notifications_repository, dispatcher_service);
    let notifications_service = Arc::new(notifications_service);

    Ok((
        ApplicationState {
            notifications_service,
        },
        ApplicationStateToClose { db_client },
    ))
}

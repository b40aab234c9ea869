use anyhow::anyhow;
use std::{collections::HashSet, net::SocketAddr, time::Duration};
use tracing::level_filters::LevelFilter;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,
    /// Console level comes from `RUST_LOG`, this one applies to the log file only
    pub log_file_level: LevelFilter,

    pub bind_address: SocketAddr,

    /// When not set, notifications are kept in memory
    pub db_connection_string: Option<String>,
    pub db_name: String,

    pub max_message_len: usize,
    pub max_http_content_len: usize,

    pub dispatch_timeout: Duration,
    pub dispatch_allowed_types: Option<HashSet<String>>,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("NOTIFICATION_SERVICE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("NOTIFICATION_SERVICE_LOG_FILENAME")?;
        let log_file_level = Self::optional_env_var("NOTIFICATION_SERVICE_LOG_FILE_LEVEL")
            .map(|level| level.parse::<LevelFilter>())
            .transpose()?
            .unwrap_or(LevelFilter::INFO);
        let bind_address = Self::env_var("NOTIFICATION_SERVICE_BIND_ADDRESS")?.parse()?;
        let db_connection_string =
            Self::optional_env_var("NOTIFICATION_SERVICE_DB_CONNECTION_STRING");
        let db_name = match &db_connection_string {
            Some(_) => Self::env_var("NOTIFICATION_SERVICE_DB_NAME")?,
            None => Self::optional_env_var("NOTIFICATION_SERVICE_DB_NAME").unwrap_or_default(),
        };
        let max_message_len = Self::env_var("NOTIFICATION_SERVICE_MAX_MESSAGE_LEN")?.parse()?;
        let max_http_content_len =
            Self::env_var("NOTIFICATION_SERVICE_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let dispatch_timeout = Self::env_var("NOTIFICATION_SERVICE_DISPATCH_TIMEOUT")?.parse()?;
        let dispatch_timeout = Duration::from_millis(dispatch_timeout);
        let dispatch_allowed_types =
            Self::optional_env_var("NOTIFICATION_SERVICE_DISPATCH_ALLOWED_TYPES")
                .map(|types| Self::parse_types(&types));

        Ok(Self {
            log_directory,
            log_filename,
            log_file_level,
            bind_address,
            db_connection_string,
            db_name,
            max_message_len,
            max_http_content_len,
            dispatch_timeout,
            dispatch_allowed_types,
        })
    }

    fn parse_types(types: &str) -> HashSet<String> {
        types
            .split(',')
            .map(str::trim)
            .filter(|notification_type| !notification_type.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::{MongoConfig, MongoError};
use crate::common::{RetryConfig, retry_with_backoff};

/// Build a client from `config` and verify the target database answers a ping.
pub async fn connect(config: &MongoConfig) -> Result<Client, MongoError> {
    info!(database = %config.database, "Connecting to MongoDB");

    let mut options = ClientOptions::parse(&config.url).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    options.app_name = config.app_name.clone();

    let client = Client::with_options(options)?;

    client
        .database(&config.database)
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!(database = %config.database, "Connected to MongoDB");
    Ok(client)
}

/// [`connect`] with exponential backoff, for startup while the store may still be booting.
pub async fn connect_with_retry(
    config: &MongoConfig,
    retry: RetryConfig,
) -> Result<Client, MongoError> {
    retry_with_backoff("mongodb connect", &retry, || connect(config)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let config = MongoConfig::new("not-a-mongo-url", "backoffice");
        let err = connect(&config).await.unwrap_err();
        assert!(matches!(err, MongoError::Driver(_)));
    }

    #[tokio::test]
    async fn test_connect_with_retry_gives_up_on_malformed_url() {
        let config = MongoConfig::new("not-a-mongo-url", "backoffice");
        let retry = RetryConfig::default()
            .with_max_retries(1)
            .with_initial_delay(Duration::from_millis(1))
            .without_jitter();
        assert!(connect_with_retry(&config, retry).await.is_err());
    }
}

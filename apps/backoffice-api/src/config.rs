use core_config::{AppInfo, FromEnv, app_info, env_parse_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;
use std::time::Duration;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Upper bound for post-drain cleanup (`SHUTDOWN_TIMEOUT_SECS`)
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let shutdown_timeout =
            Duration::from_secs(env_parse_or_default("SHUTDOWN_TIMEOUT_SECS", 30)?);

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            shutdown_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_with_defaults() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("backoffice")),
                ("PORT", None::<&str>),
                ("SHUTDOWN_TIMEOUT_SECS", None),
                ("APP_ENV", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mongodb.database, "backoffice");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.shutdown_timeout, Duration::from_secs(30));
                assert_eq!(config.app.name, "backoffice_api");
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_missing_database_fails() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", None::<&str>),
                ("MONGO_DATABASE", None),
            ],
            || assert!(Config::from_env().is_err()),
        );
    }

    #[test]
    fn test_bad_shutdown_timeout_fails() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("backoffice")),
                ("SHUTDOWN_TIMEOUT_SECS", Some("soon")),
            ],
            || assert!(Config::from_env().is_err()),
        );
    }
}

//! Router assembly, health endpoints and graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_router, health_router, serve};
//! use axum_helpers::http::cors_layer_from_env;
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>(api_routes, cors_layer_from_env()?)
//!     .merge(health_router(app_info!()));
//!
//! serve(router, &config.server, Duration::from_secs(30), async { client.shutdown().await }).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_router, serve};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_readiness_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};

//! # Axum Helpers
//!
//! Shared HTTP plumbing for the back-office services.
//!
//! - **[`errors`]**: [`AppError`], the single mapping from failures to status codes
//! - **[`extractors`]**: id path parameters and validated JSON bodies
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: router assembly with OpenAPI UIs, health, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{UuidPath, UuidPathPair, UuidPathTriple, ValidatedJson};

pub use http::{cors_layer_from_env, create_cors_layer, security_headers};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_router, health_router,
    run_readiness_checks, serve, shutdown_signal,
};

//! Extractors that turn request rejections into [`AppError`](crate::AppError) responses.

pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::{UuidPath, UuidPathPair, UuidPathTriple};
pub use validated_json::ValidatedJson;

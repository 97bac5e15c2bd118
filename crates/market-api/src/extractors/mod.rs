//! Axum extractors for request handling
//!
//! Rejections are turned into enveloped `ApiError`s instead of axum's plain
//! text bodies.

mod query;
mod validated;

pub use query::QueryParams;
pub use validated::ValidatedJson;

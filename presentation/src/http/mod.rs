//! HTTP API
//!
//! A thin warp adapter over [`RouterUseCase`](verdict_application::RouterUseCase).

pub mod dto;
pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use routes::{MAX_BODY_BYTES, RouterAction, routes};
pub use server::serve;

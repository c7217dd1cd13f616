//! # agriportal-api
//!
//! HTTP API layer for AgriPortal built on Axum.
//!
//! Provides the auth lifecycle endpoints, the user-profile endpoints,
//! middleware (CORS, request logging), the bearer-token request gate,
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;

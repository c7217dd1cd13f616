//! # agriportal-auth
//!
//! Authentication for the AgriPortal service.
//!
//! ## Modules
//!
//! - `jwt` — signed access/refresh token creation and validation
//! - `password` — Argon2id password hashing and verification
//! - `session` — session-token lifecycle (signup, login, logout, refresh)

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError, TokenPair};
pub use password::PasswordHasher;
pub use session::SessionManager;

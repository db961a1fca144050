//! # ghost-client
//!
//! Authenticated request dispatcher for the Ghost Admin API.
//!
//! The crate has two parts:
//! - [`TokenSigner`]: mints the short-lived HS256 token Ghost expects from an
//!   `{id}:{secret}` admin key.
//! - [`GhostClient`]: resolves a relative endpoint under
//!   `/ghost/api/admin/`, signs the call, sends it and maps the outcome to
//!   `Result<serde_json::Value, GhostError>`.
//!
//! The client is resource agnostic: payloads are forwarded as-is and
//! responses are returned unchanged. There is no retry, caching or
//! rate-limit handling.
//!
//! ## Example
//!
//! ```no_run
//! use ghost_client::{GhostClient, GhostClientConfig};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), ghost_client::GhostError> {
//! let client = GhostClient::new(&GhostClientConfig::new(
//!     "https://blog.example.com",
//!     std::env::var("GHOST_ADMIN_API_KEY").unwrap_or_default(),
//! ))?;
//!
//! let created = client
//!     .post("posts", json!({"posts": [{"title": "Hello", "status": "draft"}]}))
//!     .await?;
//! println!("{created}");
//! # Ok(())
//! # }
//! ```

pub mod dispatcher;
pub mod error;
pub mod signer;

pub use dispatcher::{
    ADMIN_API_PREFIX, DEFAULT_ACCEPT_VERSION, GhostClient, GhostClientConfig, GhostMethod,
    GhostRequest,
};
pub use error::GhostError;
pub use signer::{AdminApiKey, SignedToken, TOKEN_LIFETIME, TokenSigner};

//! Cloak - Stealth HTTP Client
//!
//! A lightweight HTTP client wrapper that randomizes identifying headers,
//! manages a rotating upstream proxy session, and can serialize/restore its
//! full configuration as a single opaque blob.
//!
//! ## Features
//!
//! - Random browser user-agent and sticky-session identifier per client
//! - Upstream proxy credentials encoded into the proxy URL user-info
//! - Session rotation that re-derives the proxy URL while preserving the
//!   remaining proxy parameters
//! - Serialize/restore of the whole client state (base64-encoded JSON)
//! - Injected randomness source for deterministic testing
//!
//! ## Example
//!
//! ```no_run
//! use cloak::{ProxyConfig, StealthClient};
//!
//! # #[tokio::main]
//! # async fn main() -> cloak::Result<()> {
//! let client = StealthClient::builder()
//!     .proxy(ProxyConfig {
//!         host: "proxy.example.com".to_string(),
//!         user: "acct1".to_string(),
//!         zone_password: "pw".to_string(),
//!         session_duration: 10,
//!         port: 8000,
//!     })
//!     .header("Accept-Language", "en-US,en;q=0.9")
//!     .build()?;
//!
//! let response = client.get("https://example.com").await?;
//!
//! // Obtain a new upstream exit identity
//! client.rotate_session()?;
//! # let _ = response;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod identity;
pub mod proxy;

pub use client::{StealthClient, StealthClientBuilder};
pub use error::{CloakError, Result};
pub use identity::{OsRandom, RandomSource};
pub use proxy::ProxyConfig;

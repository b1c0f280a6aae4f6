//! `myduka-client` — authenticated client for the MyDuka REST backend.
//!
//! Three pieces live here:
//! - the [`SessionStore`], the single persisted authority for "who is the
//!   current actor";
//! - the [`Gateway`], the sole component issuing HTTP calls, which attaches
//!   credentials and normalizes every failure into an [`ApiError`];
//! - typed endpoint bindings for each backend resource (under [`api`]).

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod session;

pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorKind};
pub use gateway::Gateway;
pub use session::SessionStore;

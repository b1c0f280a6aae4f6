//! `myduka-auth` — pure access-control boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it owns the
//! role model, the static role/resource/action permission table, the
//! session value type, and the route guard. Everything here is
//! deterministic and side-effect free.

pub mod policy;
pub mod role;
pub mod route;
pub mod session;

pub use policy::{Action, ResourceKind, is_allowed};
pub use role::{Role, RoleParseError};
pub use route::{Destination, RouteOutcome, can_enter, guard};
pub use session::Session;

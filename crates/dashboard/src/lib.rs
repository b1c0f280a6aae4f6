//! `myduka-dashboard` — role-gated view models for the three dashboards.
//!
//! Each view owns its fetched rows and a single human-readable error; no
//! gateway failure propagates past a view. Mutating controls are exposed
//! only when the role policy allows them, and the operations behind the
//! controls re-check before anything reaches the gateway. A rejected
//! token anywhere clears the session and redirects to login.

pub mod section;
pub mod shell;
pub mod views;

pub use section::{Section, sections_for};
pub use shell::AppShell;
pub use views::{
    AdminsView, ClerksView, InventoryView, ProductsView, ProfileView, ReportData,
    ReportsView, StoresView, SupplyRequestsView, TransactionsView, ViewStatus,
};

//! Typed endpoint bindings, one module per backend resource.
//!
//! Each module defines the wire types (field names match the backend
//! JSON exactly) and extends [`crate::Gateway`] with the operations the
//! dashboards use. These bindings do not consult the role policy; the
//! view layer gates controls before a call is ever issued.

pub mod accounts;
pub mod auth;
pub mod inventory;
pub mod products;
pub mod profile;
pub mod reports;
pub mod stores;
pub mod supply_requests;
pub mod transactions;

pub use accounts::{AdminAccount, ClerkAccount, NewAdminAccount, NewClerkAccount};
pub use auth::{Credentials, InviteAdminResponse, LoginResponse, RegisterAdmin, RegisterMerchant};
pub use inventory::{InventoryRecord, NewInventoryRecord};
pub use products::{NewProduct, Product};
pub use profile::Profile;
pub use reports::{
    PaymentStatusReportRow, ReportKind, SalesReportRow, SpoiltReportRow, StockReportRow, TimeFrame,
};
pub use stores::{NewStore, Store};
pub use supply_requests::{NewSupplyRequest, SupplyRequest};
pub use transactions::{NewTransaction, Transaction};

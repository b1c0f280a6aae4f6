//! View models, one per dashboard section.
//!
//! Shared discipline, enforced by [`ViewStatus`] and [`permitted`]:
//! - every gateway failure is caught here and rendered as one message;
//! - a mutating operation runs only when the session is authenticated
//!   AND the role policy grants it (checked again even though the
//!   control should not have been visible);
//! - an `Unauthenticated` failure clears the session and records a
//!   redirect to login.

pub mod accounts;
pub mod inventory;
pub mod products;
pub mod profile;
pub mod reports;
pub mod stores;
pub mod supply_requests;
pub mod transactions;

pub use accounts::{AdminsView, ClerksView};
pub use inventory::InventoryView;
pub use products::ProductsView;
pub use profile::ProfileView;
pub use reports::{ReportData, ReportsView};
pub use stores::StoresView;
pub use supply_requests::SupplyRequestsView;
pub use transactions::TransactionsView;

use myduka_auth::{Action, Destination, ResourceKind, is_allowed};
use myduka_client::{ApiError, Gateway, SessionStore};

/// Error display and redirect state shared by every view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewStatus {
    last_error: Option<String>,
    redirect: Option<Destination>,
}

impl ViewStatus {
    /// The single message this view currently renders, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Pending navigation (set when the backend rejected the token).
    pub fn redirect(&self) -> Option<Destination> {
        self.redirect
    }

    pub fn take_redirect(&mut self) -> Option<Destination> {
        self.redirect.take()
    }

    fn ok(&mut self) {
        self.last_error = None;
    }

    fn fail(&mut self, err: ApiError, session: &SessionStore) {
        if err.is_unauthenticated() {
            session.clear();
            self.redirect = Some(Destination::Login);
        }
        self.last_error = Some(err.message);
    }

    fn deny(&mut self, what: &str) {
        self.last_error = Some(format!("current role may not {what}"));
    }
}

/// Both gates at once: a present token and a policy grant.
fn permitted(gateway: &Gateway, resource: ResourceKind, action: Action) -> bool {
    let session = gateway.session().get();
    session.is_authenticated()
        && session
            .role
            .is_some_and(|role| is_allowed(role, resource, action))
}

//! Admin and clerk account management.
//!
//! Admin accounts are merchant-territory; clerk accounts are registered
//! by admins and visible to merchants.

use myduka_auth::{Action, ResourceKind, Role, is_allowed};
use myduka_client::Gateway;
use myduka_client::api::{AdminAccount, ClerkAccount, NewAdminAccount, NewClerkAccount};
use myduka_core::{AdminId, StoreAssignment};

use super::{ViewStatus, permitted};

#[derive(Debug, Clone, Default)]
pub struct AdminsView {
    pub rows: Vec<AdminAccount>,
    pub status: ViewStatus,
}

impl AdminsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The whole section is merchant-only; this gates both the form and
    /// the per-row actions.
    pub fn can_manage(role: Role) -> bool {
        is_allowed(role, ResourceKind::AdminAccount, Action::Update)
    }

    pub async fn refresh(&mut self, gateway: &Gateway) {
        if !permitted(gateway, ResourceKind::AdminAccount, Action::Read) {
            self.status.deny("view admin accounts");
            return;
        }
        match gateway.list_admins().await {
            Ok(rows) => {
                self.rows = rows;
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn create(&mut self, gateway: &Gateway, admin: NewAdminAccount) {
        if !permitted(gateway, ResourceKind::AdminAccount, Action::Create) {
            self.status.deny("create admin accounts");
            return;
        }
        match gateway.create_admin(&admin).await {
            Ok(created) => {
                self.rows.push(created);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn deactivate(&mut self, gateway: &Gateway, id: AdminId) {
        if !permitted(gateway, ResourceKind::AdminAccount, Action::Update) {
            self.status.deny("deactivate admin accounts");
            return;
        }
        match gateway.deactivate_admin(id).await {
            Ok(()) => {
                if let Some(row) = self.rows.iter_mut().find(|a| a.id == id) {
                    row.is_active = false;
                }
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    /// Assign or unassign a store. `StoreAssignment::Unassigned` writes
    /// the backend's sentinel.
    pub async fn assign_store(
        &mut self,
        gateway: &Gateway,
        id: AdminId,
        assignment: StoreAssignment,
    ) {
        if !permitted(gateway, ResourceKind::AdminAccount, Action::Assign) {
            self.status.deny("assign stores to admins");
            return;
        }
        match gateway.assign_admin_store(id, assignment).await {
            Ok(()) => {
                if let Some(row) = self.rows.iter_mut().find(|a| a.id == id) {
                    row.store_id = assignment;
                }
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn remove(&mut self, gateway: &Gateway, id: AdminId) {
        if !permitted(gateway, ResourceKind::AdminAccount, Action::Delete) {
            self.status.deny("delete admin accounts");
            return;
        }
        match gateway.delete_admin(id).await {
            Ok(()) => {
                self.rows.retain(|a| a.id != id);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClerksView {
    pub rows: Vec<ClerkAccount>,
    pub status: ViewStatus,
}

impl ClerksView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only admins see the registration form.
    pub fn can_register(role: Role) -> bool {
        is_allowed(role, ResourceKind::ClerkAccount, Action::Create)
    }

    pub async fn refresh(&mut self, gateway: &Gateway) {
        if !permitted(gateway, ResourceKind::ClerkAccount, Action::Read) {
            self.status.deny("view clerk accounts");
            return;
        }
        match gateway.list_clerks().await {
            Ok(rows) => {
                self.rows = rows;
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn register(&mut self, gateway: &Gateway, clerk: NewClerkAccount) {
        if !permitted(gateway, ResourceKind::ClerkAccount, Action::Create) {
            self.status.deny("register clerks");
            return;
        }
        match gateway.register_clerk(&clerk).await {
            Ok(created) => {
                self.rows.push(created);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }
}

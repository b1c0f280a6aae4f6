//! Supply requests: clerk-raised, admin-approved, merchant-purged.

use myduka_auth::{Action, ResourceKind, Role, is_allowed};
use myduka_client::Gateway;
use myduka_client::api::{NewSupplyRequest, SupplyRequest};
use myduka_core::SupplyRequestId;

use super::{ViewStatus, permitted};

#[derive(Debug, Clone, Default)]
pub struct SupplyRequestsView {
    pub rows: Vec<SupplyRequest>,
    pub status: ViewStatus,
}

impl SupplyRequestsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_request(role: Role) -> bool {
        is_allowed(role, ResourceKind::SupplyRequest, Action::Create)
    }

    /// The approve button also requires the row to still be pending.
    pub fn can_approve(role: Role) -> bool {
        is_allowed(role, ResourceKind::SupplyRequest, Action::Approve)
    }

    pub fn can_delete(role: Role) -> bool {
        is_allowed(role, ResourceKind::SupplyRequest, Action::Delete)
    }

    pub async fn refresh(&mut self, gateway: &Gateway) {
        match gateway.list_supply_requests().await {
            Ok(rows) => {
                self.rows = rows;
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn submit(&mut self, gateway: &Gateway, request: NewSupplyRequest) {
        if !permitted(gateway, ResourceKind::SupplyRequest, Action::Create) {
            self.status.deny("raise supply requests");
            return;
        }
        match gateway.create_supply_request(&request).await {
            Ok(created) => {
                self.rows.push(created);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn approve(&mut self, gateway: &Gateway, id: SupplyRequestId) {
        if !permitted(gateway, ResourceKind::SupplyRequest, Action::Approve) {
            self.status.deny("approve supply requests");
            return;
        }
        match gateway.approve_supply_request(id).await {
            Ok(()) => {
                if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
                    row.status = "Approved".to_string();
                }
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn remove(&mut self, gateway: &Gateway, id: SupplyRequestId) {
        if !permitted(gateway, ResourceKind::SupplyRequest, Action::Delete) {
            self.status.deny("delete supply requests");
            return;
        }
        match gateway.delete_supply_request(id).await {
            Ok(()) => {
                self.rows.retain(|r| r.id != id);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }
}

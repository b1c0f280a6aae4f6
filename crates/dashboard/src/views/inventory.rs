//! Inventory records (all three dashboards, different controls each).

use myduka_auth::{Action, ResourceKind, Role, is_allowed};
use myduka_client::Gateway;
use myduka_client::api::{InventoryRecord, NewInventoryRecord};
use myduka_core::InventoryRecordId;

use super::{ViewStatus, permitted};

#[derive(Debug, Clone, Default)]
pub struct InventoryView {
    pub rows: Vec<InventoryRecord>,
    pub status: ViewStatus,
}

impl InventoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clerks see the entry form.
    pub fn can_record(role: Role) -> bool {
        is_allowed(role, ResourceKind::InventoryRecord, Action::Create)
    }

    /// Admins see the payment toggle.
    pub fn can_toggle_payment(role: Role) -> bool {
        is_allowed(role, ResourceKind::InventoryRecord, Action::UpdatePayment)
    }

    /// Clerks see the stock-correction control.
    pub fn can_update_stock(role: Role) -> bool {
        is_allowed(role, ResourceKind::InventoryRecord, Action::UpdateStock)
    }

    /// Merchants see the delete button.
    pub fn can_delete(role: Role) -> bool {
        is_allowed(role, ResourceKind::InventoryRecord, Action::Delete)
    }

    pub async fn refresh(&mut self, gateway: &Gateway) {
        match gateway.list_inventory().await {
            Ok(rows) => {
                self.rows = rows;
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn record(&mut self, gateway: &Gateway, record: NewInventoryRecord) {
        if !permitted(gateway, ResourceKind::InventoryRecord, Action::Create) {
            self.status.deny("record inventory");
            return;
        }
        match gateway.create_inventory_record(&record).await {
            Ok(created) => {
                self.rows.push(created);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn set_payment_status(
        &mut self,
        gateway: &Gateway,
        id: InventoryRecordId,
        payment_status: bool,
    ) {
        if !permitted(gateway, ResourceKind::InventoryRecord, Action::UpdatePayment) {
            self.status.deny("update payment status");
            return;
        }
        match gateway.set_payment_status(id, payment_status).await {
            Ok(()) => {
                if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
                    row.payment_status = payment_status;
                }
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn update_stock(
        &mut self,
        gateway: &Gateway,
        id: InventoryRecordId,
        items_in_stock: i64,
        items_spoilt: i64,
    ) {
        if !permitted(gateway, ResourceKind::InventoryRecord, Action::UpdateStock) {
            self.status.deny("update stock levels");
            return;
        }
        match gateway
            .update_stock_levels(id, items_in_stock, items_spoilt)
            .await
        {
            Ok(()) => {
                if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
                    row.items_in_stock = items_in_stock;
                    row.items_spoilt = items_spoilt;
                }
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn remove(&mut self, gateway: &Gateway, id: InventoryRecordId) {
        if !permitted(gateway, ResourceKind::InventoryRecord, Action::Delete) {
            self.status.deny("delete inventory records");
            return;
        }
        match gateway.delete_inventory_record(id).await {
            Ok(()) => {
                self.rows.retain(|r| r.id != id);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }
}

//! Store management (merchant dashboard).

use myduka_auth::{Action, ResourceKind, Role, is_allowed};
use myduka_client::Gateway;
use myduka_client::api::{NewStore, Store};
use myduka_core::StoreId;

use super::{ViewStatus, permitted};

#[derive(Debug, Clone, Default)]
pub struct StoresView {
    pub rows: Vec<Store>,
    pub status: ViewStatus,
}

impl StoresView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the create form is rendered at all.
    pub fn can_create(role: Role) -> bool {
        is_allowed(role, ResourceKind::Store, Action::Create)
    }

    /// Whether the deactivate/delete buttons are rendered.
    pub fn can_manage(role: Role) -> bool {
        is_allowed(role, ResourceKind::Store, Action::Update)
            && is_allowed(role, ResourceKind::Store, Action::Delete)
    }

    pub async fn refresh(&mut self, gateway: &Gateway) {
        match gateway.list_stores().await {
            Ok(rows) => {
                self.rows = rows;
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn create(&mut self, gateway: &Gateway, store: NewStore) {
        if !permitted(gateway, ResourceKind::Store, Action::Create) {
            self.status.deny("create stores");
            return;
        }
        match gateway.create_store(&store).await {
            Ok(created) => {
                self.rows.push(created);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn deactivate(&mut self, gateway: &Gateway, id: StoreId) {
        if !permitted(gateway, ResourceKind::Store, Action::Update) {
            self.status.deny("deactivate stores");
            return;
        }
        match gateway.deactivate_store(id).await {
            Ok(()) => {
                if let Some(row) = self.rows.iter_mut().find(|s| s.id == id) {
                    row.is_active = false;
                }
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn remove(&mut self, gateway: &Gateway, id: StoreId) {
        if !permitted(gateway, ResourceKind::Store, Action::Delete) {
            self.status.deny("delete stores");
            return;
        }
        match gateway.delete_store(id).await {
            Ok(()) => {
                self.rows.retain(|s| s.id != id);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }
}

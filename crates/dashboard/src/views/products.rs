//! Product catalog (merchant and admin dashboards).

use myduka_auth::{Action, ResourceKind, Role, is_allowed};
use myduka_client::Gateway;
use myduka_client::api::{NewProduct, Product};
use myduka_core::ProductId;

use super::{ViewStatus, permitted};

#[derive(Debug, Clone, Default)]
pub struct ProductsView {
    pub rows: Vec<Product>,
    pub status: ViewStatus,
}

impl ProductsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merchants and admins share the create/edit form.
    pub fn can_edit(role: Role) -> bool {
        is_allowed(role, ResourceKind::Product, Action::Update)
    }

    /// Only the merchant sees the delete button.
    pub fn can_delete(role: Role) -> bool {
        is_allowed(role, ResourceKind::Product, Action::Delete)
    }

    pub async fn refresh(&mut self, gateway: &Gateway) {
        match gateway.list_products().await {
            Ok(rows) => {
                self.rows = rows;
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn create(&mut self, gateway: &Gateway, product: NewProduct) {
        if !permitted(gateway, ResourceKind::Product, Action::Create) {
            self.status.deny("create products");
            return;
        }
        match gateway.create_product(&product).await {
            Ok(created) => {
                self.rows.push(created);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn update(&mut self, gateway: &Gateway, id: ProductId, product: NewProduct) {
        if !permitted(gateway, ResourceKind::Product, Action::Update) {
            self.status.deny("edit products");
            return;
        }
        match gateway.update_product(id, &product).await {
            Ok(updated) => {
                if let Some(row) = self.rows.iter_mut().find(|p| p.id == id) {
                    *row = updated;
                }
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }

    pub async fn remove(&mut self, gateway: &Gateway, id: ProductId) {
        if !permitted(gateway, ResourceKind::Product, Action::Delete) {
            self.status.deny("delete products");
            return;
        }
        match gateway.delete_product(id).await {
            Ok(()) => {
                self.rows.retain(|p| p.id != id);
                self.status.ok();
            }
            Err(err) => self.status.fail(err, gateway.session()),
        }
    }
}

//! Inventory record endpoints.

use serde::{Deserialize, Serialize};

use myduka_core::{InventoryRecordId, ProductId, StoreId};

use crate::error::ApiError;
use crate::gateway::{Gateway, Method};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: InventoryRecordId,
    pub product_id: ProductId,
    pub store_id: StoreId,
    pub quantity_received: i64,
    pub items_in_stock: i64,
    pub items_spoilt: i64,
    /// `true` once the supplier has been paid.
    pub payment_status: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewInventoryRecord {
    pub product_id: ProductId,
    pub store_id: StoreId,
    pub quantity_received: i64,
    pub items_in_stock: i64,
    pub items_spoilt: i64,
    pub payment_status: bool,
}

impl Gateway {
    pub async fn list_inventory(&self) -> Result<Vec<InventoryRecord>, ApiError> {
        self.call_decoded(Method::GET, "/api/inventory", None).await
    }

    pub async fn create_inventory_record(
        &self,
        record: &NewInventoryRecord,
    ) -> Result<InventoryRecord, ApiError> {
        let body = Self::encode(record)?;
        self.call_decoded(Method::POST, "/api/inventory", Some(&body))
            .await
    }

    /// Admin path: settle or reopen the supplier payment.
    pub async fn set_payment_status(
        &self,
        id: InventoryRecordId,
        payment_status: bool,
    ) -> Result<(), ApiError> {
        let body = serde_json::json!({ "payment_status": payment_status });
        self.call(Method::PUT, &format!("/api/inventory/{id}"), Some(&body))
            .await?;
        Ok(())
    }

    /// Clerk path: correct the stock and spoilage counts.
    pub async fn update_stock_levels(
        &self,
        id: InventoryRecordId,
        items_in_stock: i64,
        items_spoilt: i64,
    ) -> Result<(), ApiError> {
        let body = serde_json::json!({
            "items_in_stock": items_in_stock,
            "items_spoilt": items_spoilt,
        });
        self.call(Method::PUT, &format!("/api/inventory/{id}"), Some(&body))
            .await?;
        Ok(())
    }

    pub async fn delete_inventory_record(&self, id: InventoryRecordId) -> Result<(), ApiError> {
        self.call(Method::DELETE, &format!("/api/inventory/{id}"), None)
            .await?;
        Ok(())
    }
}

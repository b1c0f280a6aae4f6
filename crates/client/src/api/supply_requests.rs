//! Supply request endpoints.

use serde::{Deserialize, Serialize};

use myduka_core::{ProductId, StoreId, SupplyRequestId};

use crate::error::ApiError;
use crate::gateway::{Gateway, Method};

/// Status the backend reports as a display string (`"Pending"`,
/// `"Approved"`, ...). Kept as a string so unknown future states do not
/// break list rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyRequest {
    pub id: SupplyRequestId,
    pub product_id: ProductId,
    pub store_id: StoreId,
    pub quantity_requested: i64,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl SupplyRequest {
    pub fn is_pending(&self) -> bool {
        self.status == "Pending"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSupplyRequest {
    pub product_id: ProductId,
    pub store_id: StoreId,
    pub quantity_requested: i64,
    pub notes: String,
}

impl Gateway {
    pub async fn list_supply_requests(&self) -> Result<Vec<SupplyRequest>, ApiError> {
        self.call_decoded(Method::GET, "/api/supply-requests", None)
            .await
    }

    pub async fn create_supply_request(
        &self,
        request: &NewSupplyRequest,
    ) -> Result<SupplyRequest, ApiError> {
        let body = Self::encode(request)?;
        self.call_decoded(Method::POST, "/api/supply-requests", Some(&body))
            .await
    }

    pub async fn approve_supply_request(&self, id: SupplyRequestId) -> Result<(), ApiError> {
        self.call(
            Method::PATCH,
            &format!("/api/supply-requests/{id}/approve"),
            None,
        )
        .await?;
        Ok(())
    }

    pub async fn delete_supply_request(&self, id: SupplyRequestId) -> Result<(), ApiError> {
        self.call(Method::DELETE, &format!("/api/supply-requests/{id}"), None)
            .await?;
        Ok(())
    }
}

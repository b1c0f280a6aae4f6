//! Store endpoints.

use serde::{Deserialize, Serialize};

use myduka_core::StoreId;

use crate::error::ApiError;
use crate::gateway::{Gateway, Method};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub location: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewStore {
    pub name: String,
    pub location: String,
}

impl Gateway {
    pub async fn list_stores(&self) -> Result<Vec<Store>, ApiError> {
        self.call_decoded(Method::GET, "/api/store", None).await
    }

    pub async fn create_store(&self, store: &NewStore) -> Result<Store, ApiError> {
        let body = Self::encode(store)?;
        self.call_decoded(Method::POST, "/api/store", Some(&body))
            .await
    }

    /// Stores are never edited in place; the only update is deactivation.
    pub async fn deactivate_store(&self, id: StoreId) -> Result<(), ApiError> {
        let body = serde_json::json!({ "is_active": false });
        self.call(Method::PUT, &format!("/api/store/{id}"), Some(&body))
            .await?;
        Ok(())
    }

    pub async fn delete_store(&self, id: StoreId) -> Result<(), ApiError> {
        self.call(Method::DELETE, &format!("/api/store/{id}"), None)
            .await?;
        Ok(())
    }
}

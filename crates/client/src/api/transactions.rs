//! Sales transaction endpoints.

use serde::{Deserialize, Serialize};

use myduka_core::{ProductId, StoreId, TransactionId};

use crate::error::ApiError;
use crate::gateway::{Gateway, Method};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub product_id: ProductId,
    pub store_id: StoreId,
    pub quantity_sold: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTransaction {
    pub product_id: ProductId,
    pub store_id: StoreId,
    pub quantity_sold: i64,
}

impl Gateway {
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.call_decoded(Method::GET, "/api/transaction", None)
            .await
    }

    pub async fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<Transaction, ApiError> {
        let body = Self::encode(transaction)?;
        self.call_decoded(Method::POST, "/api/transaction", Some(&body))
            .await
    }

    pub async fn delete_transaction(&self, id: TransactionId) -> Result<(), ApiError> {
        self.call(Method::DELETE, &format!("/api/transaction/{id}"), None)
            .await?;
        Ok(())
    }
}

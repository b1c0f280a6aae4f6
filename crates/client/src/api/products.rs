//! Product catalog endpoints.

use serde::{Deserialize, Serialize};

use myduka_core::ProductId;

use crate::error::ApiError;
use crate::gateway::{Gateway, Method};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub buying_price: f64,
    pub selling_price: f64,
}

/// Create/update payload (the backend takes the full field set on PUT).
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub buying_price: f64,
    pub selling_price: f64,
}

impl Gateway {
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.call_decoded(Method::GET, "/api/product", None).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let body = Self::encode(product)?;
        self.call_decoded(Method::POST, "/api/product", Some(&body))
            .await
    }

    pub async fn update_product(
        &self,
        id: ProductId,
        product: &NewProduct,
    ) -> Result<Product, ApiError> {
        let body = Self::encode(product)?;
        self.call_decoded(Method::PUT, &format!("/api/product/{id}"), Some(&body))
            .await
    }

    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.call(Method::DELETE, &format!("/api/product/{id}"), None)
            .await?;
        Ok(())
    }
}

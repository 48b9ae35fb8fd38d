//! Album and product endpoints.

use serde_json::Value;

use crate::api::Client;
use crate::error_handling::ApiError;

/// Album endpoints of the API.
#[derive(Debug, Clone, Copy)]
pub struct AlbumsService<'a> {
    client: &'a Client,
}

impl<'a> AlbumsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a specific album, identified by album ID (`album/{id}`).
    pub async fn get_album(&self, id: u32) -> Result<Value, ApiError> {
        self.client.get_json(&format!("album/{id}")).await
    }
}

/// Product endpoints of the API.
#[derive(Debug, Clone, Copy)]
pub struct ProductsService<'a> {
    client: &'a Client,
}

impl<'a> ProductsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a specific product, identified by product ID (`product/{id}`).
    pub async fn get_product(&self, id: u32) -> Result<Value, ApiError> {
        self.client.get_json(&format!("product/{id}")).await
    }
}

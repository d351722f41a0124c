//! The remote inventory service.
//!
//! [`InventoryApi`] is the seam every front end talks through.
//! [`HttpInventoryApi`] is the production implementation.

use async_trait::async_trait;

use crate::{
    Result,
    model::{Asset, AssetId, AssetPayload, Branch, Group},
};

mod http;
#[cfg(test)]
pub(crate) mod memory;

pub use http::HttpInventoryApi;

/// CRUD calls offered by the inventory service.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait InventoryApi: Send + Sync {
    /// `GET assets`
    async fn list_assets(&self) -> Result<Vec<Asset>>;

    /// `POST assets`
    async fn create_asset(&self, asset: &AssetPayload) -> Result<()>;

    /// `PUT assets/{id}`
    async fn update_asset(&self, id: AssetId, asset: &AssetPayload) -> Result<()>;

    /// `DELETE assets/{id}`
    async fn delete_asset(&self, id: AssetId) -> Result<()>;

    /// `GET branches`
    async fn list_branches(&self) -> Result<Vec<Branch>>;

    /// `GET groups`
    async fn list_groups(&self) -> Result<Vec<Group>>;
}

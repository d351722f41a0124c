use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    Error, Result,
    api::InventoryApi,
    model::{Asset, AssetId, AssetPayload, Branch, Group},
};

const ASSETS: &str = "assets";
const BRANCHES: &str = "branches";
const GROUPS: &str = "groups";

/// [`InventoryApi`] over HTTP and JSON.
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    client: Client,
    base_url: String,
}

impl HttpInventoryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn asset_url(&self, id: AssetId) -> String {
        self.url(&format!("{ASSETS}/{id}"))
    }

    async fn send(&self, method: Method, url: &str, request: RequestBuilder) -> Result<Response> {
        debug!("{method} {url}");
        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(format!("{method} {url} failed: {e}")))?;

        let status = response.status();
        debug!("{method} {url} -> {}", status.as_u16());

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(Error::Server {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self
            .send(Method::GET, &url, self.client.get(&url))
            .await?;

        response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("GET {url}: {e}")))
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn list_assets(&self) -> Result<Vec<Asset>> {
        self.get_json(ASSETS).await
    }

    async fn create_asset(&self, asset: &AssetPayload) -> Result<()> {
        let url = self.url(ASSETS);
        self.send(Method::POST, &url, self.client.post(&url).json(asset))
            .await?;
        Ok(())
    }

    async fn update_asset(&self, id: AssetId, asset: &AssetPayload) -> Result<()> {
        let url = self.asset_url(id);
        self.send(Method::PUT, &url, self.client.put(&url).json(asset))
            .await?;
        Ok(())
    }

    async fn delete_asset(&self, id: AssetId) -> Result<()> {
        let url = self.asset_url(id);
        self.send(Method::DELETE, &url, self.client.delete(&url))
            .await?;
        Ok(())
    }

    async fn list_branches(&self) -> Result<Vec<Branch>> {
        self.get_json(BRANCHES).await
    }

    async fn list_groups(&self) -> Result<Vec<Group>> {
        self.get_json(GROUPS).await
    }
}

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::indexer::{
    types::{Asset, AssetList, AssetProof},
    Indexer, IndexerError,
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest<T> {
    pub jsonrpc: String,
    pub id: String,
    pub method: String,
    #[serde(rename = "params")]
    pub parameters: T,
}

impl<T> RpcRequest<T> {
    pub fn new(method: String, parameters: T) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: "1".to_string(),
            method,
            parameters,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RpcResponse<T> {
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Deserialize, Debug)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// DAS read-API client speaking JSON-RPC to an indexer-backed RPC endpoint.
#[derive(Debug)]
pub struct DasClient {
    http: reqwest::Client,
    base_url: String,
}

impl DasClient {
    pub fn new<U: ToString>(base_url: U) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &'static str,
        parameters: serde_json::Value,
    ) -> Result<T, IndexerError> {
        debug!(method, %parameters, "read api request");
        let request = RpcRequest::new(method.to_string(), parameters);
        let response: RpcResponse<T> = self
            .http
            .post(&self.base_url)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(IndexerError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        response.result.ok_or(IndexerError::EmptyResult { method })
    }
}

#[async_trait]
impl Indexer for DasClient {
    async fn get_assets_by_owner(&self, owner: &Pubkey) -> Result<AssetList, IndexerError> {
        self.request(
            "getAssetsByOwner",
            serde_json::json!({ "ownerAddress": owner.to_string() }),
        )
        .await
    }

    async fn get_asset(&self, asset_id: &Pubkey) -> Result<Asset, IndexerError> {
        self.request("getAsset", serde_json::json!({ "id": asset_id.to_string() }))
            .await
    }

    async fn get_asset_proof(&self, asset_id: &Pubkey) -> Result<AssetProof, IndexerError> {
        self.request(
            "getAssetProof",
            serde_json::json!({ "id": asset_id.to_string() }),
        )
        .await
    }
}

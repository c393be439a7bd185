pub mod base58;
mod das_client;
pub mod types;

use std::fmt::Debug;

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

pub use das_client::DasClient;
pub use types::{Asset, AssetList, AssetProof};

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("read api error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("read api returned no result for {method}")]
    EmptyResult { method: &'static str },

    #[error("invalid base58 value: {0}")]
    InvalidBase58(String),

    #[error("invalid value length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Read API extension of a Solana RPC endpoint, backed by a DAS indexer.
///
/// Compressed assets live off-chain in Merkle trees; resolving ownership and
/// membership proofs requires an indexer rather than plain account fetches.
#[async_trait]
pub trait Indexer: Send + Sync + Debug {
    async fn get_assets_by_owner(&self, owner: &Pubkey) -> Result<AssetList, IndexerError>;

    async fn get_asset(&self, asset_id: &Pubkey) -> Result<Asset, IndexerError>;

    async fn get_asset_proof(&self, asset_id: &Pubkey) -> Result<AssetProof, IndexerError>;
}

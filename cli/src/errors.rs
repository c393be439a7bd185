use cnft_client::{tree::TreeExtError, IndexerError, RpcError};
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("no compressed asset owned by {owner} has tree authority {authority}")]
    NoMatchingAsset { owner: Pubkey, authority: Pubkey },

    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("Indexer error: {0}")]
    Indexer(#[from] IndexerError),

    #[error("Merkle tree account error: {0}")]
    Tree(#[from] TreeExtError),
}

pub mod constants;
pub mod indexer;
pub mod instruction;
pub mod proof;
pub mod rpc;
pub mod tree;

pub use indexer::{DasClient, Indexer, IndexerError};
pub use rpc::{Rpc, RpcError, SolanaRpc};
pub use tree::{TreeAccount, TreeAccountExt};

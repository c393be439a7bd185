use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use crate::rpc::{Rpc, RpcError};

/// Two tag bytes (account type, header version) plus the 54-byte v1 header.
pub const TREE_HEADER_LEN: usize = 56;

const NODE_LEN: usize = 32;
const CONCURRENT_MERKLE_TREE_ACCOUNT_TYPE: u8 = 1;
const HEADER_VERSION_V1: u8 = 0;

#[derive(Error, Debug)]
pub enum TreeParseError {
    #[error("account data too short: need {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("not a concurrent merkle tree account (type {0})")]
    UnknownAccountType(u8),

    #[error("unsupported header version {0}")]
    UnsupportedHeaderVersion(u8),

    #[error("canopy byte length {0} does not describe a full binary tree")]
    CanopyLengthMismatch(usize),

    #[error("implausible tree header: max_depth {max_depth}, max_buffer_size {max_buffer_size}")]
    HeaderOutOfRange { max_depth: u32, max_buffer_size: u32 },
}

#[derive(Error, Debug)]
pub enum TreeExtError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error(transparent)]
    Parse(#[from] TreeParseError),

    #[error("merkle tree account {0} not found")]
    NotFound(Pubkey),
}

/// Header of an SPL concurrent merkle tree account.
///
/// The canopy depth is not stored explicitly; it is derived from the number
/// of node bytes trailing the tree body. Proofs submitted on-chain omit their
/// last `canopy_depth` nodes because the program caches those levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeAccount {
    pub max_buffer_size: u32,
    pub max_depth: u32,
    pub authority: Pubkey,
    pub creation_slot: u64,
    pub canopy_depth: u32,
}

impl TreeAccount {
    pub fn from_bytes(data: &[u8]) -> Result<Self, TreeParseError> {
        let account_type = *data.first().ok_or(TreeParseError::TooShort {
            expected: TREE_HEADER_LEN,
            actual: data.len(),
        })?;
        if account_type != CONCURRENT_MERKLE_TREE_ACCOUNT_TYPE {
            return Err(TreeParseError::UnknownAccountType(account_type));
        }
        let version = read_array::<1>(data, 1)?[0];
        if version != HEADER_VERSION_V1 {
            return Err(TreeParseError::UnsupportedHeaderVersion(version));
        }

        let max_buffer_size = u32::from_le_bytes(read_array(data, 2)?);
        let max_depth = u32::from_le_bytes(read_array(data, 6)?);
        let authority = Pubkey::new_from_array(read_array(data, 10)?);
        let creation_slot = u64::from_le_bytes(read_array(data, 42)?);

        let expected = tree_body_len(max_depth, max_buffer_size)
            .and_then(|body_len| body_len.checked_add(TREE_HEADER_LEN))
            .ok_or(TreeParseError::HeaderOutOfRange {
                max_depth,
                max_buffer_size,
            })?;
        if data.len() < expected {
            return Err(TreeParseError::TooShort {
                expected,
                actual: data.len(),
            });
        }
        let canopy_depth = canopy_depth_from_len(data.len() - expected)?;

        Ok(Self {
            max_buffer_size,
            max_depth,
            authority,
            creation_slot,
            canopy_depth,
        })
    }
}

/// Size of `ConcurrentMerkleTree<MAX_DEPTH, MAX_BUFFER_SIZE>`: three u64
/// counters, the changelog ring buffer, and the rightmost path. Changelog
/// entries and paths both occupy `40 + 32 * max_depth` bytes.
///
/// Header values come from untrusted account bytes; `None` means the sizes
/// do not fit in memory and the header cannot be legitimate.
fn tree_body_len(max_depth: u32, max_buffer_size: u32) -> Option<usize> {
    let entry = NODE_LEN.checked_mul(max_depth as usize)?.checked_add(40)?;
    (max_buffer_size as usize)
        .checked_add(1)?
        .checked_mul(entry)?
        .checked_add(24)
}

/// The canopy caches the top levels of the tree as a full binary tree without
/// the root, so `node_count + 2` must be a power of two.
fn canopy_depth_from_len(canopy_bytes: usize) -> Result<u32, TreeParseError> {
    if canopy_bytes == 0 {
        return Ok(0);
    }
    if canopy_bytes % NODE_LEN != 0 {
        return Err(TreeParseError::CanopyLengthMismatch(canopy_bytes));
    }
    let node_count = canopy_bytes / NODE_LEN + 2;
    if !node_count.is_power_of_two() {
        return Err(TreeParseError::CanopyLengthMismatch(canopy_bytes));
    }
    Ok(node_count.trailing_zeros() - 1)
}

fn read_array<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], TreeParseError> {
    data.get(offset..offset + N)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(TreeParseError::TooShort {
            expected: offset + N,
            actual: data.len(),
        })
}

/// Extension to the RPC connection for fetching and parsing tree accounts.
#[async_trait]
pub trait TreeAccountExt: Rpc {
    async fn get_tree_account(&mut self, pubkey: Pubkey) -> Result<TreeAccount, TreeExtError> {
        let account = self
            .get_account(pubkey)
            .await?
            .ok_or(TreeExtError::NotFound(pubkey))?;
        Ok(TreeAccount::from_bytes(&account.data)?)
    }
}

impl<T: Rpc> TreeAccountExt for T {}

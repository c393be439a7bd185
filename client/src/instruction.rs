use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::constants::{
    BUBBLEGUM_PROGRAM_ID, SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, SPL_NOOP_PROGRAM_ID,
};

/// `sha256("global:transfer_compressed_nft")[..8]`
pub const TRANSFER_COMPRESSED_NFT_DISCRIMINATOR: [u8; 8] = [128, 137, 161, 131, 163, 182, 195, 233];
/// `sha256("global:burn_compressed_nft")[..8]`
pub const BURN_COMPRESSED_NFT_DISCRIMINATOR: [u8; 8] = [246, 73, 68, 103, 210, 237, 51, 54];

/// Leaf description shared by transfer and burn: the proved root and the
/// hashes and position identifying the leaf. No local validation is done on
/// the byte values; malformed inputs are rejected by the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedNftArgs {
    pub root: [u8; 32],
    pub data_hash: [u8; 32],
    pub creator_hash: [u8; 32],
    pub nonce: u64,
    pub index: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct TransferAccounts {
    pub leaf_owner: Pubkey,
    pub leaf_delegate: Pubkey,
    pub tree_authority: Pubkey,
    pub merkle_tree: Pubkey,
    pub new_leaf_owner: Pubkey,
}

#[derive(Debug, Clone, Copy)]
pub struct BurnAccounts {
    pub leaf_owner: Pubkey,
    pub leaf_delegate: Pubkey,
    pub tree_authority: Pubkey,
    pub merkle_tree: Pubkey,
}

pub fn transfer_compressed_nft(
    program_id: Pubkey,
    accounts: &TransferAccounts,
    args: &CompressedNftArgs,
    proof_path: &[AccountMeta],
) -> Instruction {
    let mut metas = Vec::with_capacity(9 + proof_path.len());
    metas.extend([
        AccountMeta::new(accounts.leaf_owner, true),
        AccountMeta::new(accounts.leaf_delegate, true),
        AccountMeta::new(accounts.tree_authority, false),
        AccountMeta::new(accounts.merkle_tree, false),
        AccountMeta::new(accounts.new_leaf_owner, false),
        AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
        AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, false),
        AccountMeta::new_readonly(BUBBLEGUM_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program::ID, false),
    ]);
    metas.extend_from_slice(proof_path);

    Instruction {
        program_id,
        accounts: metas,
        data: instruction_data(TRANSFER_COMPRESSED_NFT_DISCRIMINATOR, args),
    }
}

pub fn burn_compressed_nft(
    program_id: Pubkey,
    accounts: &BurnAccounts,
    args: &CompressedNftArgs,
    proof_path: &[AccountMeta],
) -> Instruction {
    let mut metas = Vec::with_capacity(8 + proof_path.len());
    metas.extend([
        AccountMeta::new(accounts.leaf_owner, true),
        AccountMeta::new(accounts.leaf_delegate, true),
        AccountMeta::new(accounts.tree_authority, false),
        AccountMeta::new(accounts.merkle_tree, false),
        AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
        AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, false),
        AccountMeta::new_readonly(BUBBLEGUM_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program::ID, false),
    ]);
    metas.extend_from_slice(proof_path);

    Instruction {
        program_id,
        accounts: metas,
        data: instruction_data(BURN_COMPRESSED_NFT_DISCRIMINATOR, args),
    }
}

fn instruction_data(discriminator: [u8; 8], args: &CompressedNftArgs) -> Vec<u8> {
    let mut data = Vec::with_capacity(8 + 32 + 32 + 32 + 8 + 4);
    data.extend(discriminator);
    data.extend(args.root);
    data.extend(args.data_hash);
    data.extend(args.creator_hash);
    data.extend(args.nonce.to_le_bytes());
    data.extend(args.index.to_le_bytes());
    data
}

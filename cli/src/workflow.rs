use cnft_client::{
    indexer::{
        base58::{decode_hash, decode_pubkey},
        types::{Asset, AssetList},
        Indexer,
    },
    instruction::{
        burn_compressed_nft, transfer_compressed_nft, BurnAccounts, CompressedNftArgs,
        TransferAccounts,
    },
    proof::assemble_proof_path,
    Rpc, TreeAccountExt,
};
use solana_sdk::{
    native_token::lamports_to_sol,
    pubkey::Pubkey,
    signature::{Signature, Signer},
};
use tracing::{info, warn};

use crate::{config::Config, errors::WorkflowError};

/// Runs the full sequential workflow: locate the payer's compressed NFT for
/// the configured tree authority, transfer it, then burn it. The proof
/// fetched for the transfer is reused for the burn.
pub async fn transfer_and_burn<R, I>(
    rpc: &mut R,
    indexer: &I,
    config: &Config,
) -> Result<(Signature, Signature), WorkflowError>
where
    R: Rpc,
    I: Indexer + ?Sized,
{
    let payer = rpc.get_payer().pubkey();
    let balance = rpc.get_balance(&payer).await?;
    info!(%payer, balance_sol = lamports_to_sol(balance), "payer balance");

    let assets = indexer.get_assets_by_owner(&payer).await?;
    info!(total = assets.total, "assets returned by indexer");

    let asset = locate_asset(&assets, &payer, &config.tree_authority)?;
    let asset_id = decode_pubkey(&asset.id)?;
    info!(%asset_id, "matching compressed asset");

    let asset = indexer.get_asset(&asset_id).await?;
    let asset_proof = indexer.get_asset_proof(&asset_id).await?;

    let merkle_tree = decode_pubkey(&asset.compression.tree)?;
    let tree_account = rpc.get_tree_account(merkle_tree).await?;
    if tree_account.authority != config.tree_authority {
        warn!(
            configured = %config.tree_authority,
            on_chain = %tree_account.authority,
            "configured tree authority differs from the tree account authority"
        );
    }

    let proof_path = assemble_proof_path(&asset_proof.proof, tree_account.canopy_depth)?;
    info!(
        proof_len = asset_proof.proof.len(),
        canopy_depth = tree_account.canopy_depth,
        submitted = proof_path.len(),
        "assembled proof path"
    );

    let leaf_id = asset.compression.leaf_id;
    let args = CompressedNftArgs {
        root: decode_hash(&asset_proof.root)?,
        data_hash: decode_hash(&asset.compression.data_hash)?,
        creator_hash: decode_hash(&asset.compression.creator_hash)?,
        nonce: leaf_id,
        index: leaf_id as u32,
    };

    let transfer_ix = transfer_compressed_nft(
        config.program_id,
        &TransferAccounts {
            leaf_owner: payer,
            leaf_delegate: payer,
            tree_authority: config.tree_authority,
            merkle_tree,
            new_leaf_owner: config.new_leaf_owner,
        },
        &args,
        &proof_path,
    );
    let payer_keypair = rpc.get_payer().insecure_clone();
    let transfer_signature = rpc
        .create_and_send_transaction(&[transfer_ix], &payer, &[&payer_keypair])
        .await?;
    info!(url = %explorer_url(&transfer_signature, &config.cluster), "transfer confirmed");

    let burn_ix = burn_compressed_nft(
        config.program_id,
        &BurnAccounts {
            leaf_owner: payer,
            leaf_delegate: payer,
            tree_authority: config.tree_authority,
            merkle_tree,
        },
        &args,
        &proof_path,
    );
    let burn_signature = rpc
        .create_and_send_transaction(&[burn_ix], &payer, &[&payer_keypair])
        .await?;
    info!(url = %explorer_url(&burn_signature, &config.cluster), "burn confirmed");

    Ok((transfer_signature, burn_signature))
}

/// Not finding an asset is an explicit error, never a null identifier that
/// gets used downstream.
fn locate_asset<'a>(
    assets: &'a AssetList,
    owner: &Pubkey,
    authority: &Pubkey,
) -> Result<&'a Asset, WorkflowError> {
    assets
        .find_for_authority(authority)
        .ok_or(WorkflowError::NoMatchingAsset {
            owner: *owner,
            authority: *authority,
        })
}

pub fn explorer_url(signature: &Signature, cluster: &str) -> String {
    format!(
        "https://explorer.solana.com/tx/{}?cluster={}",
        signature, cluster
    )
}

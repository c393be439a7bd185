use solana_program::instruction::AccountMeta;

use crate::indexer::{base58::decode_pubkey, IndexerError};

/// Converts an indexer proof path into the account references submitted with
/// the instruction.
///
/// The last `canopy_depth` nodes are dropped because the on-chain tree caches
/// those levels. A canopy depth at or beyond the proof length yields an empty
/// list; the program treats that as a valid (fully cached) proof.
pub fn assemble_proof_path(
    proof: &[String],
    canopy_depth: u32,
) -> Result<Vec<AccountMeta>, IndexerError> {
    let submitted = proof.len().saturating_sub(canopy_depth as usize);
    proof[..submitted]
        .iter()
        .map(|node| decode_pubkey(node).map(|pubkey| AccountMeta::new_readonly(pubkey, false)))
        .collect()
}

#[cfg(test)]
mod tests {
    use solana_sdk::pubkey::Pubkey;

    use super::*;

    fn proof_nodes(len: usize) -> Vec<String> {
        (0..len).map(|_| Pubkey::new_unique().to_string()).collect()
    }

    #[test]
    fn trims_canopy_levels() {
        let proof = proof_nodes(20);
        let path = assemble_proof_path(&proof, 5).unwrap();
        assert_eq!(path.len(), 15);
        for (meta, node) in path.iter().zip(&proof) {
            assert_eq!(meta.pubkey.to_string(), *node);
            assert!(!meta.is_signer);
            assert!(!meta.is_writable);
        }
    }

    #[test]
    fn zero_canopy_keeps_full_proof() {
        let proof = proof_nodes(14);
        let path = assemble_proof_path(&proof, 0).unwrap();
        assert_eq!(path.len(), 14);
    }

    #[test]
    fn canopy_deeper_than_proof_yields_empty_path() {
        let proof = proof_nodes(3);
        assert!(assemble_proof_path(&proof, 3).unwrap().is_empty());
        assert!(assemble_proof_path(&proof, 10).unwrap().is_empty());
    }

    #[test]
    fn empty_proof_is_valid() {
        assert!(assemble_proof_path(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn propagates_malformed_nodes() {
        let proof = vec!["!!not base58!!".to_string()];
        assert!(assemble_proof_path(&proof, 0).is_err());
    }

    #[test]
    fn trimmed_length_matches_for_every_canopy_depth() {
        let proof = proof_nodes(12);
        for canopy in 0..=proof.len() as u32 {
            let path = assemble_proof_path(&proof, canopy).unwrap();
            assert_eq!(path.len(), proof.len() - canopy as usize);
        }
    }
}

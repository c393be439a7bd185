use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Page of assets returned by `getAssetsByOwner`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AssetList {
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub items: Vec<Asset>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub authorities: Vec<AssetAuthority>,
    pub compression: AssetCompression,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssetAuthority {
    pub address: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssetCompression {
    pub compressed: bool,
    pub tree: String,
    pub data_hash: String,
    pub creator_hash: String,
    /// Leaf id doubles as the nonce and the leaf index within the tree.
    pub leaf_id: u64,
}

/// Merkle membership proof returned by `getAssetProof`, ordered leaf to root.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssetProof {
    pub root: String,
    pub proof: Vec<String>,
    #[serde(default)]
    pub node_index: u64,
    #[serde(default)]
    pub leaf: String,
    #[serde(default)]
    pub tree_id: String,
}

impl AssetList {
    /// Returns the first compressed asset whose authorities contain
    /// `authority`, or `None` when nothing matches.
    ///
    /// The indexer gives no ordering guarantee, so which asset wins when
    /// several match is unspecified.
    pub fn find_for_authority(&self, authority: &Pubkey) -> Option<&Asset> {
        let authority = authority.to_string();
        self.items.iter().find(|asset| {
            asset.compression.compressed
                && asset.authorities.iter().any(|a| a.address == authority)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str, compressed: bool, authorities: &[Pubkey]) -> Asset {
        Asset {
            id: id.to_string(),
            authorities: authorities
                .iter()
                .map(|a| AssetAuthority {
                    address: a.to_string(),
                    scopes: vec!["full".to_string()],
                })
                .collect(),
            compression: AssetCompression {
                compressed,
                tree: Pubkey::new_unique().to_string(),
                data_hash: Pubkey::new_unique().to_string(),
                creator_hash: Pubkey::new_unique().to_string(),
                leaf_id: 0,
            },
        }
    }

    #[test]
    fn finds_first_matching_compressed_asset() {
        let authority = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let list = AssetList {
            total: 4,
            items: vec![
                asset("uncompressed", false, &[authority]),
                asset("wrong-authority", true, &[other]),
                asset("match-1", true, &[other, authority]),
                asset("match-2", true, &[authority]),
            ],
            ..Default::default()
        };

        let found = list.find_for_authority(&authority).unwrap();
        assert_eq!(found.id, "match-1");
    }

    #[test]
    fn returns_none_for_empty_list() {
        let list = AssetList::default();
        assert!(list.find_for_authority(&Pubkey::new_unique()).is_none());
    }

    #[test]
    fn returns_none_when_nothing_matches() {
        let authority = Pubkey::new_unique();
        let list = AssetList {
            total: 2,
            items: vec![
                asset("uncompressed", false, &[authority]),
                asset("other", true, &[Pubkey::new_unique()]),
            ],
            ..Default::default()
        };
        assert!(list.find_for_authority(&authority).is_none());
    }

    #[test]
    fn deserializes_read_api_asset() {
        let value = serde_json::json!({
            "id": "5rkrhnKztmNx9fkHZjEvJJ9nAtdYDQ2ExRC2uV9vpLLG",
            "authorities": [
                { "address": "6u8dggPgY2jSP5jzhPXyUc8HrMpM7DTWfUgRK33zKEek", "scopes": ["full"] }
            ],
            "compression": {
                "eligible": false,
                "compressed": true,
                "data_hash": "29BZ68mTM3W3Qe8QZ4Y4RLBdPPfuXQEps3WAJa2s2Qmf",
                "creator_hash": "DTcNQbyQn8sGYFTCsdA2RHz46rMyrjYsYAkGV2Vbco9t",
                "asset_hash": "ATLcvzSrtzRGK9CqxAynfMg458h4g2nWoZiPYZ8Xqa25",
                "tree": "Hw2qE4TKe8rt3VGWupLEH7wJtTzTJByUAxT8SVPSxgTX",
                "seq": 3,
                "leaf_id": 2
            }
        });

        let asset: Asset = serde_json::from_value(value).unwrap();
        assert!(asset.compression.compressed);
        assert_eq!(asset.compression.leaf_id, 2);
        assert_eq!(asset.authorities.len(), 1);
    }
}

use std::{fs, str::FromStr};

use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use thiserror::Error;

use crate::cli::RunArgs;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read keypair file {path}: {error}")]
    KeypairFile { path: String, error: String },

    #[error("invalid keypair data: {0}")]
    InvalidKeypair(String),

    #[error("invalid pubkey: {field} - {error}")]
    InvalidPubkey { field: &'static str, error: String },
}

#[derive(Debug)]
pub struct Config {
    pub rpc_url: String,
    pub payer: Keypair,
    pub program_id: Pubkey,
    pub tree_authority: Pubkey,
    pub new_leaf_owner: Pubkey,
    pub cluster: String,
}

impl Config {
    pub fn from_args(args: &RunArgs) -> Result<Self, ConfigError> {
        let payer = load_keypair_from_file(&args.payer)?;
        let program_id = parse_pubkey(&args.program_id, "program_id")?;
        let tree_authority = parse_pubkey(&args.tree_authority, "tree_authority")?;
        let new_leaf_owner = match &args.new_leaf_owner {
            Some(value) => parse_pubkey(value, "new_leaf_owner")?,
            None => payer.pubkey(),
        };

        Ok(Self {
            rpc_url: args.rpc_url.clone(),
            payer,
            program_id,
            tree_authority,
            new_leaf_owner,
            cluster: args.cluster.clone(),
        })
    }
}

pub fn load_keypair_from_file(path: &str) -> Result<Keypair, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::KeypairFile {
        path: path.to_string(),
        error: e.to_string(),
    })?;
    let bytes: Vec<u8> =
        serde_json::from_str(&contents).map_err(|e| ConfigError::InvalidKeypair(e.to_string()))?;
    Keypair::from_bytes(&bytes).map_err(|e| ConfigError::InvalidKeypair(e.to_string()))
}

fn parse_pubkey(value: &str, field: &'static str) -> Result<Pubkey, ConfigError> {
    Pubkey::from_str(value.trim()).map_err(|e| ConfigError::InvalidPubkey {
        field,
        error: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args(payer_path: &str) -> RunArgs {
        RunArgs {
            rpc_url: "http://localhost:8899".to_string(),
            payer: payer_path.to_string(),
            tree_authority: Pubkey::new_unique().to_string(),
            new_leaf_owner: None,
            program_id: "ApT1qWmvuGbpjTyDXhB3U2yjxvb612xDRoeYqsUjUVgo".to_string(),
            cluster: "devnet".to_string(),
        }
    }

    fn write_keypair_file(keypair: &Keypair) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let bytes: Vec<u8> = keypair.to_bytes().to_vec();
        write!(file, "{}", serde_json::to_string(&bytes).unwrap()).unwrap();
        file
    }

    #[test]
    fn loads_keypair_and_defaults_recipient_to_payer() {
        let keypair = Keypair::new();
        let file = write_keypair_file(&keypair);
        let config = Config::from_args(&args(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.payer.pubkey(), keypair.pubkey());
        assert_eq!(config.new_leaf_owner, keypair.pubkey());
    }

    #[test]
    fn explicit_recipient_overrides_payer() {
        let keypair = Keypair::new();
        let file = write_keypair_file(&keypair);
        let recipient = Pubkey::new_unique();
        let mut args = args(file.path().to_str().unwrap());
        args.new_leaf_owner = Some(recipient.to_string());
        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.new_leaf_owner, recipient);
    }

    #[test]
    fn missing_keypair_file_is_an_error() {
        let result = Config::from_args(&args("/definitely/not/here.json"));
        assert!(matches!(result, Err(ConfigError::KeypairFile { .. })));
    }

    #[test]
    fn malformed_keypair_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = load_keypair_from_file(file.path().to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::InvalidKeypair(_))));
    }

    #[test]
    fn bad_tree_authority_is_an_error() {
        let keypair = Keypair::new();
        let file = write_keypair_file(&keypair);
        let mut args = args(file.path().to_str().unwrap());
        args.tree_authority = "zz".to_string();
        let result = Config::from_args(&args);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPubkey {
                field: "tree_authority",
                ..
            })
        ));
    }
}

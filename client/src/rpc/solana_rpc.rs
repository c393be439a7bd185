use std::fmt::{Debug, Formatter};

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};

use crate::rpc::{errors::RpcError, rpc_connection::Rpc};

pub struct SolanaRpc {
    pub client: RpcClient,
    pub payer: Keypair,
}

impl Debug for SolanaRpc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolanaRpc {{ client: {:?} }}", self.client.url())
    }
}

impl SolanaRpc {
    pub fn new<U: ToString>(
        url: U,
        payer: Keypair,
        commitment_config: Option<CommitmentConfig>,
    ) -> Self {
        let commitment_config = commitment_config.unwrap_or(CommitmentConfig::confirmed());
        let client = RpcClient::new_with_commitment(url.to_string(), commitment_config);
        Self { client, payer }
    }
}

#[async_trait]
impl Rpc for SolanaRpc {
    fn get_payer(&self) -> &Keypair {
        &self.payer
    }

    fn get_url(&self) -> String {
        self.client.url()
    }

    async fn get_balance(&mut self, pubkey: &Pubkey) -> Result<u64, RpcError> {
        self.client.get_balance(pubkey).await.map_err(RpcError::from)
    }

    async fn get_account(&mut self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        let response = self
            .client
            .get_account_with_commitment(&address, self.client.commitment())
            .await?;
        Ok(response.value)
    }

    async fn get_latest_blockhash(&mut self) -> Result<Hash, RpcError> {
        self.client
            .get_latest_blockhash()
            .await
            .map_err(RpcError::from)
    }

    async fn process_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<Signature, RpcError> {
        self.client
            .send_and_confirm_transaction(&transaction)
            .await
            .map_err(RpcError::from)
    }
}

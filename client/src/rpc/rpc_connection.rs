use std::fmt::Debug;

use async_trait::async_trait;
use solana_program::instruction::Instruction;
use solana_sdk::{
    account::Account,
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};

use crate::rpc::errors::RpcError;

/// Connection to a Solana cluster.
///
/// Implementations sign with the configured payer, broadcast, and block until
/// the configured commitment level is reached. There is deliberately no retry
/// policy: a failed submission is fatal to that step.
#[async_trait]
pub trait Rpc: Send + Sync + Debug {
    fn get_payer(&self) -> &Keypair;
    fn get_url(&self) -> String;

    async fn get_balance(&mut self, pubkey: &Pubkey) -> Result<u64, RpcError>;
    async fn get_account(&mut self, address: Pubkey) -> Result<Option<Account>, RpcError>;
    async fn get_latest_blockhash(&mut self) -> Result<Hash, RpcError>;

    /// Sends the transaction and waits for confirmation.
    async fn process_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<Signature, RpcError>;

    async fn create_and_send_transaction<'a>(
        &'a mut self,
        instructions: &'a [Instruction],
        payer: &'a Pubkey,
        signers: &'a [&'a Keypair],
    ) -> Result<Signature, RpcError> {
        let blockhash = self.get_latest_blockhash().await?;
        let transaction =
            Transaction::new_signed_with_payer(instructions, Some(payer), signers, blockhash);
        self.process_transaction(transaction).await
    }
}

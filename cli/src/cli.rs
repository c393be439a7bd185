use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Locate a compressed NFT owned by the payer, transfer it, then burn it.
    Run(RunArgs),
}

#[derive(Parser, Clone, Debug)]
pub struct RunArgs {
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Path to a JSON keypair file (byte array) used as payer and leaf owner.
    #[arg(long, env = "LOCAL_PAYER_JSON_ABSPATH")]
    pub payer: String,

    /// Tree authority to filter the owner's assets by.
    #[arg(long, env = "TREE_AUTHORITY")]
    pub tree_authority: String,

    /// Recipient of the transfer. Defaults to the payer (transfer to self).
    #[arg(long, env = "NEW_LEAF_OWNER")]
    pub new_leaf_owner: Option<String>,

    #[arg(
        long,
        env = "CNFT_PROGRAM_ID",
        default_value = "ApT1qWmvuGbpjTyDXhB3U2yjxvb612xDRoeYqsUjUVgo"
    )]
    pub program_id: String,

    /// Cluster name used for block explorer links.
    #[arg(long, env = "SOLANA_CLUSTER", default_value = "devnet")]
    pub cluster: String,
}

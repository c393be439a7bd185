use anyhow::Context;
use clap::Parser;
use cnft_cli::{
    cli::{Cli, Commands},
    config::Config,
    workflow::transfer_and_burn,
};
use cnft_client::{DasClient, SolanaRpc};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cnft_cli::setup_logger();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => {
            let config = Config::from_args(&args).context("failed to build configuration")?;
            let payer = config.payer.insecure_clone();
            let mut rpc = SolanaRpc::new(&config.rpc_url, payer, None);
            let indexer = DasClient::new(&config.rpc_url);

            transfer_and_burn(&mut rpc, &indexer, &config)
                .await
                .context("transfer and burn workflow failed")?;
        }
    }
    Ok(())
}

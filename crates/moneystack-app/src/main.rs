use anyhow::Result;
use clap::Parser;

use moneystack::app::run_task_mode;
use moneystack::{Cli, ClientConfig, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client_config = ClientConfig::from_args(&cli.service, cli.verbose);

    match &cli.command {
        Commands::Agent(args) => run_task_mode(args, &client_config).await,
        command => {
            let result = command.execute(&client_config).await?;
            println!("{}", result);
            Ok(())
        }
    }
}

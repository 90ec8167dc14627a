pub mod commands;
pub mod modules;
pub mod shared;

use clap::Parser;

use commands::Cli;
use shared::utils::logger::init_logger_with_level;

pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logger_with_level(cli.log_level());

    commands::dispatch(cli).await
}

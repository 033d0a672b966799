//! Overhang CLI - log climbing sessions and read your stats from a terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "overhang",
    version,
    about = "Climbing-gym progress tracker"
)]
struct Cli {
    #[command(flatten)]
    connection: overhang_cmd::Connection,

    #[command(subcommand)]
    command: overhang_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("backend {}", cli.connection.base_url);
    overhang_cmd::run(cli.connection, cli.command).await
}

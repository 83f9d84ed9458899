use anyhow::Result;
use clap::Parser;
use parlor::cli::GameCli;

fn main() -> Result<()> {
    let cli = GameCli::parse();
    cli.run()
}

use anyhow::Result;
use clap::Parser;
use parlor::cli::TellerCli;

fn main() -> Result<()> {
    let cli = TellerCli::parse();
    cli.run()
}

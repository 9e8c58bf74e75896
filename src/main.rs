use std::io;
use std::process::ExitCode;

use clap::Parser;

use kyc_intake::cli::{execute, Cli, Command};
use kyc_intake::logging::init_tracing;

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let command = cli.command.unwrap_or(Command::Run);
    tracing::info!(command = command.name(), "starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    execute(command, &config, stdin.lock(), &mut stdout)
}

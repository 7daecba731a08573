mod commands;
mod config;
mod logging;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use verikit_calldata::ProofSystem;
use verikit_driver::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "verikit", about = "End-to-end checks for ZK proof verifier contracts")]
struct Cli {
    /// Machine-readable output on stdout
    #[arg(long, global = true)]
    json: bool,
    /// Suite configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Deploy each verifier, prove, and check the verdict
    Run {
        /// Run only the scenario with this name
        #[arg(long)]
        only: Option<String>,
    },
    /// Adapt exported calldata into verifier arguments
    Calldata {
        /// groth16 or plonk
        #[arg(long)]
        system: ProofSystem,
        /// Output of `snarkjs zkey export soliditycalldata`
        calldata: String,
    },
    /// Pin the pragma and contract name of generated Solidity verifiers
    BumpSolidity {
        /// Verifier sources (defaults to the configured list)
        files: Vec<PathBuf>,
    },
    /// Inspect or create the suite configuration
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },
}

#[derive(Subcommand)]
enum ConfigCmd {
    /// Print the effective configuration
    Show,
    /// Write a starter configuration for the HelloWorld, Multiplier3 and PLONK verifiers
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    logging::init();

    match cli.command {
        Cmd::Run { only } => commands::run::run(&cli.config, only.as_deref()).await?,
        Cmd::Calldata { system, calldata } => commands::calldata::run(system, &calldata)?,
        Cmd::BumpSolidity { files } => commands::bump::run(&cli.config, files)?,
        Cmd::Config { action } => match action {
            ConfigCmd::Show => commands::config::show(&cli.config)?,
            ConfigCmd::Init { force } => commands::config::init(&cli.config, force)?,
        },
    }
    Ok(())
}

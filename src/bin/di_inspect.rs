//! di-inspect: resolve constructor and callable dependencies from a manifest
//!
//! ## Features
//!
//! - **constructor**: resolve the constructor parameters of a described type
//! - **callable**: resolve the parameters of a described callable
//! - **list**: show described types and callables
//! - **check**: resolve everything and report unresolvable parameters
//!
//! ## Example Usage
//!
//! ```bash
//! di-inspect --manifest services.yaml constructor 'App\Mailer'
//! di-inspect --manifest services.yaml --json callable strlen
//! DI_INSPECT_MANIFEST=services.yaml di-inspect check --strict
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

mod inspect_cli;

use di_inspect::InspectConfig;
use inspect_cli::{
    callable::CallableCmd, check::CheckCmd, constructor::ConstructorCmd, list::ListCmd,
    InspectContext,
};

#[derive(Parser)]
#[command(
    name = "di-inspect",
    author,
    version,
    about = "Resolve dependency-injection bindings from a type manifest",
    long_about = "Classifies every constructor or callable parameter described in a manifest \
                  as a literal value, a class dependency, or unresolvable."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Manifest describing types and callables (YAML or JSON) [env: DI_INSPECT_MANIFEST]
    #[arg(long, short, global = true)]
    manifest: Option<std::path::PathBuf>,

    /// Output as JSON instead of human-readable format [env: DI_INSPECT_JSON]
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging to stderr (-v debug, -vv trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the constructor parameters of a type
    Constructor(ConstructorCmd),

    /// Resolve the parameters of a callable
    Callable(CallableCmd),

    /// List described types and callables
    List(ListCmd),

    /// Resolve every target and report unresolvable parameters
    Check(CheckCmd),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let Cli {
        command,
        manifest,
        json,
        verbose,
    } = Cli::parse();
    init_tracing(verbose);

    let config = InspectConfig::from_env().with_cli(manifest, json);
    let ctx = InspectContext::load(&config)?;

    match command {
        Commands::Constructor(cmd) => cmd.execute(&ctx),
        Commands::Callable(cmd) => cmd.execute(&ctx),
        Commands::List(cmd) => cmd.execute(&ctx),
        Commands::Check(cmd) => cmd.execute(&ctx),
    }
}

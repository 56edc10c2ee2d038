//! `route-table`: inspect and resolve the user-agent route table.
//!
//! ```text
//! route-table validate routes.toml
//! route-table resolve /RegisterWallet
//! route-table -c routes.toml name "View Wallet"
//! route-table list
//! ```
//!
//! Exit codes: 0 success, 1 invalid table or I/O failure, 2 navigation not resolved.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use user_agent_router::config::loader::read_config;
use user_agent_router::observability::logging::init_logging;
use user_agent_router::{NavigationRequest, Resolution, ResolveError, RouteTable, RouterConfig};

const EXIT_INVALID: u8 = 1;
const EXIT_UNRESOLVED: u8 = 2;

#[derive(Parser)]
#[command(name = "route-table")]
#[command(about = "Validate and resolve the user-agent route table", long_about = None)]
struct Cli {
    /// Route table file (TOML). Defaults to the built-in dashboard table.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a route table file and report every defect
    Validate { file: PathBuf },
    /// Resolve a path to its component chain
    Resolve { path: String },
    /// Resolve a route by its name
    Name { name: String },
    /// List every route with its full path
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_INVALID)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    let source = match &cli.command {
        Commands::Validate { file } => Some(file.as_path()),
        _ => cli.config.as_deref(),
    };
    let mut config = match source {
        Some(path) => read_config(path)?,
        None => RouterConfig::user_agent(),
    };

    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    init_logging(&config.observability)?;

    match cli.command {
        Commands::Validate { file } => Ok(validate(&file, &config)),
        Commands::Resolve { path } => navigate(&config, NavigationRequest::Path(path)),
        Commands::Name { name } => navigate(&config, NavigationRequest::Name(name)),
        Commands::List => {
            let table = RouteTable::new(&config)?;
            print_json(&listing(&table))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn validate(file: &Path, config: &RouterConfig) -> ExitCode {
    match RouteTable::new(config) {
        Ok(table) => {
            println!("{}: OK ({} routes)", file.display(), table.len());
            ExitCode::SUCCESS
        }
        Err(invalid) => {
            eprintln!("{}: {} error(s)", file.display(), invalid.errors().len());
            for error in invalid.errors() {
                eprintln!("  - {}", error);
            }
            ExitCode::from(EXIT_INVALID)
        }
    }
}

fn navigate(config: &RouterConfig, request: NavigationRequest) -> Result<ExitCode, Box<dyn Error>> {
    let table = RouteTable::new(config)?;

    match table.navigate(&request) {
        Ok(resolution) => {
            print_json(&describe(&resolution))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let (kind, code) = match &e {
                ResolveError::NoMatch { .. } => ("no_match", EXIT_UNRESOLVED),
                ResolveError::UnknownName { .. } => ("unknown_name", EXIT_UNRESOLVED),
                ResolveError::RedirectCycle { .. } => ("redirect_cycle", EXIT_INVALID),
            };
            print_json(&json!({ "error": kind, "message": e.to_string() }))?;
            Ok(ExitCode::from(code))
        }
    }
}

fn describe(resolution: &Resolution<'_>) -> Value {
    let chain: Vec<Value> = resolution
        .chain()
        .iter()
        .map(|route| {
            json!({
                "path": route.full_path(),
                "name": route.name(),
                "component": route.component(),
            })
        })
        .collect();

    json!({
        "canonical_path": resolution.canonical_path(),
        "name": resolution.name(),
        "redirected_from": resolution.redirected_from(),
        "components": resolution.components(),
        "params": resolution.params(),
        "chain": chain,
    })
}

fn listing(table: &RouteTable) -> Value {
    table
        .flatten()
        .into_iter()
        .map(|(depth, route)| {
            json!({
                "depth": depth,
                "path": route.full_path(),
                "name": route.name(),
                "component": route.component(),
                "redirect": route.redirect_target(),
            })
        })
        .collect()
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

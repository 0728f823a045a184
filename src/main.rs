//! access-gate - inspect what a role can see
//!
//! Loads the role table and module definitions and prints the capability
//! matrix for one role.

#![allow(missing_docs)]

use access_gate::config::CONFIG_PATH_ENV;
use access_gate::utils::LoggingUtils;
use access_gate::{
    CapabilityProjector, Config, ModuleCapabilities, PermissionStore, StaticRoleSource,
};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "access-gate", version, about = "Print the capability matrix of a role")]
struct Cli {
    /// Configuration file; the built-in roles are used when omitted
    ///
    /// `ACCESS_GATE_ACQUISITION_TIMEOUT_MS`, `ACCESS_GATE_FAILURE_POLICY` and
    /// `ACCESS_GATE_DEFAULT_ROLE` override its access settings.
    #[arg(short, long, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Role to resolve
    #[arg(short, long)]
    role: String,

    /// Only show this module
    #[arg(short, long)]
    module: Option<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?
            .with_overrides(|name| std::env::var(name).ok())
            .context("applying environment overrides")?,
        None => Config::from_env()
            .await
            .context("loading configuration from environment")?,
    };
    LoggingUtils::init_logger(&config.logging)?;

    let store = PermissionStore::from_config(&config)?;
    store.acquire_role(&StaticRoleSource::new(&cli.role)).await;

    if !store.resolver().table().contains(&cli.role) {
        tracing::warn!("Role '{}' is not defined; every permission is denied", cli.role);
    }

    let capabilities: Vec<ModuleCapabilities> = match &cli.module {
        Some(module) => vec![store.capabilities(module)],
        None => store
            .registry()
            .list()
            .iter()
            .map(|definition| store.capabilities(&definition.id))
            .collect(),
    };

    if cli.json {
        println!("{}", CapabilityProjector::to_json(&capabilities)?);
    } else {
        print_table(&cli.role, &capabilities);
    }
    Ok(())
}

fn print_table(role: &str, capabilities: &[ModuleCapabilities]) {
    let mark = |granted: bool| if granted { "x" } else { "-" };

    println!("Role: {}", role);
    println!(
        "{:<16} {:>6} {:>4} {:>6} {:>6} {:>7}  specific",
        "module", "create", "read", "update", "delete", "summary"
    );
    for module in capabilities {
        if !module.configured {
            println!("{:<16} (not configured)", module.module);
            continue;
        }
        let specific: Vec<String> = module
            .specific
            .iter()
            .filter(|s| s.granted)
            .map(|s| s.id.clone())
            .collect();
        println!(
            "{:<16} {:>6} {:>4} {:>6} {:>6} {:>7}  {}",
            module.module,
            mark(module.can_create),
            mark(module.can_read),
            mark(module.can_update),
            mark(module.can_delete),
            mark(module.can_view_summary),
            specific.join(", ")
        );
    }
}

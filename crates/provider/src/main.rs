//! VNFSvc provider CLI
//!
//! Drives single resource operations against a VNFSvc endpoint and prints
//! resource schemas. Intended for operators checking what the orchestration
//! engine would send.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use vnfsvc_provider::{DeleteOutcome, Properties, ProviderConfig, VnfSvcProvider};

/// VNFSvc resource provider
#[derive(Parser)]
#[command(name = "vnfsvc-provider")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// VNFSvc API endpoint (overrides the config file)
    #[arg(long, env = "VNFSVC_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Auth token (overrides the config file)
    #[arg(long, env = "VNFSVC_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered resource types
    Types,

    /// Print the property and attribute schema
    Schema {
        /// Resource type, e.g. OS::VNFSvc::VNF; all types when omitted
        type_name: Option<String>,
    },

    /// Create a resource and print its state
    Create {
        type_name: String,
        /// Logical resource name
        name: String,
        /// Properties as a JSON object
        #[arg(long)]
        properties: String,
    },

    /// Send a property diff to an existing resource
    Update {
        type_name: String,
        id: String,
        /// Changed properties as a JSON object
        #[arg(long)]
        diff: String,
    },

    /// Show the remote representation of a resource
    Show { type_name: String, id: String },

    /// Delete a resource
    Delete {
        type_name: String,
        id: String,
        /// Wait until the service no longer reports the resource
        #[arg(long)]
        wait: bool,
    },
}

fn parse_object(raw: &str) -> anyhow::Result<Properties> {
    match serde_json::from_str::<Value>(raw).context("invalid JSON")? {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("expected a JSON object"),
    }
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(vnfsvc_common::default_config_path);
    let mut config = ProviderConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(token) = cli.token {
        config.auth_token = Some(token);
    }

    let provider = VnfSvcProvider::new(config)?;

    match cli.command {
        Commands::Types => {
            for type_name in provider.registry().type_names() {
                println!("{}", type_name);
            }
        }
        Commands::Schema { type_name } => match type_name {
            Some(type_name) => print_json(&provider.resource_schema(&type_name)?)?,
            None => print_json(&provider.provider_schema())?,
        },
        Commands::Create {
            type_name,
            name,
            properties,
        } => {
            let properties = parse_object(&properties)?;
            let mut adapter = provider.adapter(&type_name, &name, properties)?;
            adapter.create().await?;
            print_json(adapter.state())?;
        }
        Commands::Update { type_name, id, diff } => {
            let diff = parse_object(&diff)?;
            let definition = provider.registry().get(&type_name)?;
            definition.properties_schema().validate_update(&diff)?;

            let mut adapter = provider.import(&type_name, &id)?;
            if adapter.update(diff).await? {
                info!("Updated {}", id);
            } else {
                info!("Nothing to update");
            }
        }
        Commands::Show { type_name, id } => {
            let adapter = provider.import(&type_name, &id)?;
            match adapter.show().await? {
                Some(body) => print_json(&body)?,
                None => {
                    println!("{} {} is absent", type_name, id);
                    std::process::exit(1);
                }
            }
        }
        Commands::Delete { type_name, id, wait } => {
            let mut adapter = provider.import(&type_name, &id)?;
            let outcome = adapter.delete().await?;
            info!("Delete {}: {:?}", id, outcome);
            if wait && outcome == DeleteOutcome::AwaitingConfirmation {
                adapter.wait_for_deletion(&provider.config().delete).await?;
                info!("{} is gone", id);
            }
        }
    }

    Ok(())
}

/// Installable Kubernetes apps
pub mod messages;
pub mod mongodb;
pub mod registry;

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::config::resolve_kubeconfig;
use crate::tools::{check_for_tool, find_tool, known_tools};

pub use mongodb::MongoDbArgs;
pub use registry::RegistryArgs;

/// Chart version to install; empty means latest
pub const DEFAULT_VERSION: &str = "";

pub const ONLY_INTEL_ARCH: &str = "only Intel, i.e. PC architecture is supported for this app";

/// Flags shared by every `install` subcommand
#[derive(Debug, Args)]
pub struct InstallArgs {
    #[command(subcommand)]
    pub app: InstallCommand,

    /// Path to the kubeconfig file, defaults to $KUBECONFIG
    #[arg(long, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Wait for the chart to be installed
    #[arg(long, global = true)]
    pub wait: bool,
}

#[derive(Debug, Subcommand)]
pub enum InstallCommand {
    /// Install mongodb
    Mongodb(MongoDbArgs),

    /// Install a community maintained Docker registry chart
    #[command(name = "docker-registry")]
    DockerRegistry(RegistryArgs),

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl InstallArgs {
    pub async fn run(self) -> Result<()> {
        let Self {
            app,
            kubeconfig,
            wait,
        } = self;

        match app {
            InstallCommand::Mongodb(args) => args.run(resolve_kubeconfig(kubeconfig)?, wait).await,
            InstallCommand::DockerRegistry(args) => {
                args.run(resolve_kubeconfig(kubeconfig)?, wait).await
            }
            InstallCommand::Unknown(args) => Err(unknown_app(
                args.first().map(String::as_str).unwrap_or_default(),
            )),
        }
    }
}

/// Print the info text for an installed app
pub fn show_info(app: &str, namespace: &str) -> Result<String> {
    match app {
        "mongodb" => messages::mongodb_info(namespace),
        "docker-registry" => Ok(messages::REGISTRY_INFO.to_string()),
        other => Err(unknown_app(other)),
    }
}

/// Error for an app name arkade cannot install
pub fn unknown_app(name: &str) -> anyhow::Error {
    let tools = known_tools();
    if let Some(tool) = find_tool(name, &tools) {
        debug!("{} matches tool {}: {}", name, tool.name, tool.description);
    }
    anyhow::anyhow!(check_for_tool(name, &tools))
}

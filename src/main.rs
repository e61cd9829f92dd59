/// arkade - Kubernetes apps installer
///
/// Installs apps into a Kubernetes cluster from their Helm charts, with
/// sensible defaults that can be overridden with `--set`.
mod apps;
mod config;
mod helm;
mod k8s;
mod tools;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::apps::InstallArgs;

#[derive(Parser)]
#[command(name = "arkade")]
#[command(about = "Install Kubernetes apps from Helm charts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Install Kubernetes apps from helm charts
    Install(InstallArgs),

    /// Find info about a Kubernetes app
    Info {
        /// Name of the app
        app: String,

        /// Namespace the app was installed into
        #[arg(long, default_value = "default")]
        namespace: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("arkade={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Install(args) => args.run().await,
        Commands::Info { app, namespace } => show_info(&app, &namespace),
    };

    if let Err(e) = result {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Print usage notes for an app
fn show_info(app: &str, namespace: &str) -> Result<()> {
    let info = apps::show_info(app, namespace)?;
    println!("{}", info);
    Ok(())
}

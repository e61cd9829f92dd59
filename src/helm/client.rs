/// Helm CLI client
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::repo::HelmRepo;
use crate::config::{Overrides, UserDir};
use crate::utils::command::{check_tool_installed, CommandBuilder};

const HELM_INSTALL_URL: &str = "https://helm.sh/docs/intro/install/";

/// Runs helm with arkade's HELM_HOME and the resolved kubeconfig
pub struct HelmClient {
    binary: PathBuf,
    helm_home: PathBuf,
    kubeconfig: Option<PathBuf>,
    chart_root: PathBuf,
}

impl HelmClient {
    /// Find a helm binary, preferring one downloaded into `~/.arkade/bin`
    pub async fn locate(user_dir: &UserDir, kubeconfig: Option<PathBuf>) -> Result<Self> {
        let local = user_dir.bin_dir().join(helm_binary_name());

        let binary = if local.is_file() {
            local
        } else {
            check_tool_installed("helm", &["version"], HELM_INSTALL_URL)
                .await
                .context("helm is required")?;
            PathBuf::from("helm")
        };
        info!("Using helm: {}", binary.display());

        Ok(Self {
            binary,
            helm_home: user_dir.helm_home(),
            kubeconfig,
            chart_root: std::env::temp_dir().join("charts"),
        })
    }

    /// Unpack charts somewhere other than the system temp dir
    #[cfg(test)]
    pub(crate) fn with_chart_root(mut self, chart_root: impl Into<PathBuf>) -> Self {
        self.chart_root = chart_root.into();
        self
    }

    fn command(&self) -> CommandBuilder {
        CommandBuilder::new(&self.binary)
            .env("HELM_HOME", &self.helm_home)
            .kubeconfig(self.kubeconfig.as_deref())
    }

    /// Add a chart repository, optionally refreshing the local index
    pub async fn add_repo(&self, repo: &HelmRepo, update: bool) -> Result<()> {
        info!("Adding Helm repository {} ({})...", repo.name, repo.url);

        let output = self
            .command()
            .args(["repo", "add", repo.name.as_str(), repo.url.as_str()])
            .context(format!("Failed to add Helm repo {}", repo.name))
            .output()
            .await?;

        if !output.success {
            // Re-adding the same repository is fine
            if !output.stderr.contains("already exists") {
                anyhow::bail!("Failed to add Helm repo: {}", output.stderr.trim());
            }
            debug!("Helm repo {} already exists", repo.name);
        }

        if update {
            self.command()
                .args(["repo", "update"])
                .context("Failed to update Helm repos")
                .run_silent()
                .await?;
        }

        Ok(())
    }

    /// Download and unpack a chart under the temp chart directory
    pub async fn fetch_chart(&self, chart: &str, version: &str) -> Result<PathBuf> {
        info!("Fetching chart {}...", chart);

        tokio::fs::create_dir_all(&self.chart_root)
            .await
            .context("Failed to create chart directory")?;

        // helm refuses to untar over an existing chart
        let chart_dir = self.chart_root.join(release_name(chart));
        if chart_dir.exists() {
            tokio::fs::remove_dir_all(&chart_dir)
                .await
                .with_context(|| format!("Failed to remove {}", chart_dir.display()))?;
        }

        self.command()
            .args(fetch_args(chart, version, &self.chart_root))
            .context(format!("Failed to fetch chart {}", chart))
            .run_silent()
            .await?;

        Ok(chart_dir)
    }

    /// Install or upgrade a release from a previously fetched chart
    pub async fn upgrade(
        &self,
        chart: &str,
        namespace: &str,
        version: &str,
        overrides: &Overrides,
        wait: bool,
    ) -> Result<()> {
        let values = self.chart_root.join(release_name(chart)).join("values.yaml");
        let args = upgrade_args(chart, namespace, version, &values, overrides, wait);

        info!(
            "Installing chart {} into namespace {}...",
            chart, namespace
        );

        let stdout = self
            .command()
            .args(&args)
            .context(format!("Failed to install {}", chart))
            .run()
            .await?;

        debug!("{}", stdout.trim());
        Ok(())
    }
}

fn helm_binary_name() -> &'static str {
    if cfg!(windows) {
        "helm.exe"
    } else {
        "helm"
    }
}

/// Release name used for a chart reference like `bitnami/mongodb`
pub fn release_name(chart: &str) -> &str {
    chart.rsplit('/').next().unwrap_or(chart)
}

fn fetch_args(chart: &str, version: &str, untar_dir: &Path) -> Vec<String> {
    let mut args = vec![
        "fetch".to_string(),
        chart.to_string(),
        "--untar=true".to_string(),
        "--untardir".to_string(),
        untar_dir.display().to_string(),
    ];

    if !version.is_empty() {
        args.extend(["--version".to_string(), version.to_string()]);
    }

    args
}

fn upgrade_args(
    chart: &str,
    namespace: &str,
    version: &str,
    values: &Path,
    overrides: &Overrides,
    wait: bool,
) -> Vec<String> {
    let mut args = vec![
        "upgrade".to_string(),
        "--install".to_string(),
        release_name(chart).to_string(),
        chart.to_string(),
        "--namespace".to_string(),
        namespace.to_string(),
    ];

    if !version.is_empty() {
        args.extend(["--version".to_string(), version.to_string()]);
    }

    if wait {
        args.push("--wait".to_string());
    }

    args.extend(["--values".to_string(), values.display().to_string()]);

    for (key, value) in overrides {
        args.extend(["--set".to_string(), format!("{}={}", key, value)]);
    }

    args
}

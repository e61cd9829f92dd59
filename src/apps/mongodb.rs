/// MongoDB from the Bitnami chart
use anyhow::{Context, Result};
use clap::{ArgAction, Args};
use std::path::PathBuf;
use tracing::info;

use super::{messages, DEFAULT_VERSION, ONLY_INTEL_ARCH};
use crate::config::{merge_flags, Overrides, UserDir};
use crate::helm::{HelmClient, HelmRepo};
use crate::k8s::client::INTEL_ARCH;
use crate::k8s::KubernetesClient;
use crate::utils::platform::ClientPlatform;

const REPO_NAME: &str = "bitnami";
const REPO_URL: &str = "https://charts.bitnami.com/bitnami";
const CHART: &str = "mongodb";

#[derive(Debug, Args)]
pub struct MongoDbArgs {
    /// Namespace for the app
    #[arg(long, default_value = "default")]
    pub namespace: String,

    /// Use custom flags or override existing flags (example --set mongodbUsername=admin)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Create and bind a persistent volume, not recommended for development
    #[arg(long)]
    pub persistence: bool,

    /// Update the helm repo
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub update_repo: bool,
}

impl MongoDbArgs {
    pub async fn run(self, kubeconfig: Option<PathBuf>, wait: bool) -> Result<()> {
        ensure_intel_nodes(&KubernetesClient::new(kubeconfig.clone())).await?;

        let user_dir = UserDir::init().await?;

        let platform = ClientPlatform::detect();
        info!("Client: {:?}, {:?}", platform.arch, platform.os);
        info!("User dir established as: {}", user_dir.root().display());

        let helm = HelmClient::locate(&user_dir, kubeconfig).await?;

        let repo = HelmRepo::new(REPO_NAME, REPO_URL)?;
        helm.add_repo(&repo, self.update_repo)
            .await
            .context("unable to add repo")?;

        let chart = repo.chart(CHART);
        helm.fetch_chart(&chart, DEFAULT_VERSION)
            .await
            .context("unable fetch chart")?;

        let overrides = self.overrides()?;

        helm.upgrade(&chart, &self.namespace, DEFAULT_VERSION, &overrides, wait)
            .await
            .context("unable to install mongodb chart with helm")?;

        println!("{}", messages::mongodb_post_install());
        Ok(())
    }

    /// Chart defaults with the user's `--set` flags merged on top
    fn overrides(&self) -> Result<Overrides> {
        let mut overrides = Overrides::new();
        overrides.insert(
            "persistence.enabled".to_string(),
            self.persistence.to_string(),
        );

        merge_flags(&mut overrides, &self.set).context("error with --set usage")?;
        Ok(overrides)
    }
}

/// Refuse clusters whose nodes aren't Intel/AMD64, or can't be identified
async fn ensure_intel_nodes(kube: &KubernetesClient) -> Result<()> {
    let arch = kube.node_architecture().await;
    info!("Node architecture: {:?}", arch.as_deref().unwrap_or_default());
    check_architecture(arch.as_deref())
}

fn check_architecture(arch: Option<&str>) -> Result<()> {
    if arch != Some(INTEL_ARCH) {
        anyhow::bail!(ONLY_INTEL_ARCH);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::fake_tool;

    fn args(set: &[&str], persistence: bool) -> MongoDbArgs {
        MongoDbArgs {
            namespace: "default".to_string(),
            set: set.iter().map(|s| s.to_string()).collect(),
            persistence,
            update_repo: true,
        }
    }

    #[test]
    fn test_default_overrides() {
        let overrides = args(&[], false).overrides().unwrap();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides["persistence.enabled"], "false");

        let overrides = args(&[], true).overrides().unwrap();
        assert_eq!(overrides["persistence.enabled"], "true");
    }

    #[test]
    fn test_set_flags_win() {
        let overrides = args(&["persistence.enabled=true", "auth.rootUser=admin"], false)
            .overrides()
            .unwrap();
        assert_eq!(overrides["persistence.enabled"], "true");
        assert_eq!(overrides["auth.rootUser"], "admin");
    }

    #[test]
    fn test_bad_set_flag() {
        let err = args(&["persistence"], false).overrides().unwrap_err();
        assert!(format!("{:#}", err).contains("error with --set usage"));
    }

    #[test]
    fn test_architecture_check() {
        assert!(check_architecture(Some("amd64")).is_ok());
        assert_eq!(
            check_architecture(Some("arm64")).unwrap_err().to_string(),
            ONLY_INTEL_ARCH
        );
        assert_eq!(
            check_architecture(None).unwrap_err().to_string(),
            ONLY_INTEL_ARCH
        );
    }

    #[tokio::test]
    async fn test_unknown_cluster_is_not_intel() {
        let tmp = tempfile::tempdir().unwrap();

        let missing = KubernetesClient::new(None).with_kubectl(tmp.path().join("kubectl"));
        assert_eq!(
            ensure_intel_nodes(&missing).await.unwrap_err().to_string(),
            ONLY_INTEL_ARCH
        );

        let no_nodes = fake_tool(tmp.path(), "kubectl-empty", "exit 0");
        let client = KubernetesClient::new(None).with_kubectl(no_nodes);
        assert_eq!(
            ensure_intel_nodes(&client).await.unwrap_err().to_string(),
            ONLY_INTEL_ARCH
        );

        let intel = fake_tool(tmp.path(), "kubectl-amd64", "echo amd64");
        let client = KubernetesClient::new(None).with_kubectl(intel);
        assert!(ensure_intel_nodes(&client).await.is_ok());
    }
}

/// Kubernetes operations client
use anyhow::Result;
use std::path::PathBuf;
use tracing::warn;

use crate::utils::command::CommandBuilder;

/// Architecture name Kubernetes reports for Intel/AMD nodes
pub const INTEL_ARCH: &str = "amd64";

/// Kubernetes client for kubectl operations
pub struct KubernetesClient {
    kubectl: PathBuf,
    kubeconfig: Option<PathBuf>,
}

impl KubernetesClient {
    pub fn new(kubeconfig: Option<PathBuf>) -> Self {
        Self {
            kubectl: PathBuf::from("kubectl"),
            kubeconfig,
        }
    }

    /// Use a specific kubectl binary instead of the one on PATH
    #[cfg(test)]
    pub(crate) fn with_kubectl(mut self, kubectl: impl Into<PathBuf>) -> Self {
        self.kubectl = kubectl.into();
        self
    }

    /// Architecture of the first node in the cluster, e.g. `amd64`
    pub async fn get_node_architecture(&self) -> Result<String> {
        let stdout = CommandBuilder::new(&self.kubectl)
            .args([
                "get",
                "nodes",
                "-o",
                "jsonpath={.items[0].status.nodeInfo.architecture}",
            ])
            .kubeconfig(self.kubeconfig.as_deref())
            .context("Failed to get node architecture")
            .run()
            .await?;

        parse_architecture(&stdout)
    }

    /// Node architecture, or `None` when the cluster can't be queried
    ///
    /// Lookup failures are logged and never abort an install.
    pub async fn node_architecture(&self) -> Option<String> {
        match self.get_node_architecture().await {
            Ok(arch) => Some(arch),
            Err(e) => {
                warn!("Unable to determine node architecture: {:#}", e);
                None
            }
        }
    }
}

fn parse_architecture(stdout: &str) -> Result<String> {
    let arch = stdout.trim();
    if arch.is_empty() {
        anyhow::bail!("No nodes found in cluster");
    }
    Ok(arch.to_string())
}

/// User directory, kubeconfig and chart override configuration
pub mod overrides;

pub use overrides::{merge_flags, Overrides};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-user state directory under $HOME
const USER_DIR_NAME: &str = ".arkade";

/// Per-user state directory (`~/.arkade`)
#[derive(Debug, Clone)]
pub struct UserDir {
    root: PathBuf,
}

impl UserDir {
    /// Create `~/.arkade` and its children if missing
    pub async fn init() -> Result<Self> {
        let home = dirs::home_dir().context("Unable to determine home directory")?;
        Self::init_at(home.join(USER_DIR_NAME)).await
    }

    /// Create the directory layout under an explicit root
    pub async fn init_at(root: impl Into<PathBuf>) -> Result<Self> {
        let dir = Self { root: root.into() };

        for path in [dir.bin_dir(), dir.helm_home()] {
            tokio::fs::create_dir_all(&path)
                .await
                .with_context(|| format!("Failed to create {}", path.display()))?;
        }

        debug!("User dir established as: {}", dir.root.display());
        Ok(dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where downloaded binaries live
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// Value used for HELM_HOME
    pub fn helm_home(&self) -> PathBuf {
        self.root.join(".helm")
    }
}

/// Resolve the kubeconfig to hand to helm and kubectl
///
/// An explicit path must exist. Without one the KUBECONFIG environment
/// variable is used, and if that is unset the tools fall back to their own
/// defaults.
pub fn resolve_kubeconfig(explicit: Option<PathBuf>) -> Result<Option<PathBuf>> {
    resolve_kubeconfig_from(explicit, std::env::var_os("KUBECONFIG").map(PathBuf::from))
}

fn resolve_kubeconfig_from(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("unable to find kubeconfig at {}", path.display());
            }
            Ok(Some(path))
        }
        None => Ok(from_env.filter(|p| !p.as_os_str().is_empty())),
    }
}

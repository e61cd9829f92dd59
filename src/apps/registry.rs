/// Docker registry from the community maintained twuni chart
use anyhow::{Context, Result};
use clap::{ArgAction, Args};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::info;

use super::{messages, DEFAULT_VERSION};
use crate::config::{merge_flags, Overrides, UserDir};
use crate::helm::{HelmClient, HelmRepo};
use crate::k8s::KubernetesClient;
use crate::utils::password::{generate_password, htpasswd_entry};
use crate::utils::platform::ClientPlatform;

const REPO_NAME: &str = "twuni";
const REPO_URL: &str = "https://twuni.github.io/docker-registry.helm";
const CHART: &str = "docker-registry";
const NAMESPACE: &str = "default";

const PASSWORD_LENGTH: usize = 20;
const PASSWORD_DIGITS: usize = 10;

#[derive(Debug, Args)]
pub struct RegistryArgs {
    /// The namespace used for installation
    #[arg(short, long, default_value = NAMESPACE)]
    pub namespace: String,

    /// Update the helm repo
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub update_repo: bool,

    /// Username for the registry
    #[arg(short, long, default_value = "admin")]
    pub username: String,

    /// Password for the registry, leave blank to generate
    #[arg(short, long, default_value = "")]
    pub password: String,

    /// Write generated password to this file
    #[arg(short, long)]
    pub write_file: Option<PathBuf>,

    /// Enable persistence
    #[arg(long)]
    pub persistence: bool,

    /// Use custom flags or override existing flags (example --set persistence.enabled=true)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

impl RegistryArgs {
    pub async fn run(self, kubeconfig: Option<PathBuf>, wait: bool) -> Result<()> {
        let user_dir = UserDir::init().await?;
        validate_namespace(&self.namespace)?;

        let platform = ClientPlatform::detect();
        info!("Client: {}, {}", platform.arch, platform.os);
        info!("User dir established as: {}", user_dir.root().display());

        let helm = HelmClient::locate(&user_dir, kubeconfig.clone()).await?;
        let kube = KubernetesClient::new(kubeconfig);

        self.install(&helm, &kube, wait).await
    }

    async fn install(
        &self,
        helm: &HelmClient,
        kube: &KubernetesClient,
        wait: bool,
    ) -> Result<()> {
        let password = self.password()?;
        let htpasswd = htpasswd_entry(&self.username, &password)?;

        let repo = HelmRepo::new(REPO_NAME, REPO_URL)?;
        helm.add_repo(&repo, self.update_repo).await?;

        let chart = repo.chart(CHART);
        let chart_dir = helm.fetch_chart(&chart, DEFAULT_VERSION).await?;

        let overrides = self.overrides(htpasswd)?;

        // Informational only, the chart installs on any architecture
        if let Some(arch) = kube.node_architecture().await {
            info!("Node architecture: {:?}", arch);
        }
        info!("Chart path: {}", chart_dir.display());

        helm.upgrade(&chart, NAMESPACE, DEFAULT_VERSION, &overrides, wait)
            .await?;

        println!("{}", messages::registry_post_install());

        match &self.write_file {
            Some(path) => {
                write_credentials(path, &password).await?;
                println!("See {} for credentials", path.display());
            }
            None => {
                println!(
                    "Registry credentials: {} {}\nexport PASSWORD={}",
                    self.username, password, password
                );
            }
        }

        Ok(())
    }

    /// The supplied password, or a freshly generated one
    fn password(&self) -> Result<String> {
        if self.password.is_empty() {
            generate_password(PASSWORD_LENGTH, PASSWORD_DIGITS)
        } else {
            Ok(self.password.clone())
        }
    }

    fn overrides(&self, htpasswd: String) -> Result<Overrides> {
        let mut overrides = Overrides::new();
        overrides.insert(
            "persistence.enabled".to_string(),
            self.persistence.to_string(),
        );
        overrides.insert("secrets.htpasswd".to_string(), htpasswd);

        merge_flags(&mut overrides, &self.set)?;
        Ok(overrides)
    }
}

fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace != NAMESPACE {
        anyhow::bail!(r#"to override the "default", install via helm directly"#);
    }
    Ok(())
}

/// Write the registry password readable only by the current user
async fn write_credentials(path: &Path, password: &str) -> Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options
        .open(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.write_all(password.as_bytes())
        .await
        .with_context(|| format!("Failed to write credentials to {}", path.display()))?;
    file.flush().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{fake_tool, read_log};

    fn args() -> RegistryArgs {
        RegistryArgs {
            namespace: NAMESPACE.to_string(),
            update_repo: true,
            username: "admin".to_string(),
            password: String::new(),
            write_file: None,
            persistence: false,
            set: vec![],
        }
    }

    #[test]
    fn test_namespace_must_be_default() {
        assert!(validate_namespace("default").is_ok());
        assert_eq!(
            validate_namespace("registry").unwrap_err().to_string(),
            "to override the \"default\", install via helm directly"
        );
    }

    #[test]
    fn test_password_generated_when_blank() {
        let generated = args().password().unwrap();
        assert_eq!(generated.len(), PASSWORD_LENGTH);

        let mut supplied = args();
        supplied.password = "hunter2".to_string();
        assert_eq!(supplied.password().unwrap(), "hunter2");
    }

    #[test]
    fn test_overrides() {
        let mut registry = args();
        registry.persistence = true;
        registry.set = vec!["service.type=NodePort".to_string()];

        let overrides = registry.overrides("admin:hash\n".to_string()).unwrap();
        assert_eq!(overrides["persistence.enabled"], "true");
        assert_eq!(overrides["secrets.htpasswd"], "admin:hash\n");
        assert_eq!(overrides["service.type"], "NodePort");
    }

    #[tokio::test]
    async fn test_write_credentials() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("registry-password.txt");

        write_credentials(&path, "s3cret").await.unwrap();
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "s3cret");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[tokio::test]
    async fn test_install_without_kubectl_still_upgrades() {
        let tmp = tempfile::tempdir().unwrap();
        let user_dir = UserDir::init_at(tmp.path().join(".arkade")).await.unwrap();
        let log = tmp.path().join("helm.log");
        fake_tool(
            &user_dir.bin_dir(),
            "helm",
            &format!("echo \"$1 $2\" >> '{}'", log.display()),
        );

        let helm = HelmClient::locate(&user_dir, None)
            .await
            .unwrap()
            .with_chart_root(tmp.path().join("charts"));
        let kube = KubernetesClient::new(None).with_kubectl(tmp.path().join("no-kubectl"));

        let mut registry = args();
        registry.password = "s3cret".to_string();
        registry.write_file = Some(tmp.path().join("password.txt"));

        registry.install(&helm, &kube, false).await.unwrap();

        assert_eq!(
            read_log(&log),
            [
                "repo add",
                "repo update",
                "fetch twuni/docker-registry",
                "upgrade --install",
            ]
        );
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("password.txt")).unwrap(),
            "s3cret"
        );
    }
}

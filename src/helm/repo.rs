/// Helm chart repository definitions
use anyhow::{Context, Result};
use url::Url;

/// A named chart repository, as passed to `helm repo add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelmRepo {
    pub name: String,
    pub url: Url,
}

impl HelmRepo {
    /// Create a repository entry, validating the URL
    pub fn new(name: impl Into<String>, url: &str) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.contains('/') {
            anyhow::bail!("Invalid Helm repository name: {:?}", name);
        }

        let url = Url::parse(url).with_context(|| format!("Invalid Helm repository URL: {}", url))?;
        if !matches!(url.scheme(), "http" | "https" | "oci") {
            anyhow::bail!("Unsupported Helm repository scheme: {}", url.scheme());
        }

        Ok(Self { name, url })
    }

    /// Fully qualified chart reference within this repository
    pub fn chart(&self, chart: &str) -> String {
        format!("{}/{}", self.name, chart)
    }
}

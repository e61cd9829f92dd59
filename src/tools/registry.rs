/// Static registry of CLI tools available through `arkade get`

/// A downloadable CLI utility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    /// Name the tool is requested by
    pub name: String,

    /// Short human-readable summary
    pub description: String,
}

impl Tool {
    /// Create a tool with no description
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

const TOOLS: &[(&str, &str)] = &[
    ("argocd", "Declarative, GitOps continuous delivery tool for Kubernetes"),
    ("civo", "CLI for interacting with your Civo resources"),
    ("docker-compose", "Define and run multi-container applications with Docker"),
    ("doctl", "Official command line interface for the DigitalOcean API"),
    ("eksctl", "Simple CLI tool for creating clusters on EKS"),
    ("faas-cli", "Official CLI for OpenFaaS"),
    ("flux", "Continuous delivery solution for Kubernetes powered by GitOps Toolkit"),
    ("gh", "GitHub's official command line tool"),
    ("helm", "The Kubernetes Package Manager: Think of it like apt/yum/homebrew for Kubernetes"),
    ("hey", "Load testing tool"),
    ("istioctl", "Service Mesh to establish a programmable, application-aware network"),
    ("jq", "Command-line JSON processor"),
    ("k3d", "Helper to run k3s (Lightweight Kubernetes. 5 less than k8s) in a docker container"),
    ("k3sup", "Bootstrap Kubernetes with k3s over SSH < 1 min"),
    ("k9s", "Provides a terminal UI to interact with your Kubernetes clusters"),
    ("kind", "Run local Kubernetes cluster with Docker"),
    ("krew", "Package manager for kubectl plugins"),
    ("kubebuilder", "Framework for building Kubernetes APIs using custom resource definitions"),
    ("kubectl", "Run commands against Kubernetes clusters"),
    ("kubectx", "Faster way to switch between clusters"),
    ("kubens", "Switch between Kubernetes namespaces smoothly"),
    ("kubeseal", "A Kubernetes controller and tool for one-way encrypted Secrets"),
    ("kustomize", "Customization of kubernetes YAML configurations"),
    ("linkerd2", "Ultralight, security-first service mesh for Kubernetes"),
    ("minikube", "Runs the latest stable release of Kubernetes, with support for standard Kubernetes features"),
    ("mkcert", "A simple zero-config tool to make locally trusted development certificates"),
    ("popeye", "Scans live Kubernetes cluster and reports potential issues"),
    ("stern", "Multi pod and container log tailing for Kubernetes"),
    ("terraform", "Infrastructure as Code for major cloud providers"),
    ("trivy", "Vulnerability scanner for containers and other artifacts"),
    ("vcluster", "Create fully functional virtual Kubernetes clusters"),
    ("yq", "Portable command-line YAML processor"),
];

/// Get the list of tools `arkade get` can download
pub fn known_tools() -> Vec<Tool> {
    TOOLS
        .iter()
        .map(|(name, description)| Tool::new(*name).with_description(*description))
        .collect()
}

/// Find the first tool whose name matches `name`, ignoring case
pub fn find_tool<'a>(name: &str, tools: &'a [Tool]) -> Option<&'a Tool> {
    tools.iter().find(|tool| eq_ignore_case(&tool.name, name))
}

/// Per-character case folding, so word-final sigma folds like any other
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Kubernetes cluster queries
pub mod client;

pub use client::KubernetesClient;

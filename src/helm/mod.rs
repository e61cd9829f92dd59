/// Helm chart repository and release operations
pub mod client;
pub mod repo;

pub use client::HelmClient;
pub use repo::HelmRepo;

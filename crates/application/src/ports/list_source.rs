use async_trait::async_trait;
use ferrous_sweep_domain::DomainError;

/// Fetches raw newline-delimited list text from a location
/// (URL or local path, depending on the adapter).
#[async_trait]
pub trait ListSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<String, DomainError>;
}

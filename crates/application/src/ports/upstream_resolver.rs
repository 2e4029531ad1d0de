use async_trait::async_trait;
use dnsrelay_domain::DomainError;

/// Port for the single upstream hop taken on a cache miss.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// Sends the raw query and returns the raw response bytes.
    ///
    /// Fails with `DomainError::QueryTimeout` when no answer arrives in time.
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError>;

    fn server_name(&self) -> String;
}

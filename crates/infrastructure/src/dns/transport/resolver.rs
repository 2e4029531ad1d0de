use super::udp::UdpTransport;
use async_trait::async_trait;
use dnsrelay_application::ports::UpstreamResolver;
use dnsrelay_domain::DomainError;

/// Forwards raw queries to a single upstream server over UDP.
pub struct UdpUpstreamResolver {
    transport: UdpTransport,
}

impl UdpUpstreamResolver {
    pub fn new(transport: UdpTransport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl UpstreamResolver for UdpUpstreamResolver {
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.transport.send(query).await
    }

    fn server_name(&self) -> String {
        self.transport.server_addr().to_string()
    }
}

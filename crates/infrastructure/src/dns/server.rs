use dnsrelay_application::use_cases::{HandleDnsQueryUseCase, QueryOutcome};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Turns one client datagram into the datagram to send back, if any.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_raw(&self, packet: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        debug!(client = %client, bytes = packet.len(), "Datagram received");

        let outcome = match self.use_case.execute(packet).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(client = %client, error = %e, "Discarding malformed query");
                return None;
            }
        };

        let kind = outcome.as_str();
        match &outcome {
            QueryOutcome::CacheHit { answers, .. } => {
                debug!(
                    client = %client,
                    outcome = kind,
                    answers = *answers,
                    "Answered from cache"
                );
            }
            QueryOutcome::Forwarded { response } => {
                debug!(
                    client = %client,
                    outcome = kind,
                    bytes = response.len(),
                    "Relaying upstream response"
                );
            }
            QueryOutcome::ServFail { .. } => {
                info!(client = %client, outcome = kind, "Upstream failed, answering SERVFAIL");
            }
            QueryOutcome::Dropped => {
                info!(client = %client, outcome = kind, "Upstream failed, no response sent");
            }
        }

        outcome.into_response()
    }
}

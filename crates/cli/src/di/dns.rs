use dnsrelay_application::use_cases::HandleDnsQueryUseCase;
use dnsrelay_domain::Config;
use dnsrelay_infrastructure::dns::cache::{RecordCache, SystemClock};
use dnsrelay_infrastructure::dns::transport::{UdpTransport, UdpUpstreamResolver};
use dnsrelay_infrastructure::dns::DnsServerHandler;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub cache: Arc<RecordCache>,
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let upstream_addr = config
            .upstream
            .socket_addr()
            .map_err(anyhow::Error::msg)?;

        let cache = Arc::new(RecordCache::load(
            &config.cache.snapshot_path,
            Arc::new(SystemClock),
        ));

        let transport = UdpTransport::new(upstream_addr, config.upstream.timeout())
            .with_max_response_size(config.upstream.max_response_size);
        let resolver = Arc::new(UdpUpstreamResolver::new(transport));

        let use_case = HandleDnsQueryUseCase::new(cache.clone(), resolver)
            .with_servfail_on_failure(config.upstream.servfail_on_failure);

        info!(
            upstream = %upstream_addr,
            timeout_secs = config.upstream.timeout_secs,
            servfail_on_failure = config.upstream.servfail_on_failure,
            cached_domains = cache.len(),
            cached_entries = cache.entry_count(),
            "DNS services initialized"
        );

        Ok(Self {
            cache,
            handler: Arc::new(DnsServerHandler::new(Arc::new(use_case))),
        })
    }
}

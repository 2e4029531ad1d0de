use crate::ports::{RecordCachePort, UpstreamResolver};
use dnsrelay_domain::wire::{self, build_cached_response, build_servfail_response};
use dnsrelay_domain::{DnsMessage, DnsQuestion, DomainError};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// What the server should do with one client datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Answered from cache without contacting the upstream.
    CacheHit { response: Vec<u8>, answers: usize },
    /// Upstream bytes, relayed unmodified.
    Forwarded { response: Vec<u8> },
    /// Upstream failed and SERVFAIL synthesis is enabled.
    ServFail { response: Vec<u8> },
    /// Upstream failed; nothing is sent back.
    Dropped,
}

impl QueryOutcome {
    pub fn response(&self) -> Option<&[u8]> {
        match self {
            QueryOutcome::CacheHit { response, .. }
            | QueryOutcome::Forwarded { response }
            | QueryOutcome::ServFail { response } => Some(response),
            QueryOutcome::Dropped => None,
        }
    }

    pub fn into_response(self) -> Option<Vec<u8>> {
        match self {
            QueryOutcome::CacheHit { response, .. }
            | QueryOutcome::Forwarded { response }
            | QueryOutcome::ServFail { response } => Some(response),
            QueryOutcome::Dropped => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOutcome::CacheHit { .. } => "CACHE_HIT",
            QueryOutcome::Forwarded { .. } => "FORWARDED",
            QueryOutcome::ServFail { .. } => "SERVFAIL",
            QueryOutcome::Dropped => "DROPPED",
        }
    }
}

pub struct HandleDnsQueryUseCase {
    cache: Arc<dyn RecordCachePort>,
    upstream: Arc<dyn UpstreamResolver>,
    servfail_on_failure: bool,
}

impl HandleDnsQueryUseCase {
    pub fn new(cache: Arc<dyn RecordCachePort>, upstream: Arc<dyn UpstreamResolver>) -> Self {
        Self {
            cache,
            upstream,
            servfail_on_failure: false,
        }
    }

    /// Answer SERVFAIL instead of dropping the query when the upstream fails.
    pub fn with_servfail_on_failure(mut self, enabled: bool) -> Self {
        self.servfail_on_failure = enabled;
        self
    }

    /// Handles one raw client datagram.
    ///
    /// Fails only when the packet carries no readable question; upstream
    /// failures are folded into [`QueryOutcome::Dropped`] or
    /// [`QueryOutcome::ServFail`].
    pub async fn execute(&self, packet: &[u8]) -> Result<QueryOutcome, DomainError> {
        let start = Instant::now();
        let (question, _) = wire::decode_question(packet)?;

        debug!(
            domain = %question.name,
            record_type = %question.record_type,
            "DNS query received"
        );

        if self.cache.contains(&question) {
            return self.answer_from_cache(packet, &question, start);
        }

        debug!(
            domain = %question.name,
            upstream = %self.upstream.server_name(),
            "Cache miss, forwarding to upstream"
        );

        match self.upstream.forward(packet).await {
            Ok(response) => {
                match wire::decode_message(&response) {
                    Ok(message) => {
                        let stored = self.store_records(&message);
                        debug!(
                            domain = %question.name,
                            records_cached = stored,
                            complete = message.complete,
                            elapsed_us = start.elapsed().as_micros() as u64,
                            "Upstream response relayed"
                        );
                    }
                    Err(e) => {
                        warn!(
                            error = %e,
                            domain = %question.name,
                            "Unparseable upstream response relayed as-is"
                        );
                    }
                }
                Ok(QueryOutcome::Forwarded { response })
            }
            Err(e) => {
                warn!(
                    error = %e,
                    domain = %question.name,
                    upstream = %self.upstream.server_name(),
                    "Upstream resolution failed"
                );
                if self.servfail_on_failure {
                    let response = build_servfail_response(packet, Some(&question))?;
                    Ok(QueryOutcome::ServFail { response })
                } else {
                    Ok(QueryOutcome::Dropped)
                }
            }
        }
    }

    fn answer_from_cache(
        &self,
        packet: &[u8],
        question: &DnsQuestion,
        start: Instant,
    ) -> Result<QueryOutcome, DomainError> {
        let message = wire::decode_message(packet)?;
        self.store_records(&message);

        let records = self
            .cache
            .lookup(&question.name, question.record_type)
            .unwrap_or_default();
        let response = build_cached_response(&message.header, question, &records)?;

        debug!(
            domain = %question.name,
            record_type = %question.record_type,
            answers = records.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Serving response from cache"
        );

        Ok(QueryOutcome::CacheHit {
            response,
            answers: records.len(),
        })
    }

    /// Caches every answer, authority and additional record of `message`.
    fn store_records(&self, message: &DnsMessage) -> usize {
        let flags = message.header.flags;
        let mut stored = 0;
        for record in message.records() {
            self.cache
                .store(&record.domain, record.clone(), record.record_type, flags);
            stored += 1;
        }
        stored
    }
}

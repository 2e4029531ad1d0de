mod helpers;

use dnsrelay_application::ports::UpstreamResolver;
use dnsrelay_domain::wire::decode_message;
use dnsrelay_domain::DomainError;
use dnsrelay_infrastructure::dns::transport::{UdpTransport, UdpUpstreamResolver};
use helpers::{query_packet, MockBehavior, MockDnsServer};
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_udp_transport_round_trip() {
    let server = MockDnsServer::start(MockBehavior::Answer {
        ttl: 300,
        ip: [93, 184, 216, 34],
    })
    .await
    .unwrap();
    let transport = UdpTransport::new(server.addr(), Duration::from_secs(2));

    let query = query_packet(0x4242, "example.com", 1);
    let response = transport.send(&query).await.unwrap();

    assert_eq!(&response[0..2], &[0x42, 0x42]);
    let message = decode_message(&response).unwrap();
    assert_eq!(message.answers.len(), 1);
    assert_eq!(message.answers[0].ttl, 300);
    assert_eq!(server.query_count(), 1);
}

#[tokio::test]
async fn test_udp_transport_times_out_on_silent_server() {
    let server = MockDnsServer::start(MockBehavior::Silent).await.unwrap();
    let transport = UdpTransport::new(server.addr(), Duration::from_millis(200));

    let start = Instant::now();
    let result = transport.send(&query_packet(1, "example.com", 1)).await;

    assert!(matches!(result, Err(DomainError::QueryTimeout)));
    assert!(start.elapsed() >= Duration::from_millis(200));
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_udp_transport_discards_mismatched_id() {
    let server = MockDnsServer::start(MockBehavior::WrongId {
        ttl: 300,
        ip: [1, 2, 3, 4],
    })
    .await
    .unwrap();
    let transport = UdpTransport::new(server.addr(), Duration::from_millis(200));

    let result = transport.send(&query_packet(7, "example.com", 1)).await;

    assert!(result.unwrap_err().is_timeout());
    assert_eq!(server.query_count(), 1);
}

#[tokio::test]
async fn test_upstream_resolver_forwards_raw_bytes() {
    let server = MockDnsServer::start(MockBehavior::Answer {
        ttl: 60,
        ip: [10, 0, 0, 1],
    })
    .await
    .unwrap();
    let transport = UdpTransport::new(server.addr(), Duration::from_secs(2));
    let resolver = UdpUpstreamResolver::new(transport);

    let query = query_packet(9, "example.com", 1);
    let response = resolver.forward(&query).await.unwrap();

    assert_eq!(&response[12..query.len()], &query[12..]);
    assert_eq!(resolver.server_name(), server.addr().to_string());
}

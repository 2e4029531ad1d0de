pub mod resolver;
pub mod udp;

pub use resolver::UdpUpstreamResolver;
pub use udp::UdpTransport;

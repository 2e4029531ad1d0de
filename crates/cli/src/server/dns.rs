use anyhow::Context;
use dnsrelay_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Serves client datagrams until `shutdown` is cancelled.
///
/// Each datagram is handled on its own task, so a slow upstream only delays
/// the query that is waiting on it.
pub async fn start_dns_server(
    bind_addr: String,
    handler: Arc<DnsServerHandler>,
    max_packet_size: usize,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("invalid DNS bind address '{}'", bind_addr))?;

    let socket = Arc::new(
        create_udp_socket(socket_addr)
            .with_context(|| format!("failed to bind DNS socket on {}", socket_addr))?,
    );

    info!(bind_address = %socket_addr, "DNS server ready");

    let mut recv_buf = vec![0u8; max_packet_size];

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("DNS server: shutting down");
                break;
            }
            result = socket.recv_from(&mut recv_buf) => {
                match result {
                    Ok((n, from)) => {
                        let query = recv_buf[..n].to_vec();
                        let handler = handler.clone();
                        let socket = socket.clone();
                        tokio::spawn(async move {
                            if let Some(response) = handler.handle_raw(&query, from).await {
                                if let Err(e) = socket.send_to(&response, from).await {
                                    warn!(client = %from, error = %e, "Failed to send response");
                                }
                            }
                        });
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) if e.kind() == io::ErrorKind::ConnectionReset => {
                        debug!(error = %e, "Ignoring ICMP-induced receive error");
                    }
                    Err(e) => {
                        error!(error = %e, "UDP recv error");
                    }
                }
            }
        }
    }

    Ok(())
}

fn create_udp_socket(socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

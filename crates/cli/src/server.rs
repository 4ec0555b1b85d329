use dashdns_protocol::QueryHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{error, info, warn};

/// Practical UDP payload cap for plain DNS.
const MAX_DATAGRAM: usize = 512;

/// Receives datagrams and feeds each one to the handler on its own
/// task, writing the result back to the sender. Unanswerable datagrams
/// (no readable header) are logged and dropped.
pub async fn run_udp_server(host: &str, port: u16, handler: QueryHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address {host}:{port}: {e}"))?;
    let socket = Arc::new(create_udp_socket(socket_addr)?);
    let handler = Arc::new(handler);

    info!(bind_address = %socket_addr, "DNS server ready");

    let mut recv_buf = [0u8; MAX_DATAGRAM];
    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let datagram: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        let socket = socket.clone();
        let handler = handler.clone();
        tokio::spawn(async move {
            match handler.handle(&datagram) {
                Ok(response) => {
                    if let Err(e) = socket.send_to(&response, from).await {
                        warn!(error = %e, client = %from, "Failed to send response");
                    }
                }
                Err(e) => {
                    warn!(error = %e, client = %from, "Dropping unanswerable datagram");
                }
            }
        });
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
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
    Ok(UdpSocket::from_std(std_socket)?)
}

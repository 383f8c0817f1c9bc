use tokio::net::TcpListener;

/// Binds `count` loopback listeners on ephemeral ports. The handshake is
/// completed by the kernel backlog, so nothing needs to accept.
pub async fn loopback_listeners(count: usize) -> (Vec<TcpListener>, Vec<u16>) {
    let mut listeners = Vec::with_capacity(count);
    let mut ports = Vec::with_capacity(count);
    for _ in 0..count {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        ports.push(listener.local_addr().unwrap().port());
        listeners.push(listener);
    }
    (listeners, ports)
}

/// A loopback port that was free a moment ago.
pub async fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

// src/server.rs
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::Config;

const PORT_ATTEMPTS: u16 = 20;

/// Binds the configured host, walking upward from the configured port while
/// addresses are taken.
pub async fn bind_listener(config: &Config) -> Option<TcpListener> {
    for port in (0..=PORT_ATTEMPTS).filter_map(|offset| config.port.checked_add(offset)) {
        let addr = SocketAddr::new(config.host, port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                tracing::info!(%addr, "Server listening");
                return Some(listener);
            }
            Err(e) => tracing::warn!(%addr, error=%e, "Could not bind, trying next port"),
        }
    }
    None
}

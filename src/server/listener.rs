use crate::config::ServerConfig;
use crate::files::handler::StaticFileHandler;
use crate::http::connection::Connection;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;
use tracing::{debug, error, info};

/// Binds the listening socket and serves connections until the task is
/// cancelled. Each accepted socket goes through the TLS handshake and then
/// runs its own connection task; one misbehaving client never takes the
/// accept loop down.
pub async fn run(cfg: &ServerConfig, acceptor: TlsAcceptor) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.bind_addr()).await?;
    info!("Listening on {}", cfg.bind_addr());

    let handler = Arc::new(StaticFileHandler::new(cfg.normalized_root()));

    loop {
        let (socket, peer) = listener.accept().await?;
        debug!("Accepted connection from {}", peer);

        let acceptor = acceptor.clone();
        let handler = Arc::clone(&handler);

        tokio::spawn(async move {
            let stream = match acceptor.accept(socket).await {
                Ok(stream) => stream,
                Err(e) => {
                    debug!("TLS handshake failed with {}: {}", peer, e);
                    return;
                }
            };

            let mut conn = Connection::new(stream, handler);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let app = Arc::new(App::from_config(cfg));
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);
    serve(listener, app, cfg).await
}

/// Accepts connections forever, one task per connection.
///
/// A failing connection is logged and dropped; it never stops the loop.
pub async fn serve(listener: TcpListener, app: Arc<App>, cfg: &Config) -> anyhow::Result<()> {
    let read_timeout = cfg.server.read_timeout();
    let limits = cfg.server.parse_limits();
    if read_timeout.is_none() {
        tracing::warn!("No read timeout configured; idle clients hold their task until they disconnect");
    }

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let app = Arc::clone(&app);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, app)
                .with_read_timeout(read_timeout)
                .with_limits(limits);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

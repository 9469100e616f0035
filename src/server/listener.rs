use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::{TcpListener, TcpSocket};
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;

/// Accept queue depth for the listening socket.
const BACKLOG: u32 = 10;

/// Bind the listening socket on all interfaces with address reuse enabled.
pub fn bind(port: u16) -> anyhow::Result<TcpListener> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

    let socket = TcpSocket::new_v4()?;
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;

    Ok(socket.listen(BACKLOG)?)
}

/// Accept connections forever, one worker task per connection.
///
/// Each worker owns its accepted stream exclusively; the listener handle
/// never enters a worker. Finished workers are reaped from the same loop,
/// between accepts, so a long-running worker never holds up new
/// connections and a crashed worker never takes the listener down.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    let mut workers = JoinSet::new();

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (socket, peer) = match accepted {
                    Ok(pair) => pair,
                    Err(e) => {
                        warn!(error = %e, "Accept failed, retrying");
                        continue;
                    }
                };
                info!("Accepted connection from {}", peer);

                workers.spawn(async move {
                    let mut conn = Connection::new(socket);
                    if let Err(e) = conn.run().await {
                        error!("Connection error from {}: {}", peer, e);
                    }
                });
            }

            Some(finished) = workers.join_next(), if !workers.is_empty() => {
                if let Err(e) = finished {
                    error!(error = %e, "Worker ended abnormally");
                }
            }
        }
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg.port)?;
    info!("Listening on port {}", cfg.port);

    serve(listener).await
}

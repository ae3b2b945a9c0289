// Server module entry point
// Accept loop for the router host with Ctrl+C shutdown

pub mod connection;
pub mod listener;

pub use listener::create_listener;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;
use connection::accept_connection;

/// Accept connections until Ctrl+C
pub async fn run(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            signal = &mut shutdown => {
                signal?;
                logger::log_server_stop();
                return Ok(());
            }
        }
    }
}

use clap::Parser;
use std::sync::Arc;

use file_router::config::{AppState, Config};
use file_router::{logger, server};

/// Serve a directory of controller and view files over HTTP
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Config file path without extension
    #[arg(short, long, default_value = "config")]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = Config::load_from(&cli.config)?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;
    let state = Arc::new(AppState::new(&cfg));

    logger::log_server_start(&addr, &cfg);
    if !std::path::Path::new(&cfg.router.controller_root).is_dir() {
        logger::log_warning(&format!(
            "Controller root '{}' is not a directory, every request will miss",
            cfg.router.controller_root
        ));
    }

    logger::log_info("Press Ctrl+C to stop");
    server::run(listener, state).await?;
    Ok(())
}

use anyhow::Context;
use bastion::config::ServerConfig;
use bastion::server::{listener, tls};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = match ServerConfig::try_parse() {
        Ok(cfg) => cfg,
        Err(e) => {
            let requested_help = matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            );
            e.print()?;
            std::process::exit(if requested_help { 0 } else { 1 });
        }
    };

    let acceptor = tls::build_acceptor(&cfg.certs_dir)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(cfg.pool_size.get())
        .enable_all()
        .build()
        .context("Failed to build runtime")?;

    tracing::info!(
        "Starting server on port {} with a thread pool of {}",
        cfg.port,
        cfg.pool_size
    );

    runtime.block_on(async {
        tokio::select! {
            res = listener::run(&cfg, acceptor) => {
                res
            }

            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                Ok(())
            }
        }
    })
}

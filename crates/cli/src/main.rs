use clap::Parser;
use dnsrelay_domain::CliOverrides;
use dnsrelay_jobs::{CacheSnapshotJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dnsrelay")]
#[command(version)]
#[command(about = "dnsrelay - caching DNS forward proxy")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver (IP or IP:PORT)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Cache snapshot file
    #[arg(long, value_name = "FILE")]
    cache_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        upstream: cli.upstream,
        cache_file: cli.cache_file,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dnsrelay v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;

    let shutdown = CancellationToken::new();
    spawn_signal_handler(shutdown.clone());

    let mut jobs = JobRunner::new().with_shutdown_token(shutdown.clone());
    if let Some(interval) = config.cache.snapshot_interval() {
        jobs = jobs.with_cache_snapshot(
            CacheSnapshotJob::new(dns_services.cache.clone()).with_interval(interval),
        );
    }
    let job_handles = jobs.start().await;

    let served = server::start_dns_server(
        config.server.listen_addr(),
        dns_services.handler.clone(),
        config.server.max_packet_size,
        shutdown.clone(),
    )
    .await;

    shutdown.cancel();
    for handle in job_handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Background job ended abnormally");
        }
    }

    if config.cache.save_on_shutdown {
        match dns_services.cache.save() {
            Ok(outcome) => info!(
                domains = outcome.domains,
                entries = outcome.entries,
                path = %config.cache.snapshot_path,
                "Cache snapshot saved on shutdown"
            ),
            Err(e) => error!(error = %e, "Failed to save cache snapshot on shutdown"),
        }
    }

    served?;
    info!("Server shutdown complete");
    Ok(())
}

fn spawn_signal_handler(shutdown: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                shutdown.cancel();
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
        }
    });
}

use clap::Parser;
use host_monitor_domain::CliOverrides;
use host_monitor_jobs::{ChangeLogJob, HostSyncJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "host-monitor")]
#[command(version)]
#[command(about = "Host Monitor - LAN presence tracking from the kernel ARP table")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Only track hosts seen on this interface
    #[arg(short = 'i', long)]
    interface: Option<String>,

    /// ARP table path
    #[arg(long, value_name = "FILE")]
    arp_path: Option<String>,

    /// Seconds between ARP table polls
    #[arg(long, value_name = "SECS")]
    poll_interval: Option<u64>,

    /// Seconds without a sighting before a host is reported offline
    #[arg(long, value_name = "SECS")]
    offline_timeout: Option<u64>,

    /// nmap-mac-prefixes vendor database
    #[arg(long, value_name = "FILE")]
    vendor_db: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Seed the table from the first ARP read without announcing hosts
    #[arg(long)]
    silent_load: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            interface: self.interface.clone(),
            arp_path: self.arp_path.clone(),
            poll_interval_secs: self.poll_interval,
            offline_timeout_secs: self.offline_timeout,
            vendor_db_path: self.vendor_db.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config)?;

    info!("Starting Host Monitor v{}", env!("CARGO_PKG_VERSION"));
    info!(
        arp_path = %config.monitor.arp_path,
        interface = config.monitor.interface.as_deref().unwrap_or("all"),
        poll_interval_secs = config.monitor.poll_interval_secs,
        offline_timeout_secs = config.tracker.offline_timeout_secs,
        "Configuration loaded"
    );

    let services = di::Services::new(&config).await;

    if cli.silent_load {
        services.load_arp.execute().await?;
    } else {
        services.sync_arp.execute().await?;
    }

    if config.monitor.print_table {
        services.get_hosts.log_table();
    }

    let shutdown = CancellationToken::new();
    let jobs = JobRunner::new()
        .with_change_log(ChangeLogJob::new(services.tracker.notifications()))
        .with_host_sync(
            HostSyncJob::new(services.sync_arp.clone())
                .with_interval(config.monitor.poll_interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }

    info!("Shutdown requested");
    shutdown.cancel();
    for job in jobs {
        if let Err(e) = job.await {
            error!(error = %e, "Background job ended abnormally");
        }
    }

    if config.monitor.print_table {
        services.get_hosts.log_table();
    }

    info!("Host Monitor stopped");
    Ok(())
}

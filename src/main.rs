use std::net::SocketAddr;
use std::sync::Arc;

use clap::{ArgAction, Parser};
use student_registry::config::{DEFAULT_LOG_FILTER, DEFAULT_PORT};
use student_registry::{service, InMemoryStudentStore, ServerConfig, StudentService};

/// In-memory student record service.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value_t = SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)))]
    bind: SocketAddr,

    /// Start with the demo students loaded
    #[arg(long)]
    seed_demo: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,

    /// Verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        ServerConfig {
            bind: cli.bind,
            seed_demo: cli.seed_demo,
            log_filter: cli.log_filter,
        }
        .with_verbosity(cli.verbose)
    }
}

fn setup_logging(filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from(Cli::parse());
    setup_logging(&config.log_filter);

    let store = if config.seed_demo {
        tracing::info!("Seeding demo students");
        InMemoryStudentStore::with_records(InMemoryStudentStore::demo_records())
    } else {
        InMemoryStudentStore::new()
    };

    let service = Arc::new(StudentService::new(store));
    tracing::info!("Press Ctrl+C to shutdown");
    service::serve(service, config.bind).await?;

    Ok(())
}

use launch_dash::app::DashboardContext;
use launch_dash::config::DashboardConfig;
use launch_dash::server::DashboardServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // A missing or malformed dataset stops the process before it listens.
    let context = DashboardContext::load(&config.data_path).inspect_err(|e| {
        log::error!("Failed to load {}: {e:#}", config.data_path.display());
    })?;

    DashboardServer::new(config, context).serve().await
}

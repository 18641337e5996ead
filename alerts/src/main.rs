use anyhow::Result;
use order_alerts::config::AppConfig;
use order_alerts::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;
    log::info!(
        "order-alerts starting: creation and status-change channels configured, bind={}",
        config.bind_addr
    );

    server::run(config).await
}

//! 向 `products` 表填充随机商品
//!
//! ```shell
//! SEED_COUNT=500 cargo run --bin seed
//! ```

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use database::{initialize_database, seeder};
use shared_lib::AppConfig;
use std::sync::Arc;
use tracing::info;

/// 默认填充数量
const DEFAULT_SEED_COUNT: usize = 2000;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let config = AppConfig::load()?;
    let count = match std::env::var("SEED_COUNT") {
        Ok(raw) => raw.parse().wrap_err_with(|| format!("Invalid value for SEED_COUNT: {raw:?}"))?,
        Err(_) => DEFAULT_SEED_COUNT,
    };

    let pool = initialize_database(Arc::clone(&config)).await?;
    info!("🌱 开始填充 {} 个商品", count);

    let seeded = seeder::seed_products(&pool, count).await;
    pool.close().await;

    seeded?;
    Ok(())
}

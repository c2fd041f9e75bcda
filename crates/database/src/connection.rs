use crate::{DatabaseError, DatabaseResult};
use shared_lib::models::config::{AppConfig, DatabaseConfig};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 数据库连接池
pub type DatabasePool = Pool<Postgres>;

/// 根据配置生成连接参数
///
/// 设置了 `DATABASE_URL` 时直接解析，否则使用单独的 host/port/name/user/password 组合，
/// 避免密码中的特殊字符需要手动转义
pub fn connect_options(config: &DatabaseConfig) -> DatabaseResult<PgConnectOptions> {
    match &config.url {
        Some(url) => PgConnectOptions::from_str(url)
            .map_err(|e| DatabaseError::connection(format!("无法解析 DATABASE_URL: {e}"))),
        None => Ok(PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.name)
            .username(&config.user)
            .password(&config.password)),
    }
}

/// 创建数据库连接池并执行迁移（一站式函数）
pub async fn initialize_database(config: Arc<AppConfig>) -> DatabaseResult<DatabasePool> {
    let db_config = &config.database;

    // 注意：pool已经是一个智能指针了，所以可以使用.clone()安全跨线程使用
    let pool = PgPoolOptions::new()
        // 启动预留，加快获取速度
        .min_connections(db_config.max_connections.min(2))
        .max_connections(db_config.max_connections)
        // 连接池耗尽时最多等待3秒，超时按存储错误处理
        .acquire_timeout(Duration::from_secs(3))
        // 1小时空闲则释放
        .idle_timeout(Duration::from_secs(3600))
        // 6小时强制释放，避免长时间链接导致数据库问题
        .max_lifetime(Duration::from_secs(3600 * 6))
        .test_before_acquire(true)
        .connect_with(connect_options(db_config)?)
        .await
        .map_err(|e| DatabaseError::connection(format!("连接PostgreSQL数据库失败: {e}")))?;

    info!(
        "🗄️ 数据库连接池创建成功 (最大连接数 {})",
        db_config.max_connections
    );

    if db_config.run_migrations {
        info!("🔄 开始执行数据库迁移...");
        sqlx::migrate!("../../migrations").run(&pool).await?;
        info!("✅ 数据库迁移完成");
    }

    Ok(pool)
}

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use database::{initialize_database, RepositoryFactory};
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;
use web_service::{start_web_service, AppState};

/// 默认日志级别，可通过 `RUST_LOG` 覆盖
const DEFAULT_LOG_FILTER: &str = "info,database=debug,web_service=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    let config = AppConfig::load()?;

    let pool = initialize_database(Arc::clone(&config))
        .await
        .wrap_err("Initialize postgresql database")?;
    let factory = RepositoryFactory::new(pool);

    // 关闭信号，web服务收到后停止接收新的请求
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let state = AppState::new(factory.product_repository());
    let served = start_web_service(state, &config.listen_addr(), shutdown_rx).await;

    // HTTP 服务已停止监听，此时再关闭连接池，保证没有新的查询进来
    factory.close().await;

    served
}

/// 等待 Ctrl+C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("无法监听 Ctrl+C 信号: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("无法监听 SIGTERM 信号: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("📴 收到 SIGINT 信号，正在关闭 HTTP 服务"),
        _ = terminate => info!("📴 收到 SIGTERM 信号，正在关闭 HTTP 服务"),
    }
}

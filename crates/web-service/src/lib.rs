//! Web服务模块
//!
//! 提供商品 HTTP API 接口和文档服务

use color_eyre::Result;
use database::ProductRepositoryTrait;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;

/// 应用共享状态
///
/// 仓库以 trait object 的形式保存，生产环境注入 PostgreSQL 实现，测试时注入内存实现
#[derive(Clone)]
pub struct AppState {
    pub product_repository: Arc<dyn ProductRepositoryTrait>,
}

impl AppState {
    pub fn new(product_repository: Arc<dyn ProductRepositoryTrait>) -> Self {
        Self { product_repository }
    }
}

/// 启动 Web 服务
///
/// 收到关闭信号后停止监听，等待处理中的请求完成后返回。
/// 调用方应在返回之后再关闭数据库连接池
pub async fn start_web_service(state: AppState, bind_addr: &str, shutdown_rx: Receiver<bool>) -> Result<()> {
    let router = routes::create_app_router(state);

    info!("🚀 启动 Web Service 在 http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            wait_for_shutdown(shutdown_rx).await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    info!("✅ HTTP 服务已关闭");

    Ok(())
}

/// 等待关闭信号
async fn wait_for_shutdown(mut shutdown_rx: Receiver<bool>) {
    // 如果已经是 true，直接返回
    if *shutdown_rx.borrow() {
        return;
    }

    // 等待信号变化，发送端被丢弃时同样视为关闭
    let _ = shutdown_rx.changed().await;
}

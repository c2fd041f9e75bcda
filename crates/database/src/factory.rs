//! 仓库工厂
//!
//! 持有进程唯一的数据库连接池，负责按需创建并缓存仓库实例，以及在退出时关闭连接池

use crate::connection::DatabasePool;
use crate::repositories::ProductRepository;
use std::sync::{Arc, OnceLock};
use tracing::info;

/// 仓库工厂
///
/// 在程序启动时显式创建，再把仓库实例注入到 web 服务的共享状态中，不依赖全局变量。
#[derive(Debug)]
pub struct RepositoryFactory {
    pool: DatabasePool,
    product_repository: OnceLock<Arc<ProductRepository>>,
}

impl RepositoryFactory {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            pool,
            product_repository: OnceLock::new(),
        }
    }

    /// 获取商品仓库
    ///
    /// 第一次调用时创建，之后都返回同一个实例
    pub fn product_repository(&self) -> Arc<ProductRepository> {
        Arc::clone(
            self.product_repository
                .get_or_init(|| Arc::new(ProductRepository::new(self.pool.clone()))),
        )
    }

    /// 关闭连接池
    ///
    /// 需要在 HTTP 服务停止监听之后调用：不再接收新的请求，
    /// 等待已借出的连接归还后关闭。重复调用是安全的
    pub async fn close(&self) {
        if self.pool.is_closed() {
            return;
        }

        info!("🔌 正在关闭数据库连接池...");
        self.pool.close().await;
        info!("✅ 数据库连接池已关闭");
    }
}

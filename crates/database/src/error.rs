use thiserror::Error;

/// 数据库操作错误类型
///
/// 这些错误都属于存储层故障，HTTP 层统一转换为 500，不会把原始信息返回给客户端
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// 查询执行失败（连接中断、约束冲突、超时等）
    #[error("数据库操作错误: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// 无法建立连接池
    #[error("数据库连接错误: {0}")]
    ConnectionError(String),

    /// `migrations/` 迁移执行失败
    #[error("数据库迁移错误: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

impl DatabaseError {
    /// 创建连接错误
    pub fn connection<T: ToString>(msg: T) -> Self {
        Self::ConnectionError(msg.to_string())
    }
}

use crate::models::common::Message;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DatabaseError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 路径中的 id 不是合法的整数
    #[error("Invalid ID format: {0}")]
    InvalidId(#[from] PathRejection),

    /// 请求体不是合法的 json 或缺少必填字段
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// 查询参数格式错误
    #[error(transparent)]
    InvalidQuery(#[from] QueryRejection),

    /// 目标商品不存在
    #[error("Product not found")]
    NotFound,

    /// 仓库层数据库错误
    ///
    /// 原始错误只记录到日志，不返回给客户端
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::ValidationFailed(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")),
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, "Invalid ID format".to_string()),
            AppError::InvalidBody(err) => (StatusCode::BAD_REQUEST, err.body_text()),
            AppError::InvalidQuery(err) => (StatusCode::BAD_REQUEST, err.body_text()),
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::RepositoryError(err) => {
                error!("❌ 仓库层错误: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (status, Json(Message::new(message))).into_response()
    }
}

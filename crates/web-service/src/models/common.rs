use database::PageInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 分页元信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[schema(example = 146)]
    /// 满足条件的总数
    pub total: i64,

    #[schema(example = 1)]
    /// 当前页码，从 1 开始
    pub page: u32,

    #[schema(example = 10)]
    /// 每页大小
    pub limit: u32,

    #[schema(example = 15)]
    /// 总页数
    pub total_pages: i64,

    /// 是否还有下一页
    pub has_next: bool,

    /// 是否有上一页
    pub has_prev: bool,
}

impl From<PageInfo> for PageMeta {
    fn from(info: PageInfo) -> Self {
        Self {
            total: info.total,
            page: info.page,
            limit: info.limit,
            total_pages: info.total_pages,
            has_next: info.has_next,
            has_prev: info.has_prev,
        }
    }
}

/// 分页列表对象
///
/// 格式：`{ "data": [...], "pagination": {...} }`
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ReplyList<T> {
    pub data: Vec<T>,

    /// 分页信息
    pub pagination: PageMeta,
}

/// 只包含一条提示信息的返回对象，错误信息也使用这个格式
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct Message {
    #[schema(example = "Product not found")]
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

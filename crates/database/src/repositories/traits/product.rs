//! 商品仓库 trait 定义
//!
//! 定义商品数据库操作的抽象接口

use crate::models::product::{PaginatedResult, Pagination, Product, ProductCreate, ProductFilter, ProductUpdate};
use crate::DatabaseResult;

/// 商品仓库trait定义
///
/// 定义了商品相关的数据库操作接口，支持：
/// - 商品列表（过滤 + 分页）
/// - 商品查询
/// - 商品创建
/// - 商品更新（部分字段合并）
/// - 商品删除
///
/// "不存在" 不是错误：查询、更新返回 `None`，删除返回 `false`。
/// 只有存储层本身出错时才返回 [`crate::DatabaseError`]。
#[async_trait::async_trait]
pub trait ProductRepositoryTrait: Send + Sync + 'static {
    /// 根据过滤条件分页查询商品
    ///
    /// # 参数
    /// - `filter`: 过滤条件，所有条件为 AND 关系
    /// - `pagination`: 分页参数
    ///
    /// # 返回值
    /// 返回当前页的商品以及分页元信息 [`PaginatedResult`]
    async fn find_all(&self, filter: ProductFilter, pagination: Pagination) -> DatabaseResult<PaginatedResult<Product>>;

    /// 根据 ID 获取商品信息，不存在时返回 `None`
    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Product>>;

    /// 创建新商品
    ///
    /// # 返回值
    /// 返回数据库中保存的完整商品信息（包含生成的 `id` 和时间戳）
    async fn create(&self, product: ProductCreate) -> DatabaseResult<Product>;

    /// 更新商品信息
    ///
    /// 未提供的字段保持原值。商品不存在时返回 `None`，不会创建新商品
    async fn update(&self, id: i32, update: ProductUpdate) -> DatabaseResult<Option<Product>>;

    /// 删除商品，返回是否真的删除了一行
    async fn delete(&self, id: i32) -> DatabaseResult<bool>;
}

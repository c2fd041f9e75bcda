//! 商品仓库
//!
//! 负责商品相关的 PostgreSQL 数据库操作

use crate::models::product::{PageInfo, PaginatedResult, Pagination, Product, ProductCreate, ProductFilter, ProductUpdate};
use crate::repositories::query;
use crate::repositories::traits::ProductRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 商品仓库结构体
///
/// 连接池由调用方创建后注入，仓库本身不缓存任何数据
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// 创建新的商品仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProductRepositoryTrait for ProductRepository {
    /// 根据过滤条件分页查询商品
    ///
    /// 数据查询和计数查询使用相同的过滤条件，并发执行：
    /// 1. `SELECT ... ORDER BY id LIMIT $n OFFSET $m` 获取当前页数据
    /// 2. `SELECT COUNT(*)` 获取总数，用于计算总页数
    ///
    /// 按 `id` 排序保证数据不变时多次翻页的结果稳定
    async fn find_all(&self, filter: ProductFilter, pagination: Pagination) -> DatabaseResult<PaginatedResult<Product>> {
        debug!("🔍 查询商品列表 - 过滤条件: {:?}, 分页: {:?}", filter, pagination);

        let mut select = query::select_page(&filter, pagination);
        let mut count = query::count_matching(&filter);

        let (products, total) = tokio::try_join!(
            select.build_query_as::<Product>().fetch_all(&self.pool),
            count.build_query_scalar::<i64>().fetch_one(&self.pool),
        )?;

        debug!("✅ 查询完成 - 当前页 {} 个商品，总计 {} 个", products.len(), total);

        Ok(PaginatedResult {
            data: products,
            pagination: PageInfo::new(total, pagination),
        })
    }

    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Product>> {
        debug!("🔍 根据 ID 获取商品: {}", id);

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, category, sku, stock, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// 创建新商品
    ///
    /// `created_at`/`updated_at` 由数据库默认值填充，同一条语句内两者相同
    async fn create(&self, product: ProductCreate) -> DatabaseResult<Product> {
        debug!("📝 创建商品: {:#?}", product);

        let sku = product.sku_or_default();
        let stock = product.stock_or_default();

        let created = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, category, sku, stock)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, price, category, sku, stock, created_at, updated_at
            "#,
        )
        .bind(product.name)
        .bind(product.description)
        .bind(product.price)
        .bind(product.category)
        .bind(sku)
        .bind(stock)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 商品创建成功: {}", created.id);
        Ok(created)
    }

    /// 更新商品信息
    ///
    /// 只有提供了的字段会出现在 `SET` 子句中，其余字段保持数据库中的原值。
    /// 合并在一条 `UPDATE ... RETURNING` 语句中完成，没有匹配的行时返回 `None`
    async fn update(&self, id: i32, update: ProductUpdate) -> DatabaseResult<Option<Product>> {
        debug!("🔄 更新商品 {} 信息: {:#?}", id, update);

        let mut builder = query::update_product(id, &update);
        let product = builder
            .build_query_as::<Product>()
            .fetch_optional(&self.pool)
            .await?;

        match &product {
            Some(_) => debug!("✅ 商品 {} 更新成功", id),
            None => debug!("商品 {} 不存在，未更新", id),
        }
        Ok(product)
    }

    async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        debug!("🗑️ 删除商品: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

//! 商品数据库模型
//!
//! 定义商品相关的数据库模型结构体，以及查询、分页相关的参数类型

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;

/// 商品信息结构体，对应 `products` 表中的一行
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub sku: Option<String>,
    pub stock: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// 商品创建参数
///
/// `sku` 为空时自动生成，`stock` 为空时默认为 0
#[derive(Debug, Clone, Default)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub sku: Option<String>,
    pub stock: Option<i32>,
}

impl ProductCreate {
    /// 实际写入的 sku，未提供（或为空字符串）时使用 [`default_sku`]
    pub fn sku_or_default(&self) -> String {
        match self.sku.as_deref() {
            Some(sku) if !sku.is_empty() => sku.to_string(),
            _ => default_sku(),
        }
    }

    pub fn stock_or_default(&self) -> i32 {
        self.stock.unwrap_or(0)
    }
}

/// 商品更新参数
///
/// 所有字段都是可选的，`None` 表示保持原值。
/// `description` 和 `category` 允许为空，所以使用了两层 [`Option`]：
/// - `None`: 保持原值
/// - `Some(None)`: 清空
/// - `Some(Some(v))`: 更新为 `v`
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<Decimal>,
    pub category: Option<Option<String>>,
    pub sku: Option<String>,
    pub stock: Option<i32>,
}

impl ProductUpdate {
    /// 将更新内容合并到已有商品上，未提供的字段保持不变
    ///
    /// 不会修改 `id`/`created_at`/`updated_at`
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(sku) = &self.sku {
            product.sku = Some(sku.clone());
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}

/// 商品列表过滤条件，所有条件之间为 AND 关系
///
/// 空字符串和 `None` 一样，不产生过滤条件
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// 商品名称（忽略大小写的模糊匹配）
    pub name: Option<String>,
    /// 商品分类（忽略大小写的模糊匹配）
    pub category: Option<String>,
    /// 最低价格（包含）
    pub min_price: Option<Decimal>,
    /// 最高价格（包含）
    pub max_price: Option<Decimal>,
}

impl ProductFilter {
    pub fn name_term(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    pub fn category_term(&self) -> Option<&str> {
        self.category.as_deref().filter(|s| !s.is_empty())
    }

    /// 是否没有任何过滤条件
    pub fn is_empty(&self) -> bool {
        self.name_term().is_none()
            && self.category_term().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// 判断商品是否满足过滤条件
    pub fn matches(&self, product: &Product) -> bool {
        let contains = |value: Option<&str>, term: &str| {
            value.is_some_and(|v| v.to_lowercase().contains(&term.to_lowercase()))
        };

        self.name_term().is_none_or(|term| contains(Some(&product.name), term))
            && self.category_term().is_none_or(|term| contains(product.category.as_deref(), term))
            && self.min_price.is_none_or(|min| product.price >= min)
            && self.max_price.is_none_or(|max| product.price <= max)
    }
}

/// 分页参数
///
/// 页码从 1 开始。通过 [`Pagination::new`] 构造时会处理缺失或非法的值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;
    /// 每页最多返回的记录数
    pub const MAX_LIMIT: u32 = 100;

    /// 根据原始参数构造分页信息
    ///
    /// - 缺失或 `<= 0` 的页码使用 [`Pagination::DEFAULT_PAGE`]
    /// - 缺失或 `<= 0` 的页面大小使用 [`Pagination::DEFAULT_LIMIT`]，超过 [`Pagination::MAX_LIMIT`] 时截断
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page
            .filter(|p| *p > 0)
            .map_or(Self::DEFAULT_PAGE, |p| u32::try_from(p).unwrap_or(u32::MAX));
        let limit = limit
            .filter(|l| *l > 0)
            .map_or(Self::DEFAULT_LIMIT, |l| l.min(i64::from(Self::MAX_LIMIT)) as u32);

        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// `(page - 1) * limit`
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// 分页元信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// 满足条件的总记录数
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageInfo {
    pub fn new(total: i64, pagination: Pagination) -> Self {
        let limit = i64::from(pagination.limit());
        let total_pages = (total + limit - 1) / limit;
        let page = pagination.page();

        Self {
            total,
            page,
            limit: pagination.limit(),
            total_pages,
            has_next: i64::from(page) < total_pages,
            has_prev: page > 1,
        }
    }
}

/// 分页查询结果
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

/// 默认的 sku: `SKU` + 当前毫秒时间戳
pub fn default_sku() -> String {
    format!("SKU{}", Utc::now().timestamp_millis())
}

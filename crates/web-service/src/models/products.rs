//! 商品接口的请求/响应结构体

use crate::models::common::ReplyList;
use chrono::NaiveDateTime;
use database::{PaginatedResult, Pagination, Product, ProductFilter};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// 商品列表查询参数
///
/// 所有参数都是可选的，过滤条件之间为 AND 关系
#[derive(Deserialize, Debug, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// 页码，从 1 开始，默认 1
    pub page: Option<i64>,

    /// 每页大小，默认 10，最大 100
    pub limit: Option<i64>,

    /// 商品名称（忽略大小写的模糊搜索）
    pub name: Option<String>,

    /// 商品分类（忽略大小写的模糊搜索）
    pub category: Option<String>,

    /// 最低价格（包含）
    #[param(value_type = Option<f64>)]
    pub min_price: Option<Decimal>,

    /// 最高价格（包含）
    #[param(value_type = Option<f64>)]
    pub max_price: Option<Decimal>,
}

impl ProductQuery {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            name: self.name.clone(),
            category: self.category.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }
}

/// 新建商品
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct ProductCreate {
    #[schema(example = "Widget Pro")]
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[schema(example = "This is a test product")]
    pub description: Option<String>,

    #[schema(value_type = f64, example = 99.99)]
    pub price: Decimal,

    #[schema(example = "Testing")]
    #[validate(length(max = 100))]
    pub category: Option<String>,

    /// 不填时自动生成
    #[schema(example = "TEST0001")]
    #[validate(length(max = 50))]
    pub sku: Option<String>,

    /// 不填时为 0
    #[schema(example = 10)]
    pub stock: Option<i32>,
}

impl From<ProductCreate> for database::ProductCreate {
    fn from(p: ProductCreate) -> Self {
        Self {
            name: p.name,
            description: p.description,
            price: p.price,
            category: p.category,
            sku: p.sku,
            stock: p.stock,
        }
    }
}

/// 更新商品
///
/// 未出现的字段保持原值；`description`、`category` 显式传 `null` 会清空
#[derive(Deserialize, Debug, Default, ToSchema, Validate)]
#[validate(schema(function = "validate_category_length"))]
pub struct ProductUpdate {
    #[schema(example = "Updated Test Product")]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    #[schema(value_type = Option<f64>, example = 199.99)]
    pub price: Option<Decimal>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,

    #[validate(length(max = 50))]
    pub sku: Option<String>,

    pub stock: Option<i32>,
}

impl From<ProductUpdate> for database::ProductUpdate {
    fn from(p: ProductUpdate) -> Self {
        Self {
            name: p.name,
            description: p.description,
            price: p.price,
            category: p.category,
            sku: p.sku,
            stock: p.stock,
        }
    }
}

/// 字段出现即为 `Some`，值为 `null` 时得到 `Some(None)`
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

fn validate_category_length(update: &ProductUpdate) -> Result<(), ValidationError> {
    match &update.category {
        Some(Some(category)) if category.chars().count() > 100 => {
            let mut err = ValidationError::new("length");
            err.message = Some(Cow::from("category must be at most 100 characters"));
            Err(err)
        }
        _ => Ok(()),
    }
}

/// 商品信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ProductInfo {
    #[schema(example = 15)]
    pub id: i32,

    #[schema(example = "Widget Pro")]
    pub name: String,

    pub description: Option<String>,

    /// 保留两位小数的字符串
    #[schema(value_type = String, example = "99.99")]
    pub price: Decimal,

    pub category: Option<String>,

    #[schema(example = "SKU1718000000000")]
    pub sku: Option<String>,

    #[schema(example = 0)]
    pub stock: i32,

    pub created_at: NaiveDateTime,

    pub updated_at: NaiveDateTime,
}

impl From<Product> for ProductInfo {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            category: p.category,
            sku: p.sku,
            stock: p.stock,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<PaginatedResult<Product>> for ReplyList<ProductInfo> {
    fn from(result: PaginatedResult<Product>) -> Self {
        Self {
            data: result.data.into_iter().map(Into::into).collect(),
            pagination: result.pagination.into(),
        }
    }
}

//! 商品相关接口
//!
//! 每个接口只调用一次仓库方法：
//! - 路径中的 id 解析失败返回 400
//! - 仓库返回 `None` / `false` 时返回 404
//! - 仓库报错时返回 500，具体原因只写日志

use crate::models::common::{Message, ReplyList};
use crate::models::err::AppError;
use crate::models::products::{ProductCreate, ProductInfo, ProductQuery, ProductUpdate};
use crate::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;
use validator::Validate;

/// 根据查询参数分页获取商品
///
/// 查询参数由 [`ProductQuery`] 决定，全部为可选参数。
///
/// ## 提取器
///
/// 这里使用 `Result<Query<ProductQuery>, QueryRejection>` 而不是直接使用 `Query<ProductQuery>`，
/// 这样解析失败时可以转换为我们自己的 [`AppError`]，返回统一的 `{"message": ...}` 格式。
#[utoipa::path(get,
    path = "/products",
    tag = "products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Paginated products", body = ReplyList<ProductInfo>),
        (status = 400, description = "Malformed query", body = Message),
        (status = 500, description = "Storage failure", body = Message),
    ),
)]
pub async fn find_products(
    State(state): State<AppState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<ReplyList<ProductInfo>>, AppError> {
    let Query(query) = query?;
    debug!("🔍 查询商品 {:?}", query);

    let result = state
        .product_repository
        .find_all(query.filter(), query.pagination())
        .await?;

    Ok(Json(result.into()))
}

/// 创建商品
///
/// `sku` 未填写时自动生成，`stock` 默认为 0
#[utoipa::path(post,
    path = "/products",
    tag = "products",
    request_body = ProductCreate,
    responses(
        (status = 201, description = "Created product", body = ProductInfo),
        (status = 400, description = "Invalid body", body = Message),
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductInfo>), AppError> {
    let Json(product) = payload?;
    debug!("Creating product {:#?}", product);

    product.validate()?;

    let product = state.product_repository.create(product.into()).await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// 查询指定商品信息
#[utoipa::path(get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "商品 ID")),
    responses(
        (status = 200, description = "Product", body = ProductInfo),
        (status = 400, description = "Invalid ID format", body = Message),
        (status = 404, description = "Product not found", body = Message),
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ProductInfo>, AppError> {
    let Path(id) = id?;
    debug!("Getting product id {}", id);

    let product = state
        .product_repository
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(product.into()))
}

/// 更新商品信息
///
/// 根据 `id` 和修改信息 [`ProductUpdate`] 更新商品，请求中没有出现的字段保持原值。
#[utoipa::path(put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "商品 ID")),
    request_body = ProductUpdate,
    responses(
        (status = 200, description = "Merged product", body = ProductInfo),
        (status = 400, description = "Invalid ID format or body", body = Message),
        (status = 404, description = "Product not found", body = Message),
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ProductUpdate>, JsonRejection>,
) -> Result<Json<ProductInfo>, AppError> {
    let Path(id) = id?;
    let Json(update) = payload?;
    debug!("Updating product {} with {:#?}", id, update);

    update.validate()?;

    let product = state
        .product_repository
        .update(id, update.into())
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(product.into()))
}

/// 删除指定的商品
#[utoipa::path(delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "商品 ID")),
    responses(
        (status = 200, description = "Product deleted", body = Message),
        (status = 400, description = "Invalid ID format", body = Message),
        (status = 404, description = "Product not found", body = Message),
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, AppError> {
    let Path(id) = id?;
    debug!("delete product {}", id);

    if !state.product_repository.delete(id).await? {
        return Err(AppError::NotFound);
    }

    Ok(Json(Message::new("Product deleted successfully")))
}

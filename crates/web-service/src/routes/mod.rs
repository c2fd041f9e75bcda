//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::models::common::Message;
use crate::routes::products::__path_create_product;
use crate::routes::products::__path_delete_product;
use crate::routes::products::__path_find_products;
use crate::routes::products::__path_get_product;
use crate::routes::products::__path_update_product;
use crate::routes::products::{create_product, delete_product, find_products, get_product, update_product};
use crate::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod products;

/// 导出 `/api` 下的所有路由
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，同一个宏里面的接口必须是同一个路径，并且不能有相同的http方法。
/// 所以列表/创建（`/products`）和单个商品操作（`/products/{id}`）需要拆开定义：
///
/// ```rust,ignore
/// routes!(find_products, create_product)
/// .routes!(get_product, update_product, delete_product)
/// ```
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(find_products, create_product))
        .routes(routes!(get_product, update_product, delete_product))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档，用户可通过 `/docs` 访问
/// - 挂载 `/api/products` 相关接口
/// - `/` 与 `/health` 基础接口
/// - 未匹配的路由返回 json 格式的 404
/// - 使用 [`TraceLayer`] 记录每个请求
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "products", description = r#"
商品 CRUD 接口：

- 列表查询（名称/分类模糊搜索、价格区间、分页）
- 查询、创建、更新（部分字段）、删除
            "#)
        ),
    )]
    struct ApiDoc;

    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routers(shared_state))
        .split_for_parts();

    router
        .merge(Scalar::with_url("/docs", api))
        .route("/", get(root))
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

async fn root() -> &'static str {
    "Product Service"
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "product-service"
    }))
}

async fn not_found() -> (StatusCode, Json<Message>) {
    (StatusCode::NOT_FOUND, Json(Message::new("Route not found")))
}

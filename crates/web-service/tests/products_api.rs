//! 商品接口测试
//!
//! 使用内存仓库驱动真实的路由，不依赖数据库

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use database::{
    DatabaseError, DatabaseResult, MemoryProductRepository, PaginatedResult, Pagination, Product, ProductCreate,
    ProductFilter, ProductRepositoryTrait, ProductUpdate,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use web_service::routes::create_app_router;
use web_service::AppState;

fn app() -> Router {
    create_app_router(AppState::new(Arc::new(MemoryProductRepository::new())))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, created) = send(app, "POST", "/api/products", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    created
}

#[tokio::test]
async fn crud_scenario() {
    let app = app();

    let created = create(
        &app,
        json!({
            "name": "Test",
            "description": "This is a test product",
            "price": 99.99,
            "category": "Testing"
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Test");
    assert_eq!(created["stock"], 0);
    assert!(created["sku"].as_str().is_some_and(|sku| !sku.is_empty()));
    assert_eq!(created["created_at"], created["updated_at"]);

    let (status, fetched) = send(&app, "GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Test");

    let (status, updated) = send(&app, "PUT", &format!("/api/products/{id}"), Some(json!({"price": 199.99}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Test");
    assert_eq!(updated["price"], "199.99");
    assert_eq!(updated["description"], "This is a test product");
    assert_eq!(updated["category"], "Testing");
    assert_eq!(updated["sku"], created["sku"]);
    assert_eq!(updated["created_at"], created["created_at"]);

    let (status, deleted) = send(&app, "DELETE", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Product deleted successfully");

    let (status, missing) = send(&app, "GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["message"], "Product not found");
}

#[tokio::test]
async fn missing_products_return_404() {
    let app = app();

    let (status, _) = send(&app, "GET", "/api/products/9999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", "/api/products/9999999", Some(json!({"name": "ghost"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/products/9999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 更新不存在的商品不会创建新商品
    let (_, list) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(list["pagination"]["total"], 0);
}

#[tokio::test]
async fn invalid_ids_return_400() {
    let app = app();

    for (method, body) in [("GET", None), ("PUT", Some(json!({"name": "x"}))), ("DELETE", None)] {
        let (status, reply) = send(&app, method, "/api/products/abc", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(reply["message"], "Invalid ID format");
    }
}

#[tokio::test]
async fn list_paginates_in_id_order() {
    let app = app();
    for i in 0..25 {
        create(&app, json!({"name": format!("Product {i}"), "price": 10})).await;
    }

    let (status, first) = send(&app, "GET", "/api/products?page=1&limit=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"].as_array().unwrap().len(), 10);
    assert_eq!(
        first["pagination"],
        json!({"total": 25, "page": 1, "limit": 10, "totalPages": 3, "hasNext": true, "hasPrev": false})
    );

    let (_, last) = send(&app, "GET", "/api/products?page=3&limit=10", None).await;
    assert_eq!(last["data"].as_array().unwrap().len(), 5);
    assert_eq!(last["data"][0]["name"], "Product 20");
    assert_eq!(last["pagination"]["hasNext"], false);
    assert_eq!(last["pagination"]["hasPrev"], true);

    // 缺省分页参数
    let (_, defaults) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(defaults["pagination"]["page"], 1);
    assert_eq!(defaults["pagination"]["limit"], 10);
}

#[tokio::test]
async fn list_applies_filters() {
    let app = app();
    create(&app, json!({"name": "Widget Pro", "price": 25, "category": "Tools"})).await;
    create(&app, json!({"name": "Gadget", "price": 15, "category": "Tools"})).await;
    create(&app, json!({"name": "mini widget", "price": 5, "category": "Toys"})).await;

    let (_, by_name) = send(&app, "GET", "/api/products?name=Wid", None).await;
    let names: Vec<_> = by_name["data"].as_array().unwrap().iter().map(|p| p["name"].clone()).collect();
    assert_eq!(names, vec![json!("Widget Pro"), json!("mini widget")]);

    let (_, combined) = send(&app, "GET", "/api/products?category=tools&minPrice=10&maxPrice=20", None).await;
    assert_eq!(combined["pagination"]["total"], 1);
    assert_eq!(combined["data"][0]["name"], "Gadget");
}

#[tokio::test]
async fn malformed_input_returns_400() {
    let app = app();

    let (status, _) = send(&app, "GET", "/api/products?page=first", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/api/products", Some(json!({"name": "no price"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/api/products", Some(json!({"name": "", "price": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_keeps_omitted_fields_and_clears_explicit_nulls() {
    let app = app();
    let created = create(
        &app,
        json!({"name": "Lamp", "description": "Desk lamp", "price": 30, "category": "Home", "sku": "LAMP01", "stock": 4}),
    )
    .await;
    let uri = format!("/api/products/{}", created["id"]);

    let (status, updated) = send(&app, "PUT", &uri, Some(json!({"stock": 0, "description": null}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["stock"], 0);
    assert_eq!(updated["description"], Value::Null);
    assert_eq!(updated["name"], "Lamp");
    assert_eq!(updated["category"], "Home");
    assert_eq!(updated["sku"], "LAMP01");
    assert_eq!(updated["price"], created["price"]);
}

#[tokio::test]
async fn root_and_unknown_routes() {
    let app = app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, health) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");

    let (status, _) = send(&app, "GET", "/non-existent-route", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// 所有操作都失败的仓库，用于验证 500 不会泄露内部错误
struct FailingRepository;

#[async_trait::async_trait]
impl ProductRepositoryTrait for FailingRepository {
    async fn find_all(&self, _: ProductFilter, _: Pagination) -> DatabaseResult<PaginatedResult<Product>> {
        Err(DatabaseError::connection("password authentication failed for user \"postgres\""))
    }

    async fn find_by_id(&self, _: i32) -> DatabaseResult<Option<Product>> {
        Err(DatabaseError::connection("connection refused"))
    }

    async fn create(&self, _: ProductCreate) -> DatabaseResult<Product> {
        Err(DatabaseError::connection("connection refused"))
    }

    async fn update(&self, _: i32, _: ProductUpdate) -> DatabaseResult<Option<Product>> {
        Err(DatabaseError::connection("connection refused"))
    }

    async fn delete(&self, _: i32) -> DatabaseResult<bool> {
        Err(DatabaseError::connection("connection refused"))
    }
}

#[tokio::test]
async fn storage_failures_return_generic_500() {
    let app = create_app_router(AppState::new(Arc::new(FailingRepository)));

    let (status, reply) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply, json!({"message": "Internal server error"}));

    let (status, reply) = send(&app, "DELETE", "/api/products/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!reply.to_string().contains("refused"));
}

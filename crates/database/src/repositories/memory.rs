//! 内存商品仓库
//!
//! [`ProductRepositoryTrait`] 的内存实现，行为与 PostgreSQL 实现保持一致，
//! 用于在没有数据库的环境下测试上层逻辑。

use crate::models::product::{PageInfo, PaginatedResult, Pagination, Product, ProductCreate, ProductFilter, ProductUpdate};
use crate::repositories::traits::ProductRepositoryTrait;
use crate::DatabaseResult;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Store {
    /// 按 id 升序保存
    products: Vec<Product>,
    last_id: i32,
}

/// 内存商品仓库，克隆后共享同一份数据
#[derive(Debug, Clone, Default)]
pub struct MemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProductRepositoryTrait for MemoryProductRepository {
    async fn find_all(&self, filter: ProductFilter, pagination: Pagination) -> DatabaseResult<PaginatedResult<Product>> {
        let store = self.store.read().await;
        let matching: Vec<&Product> = store.products.iter().filter(|p| filter.matches(p)).collect();

        let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let data = matching
            .iter()
            .skip(offset)
            .take(pagination.limit() as usize)
            .map(|p| (*p).clone())
            .collect();

        Ok(PaginatedResult {
            data,
            pagination: PageInfo::new(matching.len() as i64, pagination),
        })
    }

    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, product: ProductCreate) -> DatabaseResult<Product> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let now = Utc::now().naive_utc();
        let created = Product {
            id: store.last_id,
            sku: Some(product.sku_or_default()),
            stock: product.stock_or_default(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            created_at: now,
            updated_at: now,
        };
        store.products.push(created.clone());

        Ok(created)
    }

    async fn update(&self, id: i32, update: ProductUpdate) -> DatabaseResult<Option<Product>> {
        let mut store = self.store.write().await;
        let Some(product) = store.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        update.apply_to(product);
        product.updated_at = Utc::now().naive_utc();

        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i32) -> DatabaseResult<bool> {
        let mut store = self.store.write().await;
        let before = store.products.len();
        store.products.retain(|p| p.id != id);

        Ok(store.products.len() < before)
    }
}

//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` / `Sync`：仓库实例在多个请求（多个线程）之间共享
//! - `'static`：作为应用服务长期存活，不依赖短期引用
//!
//! 这些约束使得仓库可以作为 trait object 放进 axum 的共享状态中：
//!
//! ```rust,ignore
//! #[derive(Clone)]
//! struct AppState {
//!     product_repository: Arc<dyn ProductRepositoryTrait>,
//! }
//!
//! // 生产环境使用 PostgreSQL 实现
//! let state = AppState { product_repository: Arc::new(ProductRepository::new(pool)) };
//!
//! // 测试时替换为内存实现
//! let state = AppState { product_repository: Arc::new(MemoryProductRepository::new()) };
//! ```
//!
//! ### 最佳实践 ✅
//!
//! 1. **异步优先**：所有数据库操作方法都是异步的
//! 2. **错误处理**：使用统一的 `DatabaseResult<T>` 类型
//! 3. **不存在不是错误**：使用 `Option` / `bool` 表达，交给上层决定返回 404

pub mod product;

// 重新导出
pub use product::ProductRepositoryTrait;

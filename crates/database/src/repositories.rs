//! 数据库仓库模块
//!
//! 这里定义数据库操作的Repository层

pub mod memory;
pub mod product;
mod query;
pub mod traits;

// 重新导出具体的类型
pub use memory::MemoryProductRepository;
pub use product::ProductRepository;
pub use traits::ProductRepositoryTrait;

//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移、商品仓库、仓库工厂以及测试数据填充等功能

pub mod connection;
pub mod error;
pub mod factory;
pub mod models;
pub mod repositories;
pub mod seeder;

pub use connection::{connect_options, initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use factory::RepositoryFactory;
pub use models::product::{
    PageInfo, PaginatedResult, Pagination, Product, ProductCreate, ProductFilter, ProductUpdate,
};
pub use repositories::{
    memory::MemoryProductRepository, product::ProductRepository, traits::ProductRepositoryTrait,
};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;

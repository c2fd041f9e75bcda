//! 测试数据填充
//!
//! 生成随机商品并批量写入 `products` 表，方便本地调试分页和过滤

use crate::connection::DatabasePool;
use crate::models::product::ProductCreate;
use crate::DatabaseResult;
use chrono::{Duration, NaiveDateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};
use tracing::info;

/// 每条 INSERT 语句写入的行数
const BATCH_SIZE: usize = 100;

const ADJECTIVES: &[&str] = &[
    "Ergonomic", "Rustic", "Sleek", "Handcrafted", "Refined", "Practical", "Gorgeous", "Intelligent",
];
const MATERIALS: &[&str] = &["Steel", "Wooden", "Cotton", "Granite", "Plastic", "Bronze", "Leather"];
const NOUNS: &[&str] = &["Chair", "Widget", "Gadget", "Lamp", "Keyboard", "Table", "Gloves", "Bottle"];
const CATEGORIES: &[&str] = &["Electronics", "Home", "Garden", "Tools", "Sports", "Books", "Toys"];

/// 一条待写入的种子数据
#[derive(Debug, Clone)]
pub struct SeedProduct {
    pub product: ProductCreate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// 生成一条随机商品
pub fn random_product<R: Rng>(rng: &mut R) -> SeedProduct {
    let pick = |rng: &mut R, items: &[&str]| items[rng.gen_range(0..items.len())].to_string();

    let name = format!("{} {} {}", pick(rng, ADJECTIVES), pick(rng, MATERIALS), pick(rng, NOUNS));
    let category = pick(rng, CATEGORIES);
    let sku: String = (0..8)
        .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_uppercase())
        .collect();

    let now = Utc::now().naive_utc();
    let created_at = now - Duration::days(rng.gen_range(1..365));

    SeedProduct {
        product: ProductCreate {
            description: Some(format!("A {} item from the {} department", name.to_lowercase(), category)),
            name,
            price: Decimal::new(rng.gen_range(100..100_000), 2),
            category: Some(category),
            sku: Some(sku),
            stock: Some(rng.gen_range(0..=1000)),
        },
        created_at,
        updated_at: now,
    }
}

/// 写入 `count` 条随机商品，每批 [`BATCH_SIZE`] 条
pub async fn seed_products(pool: &DatabasePool, count: usize) -> DatabaseResult<usize> {
    let products: Vec<SeedProduct> = {
        let mut rng = rand::thread_rng();
        (0..count).map(|_| random_product(&mut rng)).collect()
    };

    for (index, batch) in products.chunks(BATCH_SIZE).enumerate() {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO products (name, description, price, category, sku, stock, created_at, updated_at) ",
        );
        builder.push_values(batch, |mut row, seed| {
            row.push_bind(seed.product.name.clone())
                .push_bind(seed.product.description.clone())
                .push_bind(seed.product.price)
                .push_bind(seed.product.category.clone())
                .push_bind(seed.product.sku.clone())
                .push_bind(seed.product.stock_or_default())
                .push_bind(seed.created_at)
                .push_bind(seed.updated_at);
        });
        builder.build().execute(pool).await?;

        info!("📦 已写入第 {} 批，共 {} 条", index + 1, batch.len());
    }

    info!("✅ 成功填充 {} 个商品", count);
    Ok(count)
}

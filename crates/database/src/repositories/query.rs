//! 商品 SQL 构建
//!
//! 使用 [`sqlx::QueryBuilder`] 拼接动态 SQL，所有用户输入都通过 `push_bind` 作为位置参数绑定，
//! 不会直接拼接到 SQL 文本中。

use crate::models::product::{Pagination, ProductFilter, ProductUpdate};
use sqlx::{Postgres, QueryBuilder};

/// 查询商品时返回的列
pub(crate) const PRODUCT_COLUMNS: &str =
    "id, name, description, price, category, sku, stock, created_at, updated_at";

/// 分页查询满足条件的商品，按 `id` 升序排列
pub(crate) fn select_page(filter: &ProductFilter, pagination: Pagination) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT ");
    builder.push(PRODUCT_COLUMNS).push(" FROM products");
    push_filter(&mut builder, filter);
    builder
        .push(" ORDER BY id LIMIT ")
        .push_bind(i64::from(pagination.limit()))
        .push(" OFFSET ")
        .push_bind(pagination.offset());
    builder
}

/// 统计满足条件的商品总数，过滤条件与 [`select_page`] 相同
pub(crate) fn count_matching(filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM products");
    push_filter(&mut builder, filter);
    builder
}

/// 只更新提供了的字段，同时刷新 `updated_at`
///
/// 单条语句完成合并，不存在先查询再更新之间被并发删除的问题
pub(crate) fn update_product(id: i32, update: &ProductUpdate) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE products SET ");

    let mut assignments = builder.separated(", ");
    if let Some(name) = &update.name {
        assignments.push("name = ").push_bind_unseparated(name.clone());
    }
    if let Some(description) = &update.description {
        assignments.push("description = ").push_bind_unseparated(description.clone());
    }
    if let Some(price) = update.price {
        assignments.push("price = ").push_bind_unseparated(price);
    }
    if let Some(category) = &update.category {
        assignments.push("category = ").push_bind_unseparated(category.clone());
    }
    if let Some(sku) = &update.sku {
        assignments.push("sku = ").push_bind_unseparated(sku.clone());
    }
    if let Some(stock) = update.stock {
        assignments.push("stock = ").push_bind_unseparated(stock);
    }
    assignments.push("updated_at = NOW()");

    builder
        .push(" WHERE id = ")
        .push_bind(id)
        .push(" RETURNING ")
        .push(PRODUCT_COLUMNS);
    builder
}

fn push_filter(builder: &mut QueryBuilder<'static, Postgres>, filter: &ProductFilter) {
    if filter.is_empty() {
        return;
    }

    builder.push(" WHERE ");
    let mut predicates = builder.separated(" AND ");
    if let Some(name) = filter.name_term() {
        predicates.push("name ILIKE ").push_bind_unseparated(like_pattern(name));
    }
    if let Some(category) = filter.category_term() {
        predicates.push("category ILIKE ").push_bind_unseparated(like_pattern(category));
    }
    if let Some(min_price) = filter.min_price {
        predicates.push("price >= ").push_bind_unseparated(min_price);
    }
    if let Some(max_price) = filter.max_price {
        predicates.push("price <= ").push_bind_unseparated(max_price);
    }
}

/// 生成 `%term%` 模糊匹配模式，`term` 中的 `%`、`_`、`\` 按字面量处理
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn select_without_filter() {
        let builder = select_page(&ProductFilter::default(), Pagination::default());

        assert_eq!(
            builder.sql(),
            "SELECT id, name, description, price, category, sku, stock, created_at, updated_at \
             FROM products ORDER BY id LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn select_with_every_filter() {
        let filter = ProductFilter {
            name: Some("wid".to_string()),
            category: Some("tools".to_string()),
            min_price: Some(Decimal::from(5)),
            max_price: Some(Decimal::from(50)),
        };
        let builder = select_page(&filter, Pagination::new(Some(2), Some(20)));

        assert!(builder.sql().ends_with(
            "FROM products WHERE name ILIKE $1 AND category ILIKE $2 AND price >= $3 AND price <= $4 \
             ORDER BY id LIMIT $5 OFFSET $6"
        ));
    }

    #[test]
    fn count_shares_predicates_without_paging() {
        let filter = ProductFilter {
            category: Some("tools".to_string()),
            max_price: Some(Decimal::from(50)),
            ..Default::default()
        };

        assert_eq!(
            count_matching(&filter).sql(),
            "SELECT COUNT(*) FROM products WHERE category ILIKE $1 AND price <= $2"
        );
        assert_eq!(count_matching(&ProductFilter::default()).sql(), "SELECT COUNT(*) FROM products");
    }

    #[test]
    fn empty_terms_produce_no_predicates() {
        let filter = ProductFilter {
            name: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(count_matching(&filter).sql(), "SELECT COUNT(*) FROM products");
    }

    #[test]
    fn user_input_never_reaches_sql_text() {
        let filter = ProductFilter {
            name: Some("'; DROP TABLE products; --".to_string()),
            ..Default::default()
        };

        assert!(!select_page(&filter, Pagination::default()).sql().contains("DROP"));
    }

    #[test]
    fn update_only_sets_supplied_fields() {
        let update = ProductUpdate {
            price: Some(Decimal::new(19999, 2)),
            description: Some(None),
            ..Default::default()
        };

        assert_eq!(
            update_product(7, &update).sql(),
            "UPDATE products SET description = $1, price = $2, updated_at = NOW() WHERE id = $3 \
             RETURNING id, name, description, price, category, sku, stock, created_at, updated_at"
        );
    }

    #[test]
    fn update_without_fields_still_touches_updated_at() {
        let sql = update_product(1, &ProductUpdate::default()).sql().to_string();
        assert!(sql.starts_with("UPDATE products SET updated_at = NOW() WHERE id = $1"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("Wid"), "%Wid%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}

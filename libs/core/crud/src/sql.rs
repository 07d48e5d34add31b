//! Parameterized Postgres statements for the generic repository.
//!
//! Identifiers come from `Resource` constants and are always double-quoted
//! (`desc` and `type` are column names). Values are bound as `$n`, never
//! interpolated.

use sea_orm::{DbBackend, Statement, Value};

fn quote(ident: &str) -> String {
    format!("\"{}\"", ident)
}

fn column_list(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|column| quote(column))
        .collect::<Vec<_>>()
        .join(", ")
}

fn bound(value: u64) -> Value {
    i64::try_from(value).unwrap_or(i64::MAX).into()
}

pub fn insert(table: &str, columns: &[&str], values: Vec<(&str, Value)>) -> Statement {
    let (names, params): (Vec<&str>, Vec<Value>) = values.into_iter().unzip();
    let placeholders = (1..=params.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quote(table),
        column_list(&names),
        placeholders,
        column_list(columns)
    );

    Statement::from_sql_and_values(DbBackend::Postgres, sql, params)
}

pub fn select_one(table: &str, columns: &[&str], id_column: &str, id: Value) -> Statement {
    let sql = format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(columns),
        quote(table),
        quote(id_column)
    );

    Statement::from_sql_and_values(DbBackend::Postgres, sql, [id])
}

pub fn select_page(
    table: &str,
    columns: &[&str],
    id_column: &str,
    limit: u64,
    skip: u64,
) -> Statement {
    let sql = format!(
        "SELECT {} FROM {} ORDER BY {} ASC LIMIT $1 OFFSET $2",
        column_list(columns),
        quote(table),
        quote(id_column)
    );

    Statement::from_sql_and_values(DbBackend::Postgres, sql, [bound(limit), bound(skip)])
}

/// Row count of the whole table, read back as `total`.
pub fn count(table: &str) -> Statement {
    let sql = format!("SELECT COUNT(*) AS total FROM {}", quote(table));
    Statement::from_string(DbBackend::Postgres, sql)
}

/// Column-level patch: only the listed columns appear in `SET`.
pub fn update(
    table: &str,
    columns: &[&str],
    id_column: &str,
    id: Value,
    changes: Vec<(&str, Value)>,
) -> Statement {
    let (names, mut params): (Vec<&str>, Vec<Value>) = changes.into_iter().unzip();
    let assignments = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{} = ${}", quote(name), i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    params.push(id);
    let sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quote(table),
        assignments,
        quote(id_column),
        params.len(),
        column_list(columns)
    );

    Statement::from_sql_and_values(DbBackend::Postgres, sql, params)
}

pub fn delete(table: &str, id_column: &str, id: Value) -> Statement {
    let sql = format!("DELETE FROM {} WHERE {} = $1", quote(table), quote(id_column));
    Statement::from_sql_and_values(DbBackend::Postgres, sql, [id])
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[&str] = &["category_id", "title", "desc", "created_at", "updated_at"];

    fn values(stmt: &Statement) -> Vec<Value> {
        stmt.values.clone().map(|v| v.0).unwrap_or_default()
    }

    #[test]
    fn test_insert_binds_every_value() {
        let stmt = insert(
            "categories",
            COLUMNS,
            vec![("title", "Drinks".into()), ("desc", "cold drinks".into())],
        );

        assert_eq!(
            stmt.sql,
            r#"INSERT INTO "categories" ("title", "desc") VALUES ($1, $2) RETURNING "category_id", "title", "desc", "created_at", "updated_at""#
        );
        assert_eq!(values(&stmt).len(), 2);
    }

    #[test]
    fn test_select_one_filters_by_id() {
        let stmt = select_one("categories", COLUMNS, "category_id", 7.into());

        assert_eq!(
            stmt.sql,
            r#"SELECT "category_id", "title", "desc", "created_at", "updated_at" FROM "categories" WHERE "category_id" = $1"#
        );
        assert_eq!(values(&stmt), vec![Value::from(7)]);
    }

    #[test]
    fn test_select_page_orders_by_id_and_binds_bigints() {
        let stmt = select_page("categories", COLUMNS, "category_id", 10, 20);

        assert!(stmt.sql.ends_with(r#"ORDER BY "category_id" ASC LIMIT $1 OFFSET $2"#));
        assert_eq!(values(&stmt), vec![Value::from(10i64), Value::from(20i64)]);
    }

    #[test]
    fn test_select_page_clamps_huge_limit() {
        let stmt = select_page("categories", COLUMNS, "category_id", u64::MAX, 0);
        assert_eq!(values(&stmt)[0], Value::from(i64::MAX));
    }

    #[test]
    fn test_count_ignores_pagination() {
        assert_eq!(count("products").sql, r#"SELECT COUNT(*) AS total FROM "products""#);
    }

    #[test]
    fn test_update_sets_only_changed_columns() {
        let stmt = update(
            "categories",
            COLUMNS,
            "category_id",
            3.into(),
            vec![("desc", "Beverages".into()), ("updated_at", 0i64.into())],
        );

        assert_eq!(
            stmt.sql,
            r#"UPDATE "categories" SET "desc" = $1, "updated_at" = $2 WHERE "category_id" = $3 RETURNING "category_id", "title", "desc", "created_at", "updated_at""#
        );
        assert_eq!(values(&stmt).last(), Some(&Value::from(3)));
    }

    #[test]
    fn test_delete_by_id() {
        let stmt = delete("cashiers", "cashier_id", 1.into());
        assert_eq!(stmt.sql, r#"DELETE FROM "cashiers" WHERE "cashier_id" = $1"#);
    }
}

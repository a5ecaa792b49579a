use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
SELECT id, type
FROM categories
ORDER BY type
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_category(pool: &SqlitePool, kind: &str) -> anyhow::Result<i64> {
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
INSERT INTO categories (type) VALUES (?1)
        "#,
    )
    .bind(kind)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn update_category(pool: &SqlitePool, category: Category) -> sqlx::Result<()> {
    let mut conn = pool.acquire().await?;

    sqlx::query(
        r#"
        UPDATE categories SET type=?1 WHERE categories.id = ?2
        "#,
    )
    .bind(category.kind)
    .bind(category.id)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn delete_category(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
    let mut conn = pool.acquire().await?;

    sqlx::query(
        r#"
        DELETE FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

// Restores a category under its exported id, so question references survive
// an export/import round trip.
async fn insert_category(pool: &SqlitePool, category: &Category) -> sqlx::Result<()> {
    let mut conn = pool.acquire().await?;

    sqlx::query(
        r#"
        INSERT INTO categories (id, type) VALUES (?1, ?2)
        "#,
    )
    .bind(category.id)
    .bind(&category.kind)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn import_categories(pool: &SqlitePool, categories: Vec<Category>) -> sqlx::Result<()> {
    let existing: HashSet<i64> = get_all_categories(pool).await?.iter().map(|c| c.id).collect();
    let incoming: HashSet<i64> = categories.iter().map(|c| c.id).collect();
    for id in existing.difference(&incoming) {
        delete_category(pool, *id).await?;
    }
    for category in categories {
        if existing.contains(&category.id) {
            update_category(pool, category).await?;
        } else {
            insert_category(pool, &category).await?;
        }
    }
    Ok(())
}

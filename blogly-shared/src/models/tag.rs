/// Tag model and database operations
///
/// Tags are uniquely named labels attached to posts through the `posts_tags`
/// join table. Deleting a tag removes its join rows but never the posts.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tags (
///     id SERIAL PRIMARY KEY,
///     name VARCHAR(50) NOT NULL,
///     CONSTRAINT tags_name_key UNIQUE (name)
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

/// Name of the unique constraint on `tags.name`
pub const TAG_NAME_CONSTRAINT: &str = "tags_name_key";

/// Tag row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i32,

    /// Unique across all tags
    pub name: String,
}

impl Tag {
    /// Inserts a new tag
    ///
    /// # Errors
    ///
    /// Fails with a database error on [`TAG_NAME_CONSTRAINT`] if the name is taken.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Self, sqlx::Error> {
        let tag = sqlx::query_as::<_, Tag>(
            r#"
            INSERT INTO tags (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(tag)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let tag = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(tag)
    }

    /// Finds a tag by its exact name
    ///
    /// Takes any executor so post writes can resolve tags inside their transaction.
    pub async fn find_by_name<'e>(
        executor: impl PgExecutor<'e>,
        name: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let tag = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE name = $1")
            .bind(name)
            .fetch_optional(executor)
            .await?;

        Ok(tag)
    }

    /// Lists all tags alphabetically
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let tags = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags ORDER BY name")
            .fetch_all(pool)
            .await?;

        Ok(tags)
    }

    /// Lists the tags linked to a post, alphabetically
    pub async fn list_for_post(pool: &PgPool, post_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let tags = sqlx::query_as::<_, Tag>(
            r#"
            SELECT t.id, t.name
            FROM tags t
            JOIN posts_tags pt ON pt.tag_id = t.id
            WHERE pt.post_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(post_id)
        .fetch_all(pool)
        .await?;

        Ok(tags)
    }

    /// Renames a tag
    ///
    /// # Returns
    ///
    /// The updated row, or None if no tag has this ID
    pub async fn update(pool: &PgPool, id: i32, name: &str) -> Result<Option<Self>, sqlx::Error> {
        let tag = sqlx::query_as::<_, Tag>(
            r#"
            UPDATE tags
            SET name = $2
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(tag)
    }

    /// Deletes a tag; its join rows go with it, the posts stay
    ///
    /// # Returns
    ///
    /// True if a row was deleted, false if the ID did not exist
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

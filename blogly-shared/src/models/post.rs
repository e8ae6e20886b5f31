/// Post model and database operations
///
/// A post belongs to exactly one person (`author_id`) and may carry any
/// number of tags. Creating or updating a post writes the post row and its
/// tag links in a single transaction: either all of it lands or none of it.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE posts (
///     id SERIAL PRIMARY KEY,
///     title VARCHAR(50) NOT NULL,
///     content VARCHAR(500) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     author_id INTEGER NOT NULL REFERENCES people(id) ON DELETE CASCADE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use blogly_shared::models::post::{CreatePost, Post};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool, author_id: i32) -> Result<(), Box<dyn std::error::Error>> {
/// let post = Post::create_with_tags(
///     &pool,
///     CreatePost {
///         author_id,
///         title: "Best Post".to_string(),
///         content: "Blablabla".to_string(),
///     },
///     &["sky".to_string()],
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

use crate::models::post_tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Errors from multi-step post writes
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    /// A submitted tag name has no matching tag
    #[error("Tag not found: {0}")]
    UnknownTag(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Post row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,

    /// Set by the database on insert and never written again
    pub created_at: DateTime<Utc>,

    pub author_id: i32,
}

/// Input for creating a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    pub author_id: i32,
    pub title: String,
    pub content: String,
}

/// Input for updating a post; title and content are always overwritten
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
}

impl Post {
    /// Inserts a post and links it to the named tags in one transaction
    ///
    /// # Errors
    ///
    /// - [`PostError::UnknownTag`] if any name has no tag (nothing is written)
    /// - [`PostError::Database`] on any storage failure, including a missing author
    pub async fn create_with_tags(
        pool: &PgPool,
        data: CreatePost,
        tag_names: &[String],
    ) -> Result<Self, PostError> {
        let mut tx = pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, created_at, author_id
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.author_id)
        .fetch_one(&mut *tx)
        .await?;

        post_tag::link_by_names(&mut *tx, post.id, tag_names).await?;

        tx.commit().await?;

        Ok(post)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, created_at, author_id
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }

    /// Lists a person's posts, newest first
    pub async fn list_by_author(pool: &PgPool, author_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, created_at, author_id
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(author_id)
        .fetch_all(pool)
        .await?;

        Ok(posts)
    }

    /// Lists the posts linked to a tag, newest first
    pub async fn list_by_tag(pool: &PgPool, tag_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT p.id, p.title, p.content, p.created_at, p.author_id
            FROM posts p
            JOIN posts_tags pt ON pt.post_id = p.id
            WHERE pt.tag_id = $1
            ORDER BY p.created_at DESC, p.id DESC
            "#,
        )
        .bind(tag_id)
        .fetch_all(pool)
        .await?;

        Ok(posts)
    }

    /// Overwrites title and content and replaces the whole tag set
    ///
    /// The new tag set is exactly `tag_names`: previous links are dropped
    /// first, so an empty slice leaves the post untagged.
    ///
    /// # Returns
    ///
    /// The updated row, or None if no post has this ID
    ///
    /// # Errors
    ///
    /// [`PostError::UnknownTag`] rolls back the whole update, including title
    /// and content.
    pub async fn update_with_tags(
        pool: &PgPool,
        id: i32,
        data: UpdatePost,
        tag_names: &[String],
    ) -> Result<Option<Self>, PostError> {
        let mut tx = pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $2, content = $3
            WHERE id = $1
            RETURNING id, title, content, created_at, author_id
            "#,
        )
        .bind(id)
        .bind(data.title)
        .bind(data.content)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(post) = post else {
            return Ok(None);
        };

        post_tag::unlink_all(&mut *tx, post.id).await?;
        post_tag::link_by_names(&mut *tx, post.id, tag_names).await?;

        tx.commit().await?;

        Ok(Some(post))
    }

    /// Deletes a post; its tag links go with it
    ///
    /// # Returns
    ///
    /// True if a row was deleted, false if the ID did not exist
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

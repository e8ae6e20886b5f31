/// Post ↔ Tag join rows
///
/// These helpers run on a borrowed connection so that `Post` can call them
/// from inside its own transaction. Nothing here commits.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE posts_tags (
///     post_id INTEGER NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
///     tag_id INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
///     PRIMARY KEY (post_id, tag_id)
/// );
/// ```

use crate::models::{post::PostError, tag::Tag};
use sqlx::PgConnection;

/// Links a post to a tag; linking twice is a no-op
pub async fn link(conn: &mut PgConnection, post_id: i32, tag_id: i32) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO posts_tags (post_id, tag_id)
        VALUES ($1, $2)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(post_id)
    .bind(tag_id)
    .execute(conn)
    .await?;

    Ok(())
}

/// Removes every tag link of a post
pub async fn unlink_all(conn: &mut PgConnection, post_id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM posts_tags WHERE post_id = $1")
        .bind(post_id)
        .execute(conn)
        .await?;

    Ok(())
}

/// Resolves each tag name and links it to the post
///
/// Names are matched exactly as stored; blank and repeated names are
/// skipped. Tags are never created here: the first unknown name aborts
/// with [`PostError::UnknownTag`], leaving the caller's transaction to roll
/// back.
pub async fn link_by_names(
    conn: &mut PgConnection,
    post_id: i32,
    tag_names: &[String],
) -> Result<(), PostError> {
    for name in distinct_names(tag_names) {
        let tag = Tag::find_by_name(&mut *conn, name)
            .await?
            .ok_or_else(|| PostError::UnknownTag(name.to_string()))?;

        link(&mut *conn, post_id, tag.id).await?;
    }

    Ok(())
}

fn distinct_names(tag_names: &[String]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::with_capacity(tag_names.len());
    for name in tag_names.iter().map(String::as_str) {
        if !name.trim().is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

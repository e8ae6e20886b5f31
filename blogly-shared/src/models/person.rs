/// Person model and database operations
///
/// A Person is a post author. Deleting a person removes every post they own
/// (and, through the posts, their tag links) via `ON DELETE CASCADE`.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE people (
///     id SERIAL PRIMARY KEY,
///     first_name VARCHAR(50) NOT NULL,
///     last_name VARCHAR(50) NOT NULL,
///     image_url VARCHAR(200) NOT NULL DEFAULT 'static/no_img.jpeg'
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use blogly_shared::models::person::{CreatePerson, Person};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let person = Person::create(&pool, CreatePerson {
///     first_name: "Mark".to_string(),
///     last_name: "Jones".to_string(),
///     image_url: None,
/// })
/// .await?;
///
/// assert_eq!(person.full_name(), "Mark Jones");
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Image shown for people who were saved without one
pub const DEFAULT_IMAGE_URL: &str = "static/no_img.jpeg";

/// Person row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,

    /// Never empty; falls back to [`DEFAULT_IMAGE_URL`]
    pub image_url: String,
}

/// Input for creating a person
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePerson {
    pub first_name: String,
    pub last_name: String,

    /// None or an empty string both store [`DEFAULT_IMAGE_URL`]
    pub image_url: Option<String>,
}

/// Input for updating a person
///
/// Updates overwrite every column; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePerson {
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
}

/// Maps a missing or blank image URL to the placeholder
pub fn normalize_image_url(image_url: Option<String>) -> String {
    match image_url {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_IMAGE_URL.to_string(),
    }
}

impl Person {
    /// "First Last", as shown in page headings
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Inserts a new person and returns the stored row
    pub async fn create(pool: &PgPool, data: CreatePerson) -> Result<Self, sqlx::Error> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO people (first_name, last_name, image_url)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, image_url
            "#,
        )
        .bind(data.first_name)
        .bind(data.last_name)
        .bind(normalize_image_url(data.image_url))
        .fetch_one(pool)
        .await?;

        Ok(person)
    }

    /// Finds a person by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, first_name, last_name, image_url
            FROM people
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(person)
    }

    /// Lists every person in insertion order
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let people = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, first_name, last_name, image_url
            FROM people
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(people)
    }

    /// Overwrites a person's columns
    ///
    /// # Returns
    ///
    /// The updated row, or None if no person has this ID
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdatePerson,
    ) -> Result<Option<Self>, sqlx::Error> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            UPDATE people
            SET first_name = $2, last_name = $3, image_url = $4
            WHERE id = $1
            RETURNING id, first_name, last_name, image_url
            "#,
        )
        .bind(id)
        .bind(data.first_name)
        .bind(data.last_name)
        .bind(normalize_image_url(data.image_url))
        .fetch_optional(pool)
        .await?;

        Ok(person)
    }

    /// Deletes a person and, by cascade, all of their posts
    ///
    /// # Returns
    ///
    /// True if a row was deleted, false if the ID did not exist
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM people")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

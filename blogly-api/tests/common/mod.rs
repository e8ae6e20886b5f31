//! Common test utilities for integration tests
//!
//! - Router construction over a per-test database
//! - Request helpers for GET and form POST
//! - Seeding helpers for people, tags and posts

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use blogly_api::app::{build_router, AppState};
use blogly_api::config::{ApiConfig, Config, DatabaseConfig};
use blogly_shared::models::person::{CreatePerson, Person};
use blogly_shared::models::post::{CreatePost, Post};
use blogly_shared::models::tag::Tag;
use sqlx::PgPool;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgresql://localhost/blogly_test".to_string(),
            max_connections: 5,
            run_migrations: false,
        },
    }
}

/// Builds the full router, same as `main`, over the given pool
pub fn build_test_app(pool: PgPool) -> Router {
    build_router(AppState::new(pool, test_config()))
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// POSTs an `application/x-www-form-urlencoded` body
pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Redirect target of a response
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should redirect")
        .to_str()
        .unwrap()
        .to_string()
}

pub async fn seed_person(pool: &PgPool, first_name: &str, last_name: &str) -> Person {
    Person::create(
        pool,
        CreatePerson {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            image_url: None,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_tag(pool: &PgPool, name: &str) -> Tag {
    Tag::create(pool, name).await.unwrap()
}

pub async fn seed_post(pool: &PgPool, author_id: i32, title: &str, tags: &[&str]) -> Post {
    let names: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
    Post::create_with_tags(
        pool,
        CreatePost {
            author_id,
            title: title.to_string(),
            content: "Blablabla".to_string(),
        },
        &names,
    )
    .await
    .unwrap()
}

pub fn tag_names(tags: &[Tag]) -> Vec<String> {
    tags.iter().map(|t| t.name.clone()).collect()
}

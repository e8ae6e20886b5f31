/// Application state and router builder
///
/// The database pool is created by the caller and injected here; handlers
/// reach it only through the `State<AppState>` extractor.
///
/// # Example
///
/// ```no_run
/// use blogly_api::{app::{build_router, AppState}, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let app = build_router(AppState::new(pool, config));
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned into every handler; both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete router
///
/// ```text
/// /health                          GET        health report (JSON)
/// /                                GET        people
/// /new                             GET POST   add person
/// /:person_id                      GET POST   person detail
/// /:person_id/edit                 GET POST   edit person
/// /:person_id/delete               POST       delete person
/// /:person_id/posts/new            GET POST   add post
/// /posts/:post_id                  GET        post detail
/// /posts/:post_id/edit             GET POST   edit post
/// /posts/:post_id/delete           POST       delete post
/// /tags                            GET        tags
/// /tags/new                        GET POST   add tag
/// /tags/:tag_id                    GET        tag detail
/// /tags/:tag_id/edit               GET POST   edit tag
/// /tags/:tag_id/delete             POST       delete tag
/// ```
///
/// Static segments (`new`, `posts`, `tags`, `health`) take priority over
/// `:person_id`. Ids that are not integers are rejected with 400 by the
/// `Path` extractor.
pub fn build_router(state: AppState) -> Router {
    use crate::routes::{health, people, posts, tags};

    let people_routes = Router::new()
        .route("/", get(people::list_people))
        .route("/new", get(people::new_person_form).post(people::create_person))
        .route("/:person_id", get(people::show_person).post(people::show_person))
        .route(
            "/:person_id/edit",
            get(people::edit_person_form).post(people::update_person),
        )
        .route("/:person_id/delete", post(people::delete_person))
        .route(
            "/:person_id/posts/new",
            get(posts::new_post_form).post(posts::create_post),
        );

    let post_routes = Router::new()
        .route("/:post_id", get(posts::show_post))
        .route(
            "/:post_id/edit",
            get(posts::edit_post_form).post(posts::update_post),
        )
        .route("/:post_id/delete", post(posts::delete_post));

    let tag_routes = Router::new()
        .route("/", get(tags::list_tags))
        .route("/new", get(tags::new_tag_form).post(tags::create_tag))
        .route("/:tag_id", get(tags::show_tag))
        .route("/:tag_id/edit", get(tags::edit_tag_form).post(tags::update_tag))
        .route("/:tag_id/delete", post(tags::delete_tag));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(people_routes)
        .nest("/posts", post_routes)
        .nest("/tags", tag_routes)
        .layer(CompressionLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Post pages
///
/// # Endpoints
///
/// - `GET /:person_id/posts/new` - Create form for a person
/// - `POST /:person_id/posts/new` - Create, redirect to `/:person_id`
/// - `GET /posts/:post_id` - Detail
/// - `GET /posts/:post_id/edit` - Edit form
/// - `POST /posts/:post_id/edit` - Update, redirect to `/posts/:post_id`
/// - `POST /posts/:post_id/delete` - Delete, redirect to the author's page
///
/// Post bodies carry a repeated `tags` field with tag names. Create and
/// update write the post and its tag links in one transaction.

use crate::{
    app::AppState,
    error::{AppError, AppResult},
    forms::PostForm,
    routes::people::find_person,
    views,
};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use blogly_shared::models::{post::Post, tag::Tag};
use sqlx::PgPool;

async fn find_post(db: &PgPool, post_id: i32) -> AppResult<Post> {
    Post::find_by_id(db, post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))
}

pub async fn new_post_form(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> AppResult<Html<String>> {
    let person = find_person(&state.db, person_id).await?;
    let tags = Tag::list(&state.db).await?;

    Ok(views::posts::new_form(&person, &tags))
}

/// Create post
///
/// # Errors
///
/// - `400 Bad Request`: title or content missing or too long
/// - `404 Not Found`: no such person, or a submitted tag does not exist
pub async fn create_post(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
    Form(fields): Form<Vec<(String, String)>>,
) -> AppResult<Redirect> {
    let form = PostForm::from_fields(fields).validated()?;
    let person = find_person(&state.db, person_id).await?;

    let (data, tag_names) = form.into_create(person.id);
    let post = Post::create_with_tags(&state.db, data, &tag_names).await?;

    tracing::info!(
        post_id = post.id,
        person_id = person.id,
        tags = tag_names.len(),
        "Post created"
    );

    Ok(Redirect::to(&format!("/{}", person.id)))
}

pub async fn show_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> AppResult<Html<String>> {
    let post = find_post(&state.db, post_id).await?;
    let author = find_person(&state.db, post.author_id).await?;
    let tags = Tag::list_for_post(&state.db, post.id).await?;

    Ok(views::posts::detail(&post, &author, &tags))
}

pub async fn edit_post_form(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> AppResult<Html<String>> {
    let tags = Tag::list(&state.db).await?;
    let post = find_post(&state.db, post_id).await?;
    let selected = Tag::list_for_post(&state.db, post.id).await?;

    Ok(views::posts::edit_form(&post, &tags, &selected))
}

/// Update post
///
/// The submitted tags replace the post's tag set entirely; submitting none
/// clears it.
///
/// # Errors
///
/// - `400 Bad Request`: title or content missing or too long
/// - `404 Not Found`: no such post, or a submitted tag does not exist
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
    Form(fields): Form<Vec<(String, String)>>,
) -> AppResult<Redirect> {
    let form = PostForm::from_fields(fields).validated()?;

    let (data, tag_names) = form.into_update();
    let post = Post::update_with_tags(&state.db, post_id, data, &tag_names)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

    tracing::info!(post_id = post.id, tags = tag_names.len(), "Post updated");

    Ok(Redirect::to(&format!("/posts/{}", post.id)))
}

/// Delete post
///
/// # Errors
///
/// - `404 Not Found`: no such post (the author page to return to is unknown)
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> AppResult<Redirect> {
    let post = find_post(&state.db, post_id).await?;

    Post::delete(&state.db, post.id).await?;

    tracing::info!(post_id = post.id, person_id = post.author_id, "Post deleted");

    Ok(Redirect::to(&format!("/{}", post.author_id)))
}

/// Tag pages
///
/// # Endpoints
///
/// - `GET /tags` - List tags
/// - `GET /tags/new` - Create form
/// - `POST /tags/new` - Create, redirect to `/tags`
/// - `GET /tags/:tag_id` - Detail with linked posts
/// - `GET /tags/:tag_id/edit` - Edit form
/// - `POST /tags/:tag_id/edit` - Rename, redirect to `/tags`
/// - `POST /tags/:tag_id/delete` - Delete (posts are kept), redirect to `/tags`

use crate::{
    app::AppState,
    error::{AppError, AppResult},
    forms::TagForm,
    views,
};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use blogly_shared::models::{post::Post, tag::Tag};
use sqlx::PgPool;

async fn find_tag(db: &PgPool, tag_id: i32) -> AppResult<Tag> {
    Tag::find_by_id(db, tag_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tag {} not found", tag_id)))
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!("A tag named '{}' already exists", name))
}

pub async fn list_tags(State(state): State<AppState>) -> AppResult<Html<String>> {
    let tags = Tag::list(&state.db).await?;

    Ok(views::tags::list(&tags))
}

pub async fn show_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i32>,
) -> AppResult<Html<String>> {
    let tag = find_tag(&state.db, tag_id).await?;
    let posts = Post::list_by_tag(&state.db, tag.id).await?;

    Ok(views::tags::detail(&tag, &posts))
}

pub async fn new_tag_form() -> Html<String> {
    views::tags::new_form()
}

/// Create tag
///
/// # Errors
///
/// - `400 Bad Request`: name missing or too long
/// - `409 Conflict`: a tag with this name already exists
pub async fn create_tag(
    State(state): State<AppState>,
    Form(form): Form<TagForm>,
) -> AppResult<Redirect> {
    let form = form.validated()?;

    if Tag::find_by_name(&state.db, &form.name).await?.is_some() {
        return Err(duplicate_name(&form.name));
    }

    // A concurrent insert still trips the unique constraint, which maps to 409
    let tag = Tag::create(&state.db, &form.name).await?;

    tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");

    Ok(Redirect::to("/tags"))
}

pub async fn edit_tag_form(
    State(state): State<AppState>,
    Path(tag_id): Path<i32>,
) -> AppResult<Html<String>> {
    let tag = find_tag(&state.db, tag_id).await?;

    Ok(views::tags::edit_form(&tag))
}

/// Rename tag
///
/// # Errors
///
/// - `400 Bad Request`: name missing or too long
/// - `404 Not Found`: no tag with this ID
/// - `409 Conflict`: another tag already has this name
pub async fn update_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i32>,
    Form(form): Form<TagForm>,
) -> AppResult<Redirect> {
    let form = form.validated()?;
    let tag = find_tag(&state.db, tag_id).await?;

    if let Some(existing) = Tag::find_by_name(&state.db, &form.name).await? {
        if existing.id != tag.id {
            return Err(duplicate_name(&form.name));
        }
    }

    Tag::update(&state.db, tag.id, &form.name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tag {} not found", tag_id)))?;

    tracing::info!(tag_id, name = %form.name, "Tag updated");

    Ok(Redirect::to("/tags"))
}

/// Delete tag
///
/// Deleting an ID that does not exist is a no-op.
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i32>,
) -> AppResult<Redirect> {
    let deleted = Tag::delete(&state.db, tag_id).await?;

    tracing::info!(tag_id, deleted, "Tag delete requested");

    Ok(Redirect::to("/tags"))
}

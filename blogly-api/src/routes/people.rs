/// Person pages
///
/// # Endpoints
///
/// - `GET /` - List people
/// - `GET /new` - Create form
/// - `POST /new` - Create, redirect to `/`
/// - `GET|POST /:person_id` - Detail with the person's posts
/// - `GET /:person_id/edit` - Edit form
/// - `POST /:person_id/edit` - Update, redirect to `/`
/// - `POST /:person_id/delete` - Delete (cascades to posts), redirect to `/`

use crate::{
    app::AppState,
    error::{AppError, AppResult},
    forms::PersonForm,
    views,
};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use blogly_shared::models::{person::Person, post::Post};
use sqlx::PgPool;

/// Fetches a person or fails with 404
pub(crate) async fn find_person(db: &PgPool, person_id: i32) -> AppResult<Person> {
    Person::find_by_id(db, person_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Person {} not found", person_id)))
}

pub async fn list_people(State(state): State<AppState>) -> AppResult<Html<String>> {
    let people = Person::list(&state.db).await?;

    Ok(views::people::list(&people))
}

pub async fn new_person_form() -> Html<String> {
    views::people::new_form()
}

/// Create person
///
/// # Errors
///
/// - `400 Bad Request`: first or last name missing
pub async fn create_person(
    State(state): State<AppState>,
    Form(form): Form<PersonForm>,
) -> AppResult<Redirect> {
    let form = form.validated()?;

    let person = Person::create(&state.db, form.into_create()).await?;

    tracing::info!(person_id = person.id, "Person created");

    Ok(Redirect::to("/"))
}

/// Person detail with their posts
///
/// # Errors
///
/// - `404 Not Found`: no person with this ID
pub async fn show_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> AppResult<Html<String>> {
    let person = find_person(&state.db, person_id).await?;
    let posts = Post::list_by_author(&state.db, person.id).await?;

    Ok(views::people::detail(&person, &posts))
}

pub async fn edit_person_form(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> AppResult<Html<String>> {
    let person = find_person(&state.db, person_id).await?;

    Ok(views::people::edit_form(&person))
}

/// Update person
///
/// Overwrites every field; a blank image falls back to the placeholder.
///
/// # Errors
///
/// - `400 Bad Request`: first or last name missing
/// - `404 Not Found`: no person with this ID
pub async fn update_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
    Form(form): Form<PersonForm>,
) -> AppResult<Redirect> {
    let form = form.validated()?;

    Person::update(&state.db, person_id, form.into_update())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Person {} not found", person_id)))?;

    tracing::info!(person_id, "Person updated");

    Ok(Redirect::to("/"))
}

/// Delete person
///
/// Deleting an ID that does not exist is a no-op.
pub async fn delete_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> AppResult<Redirect> {
    let deleted = Person::delete(&state.db, person_id).await?;

    tracing::info!(person_id, deleted, "Person delete requested");

    Ok(Redirect::to("/"))
}

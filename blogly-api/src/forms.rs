/// Submitted form bodies
///
/// Every field defaults to empty when absent so that a missing field is
/// reported by `validator` as a 400 with a field message, instead of the
/// extractor's generic rejection. Values are stored exactly as submitted;
/// whitespace only matters when deciding whether a required field is blank.
///
/// Post forms carry a repeated `tags` key, which the struct-based
/// `Form<T>` extractor cannot collect; handlers take the raw
/// `Form<Vec<(String, String)>>` pairs and build a [`PostForm`] from them.

use blogly_shared::models::{
    person::{CreatePerson, UpdatePerson},
    post::{CreatePost, UpdatePost},
};
use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Postgres text columns cannot hold NUL
fn storable_text(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(validation_error("nul", "Must not contain NUL characters"));
    }
    Ok(())
}

/// Required field: not blank after trimming, and storable
fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(validation_error("required", "This field is required"));
    }
    storable_text(value)
}

fn storable_tag_names(names: &[String]) -> Result<(), ValidationError> {
    names.iter().try_for_each(|name| storable_text(name))
}

/// Person create/edit form: `first_name`, `last_name`, `image`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PersonForm {
    #[serde(default)]
    #[validate(
        custom(function = "required_text"),
        length(max = 50, message = "First name must be at most 50 characters")
    )]
    pub first_name: String,

    #[serde(default)]
    #[validate(
        custom(function = "required_text"),
        length(max = 50, message = "Last name must be at most 50 characters")
    )]
    pub last_name: String,

    /// Optional; blank means the placeholder image
    #[serde(default)]
    #[validate(
        custom(function = "storable_text"),
        length(max = 200, message = "Image URL must be at most 200 characters")
    )]
    pub image: String,
}

impl PersonForm {
    pub fn validated(self) -> Result<Self, validator::ValidationErrors> {
        self.validate()?;
        Ok(self)
    }

    fn image_url(&self) -> Option<String> {
        (!self.image.trim().is_empty()).then(|| self.image.clone())
    }

    pub fn into_create(self) -> CreatePerson {
        let image_url = self.image_url();
        CreatePerson {
            first_name: self.first_name,
            last_name: self.last_name,
            image_url,
        }
    }

    pub fn into_update(self) -> UpdatePerson {
        let image_url = self.image_url();
        UpdatePerson {
            first_name: self.first_name,
            last_name: self.last_name,
            image_url,
        }
    }
}

/// Post create/edit form: `title`, `content`, zero or more `tags`
#[derive(Debug, Clone, Default, Validate)]
pub struct PostForm {
    #[validate(
        custom(function = "required_text"),
        length(max = 50, message = "Title must be at most 50 characters")
    )]
    pub title: String,

    #[validate(
        custom(function = "required_text"),
        length(max = 500, message = "Content must be at most 500 characters")
    )]
    pub content: String,

    /// Selected tag names, in submission order
    #[validate(custom(function = "storable_tag_names"))]
    pub tags: Vec<String>,
}

impl PostForm {
    /// Collects url-encoded pairs; unknown keys are ignored, and a repeated
    /// `title` or `content` keeps the last value
    pub fn from_fields(fields: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in fields {
            match key.as_str() {
                "title" => form.title = value,
                "content" => form.content = value,
                "tags" => form.tags.push(value),
                _ => {}
            }
        }
        form
    }

    pub fn validated(self) -> Result<Self, validator::ValidationErrors> {
        self.validate()?;
        Ok(self)
    }

    pub fn into_create(self, author_id: i32) -> (CreatePost, Vec<String>) {
        (
            CreatePost {
                author_id,
                title: self.title,
                content: self.content,
            },
            self.tags,
        )
    }

    pub fn into_update(self) -> (UpdatePost, Vec<String>) {
        (
            UpdatePost {
                title: self.title,
                content: self.content,
            },
            self.tags,
        )
    }
}

/// Tag create/edit form: `name`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TagForm {
    #[serde(default)]
    #[validate(
        custom(function = "required_text"),
        length(max = 50, message = "Name must be at most 50 characters")
    )]
    pub name: String,
}

impl TagForm {
    pub fn validated(self) -> Result<Self, validator::ValidationErrors> {
        self.validate()?;
        Ok(self)
    }
}

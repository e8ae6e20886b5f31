/// Route handlers, organized by resource:
///
/// - `health`: Health check endpoint
/// - `people`: Person list, detail and CRUD forms
/// - `posts`: Post detail and CRUD forms (nested under a person for creation)
/// - `tags`: Tag list, detail and CRUD forms

pub mod health;
pub mod people;
pub mod posts;
pub mod tags;

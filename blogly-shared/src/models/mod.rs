/// Database models for Blogly
///
/// # Models
///
/// - `person`: post authors
/// - `post`: posts owned by a person, with transactional tag linking
/// - `tag`: uniquely named labels
/// - `post_tag`: join-row helpers used inside post transactions
///
/// Cascades (person → posts, post/tag → join rows) are enforced by foreign
/// keys in the schema, not by these modules.

pub mod person;
pub mod post;
pub mod post_tag;
pub mod tag;

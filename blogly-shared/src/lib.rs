//! # Blogly Shared Library
//!
//! Persistence layer for the Blogly admin server: connection pooling,
//! schema migrations, and the People / Posts / Tags models.
//!
//! ## Module Organization
//!
//! - `db`: connection pool and migrations
//! - `models`: row types and their CRUD queries

pub mod db;
pub mod models;

/// Current version of the Blogly shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

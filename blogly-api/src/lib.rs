//! # Blogly Server Library
//!
//! Server-rendered administration pages for people, their posts, and tags.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `forms`: Submitted form parsing and validation
//! - `routes`: Route handlers
//! - `views`: HTML rendering

pub mod app;
pub mod config;
pub mod error;
pub mod forms;
pub mod routes;
pub mod views;

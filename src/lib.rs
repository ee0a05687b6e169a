//! slipbox - Self-hosted markdown notes in the browser
//!
//! Documents are flat markdown files whose first line is the title. The
//! filename follows the title, and a small HTTP server behind basic auth
//! serves an autosaving editor with search and browser-side plugins.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod web;

pub use error::SlipboxError;

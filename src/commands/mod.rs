//! CLI commands for create_release_tag
//!
//! - **create_release**: Build a release working copy from a tag working copy

pub mod create_release;

pub use create_release::run_create_release;

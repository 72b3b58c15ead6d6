//! Core building blocks for create_release_tag
//!
//! - **build**: External build step that refreshes the source-tree links
//! - **config**: Optional tool configuration (create_release_tag.toml)
//! - **environment**: CRTM root paths derived from the tag working copy
//! - **error**: Error kinds with contextual help messages and exit codes
//! - **fixfile**: Fixfile directory layouts and byte-order formats
//! - **inventory**: Inventory manifest reader
//! - **run_config**: Per-run settings from the command line
//! - **vcs**: Subversion operations (live and dry-run)

pub mod build;
pub mod config;
pub mod environment;
pub mod error;
pub mod fixfile;
pub mod inventory;
pub mod run_config;
pub mod vcs;

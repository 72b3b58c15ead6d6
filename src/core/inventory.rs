//! Inventory manifest reader
//!
//! The build step leaves a manifest in `src/Build` naming everything that goes
//! into a release. One entry per line:
//!
//! ```text
//! # comment
//! Makefile
//! libsrc/CRTM_Module.f90
//! CRTM_Version.inc -> ../Utility/CRTM_Version.inc
//! ```
//!
//! Plain lines are files; `NAME -> TARGET` lines are symlinks whose target
//! is what gets copied under NAME. Files and link names land under the
//! release root, so they must be relative and may not climb out with `..`.

use crate::core::error::{PreconditionError, ReleaseResult};
use std::fs;
use std::path::{Component, Path, PathBuf};

const LINK_SEPARATOR: &str = "->";

/// A symlink recorded in the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
  /// Path of the link, relative to the build directory
  pub name: PathBuf,
  /// What the link points at, relative to the build directory
  pub target: PathBuf,
}

/// Parsed inventory, in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
  pub files: Vec<PathBuf>,
  pub links: Vec<LinkEntry>,
}

impl Inventory {
  /// Read and parse a manifest file
  pub fn load(path: &Path) -> ReleaseResult<Self> {
    let content = fs::read_to_string(path).map_err(|e| {
      log::debug!("Reading {} failed: {}", path.display(), e);
      PreconditionError::InventoryMissing {
        path: path.to_path_buf(),
      }
    })?;
    Self::parse(&content, path)
  }

  /// Parse manifest text; `origin` only labels errors
  pub fn parse(content: &str, origin: &Path) -> ReleaseResult<Self> {
    let mut inventory = Inventory::default();

    for (idx, raw) in content.lines().enumerate() {
      let line = raw.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }

      let malformed = |reason: &str| PreconditionError::InventoryMalformed {
        path: origin.to_path_buf(),
        line: idx + 1,
        reason: reason.to_string(),
      };

      match line.split_once(LINK_SEPARATOR) {
        None => {
          let file = PathBuf::from(line);
          if !stays_under_release(&file) {
            return Err(malformed("file must be a relative path without '..'").into());
          }
          inventory.files.push(file);
        }
        Some((name, target)) => {
          let (name, target) = (name.trim(), target.trim());
          if target.contains(LINK_SEPARATOR) {
            return Err(malformed("more than one '->'").into());
          }
          if name.is_empty() || target.is_empty() {
            return Err(malformed("link needs both a name and a target").into());
          }
          let name = PathBuf::from(name);
          if !stays_under_release(&name) {
            return Err(malformed("link name must be a relative path without '..'").into());
          }
          inventory.links.push(LinkEntry {
            name,
            target: PathBuf::from(target),
          });
        }
      }
    }

    Ok(inventory)
  }

  /// Number of copy operations this inventory produces
  pub fn len(&self) -> usize {
    self.files.len() + self.links.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Whether joining `path` onto a destination keeps it inside that destination
fn stays_under_release(path: &Path) -> bool {
  path
    .components()
    .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

//! CRTM root-path environment derived from a tag working copy
//!
//! The CRTM build scripts expect `CRTM_ROOT` plus seven derived roots. They are
//! computed once from the tag path and handed to child processes explicitly;
//! this process's own environment is never modified.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Name of the variable holding the tag working-copy root
pub const ROOT_VAR: &str = "CRTM_ROOT";

/// Derived root variables and the suffix appended to `CRTM_ROOT` for each
pub const DERIVED_ROOTS: [(&str, &str); 7] = [
  ("CRTM_SOURCE_ROOT", "/src"),
  ("CRTM_FIXFILE_ROOT", "/fix"),
  ("CRTM_TEST_ROOT", "/test"),
  ("CRTM_EXTERNALS_ROOT", "/externals"),
  ("CRTM_SCRIPTS_ROOT", "/scripts"),
  ("CRTM_DOC_ROOT", "/doc"),
  ("CRTM_VALIDATION_ROOT", "/validation"),
];

/// Immutable set of CRTM roots for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrtmEnvironment {
  pub root: PathBuf,
  pub source_root: PathBuf,
  pub fixfile_root: PathBuf,
  pub test_root: PathBuf,
  pub externals_root: PathBuf,
  pub scripts_root: PathBuf,
  pub doc_root: PathBuf,
  pub validation_root: PathBuf,
}

impl CrtmEnvironment {
  /// Derive every root from the tag working-copy path
  ///
  /// Derivation is plain string concatenation, so the same input always yields
  /// the same set.
  pub fn from_root(root: &Path) -> Self {
    let derive = |suffix: &str| {
      let mut joined = OsString::from(root.as_os_str());
      joined.push(suffix);
      PathBuf::from(joined)
    };

    Self {
      root: root.to_path_buf(),
      source_root: derive(DERIVED_ROOTS[0].1),
      fixfile_root: derive(DERIVED_ROOTS[1].1),
      test_root: derive(DERIVED_ROOTS[2].1),
      externals_root: derive(DERIVED_ROOTS[3].1),
      scripts_root: derive(DERIVED_ROOTS[4].1),
      doc_root: derive(DERIVED_ROOTS[5].1),
      validation_root: derive(DERIVED_ROOTS[6].1),
    }
  }

  /// `src/Build`, where the inventory manifest lives
  pub fn build_dir(&self) -> PathBuf {
    self.source_root.join("Build")
  }

  /// All eight variables as (name, value) pairs, root first
  pub fn vars(&self) -> Vec<(&'static str, &Path)> {
    let derived = [
      &self.source_root,
      &self.fixfile_root,
      &self.test_root,
      &self.externals_root,
      &self.scripts_root,
      &self.doc_root,
      &self.validation_root,
    ];

    let mut vars = Vec::with_capacity(DERIVED_ROOTS.len() + 1);
    vars.push((ROOT_VAR, self.root.as_path()));
    for ((name, _), value) in DERIVED_ROOTS.iter().zip(derived) {
      vars.push((*name, value.as_path()));
    }
    vars
  }
}

//! Tests for command-line handling

use crate::helpers::create_release_tag;
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn test_help_exits_zero() -> Result<()> {
  let dir = TempDir::new()?;
  let output = create_release_tag(dir.path(), &["--help"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert_eq!(output.status.code(), Some(0));
  assert!(stdout.contains("TAG_WCPATH RELEASE_WCPATH"));
  for flag in ["--no-commit", "--old-version", "--noop"] {
    assert!(stdout.contains(flag), "help should list {}", flag);
  }

  Ok(())
}

#[test]
fn test_short_help_exits_zero() -> Result<()> {
  let dir = TempDir::new()?;
  let output = create_release_tag(dir.path(), &["-h"])?;
  assert_eq!(output.status.code(), Some(0));
  Ok(())
}

#[test]
fn test_unknown_flag_exits_one() -> Result<()> {
  let dir = TempDir::new()?;
  let output = create_release_tag(dir.path(), &["--frobnicate", "tag", "rel"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains("ERROR --> unexpected argument '--frobnicate'"));
  assert!(stderr.contains("Usage: create_release_tag [OPTIONS] TAG_WCPATH RELEASE_WCPATH"));
  assert!(!stderr.contains("error: "));
  assert!(!dir.path().join("rel").exists());

  Ok(())
}

#[test]
fn test_missing_release_path_exits_one() -> Result<()> {
  let dir = TempDir::new()?;
  let output = create_release_tag(dir.path(), &["tag"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains("ERROR: Must specify existing TAG working copy directory"));

  Ok(())
}

#[test]
fn test_no_arguments_exits_one() -> Result<()> {
  let dir = TempDir::new()?;
  let output = create_release_tag(dir.path(), &[])?;
  assert_eq!(output.status.code(), Some(1));
  Ok(())
}

#[test]
fn test_explicit_missing_config_exits_one() -> Result<()> {
  let dir = TempDir::new()?;
  let output = create_release_tag(dir.path(), &["--config", "nope.toml", "tag", "rel"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains("Config file not found"));

  Ok(())
}

#[test]
fn test_release_path_exists_exits_one() -> Result<()> {
  let dir = TempDir::new()?;
  std::fs::create_dir(dir.path().join("REL-2.1"))?;

  let output = create_release_tag(dir.path(), &["tag", "REL-2.1"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains("ERROR: REL-2.1 already exists!"));

  Ok(())
}

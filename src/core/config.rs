use crate::core::error::{ConfigError, ReleaseError, ReleaseResult, ResultExt};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Tool configuration for create_release_tag
/// Searched in order: create_release_tag.toml, .create_release_tag.toml, .config/create_release_tag.toml
///
/// Every key is optional; a missing file means the CRTM defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseConfig {
  #[serde(default)]
  pub tools: ToolsConfig,
  #[serde(default)]
  pub tag: TagConfig,
}

/// External programs the run shells out to
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
  /// Subversion client (default: "svn")
  #[serde(default = "default_svn")]
  pub svn: String,

  /// Build step that materializes links in the source tree, run in `<tag>/src`
  /// (default: ["make", "create_links"])
  #[serde(default = "default_build_command")]
  pub build_command: Vec<String>,
}

fn default_svn() -> String {
  "svn".to_string()
}

fn default_build_command() -> Vec<String> {
  vec!["make".to_string(), "create_links".to_string()]
}

impl Default for ToolsConfig {
  fn default() -> Self {
    Self {
      svn: default_svn(),
      build_command: default_build_command(),
    }
  }
}

/// What a tag working copy is expected to contain
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagConfig {
  /// File whose presence identifies a CRTM root (default: "Set_CRTM_Environment.sh")
  #[serde(default = "default_marker_file")]
  pub marker_file: String,

  /// Manifest inside `src/Build` (default: "inventory.txt")
  #[serde(default = "default_inventory_file")]
  pub inventory_file: String,
}

fn default_marker_file() -> String {
  "Set_CRTM_Environment.sh".to_string()
}

fn default_inventory_file() -> String {
  "inventory.txt".to_string()
}

impl Default for TagConfig {
  fn default() -> Self {
    Self {
      marker_file: default_marker_file(),
      inventory_file: default_inventory_file(),
    }
  }
}

impl ReleaseConfig {
  /// Find config file in standard locations
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("create_release_tag.toml"),
      path.join(".create_release_tag.toml"),
      path.join(".config").join("create_release_tag.toml"),
    ];

    candidates.into_iter().find(|p| p.is_file())
  }

  /// Load the config
  ///
  /// An explicit path must exist. Without one, the standard locations under
  /// `search_dir` are tried and the defaults are used when none exists.
  pub fn load(explicit: Option<&Path>, search_dir: &Path) -> ReleaseResult<Self> {
    let config_path = match explicit {
      Some(path) => {
        if !path.is_file() {
          return Err(ReleaseError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
          }));
        }
        path.to_path_buf()
      }
      None => match Self::find_config_path(search_dir) {
        Some(path) => path,
        None => {
          log::debug!("No config file found in {}, using defaults", search_dir.display());
          return Ok(Self::default());
        }
      },
    };

    log::debug!("Loading config from {}", config_path.display());
    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: ReleaseConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    config
      .validate()
      .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;

    Ok(config)
  }

  /// Validate configuration values
  pub fn validate(&self) -> ReleaseResult<()> {
    if self.tools.svn.trim().is_empty() {
      return Err(invalid("tools.svn", "must not be empty"));
    }
    match self.tools.build_command.first() {
      Some(program) if !program.trim().is_empty() => {}
      _ => return Err(invalid("tools.build_command", "must name a program")),
    }
    validate_file_name("tag.marker_file", &self.tag.marker_file)?;
    validate_file_name("tag.inventory_file", &self.tag.inventory_file)?;
    Ok(())
  }
}

fn validate_file_name(field: &str, value: &str) -> ReleaseResult<()> {
  if value.trim().is_empty() {
    return Err(invalid(field, "must not be empty"));
  }
  if value.contains('/') || value.contains('\\') {
    return Err(invalid(field, "must be a file name, not a path"));
  }
  Ok(())
}

fn invalid(field: &str, reason: &str) -> ReleaseError {
  ReleaseError::Config(ConfigError::InvalidValue {
    field: field.to_string(),
    reason: reason.to_string(),
  })
}

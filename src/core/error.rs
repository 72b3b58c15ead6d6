//! Error types for create_release_tag with contextual messages and exit codes
//!
//! Every failure in a run funnels into [`ReleaseError`]. The kind tag tells the
//! entry point how the run failed (bad invocation, unmet precondition, failed
//! version-control operation) and each kind can carry a help hint for the user.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for create_release_tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// Release created (and committed, if enabled)
  Success = 0,
  /// Any usage, precondition, or operation failure
  Failure = 1,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for create_release_tag
#[derive(Debug)]
pub enum ReleaseError {
  /// Bad or missing command-line arguments
  Usage { message: String },

  /// Release path exists, tag is not a working copy, marker missing, ...
  Precondition(PreconditionError),

  /// A version-control operation failed
  Operation(SvnError),

  /// Tool configuration errors
  Config(ConfigError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl ReleaseError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create a usage error
  pub fn usage(msg: impl Into<String>) -> Self {
    ReleaseError::Usage { message: msg.into() }
  }

  /// Add context to an existing error
  ///
  /// Structured errors are folded into a `Message` so the context is never lost.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ReleaseError::Message { message, context, help } => ReleaseError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      other => {
        let help = other.help_message();
        ReleaseError::Message {
          message: ctx_str,
          context: Some(other.to_string()),
          help,
        }
      }
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReleaseError::Usage { .. }
      | ReleaseError::Precondition(_)
      | ReleaseError::Operation(_)
      | ReleaseError::Config(_)
      | ReleaseError::Io(_)
      | ReleaseError::Message { .. } => ExitCode::Failure,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::Usage { .. } => Some("Run `create_release_tag --help` for usage.".to_string()),
      ReleaseError::Precondition(e) => e.help_message(),
      ReleaseError::Operation(e) => e.help_message(),
      ReleaseError::Config(e) => e.help_message(),
      ReleaseError::Message { help, .. } => help.clone(),
      ReleaseError::Io(_) => None,
    }
  }
}

impl fmt::Display for ReleaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseError::Usage { message } => write!(f, "{}", message),
      ReleaseError::Precondition(e) => write!(f, "{}", e),
      ReleaseError::Operation(e) => write!(f, "{}", e),
      ReleaseError::Config(e) => write!(f, "{}", e),
      ReleaseError::Io(e) => write!(f, "I/O error: {}", e),
      ReleaseError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ReleaseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReleaseError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ReleaseError {
  fn from(err: io::Error) -> Self {
    ReleaseError::Io(err)
  }
}

impl From<PreconditionError> for ReleaseError {
  fn from(err: PreconditionError) -> Self {
    ReleaseError::Precondition(err)
  }
}

impl From<SvnError> for ReleaseError {
  fn from(err: SvnError) -> Self {
    ReleaseError::Operation(err)
  }
}

impl From<ConfigError> for ReleaseError {
  fn from(err: ConfigError) -> Self {
    ReleaseError::Config(err)
  }
}

impl From<toml_edit::de::Error> for ReleaseError {
  fn from(err: toml_edit::de::Error) -> Self {
    ReleaseError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<log::SetLoggerError> for ReleaseError {
  fn from(err: log::SetLoggerError) -> Self {
    ReleaseError::message(format!("Failed to initialize logger: {}", err))
  }
}

/// Conditions that must hold before (or while) the release tree is built
#[derive(Debug)]
pub enum PreconditionError {
  /// RELEASE_WCPATH is already a directory
  ReleaseExists { path: PathBuf },

  /// TAG_WCPATH is not a Subversion working copy
  NotWorkingCopy { path: PathBuf },

  /// TAG_WCPATH does not carry the project-root marker file
  NotProjectRoot { path: PathBuf, marker: String },

  /// The inventory manifest could not be read
  InventoryMissing { path: PathBuf },

  /// The inventory manifest has a malformed line
  InventoryMalformed { path: PathBuf, line: usize, reason: String },
}

impl PreconditionError {
  fn help_message(&self) -> Option<String> {
    match self {
      PreconditionError::ReleaseExists { .. } => {
        Some("Remove the existing directory or choose a different RELEASE_WCPATH.".to_string())
      }
      PreconditionError::NotWorkingCopy { .. } => {
        Some("Check out the tag first, e.g. `svn checkout <repo>/tags/<tag> <TAG_WCPATH>`.".to_string())
      }
      PreconditionError::InventoryMissing { .. } => {
        Some("The build step should generate the inventory; check that `make create_links` succeeds.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for PreconditionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PreconditionError::ReleaseExists { path } => write!(f, "{} already exists!", path.display()),
      PreconditionError::NotWorkingCopy { path } => {
        write!(f, "{} is not a Subversion working copy!", path.display())
      }
      PreconditionError::NotProjectRoot { path, marker } => {
        write!(f, "{} is not a CRTM root directory! (missing {})", path.display(), marker)
      }
      PreconditionError::InventoryMissing { path } => {
        write!(f, "Inventory file {} could not be read", path.display())
      }
      PreconditionError::InventoryMalformed { path, line, reason } => {
        write!(f, "{}:{}: malformed inventory entry: {}", path.display(), line, reason)
      }
    }
  }
}

/// Subversion operation errors
#[derive(Debug)]
pub enum SvnError {
  /// svn ran and exited unsuccessfully
  CommandFailed { command: String, stderr: String },

  /// svn could not be started at all
  Spawn { program: String, reason: String },
}

impl SvnError {
  fn help_message(&self) -> Option<String> {
    match self {
      SvnError::Spawn { program, .. } => Some(format!(
        "Make sure `{}` is installed and on PATH, or set [tools] svn in the config file.",
        program
      )),
      SvnError::CommandFailed { stderr, .. } => {
        if stderr.contains("E155007") || stderr.contains("is not a working copy") {
          Some("The parent of RELEASE_WCPATH must itself be a Subversion working copy.".to_string())
        } else {
          None
        }
      }
    }
  }
}

impl fmt::Display for SvnError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SvnError::CommandFailed { command, stderr } => {
        write!(f, "Subversion command failed: {}", command)?;
        if !stderr.trim().is_empty() {
          write!(f, "\n{}", stderr.trim_end())?;
        }
        Ok(())
      }
      SvnError::Spawn { program, reason } => write!(f, "Failed to run {}: {}", program, reason),
    }
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// An explicitly requested config file does not exist
  NotFound { path: PathBuf },

  /// A key holds an unusable value
  InvalidValue { field: String, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Omit --config to use the defaults, or point it at an existing TOML file.".to_string())
      }
      ConfigError::InvalidValue { .. } => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => write!(f, "Config file not found: {}", path.display()),
      ConfigError::InvalidValue { field, reason } => write!(f, "Invalid config value for {}: {}", field, reason),
    }
  }
}

/// Result type alias for create_release_tag
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ReleaseError>,
{
  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Print an error to stderr with the `ERROR:` prefix and help text
pub fn print_error(error: &ReleaseError) {
  eprintln!("\nERROR: {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("help: {}\n", help);
  }
}

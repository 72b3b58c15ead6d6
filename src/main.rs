mod commands;
mod core;
mod utils;

use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use crate::core::config::ReleaseConfig;
use crate::core::error::{ExitCode, ReleaseError, ReleaseResult, print_error};
use crate::core::run_config::RunConfig;
use std::path::PathBuf;

/// Create a release of the CRTM from a tag working copy
#[derive(Parser, Debug)]
#[command(name = "create_release_tag")]
#[command(version, about, long_about = None)]
#[command(override_usage = "create_release_tag [OPTIONS] TAG_WCPATH RELEASE_WCPATH")]
#[command(styles = get_styles())]
struct Cli {
  /// Create release, but do not commit to the repository
  #[arg(short = 'n', long)]
  no_commit: bool,

  /// Create release using v2.0.x fixfile directory structure
  #[arg(short = 'o', long)]
  old_version: bool,

  /// Output the commands to be used, but do nothing
  #[arg(short = 'x', long)]
  noop: bool,

  /// Show every svn command and the build step as they run
  #[arg(short, long)]
  verbose: bool,

  /// Tool configuration file (default: create_release_tag.toml in the current directory, if present)
  #[arg(long, value_name = "PATH")]
  config: Option<PathBuf>,

  /// Existing tag working copy (TAG_WCPATH), then the release to create (RELEASE_WCPATH)
  #[arg(value_name = "WCPATH")]
  paths: Vec<PathBuf>,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn initialize_logger(verbose: bool) -> ReleaseResult<()> {
  let filter = if verbose {
    simplelog::LevelFilter::Debug
  } else {
    simplelog::LevelFilter::Info
  };

  let config = simplelog::ConfigBuilder::new()
    .add_filter_allow_str("create_release_tag")
    .build();

  simplelog::TermLogger::init(
    filter,
    config,
    simplelog::TerminalMode::Mixed,
    simplelog::ColorChoice::Auto,
  )?;

  Ok(())
}

fn main() {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e) => handle_parse_error(e),
  };

  if let Err(err) = run(cli) {
    handle_error(err);
  }
}

fn run(cli: Cli) -> ReleaseResult<()> {
  initialize_logger(cli.verbose)?;

  let run = RunConfig::from_args(cli.no_commit, cli.old_version, cli.noop, cli.paths)?;
  let cwd = std::env::current_dir()?;
  let config = ReleaseConfig::load(cli.config.as_deref(), &cwd)?;

  commands::run_create_release(&run, &config, &cwd)
}

/// Help and version exit cleanly; every other parse failure is a usage error
fn handle_parse_error(err: clap::Error) -> ! {
  if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
    let _ = err.print();
    std::process::exit(ExitCode::Success.as_i32());
  }

  eprintln!("ERROR --> {}\n", parse_error_message(&err));
  eprintln!("{}", Cli::command().render_usage());
  std::process::exit(ExitCode::Failure.as_i32());
}

/// First line of clap's rendering, without its `error: ` prefix
fn parse_error_message(err: &clap::Error) -> String {
  let rendered = err.render().to_string();
  let first = rendered.lines().next().unwrap_or_default();
  first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}

fn handle_error(err: ReleaseError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}

//! Command-line launcher: parses arguments, loads settings, installs
//! logging and hands the chosen command to [`commands::execute`].

pub mod cli;
pub mod commands;
pub mod logging;

use anyhow::Context;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::settings::{load_settings_from, settings_path, Settings};
use crate::app::Session;
use crate::fs_op::path::resolve_path;
use cli::{Cli, Command};
use commands::{DialoguerPrompter, RunContext};

/// Run the launcher for already-parsed arguments.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().or_else(settings_path);
    let settings = match &config_path {
        Some(p) => load_settings_from(p)?,
        None => Settings::default(),
    };
    let _guard = logging::init(&settings)?;

    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let start = start_dir(cli.dir.as_deref(), &settings, &cwd)?;
    tracing::debug!(start = %start.display(), "starting session");
    let mut session = Session::new(start);

    let command = cli.command.unwrap_or(Command::Ls { path: None, json: false });
    let ctx = RunContext { settings, config_path };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(&mut session, &ctx, command, &mut DialoguerPrompter, &mut out)
}

/// `--dir` wins over the configured start directory, which wins over the
/// process working directory. Relative paths resolve against `cwd`.
fn start_dir(flag: Option<&str>, settings: &Settings, cwd: &Path) -> anyhow::Result<PathBuf> {
    if let Some(d) = flag {
        return Ok(resolve_path(d, cwd)?);
    }
    match &settings.start_dir {
        Some(d) => Ok(resolve_path(&d.to_string_lossy(), cwd)?),
        None => Ok(cwd.to_path_buf()),
    }
}

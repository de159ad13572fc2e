//! Command dispatch: maps each CLI subcommand onto a `Session` call and
//! renders the outcome.

use anyhow::{bail, Context};
use std::io::Write;
use std::path::PathBuf;

use crate::app::places::places;
use crate::app::settings::{save_settings_to, Settings};
use crate::app::Session;
use crate::fs_op::error::FsOpError;
use crate::fs_op::path::resolve_path;
use crate::fs_op::remove::{tree_summary, TreeSummary};
use crate::runner::cli::Command;
use crate::ui::{format_file_stats, format_size, render_listing};

/// Asks the user yes/no questions.
pub trait Prompter {
    fn confirm(&mut self, message: &str) -> anyhow::Result<bool>;
}

/// Interactive terminal prompt backed by `dialoguer`.
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn confirm(&mut self, message: &str) -> anyhow::Result<bool> {
        let answer = dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}

/// Settings and paths a command may need besides the session.
pub struct RunContext {
    pub settings: Settings,
    /// Where `config --write-defaults` writes to.
    pub config_path: Option<PathBuf>,
}

/// Run one command against `session`, writing user-facing output to `out`.
pub fn execute<W: Write>(
    session: &mut Session,
    ctx: &RunContext,
    command: Command,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Ls { path, json } => {
            if let Some(p) = path {
                let target = resolve_path(&p, session.cwd())?;
                session.change_dir(target)?;
            } else {
                session.list()?;
            }
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(session.entries())?)?;
            } else {
                writeln!(out, "{}", session.cwd().display())?;
                write!(out, "{}", render_listing(session.entries(), &ctx.settings.date_format))?;
            }
        }
        Command::Info { name } => {
            session.list()?;
            let entry = session
                .entry(&name)
                .ok_or_else(|| FsOpError::NotFound(session.cwd().join(&name)))?;
            for line in format_file_stats(session.cwd(), entry, &ctx.settings.date_format) {
                writeln!(out, "{}", line)?;
            }
        }
        Command::Touch { name } => {
            session.new_file(&name)?;
            writeln!(out, "created file {}", name)?;
        }
        Command::Mkdir { name } => {
            session.new_dir(&name)?;
            writeln!(out, "created directory {}", name)?;
        }
        Command::Rm { name, recursive, yes } => {
            remove(session, ctx, &name, recursive, yes, prompter, out)?;
        }
        Command::Mv { old, new } => {
            session.rename(&old, &new)?;
            writeln!(out, "renamed {} -> {}", old, new)?;
        }
        Command::Places => {
            for place in places() {
                writeln!(out, "{:<10} {}", place.label, place.path.display())?;
            }
        }
        Command::Config { write_defaults } => {
            if write_defaults {
                let path = ctx
                    .config_path
                    .as_deref()
                    .context("could not determine a settings file location")?;
                save_settings_to(path, &Settings::default())?;
                writeln!(out, "wrote default settings to {}", path.display())?;
            } else {
                write!(out, "{}", toml::to_string_pretty(&ctx.settings)?)?;
            }
        }
    }
    Ok(())
}

// Non-recursive first; a populated directory only goes away with
// --recursive and a confirmation (or --yes).
fn remove<W: Write>(
    session: &mut Session,
    ctx: &RunContext,
    name: &str,
    recursive: bool,
    yes: bool,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> anyhow::Result<()> {
    match session.delete(name) {
        Ok(()) => {
            writeln!(out, "removed {}", name)?;
            return Ok(());
        }
        Err(FsOpError::NotEmpty(_)) => {}
        Err(e) => return Err(e.into()),
    }

    let summary = tree_summary(session.cwd(), name)?;
    if !recursive {
        bail!(
            "directory `{}` contains {}; pass --recursive to delete it with its contents",
            name,
            describe(&summary)
        );
    }
    if ctx.settings.confirm_delete && !yes {
        let question = format!(
            "Folder '{}' contains {}. Delete it with everything inside?",
            name,
            describe(&summary)
        );
        if !prompter.confirm(&question)? {
            writeln!(out, "kept {}", name)?;
            return Ok(());
        }
    }
    session.delete_tree(name)?;
    writeln!(out, "removed {} ({})", name, describe(&summary))?;
    Ok(())
}

fn describe(s: &TreeSummary) -> String {
    let plural = |n: u64, one: &str, many: &str| format!("{} {}", n, if n == 1 { one } else { many });
    format!(
        "{}, {}, {}",
        plural(s.files, "file", "files"),
        plural(s.dirs, "directory", "directories"),
        format_size(s.bytes)
    )
}

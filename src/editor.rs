//! Editor handoff module
//!
//! Terminal delegation: when `EDITOR` is set, the tool's last action
//! is to hand the new file to the editor and never run again. The
//! path is appended to the command line without quoting, matching
//! the generator's existing tooling.

use std::env;
use std::path::Path;
use std::process::Command;

use crate::error::Result;

/// Name of the environment variable holding the editor command
pub const EDITOR_ENV: &str = "EDITOR";

/// Hand the file over to the configured editor, if any.
///
/// Returns `Ok(())` without side effects when `EDITOR` is unset or
/// empty. Otherwise runs `{editor} {path}` through the shell as the
/// process's final action.
pub fn maybe_handoff(path: &Path) -> Result<()> {
    match env::var(EDITOR_ENV) {
        Ok(editor) if !editor.is_empty() => handoff(&editor, path),
        _ => Ok(()),
    }
}

/// Replace the current process image with the editor invocation.
/// Only returns on launch failure.
#[cfg(unix)]
fn handoff(editor: &str, path: &Path) -> Result<()> {
    use std::os::unix::process::CommandExt;

    let err = Command::new("sh")
        .arg("-c")
        .arg(format!("{} {}", editor, path.display()))
        .exec();
    Err(err.into())
}

/// No process-image replacement here: spawn the editor, wait, and
/// exit with its status code. The caller process stays alive while
/// the editor runs, unlike the Unix variant.
#[cfg(not(unix))]
fn handoff(editor: &str, path: &Path) -> Result<()> {
    let status = Command::new("cmd")
        .arg("/C")
        .arg(format!("{} {}", editor, path.display()))
        .status()?;
    std::process::exit(status.code().unwrap_or(1));
}

//! tsgo subprocess invocation

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Combined output ceiling; a large project can emit megabytes of diagnostics
const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Run `tsgo --noEmit` in `workspace` and return its text output.
///
/// tsgo exits non-zero when type errors exist while still printing the
/// diagnostics, so the exit status is not the success signal here. A run only
/// fails when the process can't start, when it exits abnormally with no
/// output on either stream, or when output exceeds the ceiling.
pub fn run_checker(workspace: &Path) -> Result<String> {
    run_checker_program("tsgo", workspace)
}

fn run_checker_program(program: &str, workspace: &Path) -> Result<String> {
    let output = Command::new(program)
        .arg("--noEmit")
        .current_dir(workspace)
        .output()
        .with_context(|| format!("Failed to run {} in {}", program, workspace.display()))?;

    if output.stdout.len() + output.stderr.len() > MAX_OUTPUT_BYTES {
        bail!(
            "{} output exceeded {} bytes, refusing to parse",
            program,
            MAX_OUTPUT_BYTES
        );
    }

    if !output.status.success() && output.stdout.is_empty() && output.stderr.is_empty() {
        bail!("{} exited with {} and produced no output", program, output.status);
    }

    Ok(combine_streams(&output.stdout, &output.stderr))
}

/// Prefer stdout when non-empty, else stderr
fn combine_streams(stdout: &[u8], stderr: &[u8]) -> String {
    if !stdout.is_empty() {
        String::from_utf8_lossy(stdout).into_owned()
    } else {
        String::from_utf8_lossy(stderr).into_owned()
    }
}

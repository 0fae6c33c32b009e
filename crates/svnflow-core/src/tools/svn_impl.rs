//! Standard svn adapter implementation.
//!
//! This module provides a concrete implementation of the `SvnAdapter` trait
//! using `std::process::Command` to execute svn commands.

use crate::config::SvnConfig;
use crate::error::{FlowError, Result};
use crate::tools::svn::SvnAdapter;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Standard svn adapter using the `svn` command-line client.
///
/// Every call blocks until the client exits.
#[derive(Debug)]
pub struct StdSvnAdapter {
    root: PathBuf,
    binary: String,
    non_interactive: bool,
}

impl StdSvnAdapter {
    /// Creates an adapter bound to the working copy at `root`.
    pub fn new(root: PathBuf, config: &SvnConfig) -> Self {
        Self {
            root,
            binary: config.binary.clone(),
            non_interactive: config.non_interactive,
        }
    }

    fn command(&self, args: &[OsString], cwd: Option<&Path>) -> Command {
        let mut cmd = Command::new(&self.binary);
        if self.non_interactive {
            cmd.arg("--non-interactive");
        }
        cmd.args(args);

        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Helper to run an svn command and capture its stdout.
    ///
    /// `cwd` applies to the child process only; this process's working
    /// directory is never touched.
    fn run_svn(&self, args: &[OsString], cwd: Option<&Path>) -> Result<String> {
        let rendered = render_args(args);
        tracing::debug!(cwd = ?cwd, "svn {}", rendered);

        let output = self
            .command(args, cwd)
            .output()
            .map_err(|e| FlowError::SvnCommandFailed(format!("failed to execute svn: {}", e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if !stdout.trim().is_empty() {
            tracing::debug!("{}", stdout.trim_end());
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FlowError::SvnCommandFailed(format!(
                "svn {} failed ({}): {}",
                rendered,
                output.status,
                stderr.trim()
            )));
        }

        Ok(stdout)
    }
}

impl SvnAdapter for StdSvnAdapter {
    fn root(&self) -> &Path {
        &self.root
    }

    fn create_directory(&self, path: &Path) -> Result<()> {
        self.run_svn(&["mkdir".into(), self.resolve(path).into()], None)?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run_svn(
            &[
                "commit".into(),
                "-m".into(),
                message.into(),
                self.root.clone().into(),
            ],
            None,
        )?;
        Ok(())
    }

    fn branch(&self, source: &Path, target: &Path) -> Result<()> {
        self.run_svn(
            &[
                "copy".into(),
                self.resolve(source).into(),
                self.resolve(target).into(),
            ],
            None,
        )?;
        Ok(())
    }

    fn merge(&self, source: &Path, dest: &Path, reintegrate: bool) -> Result<()> {
        let mut args: Vec<OsString> = vec!["merge".into()];
        if reintegrate {
            args.push("--reintegrate".into());
        }
        args.push(self.resolve(source).into());

        self.run_svn(&args, Some(&self.resolve(dest)))?;
        Ok(())
    }

    fn update_all(&self) -> Result<()> {
        self.run_svn(&["update".into(), self.root.clone().into()], None)?;
        Ok(())
    }

    fn list_entries(&self, path: &Path) -> Result<Vec<String>> {
        let output = self.run_svn(&["list".into(), self.resolve(path).into()], None)?;
        Ok(parse_list_output(&output))
    }

    fn is_tracked(&self, path: &Path) -> bool {
        self.command(&["info".into(), self.resolve(path).into()], None)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

/// Splits `svn list` output into entries, dropping the trailing empty one.
fn parse_list_output(output: &str) -> Vec<String> {
    let mut entries: Vec<String> = output
        .split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();

    if entries.last().is_some_and(|last| last.is_empty()) {
        entries.pop();
    }
    entries
}

fn render_args(args: &[OsString]) -> String {
    args.iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

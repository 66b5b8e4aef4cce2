//! Blocking launch of external tool processes.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{HubError, Result};
use crate::paths::HubPaths;

/// What happened to a launched tool process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// Exit code, `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// How long the tool held the terminal.
    pub duration: Duration,
}

impl LaunchOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run a tool's launcher script and block until it exits.
///
/// The child inherits stdio so the tool owns the terminal for as long as it
/// runs; no timeout is applied and there is no in-flight cancellation — the
/// user exits the tool itself to return to the console. A missing or
/// unstartable script is a [`HubError::LaunchFailed`], which callers surface
/// as an inline warning.
pub fn launch_tool(paths: &HubPaths, tool: &str) -> Result<LaunchOutcome> {
    let script = paths.launcher_script(tool);
    if !script.is_file() {
        return Err(HubError::LaunchFailed {
            tool: tool.to_string(),
            message: format!("launcher script not found: {}", script.display()),
        });
    }

    tracing::debug!(tool, script = %script.display(), "launching tool");

    let start = Instant::now();
    let status = Command::new(&script)
        .current_dir(paths.scripts_dir())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| HubError::LaunchFailed {
            tool: tool.to_string(),
            message: e.to_string(),
        })?;

    Ok(LaunchOutcome {
        exit_code: status.code(),
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn hub_with_launcher(tool: &str, body: &str) -> (TempDir, HubPaths) {
        let dir = TempDir::new().unwrap();
        let paths = HubPaths::new(dir.path());
        fs::create_dir_all(paths.scripts_dir()).unwrap();
        let script = paths.launcher_script(tool);
        fs::write(&script, body).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        }
        (dir, paths)
    }

    #[test]
    fn missing_launcher_is_launch_failed() {
        let dir = TempDir::new().unwrap();
        let paths = HubPaths::new(dir.path());
        let err = launch_tool(&paths, "claude").unwrap_err();
        assert!(matches!(err, HubError::LaunchFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn successful_launch_reports_exit_zero() {
        let (_dir, paths) = hub_with_launcher("echoer", "#!/bin/sh\nexit 0\n");
        let outcome = launch_tool(&paths, "echoer").unwrap();
        assert!(outcome.success());
        assert_eq!(outcome.exit_code, Some(0));
    }

    #[cfg(unix)]
    #[test]
    fn failing_launch_reports_exit_code() {
        let (_dir, paths) = hub_with_launcher("broken", "#!/bin/sh\nexit 3\n");
        let outcome = launch_tool(&paths, "broken").unwrap();
        assert!(!outcome.success());
        assert_eq!(outcome.exit_code, Some(3));
    }
}

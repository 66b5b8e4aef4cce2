//! Copying text to the system clipboard.
//!
//! Tries xclip, then wl-copy (Wayland), then pbcopy (macOS). A host with
//! none of them is a degraded outcome the caller surfaces as a warning, not
//! an error.

use std::io::Write;
use std::process::{Command, Stdio};

const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("wl-copy", &[]),
    ("pbcopy", &[]),
];

/// Copy text via the first clipboard tool that accepts it. Returns the tool
/// name used, or `None` when no tool is available.
pub fn copy_to_clipboard(text: &str) -> Option<&'static str> {
    for (program, args) in CLIPBOARD_TOOLS {
        if pipe_to(program, args, text) {
            tracing::debug!(program, "copied to clipboard");
            return Some(program);
        }
    }
    None
}

/// Pipe text into a command's stdin and wait for it to succeed.
fn pipe_to(program: &str, args: &[&str], text: &str) -> bool {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    let Ok(mut child) = child else {
        return false;
    };

    if let Some(stdin) = child.stdin.take() {
        let mut stdin = stdin;
        if stdin.write_all(text.as_bytes()).is_err() {
            let _ = child.kill();
            let _ = child.wait();
            return false;
        }
        // Dropping stdin closes the pipe so the tool can exit.
    }

    child.wait().map(|status| status.success()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn pipe_to_succeeds_with_a_consuming_command() {
        assert!(pipe_to("cat", &[], "positive prompt text"));
    }

    #[test]
    fn pipe_to_fails_for_missing_binary() {
        assert!(!pipe_to("definitely-not-a-clipboard-tool-xyz", &[], "text"));
    }

    #[cfg(unix)]
    #[test]
    fn pipe_to_reports_nonzero_exit() {
        assert!(!pipe_to("false", &[], "text"));
    }
}

//! Copy-to-clipboard with tool fallback.
//!
//! Tries each known clipboard tool in order (Wayland first, then X11, then
//! macOS) and reports plain success/failure. Callers get a boolean and a
//! log line, never an error: clipboard loss is always survivable.

use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Clipboard tools in preference order, with their arguments.
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// Copy text to the system clipboard.
///
/// Returns `true` on the first tool that accepts the text. Returns `false`
/// when no tool is available or all of them fail.
pub fn copy_to_clipboard(text: &str) -> bool {
    for (tool, args) in CLIPBOARD_TOOLS {
        match try_tool(tool, args, text) {
            Ok(true) => {
                debug!(tool, "Copied to clipboard");
                return true;
            }
            Ok(false) => {
                debug!(tool, "Clipboard tool exited non-zero, trying next");
            }
            Err(_) => {
                // Tool not installed; expected on most systems.
            }
        }
    }

    warn!("No clipboard tool available");
    false
}

fn try_tool(tool: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(stdin) = child.stdin.as_mut() {
        // A dead pipe means the tool bailed; the wait below reports it.
        let _ = stdin.write_all(text.as_bytes());
    }

    let status = child.wait()?;
    Ok(status.success())
}

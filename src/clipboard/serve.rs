//! Background clipboard server for Linux, where the selection lives only as
//! long as the process that owns it.
//!
//! The parent re-executes itself as `here _serve-clipboard` and writes the text
//! to the child's stdin, UTF-8, terminated by EOF. The child takes ownership of
//! the CLIPBOARD selection and blocks until another application replaces it.

use std::io::Read;

use arboard::Clipboard;

#[cfg(target_os = "linux")]
use arboard::{LinuxClipboardKind, SetExtLinux};

use crate::errors::{AppError, Result};

/// Hidden first argument that switches the binary into server mode.
pub const SERVE_ARG: &str = "_serve-clipboard";

pub fn run() -> Result<()> {
    let mut text = String::new();
    std::io::stdin()
        .lock()
        .read_to_string(&mut text)
        .map_err(|e| AppError::Clipboard(format!("stdin read: {e}")))?;

    let mut cb = Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;

    #[cfg(target_os = "linux")]
    cb.set()
        .wait()
        .clipboard(LinuxClipboardKind::Clipboard)
        .text(text)
        .map_err(|e| AppError::Clipboard(e.to_string()))?;

    #[cfg(not(target_os = "linux"))]
    cb.set()
        .text(text)
        .map_err(|e| AppError::Clipboard(e.to_string()))?;

    Ok(())
}

/// Start a detached server holding `text` and return once it has the text.
#[cfg(target_os = "linux")]
#[allow(clippy::zombie_processes)]
pub fn spawn(text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let exe = std::env::current_exe()?;
    let mut child = Command::new(exe)
        .arg(SERVE_ARG)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| AppError::Clipboard(format!("failed to start clipboard server: {e}")))?;
    log::debug!("clipboard server started, pid {}", child.id());

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| AppError::Clipboard("clipboard server has no stdin".to_owned()))?;
    stdin
        .write_all(text.as_bytes())
        .map_err(|e| AppError::Clipboard(format!("failed to hand text to clipboard server: {e}")))?;
    // Dropping stdin sends EOF; the child is left running on purpose.
    drop(stdin);
    Ok(())
}

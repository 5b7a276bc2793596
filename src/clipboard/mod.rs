pub mod serve;

use arboard::Clipboard;

use crate::errors::{AppError, Result};

/// Destination for the rendered path.
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        write_clipboard_text(text)
    }
}

/// Set the clipboard text so that it outlives this process.
///
/// X11 and Wayland selections disappear with their owner, so on Linux the text
/// is handed to a detached `_serve-clipboard` child that keeps serving it.
#[cfg(target_os = "linux")]
pub fn write_clipboard_text(text: &str) -> Result<()> {
    set_then_serve(text, set_text_directly, serve::spawn)
}

/// The detached child reports nothing back, so the selection is set here first:
/// a failing backend is an error of this process, and the child only takes over.
#[cfg(target_os = "linux")]
fn set_then_serve(
    text: &str,
    set: impl FnOnce(&str) -> Result<()>,
    serve: impl FnOnce(&str) -> Result<()>,
) -> Result<()> {
    set(text)?;
    serve(text)
}

#[cfg(target_os = "linux")]
fn set_text_directly(text: &str) -> Result<()> {
    let mut cb = Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    cb.set_text(text.to_owned())
        .map_err(|e| AppError::Clipboard(e.to_string()))
}

#[cfg(not(target_os = "linux"))]
pub fn write_clipboard_text(text: &str) -> Result<()> {
    let mut cb = Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    cb.set_text(text.to_owned())
        .map_err(|e| AppError::Clipboard(e.to_string()))
}

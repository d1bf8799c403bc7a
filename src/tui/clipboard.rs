//! Clipboard helper for the copy affordance
//!
//! Uses `arboard` for cross-platform support. A fresh clipboard handle is
//! created per write so no resource is held between copies.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Write text to the system clipboard.
///
/// Fails on headless systems (no display server) or when the platform
/// denies access; callers surface that on the card's status line only.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

use anyhow::{anyhow, Context, Result};
use std::sync::Mutex;

#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<()>;
}

/// System clipboard. The handle is kept alive so X11/Wayland selections
/// outlive the copy call.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| anyhow!("Clipboard lock poisoned"))?;
        if guard.is_none() {
            *guard = Some(arboard::Clipboard::new().context("Clipboard not available")?);
        }
        let clipboard = guard.as_mut().ok_or_else(|| anyhow!("Clipboard not available"))?;
        clipboard
            .set_text(text.to_string())
            .context("Clipboard error")?;
        Ok(())
    }
}

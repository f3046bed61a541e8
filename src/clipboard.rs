//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Anything that can receive a password as text.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by the desktop session, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext> {
        if self.ctx.is_none() {
            let ctx =
                ClipboardContext::new().map_err(|e| Error::ClipboardUnavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| Error::ClipboardUnavailable("context not initialised".into()))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| Error::ClipboardRejected(e.to_string()))?;

        // Some providers keep a private copy after a read; wipe ours.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        debug!("clipboard write of {} chars completed", text.len());
        Ok(())
    }
}

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;

use curio_core::ports::StorefrontViewPort;
use curio_core::{Item, SalesStatus};

use super::{render_catalog, render_status};

/// Line-oriented storefront view.
///
/// Remembers the last sales status so the catalog can show which items are
/// purchasable.
pub struct TerminalView<W> {
    out: Mutex<W>,
    window: String,
    sales_open: AtomicBool,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W, window: impl Into<String>) -> Self {
        Self {
            out: Mutex::new(out),
            window: window.into(),
            sales_open: AtomicBool::new(false),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_block(&self, text: &str) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("terminal writer poisoned"))?;
        out.write_all(text.as_bytes())
            .and_then(|()| out.flush())
            .context("write to terminal failed")
    }
}

#[async_trait]
impl<W: Write + Send> StorefrontViewPort for TerminalView<W> {
    async fn on_availability_tick(&self, status: &SalesStatus) -> Result<()> {
        let was_open = self.sales_open.swap(status.is_open, Ordering::SeqCst);
        let mut text = render_status(status, &self.window);
        if was_open != status.is_open {
            text.push_str(if status.is_open {
                "  <- now open"
            } else {
                "  <- now closed"
            });
        }
        text.push('\n');
        self.write_block(&text)
    }

    async fn on_catalog_changed(&self, items: &[Item]) -> Result<()> {
        let open = self.sales_open.load(Ordering::SeqCst);
        self.write_block(&format!("--- catalog ---\n{}", render_catalog(items, open)))
    }
}

//! # Cart Rendering
//!
//! Text rendering for cart contents, kept out of the core: what the cart IS
//! and how it LOOKS are separate axes.
//!
//! ## Rendering Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Rendering Seam                                       │
//! │                                                                         │
//! │  CartView (what to show)                                               │
//! │      │                                                                  │
//! │      └── Box<dyn LineRenderer> (how to show it)                        │
//! │               │                                                         │
//! │               ├── PlainRenderer    "Product: X, Price: $Y"             │
//! │               └── ReceiptRenderer  aligned receipt columns             │
//! │                                                                         │
//! │  Either side can grow without touching the other.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kiosk_core::{CartEntry, Money};

// =============================================================================
// Line Renderer
// =============================================================================

/// Formats one cart line and the total line.
pub trait LineRenderer {
    /// Renders a single entry.
    fn entry_line(&self, entry: &CartEntry) -> String;

    /// Renders the total line.
    fn total_line(&self, total: Money) -> String;
}

/// One-line-per-product format, matching the shop shelf display.
#[derive(Debug, Clone, Default)]
pub struct PlainRenderer;

impl LineRenderer for PlainRenderer {
    fn entry_line(&self, entry: &CartEntry) -> String {
        format!("Product: {}, Price: {}", entry.name, entry.price)
    }

    fn total_line(&self, total: Money) -> String {
        format!("Total: {total}")
    }
}

/// Receipt-style columns: name left, price right.
#[derive(Debug, Clone)]
pub struct ReceiptRenderer {
    /// Total printable width of a line.
    pub width: usize,
}

impl Default for ReceiptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptRenderer {
    pub fn new() -> Self {
        ReceiptRenderer { width: 40 }
    }

    fn column(&self, left: &str, right: &str) -> String {
        let pad = self.width.saturating_sub(left.len() + right.len());
        format!("{left}{}{right}", " ".repeat(pad.max(1)))
    }
}

impl LineRenderer for ReceiptRenderer {
    fn entry_line(&self, entry: &CartEntry) -> String {
        self.column(&entry.name, &entry.price.to_string())
    }

    fn total_line(&self, total: Money) -> String {
        self.column("TOTAL", &total.to_string())
    }
}

// =============================================================================
// Cart View
// =============================================================================

/// Renders a cart through whichever renderer it holds.
pub struct CartView {
    renderer: Box<dyn LineRenderer>,
}

impl CartView {
    pub fn new(renderer: Box<dyn LineRenderer>) -> Self {
        CartView { renderer }
    }

    /// Renders every entry plus the total, one line each.
    pub fn render(&self, entries: &[CartEntry]) -> String {
        let total: Money = entries.iter().map(|e| e.price).sum();
        let mut lines: Vec<String> = entries
            .iter()
            .map(|e| self.renderer.entry_line(e))
            .collect();
        lines.push(self.renderer.total_line(total));
        lines.join("\n")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

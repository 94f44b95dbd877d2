//! Plain-text rendering of the connection list.
//!
//! The renderer is a dumb consumer of [`UIViewModel`]: it draws whatever the
//! resolver decided and makes no decisions of its own.
//!
//! # Layout
//!
//! ```text
//! == Connections ==            header (mode)
//! ! network error (retry)      error banner
//! Alice Martin <a@x>           one card per record
//!     Lyon, France | 555-0101
//! ...                          tail placeholders
//! ```
//!
//! While the skeleton is shown, the cards are replaced by skeleton lines.

use crate::app::modes::ViewMode;
use crate::domain::ConnectionRecord;
use crate::ui::viewmodel::{ErrorBanner, UIViewModel};
use std::io::{self, Write};

const SKELETON_LINE: &str = "  ░░░░░░░░░░░░░░░░░░░░░░░░";
const PLACEHOLDER_LINE: &str = "  ...";

/// Writes the view model to `out` as plain text.
///
/// # Errors
///
/// Propagates write errors from `out`.
///
/// # Example
///
/// ```rust
/// use connections::{initialize, Config};
/// use connections::ui::render;
///
/// let state = initialize(&Config::default());
/// let mut out = Vec::new();
/// render(&state.compute_viewmodel(), &mut out)?;
/// assert!(String::from_utf8_lossy(&out).contains("No connections yet"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render(vm: &UIViewModel, out: &mut impl Write) -> io::Result<()> {
    render_header(vm.mode, out)?;

    if vm.show_skeleton {
        for _ in 0..vm.skeleton_count {
            writeln!(out, "{SKELETON_LINE}")?;
        }
        return Ok(());
    }

    if let Some(error) = &vm.error {
        render_error(error, out)?;
    }

    for record in &vm.list_data {
        render_card(record, out)?;
    }

    for _ in 0..vm.tail_placeholder_count {
        writeln!(out, "{PLACEHOLDER_LINE}")?;
    }

    if let Some(empty) = vm.empty_state {
        writeln!(out, "{}", empty.message())?;
    }

    Ok(())
}

fn render_header(mode: ViewMode, out: &mut impl Write) -> io::Result<()> {
    let title = match mode {
        ViewMode::Browsing => "Connections",
        ViewMode::Searching => "Search results",
    };
    writeln!(out, "== {title} ==")
}

fn render_error(error: &ErrorBanner, out: &mut impl Write) -> io::Result<()> {
    if error.retryable {
        writeln!(out, "! {} (type `retry` to try again)", error.message)
    } else {
        writeln!(out, "! {}", error.message)
    }
}

/// Two lines per record; the detail line is skipped when both fields are blank.
fn render_card(record: &ConnectionRecord, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} <{}>", record.name, record.email)?;

    let details: Vec<&str> = [record.location.as_str(), record.cell.as_str()]
        .into_iter()
        .filter(|field| !field.is_empty())
        .collect();

    if !details.is_empty() {
        writeln!(out, "    {}", details.join(" | "))?;
    }
    Ok(())
}

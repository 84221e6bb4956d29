//! ui::render
//!
//! Output for a created project item.
//!
//! Text mode prints a single fixed confirmation row and nothing about the
//! item itself. JSON mode prints the whole item. Either way the output is
//! assembled in memory and written with one call.

use std::io::Write;

use crate::core::errors::ItemAddError;
use crate::core::types::OutputFormat;
use crate::projects::ProjectItem;

use super::table::TablePrinter;

/// Confirmation row printed in text mode.
pub const ADDED_ITEM_MESSAGE: &str = "Added item";

/// Render `item` to `out` in `format`.
///
/// # Errors
///
/// - `Serialization` if the item cannot be encoded
/// - `Output` if writing fails
pub fn render_item<W: Write>(
    item: &ProjectItem,
    format: OutputFormat,
    out: &mut W,
    is_tty: bool,
) -> Result<(), ItemAddError> {
    let bytes = match format {
        OutputFormat::Text => {
            let mut tp = TablePrinter::new(is_tty);
            tp.add_field(ADDED_ITEM_MESSAGE);
            tp.end_row();
            tp.render().into_bytes()
        }
        OutputFormat::Json => {
            let mut doc = serde_json::to_vec(item)?;
            doc.push(b'\n');
            doc
        }
    };

    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
}

//! ui::table
//!
//! Row/column output for terminals and pipes.
//!
//! # Design
//!
//! Fields are collected row by row and laid out only when [`TablePrinter::render`]
//! is called, so a table is either printed whole or not at all. On a terminal
//! columns are padded to line up; otherwise fields are tab-separated so the
//! output stays easy to `cut`.
//!
//! # Example
//!
//! ```
//! use itemlink::ui::table::TablePrinter;
//!
//! let mut tp = TablePrinter::new(false);
//! tp.add_field("ID");
//! tp.add_field("Title");
//! tp.end_row();
//! assert_eq!(tp.render(), "ID\tTitle\n");
//! ```

/// Column separator on a terminal.
const TTY_SEPARATOR: &str = "  ";

/// Collects fields into rows and lays them out.
#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    rows: Vec<Vec<String>>,
    current: Vec<String>,
    is_tty: bool,
}

impl TablePrinter {
    /// Create a printer; `is_tty` selects aligned columns.
    pub fn new(is_tty: bool) -> Self {
        Self {
            is_tty,
            ..Default::default()
        }
    }

    /// Append a field to the current row.
    pub fn add_field(&mut self, field: impl Into<String>) {
        self.current.push(field.into());
    }

    /// Finish the current row.
    pub fn end_row(&mut self) {
        let row = std::mem::take(&mut self.current);
        self.rows.push(row);
    }

    /// Number of finished rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Lay out all rows. An unfinished row is ended first.
    pub fn render(&mut self) -> String {
        if !self.current.is_empty() {
            self.end_row();
        }

        let widths = self.column_widths();
        let mut out = String::new();
        for row in &self.rows {
            let last = row.len().saturating_sub(1);
            for (i, field) in row.iter().enumerate() {
                if self.is_tty {
                    out.push_str(field);
                    if i < last {
                        let pad = widths[i].saturating_sub(field.chars().count());
                        out.push_str(&" ".repeat(pad));
                        out.push_str(TTY_SEPARATOR);
                    }
                } else {
                    if i > 0 {
                        out.push('\t');
                    }
                    out.push_str(field);
                }
            }
            out.push('\n');
        }
        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|i| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|f| f.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

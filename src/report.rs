//! Row reporting.
//!
//! Each row is written as one line: the assignment in declared variable order,
//! then the formula label and the result:
//!
//! ```text
//! p=true q=false   	 Evaluating "p => q" :: false
//! ```
//!
//! Failed implications of a row are written on their own lines, before the row line.

use std::io::{self, Write};

use crate::table::Row;

/// Receiver of evaluated rows, in row order.
pub trait Report {
    fn row(&mut self, label: &str, row: &Row) -> io::Result<()>;
}

/// Collects rows in memory.
impl Report for Vec<Row> {
    fn row(&mut self, _label: &str, row: &Row) -> io::Result<()> {
        self.push(row.clone());
        Ok(())
    }
}

/// Writes rows as text lines.
#[derive(Debug)]
pub struct LineReport<W> {
    out: W,
}

impl<W: Write> LineReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for LineReport<W> {
    fn row(&mut self, label: &str, row: &Row) -> io::Result<()> {
        for diagnostic in &row.diagnostics {
            writeln!(self.out, "{}", diagnostic)?;
        }
        write!(self.out, "{}   \t Evaluating \"{}\" :: ", row.assignment, label)?;
        match &row.outcome {
            Ok(value) => writeln!(self.out, "{}", value)?,
            Err(e) => writeln!(self.out, "error: {}", e)?,
        }
        self.out.flush()
    }
}

//! Column-aligned plain-text tables.

use std::fmt;

/// One table column: a caption and the cell text drawn from a record
pub struct Column<T> {
    pub header: &'static str,
    pub cell: fn(&T) -> String,
}

/// An ordered set of columns for one record type
pub struct Projection<T> {
    columns: Vec<Column<T>>,
}

impl<T> Projection<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self { columns }
    }
}

/// A rendered table, one line per record
#[derive(Debug)]
pub struct Table {
    header: Option<String>,
    rows: Vec<String>,
}

impl Table {
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(header) = &self.header {
            writeln!(f, "{}", header)?;
        }
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Renders `records` through `projection` into an aligned table.
///
/// Each record contributes exactly one row, in input order, so a row number
/// maps straight back to `records[n - 1]`. Column widths stretch to the
/// longest cell (or caption, when the header is drawn).
pub fn render<T>(records: &[T], projection: &Projection<T>, with_header: bool) -> Table {
    let cells: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            projection
                .columns
                .iter()
                .map(|column| (column.cell)(record))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = projection
        .columns
        .iter()
        .map(|column| if with_header { column.header.chars().count() } else { 0 })
        .collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = with_header.then(|| {
        let captions: Vec<String> = projection
            .columns
            .iter()
            .map(|column| column.header.to_string())
            .collect();
        join_row(&captions, &widths)
    });
    let rows = cells.iter().map(|row| join_row(row, &widths)).collect();

    Table { header, rows }
}

fn join_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        if index + 1 == cells.len() {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{:<width$}  ", cell));
        }
    }
    line.trim_end().to_string()
}

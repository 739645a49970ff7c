// src/extract/table.rs
//
// Output shapes: a typed `Cell`, a `Record` (one row of cells) and a `Table`
// (header + records). Records are built once and never mutated afterwards;
// the only way in is `Table::push`, which enforces the header's arity.
use crate::core::rich::RichText;

/// One normalized field value.
///
/// Absent values: `Minutes(0)`, `Rating(0.0)`, `Date(None)`, empty text/rich.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// Formatting and links preserved (title, contributor, image).
    Rich(RichText),
    /// Verbatim text (header labels, purchase dates).
    Text(String),
    Minutes(u32),
    /// Pattern-extracted date token.
    Date(Option<String>),
    Rating(f32),
}

impl Cell {
    /// Flat display string (GUI preview, delimited export).
    pub fn display(&self) -> String {
        match self {
            Cell::Rich(rt) => rt.plain_text(),
            Cell::Text(t) => t.clone(),
            Cell::Minutes(m) => m.to_string(),
            Cell::Date(d) => d.clone().unwrap_or_default(),
            Cell::Rating(r) => format_rating(*r),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Minutes(_) | Cell::Rating(_))
    }
}

/// 5.0 → "5", 4.5 → "4.5"
pub fn format_rating(r: f32) -> String {
    if r.fract() == 0.0 { format!("{}", r as u32) } else { format!("{}", r) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    cells: Vec<Cell>,
}

impl Record {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// Plain strings, one per cell.
    pub fn display_row(&self) -> Vec<String> {
        self.cells.iter().map(Cell::display).collect()
    }

    /// Copy with an extra leading cell (image column).
    pub(crate) fn with_leading(mut self, cell: Cell) -> Self {
        self.cells.insert(0, cell);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    header: Record,
    records: Vec<Record>,
}

impl Table {
    pub fn new(header: Record) -> Self {
        Self { header, records: Vec::new() }
    }

    pub fn header(&self) -> &Record {
        &self.header
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record. Short records are padded with empty text and long ones
    /// truncated so every record matches the header's arity.
    pub fn push(&mut self, mut record: Record) {
        let width = self.width();
        if record.len() != width {
            logd!("Table: record arity {} != header {}, fitting", record.len(), width);
            record.cells.resize(width, Cell::Text(s!()));
        }
        self.records.push(record);
    }

    /// Append every record of `other`; its header is dropped.
    pub fn extend(&mut self, other: Table) {
        for r in other.records {
            self.push(r);
        }
    }

    /// Header labels as plain strings.
    pub fn header_labels(&self) -> Vec<String> {
        self.header.display_row()
    }

    /// Records as plain string rows.
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(Record::display_row).collect()
    }

    /// Which columns hold numbers (first record decides; header-only → none).
    pub fn numeric_columns(&self) -> Vec<bool> {
        match self.records.first() {
            Some(r) => r.cells.iter().map(Cell::is_numeric).collect(),
            None => vec![false; self.width()],
        }
    }
}

//! Section, row and cell definitions.
//!
//! The declared model ([`Section`], [`Row`], [`Cell`]) mirrors the document
//! shape handed over by the upstream parser. The resolved model
//! ([`CellPlacement`], [`GridPosition`]) carries absolute, zero-based
//! coordinates produced by placement resolution.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Row and column span of a cell, each at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    rows: usize,
    cols: usize,
}

impl Span {
    /// A span covering a single address.
    pub const UNIT: Self = Self { rows: 1, cols: 1 };

    /// Create a span, clamping zero to 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    /// Normalize declared span values.
    ///
    /// Missing, zero and negative values become 1. Values beyond `usize`
    /// saturate; the grid size ceiling rejects them later.
    pub fn from_declared(row_span: Option<i64>, col_span: Option<i64>) -> Self {
        Self {
            rows: normalize_span(row_span),
            cols: normalize_span(col_span),
        }
    }

    /// Number of rows covered.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns covered.
    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::UNIT
    }
}

fn normalize_span(value: Option<i64>) -> usize {
    value
        .filter(|declared| *declared >= 1)
        .map_or(1, |declared| usize::try_from(declared).unwrap_or(usize::MAX))
}

/// A declared cell. Only its spans matter for geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Declared row span, if any.
    #[serde(
        default,
        deserialize_with = "lenient_span",
        skip_serializing_if = "Option::is_none"
    )]
    pub row_span: Option<i64>,
    /// Declared column span, if any.
    #[serde(
        default,
        deserialize_with = "lenient_span",
        skip_serializing_if = "Option::is_none"
    )]
    pub col_span: Option<i64>,
}

impl Cell {
    /// A plain 1x1 cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cell with both spans declared.
    pub fn spanning(row_span: i64, col_span: i64) -> Self {
        Self {
            row_span: Some(row_span),
            col_span: Some(col_span),
        }
    }

    /// Declare the row span.
    #[must_use]
    pub fn with_row_span(mut self, row_span: i64) -> Self {
        self.row_span = Some(row_span);
        self
    }

    /// Declare the column span.
    #[must_use]
    pub fn with_col_span(mut self, col_span: i64) -> Self {
        self.col_span = Some(col_span);
        self
    }

    /// The normalized span of this cell.
    pub fn span(&self) -> Span {
        Span::from_declared(self.row_span, self.col_span)
    }
}

/// Accept any JSON value for a span; anything that is not an integer (or an
/// integral float, or a numeric string) is treated as undeclared.
fn lenient_span<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(declared_integer))
}

fn declared_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite() && float.fract().abs() < f64::EPSILON)
                .map(|float| float as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// An ordered list of cells. An empty row is a spacer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
    /// Cells in document order.
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a row from its cells.
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// A row with no cells.
    pub fn spacer() -> Self {
        Self::default()
    }

    /// A row of `count` plain 1x1 cells.
    pub fn unit_cells(count: usize) -> Self {
        Self {
            cells: vec![Cell::new(); count],
        }
    }
}

/// A named grid section: the unit of validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Section {
    /// Section name, used in diagnostics.
    pub name: String,
    /// Rows in document order.
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Section {
    /// Create a section.
    pub fn new(name: impl Into<String>, rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            name: name.into(),
            rows: rows.into_iter().collect(),
        }
    }
}

/// A zero-based address in the bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GridPosition {
    /// Row index (0-indexed)
    pub row: usize,
    /// Column index (0-indexed)
    pub column: usize,
}

impl GridPosition {
    /// Create a new grid position.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Document order of a declared cell: row index, then index within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DocumentIndex {
    /// Declared row (0-indexed)
    pub row: usize,
    /// Position within the declared row (0-indexed)
    pub cell: usize,
}

/// A cell resolved to an absolute origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellPlacement {
    /// Top-left address
    pub position: GridPosition,
    /// Normalized span
    pub span: Span,
    /// Where the cell was declared; used only for ordering diagnostics
    pub index: DocumentIndex,
}

impl CellPlacement {
    /// Create a placement.
    pub fn new(position: GridPosition, span: Span, index: DocumentIndex) -> Self {
        Self {
            position,
            span,
            index,
        }
    }

    /// Exclusive end row.
    pub fn row_end(&self) -> usize {
        self.position.row.saturating_add(self.span.rows())
    }

    /// Exclusive end column.
    pub fn col_end(&self) -> usize {
        self.position.column.saturating_add(self.span.cols())
    }

    /// Whether this placement's rectangle contains the address.
    pub fn covers(&self, row: usize, column: usize) -> bool {
        (self.position.row..self.row_end()).contains(&row)
            && (self.position.column..self.col_end()).contains(&column)
    }

    /// Check if this placement overlaps with another placement.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.position.row < other.row_end()
            && self.row_end() > other.position.row
            && self.position.column < other.col_end()
            && self.col_end() > other.position.column
    }

    /// The shared rectangle as `(top_left, span)`, if the placements overlap.
    pub fn intersection(&self, other: &Self) -> Option<(GridPosition, Span)> {
        if !self.overlaps(other) {
            return None;
        }
        let row = self.position.row.max(other.position.row);
        let column = self.position.column.max(other.position.column);
        let row_end = self.row_end().min(other.row_end());
        let col_end = self.col_end().min(other.col_end());
        Some((
            GridPosition::new(row, column),
            Span::new(row_end - row, col_end - column),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(row: usize, column: usize, rows: usize, cols: usize) -> CellPlacement {
        CellPlacement::new(
            GridPosition::new(row, column),
            Span::new(rows, cols),
            DocumentIndex { row, cell: 0 },
        )
    }

    #[test]
    fn undeclared_spans_default_to_one() {
        assert_eq!(Cell::new().span(), Span::UNIT);
    }

    #[test]
    fn zero_and_negative_spans_normalize_to_one() {
        assert_eq!(Span::from_declared(Some(0), Some(-4)), Span::UNIT);
        assert_eq!(Span::from_declared(Some(i64::MIN), None), Span::UNIT);
    }

    #[test]
    fn positive_spans_are_kept() {
        let span = Cell::spanning(2, 3).span();
        assert_eq!(span.rows(), 2);
        assert_eq!(span.cols(), 3);
    }

    #[test]
    fn span_new_clamps_zero() {
        assert_eq!(Span::new(0, 0), Span::UNIT);
    }

    #[test]
    fn placement_ends_saturate() {
        let huge = placed(usize::MAX - 1, 3, 10, usize::MAX);
        assert_eq!(huge.row_end(), usize::MAX);
        assert_eq!(huge.col_end(), usize::MAX);
    }

    #[test]
    fn placement_covers_its_rectangle() {
        let area = placed(1, 2, 2, 3);
        assert!(area.covers(1, 2));
        assert!(area.covers(2, 4));
        assert!(!area.covers(3, 2));
        assert!(!area.covers(1, 5));
        assert!(!area.covers(0, 2));
    }

    #[test]
    fn placement_overlap_detection() {
        let first = placed(0, 0, 2, 2);
        let second = placed(1, 1, 2, 2);
        let third = placed(3, 3, 1, 1);

        assert!(first.overlaps(&second));
        assert!(second.overlaps(&first));
        assert!(!first.overlaps(&third));
        assert!(!third.overlaps(&first));
    }

    #[test]
    fn intersection_of_overlapping_placements() {
        let first = placed(0, 0, 2, 3);
        let second = placed(1, 1, 3, 1);
        assert_eq!(
            first.intersection(&second),
            Some((GridPosition::new(1, 1), Span::new(1, 1)))
        );
        assert_eq!(first.intersection(&placed(5, 5, 1, 1)), None);
    }

    #[test]
    fn document_index_orders_rows_first() {
        let early = DocumentIndex { row: 0, cell: 9 };
        let late = DocumentIndex { row: 1, cell: 0 };
        assert!(early < late);
    }
}

//! Placement resolution.
//!
//! Declared rows carry only span counts. Resolution walks the rows in document
//! order and assigns each cell an absolute origin, flowing around columns that
//! are still occupied by row-spanning cells from earlier rows (the same model
//! as HTML table `rowspan`).

use crate::findings::ValidationMessage;
use crate::intervals::ColumnRanges;
use crate::types::{CellPlacement, DocumentIndex, GridPosition, Row};

/// Output of [`resolve_placements`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Placements in document order
    pub placements: Vec<CellPlacement>,
    /// Findings about degenerate rows
    pub warnings: Vec<ValidationMessage>,
}

/// A row-spanning placement still occupying columns in later rows.
#[derive(Debug, Clone, Copy)]
struct FlowThrough {
    row_end: usize,
    col_start: usize,
    col_end: usize,
}

/// Resolve declared rows into absolute placements.
///
/// Never rejects input: malformed spans were already normalized to 1 by
/// [`Cell::span`](crate::Cell::span). Rows without cells produce a warning and
/// no placements.
///
/// A cell declared under an earlier row span starts after the spanned
/// columns, so `[[rowSpan=2], [1x1]]` resolves the second cell to row 2,
/// column 2 and yields a coverage gap, not an overlap. Overlaps still arise
/// when a later cell's column span runs into a spanned column.
pub fn resolve_placements(rows: &[Row]) -> Resolution {
    let mut resolution = Resolution {
        placements: Vec::with_capacity(rows.iter().map(|row| row.cells.len()).sum()),
        warnings: Vec::new(),
    };
    let mut active: Vec<FlowThrough> = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        active.retain(|flow| flow.row_end > row_idx);

        if row.cells.is_empty() {
            resolution.warnings.push(
                ValidationMessage::warning(format!("Row {} has no cells defined.", row_idx + 1))
                    .at_row(row_idx),
            );
            continue;
        }

        let blocked: ColumnRanges = active
            .iter()
            .map(|flow| (flow.col_start, flow.col_end))
            .collect();

        let first_new = resolution.placements.len();
        let mut cursor = 0_usize;
        for (cell_idx, cell) in row.cells.iter().enumerate() {
            cursor = blocked.next_free(cursor);
            let span = cell.span();
            let placement = CellPlacement::new(
                GridPosition::new(row_idx, cursor),
                span,
                DocumentIndex {
                    row: row_idx,
                    cell: cell_idx,
                },
            );
            log::trace!(
                "[FLOW] row {row_idx} cell {cell_idx} -> column {cursor} ({}x{})",
                span.rows(),
                span.cols()
            );
            resolution.placements.push(placement);
            cursor = cursor.saturating_add(span.cols());
        }

        // Spans only take effect from the next row onwards.
        active.extend(
            resolution.placements[first_new..]
                .iter()
                .filter(|placement| placement.span.rows() > 1)
                .map(|placement| FlowThrough {
                    row_end: placement.row_end(),
                    col_start: placement.position.column,
                    col_end: placement.col_end(),
                }),
        );
    }

    tracing::debug!(
        rows = rows.len(),
        placements = resolution.placements.len(),
        empty_rows = resolution.warnings.len(),
        "resolved placements"
    );

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Span};

    fn origins(resolution: &Resolution) -> Vec<(usize, usize)> {
        resolution
            .placements
            .iter()
            .map(|placement| (placement.position.row, placement.position.column))
            .collect()
    }

    #[test]
    fn plain_cells_fill_left_to_right() {
        let rows = vec![Row::unit_cells(3), Row::unit_cells(2)];
        let resolution = resolve_placements(&rows);

        assert_eq!(
            origins(&resolution),
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)]
        );
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn column_span_advances_cursor() {
        let rows = vec![Row::new([Cell::new().with_col_span(2), Cell::new()])];
        let resolution = resolve_placements(&rows);
        assert_eq!(origins(&resolution), vec![(0, 0), (0, 2)]);
    }

    #[test]
    fn later_rows_flow_around_row_spans() {
        // Row 0: a 2x2 block, then a 1x1. Row 1 must start after the block.
        let rows = vec![
            Row::new([Cell::spanning(2, 2), Cell::new()]),
            Row::unit_cells(1),
        ];
        let resolution = resolve_placements(&rows);
        assert_eq!(origins(&resolution), vec![(0, 0), (0, 2), (1, 2)]);
    }

    #[test]
    fn cell_declared_under_span_starts_after_it() {
        let rows = vec![Row::new([Cell::new().with_row_span(2)]), Row::unit_cells(1)];
        let resolution = resolve_placements(&rows);
        assert_eq!(origins(&resolution), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn flow_through_in_the_middle_of_a_row() {
        let rows = vec![
            Row::new([Cell::new(), Cell::new().with_row_span(3), Cell::new()]),
            Row::unit_cells(2),
            Row::unit_cells(2),
            Row::unit_cells(3),
        ];
        let resolution = resolve_placements(&rows);
        assert_eq!(
            origins(&resolution),
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 2),
                (3, 0),
                (3, 1),
                (3, 2),
            ]
        );
    }

    #[test]
    fn only_cursor_column_is_checked() {
        // The 1x2 cell in row 1 starts at column 0 and runs over the
        // flow-through column; the overlap is left for the checker.
        let rows = vec![
            Row::new([Cell::new(), Cell::new().with_row_span(2)]),
            Row::new([Cell::new().with_col_span(2)]),
        ];
        let resolution = resolve_placements(&rows);
        assert_eq!(origins(&resolution), vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn spacer_rows_warn_and_keep_flow_through() {
        let rows = vec![
            Row::new([Cell::new().with_row_span(3)]),
            Row::spacer(),
            Row::unit_cells(1),
        ];
        let resolution = resolve_placements(&rows);

        assert_eq!(origins(&resolution), vec![(0, 0), (2, 1)]);
        assert_eq!(resolution.warnings.len(), 1);
        assert_eq!(resolution.warnings[0].text(), "Row 2 has no cells defined.");
        assert_eq!(resolution.warnings[0].row(), Some(2));
    }

    #[test]
    fn malformed_spans_are_normalized() {
        let rows = vec![Row::new([Cell::spanning(0, -3), Cell::new()])];
        let resolution = resolve_placements(&rows);
        assert_eq!(resolution.placements[0].span, Span::UNIT);
        assert_eq!(origins(&resolution), vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn huge_row_span_does_not_grow_work() {
        let rows = vec![
            Row::new([Cell::spanning(i64::MAX, 1)]),
            Row::unit_cells(1),
        ];
        let resolution = resolve_placements(&rows);
        assert_eq!(origins(&resolution), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn document_index_is_preserved() {
        let rows = vec![Row::spacer(), Row::unit_cells(2)];
        let resolution = resolve_placements(&rows);
        let indices: Vec<DocumentIndex> = resolution
            .placements
            .iter()
            .map(|placement| placement.index)
            .collect();
        assert_eq!(
            indices,
            vec![
                DocumentIndex { row: 1, cell: 0 },
                DocumentIndex { row: 1, cell: 1 },
            ]
        );
    }
}

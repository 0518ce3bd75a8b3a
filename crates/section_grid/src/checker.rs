//! Layout checking.
//!
//! Runs over resolved placements in four passes:
//! 1. Bounds: the smallest rectangle holding every declared row and span.
//! 2. Occupancy: out-of-bounds placements and overlapping addresses (errors).
//! 3. Coverage: addresses no placement claimed (one warning).
//! 4. Row consistency: rows where nothing starts and earlier spans leave gaps
//!    (one warning per row).

use crate::findings::{ValidationMessage, ValidationReport};
use crate::intervals::ColumnRanges;
use crate::matrix::{Claim, Occupancy};
use crate::settings::{RowCoverage, ValidatorConfig};
use crate::types::{CellPlacement, GridPosition};

/// Size of the bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridBounds {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
}

impl GridBounds {
    /// Create bounds.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Bounds holding `declared_rows` rows and every placement's full span.
    pub fn compute(placements: &[CellPlacement], declared_rows: usize) -> Self {
        placements.iter().fold(
            Self::new(declared_rows, 0),
            |bounds, placement| Self {
                rows: bounds.rows.max(placement.row_end()),
                columns: bounds.columns.max(placement.col_end()),
            },
        )
    }

    /// `rows * columns`, or `None` on overflow.
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }
}

/// Check placements against bounds computed from them and `declared_rows`.
pub fn check_layout(
    placements: &[CellPlacement],
    declared_rows: usize,
    config: &ValidatorConfig,
    report: &mut ValidationReport,
) {
    let bounds = GridBounds::compute(placements, declared_rows);
    check_within(placements, bounds, config, report);
}

/// Check placements against caller-supplied bounds.
///
/// With bounds from [`GridBounds::compute`] no placement can fall outside;
/// narrower bounds (e.g. a declared column count) make the boundary check
/// meaningful.
pub fn check_within(
    placements: &[CellPlacement],
    bounds: GridBounds,
    config: &ValidatorConfig,
    report: &mut ValidationReport,
) {
    let _span = tracing::debug_span!(
        "check_layout",
        rows = bounds.rows,
        columns = bounds.columns,
        placements = placements.len()
    )
    .entered();

    let Some(mut occupancy) = bounds
        .cell_count()
        .filter(|&count| count <= config.max_grid_cells)
        .and_then(|_| Occupancy::new(bounds.rows, bounds.columns))
    else {
        tracing::debug!(max = config.max_grid_cells, "grid exceeds size ceiling");
        report.push(ValidationMessage::error(format!(
            "Grid dimensions {}x{} exceed the maximum of {} cells.",
            bounds.rows, bounds.columns, config.max_grid_cells
        )));
        return;
    };

    claim_placements(placements, &mut occupancy, report);
    // Without columns there are no addresses, so any row count is trivially covered.
    if bounds.columns == 0 {
        tracing::debug!(rows = bounds.rows, "grid has no columns");
        return;
    }
    let incomplete = report_missing_cells(&occupancy, report);

    if incomplete && config.row_coverage == RowCoverage::UnlessGridIncomplete {
        tracing::debug!("row consistency pass skipped");
        return;
    }
    report_uncovered_rows(placements, bounds, report);
}

fn claim_placements(
    placements: &[CellPlacement],
    occupancy: &mut Occupancy,
    report: &mut ValidationReport,
) {
    for placement in placements {
        let GridPosition { row, column } = placement.position;
        match occupancy.claim(placement) {
            Claim::OutOfBounds => report.push(
                ValidationMessage::error(format!(
                    "Cell at row {}, column {} extends beyond grid boundaries (spans {}x{}).",
                    row + 1,
                    column + 1,
                    placement.span.rows(),
                    placement.span.cols()
                ))
                .at(row, column),
            ),
            Claim::Placed { overlaps } => {
                report.extend(overlaps.into_iter().map(|taken| {
                    ValidationMessage::error(format!(
                        "Cell overlap detected at row {}, column {}.",
                        taken.row + 1,
                        taken.column + 1
                    ))
                    .at(taken.row, taken.column)
                }));
            }
        }
    }
}

/// Returns whether any address was left uncovered.
fn report_missing_cells(occupancy: &Occupancy, report: &mut ValidationReport) -> bool {
    let missing = occupancy.unclaimed();
    tracing::debug!(
        claimed = occupancy.claimed_count(),
        missing = missing.len(),
        "coverage pass"
    );
    if missing.is_empty() {
        return false;
    }

    let positions = missing
        .iter()
        .map(|position| format!("({},{})", position.row + 1, position.column + 1))
        .collect::<Vec<_>>()
        .join(", ");
    report.push(ValidationMessage::warning(format!(
        "Incomplete grid coverage: {} of {} cells are not covered. Missing cells at positions: {positions}.",
        missing.len(),
        occupancy.rows() * occupancy.columns(),
    )));
    true
}

fn report_uncovered_rows(
    placements: &[CellPlacement],
    bounds: GridBounds,
    report: &mut ValidationReport,
) {
    let mut by_start: Vec<&CellPlacement> = placements.iter().collect();
    by_start.sort_by_key(|placement| placement.position.row);
    let mut pending = by_start.into_iter().peekable();
    // Placements that started on an earlier row, dropped once their span ends.
    let mut active: Vec<&CellPlacement> = Vec::new();

    for row in 0..bounds.rows {
        active.retain(|placement| placement.row_end() > row);

        let mut has_origin = false;
        while let Some(placement) = pending.next_if(|placement| placement.position.row == row) {
            has_origin = true;
            active.push(placement);
        }
        if has_origin {
            continue;
        }

        let carried: ColumnRanges = active
            .iter()
            .map(|placement| (placement.position.column, placement.col_end()))
            .collect();
        if !carried.covers(0, bounds.columns) {
            report.push(
                ValidationMessage::warning(format!(
                    "Row {} is not fully covered by cells.",
                    row + 1
                ))
                .at_row(row),
            );
        }
    }
}

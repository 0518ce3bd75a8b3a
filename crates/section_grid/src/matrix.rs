//! Occupancy storage for the bounding rectangle.

use crate::types::{CellPlacement, GridPosition};

/// Outcome of claiming a placement's rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Claim {
    /// Some address lies outside the matrix; nothing was marked
    OutOfBounds,
    /// Every address was marked; the listed ones were already taken
    Placed {
        /// Addresses already occupied before this claim, row-major
        overlaps: Vec<GridPosition>,
    },
}

/// Row-major boolean matrix of claimed addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Occupancy {
    /// Allocate an unclaimed `rows x columns` matrix, or `None` when the
    /// address count overflows.
    ///
    /// Callers should still bound `rows * columns` first; see
    /// [`GridBounds::cell_count`](crate::GridBounds::cell_count).
    pub fn new(rows: usize, columns: usize) -> Option<Self> {
        let len = rows.checked_mul(columns)?;
        Some(Self {
            rows,
            columns,
            cells: vec![false; len],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    /// Whether the address is claimed. Out-of-range addresses are unclaimed.
    pub fn is_claimed(&self, row: usize, column: usize) -> bool {
        self.offset(row, column)
            .and_then(|offset| self.cells.get(offset).copied())
            .unwrap_or(false)
    }

    /// Mark every address of the placement.
    ///
    /// A placement reaching past the matrix is rejected whole. Addresses
    /// already claimed are reported once each and stay claimed.
    pub fn claim(&mut self, placement: &CellPlacement) -> Claim {
        if placement.row_end() > self.rows || placement.col_end() > self.columns {
            return Claim::OutOfBounds;
        }

        let mut overlaps = Vec::new();
        for row in placement.position.row..placement.row_end() {
            for column in placement.position.column..placement.col_end() {
                let Some(slot) = self
                    .offset(row, column)
                    .and_then(|offset| self.cells.get_mut(offset))
                else {
                    continue;
                };
                if *slot {
                    overlaps.push(GridPosition::new(row, column));
                } else {
                    *slot = true;
                }
            }
        }
        Claim::Placed { overlaps }
    }

    /// Unclaimed addresses in row-major order.
    pub fn unclaimed(&self) -> Vec<GridPosition> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, claimed)| !*claimed)
            .map(|(offset, _)| GridPosition::new(offset / self.columns, offset % self.columns))
            .collect()
    }

    /// Number of claimed addresses.
    pub fn claimed_count(&self) -> usize {
        self.cells.iter().filter(|claimed| **claimed).count()
    }
}

//! Validator configuration.

use serde::{Deserialize, Serialize};

/// Default ceiling on `rows * columns` of a bounding rectangle.
pub const DEFAULT_MAX_GRID_CELLS: usize = 1_000_000;

/// Policy for the secondary per-row coverage pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowCoverage {
    /// Always run the row pass, even when the coverage warning already
    /// describes the same gaps
    #[default]
    Always,
    /// Skip the row pass when the coverage pass reported missing cells
    UnlessGridIncomplete,
}

/// Tunables for [`GridValidator`](crate::GridValidator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Largest bounding rectangle, in addresses, that will be allocated
    pub max_grid_cells: usize,
    /// Row-consistency reporting policy
    pub row_coverage: RowCoverage,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_grid_cells: DEFAULT_MAX_GRID_CELLS,
            row_coverage: RowCoverage::default(),
        }
    }
}

impl ValidatorConfig {
    /// Set the grid size ceiling.
    #[must_use]
    pub fn with_max_grid_cells(mut self, max_grid_cells: usize) -> Self {
        self.max_grid_cells = max_grid_cells;
        self
    }

    /// Set the row-consistency reporting policy.
    #[must_use]
    pub fn with_row_coverage(mut self, row_coverage: RowCoverage) -> Self {
        self.row_coverage = row_coverage;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.max_grid_cells, DEFAULT_MAX_GRID_CELLS);
        assert_eq!(config.row_coverage, RowCoverage::Always);
    }

    #[test]
    fn partial_document_keeps_defaults() -> serde_json::Result<()> {
        let sized: ValidatorConfig = serde_json::from_str(r#"{ "max_grid_cells": 64 }"#)?;
        assert_eq!(sized.max_grid_cells, 64);
        assert_eq!(sized.row_coverage, RowCoverage::Always);

        let lenient: ValidatorConfig =
            serde_json::from_str(r#"{ "row_coverage": "unless_grid_incomplete" }"#)?;
        assert_eq!(lenient.max_grid_cells, DEFAULT_MAX_GRID_CELLS);
        assert_eq!(lenient.row_coverage, RowCoverage::UnlessGridIncomplete);
        Ok(())
    }

    #[test]
    fn builders_set_fields() {
        let config = ValidatorConfig::default()
            .with_max_grid_cells(10)
            .with_row_coverage(RowCoverage::UnlessGridIncomplete);
        assert_eq!(config.max_grid_cells, 10);
        assert_eq!(config.row_coverage, RowCoverage::UnlessGridIncomplete);
    }
}

//! Structural validation for span-based grid sections.
//!
//! A grid section is declared as an ordered list of rows, each holding cells
//! that carry only relative row/column span counts. Validation reconstructs the
//! absolute origin of every cell (flowing later rows around cells that still
//! occupy space from earlier rows), then checks that the resulting placements
//! tile their bounding rectangle with no overlaps, no out-of-bounds spans and
//! no gaps.
//!
//! The pipeline is split into two independent stages:
//! - [`resolve_placements`] turns declared rows into [`CellPlacement`]s.
//! - [`check_layout`] applies the severity policy to those placements and
//!   appends findings to a caller-owned [`ValidationReport`].
//!
//! [`GridValidator`] ties both stages together.

// Section, row and cell model
mod types;
pub use types::{Cell, CellPlacement, DocumentIndex, GridPosition, Row, Section, Span};

// Merged column interval set
mod intervals;
pub use intervals::ColumnRanges;

// Placement resolution
mod flow;
pub use flow::{Resolution, resolve_placements};

// Occupancy storage
mod matrix;
pub use matrix::{Claim, Occupancy};

// Layout checking passes
mod checker;
pub use checker::{GridBounds, check_layout, check_within};

// Findings and reports
mod findings;
pub use findings::{Severity, ValidationMessage, ValidationReport};

// Configuration
mod settings;
pub use settings::{DEFAULT_MAX_GRID_CELLS, RowCoverage, ValidatorConfig};

// Tooling faults
mod error;
pub use error::ValidatorFault;

// End-to-end validation
mod pipeline;
pub use pipeline::{GridValidator, validate_section};

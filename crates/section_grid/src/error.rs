//! Tooling faults, kept apart from layout findings.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// A failure of the validator itself rather than a problem with the layout.
///
/// Layout problems are always reported as findings in a
/// [`ValidationReport`](crate::ValidationReport); a fault means the
/// validation could not be carried out at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorFault {
    /// No section was produced upstream
    MissingSection,
    /// The configuration cannot validate any layout
    InvalidConfig {
        /// What is wrong with it
        reason: &'static str,
    },
}

impl Display for ValidatorFault {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSection => write!(formatter, "Internal fault: no section to validate"),
            Self::InvalidConfig { reason } => {
                write!(formatter, "Internal fault: invalid validator configuration: {reason}")
            }
        }
    }
}

impl Error for ValidatorFault {}

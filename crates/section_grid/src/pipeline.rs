//! End-to-end section validation.

use crate::checker::check_layout;
use crate::error::ValidatorFault;
use crate::findings::{ValidationMessage, ValidationReport};
use crate::flow::resolve_placements;
use crate::settings::ValidatorConfig;
use crate::types::Section;

/// Validates sections with a fixed configuration.
///
/// Holds no per-call state, so one validator can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct GridValidator {
    config: ValidatorConfig,
}

impl GridValidator {
    /// Create a validator.
    ///
    /// # Errors
    /// Returns [`ValidatorFault::InvalidConfig`] if `max_grid_cells` is zero.
    pub fn new(config: ValidatorConfig) -> Result<Self, ValidatorFault> {
        if config.max_grid_cells == 0 {
            return Err(ValidatorFault::InvalidConfig {
                reason: "max_grid_cells must be at least 1",
            });
        }
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate one section, appending findings to `report`.
    pub fn validate(&self, section: &Section, report: &mut ValidationReport) {
        let _span = tracing::debug_span!(
            "validate_section",
            section = %section.name,
            rows = section.rows.len()
        )
        .entered();
        let reported_before = report.len();

        if section.rows.is_empty() {
            report.push(ValidationMessage::warning(format!(
                "Section `{}` has no rows defined.",
                section.name
            )));
            return;
        }

        let resolution = resolve_placements(&section.rows);
        report.extend(resolution.warnings);
        check_layout(
            &resolution.placements,
            section.rows.len(),
            &self.config,
            report,
        );

        tracing::debug!(
            findings = report.len() - reported_before,
            "section validated"
        );
    }

    /// Validate the output of an upstream parser that may have produced
    /// nothing.
    ///
    /// # Errors
    /// Returns [`ValidatorFault::MissingSection`] when `section` is `None`;
    /// the report is left untouched in that case.
    pub fn validate_parsed(
        &self,
        section: Option<&Section>,
        report: &mut ValidationReport,
    ) -> Result<(), ValidatorFault> {
        let Some(parsed) = section else {
            tracing::warn!("validation requested without a section");
            return Err(ValidatorFault::MissingSection);
        };
        self.validate(parsed, report);
        Ok(())
    }
}

/// Validate a section with the default configuration.
pub fn validate_section(section: &Section, report: &mut ValidationReport) {
    GridValidator::default().validate(section, report);
}

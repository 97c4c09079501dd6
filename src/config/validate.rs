//! Plot spec validation.

use std::collections::HashSet;

use crate::samples::CLASS_PLACEHOLDER;

use super::schema::PlotSpec;

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No plotting variables defined")]
    EmptyVariables,

    #[error("Duplicate variable name: {0}")]
    DuplicateVariable(String),

    #[error("Branch template for '{0}' is missing the CLASS placeholder: {1}")]
    MissingClassPlaceholder(String, String),

    #[error("Binning for '{0}' needs at least 3 entries, got {1}")]
    TooFewBinEntries(String, usize),

    #[error("Binning for '{0}' has invalid bin count {1} (must be a positive integer)")]
    InvalidBinCount(String, f64),

    #[error("Binning for '{0}' has inverted range [{1}, {2}]")]
    InvalidBinRange(String, f64, f64),

    #[error("Bin edges for '{0}' must be strictly ascending")]
    UnsortedBinEdges(String),

    #[error("Invalid ratio range for '{0}': {1} (must be > 0.0)")]
    InvalidRatioRange(String, f64),

    #[error("Invalid white-text threshold: {0} (must be > 0.0)")]
    InvalidWhiteThreshold(f64),
}

fn check_branch(name: &str, branch: &str) -> Result<(), ValidationError> {
    if branch.contains(CLASS_PLACEHOLDER) {
        Ok(())
    } else {
        Err(ValidationError::MissingClassPlaceholder(
            name.to_string(),
            branch.to_string(),
        ))
    }
}

fn check_bins(name: &str, bins: &[f64]) -> Result<(), ValidationError> {
    if bins.len() > 3 {
        if bins.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ValidationError::UnsortedBinEdges(name.to_string()));
        }
        return Ok(());
    }
    if bins.len() < 3 {
        return Err(ValidationError::TooFewBinEntries(
            name.to_string(),
            bins.len(),
        ));
    }
    if bins[0] < 1.0 || bins[0].fract() != 0.0 {
        return Err(ValidationError::InvalidBinCount(name.to_string(), bins[0]));
    }
    if bins[1] >= bins[2] {
        return Err(ValidationError::InvalidBinRange(
            name.to_string(),
            bins[1],
            bins[2],
        ));
    }
    Ok(())
}

/// Validate a parsed plot spec.
pub fn validate_spec(spec: &PlotSpec) -> Result<(), ValidationError> {
    if spec.variables.is_empty() {
        return Err(ValidationError::EmptyVariables);
    }

    let mut seen = HashSet::new();
    for var in &spec.variables {
        if !seen.insert(var.name.as_str()) {
            return Err(ValidationError::DuplicateVariable(var.name.clone()));
        }
        check_branch(&var.name, &var.branch)?;
        check_bins(&var.name, &var.bins)?;
        if var.ratio_range <= 0.0 {
            return Err(ValidationError::InvalidRatioRange(
                var.name.clone(),
                var.ratio_range,
            ));
        }
    }

    let mut seen_corr = HashSet::new();
    for var in &spec.correlation_variables {
        if !seen_corr.insert(var.name.as_str()) {
            return Err(ValidationError::DuplicateVariable(var.name.clone()));
        }
        check_branch(&var.name, &var.branch)?;
    }

    if spec.correlation.white_threshold <= 0.0 {
        return Err(ValidationError::InvalidWhiteThreshold(
            spec.correlation.white_threshold,
        ));
    }

    Ok(())
}

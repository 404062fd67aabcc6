//! Read-only analysis tools: validation and structure extraction.

use std::fmt;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::Result;
use crate::latex::{self, StructureReport, ValidationReport};
use crate::paths::PathResolver;
use crate::tools::read_existing;

// ============== Validate LaTeX ==============

/// Parameters for validating a LaTeX file.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ValidateLatexParams {
    /// Path to the LaTeX file to validate.
    pub file_path: String,
}

/// Result of validating a LaTeX file.
#[derive(Debug)]
pub struct ValidateLatexResult {
    pub path: PathBuf,
    pub report: ValidationReport,
}

impl fmt::Display for ValidateLatexResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.report.is_valid() {
            write!(
                f,
                "LaTeX file {} appears to be valid (basic checks passed)",
                self.path.display()
            )
        } else {
            write!(
                f,
                "LaTeX validation issues found in {}:\n\n{}",
                self.path.display(),
                self.report
            )
        }
    }
}

/// Run the basic validation checks over a file.
pub fn validate_latex(
    resolver: &PathResolver,
    params: ValidateLatexParams,
) -> Result<ValidateLatexResult> {
    let path = resolver.resolve(&params.file_path)?;
    let content = read_existing(&path)?;
    let report = latex::validate(&content);

    Ok(ValidateLatexResult { path, report })
}

// ============== Get LaTeX Structure ==============

/// Parameters for extracting document structure.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetLatexStructureParams {
    /// Path to the LaTeX file to analyze.
    pub file_path: String,
}

/// Result of extracting document structure.
#[derive(Debug)]
pub struct GetLatexStructureResult {
    pub path: PathBuf,
    pub report: StructureReport,
}

impl fmt::Display for GetLatexStructureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Structure of {}:\n\n{}", self.path.display(), self.report)
    }
}

/// Extract the class, metadata, outline and packages of a file.
pub fn get_latex_structure(
    resolver: &PathResolver,
    params: GetLatexStructureParams,
) -> Result<GetLatexStructureResult> {
    let path = resolver.resolve(&params.file_path)?;
    let content = read_existing(&path)?;
    let report = latex::analyze(&content);

    Ok(GetLatexStructureResult { path, report })
}

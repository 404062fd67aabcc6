//! Basic well-formedness checks.
//!
//! Every check runs regardless of the others. Braces are counted, not
//! matched, and environments are compared by per-name totals, so a
//! passing report does not guarantee the document compiles.

use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static BEGIN_ENV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\begin\{([^}]+)\}").expect("valid regex"));
static END_ENV: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\end\{([^}]+)\}").expect("valid regex"));
static REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\ref\{([^}]+)\}").expect("valid regex"));
static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\label\{([^}]+)\}").expect("valid regex"));

/// A single problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingDocumentClass,
    MissingBeginDocument,
    MissingEndDocument,
    UnbalancedBraces { open: usize, close: usize },
    UnmatchedEnvironment { name: String, begins: usize, ends: usize },
    UndefinedReferences(Vec<String>),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingDocumentClass => {
                f.write_str("Missing \\documentclass declaration")
            }
            ValidationIssue::MissingBeginDocument => f.write_str("Missing \\begin{document}"),
            ValidationIssue::MissingEndDocument => f.write_str("Missing \\end{document}"),
            ValidationIssue::UnbalancedBraces { open, close } => {
                write!(f, "Unbalanced braces: {} opening, {} closing", open, close)
            }
            ValidationIssue::UnmatchedEnvironment { name, begins, ends } => {
                write!(
                    f,
                    "Unmatched environment: {} ({} begin, {} end)",
                    name, begins, ends
                )
            }
            ValidationIssue::UndefinedReferences(names) => {
                write!(f, "Undefined references: {}", names.join(", "))
            }
        }
    }
}

/// Issues found in a document, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.issues.iter().map(|i| format!("- {}", i)).collect();
        f.write_str(&lines.join("\n"))
    }
}

fn captures<'a>(pattern: &Regex, content: &'a str) -> Vec<&'a str> {
    pattern
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

fn environment_issues(content: &str) -> Vec<ValidationIssue> {
    let begins = captures(&BEGIN_ENV, content);
    let ends = captures(&END_ENV, content);

    let mut seen = BTreeSet::new();
    let mut issues = Vec::new();

    for name in begins.iter().chain(ends.iter()) {
        if !seen.insert(*name) {
            continue;
        }
        let begin_count = begins.iter().filter(|n| *n == name).count();
        let end_count = ends.iter().filter(|n| *n == name).count();
        if begin_count != end_count {
            issues.push(ValidationIssue::UnmatchedEnvironment {
                name: name.to_string(),
                begins: begin_count,
                ends: end_count,
            });
        }
    }

    issues
}

/// Run all checks over a document.
pub fn validate(content: &str) -> ValidationReport {
    let mut issues = Vec::new();

    if !content.contains("\\documentclass") {
        issues.push(ValidationIssue::MissingDocumentClass);
    }
    if !content.contains("\\begin{document}") {
        issues.push(ValidationIssue::MissingBeginDocument);
    }
    if !content.contains("\\end{document}") {
        issues.push(ValidationIssue::MissingEndDocument);
    }

    let open = content.matches('{').count();
    let close = content.matches('}').count();
    if open != close {
        issues.push(ValidationIssue::UnbalancedBraces { open, close });
    }

    issues.extend(environment_issues(content));

    let labels: BTreeSet<&str> = captures(&LABEL, content).into_iter().collect();
    let undefined: BTreeSet<&str> = captures(&REF, content)
        .into_iter()
        .filter(|name| !labels.contains(name))
        .collect();
    if !undefined.is_empty() {
        issues.push(ValidationIssue::UndefinedReferences(
            undefined.into_iter().map(str::to_string).collect(),
        ));
    }

    ValidationReport { issues }
}

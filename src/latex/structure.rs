//! Outline extraction from LaTeX source.
//!
//! This is pattern matching, not parsing. Captures stop at the first `}`,
//! so `\title{A {B} C}` yields `A {B`. The outline lists every match of
//! the highest-priority sectioning command before any match of the next
//! one, rather than following document order.

use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static DOCUMENT_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\documentclass(?:\[[^\]]*\])?\{([^}]+)\}").expect("valid regex")
});
static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\title\{([^}]+)\}").expect("valid regex"));
static AUTHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\author\{([^}]+)\}").expect("valid regex"));
static USEPACKAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\usepackage(?:\[[^\]]*\])?\{([^}]+)\}").expect("valid regex")
});

static SECTIONS: Lazy<Vec<(SectionLevel, Regex)>> = Lazy::new(|| {
    SectionLevel::ALL
        .iter()
        .map(|level| {
            let pattern = format!(r"\\{}\{{([^}}]+)\}}", level.command());
            (*level, Regex::new(&pattern).expect("valid regex"))
        })
        .collect()
});

/// Sectioning command, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SectionLevel {
    Part,
    Chapter,
    Section,
    Subsection,
    Subsubsection,
    Paragraph,
    Subparagraph,
}

impl SectionLevel {
    pub const ALL: [SectionLevel; 7] = [
        SectionLevel::Part,
        SectionLevel::Chapter,
        SectionLevel::Section,
        SectionLevel::Subsection,
        SectionLevel::Subsubsection,
        SectionLevel::Paragraph,
        SectionLevel::Subparagraph,
    ];

    /// The LaTeX command name without the backslash.
    pub fn command(&self) -> &'static str {
        match self {
            SectionLevel::Part => "part",
            SectionLevel::Chapter => "chapter",
            SectionLevel::Section => "section",
            SectionLevel::Subsection => "subsection",
            SectionLevel::Subsubsection => "subsubsection",
            SectionLevel::Paragraph => "paragraph",
            SectionLevel::Subparagraph => "subparagraph",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionLevel::Part => "Part",
            SectionLevel::Chapter => "Chapter",
            SectionLevel::Section => "Section",
            SectionLevel::Subsection => "Subsection",
            SectionLevel::Subsubsection => "Subsubsection",
            SectionLevel::Paragraph => "Paragraph",
            SectionLevel::Subparagraph => "Subparagraph",
        }
    }
}

impl fmt::Display for SectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One heading in the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub level: SectionLevel,
    pub heading: String,
}

/// Everything extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureReport {
    pub document_class: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    /// Headings grouped by level, see the module docs.
    pub outline: Vec<OutlineEntry>,
    pub packages: BTreeSet<String>,
}

fn first_capture(pattern: &Regex, content: &str) -> Option<String> {
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Scan a document for its class, metadata, headings and packages.
pub fn analyze(content: &str) -> StructureReport {
    let outline = SECTIONS
        .iter()
        .flat_map(|(level, pattern)| {
            pattern.captures_iter(content).map(move |caps| OutlineEntry {
                level: *level,
                heading: caps[1].to_string(),
            })
        })
        .collect();

    let packages = USEPACKAGE
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect();

    StructureReport {
        document_class: first_capture(&DOCUMENT_CLASS, content),
        title: first_capture(&TITLE, content),
        author: first_capture(&AUTHOR, content),
        outline,
        packages,
    }
}

impl fmt::Display for StructureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();

        if let Some(class) = &self.document_class {
            lines.push(format!("Document class: {}", class));
        }
        if let Some(title) = &self.title {
            lines.push(format!("Title: {}", title));
        }
        if let Some(author) = &self.author {
            lines.push(format!("Author: {}", author));
        }

        lines.push("\nDocument structure:".to_string());
        for entry in &self.outline {
            lines.push(format!("  {}: {}", entry.level, entry.heading));
        }

        if !self.packages.is_empty() {
            let packages: Vec<&str> = self.packages.iter().map(String::as_str).collect();
            lines.push(format!("\nPackages used: {}", packages.join(", ")));
        }

        f.write_str(&lines.join("\n"))
    }
}

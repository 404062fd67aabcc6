//! LaTeX text processing: templating, editing, structure and validation.
//!
//! Everything here operates on in-memory text; file access lives in the
//! tool layer.

pub mod editor;
pub mod structure;
pub mod template;
pub mod validate;

pub use editor::{apply, EditOperation, EditRequest};
pub use structure::{analyze, OutlineEntry, SectionLevel, StructureReport};
pub use template::{build, DocumentType, TemplateSpec};
pub use validate::{validate, ValidationIssue, ValidationReport};

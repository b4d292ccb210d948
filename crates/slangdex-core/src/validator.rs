//! Dataset validator - checks every entry and reports every violation
//!
//! The validator is strict where the cleaner is permissive: one bad entry
//! fails the whole dataset. It accumulates all diagnostics rather than
//! stopping at the first error, addressing entries by their position in the
//! input array (`#0`, `#1`, …).
//!
//! # Checks per entry
//!
//! 1. **Structure** - the element is a non-null object or array. An array
//!    passes, then fails the term and meaning checks and warns about each
//!    index as an unexpected key.
//! 2. **Term** - non-empty string, trimmed, single-line, at most 80 chars
//! 3. **Uniqueness** - no earlier entry with the same [`validation_key`]
//! 4. **Meaning** - non-empty string, trimmed length within 3..=300
//! 5. **Optional fields** - `example` and `source` are strings when present
//! 6. **Unexpected keys** - warning only, never fails the dataset

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::dataset::load_dataset;
use crate::normalizer::{text_len, trim_space, validation_key};
use crate::{RawEntry, Result, MEANING_MAX_CHARS, MEANING_MIN_CHARS, TERM_MAX_CHARS};

// ── Validation Result Types ───────────────────────────────

/// Result of validating a dataset - accumulates all diagnostics
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ValidationReport {
    /// Number of elements in the input array
    pub entries: usize,
    /// Errors and warnings in input order
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new(entries: usize) -> Self {
        Self {
            entries,
            diagnostics: Vec::new(),
        }
    }

    /// Returns true if no errors were found (warnings are OK)
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Returns only error-level diagnostics
    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect()
    }

    /// Returns only warning-level diagnostics
    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.errors().len()
    }

    /// Diagnostics attached to one entry
    pub fn for_index(&self, index: usize) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.index == index).collect()
    }

    fn add_error(&mut self, index: usize, kind: DiagnosticKind, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            kind,
            index,
            message,
            related: None,
        });
    }

    fn add_duplicate(&mut self, index: usize, first: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            kind: DiagnosticKind::Duplicate,
            index,
            message,
            related: Some(first),
        });
    }

    fn add_warning(&mut self, index: usize, kind: DiagnosticKind, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            kind,
            index,
            message,
            related: None,
        });
    }
}

/// A single validation diagnostic
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// Position of the offending entry in the input array
    pub index: usize,
    pub message: String,
    /// Earlier entry this one collides with (duplicates only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<usize>,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}: {}", self.index, self.message)
    }
}

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Category of validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    Structure,
    Term,
    Duplicate,
    Meaning,
    OptionalField,
    UnexpectedKey,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DiagnosticKind::Structure => write!(f, "structure"),
            DiagnosticKind::Term => write!(f, "term"),
            DiagnosticKind::Duplicate => write!(f, "duplicate"),
            DiagnosticKind::Meaning => write!(f, "meaning"),
            DiagnosticKind::OptionalField => write!(f, "optional_field"),
            DiagnosticKind::UnexpectedKey => write!(f, "unexpected_key"),
        }
    }
}

// ── Public API ────────────────────────────────────────────

/// Validate a dataset file. Fails only on the fatal pre-checks
/// (unreadable, invalid JSON, not an array).
pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let values = load_dataset(path)?;
    Ok(validate_entries(&values))
}

/// Validate parsed dataset elements.
///
/// Does not stop at first error - reports everything found.
pub fn validate_entries(values: &[Value]) -> ValidationReport {
    let mut report = ValidationReport::new(values.len());
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();

    for (index, value) in values.iter().enumerate() {
        let Some(raw) = RawEntry::from_value(value) else {
            report.add_error(index, DiagnosticKind::Structure, "item must be an object".into());
            continue;
        };

        verify_term(index, raw.term, &mut seen, &mut report);
        verify_meaning(index, raw.meaning, &mut report);
        verify_optional_string(index, "example", raw.example, &mut report);
        verify_optional_string(index, "source", raw.source, &mut report);

        for key in &raw.unexpected {
            report.add_warning(
                index,
                DiagnosticKind::UnexpectedKey,
                format!("unexpected key \"{key}\" (will be ignored by the cleaner)"),
            );
        }
    }

    log::info!(
        "validated {} entries: {} error(s), {} warning(s)",
        report.entries,
        report.error_count(),
        report.warnings().len()
    );
    report
}

// ── Field checks ──────────────────────────────────────────

fn verify_term(
    index: usize,
    term: Option<&Value>,
    seen: &mut BTreeMap<String, usize>,
    report: &mut ValidationReport,
) {
    let Some(term) = term.and_then(Value::as_str).filter(|t| !trim_space(t).is_empty()) else {
        report.add_error(index, DiagnosticKind::Term, "\"term\" must be a non-empty string".into());
        return;
    };

    if term != trim_space(term) {
        report.add_error(index, DiagnosticKind::Term, "\"term\" has leading/trailing spaces".into());
    }
    if term.contains('\n') {
        report.add_error(index, DiagnosticKind::Term, "\"term\" must not contain newlines".into());
    }
    let len = text_len(term);
    if len > TERM_MAX_CHARS {
        report.add_error(
            index,
            DiagnosticKind::Term,
            format!("\"term\" too long ({len} chars > {TERM_MAX_CHARS})"),
        );
    }

    let key = validation_key(term);
    match seen.get(&key) {
        Some(&first) => report.add_duplicate(
            index,
            first,
            format!("duplicate \"term\" (case-insensitive) with #{first} → \"{term}\""),
        ),
        None => {
            seen.insert(key, index);
        }
    }
}

fn verify_meaning(index: usize, meaning: Option<&Value>, report: &mut ValidationReport) {
    let Some(meaning) = meaning.and_then(Value::as_str).map(trim_space).filter(|m| !m.is_empty())
    else {
        report.add_error(
            index,
            DiagnosticKind::Meaning,
            "\"meaning\" must be a non-empty string".into(),
        );
        return;
    };

    let len = text_len(meaning);
    if len < MEANING_MIN_CHARS {
        report.add_error(
            index,
            DiagnosticKind::Meaning,
            format!("\"meaning\" too short ({len} chars < {MEANING_MIN_CHARS})"),
        );
    }
    if len > MEANING_MAX_CHARS {
        report.add_error(
            index,
            DiagnosticKind::Meaning,
            format!("\"meaning\" too long ({len} chars > {MEANING_MAX_CHARS})"),
        );
    }
}

/// Absent and null are both "not provided"; anything else must be a string
fn verify_optional_string(
    index: usize,
    field: &str,
    value: Option<&Value>,
    report: &mut ValidationReport,
) {
    match value {
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(_) => report.add_error(
            index,
            DiagnosticKind::OptionalField,
            format!("\"{field}\" must be a string if provided"),
        ),
    }
}

// ── Tests ─────────────────────────────────────────────────

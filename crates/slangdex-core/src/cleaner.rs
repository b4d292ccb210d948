//! Dataset cleaner - normalize, de-duplicate, sort, re-serialize
//!
//! The cleaner is permissive: malformed elements are dropped without a
//! diagnostic so that a usable artifact is always produced. Diagnosing bad
//! data is the validator's job.
//!
//! # Pipeline
//!
//! `[Value] → RawEntry → clean fields → drop empty → de-duplicate by term_key
//! → sort (English collation) → pretty JSON`
//!
//! # Guarantees
//!
//! - **Unique**: no two output entries share a [`term_key`]
//! - **Idempotent**: cleaning the output again yields identical bytes
//! - **No partial output**: nothing is written unless the input loaded

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::collation::EnglishCollator;
use crate::config::CleanConfig;
use crate::dataset::load_dataset;
use crate::normalizer::{clean_field, is_falsy, term_key, text_len};
use crate::{Entry, Error, RawEntry, Result};

// ── Result Types ──────────────────────────────────────────

/// Cleaned entries plus the bookkeeping of how they were obtained.
///
/// `input_count == kept + dropped + superseded`
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutcome {
    /// Surviving entries in output order
    pub entries: Vec<Entry>,
    pub input_count: usize,
    /// One per distinct term key
    pub kept: usize,
    /// Non-objects and entries with an empty term or meaning
    pub dropped: usize,
    /// Duplicates that lost the tie-break (or were beaten by a later one)
    pub superseded: usize,
}

/// What a completed `run_clean` did on disk
#[derive(Debug, Clone, PartialEq)]
pub struct CleanSummary {
    pub input_count: usize,
    pub kept: usize,
    pub dropped: usize,
    pub superseded: usize,
    pub output: PathBuf,
    /// Destination of the mapping file, if one was found and copied
    pub mapping_copied: Option<PathBuf>,
}

// ── Public API ────────────────────────────────────────────

/// Clean a parsed dataset. Pure: no I/O.
pub fn clean_entries(values: &[Value]) -> CleanOutcome {
    let mut slots: BTreeMap<String, usize> = BTreeMap::new();
    let mut survivors: Vec<Entry> = Vec::new();
    let mut dropped = 0;
    let mut superseded = 0;

    for (index, value) in values.iter().enumerate() {
        let Some(raw) = RawEntry::from_value(value) else {
            log::debug!("#{index}: dropped, not an object or array");
            dropped += 1;
            continue;
        };

        let candidate = clean_raw_entry(&raw);
        if candidate.term.is_empty() || candidate.meaning.is_empty() {
            log::debug!("#{index}: dropped, empty term or meaning");
            dropped += 1;
            continue;
        }

        let key = term_key(&candidate.term);
        match slots.get(&key) {
            Some(&slot) => {
                superseded += 1;
                if prefers(&candidate, &survivors[slot]) {
                    log::debug!(
                        "#{index}: \"{}\" replaces \"{}\"",
                        candidate.term,
                        survivors[slot].term
                    );
                    survivors[slot] = candidate;
                } else {
                    log::debug!("#{index}: \"{}\" superseded by earlier entry", candidate.term);
                }
            }
            None => {
                slots.insert(key, survivors.len());
                survivors.push(candidate);
            }
        }
    }

    sort_entries(&mut survivors);

    CleanOutcome {
        kept: survivors.len(),
        entries: survivors,
        input_count: values.len(),
        dropped,
        superseded,
    }
}

/// Build a cleaned entry from the raw fields. Unknown keys are discarded.
///
/// A falsy `example` or `source` (`0`, `false`, `""`) reads as empty rather
/// than as its text.
pub fn clean_raw_entry(raw: &RawEntry<'_>) -> Entry {
    Entry {
        term: clean_field(raw.term),
        meaning: clean_field(raw.meaning),
        example: clean_field(raw.example.filter(|v| !is_falsy(v))),
        source: clean_field(raw.source.filter(|v| !is_falsy(v))),
    }
}

/// Whether `candidate` should replace `existing` for the same term key.
///
/// Longer meaning wins; on a tie, longer example wins; on a full tie the
/// existing (first-seen) entry stays.
pub fn prefers(candidate: &Entry, existing: &Entry) -> bool {
    let (cand_meaning, prev_meaning) = (text_len(&candidate.meaning), text_len(&existing.meaning));
    cand_meaning > prev_meaning
        || (cand_meaning == prev_meaning && text_len(&candidate.example) > text_len(&existing.example))
}

/// Sort by term with English collation. Stable, so collation-equal terms
/// keep first-seen order.
pub fn sort_entries(entries: &mut [Entry]) {
    let collator = EnglishCollator::new();
    entries.sort_by(|a, b| collator.compare(&a.term, &b.term));
}

/// Pretty-printed JSON array, two-space indent, no trailing newline
pub fn render_entries(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Load, clean and write the dataset described by `config`
pub fn run_clean(config: &CleanConfig) -> Result<CleanSummary> {
    let values = load_dataset(&config.input)?;
    let outcome = clean_entries(&values);
    let rendered = render_entries(&outcome.entries)?;

    fs::create_dir_all(&config.out_dir).map_err(|source| Error::CreateDir {
        path: config.out_dir.clone(),
        source,
    })?;

    let output = config.output_path();
    fs::write(&output, rendered).map_err(|source| Error::Write {
        path: output.clone(),
        source,
    })?;
    log::info!(
        "wrote {} entries to {} ({} dropped, {} superseded)",
        outcome.kept,
        output.display(),
        outcome.dropped,
        outcome.superseded
    );

    let mapping_copied = copy_mapping(config)?;

    Ok(CleanSummary {
        input_count: outcome.input_count,
        kept: outcome.kept,
        dropped: outcome.dropped,
        superseded: outcome.superseded,
        output,
        mapping_copied,
    })
}

fn copy_mapping(config: &CleanConfig) -> Result<Option<PathBuf>> {
    let from = config.mapping_source();
    if !from.is_file() {
        log::debug!("no mapping file at {}", from.display());
        return Ok(None);
    }

    let to = config.mapping_destination();
    fs::copy(&from, &to).map_err(|source| Error::CopyMapping {
        from: from.clone(),
        to: to.clone(),
        source,
    })?;
    log::info!("copied {} to {}", from.display(), to.display());
    Ok(Some(to))
}

// ── Tests ─────────────────────────────────────────────────

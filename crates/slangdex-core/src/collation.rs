//! English locale collation for ordering cleaned terms
//!
//! Raw codepoint order puts every uppercase letter before every lowercase one
//! and accented letters after `z`. Readers expect `Apple, banana, café, zed`,
//! which is what the ICU collator for `en` produces.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

/// Compares strings the way an English dictionary orders headwords
pub struct EnglishCollator {
    collator: Option<Collator>,
}

impl EnglishCollator {
    /// Load the `en` collation tables compiled into the binary.
    ///
    /// Should the tables fail to load, comparison falls back to codepoint
    /// order of the lowercased strings.
    pub fn new() -> Self {
        let collator = match Collator::try_new(&locale!("en").into(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                log::warn!("English collation unavailable, using codepoint order: {err}");
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}

impl Default for EnglishCollator {
    fn default() -> Self {
        Self::new()
    }
}

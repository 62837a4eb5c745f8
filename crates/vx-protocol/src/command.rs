use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fixed interpretation locale. The keyword tables are Spanish-only.
pub const LOCALE: &str = "es";

/// A single free-form command, as transcribed or typed by the operator.
///
/// Holds both the raw text (needed for capitalization-sensitive matching,
/// e.g. "Juan García") and the normalized form every keyword table and
/// regex runs against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    /// Original input, untouched.
    pub raw: String,
    /// Lowercased, trimmed, whitespace-collapsed, diacritic-folded.
    pub normalized: String,
}

impl Command {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    /// True when nothing remains after normalization.
    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn locale(&self) -> &'static str {
        LOCALE
    }
}

/// Normalize command text: lowercase, fold diacritics (NFD, strip combining
/// marks), collapse runs of whitespace, trim.
///
/// Voice transcriptions arrive with inconsistent accents ("últimos" vs
/// "ultimos"); folding lets the unaccented keyword tables match both.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let folded: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

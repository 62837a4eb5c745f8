//! Client detection — two strategies merged without duplicates.
//!
//! Strategy A scans keyword patterns ("cliente <token>", "usuario
//! <token>", …, then the generic "de"/"por") in priority order and takes
//! the first plausible username candidate. The directory confirms it
//! (confidence 1.0) or it stays a potential at 0.6.
//!
//! Strategy B scans the raw (capitalization-preserving) text for
//! "First Last" pairs. An exact directory match scores 0.95; a
//! first-name-only match is accepted at 0.7 only when the directory holds
//! exactly one entry with that first name.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use vx_catalog::{CatalogResult, ClientDirectory};
use vx_protocol::Command;
use vx_protocol::entities::{ClientMatch, ClientMatchKind};

use crate::lexicon::Lexicon;

const CONFIDENCE_USERNAME: f64 = 1.0;
const CONFIDENCE_FULL_NAME: f64 = 0.95;
const CONFIDENCE_FIRST_NAME: f64 = 0.7;
const CONFIDENCE_POTENTIAL: f64 = 0.6;

// Priority order: the specific nouns first, the generic prepositions last.
static USERNAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["cliente", "usuario", "comprador", "de", "por"]
        .iter()
        .map(|kw| Regex::new(&format!(r"\b{kw}\s+([a-z0-9._-]+)")).unwrap())
        .collect()
});

static RE_FULL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-ZÁÉÍÓÚÑ][a-záéíóúñ]+)\s+([A-ZÁÉÍÓÚÑ][a-záéíóúñ]+)\b").unwrap()
});

pub fn resolve_clients(
    command: &Command,
    directory: &dyn ClientDirectory,
    lexicon: &Lexicon,
) -> CatalogResult<Vec<ClientMatch>> {
    let mut matches: Vec<ClientMatch> = Vec::new();

    // ── Strategy A: keyword pattern + username lookup ─────────
    if let Some(candidate) = username_candidate(&command.normalized, lexicon) {
        match directory.find_by_username(candidate)? {
            Some(record) => {
                debug!(username = %record.username, "client candidate confirmed");
                matches.push(ClientMatch {
                    id: Some(record.id),
                    username: record.username.clone(),
                    full_name: record.full_name(),
                    matched_as: ClientMatchKind::Username,
                    confidence: CONFIDENCE_USERNAME,
                });
            }
            None => {
                debug!(candidate, "client candidate not in directory, kept as potential");
                matches.push(ClientMatch {
                    id: None,
                    username: candidate.to_string(),
                    full_name: candidate.to_string(),
                    matched_as: ClientMatchKind::PotentialUsername,
                    confidence: CONFIDENCE_POTENTIAL,
                });
            }
        }
    }

    // ── Strategy B: capitalized "First Last" pairs ────────────
    for caps in RE_FULL_NAME.captures_iter(&command.raw) {
        let first = &caps[1];
        let last = &caps[2];

        let exact = directory.find_by_full_name(first, last)?;
        if !exact.is_empty() {
            for record in exact {
                if !matches.iter().any(|m| m.id == Some(record.id)) {
                    matches.push(ClientMatch {
                        id: Some(record.id),
                        username: record.username.clone(),
                        full_name: format!("{first} {last}"),
                        matched_as: ClientMatchKind::FullName,
                        confidence: CONFIDENCE_FULL_NAME,
                    });
                }
            }
            continue;
        }

        // Unique first name only — anything else is too ambiguous.
        let by_first = directory.find_by_first_name(first)?;
        if by_first.len() == 1 {
            let record = &by_first[0];
            if !matches.iter().any(|m| m.id == Some(record.id)) {
                matches.push(ClientMatch {
                    id: Some(record.id),
                    username: record.username.clone(),
                    full_name: record.full_name(),
                    matched_as: ClientMatchKind::FirstNameOnly,
                    confidence: CONFIDENCE_FIRST_NAME,
                });
            }
        }
    }

    Ok(matches)
}

/// First token captured by the patterns, skipping stop tokens. One
/// candidate at most — collecting every "de <token>" hit floods the
/// result with articles and month names.
fn username_candidate<'t>(text: &'t str, lexicon: &Lexicon) -> Option<&'t str> {
    for pattern in USERNAME_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let token = caps.get(1).map(|m| m.as_str())?;
            if lexicon.client_stop_tokens.iter().any(|stop| stop == token) {
                continue;
            }
            return Some(token);
        }
    }
    None
}

//! Fallback report type classifier — keyword-phrase scoring over the
//! catalog.
//!
//! Used when the granular interpretation is not trusted. Each matched
//! trigger phrase contributes its word count, so longer, more specific
//! phrases outweigh generic single words.

use tracing::debug;
use vx_protocol::parse::Alternative;
use vx_protocol::report::ReportType;

use crate::catalog::ReportCatalog;

/// Confidence assigned when nothing matched and the default kicks in.
const DEFAULT_CONFIDENCE: f64 = 0.3;
/// A best score of 3 matched words already counts as full confidence.
const SCORE_NORMALIZER: f64 = 3.0;
const MAX_ALTERNATIVES: usize = 3;

#[derive(Debug, Clone)]
pub struct Classification {
    pub report_type: ReportType,
    pub confidence: f64,
    /// True when a trigger phrase matched; false for the default.
    pub matched: bool,
    pub alternatives: Vec<Alternative>,
}

/// Score every catalog entry against the normalized command. Highest
/// nonzero score wins; ties resolve to catalog declaration order; zero
/// everywhere falls back to the generic sales report.
pub fn classify(text: &str, catalog: &ReportCatalog) -> Classification {
    let mut best: Option<(u32, ReportType)> = None;
    let mut scored: Vec<Alternative> = Vec::new();

    for definition in catalog.definitions() {
        let score: u32 = definition
            .keywords
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .map(|keyword| keyword.split_whitespace().count() as u32)
            .sum();

        if score == 0 {
            continue;
        }
        scored.push(Alternative {
            report_type: definition.report_type,
            name: definition.name.to_string(),
            score,
        });
        if best.map(|(s, _)| score > s).unwrap_or(true) {
            best = Some((score, definition.report_type));
        }
    }

    match best {
        Some((score, report_type)) => {
            let mut alternatives = scored;
            alternatives.sort_by(|a, b| b.score.cmp(&a.score));
            alternatives.retain(|alt| alt.report_type != report_type);
            alternatives.truncate(MAX_ALTERNATIVES);

            let confidence = (f64::from(score) / SCORE_NORMALIZER).min(1.0);
            debug!(%report_type, score, confidence, "classifier matched");
            Classification {
                report_type,
                confidence,
                matched: true,
                alternatives,
            }
        }
        None => {
            debug!("classifier found no trigger phrases, defaulting");
            Classification {
                report_type: ReportType::VentasBasico,
                confidence: DEFAULT_CONFIDENCE,
                matched: false,
                alternatives: Vec::new(),
            }
        }
    }
}

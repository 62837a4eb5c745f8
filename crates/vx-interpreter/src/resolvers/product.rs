//! Product detection — sliding word windows cross-referenced against the
//! catalog.

use std::collections::HashSet;

use tracing::debug;
use vx_catalog::{CatalogResult, ProductCatalog};
use vx_protocol::entities::ProductMatch;

use crate::lexicon::Lexicon;

const CONFIDENCE: f64 = 0.8;

/// Slide 4-, 3-, 2- and 1-word windows over the text and collect every
/// distinct product whose name contains the window phrase. Windows made
/// entirely of stop words (or shorter than two characters) are skipped —
/// single articles would otherwise substring-match half the catalog.
pub fn resolve_products(
    text: &str,
    catalog: &dyn ProductCatalog,
    lexicon: &Lexicon,
) -> CatalogResult<Vec<ProductMatch>> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut seen: HashSet<u64> = HashSet::new();
    let mut matches = Vec::new();

    for start in 0..words.len() {
        for width in (1..=4usize).rev() {
            let end = start + width;
            if end > words.len() {
                continue;
            }
            let window = &words[start..end];
            if window
                .iter()
                .all(|w| lexicon.stop_words.iter().any(|s| s == w))
            {
                continue;
            }
            let phrase = window.join(" ");
            if phrase.len() < 2 {
                continue;
            }

            for record in catalog.find_by_name_substring(&phrase)? {
                if seen.insert(record.id) {
                    debug!(product = %record.name, %phrase, "product matched");
                    matches.push(ProductMatch {
                        id: record.id,
                        name: record.name,
                        matched_phrase: phrase.clone(),
                        confidence: CONFIDENCE,
                    });
                }
            }
        }
    }

    Ok(matches)
}

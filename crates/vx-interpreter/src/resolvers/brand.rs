//! Brand and color detection — keyword-set membership, first match wins.

use vx_protocol::entities::{BrandMatch, ColorMatch};

use crate::lexicon::{Lexicon, first_word_match};

const BRAND_CONFIDENCE: f64 = 0.85;
const COLOR_CONFIDENCE: f64 = 0.8;

/// First brand in table order that appears whole-word, upper-cased.
/// Whole-word matters: short brand names ("ge", "lg") show up inside
/// ordinary Spanish words.
pub fn resolve_brand(text: &str, lexicon: &Lexicon) -> Option<BrandMatch> {
    first_word_match(text, &lexicon.brands).map(|brand| BrandMatch {
        name: brand.to_uppercase(),
        confidence: BRAND_CONFIDENCE,
    })
}

/// First color in table order that appears whole-word, kept lower-case.
pub fn resolve_color(text: &str, lexicon: &Lexicon) -> Option<ColorMatch> {
    first_word_match(text, &lexicon.colors).map(|color| ColorMatch {
        name: color.to_string(),
        confidence: COLOR_CONFIDENCE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_is_uppercased() {
        let lexicon = Lexicon::builtin_es();
        let brand = resolve_brand("refrigerador lg no frost", &lexicon).unwrap();
        assert_eq!(brand.name, "LG");
    }

    #[test]
    fn short_brand_needs_word_boundary() {
        let lexicon = Lexicon::builtin_es();
        // "ge" hides inside "generame"; must not match.
        assert!(resolve_brand("generame un reporte", &lexicon).is_none());
        assert_eq!(resolve_brand("estufa ge nueva", &lexicon).unwrap().name, "GE");
    }

    #[test]
    fn first_brand_in_table_order_wins() {
        let lexicon = Lexicon::builtin_es();
        let brand = resolve_brand("comparar samsung y lg", &lexicon).unwrap();
        // "lg" precedes "samsung" in the table.
        assert_eq!(brand.name, "LG");
    }

    #[test]
    fn color_detection() {
        let lexicon = Lexicon::builtin_es();
        let color = resolve_color("lavadora blanca en stock", &lexicon).unwrap();
        assert_eq!(color.name, "blanca");
    }

    #[test]
    fn no_match_is_none() {
        let lexicon = Lexicon::builtin_es();
        assert!(resolve_brand("lavadora barata", &lexicon).is_none());
        assert!(resolve_color("lavadora barata", &lexicon).is_none());
    }
}

//! Price range detection.
//!
//! Rule order: explicit "entre X y Y", then independent upper and lower
//! bounds, then qualitative keywords. Numeric bounds always win over the
//! qualitative hint — the hint is only emitted when no number matched.
//! A number directly followed by a quantity unit ("mas de 5 unidades")
//! belongs to the quantity resolver and is skipped here.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use vx_protocol::entities::{PriceHint, PriceRange};

use crate::lexicon::{Lexicon, any_word_match, first_word_match};

const NUMERIC_CONFIDENCE: f64 = 0.9;
const HINT_CONFIDENCE: f64 = 0.6;

static RE_BETWEEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bentre\s+\$?(\d+(?:\.\d+)?)\s+y\s+\$?(\d+(?:\.\d+)?)").unwrap()
});

static RE_MAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:menos\s+(?:de|que)|menor(?:es)?\s+(?:de|a|que)|inferior(?:es)?\s+(?:de|a|que)|bajo|hasta|maximo)\s+\$?(\d+(?:\.\d+)?)",
    )
    .unwrap()
});

static RE_MIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:mas\s+(?:de|que)|mayor(?:es)?\s+(?:de|a|que)|superior(?:es)?\s+(?:de|a|que)|sobre|desde|minimo)\s+\$?(\d+(?:\.\d+)?)",
    )
    .unwrap()
});

pub fn resolve_price(text: &str, lexicon: &Lexicon) -> Option<PriceRange> {
    // (a) "entre X y Y"
    if let Some(caps) = first_price_match(&RE_BETWEEN, text, 2, lexicon) {
        let min = caps[1].parse::<f64>().ok()?;
        let max = caps[2].parse::<f64>().ok()?;
        return Some(PriceRange {
            min: Some(min),
            max: Some(max),
            hint: None,
            matched: caps[0].to_string(),
            confidence: NUMERIC_CONFIDENCE,
        });
    }

    // (b) + (c): bounds per side, independently
    let mut min = None;
    let mut max = None;
    let mut matched_parts = Vec::new();

    if let Some(caps) = first_price_match(&RE_MAX, text, 1, lexicon) {
        max = caps[1].parse::<f64>().ok();
        matched_parts.push(caps[0].to_string());
    }
    if let Some(caps) = first_price_match(&RE_MIN, text, 1, lexicon) {
        min = caps[1].parse::<f64>().ok();
        matched_parts.push(caps[0].to_string());
    }

    if min.is_some() || max.is_some() {
        return Some(PriceRange {
            min,
            max,
            hint: None,
            matched: matched_parts.join("; "),
            confidence: NUMERIC_CONFIDENCE,
        });
    }

    // (d) qualitative hint, cheap before expensive
    if let Some(keyword) = first_word_match(text, &lexicon.cheap_keywords) {
        return Some(PriceRange {
            min: None,
            max: None,
            hint: Some(PriceHint::Economy),
            matched: keyword.to_string(),
            confidence: HINT_CONFIDENCE,
        });
    }
    if let Some(keyword) = first_word_match(text, &lexicon.expensive_keywords) {
        return Some(PriceRange {
            min: None,
            max: None,
            hint: Some(PriceHint::Premium),
            matched: keyword.to_string(),
            confidence: HINT_CONFIDENCE,
        });
    }

    None
}

/// First match whose trailing token is not a quantity unit. `value_group`
/// is the capture holding the last number of the pattern.
fn first_price_match<'t>(
    re: &Regex,
    text: &'t str,
    value_group: usize,
    lexicon: &Lexicon,
) -> Option<Captures<'t>> {
    re.captures_iter(text).find(|caps| {
        let end = caps.get(value_group).map(|m| m.end()).unwrap_or(0);
        let next_token = text[end..].split_whitespace().next();
        !next_token
            .map(|token| any_word_match(token, &lexicon.quantity_units))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::builtin_es()
    }

    #[test]
    fn between_range() {
        let range = resolve_price("productos entre 100 y 500", &lexicon()).unwrap();
        assert_eq!(range.min, Some(100.0));
        assert_eq!(range.max, Some(500.0));
        assert!(range.hint.is_none());
    }

    #[test]
    fn between_with_dollar_signs_and_decimals() {
        let range = resolve_price("entre $99.50 y $150.75", &lexicon()).unwrap();
        assert_eq!(range.min, Some(99.5));
        assert_eq!(range.max, Some(150.75));
    }

    #[test]
    fn upper_bound_only() {
        let range = resolve_price("lavadoras de menos de 500", &lexicon()).unwrap();
        assert_eq!(range.max, Some(500.0));
        assert_eq!(range.min, None);
    }

    #[test]
    fn lower_bound_only() {
        let range = resolve_price("ventas de mas de 800", &lexicon()).unwrap();
        assert_eq!(range.min, Some(800.0));
        assert_eq!(range.max, None);
    }

    #[test]
    fn both_bounds_independently() {
        let range = resolve_price("desde 100 hasta 500", &lexicon()).unwrap();
        assert_eq!(range.min, Some(100.0));
        assert_eq!(range.max, Some(500.0));
    }

    #[test]
    fn numeric_beats_qualitative() {
        let range = resolve_price("barato entre 200 y 400", &lexicon()).unwrap();
        assert_eq!(range.min, Some(200.0));
        assert_eq!(range.max, Some(400.0));
        assert!(range.hint.is_none());
    }

    #[test]
    fn cheap_hint_without_numbers() {
        let range = resolve_price("laptops baratas", &lexicon()).unwrap();
        assert_eq!(range.hint, Some(PriceHint::Economy));
        assert!(range.min.is_none() && range.max.is_none());
    }

    #[test]
    fn cheap_wins_over_expensive_when_both_appear() {
        let range = resolve_price("algo barato pero no caro", &lexicon()).unwrap();
        assert_eq!(range.hint, Some(PriceHint::Economy));
    }

    #[test]
    fn quantity_units_are_not_prices() {
        assert!(resolve_price("mas de 5 unidades", &lexicon()).is_none());
        assert!(resolve_price("entre 2 y 10 productos", &lexicon()).is_none());
        // But a real price after a quantity still registers.
        let range = resolve_price("mas de 5 unidades de mas de 300", &lexicon()).unwrap();
        assert_eq!(range.min, Some(300.0));
    }

    #[test]
    fn nothing_matches() {
        assert!(resolve_price("reporte de ventas", &lexicon()).is_none());
    }
}

//! Quantity range detection ("más de 5 unidades", "entre 2 y 10 productos").

use std::sync::LazyLock;

use regex::Regex;
use vx_protocol::entities::QuantityRange;

const CONFIDENCE: f64 = 0.85;

static RE_MIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bmas de (\d+)\s+(?:unidades?|productos?|items?|articulos?)\b").unwrap()
});

static RE_BETWEEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bentre (\d+) y (\d+)\s+(?:unidades?|productos?|items?|articulos?)\b").unwrap()
});

/// Lower-bound rule first, then the explicit range; first match wins.
pub fn resolve_quantity(text: &str) -> Option<QuantityRange> {
    if let Some(caps) = RE_MIN.captures(text)
        && let Ok(min) = caps[1].parse::<u32>()
    {
        return Some(QuantityRange {
            min: Some(min),
            max: None,
            matched: caps[0].to_string(),
            confidence: CONFIDENCE,
        });
    }

    if let Some(caps) = RE_BETWEEN.captures(text)
        && let (Ok(min), Ok(max)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>())
    {
        return Some(QuantityRange {
            min: Some(min),
            max: Some(max),
            matched: caps[0].to_string(),
            confidence: CONFIDENCE,
        });
    }

    None
}

//! Size/capacity detection: numeric measure first, descriptive fallback.

use std::sync::LazyLock;

use regex::Regex;
use vx_protocol::entities::{SizeMatch, SizeSpec, SizeUnit};

use crate::lexicon::{Lexicon, contains_word};

const MEASURED_CONFIDENCE: f64 = 0.85;
const DESCRIPTIVE_CONFIDENCE: f64 = 0.7;

// Longer unit spellings first so the alternation never truncates them.
static RE_MEASURED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(\d+(?:\.\d+)?)\s*(kilogramos?|kilos?|kg|litros?|lts?|pulgadas?|btu|pies(?:\s+cubicos)?|l)\b",
    )
    .unwrap()
});

/// At most one size per command: a numeric "<N> <unit>" beats any
/// descriptive word.
pub fn resolve_size(text: &str, lexicon: &Lexicon) -> Option<SizeMatch> {
    if let Some(caps) = RE_MEASURED.captures(text)
        && let Ok(value) = caps[1].parse::<f64>()
    {
        return Some(SizeMatch {
            spec: SizeSpec::Measured {
                value,
                unit: unit_from_str(&caps[2]),
            },
            matched: caps[0].to_string(),
            confidence: MEASURED_CONFIDENCE,
        });
    }

    for (class, keywords) in &lexicon.size_classes {
        for keyword in keywords {
            if contains_word(text, keyword) {
                return Some(SizeMatch {
                    spec: SizeSpec::Descriptive { class: *class },
                    matched: keyword.clone(),
                    confidence: DESCRIPTIVE_CONFIDENCE,
                });
            }
        }
    }

    None
}

fn unit_from_str(unit: &str) -> SizeUnit {
    match unit {
        u if u.starts_with("kilo") || u == "kg" => SizeUnit::Kilograms,
        u if u.starts_with("pulgada") => SizeUnit::Inches,
        "btu" => SizeUnit::Btu,
        u if u.starts_with("pies") => SizeUnit::CubicFeet,
        _ => SizeUnit::Liters,
    }
}

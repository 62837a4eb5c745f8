//! Product feature detection. Returns every feature that matches.

use vx_protocol::entities::{Feature, FeatureMatch};

use crate::lexicon::{Lexicon, first_word_match};

const CONFIDENCE: f64 = 0.75;

/// All matching features, plus the synthetic energy-efficiency tag when
/// any energy keyword appears.
pub fn resolve_features(text: &str, lexicon: &Lexicon) -> Vec<FeatureMatch> {
    let mut matches = Vec::new();

    for (feature, keywords) in &lexicon.features {
        if let Some(keyword) = first_word_match(text, keywords) {
            matches.push(FeatureMatch {
                feature: *feature,
                matched: keyword.to_string(),
                confidence: CONFIDENCE,
            });
        }
    }

    if let Some(keyword) = first_word_match(text, &lexicon.energy_keywords) {
        matches.push(FeatureMatch {
            feature: Feature::EnergyEfficient,
            matched: keyword.to_string(),
            confidence: CONFIDENCE,
        });
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_features_collected() {
        let lexicon = Lexicon::builtin_es();
        let found = resolve_features("refrigerador no frost inverter smart", &lexicon);
        let tags: Vec<Feature> = found.iter().map(|f| f.feature).collect();
        assert_eq!(
            tags,
            vec![Feature::NoFrost, Feature::Inverter, Feature::Smart]
        );
    }

    #[test]
    fn energy_keyword_adds_synthetic_feature() {
        let lexicon = Lexicon::builtin_es();
        let found = resolve_features("aire de bajo consumo", &lexicon);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].feature, Feature::EnergyEfficient);
        assert_eq!(found[0].matched, "bajo consumo");
    }

    #[test]
    fn energy_combines_with_explicit_features() {
        let lexicon = Lexicon::builtin_es();
        let found = resolve_features("split inverter con ahorro de energia", &lexicon);
        let tags: Vec<Feature> = found.iter().map(|f| f.feature).collect();
        assert!(tags.contains(&Feature::Inverter));
        assert!(tags.contains(&Feature::EnergyEfficient));
    }

    #[test]
    fn no_features_is_empty() {
        let lexicon = Lexicon::builtin_es();
        assert!(resolve_features("lavadora barata", &lexicon).is_empty());
    }
}

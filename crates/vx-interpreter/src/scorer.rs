//! Additive confidence scoring for the report path.

use vx_protocol::entities::DetectedEntities;

pub const WEIGHT_REPORT_TYPE: f64 = 0.20;
pub const WEIGHT_CLIENTS: f64 = 0.25;
pub const WEIGHT_PRODUCTS: f64 = 0.15;
pub const WEIGHT_CATEGORIES: f64 = 0.10;
pub const WEIGHT_DATE_RANGE: f64 = 0.15;
pub const WEIGHT_PRICE_RANGE: f64 = 0.10;
pub const WEIGHT_BRANDS: f64 = 0.05;

/// Aggregate confidence for a granular report interpretation, capped at 1.
///
/// Clients contribute proportionally to their mean per-candidate
/// confidence, so one confirmed username weighs more than a page of
/// unresolved potentials.
pub fn report_confidence(entities: &DetectedEntities, report_type_detected: bool) -> f64 {
    let mut score = 0.0;

    if report_type_detected {
        score += WEIGHT_REPORT_TYPE;
    }

    if !entities.clients.is_empty() {
        let mean = entities.clients.iter().map(|c| c.confidence).sum::<f64>()
            / entities.clients.len() as f64;
        score += WEIGHT_CLIENTS * mean;
    }

    if !entities.products.is_empty() {
        score += WEIGHT_PRODUCTS;
    }

    if !entities.categories.is_empty() {
        score += WEIGHT_CATEGORIES;
    }

    if entities.date_range.is_some() {
        score += WEIGHT_DATE_RANGE;
    }

    if entities.price_range.is_some() {
        score += WEIGHT_PRICE_RANGE;
    }

    if !entities.brands.is_empty() {
        score += WEIGHT_BRANDS;
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vx_protocol::entities::{
        BrandMatch, CategoryMatch, ClientMatch, ClientMatchKind, DateRange, DateRangeKind,
        PriceRange, ProductMatch,
    };

    fn client(confidence: f64) -> ClientMatch {
        ClientMatch {
            id: Some(1),
            username: "Paul10".into(),
            full_name: "Paul Martinez".into(),
            matched_as: ClientMatchKind::Username,
            confidence,
        }
    }

    #[test]
    fn empty_entities_only_score_report_type() {
        let entities = DetectedEntities::default();
        assert_eq!(report_confidence(&entities, true), WEIGHT_REPORT_TYPE);
        assert_eq!(report_confidence(&entities, false), 0.0);
    }

    #[test]
    fn confirmed_client_and_date_reach_trust_threshold() {
        let mut entities = DetectedEntities::default();
        entities.clients.push(client(1.0));
        entities.date_range = Some(DateRange {
            start: Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 11, 30, 23, 59, 59).unwrap(),
            kind: DateRangeKind::Month,
            description: "Mes de Noviembre 2025".into(),
            confidence: 0.9,
        });
        let score = report_confidence(&entities, true);
        assert!(score >= 0.6, "score {score} should trust the interpretation");
    }

    #[test]
    fn client_mean_weights_unresolved_candidates() {
        let mut entities = DetectedEntities::default();
        entities.clients.push(client(1.0));
        entities.clients.push(ClientMatch {
            id: None,
            username: "desconocido99".into(),
            full_name: "desconocido99".into(),
            matched_as: ClientMatchKind::PotentialUsername,
            confidence: 0.6,
        });
        let score = report_confidence(&entities, false);
        assert!((score - WEIGHT_CLIENTS * 0.8).abs() < 1e-9);
    }

    #[test]
    fn score_is_capped_at_one() {
        let mut entities = DetectedEntities::default();
        entities.clients.push(client(1.0));
        entities.products.push(ProductMatch {
            id: 101,
            name: "Refrigerador LG 500L".into(),
            matched_phrase: "refrigerador lg".into(),
            confidence: 0.8,
        });
        entities.categories.push(CategoryMatch {
            slug: "refrigeracion".into(),
            keyword: "refrigerador".into(),
            confidence: 0.9,
        });
        entities.brands.push(BrandMatch {
            name: "LG".into(),
            confidence: 0.85,
        });
        entities.date_range = Some(DateRange {
            start: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap(),
            kind: DateRangeKind::Month,
            description: "Mes de Enero 2025".into(),
            confidence: 0.9,
        });
        entities.price_range = Some(PriceRange {
            min: Some(100.0),
            max: Some(500.0),
            hint: None,
            matched: "entre 100 y 500".into(),
            confidence: 0.9,
        });
        let score = report_confidence(&entities, true);
        assert!(score <= 1.0);
        assert!((score - 1.0).abs() < 1e-9);
    }
}

//! Detected entity records produced by the resolvers.
//!
//! Each record carries the matched substring and a confidence weight in
//! [0, 1]; the interpreter uses the weight both for aggregate scoring and
//! to guard filter assignment (a weaker match never overwrites a stronger
//! one).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filters::PaymentMethod;

// ── Clients ───────────────────────────────────────────────────

/// How a client candidate was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientMatchKind {
    /// Keyword pattern + confirmed directory username.
    Username,
    /// Keyword pattern, but the token is not in the directory.
    PotentialUsername,
    /// Capitalized "First Last" pair with an exact directory match.
    FullName,
    /// First name only, unique in the directory.
    FirstNameOnly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientMatch {
    /// Directory id when the candidate resolved; None for potentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub username: String,
    pub full_name: String,
    pub matched_as: ClientMatchKind,
    pub confidence: f64,
}

// ── Products / categories / brands / colors ───────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductMatch {
    pub id: u64,
    pub name: String,
    /// The window phrase that hit the catalog.
    pub matched_phrase: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub slug: String,
    /// The synonym that matched.
    pub keyword: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandMatch {
    /// Canonical upper-case brand name.
    pub name: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorMatch {
    /// Canonical lower-case color name.
    pub name: String,
    pub confidence: f64,
}

// ── Sizes ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeUnit {
    Liters,
    Kilograms,
    Inches,
    Btu,
    CubicFeet,
}

impl SizeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Liters => "liters",
            Self::Kilograms => "kilograms",
            Self::Inches => "inches",
            Self::Btu => "btu",
            Self::CubicFeet => "cubic_feet",
        }
    }
}

/// Descriptive size bucket for commands without a numeric capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Compact,
    Medium,
    Large,
}

/// A size constraint: measured ("500 litros") or descriptive ("grande").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SizeSpec {
    Measured { value: f64, unit: SizeUnit },
    Descriptive { class: SizeClass },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeMatch {
    pub spec: SizeSpec,
    pub matched: String,
    pub confidence: f64,
}

// ── Features ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    NoFrost,
    Inverter,
    Smart,
    Digital,
    Quiet,
    Multifunction,
    /// Synthetic: added whenever any energy keyword matches.
    EnergyEfficient,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoFrost => "no_frost",
            Self::Inverter => "inverter",
            Self::Smart => "smart",
            Self::Digital => "digital",
            Self::Quiet => "quiet",
            Self::Multifunction => "multifunction",
            Self::EnergyEfficient => "energy_efficient",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureMatch {
    pub feature: Feature,
    pub matched: String,
    pub confidence: f64,
}

// ── Price / date / payment / quantity ─────────────────────────

/// Qualitative price preference when no numeric bound was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceHint {
    Economy,
    Premium,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Set only when neither bound is numeric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<PriceHint>,
    pub matched: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRangeKind {
    LastDays,
    ExplicitRange,
    Month,
    BetweenMonths,
    LastMonth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: DateRangeKind,
    /// Human-readable Spanish description ("Mes de Noviembre 2025").
    pub description: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMatch {
    pub method: PaymentMethod,
    pub keyword: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    pub matched: String,
    pub confidence: f64,
}

// ── Tagged union + collection ─────────────────────────────────

/// One detected entity, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum DetectedEntity {
    Client(ClientMatch),
    Product(ProductMatch),
    Category(CategoryMatch),
    Brand(BrandMatch),
    Color(ColorMatch),
    Size(SizeMatch),
    Feature(FeatureMatch),
    PriceRange(PriceRange),
    DateRange(DateRange),
    PaymentMethod(PaymentMatch),
    Quantity(QuantityRange),
}

impl DetectedEntity {
    pub fn confidence(&self) -> f64 {
        match self {
            Self::Client(m) => m.confidence,
            Self::Product(m) => m.confidence,
            Self::Category(m) => m.confidence,
            Self::Brand(m) => m.confidence,
            Self::Color(m) => m.confidence,
            Self::Size(m) => m.confidence,
            Self::Feature(m) => m.confidence,
            Self::PriceRange(m) => m.confidence,
            Self::DateRange(m) => m.confidence,
            Self::PaymentMethod(m) => m.confidence,
            Self::Quantity(m) => m.confidence,
        }
    }
}

/// All entities detected in one command, grouped by kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectedEntities {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clients: Vec<ClientMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<ProductMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<BrandMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<ColorMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<SizeMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<FeatureMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_range: Option<QuantityRange>,
}

impl DetectedEntities {
    /// File an entity under its kind. Scalar kinds keep the first value.
    pub fn push(&mut self, entity: DetectedEntity) {
        match entity {
            DetectedEntity::Client(m) => self.clients.push(m),
            DetectedEntity::Product(m) => self.products.push(m),
            DetectedEntity::Category(m) => self.categories.push(m),
            DetectedEntity::Brand(m) => self.brands.push(m),
            DetectedEntity::Color(m) => self.colors.push(m),
            DetectedEntity::Size(m) => self.sizes.push(m),
            DetectedEntity::Feature(m) => self.features.push(m),
            DetectedEntity::PriceRange(m) => {
                if self.price_range.is_none() {
                    self.price_range = Some(m);
                }
            }
            DetectedEntity::DateRange(m) => {
                if self.date_range.is_none() {
                    self.date_range = Some(m);
                }
            }
            DetectedEntity::PaymentMethod(m) => {
                if self.payment_method.is_none() {
                    self.payment_method = Some(m);
                }
            }
            DetectedEntity::Quantity(m) => {
                if self.quantity_range.is_none() {
                    self.quantity_range = Some(m);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
            && self.products.is_empty()
            && self.categories.is_empty()
            && self.brands.is_empty()
            && self.colors.is_empty()
            && self.sizes.is_empty()
            && self.features.is_empty()
            && self.price_range.is_none()
            && self.date_range.is_none()
            && self.payment_method.is_none()
            && self.quantity_range.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_serialization_is_tagged() {
        let entity = DetectedEntity::Brand(BrandMatch {
            name: "LG".into(),
            confidence: 0.85,
        });
        let json = serde_json::to_string(&entity).unwrap();
        assert!(json.contains(r#""entity":"brand""#));
        assert!(json.contains(r#""name":"LG""#));
    }

    #[test]
    fn scalar_kinds_keep_first() {
        let mut all = DetectedEntities::default();
        all.push(DetectedEntity::Quantity(QuantityRange {
            min: Some(5),
            max: None,
            matched: "mas de 5 unidades".into(),
            confidence: 0.85,
        }));
        all.push(DetectedEntity::Quantity(QuantityRange {
            min: Some(9),
            max: None,
            matched: "mas de 9 unidades".into(),
            confidence: 0.85,
        }));
        assert_eq!(all.quantity_range.unwrap().min, Some(5));
    }

    #[test]
    fn empty_collection() {
        assert!(DetectedEntities::default().is_empty());
    }

    #[test]
    fn size_spec_roundtrip() {
        let spec = SizeSpec::Measured {
            value: 500.0,
            unit: SizeUnit::Liters,
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back: SizeSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}

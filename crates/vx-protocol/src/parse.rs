//! Parse results: the granular intermediate record, the routed report
//! result, and the product-search result.

use serde::{Deserialize, Serialize};

use crate::entities::{DetectedEntities, Feature, SizeSpec};
use crate::filters::ReportFilters;
use crate::report::{EndpointType, OutputFormat, ReportType};

// ── Report path ───────────────────────────────────────────────

/// Immutable output of the granular report interpreter, consumed by the
/// router. Nothing downstream mutates it; the router builds a fresh
/// [`ParseResult`] from it instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretedCommand {
    pub report_type: ReportType,
    pub filters: ReportFilters,
    pub format: OutputFormat,
    pub confidence: f64,
    pub entities: DetectedEntities,
    pub interpretation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// A non-winning classifier candidate, kept for caller-side refinement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub report_type: ReportType,
    pub name: String,
    pub score: u32,
}

/// Final result of interpreting a report command.
///
/// Never an error for malformed-but-non-empty input: the worst case is a
/// low-confidence default report with suggestions attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_type: Option<ReportType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<EndpointType>,
    #[serde(default)]
    pub supports_ml: bool,
    pub format: OutputFormat,
    /// Format the operator asked for, when it had to be downgraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_format: Option<OutputFormat>,
    #[serde(default)]
    pub format_changed: bool,
    pub filters: ReportFilters,
    pub confidence: f64,
    pub interpretation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub entities: DetectedEntities,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseResult {
    /// Fast-fail result for blank input.
    pub fn empty_command() -> Self {
        Self {
            success: false,
            report_type: None,
            report_name: None,
            report_description: None,
            endpoint_type: None,
            supports_ml: false,
            format: OutputFormat::Json,
            requested_format: None,
            format_changed: false,
            filters: ReportFilters::default(),
            confidence: 0.0,
            interpretation: String::new(),
            suggestions: Vec::new(),
            alternatives: Vec::new(),
            entities: DetectedEntities::default(),
            error: Some("comando vacío".to_string()),
        }
    }
}

// ── Product search path ───────────────────────────────────────

/// Sort order for storefront listings, expressed as the query parameter
/// the product API understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    NewestFirst,
}

impl SortKey {
    pub fn as_query_param(&self) -> &'static str {
        match self {
            Self::PriceAsc => "price",
            Self::PriceDesc => "-price",
            Self::NewestFirst => "-created_at",
        }
    }
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// Storefront listing filters extracted from a search command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub in_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<SortKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeSpec>,
}

impl ProductFilters {
    pub fn is_empty(&self) -> bool {
        self.category_slug.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && !self.in_stock
            && self.ordering.is_none()
            && self.brand.is_none()
            && self.color.is_none()
            && self.features.is_empty()
            && self.size.is_none()
    }
}

/// Result of interpreting a storefront product search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSearchResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    pub filters: ProductFilters,
    pub confidence: f64,
    pub interpretation: String,
    pub original_text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProductSearchResult {
    /// Failed interpretation with an operator-facing reason.
    pub fn failed(original_text: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            search_term: None,
            filters: ProductFilters::default(),
            confidence: 0.0,
            interpretation: String::new(),
            original_text: original_text.into(),
            suggestions: Vec::new(),
            error: Some(error.into()),
        }
    }
}

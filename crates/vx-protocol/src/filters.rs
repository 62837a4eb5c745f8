//! The filter set handed to report generators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical payment methods the storefront settles with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Cash,
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
            Self::Transfer => "transfer",
        }
    }
}

/// Grouping dimension for the generic sales reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    Product,
    Client,
    Category,
    Date,
}

/// Baseline for the temporal comparison report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonBaseline {
    PreviousMonth,
    PreviousPeriod,
}

/// Normalized report parameters extracted from a command.
///
/// Every field is optional; generators treat absent fields as "no
/// constraint". Assignment goes through the interpreter's draft, which
/// never lets a lower-confidence entity overwrite a value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_max: Option<u32>,
    /// Spanish description of the date window, for report headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupBy>,
    /// ML forecast horizon in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonBaseline>,
}

impl ReportFilters {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_none()
            && self.customer_username.is_none()
            && self.product_id.is_none()
            && self.category_slug.is_none()
            && self.brand.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.payment_method.is_none()
            && self.quantity_min.is_none()
            && self.quantity_max.is_none()
            && self.group_by.is_none()
            && self.forecast_days.is_none()
            && self.comparison.is_none()
    }
}

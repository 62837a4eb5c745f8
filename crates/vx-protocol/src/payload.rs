//! Structured payload returned by report generator strategies.

use serde::{Deserialize, Serialize};

/// Tabular report data produced by a generator strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
    /// Aggregates keyed by column or metric name.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub totals: serde_json::Value,
    /// Generator-specific extras (model metrics, period echo, …).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

impl ReportPayload {
    pub fn new(title: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            headers,
            rows: Vec::new(),
            totals: serde_json::Value::Null,
            metadata: serde_json::Value::Null,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

//! Confidence-guarded filter assembly.
//!
//! Resolvers run independently, so two entities can target the same filter
//! key. The draft records the confidence that set each key and refuses
//! weaker overwrites, which keeps the "never silently replace a stronger
//! match" invariant in one place.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use vx_protocol::filters::{PaymentMethod, ReportFilters};

#[derive(Debug, Default)]
pub struct FilterDraft {
    filters: ReportFilters,
    strengths: HashMap<&'static str, f64>,
}

impl FilterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `confidence` beats whatever previously set `key`.
    fn claim(&mut self, key: &'static str, confidence: f64) -> bool {
        match self.strengths.get(key) {
            Some(existing) if *existing >= confidence => false,
            _ => {
                self.strengths.insert(key, confidence);
                true
            }
        }
    }

    pub fn set_customer(&mut self, confidence: f64, id: u64, username: &str) -> bool {
        if self.claim("customer_id", confidence) {
            self.filters.customer_id = Some(id);
            self.filters.customer_username = Some(username.to_string());
            true
        } else {
            false
        }
    }

    pub fn set_product(&mut self, confidence: f64, id: u64) -> bool {
        if self.claim("product_id", confidence) {
            self.filters.product_id = Some(id);
            true
        } else {
            false
        }
    }

    pub fn set_category(&mut self, confidence: f64, slug: &str) -> bool {
        if self.claim("category_slug", confidence) {
            self.filters.category_slug = Some(slug.to_string());
            true
        } else {
            false
        }
    }

    pub fn set_brand(&mut self, confidence: f64, brand: &str) -> bool {
        if self.claim("brand", confidence) {
            self.filters.brand = Some(brand.to_string());
            true
        } else {
            false
        }
    }

    pub fn set_price_min(&mut self, confidence: f64, value: f64) -> bool {
        if self.claim("price_min", confidence) {
            self.filters.price_min = Some(value);
            true
        } else {
            false
        }
    }

    pub fn set_price_max(&mut self, confidence: f64, value: f64) -> bool {
        if self.claim("price_max", confidence) {
            self.filters.price_max = Some(value);
            true
        } else {
            false
        }
    }

    pub fn set_date_range(
        &mut self,
        confidence: f64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        period_text: &str,
    ) -> bool {
        if self.claim("date_range", confidence) {
            self.filters.start_date = Some(start);
            self.filters.end_date = Some(end);
            self.filters.period_text = Some(period_text.to_string());
            true
        } else {
            false
        }
    }

    pub fn set_payment_method(&mut self, confidence: f64, method: PaymentMethod) -> bool {
        if self.claim("payment_method", confidence) {
            self.filters.payment_method = Some(method);
            true
        } else {
            false
        }
    }

    pub fn set_quantity(&mut self, confidence: f64, min: Option<u32>, max: Option<u32>) -> bool {
        if self.claim("quantity", confidence) {
            self.filters.quantity_min = min;
            self.filters.quantity_max = max;
            true
        } else {
            false
        }
    }

    pub fn filters(&self) -> &ReportFilters {
        &self.filters
    }

    pub fn into_filters(self) -> ReportFilters {
        self.filters
    }
}

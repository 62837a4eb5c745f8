//! Shared harness for the end-to-end suites.
//!
//! Wires the real interpreters, router, and dispatcher over the sample
//! catalogs, with a pinned clock and recording generator strategies, so
//! each test exercises the actual cross-crate code paths.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use vx_catalog::{CategoryDictionary, InMemoryClientDirectory, InMemoryProductCatalog};
use vx_interpreter::{Lexicon, ProductSearchInterpreter, ReportCommandInterpreter};
use vx_protocol::filters::ReportFilters;
use vx_protocol::parse::{ParseResult, ProductSearchResult};
use vx_protocol::payload::ReportPayload;
use vx_protocol::report::OutputFormat;
use vx_report_router::{
    GeneratorError, ReportCatalog, ReportDispatcher, ReportGeneratorStrategy, ReportRouter,
    StrategyRegistry,
};

/// Pinned "now" for every test: 2025-08-06 12:00:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 6, 12, 0, 0).unwrap()
}

/// A generator that records the filters it received and answers with a
/// payload titled after its endpoint.
struct RecordingStrategy {
    label: &'static str,
    calls: Arc<Mutex<Vec<(String, ReportFilters)>>>,
}

impl ReportGeneratorStrategy for RecordingStrategy {
    fn name(&self) -> &str {
        self.label
    }

    fn generate(&self, filters: &ReportFilters) -> Result<ReportPayload, GeneratorError> {
        self.calls
            .lock()
            .unwrap()
            .push((self.label.to_string(), filters.clone()));
        Ok(ReportPayload::new(self.label, vec!["columna".into()]))
    }
}

pub struct TestHarness {
    pub router: ReportRouter,
    pub search: ProductSearchInterpreter,
    pub dispatcher: ReportDispatcher,
    /// (strategy label, filters) per dispatch, in call order.
    pub dispatched: Arc<Mutex<Vec<(String, ReportFilters)>>>,
}

impl TestHarness {
    pub fn with_sample_data() -> Self {
        let categories = Arc::new(CategoryDictionary::builtin_es());
        let lexicon = Arc::new(Lexicon::builtin_es());
        let catalog = Arc::new(ReportCatalog::builtin());

        let interpreter = ReportCommandInterpreter::new(
            Arc::new(InMemoryClientDirectory::with_sample_data()),
            Arc::new(InMemoryProductCatalog::with_sample_data()),
            categories.clone(),
            lexicon.clone(),
        );
        let router = ReportRouter::new(interpreter, catalog.clone(), lexicon.clone());
        let search = ProductSearchInterpreter::new(categories, lexicon);

        let dispatched = Arc::new(Mutex::new(Vec::new()));
        let make = |label: &'static str| -> Box<dyn ReportGeneratorStrategy> {
            Box::new(RecordingStrategy {
                label,
                calls: dispatched.clone(),
            })
        };
        let registry = StrategyRegistry {
            basic_dynamic: make("basic_dynamic"),
            client_specific: make("client_specific"),
            product_specific: make("product_specific"),
            price_filtered: make("price_filtered"),
            comparative: make("comparative"),
            advanced: make("advanced"),
            ml_predictions: make("ml_predictions"),
            ml_product: make("ml_product"),
            ml_recommendations: make("ml_recommendations"),
            ml_dashboard: make("ml_dashboard"),
        };
        let dispatcher = ReportDispatcher::new(catalog, registry);

        Self {
            router,
            search,
            dispatcher,
            dispatched,
        }
    }

    /// Parse a report command at the pinned clock.
    pub fn parse_report(&self, text: &str) -> ParseResult {
        self.router
            .parse_report_command_at(text, None, fixed_now())
            .expect("catalog lookups cannot fail in-memory")
    }

    /// Parse with a caller-side format override.
    pub fn parse_report_as(&self, text: &str, format: OutputFormat) -> ParseResult {
        self.router
            .parse_report_command_at(text, Some(format), fixed_now())
            .expect("catalog lookups cannot fail in-memory")
    }

    pub fn parse_search(&self, text: &str) -> ProductSearchResult {
        self.search.parse(text)
    }

    /// Labels of the strategies invoked so far.
    pub fn dispatched_labels(&self) -> Vec<String> {
        self.dispatched
            .lock()
            .unwrap()
            .iter()
            .map(|(label, _)| label.clone())
            .collect()
    }
}

//! Report dispatch: resolved report type → injected generator strategy.
//!
//! The registry carries one strategy per endpoint family as a named
//! field, so constructing it forces the caller to cover every family —
//! there is no string-keyed map to leave a hole in.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use vx_protocol::filters::{ComparisonBaseline, ReportFilters};
use vx_protocol::payload::ReportPayload;
use vx_protocol::report::{EndpointType, ReportType};

use crate::catalog::ReportCatalog;
use crate::error::{RouteError, RouteResult};
use crate::params::DEFAULT_FORECAST_DAYS;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("report generation failed: {0}")]
    Failed(String),

    #[error("required data unavailable: {0}")]
    DataUnavailable(String),
}

/// One report generator family. Implementations own the data access and
/// rendering concerns; they receive fully normalized filters.
pub trait ReportGeneratorStrategy: Send + Sync {
    /// Strategy name for logging/tracing.
    fn name(&self) -> &str;

    fn generate(&self, filters: &ReportFilters) -> Result<ReportPayload, GeneratorError>;
}

/// One strategy per endpoint family. Exhaustive by construction.
pub struct StrategyRegistry {
    pub basic_dynamic: Box<dyn ReportGeneratorStrategy>,
    pub client_specific: Box<dyn ReportGeneratorStrategy>,
    pub product_specific: Box<dyn ReportGeneratorStrategy>,
    pub price_filtered: Box<dyn ReportGeneratorStrategy>,
    pub comparative: Box<dyn ReportGeneratorStrategy>,
    pub advanced: Box<dyn ReportGeneratorStrategy>,
    pub ml_predictions: Box<dyn ReportGeneratorStrategy>,
    pub ml_product: Box<dyn ReportGeneratorStrategy>,
    pub ml_recommendations: Box<dyn ReportGeneratorStrategy>,
    pub ml_dashboard: Box<dyn ReportGeneratorStrategy>,
}

impl StrategyRegistry {
    pub fn strategy(&self, endpoint: EndpointType) -> &dyn ReportGeneratorStrategy {
        match endpoint {
            EndpointType::BasicDynamic => self.basic_dynamic.as_ref(),
            EndpointType::ClientSpecific => self.client_specific.as_ref(),
            EndpointType::ProductSpecific => self.product_specific.as_ref(),
            EndpointType::PriceFiltered => self.price_filtered.as_ref(),
            EndpointType::Comparative => self.comparative.as_ref(),
            EndpointType::Advanced => self.advanced.as_ref(),
            EndpointType::MlPredictions => self.ml_predictions.as_ref(),
            EndpointType::MlProduct => self.ml_product.as_ref(),
            EndpointType::MlRecommendations => self.ml_recommendations.as_ref(),
            EndpointType::MlDashboard => self.ml_dashboard.as_ref(),
        }
    }
}

pub struct ReportDispatcher {
    catalog: Arc<ReportCatalog>,
    registry: StrategyRegistry,
}

impl ReportDispatcher {
    pub fn new(catalog: Arc<ReportCatalog>, registry: StrategyRegistry) -> Self {
        Self { catalog, registry }
    }

    /// Route the report type to its generator with normalized parameters.
    pub fn dispatch(
        &self,
        report_type: ReportType,
        filters: &ReportFilters,
    ) -> RouteResult<ReportPayload> {
        let definition = self
            .catalog
            .definition(report_type)
            .ok_or(RouteError::UnknownReport(report_type))?;

        let filters = normalize(definition.endpoint_type, report_type, filters);
        let strategy = self.registry.strategy(definition.endpoint_type);

        info!(
            %report_type,
            endpoint = %definition.endpoint_type,
            strategy = strategy.name(),
            "dispatching report"
        );

        Ok(strategy.generate(&filters)?)
    }
}

/// Fill the defaults a generator may rely on: ML horizon, comparison
/// baseline, grouping dimension.
fn normalize(
    endpoint: EndpointType,
    report_type: ReportType,
    filters: &ReportFilters,
) -> ReportFilters {
    let mut filters = filters.clone();

    let is_ml = matches!(
        endpoint,
        EndpointType::MlPredictions
            | EndpointType::MlProduct
            | EndpointType::MlRecommendations
            | EndpointType::MlDashboard
    );
    if is_ml && filters.forecast_days.is_none() {
        filters.forecast_days = Some(DEFAULT_FORECAST_DAYS);
    }

    if report_type == ReportType::ComparativoTemporal && filters.comparison.is_none() {
        filters.comparison = Some(ComparisonBaseline::PreviousPeriod);
    }

    if filters.group_by.is_none() {
        filters.group_by = crate::params::derive_group_by(report_type);
    }

    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;
    use vx_protocol::filters::GroupBy;

    /// Records the filters it was called with and echoes its name.
    struct RecordingStrategy {
        label: &'static str,
        calls: Arc<Mutex<Vec<ReportFilters>>>,
    }

    impl ReportGeneratorStrategy for RecordingStrategy {
        fn name(&self) -> &str {
            self.label
        }

        fn generate(&self, filters: &ReportFilters) -> Result<ReportPayload, GeneratorError> {
            self.calls.lock().unwrap().push(filters.clone());
            let mut payload = ReportPayload::new(self.label, vec!["col".into()]);
            payload.metadata = json!({"strategy": self.label});
            Ok(payload)
        }
    }

    fn registry_with_recorder() -> (StrategyRegistry, Arc<Mutex<Vec<ReportFilters>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let make = |label: &'static str| -> Box<dyn ReportGeneratorStrategy> {
            Box::new(RecordingStrategy {
                label,
                calls: calls.clone(),
            })
        };
        let registry = StrategyRegistry {
            basic_dynamic: make("basic"),
            client_specific: make("client"),
            product_specific: make("product"),
            price_filtered: make("price"),
            comparative: make("comparative"),
            advanced: make("advanced"),
            ml_predictions: make("ml_predictions"),
            ml_product: make("ml_product"),
            ml_recommendations: make("ml_recommendations"),
            ml_dashboard: make("ml_dashboard"),
        };
        (registry, calls)
    }

    fn dispatcher() -> (ReportDispatcher, Arc<Mutex<Vec<ReportFilters>>>) {
        let (registry, calls) = registry_with_recorder();
        (
            ReportDispatcher::new(Arc::new(ReportCatalog::builtin()), registry),
            calls,
        )
    }

    #[test]
    fn routes_to_endpoint_strategy() {
        let (dispatcher, _) = dispatcher();
        let payload = dispatcher
            .dispatch(ReportType::ComprasCliente, &ReportFilters::default())
            .unwrap();
        assert_eq!(payload.title, "client");

        let payload = dispatcher
            .dispatch(ReportType::AnalisisRfm, &ReportFilters::default())
            .unwrap();
        assert_eq!(payload.title, "advanced");
    }

    #[test]
    fn ml_dispatch_defaults_forecast_horizon() {
        let (dispatcher, calls) = dispatcher();
        dispatcher
            .dispatch(ReportType::PrediccionVentas, &ReportFilters::default())
            .unwrap();
        let seen = calls.lock().unwrap();
        assert_eq!(seen.last().unwrap().forecast_days, Some(30));
    }

    #[test]
    fn explicit_forecast_horizon_kept() {
        let (dispatcher, calls) = dispatcher();
        let filters = ReportFilters {
            forecast_days: Some(15),
            ..Default::default()
        };
        dispatcher.dispatch(ReportType::DashboardMl, &filters).unwrap();
        let seen = calls.lock().unwrap();
        assert_eq!(seen.last().unwrap().forecast_days, Some(15));
    }

    #[test]
    fn comparative_defaults_baseline() {
        let (dispatcher, calls) = dispatcher();
        dispatcher
            .dispatch(ReportType::ComparativoTemporal, &ReportFilters::default())
            .unwrap();
        let seen = calls.lock().unwrap();
        assert_eq!(
            seen.last().unwrap().comparison,
            Some(ComparisonBaseline::PreviousPeriod)
        );
    }

    #[test]
    fn grouped_report_fills_group_by() {
        let (dispatcher, calls) = dispatcher();
        dispatcher
            .dispatch(ReportType::VentasPorProducto, &ReportFilters::default())
            .unwrap();
        let seen = calls.lock().unwrap();
        assert_eq!(seen.last().unwrap().group_by, Some(GroupBy::Product));
    }

    #[test]
    fn every_report_type_dispatches() {
        let (dispatcher, _) = dispatcher();
        for report_type in ReportType::ALL {
            assert!(
                dispatcher
                    .dispatch(report_type, &ReportFilters::default())
                    .is_ok(),
                "dispatch failed for {report_type}"
            );
        }
    }

    #[test]
    fn generator_error_propagates() {
        struct FailingStrategy;
        impl ReportGeneratorStrategy for FailingStrategy {
            fn name(&self) -> &str {
                "failing"
            }
            fn generate(&self, _: &ReportFilters) -> Result<ReportPayload, GeneratorError> {
                Err(GeneratorError::DataUnavailable("sin ventas".into()))
            }
        }

        let (mut registry, _) = registry_with_recorder();
        registry.basic_dynamic = Box::new(FailingStrategy);
        let dispatcher = ReportDispatcher::new(Arc::new(ReportCatalog::builtin()), registry);

        let err = dispatcher
            .dispatch(ReportType::VentasBasico, &ReportFilters::default())
            .unwrap_err();
        assert!(matches!(err, RouteError::Generator(_)));
    }
}

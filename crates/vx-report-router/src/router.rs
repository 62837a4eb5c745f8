//! Two-phase report routing.
//!
//! Phase 1 trusts the granular interpreter when its confidence reaches
//! the threshold. Phase 2 falls back to the keyword classifier plus
//! independent parameter derivation. Either way the requested output
//! format is validated against the resolved report's supported list.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use vx_interpreter::suggestions::report_suggestions;
use vx_interpreter::{Lexicon, ReportCommandInterpreter};
use vx_protocol::Command;
use vx_protocol::parse::{InterpretedCommand, ParseResult};
use vx_protocol::report::{OutputFormat, ReportType};

use crate::catalog::ReportCatalog;
use crate::classifier::classify;
use crate::error::RouteResult;
use crate::params;

/// Granular interpretations at or above this confidence are used as-is.
const TRUST_THRESHOLD: f64 = 0.6;
/// Below this, the fallback attaches refinement hints.
const SUGGESTION_THRESHOLD: f64 = 0.5;
const MAX_SUGGESTIONS: usize = 3;

pub struct ReportRouter {
    interpreter: ReportCommandInterpreter,
    catalog: Arc<ReportCatalog>,
    lexicon: Arc<Lexicon>,
}

impl ReportRouter {
    pub fn new(
        interpreter: ReportCommandInterpreter,
        catalog: Arc<ReportCatalog>,
        lexicon: Arc<Lexicon>,
    ) -> Self {
        Self {
            interpreter,
            catalog,
            lexicon,
        }
    }

    pub fn catalog(&self) -> &ReportCatalog {
        &self.catalog
    }

    /// Parse a report command against the current wall clock.
    pub fn parse_report_command(
        &self,
        text: &str,
        format_override: Option<OutputFormat>,
    ) -> RouteResult<ParseResult> {
        self.parse_report_command_at(text, format_override, Utc::now())
    }

    /// Parse with an injected clock.
    pub fn parse_report_command_at(
        &self,
        text: &str,
        format_override: Option<OutputFormat>,
        now: DateTime<Utc>,
    ) -> RouteResult<ParseResult> {
        let command = Command::new(text);
        if command.is_blank() {
            return Ok(ParseResult::empty_command());
        }

        let granular = self.interpreter.parse_at(text, now)?;

        let mut result = if granular.confidence >= TRUST_THRESHOLD {
            info!(
                report_type = %granular.report_type,
                confidence = granular.confidence,
                "granular interpretation trusted"
            );
            self.adopt_granular(granular)
        } else {
            debug!(
                confidence = granular.confidence,
                "granular interpretation below threshold, classifying"
            );
            self.classify_fallback(&command.normalized, granular, now)
        };

        if let Some(format) = format_override {
            result.format = format;
        }
        self.validate_format(&mut result);

        Ok(result)
    }

    /// Phase 1: the interpreter's output, enriched with catalog metadata.
    fn adopt_granular(&self, granular: InterpretedCommand) -> ParseResult {
        let definition = self.catalog.definition(granular.report_type);

        let mut suggestions = granular.suggestions;
        if let Some(def) = definition {
            if def.needs_customer
                && granular.filters.customer_id.is_none()
                && suggestions.len() < MAX_SUGGESTIONS
            {
                suggestions.push(
                    "Este reporte necesita un cliente específico (ej: 'cliente Paul10')"
                        .to_string(),
                );
            }
            if def.needs_product
                && granular.filters.product_id.is_none()
                && suggestions.len() < MAX_SUGGESTIONS
            {
                suggestions.push(
                    "Este reporte necesita un producto específico (ej: 'Refrigerador LG 500L')"
                        .to_string(),
                );
            }
        }

        ParseResult {
            success: true,
            report_type: Some(granular.report_type),
            report_name: definition.map(|d| d.name.to_string()),
            report_description: definition.map(|d| d.description.to_string()),
            endpoint_type: definition.map(|d| d.endpoint_type),
            supports_ml: definition.map(|d| d.supports_ml).unwrap_or(false),
            format: granular.format,
            requested_format: None,
            format_changed: false,
            filters: granular.filters,
            confidence: granular.confidence,
            interpretation: granular.interpretation,
            suggestions,
            alternatives: Vec::new(),
            entities: granular.entities,
            error: None,
        }
    }

    /// Phase 2: classifier + derived parameters. Entity-backed filters
    /// from the granular pass are kept — a resolved customer or price
    /// bound stays usable even when the report type had to be
    /// classified — while the date window and report-specific extras are
    /// derived here.
    fn classify_fallback(
        &self,
        text: &str,
        granular: InterpretedCommand,
        now: DateTime<Utc>,
    ) -> ParseResult {
        let classification = classify(text, &self.catalog);
        let definition = self.catalog.definition(classification.report_type);
        let supports_ml = definition.map(|d| d.supports_ml).unwrap_or(false);

        let mut filters = granular.filters.clone();
        let dates = params::derive_dates(text, &self.lexicon, now);
        filters.start_date = Some(dates.start);
        filters.end_date = Some(dates.end);
        filters.period_text = Some(dates.period_text.clone());
        filters.group_by = params::derive_group_by(classification.report_type);
        if supports_ml {
            filters.forecast_days = Some(params::derive_forecast_days(text));
        }
        if classification.report_type == ReportType::ComparativoTemporal {
            filters.comparison = Some(params::derive_comparison(text));
        }

        let format = params::detect_format(text);
        let report_name = definition.map(|d| d.name.to_string());
        let interpretation = format!(
            "Tipo: {} | Período: {} | Formato: {}",
            report_name.as_deref().unwrap_or(classification.report_type.as_str()),
            dates.period_text,
            format.as_str().to_uppercase()
        );
        let suggestions = if classification.confidence < SUGGESTION_THRESHOLD {
            report_suggestions(&granular.entities)
        } else {
            Vec::new()
        };

        ParseResult {
            success: true,
            report_type: Some(classification.report_type),
            report_name,
            report_description: definition.map(|d| d.description.to_string()),
            endpoint_type: definition.map(|d| d.endpoint_type),
            supports_ml,
            format,
            requested_format: None,
            format_changed: false,
            filters,
            confidence: classification.confidence,
            interpretation,
            suggestions,
            alternatives: classification.alternatives,
            entities: granular.entities,
            error: None,
        }
    }

    /// Downgrade unsupported formats to the report's first supported one.
    /// Silent by design: the flag travels in the result, no error.
    fn validate_format(&self, result: &mut ParseResult) {
        let Some(report_type) = result.report_type else {
            return;
        };
        let Some(definition) = self.catalog.definition(report_type) else {
            return;
        };
        if !definition.formats.contains(&result.format) {
            warn!(
                %report_type,
                requested = %result.format,
                "unsupported format requested, downgrading"
            );
            result.requested_format = Some(result.format);
            result.format = definition.formats.first().copied().unwrap_or_default();
            result.format_changed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vx_catalog::{CategoryDictionary, InMemoryClientDirectory, InMemoryProductCatalog};
    use vx_protocol::filters::{ComparisonBaseline, GroupBy};
    use vx_protocol::report::EndpointType;

    fn router() -> ReportRouter {
        let lexicon = Arc::new(Lexicon::builtin_es());
        let interpreter = ReportCommandInterpreter::new(
            Arc::new(InMemoryClientDirectory::with_sample_data()),
            Arc::new(InMemoryProductCatalog::with_sample_data()),
            Arc::new(CategoryDictionary::builtin_es()),
            lexicon.clone(),
        );
        ReportRouter::new(interpreter, Arc::new(ReportCatalog::builtin()), lexicon)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn trusted_granular_path() {
        let result = router()
            .parse_report_command_at(
                "Generame un reporte de las compras que realizo el cliente Paul10 en el mes de noviembre",
                None,
                now(),
            )
            .unwrap();

        assert!(result.success);
        assert_eq!(result.report_type, Some(ReportType::ComprasCliente));
        assert_eq!(result.endpoint_type, Some(EndpointType::ClientSpecific));
        assert_eq!(result.report_name.as_deref(), Some("Compras de Cliente Específico"));
        assert_eq!(result.filters.customer_id, Some(1));
        assert_eq!(
            result.filters.start_date,
            Some(Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            result.filters.end_date,
            Some(Utc.with_ymd_and_hms(2025, 11, 30, 23, 59, 59).unwrap())
        );
        assert!(result.confidence >= 0.6);
        assert_eq!(result.format, OutputFormat::Json);
        assert!(!result.format_changed);
    }

    #[test]
    fn fallback_classifies_ml_prediction() {
        let result = router()
            .parse_report_command_at("dame un pronostico de ventas futuras", None, now())
            .unwrap();

        assert_eq!(result.report_type, Some(ReportType::PrediccionVentas));
        assert_eq!(result.endpoint_type, Some(EndpointType::MlPredictions));
        assert!(result.supports_ml);
        assert_eq!(result.filters.forecast_days, Some(30));
        // No explicit dates: defaults to the current calendar month.
        assert_eq!(
            result.filters.start_date,
            Some(Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(result.filters.end_date, Some(now()));
    }

    #[test]
    fn unsupported_format_downgrades_silently() {
        let result = router()
            .parse_report_command_at("dashboard ejecutivo en excel", None, now())
            .unwrap();

        assert_eq!(result.report_type, Some(ReportType::DashboardEjecutivo));
        assert_eq!(result.format, OutputFormat::Json);
        assert!(result.format_changed);
        assert_eq!(result.requested_format, Some(OutputFormat::Excel));
    }

    #[test]
    fn format_override_wins_over_text() {
        let result = router()
            .parse_report_command_at(
                "ventas del mes de noviembre",
                Some(OutputFormat::Excel),
                now(),
            )
            .unwrap();

        assert_eq!(result.format, OutputFormat::Excel);
        assert!(!result.format_changed);
    }

    #[test]
    fn blank_input_fails_fast() {
        let result = router().parse_report_command_at("   ", None, now()).unwrap();
        assert!(!result.success);
        assert_eq!(result.confidence, 0.0);
        assert!(result.report_type.is_none());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn grouped_sales_get_group_by() {
        let result = router()
            .parse_report_command_at("ventas por categoria", None, now())
            .unwrap();

        assert_eq!(result.report_type, Some(ReportType::VentasPorCategoria));
        assert_eq!(result.filters.group_by, Some(GroupBy::Category));
    }

    #[test]
    fn comparative_gets_baseline() {
        let result = router()
            .parse_report_command_at("comparativo contra el mes anterior", None, now())
            .unwrap();

        assert_eq!(result.report_type, Some(ReportType::ComparativoTemporal));
        assert_eq!(result.filters.comparison, Some(ComparisonBaseline::PreviousMonth));
    }

    #[test]
    fn unmatched_text_defaults_to_basic_sales() {
        let result = router()
            .parse_report_command_at("cualquier cosa sin sentido", None, now())
            .unwrap();

        assert!(result.success);
        assert_eq!(result.report_type, Some(ReportType::VentasBasico));
        assert_eq!(result.confidence, 0.3);
        assert!(!result.suggestions.is_empty());
    }

    #[test]
    fn trusted_client_report_without_id_suggests_one() {
        // Trusted on product/category/date entities, but the client is
        // unresolved: the router appends a targeted hint.
        let result = router()
            .parse_report_command_at(
                "historial del cliente Desconocido99 de refrigerador lg en noviembre",
                None,
                now(),
            )
            .unwrap();

        assert!(result.confidence >= 0.6);
        assert_eq!(result.report_type, Some(ReportType::ComprasCliente));
        assert!(result.filters.customer_id.is_none());
        assert!(
            result
                .suggestions
                .iter()
                .any(|s| s.contains("cliente específico"))
        );
    }
}

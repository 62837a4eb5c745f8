//! Phase-2 parameter derivation: output format, default date window, and
//! report-specific extras.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use regex::Regex;
use vx_interpreter::Lexicon;
use vx_interpreter::lexicon::contains_word;
use vx_interpreter::resolvers::resolve_date_range;
use vx_protocol::filters::{ComparisonBaseline, GroupBy};
use vx_protocol::report::{OutputFormat, ReportType};

pub const DEFAULT_FORECAST_DAYS: u32 = 30;

static RE_FORECAST_DAYS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:prediccion(?:es)?|pronostico|forecast).*?(\d+)\s+dias?").unwrap()
});

/// Requested delivery format; defaults to JSON when nothing is named.
pub fn detect_format(text: &str) -> OutputFormat {
    if contains_word(text, "pdf") {
        OutputFormat::Pdf
    } else if ["excel", "xlsx", "xls"].iter().any(|kw| contains_word(text, kw)) {
        OutputFormat::Excel
    } else {
        // "json", "pantalla" and "screen" all mean the default.
        OutputFormat::Json
    }
}

/// Derived date window: the resolver rules, else the current calendar
/// month (start of month → now).
pub struct DerivedDates {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub period_text: String,
}

pub fn derive_dates(text: &str, lexicon: &Lexicon, now: DateTime<Utc>) -> DerivedDates {
    if let Some(range) = resolve_date_range(text, lexicon, now) {
        return DerivedDates {
            start: range.start,
            end: range.end,
            period_text: range.description,
        };
    }

    let start = Utc
        .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now);
    DerivedDates {
        start,
        end: now,
        period_text: "Mes actual".to_string(),
    }
}

/// Grouping dimension for the generic sales family.
pub fn derive_group_by(report_type: ReportType) -> Option<GroupBy> {
    match report_type {
        ReportType::VentasPorProducto | ReportType::ProductosMasVendidos => Some(GroupBy::Product),
        ReportType::VentasPorCliente => Some(GroupBy::Client),
        ReportType::VentasPorCategoria | ReportType::VentasPorCategoriaEspecifica => {
            Some(GroupBy::Category)
        }
        ReportType::VentasPorFecha => Some(GroupBy::Date),
        _ => None,
    }
}

/// Forecast horizon for ML reports: "prediccion ... 15 dias" or the
/// 30-day default.
pub fn derive_forecast_days(text: &str) -> u32 {
    RE_FORECAST_DAYS
        .captures(text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .unwrap_or(DEFAULT_FORECAST_DAYS)
}

/// Comparison baseline for the temporal comparative.
pub fn derive_comparison(text: &str) -> ComparisonBaseline {
    if text.contains("mes anterior") || text.contains("mes pasado") {
        ComparisonBaseline::PreviousMonth
    } else {
        ComparisonBaseline::PreviousPeriod
    }
}

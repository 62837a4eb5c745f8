//! Date range detection.
//!
//! Rules tried in order, first match wins: rolling "últimos N días",
//! explicit "del D/M/Y al D/M/Y", month name with optional year,
//! "entre mes1 y mes2", and "último mes"/"mes pasado". Every window runs
//! from the first instant of its start day to 23:59:59 of its end day;
//! December closes at Dec 31 of the same year.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use regex::Regex;
use vx_protocol::entities::{DateRange, DateRangeKind};

use crate::lexicon::Lexicon;

const CONFIDENCE: f64 = 0.9;

static RE_LAST_DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:ultimos?|pasados?)\s+(\d+)\s+dias?\b").unwrap());

static RE_EXPLICIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bdel?\s+(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\s+al?\s+(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\b")
        .unwrap()
});

static RE_LAST_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bultimo mes\b|\bmes pasado\b").unwrap());

pub fn resolve_date_range(
    text: &str,
    lexicon: &Lexicon,
    now: DateTime<Utc>,
) -> Option<DateRange> {
    // (a) rolling window ending now
    if let Some(caps) = RE_LAST_DAYS.captures(text)
        && let Ok(days) = caps[1].parse::<i64>()
    {
        return Some(DateRange {
            start: now - Duration::days(days),
            end: now,
            kind: DateRangeKind::LastDays,
            description: format!("Últimos {days} días"),
            confidence: CONFIDENCE,
        });
    }

    // (b) explicit "del D/M/Y al D/M/Y"
    if let Some(caps) = RE_EXPLICIT.captures(text)
        && let Some(start_day) = parse_day(&caps[1])
        && let Some(end_day) = parse_day(&caps[2])
    {
        let start = start_day.and_hms_opt(0, 0, 0)?.and_utc();
        let end = end_day.and_hms_opt(23, 59, 59)?.and_utc();
        return Some(DateRange {
            start,
            end,
            kind: DateRangeKind::ExplicitRange,
            description: format!("{} al {}", &caps[1], &caps[2]),
            confidence: CONFIDENCE,
        });
    }

    // (c) month name, optional year
    if let Some(caps) = lexicon.month_re().captures(text) {
        let month = lexicon.month_number(&caps[1])?;
        let year = caps
            .get(2)
            .and_then(|y| y.as_str().parse::<i32>().ok())
            .unwrap_or(now.year());
        let start = month_start(year, month)?;
        let end = month_end(year, month)?;
        return Some(DateRange {
            start,
            end,
            kind: DateRangeKind::Month,
            description: format!("Mes de {} {}", title_case(&caps[1]), year),
            confidence: CONFIDENCE,
        });
    }

    // (d) "entre mes1 y mes2", same year
    if let Some(caps) = lexicon.between_months_re().captures(text) {
        let first = lexicon.month_number(&caps[1])?;
        let second = lexicon.month_number(&caps[2])?;
        let year = now.year();
        let start = month_start(year, first)?;
        let end = month_end(year, second)?;
        return Some(DateRange {
            start,
            end,
            kind: DateRangeKind::BetweenMonths,
            description: format!(
                "Entre {} y {} {}",
                title_case(&caps[1]),
                title_case(&caps[2]),
                year
            ),
            confidence: CONFIDENCE,
        });
    }

    // (e) previous calendar month
    if RE_LAST_MONTH.is_match(text) {
        let (year, month) = previous_month(now.year(), now.month());
        let start = month_start(year, month)?;
        let end = month_end(year, month)?;
        return Some(DateRange {
            start,
            end,
            kind: DateRangeKind::LastMonth,
            description: "Mes pasado".to_string(),
            confidence: CONFIDENCE,
        });
    }

    None
}

/// First instant of a month.
pub fn month_start(year: i32, month: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()
}

/// Last second of a month. December is capped at Dec 31 so the window
/// never spills into the next year.
pub fn month_end(year: i32, month: u32) -> Option<DateTime<Utc>> {
    if month == 12 {
        Utc.with_ymd_and_hms(year, 12, 31, 23, 59, 59).single()
    } else {
        month_start(year, month + 1).map(|next| next - Duration::seconds(1))
    }
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.replace('-', "/");
    NaiveDate::parse_from_str(&raw, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(&raw, "%d/%m/%y"))
        .ok()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::builtin_es()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn last_days_window() {
        let range = resolve_date_range("ultimos 30 dias", &lexicon(), now()).unwrap();
        assert_eq!(range.kind, DateRangeKind::LastDays);
        assert_eq!(range.end, now());
        assert_eq!(range.start, now() - Duration::days(30));
    }

    #[test]
    fn explicit_range_with_mixed_separators() {
        let range =
            resolve_date_range("del 1/11/2025 al 15-11-2025", &lexicon(), now()).unwrap();
        assert_eq!(range.kind, DateRangeKind::ExplicitRange);
        assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2025, 11, 15, 23, 59, 59).unwrap());
    }

    #[test]
    fn explicit_range_two_digit_year() {
        let range = resolve_date_range("del 01/02/25 al 10/02/25", &lexicon(), now()).unwrap();
        assert_eq!(range.start.year(), 2025);
    }

    #[test]
    fn month_defaults_to_current_year() {
        let range = resolve_date_range("ventas del mes de noviembre", &lexicon(), now()).unwrap();
        assert_eq!(range.kind, DateRangeKind::Month);
        assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2025, 11, 30, 23, 59, 59).unwrap());
        assert_eq!(range.description, "Mes de Noviembre 2025");
    }

    #[test]
    fn month_with_explicit_year() {
        let range = resolve_date_range("ventas en marzo de 2024", &lexicon(), now()).unwrap();
        assert_eq!(range.start, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn december_does_not_overflow() {
        let range = resolve_date_range("durante diciembre", &lexicon(), now()).unwrap();
        assert_eq!(range.end, Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn between_months_spans_first_to_last() {
        let range =
            resolve_date_range("compras entre agosto y octubre", &lexicon(), now()).unwrap();
        assert_eq!(range.kind, DateRangeKind::BetweenMonths);
        assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2025, 10, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn last_month_rule() {
        let range = resolve_date_range("reporte del mes pasado", &lexicon(), now()).unwrap();
        assert_eq!(range.kind, DateRangeKind::LastMonth);
        assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2025, 7, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn previous_month_handles_january() {
        assert_eq!(previous_month(2025, 1), (2024, 12));
    }

    #[test]
    fn last_days_beats_month_name() {
        let range =
            resolve_date_range("ultimos 15 dias de noviembre", &lexicon(), now()).unwrap();
        assert_eq!(range.kind, DateRangeKind::LastDays);
    }

    #[test]
    fn no_dates() {
        assert!(resolve_date_range("reporte de ventas", &lexicon(), now()).is_none());
    }
}

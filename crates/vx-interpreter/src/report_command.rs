//! Granular report command interpretation.
//!
//! Runs every resolver over the command, assembles filters through the
//! confidence-guarded draft, and emits an [`InterpretedCommand`] the
//! router either trusts (confidence ≥ 0.6) or discards in favor of the
//! keyword classifier.

use std::sync::{Arc, LazyLock};

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::{debug, info};
use vx_catalog::{CategoryDictionary, ClientDirectory, ProductCatalog};
use vx_protocol::Command;
use vx_protocol::entities::{
    DetectedEntities, DetectedEntity, PaymentMatch, PriceRange, QuantityRange,
};
use vx_protocol::filters::PaymentMethod;
use vx_protocol::parse::InterpretedCommand;
use vx_protocol::report::{OutputFormat, ReportType};

use crate::draft::FilterDraft;
use crate::error::InterpretResult;
use crate::lexicon::{Lexicon, any_word_match, contains_word};
use crate::resolvers;
use crate::scorer::report_confidence;
use crate::suggestions::report_suggestions;

/// Regexes that pin a command to a concrete report type. The longest
/// matching pattern wins, mirroring "more specific phrasing beats
/// generic phrasing".
static REPORT_TYPE_PATTERNS: LazyLock<Vec<(ReportType, Vec<Regex>)>> = LazyLock::new(|| {
    let table: &[(ReportType, &[&str])] = &[
        (
            ReportType::ComprasCliente,
            &[
                r"compras? (?:del?|que (?:realizo|hizo)) (?:el )?cliente",
                r"historial (?:de compras )?del? cliente",
                r"ventas? al? cliente",
                r"pedidos? del? cliente",
                r"ordenes? del? cliente",
            ],
        ),
        (
            ReportType::ProductosCompradosPorCliente,
            &[
                r"productos? que compro",
                r"que compro (?:el )?cliente",
                r"articulos? comprados? por",
            ],
        ),
        (
            ReportType::ClientesQueCompraronProducto,
            &[
                r"clientes? que compraron?",
                r"quienes? compraron?",
                r"quien compro",
            ],
        ),
        (
            ReportType::ProductosMasVendidos,
            &[
                r"productos? mas vendidos?",
                r"top (?:de )?productos?",
                r"best sellers?",
            ],
        ),
        (
            ReportType::VentasPorCategoriaEspecifica,
            &[
                r"ventas? (?:de|en) (?:la )?categoria",
                r"productos? (?:de|en) categoria",
            ],
        ),
        (
            ReportType::VentasPorRangoPrecio,
            &[
                r"entre \$?\d+(?:\.\d+)? y \$?\d+(?:\.\d+)?",
                r"mas (?:de|caros? que) \$?\d+",
                r"menos (?:de|baratos? que) \$?\d+",
            ],
        ),
        (
            ReportType::ComparativaClientes,
            &[r"comparar clientes?", r"comparativa (?:de|entre) clientes?"],
        ),
        (
            ReportType::TimelineComprasCliente,
            &[
                r"timeline (?:de compras)?",
                r"linea (?:de )?tiempo (?:de compras)?",
                r"cronologia (?:de compras)?",
            ],
        ),
        (
            ReportType::AnalisisComportamientoCliente,
            &[
                r"analisis (?:de )?(?:comportamiento )?(?:del? )?cliente",
                r"perfil (?:de compra )?(?:del? )?cliente",
            ],
        ),
    ];

    table
        .iter()
        .map(|(report_type, patterns)| {
            (
                *report_type,
                patterns.iter().map(|p| Regex::new(p).unwrap()).collect(),
            )
        })
        .collect()
});

/// Low-confidence floor under which refinement suggestions are attached.
const SUGGESTION_THRESHOLD: f64 = 0.5;

pub struct ReportCommandInterpreter {
    clients: Arc<dyn ClientDirectory>,
    products: Arc<dyn ProductCatalog>,
    categories: Arc<CategoryDictionary>,
    lexicon: Arc<Lexicon>,
}

impl ReportCommandInterpreter {
    pub fn new(
        clients: Arc<dyn ClientDirectory>,
        products: Arc<dyn ProductCatalog>,
        categories: Arc<CategoryDictionary>,
        lexicon: Arc<Lexicon>,
    ) -> Self {
        Self {
            clients,
            products,
            categories,
            lexicon,
        }
    }

    /// Interpret against the current wall clock.
    pub fn parse(&self, text: &str) -> InterpretResult<InterpretedCommand> {
        self.parse_at(text, Utc::now())
    }

    /// Interpret with an injected clock — date windows ("últimos 30
    /// días", bare month names) are functions of `now`.
    pub fn parse_at(&self, text: &str, now: DateTime<Utc>) -> InterpretResult<InterpretedCommand> {
        let command = Command::new(text);
        if command.is_blank() {
            return Ok(blank_interpretation());
        }
        let text = command.normalized.as_str();

        let report_type = detect_report_type(text, &self.lexicon);
        debug!(%report_type, "report type detected");

        let mut entities = DetectedEntities::default();
        let mut draft = FilterDraft::new();

        // Clients: the id is only adopted when exactly one candidate is
        // trustworthy — ambiguity leaves the filter unset.
        let clients = resolvers::resolve_clients(&command, self.clients.as_ref(), &self.lexicon)?;
        let trusted: Vec<_> = clients
            .iter()
            .filter(|c| c.confidence >= 0.7 && c.id.is_some())
            .collect();
        if trusted.len() == 1 {
            let client = trusted[0];
            draft.set_customer(client.confidence, client.id.unwrap_or_default(), &client.username);
        }
        for client in clients {
            entities.push(DetectedEntity::Client(client));
        }

        let products =
            resolvers::resolve_products(text, self.products.as_ref(), &self.lexicon)?;
        if products.len() == 1 {
            draft.set_product(products[0].confidence, products[0].id);
        }
        for product in products {
            entities.push(DetectedEntity::Product(product));
        }

        if let Some(category) = resolvers::resolve_category(text, &self.categories) {
            draft.set_category(category.confidence, &category.slug);
            entities.push(DetectedEntity::Category(category));
        }

        if let Some(brand) = resolvers::resolve_brand(text, &self.lexicon) {
            draft.set_brand(brand.confidence, &brand.name);
            entities.push(DetectedEntity::Brand(brand));
        }

        if let Some(price) = resolvers::resolve_price(text, &self.lexicon) {
            if let Some(min) = price.min {
                draft.set_price_min(price.confidence, min);
            }
            if let Some(max) = price.max {
                draft.set_price_max(price.confidence, max);
            }
            // Qualitative hints only matter for storefront ordering.
            if price.min.is_some() || price.max.is_some() {
                entities.push(DetectedEntity::PriceRange(price));
            }
        }

        if let Some(range) = resolvers::resolve_date_range(text, &self.lexicon, now) {
            draft.set_date_range(range.confidence, range.start, range.end, &range.description);
            entities.push(DetectedEntity::DateRange(range));
        }

        if let Some(payment) = resolvers::resolve_payment(text, &self.lexicon) {
            draft.set_payment_method(payment.confidence, payment.method);
            entities.push(DetectedEntity::PaymentMethod(payment));
        }

        if let Some(quantity) = resolvers::resolve_quantity(text) {
            draft.set_quantity(quantity.confidence, quantity.min, quantity.max);
            entities.push(DetectedEntity::Quantity(quantity));
        }

        let format = detect_format(text);
        let confidence = report_confidence(&entities, true);
        let interpretation = build_interpretation(report_type, &entities, format);
        let suggestions = if confidence < SUGGESTION_THRESHOLD {
            report_suggestions(&entities)
        } else {
            Vec::new()
        };

        info!(%report_type, confidence, "report command interpreted");

        Ok(InterpretedCommand {
            report_type,
            filters: draft.into_filters(),
            format,
            confidence,
            entities,
            interpretation,
            suggestions,
        })
    }
}

fn blank_interpretation() -> InterpretedCommand {
    InterpretedCommand {
        report_type: ReportType::VentasBasico,
        filters: Default::default(),
        format: OutputFormat::Json,
        confidence: 0.0,
        entities: DetectedEntities::default(),
        interpretation: String::new(),
        suggestions: Vec::new(),
    }
}

/// Longest matching pattern wins; without a pattern the command defaults
/// to the client-purchases report when a client noun is present, else the
/// generic sales report.
fn detect_report_type(text: &str, lexicon: &Lexicon) -> ReportType {
    let mut best: Option<(usize, ReportType)> = None;

    for (report_type, patterns) in REPORT_TYPE_PATTERNS.iter() {
        for pattern in patterns {
            if !pattern.is_match(text) {
                continue;
            }
            let score = pattern.as_str().len();
            if best.map(|(s, _)| score > s).unwrap_or(true) {
                best = Some((score, *report_type));
            }
        }
    }

    if let Some((_, report_type)) = best {
        return report_type;
    }

    if any_word_match(text, &lexicon.client_nouns) {
        ReportType::ComprasCliente
    } else {
        ReportType::VentasBasico
    }
}

fn detect_format(text: &str) -> OutputFormat {
    if contains_word(text, "pdf") {
        OutputFormat::Pdf
    } else if ["excel", "xlsx", "xls"].iter().any(|kw| contains_word(text, kw)) {
        OutputFormat::Excel
    } else {
        OutputFormat::Json
    }
}

fn build_interpretation(
    report_type: ReportType,
    entities: &DetectedEntities,
    format: OutputFormat,
) -> String {
    let mut parts = vec![format!("Tipo: {}", title_words(report_type.as_str()))];

    if !entities.clients.is_empty() {
        let names: Vec<&str> = entities.clients.iter().map(|c| c.username.as_str()).collect();
        parts.push(format!("Cliente(s): {}", names.join(", ")));
    }
    if !entities.products.is_empty() {
        let names: Vec<&str> = entities.products.iter().map(|p| p.name.as_str()).collect();
        parts.push(format!("Producto(s): {}", names.join(", ")));
    }
    if let Some(category) = entities.categories.first() {
        parts.push(format!("Categoría: {}", category.slug));
    }
    if let Some(brand) = entities.brands.first() {
        parts.push(format!("Marca: {}", brand.name));
    }
    if let Some(price) = &entities.price_range {
        parts.push(describe_price(price));
    }
    if let Some(range) = &entities.date_range {
        parts.push(format!("Período: {}", range.description));
    }
    if let Some(payment) = &entities.payment_method {
        parts.push(format!("Pago: {}", payment_label(payment)));
    }
    if let Some(quantity) = &entities.quantity_range {
        parts.push(describe_quantity(quantity));
    }
    parts.push(format!("Formato: {}", format.as_str().to_uppercase()));

    parts.join(" | ")
}

fn describe_price(price: &PriceRange) -> String {
    match (price.min, price.max) {
        (Some(min), Some(max)) => format!("Precio: ${min} - ${max}"),
        (Some(min), None) => format!("Precio: más de ${min}"),
        (None, Some(max)) => format!("Precio: menos de ${max}"),
        (None, None) => "Precio: sin monto".to_string(),
    }
}

fn describe_quantity(quantity: &QuantityRange) -> String {
    match (quantity.min, quantity.max) {
        (Some(min), Some(max)) => format!("Cantidad: {min} a {max}"),
        (Some(min), None) => format!("Cantidad: más de {min}"),
        _ => "Cantidad: sin límite".to_string(),
    }
}

fn payment_label(payment: &PaymentMatch) -> &'static str {
    match payment.method {
        PaymentMethod::Card => "tarjeta",
        PaymentMethod::Cash => "efectivo",
        PaymentMethod::Transfer => "transferencia",
    }
}

fn title_words(snake: &str) -> String {
    snake
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vx_catalog::{InMemoryClientDirectory, InMemoryProductCatalog};

    fn interpreter() -> ReportCommandInterpreter {
        ReportCommandInterpreter::new(
            Arc::new(InMemoryClientDirectory::with_sample_data()),
            Arc::new(InMemoryProductCatalog::with_sample_data()),
            Arc::new(CategoryDictionary::builtin_es()),
            Arc::new(Lexicon::builtin_es()),
        )
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn client_purchases_command_is_trusted() {
        let result = interpreter()
            .parse_at(
                "Generame un reporte de las compras que realizo el cliente Paul10 en el mes de noviembre",
                now(),
            )
            .unwrap();

        assert_eq!(result.report_type, ReportType::ComprasCliente);
        assert_eq!(result.filters.customer_id, Some(1));
        assert_eq!(result.filters.customer_username.as_deref(), Some("Paul10"));
        assert_eq!(
            result.filters.start_date,
            Some(Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            result.filters.end_date,
            Some(Utc.with_ymd_and_hms(2025, 11, 30, 23, 59, 59).unwrap())
        );
        assert_eq!(result.format, OutputFormat::Json);
        assert!(result.confidence >= 0.6, "confidence {}", result.confidence);
    }

    #[test]
    fn unknown_client_does_not_set_filter() {
        let result = interpreter()
            .parse_at("compras del cliente Desconocido99", now())
            .unwrap();

        assert!(result.filters.customer_id.is_none());
        assert_eq!(result.entities.clients.len(), 1);
        assert_eq!(result.entities.clients[0].confidence, 0.6);
    }

    #[test]
    fn price_range_command() {
        let result = interpreter()
            .parse_at("ventas entre 100 y 500", now())
            .unwrap();

        assert_eq!(result.report_type, ReportType::VentasPorRangoPrecio);
        assert_eq!(result.filters.price_min, Some(100.0));
        assert_eq!(result.filters.price_max, Some(500.0));
    }

    #[test]
    fn client_noun_defaults_to_client_purchases() {
        let result = interpreter().parse_at("informacion del cliente", now()).unwrap();
        assert_eq!(result.report_type, ReportType::ComprasCliente);
    }

    #[test]
    fn no_pattern_defaults_to_basic_sales() {
        let result = interpreter().parse_at("dame un resumen", now()).unwrap();
        assert_eq!(result.report_type, ReportType::VentasBasico);
    }

    #[test]
    fn pdf_format_detected() {
        let result = interpreter()
            .parse_at("historial del cliente Paul10 en pdf", now())
            .unwrap();
        assert_eq!(result.format, OutputFormat::Pdf);
    }

    #[test]
    fn single_product_sets_filter() {
        let result = interpreter()
            .parse_at("clientes que compraron refrigerador lg", now())
            .unwrap();
        assert_eq!(result.report_type, ReportType::ClientesQueCompraronProducto);
        assert_eq!(result.filters.product_id, Some(101));
    }

    #[test]
    fn low_confidence_attaches_suggestions() {
        let result = interpreter().parse_at("dame un resumen", now()).unwrap();
        assert!(result.confidence < 0.5);
        assert!(!result.suggestions.is_empty());
        assert!(result.suggestions.len() <= 3);
    }

    #[test]
    fn blank_command_scores_zero() {
        let result = interpreter().parse_at("   ", now()).unwrap();
        assert_eq!(result.confidence, 0.0);
        assert!(result.filters.is_empty());
    }

    #[test]
    fn interpretation_mentions_detected_parts() {
        let result = interpreter()
            .parse_at("compras del cliente Paul10 en noviembre", now())
            .unwrap();
        assert!(result.interpretation.contains("Cliente(s): Paul10"));
        assert!(result.interpretation.contains("Período: Mes de Noviembre 2025"));
        assert!(result.interpretation.contains("Formato: JSON"));
    }
}

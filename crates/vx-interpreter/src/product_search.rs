//! Storefront product search interpretation.
//!
//! Turns "buscar refrigeradores baratos en stock" into listing filters
//! plus a residual free-text term. The term is what remains after every
//! recognized keyword class is stripped, so a detected category never
//! re-appears as a search term.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, info};
use vx_catalog::CategoryDictionary;
use vx_protocol::Command;
use vx_protocol::entities::PriceHint;
use vx_protocol::parse::{ProductFilters, ProductSearchResult, SortKey};

use crate::lexicon::{Lexicon, any_word_match, contains_word};
use crate::resolvers;
use crate::suggestions::search_suggestions;

// Confidence contributions per detected class.
const WEIGHT_CATEGORY: f64 = 0.20;
const WEIGHT_PRICE: f64 = 0.20;
const WEIGHT_STOCK: f64 = 0.10;
const WEIGHT_ORDERING: f64 = 0.10;
const WEIGHT_BRAND: f64 = 0.10;
const WEIGHT_COLOR: f64 = 0.08;
const WEIGHT_FEATURE: f64 = 0.05;
const WEIGHT_SIZE: f64 = 0.08;
const WEIGHT_TERM: f64 = 0.25;

/// Score given to a bare free-text search when nothing else matched.
const GENERIC_TERM_CONFIDENCE: f64 = 0.4;
/// Floor applied when something was detected but the sum stays low.
const DETECTION_FLOOR: f64 = 0.35;
const FAILURE_THRESHOLD: f64 = 0.3;
const SUGGESTION_CEILING: f64 = 0.7;

static RE_PRICE_BETWEEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"entre\s+\$?\d+(?:\.\d+)?\s+y\s+\$?\d+(?:\.\d+)?").unwrap()
});

static RE_PRICE_BOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:menos|menor|menores|inferior|bajo|hasta|maximo|sobre|mayor|mayores|superior|mas|desde|minimo)\s+(?:de\s+|a\s+|que\s+)?\$?\d+(?:\.\d+)?",
    )
    .unwrap()
});

static RE_CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?\s*(?:dolares|pesos|usd)").unwrap());

pub struct ProductSearchInterpreter {
    categories: Arc<CategoryDictionary>,
    lexicon: Arc<Lexicon>,
}

impl ProductSearchInterpreter {
    pub fn new(categories: Arc<CategoryDictionary>, lexicon: Arc<Lexicon>) -> Self {
        Self {
            categories,
            lexicon,
        }
    }

    pub fn parse(&self, text: &str) -> ProductSearchResult {
        let command = Command::new(text);
        if command.is_blank() {
            let mut result = ProductSearchResult::failed(text, "El comando está vacío");
            result.interpretation = "Comando vacío".to_string();
            return result;
        }
        let normalized = command.normalized.as_str();
        let lexicon = self.lexicon.as_ref();

        let mut filters = ProductFilters::default();
        let mut confidence = 0.0;
        let mut parts: Vec<String> = Vec::new();
        let mut stripped_matches: Vec<String> = Vec::new();

        // Category
        if let Some(category) = resolvers::resolve_category(normalized, &self.categories) {
            debug!(slug = %category.slug, "search category detected");
            parts.push(format!("Categoría: {}", category.slug));
            filters.category_slug = Some(category.slug);
            confidence += WEIGHT_CATEGORY;
        }

        // Price — numeric bounds, or a qualitative hint mapped to ordering
        if let Some(price) = resolvers::resolve_price(normalized, lexicon) {
            if let Some(min) = price.min {
                filters.price_min = Some(min);
                parts.push(format!("Precio mín: ${min}"));
            }
            if let Some(max) = price.max {
                filters.price_max = Some(max);
                parts.push(format!("Precio máx: ${max}"));
            }
            if let Some(hint) = price.hint
                && filters.ordering.is_none()
            {
                let key = match hint {
                    PriceHint::Economy => SortKey::PriceAsc,
                    PriceHint::Premium => SortKey::PriceDesc,
                };
                filters.ordering = Some(key);
                parts.push(format!("Orden: {}", ordering_label(key)));
            }
            confidence += WEIGHT_PRICE;
        }

        // Stock
        if any_word_match(normalized, &lexicon.stock_keywords) {
            filters.in_stock = true;
            confidence += WEIGHT_STOCK;
            parts.push("Solo disponibles".to_string());
        }

        // Explicit ordering phrase, then newness keywords
        if filters.ordering.is_none()
            && let Some(key) = detect_ordering(normalized, lexicon)
        {
            filters.ordering = Some(key);
            confidence += WEIGHT_ORDERING;
            parts.push(format!("Orden: {}", ordering_label(key)));
        }

        // Brand / color / features / size
        if let Some(brand) = resolvers::resolve_brand(normalized, lexicon) {
            stripped_matches.push(brand.name.to_lowercase());
            parts.push(format!("Marca: {}", brand.name));
            filters.brand = Some(brand.name);
            confidence += WEIGHT_BRAND;
        }
        if let Some(color) = resolvers::resolve_color(normalized, lexicon) {
            stripped_matches.push(color.name.clone());
            parts.push(format!("Color: {}", color.name));
            filters.color = Some(color.name);
            confidence += WEIGHT_COLOR;
        }
        let features = resolvers::resolve_features(normalized, lexicon);
        if !features.is_empty() {
            let labels: Vec<&str> = features.iter().map(|f| f.feature.as_str()).collect();
            parts.push(format!("Características: {}", labels.join(", ")));
            confidence += WEIGHT_FEATURE * features.len() as f64;
            for feature in &features {
                stripped_matches.push(feature.matched.clone());
            }
            filters.features = features.into_iter().map(|f| f.feature).collect();
        }
        if let Some(size) = resolvers::resolve_size(normalized, lexicon) {
            stripped_matches.push(size.matched.clone());
            parts.push(format!("Tamaño: {}", size.matched));
            filters.size = Some(size.spec);
            confidence += WEIGHT_SIZE;
        }

        // Residual term
        let term = self.extract_search_term(normalized, &stripped_matches);
        let mut search_term = None;
        if let Some(term) = term {
            parts.push(format!("Buscando: {term}"));
            search_term = Some(term);
            confidence += WEIGHT_TERM;
        }

        // Nothing at all: fall back to the whole cleaned text
        if search_term.is_none() && filters.is_empty() {
            let generic = self.clean_search_verbs(normalized);
            if !generic.is_empty() {
                parts.push(format!("Búsqueda general: {generic}"));
                search_term = Some(generic);
                confidence = GENERIC_TERM_CONFIDENCE;
            }
        }

        if (search_term.is_some() || !filters.is_empty()) && confidence < FAILURE_THRESHOLD {
            confidence = DETECTION_FLOOR;
        }

        if confidence < FAILURE_THRESHOLD {
            let mut result = ProductSearchResult::failed(
                command.raw.as_str(),
                "No se detectaron criterios de búsqueda válidos",
            );
            result.interpretation = "No se pudo interpretar el comando".to_string();
            result.suggestions = search_suggestions(&filters, false);
            return result;
        }

        confidence = confidence.min(1.0);
        let suggestions = if confidence < SUGGESTION_CEILING {
            search_suggestions(&filters, search_term.is_some())
        } else {
            Vec::new()
        };

        let interpretation = if parts.is_empty() {
            "Búsqueda de productos".to_string()
        } else {
            parts.join(" | ")
        };

        info!(confidence, ?search_term, "product search interpreted");

        ProductSearchResult {
            success: true,
            search_term,
            filters,
            confidence,
            interpretation,
            original_text: command.raw,
            suggestions,
            error: None,
        }
    }

    /// Strip every recognized keyword class and the stop words; whatever
    /// survives is the free-text term.
    fn extract_search_term(&self, text: &str, extra_matches: &[String]) -> Option<String> {
        let lexicon = self.lexicon.as_ref();
        let mut cleaned = text.to_string();

        // Multiword phrases first, then single keywords.
        for (phrase, _) in &lexicon.ordering_phrases {
            cleaned = cleaned.replace(phrase.as_str(), " ");
        }
        cleaned = strip_pattern(&cleaned, &RE_PRICE_BETWEEN);
        cleaned = strip_pattern(&cleaned, &RE_PRICE_BOUND);
        cleaned = strip_pattern(&cleaned, &RE_CURRENCY);

        for matched in extra_matches {
            cleaned = strip_words(&cleaned, std::slice::from_ref(matched));
        }
        cleaned = strip_words(&cleaned, &lexicon.search_verbs);
        cleaned = strip_words(&cleaned, &lexicon.cheap_keywords);
        cleaned = strip_words(&cleaned, &lexicon.expensive_keywords);
        cleaned = strip_words(&cleaned, &lexicon.stock_keywords);
        cleaned = strip_words(&cleaned, &lexicon.newest_keywords);

        let synonyms: Vec<String> = self
            .categories
            .all_synonyms()
            .map(|s| s.to_string())
            .collect();
        cleaned = strip_words(&cleaned, &synonyms);

        let term: String = cleaned
            .split_whitespace()
            .filter(|word| !lexicon.stop_words.iter().any(|s| s == word))
            .collect::<Vec<_>>()
            .join(" ");

        (!term.is_empty()).then_some(term)
    }

    /// Light cleanup for the generic fallback: drop search verbs only.
    fn clean_search_verbs(&self, text: &str) -> String {
        strip_words(text, &self.lexicon.search_verbs)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn detect_ordering(text: &str, lexicon: &Lexicon) -> Option<SortKey> {
    for (phrase, key) in &lexicon.ordering_phrases {
        if text.contains(phrase.as_str()) {
            return Some(*key);
        }
    }
    if any_word_match(text, &lexicon.newest_keywords) {
        return Some(SortKey::NewestFirst);
    }
    None
}

fn ordering_label(key: SortKey) -> &'static str {
    match key {
        SortKey::PriceAsc => "precio ascendente",
        SortKey::PriceDesc => "precio descendente",
        SortKey::NewestFirst => "más recientes primero",
    }
}

/// Remove whole-word occurrences of each keyword (multiword included).
fn strip_words(text: &str, keywords: &[String]) -> String {
    let mut cleaned = text.to_string();
    for keyword in keywords {
        while contains_word(&cleaned, keyword) {
            let Some(pos) = cleaned.find(keyword.as_str()) else {
                break;
            };
            // contains_word confirmed a boundary match exists; remove the
            // first raw occurrence and re-check.
            cleaned.replace_range(pos..pos + keyword.len(), " ");
        }
    }
    cleaned
}

fn strip_pattern(text: &str, pattern: &Regex) -> String {
    pattern.replace_all(text, " ").to_string()
}

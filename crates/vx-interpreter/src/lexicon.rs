//! Spanish keyword tables driving the resolvers.
//!
//! Everything the pipeline matches against lives in one injectable value:
//! declarative (keyword → semantic tag) tables evaluated by the generic
//! helpers below. All entries are stored normalized (lowercase, no
//! diacritics) so they match folded command text. Built once at startup;
//! tests substitute synthetic tables.

use regex::Regex;
use vx_protocol::entities::{Feature, SizeClass};
use vx_protocol::filters::PaymentMethod;
use vx_protocol::normalize;
use vx_protocol::parse::SortKey;

#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Verbs that introduce a search ("buscar", "muestra", …).
    pub search_verbs: Vec<String>,
    /// Qualitative low-price words. Checked before `expensive_keywords`;
    /// when both appear the cheap reading wins.
    pub cheap_keywords: Vec<String>,
    pub expensive_keywords: Vec<String>,
    pub stock_keywords: Vec<String>,
    pub newest_keywords: Vec<String>,
    /// Literal ordering phrases → sort key, tried in declaration order.
    pub ordering_phrases: Vec<(String, SortKey)>,
    pub brands: Vec<String>,
    pub colors: Vec<String>,
    /// Feature tag → trigger keywords.
    pub features: Vec<(Feature, Vec<String>)>,
    /// Any hit adds the synthetic energy-efficiency feature.
    pub energy_keywords: Vec<String>,
    /// Payment method → trigger keywords, tried in declaration order.
    pub payments: Vec<(PaymentMethod, Vec<String>)>,
    /// Descriptive size bucket → trigger keywords.
    pub size_classes: Vec<(SizeClass, Vec<String>)>,
    /// Unit words that mark a number as a quantity, not a price.
    pub quantity_units: Vec<String>,
    /// Nouns whose presence defaults a report command to the
    /// client-purchases report.
    pub client_nouns: Vec<String>,
    /// Tokens never accepted as username candidates.
    pub client_stop_tokens: Vec<String>,
    pub stop_words: Vec<String>,
    months: Vec<(String, u32)>,
    month_re: Regex,
    between_months_re: Regex,
}

impl Lexicon {
    /// The production Spanish tables.
    pub fn builtin_es() -> Self {
        let months: Vec<(String, u32)> = [
            "enero",
            "febrero",
            "marzo",
            "abril",
            "mayo",
            "junio",
            "julio",
            "agosto",
            "septiembre",
            "octubre",
            "noviembre",
            "diciembre",
        ]
        .iter()
        .enumerate()
        .map(|(i, name)| (name.to_string(), i as u32 + 1))
        .collect();

        let stop_words = to_owned(&[
            "de", "la", "el", "los", "las", "un", "una", "unos", "unas", "con", "sin", "para",
            "por", "en", "a", "y", "o", "que", "producto", "productos", "articulo", "articulos",
            "cosa", "cosas", "item", "items",
        ]);

        let mut client_stop_tokens = stop_words.clone();
        client_stop_tokens.extend(months.iter().map(|(name, _)| name.clone()));
        client_stop_tokens.extend(to_owned(&[
            "reporte",
            "reportes",
            "informe",
            "informes",
            "ventas",
            "venta",
            "compras",
            "compra",
            "pedidos",
            "ordenes",
            "historial",
            "timeline",
            "analisis",
            "dashboard",
            "predicciones",
            "prediccion",
            "mes",
            "meses",
            "semana",
            "dia",
            "dias",
            "ano",
            "anos",
            "ultimo",
            "ultimos",
            "pasado",
            "pasados",
            "clientes",
            "cliente",
        ]));

        let (month_re, between_months_re) = compile_month_patterns(&months);

        Self {
            search_verbs: to_owned(&[
                "buscar",
                "busca",
                "encuentra",
                "encontrar",
                "mostrar",
                "muestra",
                "ver",
                "dame",
                "quiero",
                "necesito",
                "hay",
                "cuales",
                "listar",
                "lista",
            ]),
            cheap_keywords: to_owned(&[
                "barato",
                "baratos",
                "barata",
                "baratas",
                "economico",
                "economicos",
                "economica",
                "economicas",
                "accesible",
                "accesibles",
                "asequible",
                "asequibles",
                "modico",
            ]),
            expensive_keywords: to_owned(&[
                "caro", "caros", "cara", "caras", "costoso", "costosos", "costosas", "premium",
                "exclusivo", "exclusivos",
            ]),
            stock_keywords: to_owned(&[
                "disponible",
                "disponibles",
                "en stock",
                "con stock",
                "stock",
                "existencia",
                "existencias",
            ]),
            newest_keywords: to_owned(&[
                "nuevo",
                "nuevos",
                "nueva",
                "nuevas",
                "reciente",
                "recientes",
                "recien llegado",
                "recien llegados",
            ]),
            ordering_phrases: vec![
                ("mayor a menor precio".into(), SortKey::PriceDesc),
                ("de mayor a menor".into(), SortKey::PriceDesc),
                ("mas caro primero".into(), SortKey::PriceDesc),
                ("menor a mayor precio".into(), SortKey::PriceAsc),
                ("de menor a mayor".into(), SortKey::PriceAsc),
                ("mas barato primero".into(), SortKey::PriceAsc),
                ("ordenar por precio".into(), SortKey::PriceAsc),
                ("por precio".into(), SortKey::PriceAsc),
            ],
            brands: to_owned(&[
                "lg",
                "samsung",
                "whirlpool",
                "ge",
                "mabe",
                "frigidaire",
                "sony",
                "panasonic",
                "electrolux",
                "bosch",
                "siemens",
                "oster",
            ]),
            colors: to_owned(&[
                "blanco", "blanca", "negro", "negra", "gris", "plateado", "plata", "rojo", "azul",
                "verde", "beige", "acero",
            ]),
            features: vec![
                (
                    Feature::NoFrost,
                    to_owned(&["no frost", "nofrost", "sin escarcha"]),
                ),
                (Feature::Inverter, to_owned(&["inverter"])),
                (
                    Feature::Smart,
                    to_owned(&["smart", "inteligente", "wifi"]),
                ),
                (Feature::Digital, to_owned(&["digital"])),
                (
                    Feature::Quiet,
                    to_owned(&["silencioso", "silenciosa", "bajo ruido"]),
                ),
                (
                    Feature::Multifunction,
                    to_owned(&["multifuncion", "multifunciones", "multiuso"]),
                ),
            ],
            energy_keywords: to_owned(&[
                "eficiencia energetica",
                "bajo consumo",
                "ahorro de energia",
                "ahorrador",
            ]),
            payments: vec![
                (
                    PaymentMethod::Card,
                    to_owned(&["tarjeta", "credito", "debito", "card", "stripe"]),
                ),
                (
                    PaymentMethod::Cash,
                    to_owned(&["efectivo", "cash", "contado"]),
                ),
                (
                    PaymentMethod::Transfer,
                    to_owned(&["transferencia", "deposito", "transfer"]),
                ),
            ],
            size_classes: vec![
                (
                    SizeClass::Large,
                    to_owned(&["grande", "grandes", "amplio", "amplia"]),
                ),
                (SizeClass::Medium, to_owned(&["mediano", "mediana"])),
                (
                    SizeClass::Compact,
                    to_owned(&[
                        "pequeno", "pequena", "pequenos", "pequenas", "chico", "chica",
                        "compacto", "compacta",
                    ]),
                ),
            ],
            quantity_units: to_owned(&[
                "unidad",
                "unidades",
                "producto",
                "productos",
                "item",
                "items",
                "articulo",
                "articulos",
            ]),
            client_nouns: to_owned(&[
                "cliente",
                "clientes",
                "comprador",
                "compradores",
                "usuario",
                "user",
                "customer",
                "persona",
                "quien",
                "quienes",
            ]),
            client_stop_tokens,
            stop_words,
            months,
            month_re,
            between_months_re,
        }
    }

    pub fn months(&self) -> &[(String, u32)] {
        &self.months
    }

    pub fn month_number(&self, name: &str) -> Option<u32> {
        let name = normalize(name);
        self.months
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, num)| *num)
    }

    pub fn month_name(&self, number: u32) -> Option<&str> {
        self.months
            .iter()
            .find(|(_, num)| *num == number)
            .map(|(name, _)| name.as_str())
    }

    /// `(mes de|en|durante) <month> [de <year>]`, capture groups:
    /// 1 = month name, 2 = optional 4-digit year.
    pub fn month_re(&self) -> &Regex {
        &self.month_re
    }

    /// `entre <month> y <month>`, capture groups 1 and 2.
    pub fn between_months_re(&self) -> &Regex {
        &self.between_months_re
    }

    /// Replace the month table (synthetic locales in tests) and recompile
    /// the derived patterns.
    pub fn set_months(&mut self, months: Vec<(String, u32)>) {
        let (month_re, between_months_re) = compile_month_patterns(&months);
        self.months = months;
        self.month_re = month_re;
        self.between_months_re = between_months_re;
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin_es()
    }
}

fn compile_month_patterns(months: &[(String, u32)]) -> (Regex, Regex) {
    let names: Vec<String> = months.iter().map(|(n, _)| regex::escape(n)).collect();
    let alternation = names.join("|");
    let month_re = Regex::new(&format!(
        r"\b(?:mes de|de|en|durante)\s+({alternation})(?:\s+(?:de|del)\s+(\d{{4}}))?\b"
    ))
    .unwrap();
    let between_months_re = Regex::new(&format!(
        r"\bentre\s+({alternation})\s+y\s+({alternation})\b"
    ))
    .unwrap();
    (month_re, between_months_re)
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ── Generic matching helpers ──────────────────────────────────

/// Whole-word containment of `needle` (possibly multiword) in `haystack`.
/// Both sides are assumed normalized.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let bytes = haystack.as_bytes();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let boundary_before = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let boundary_after = end == haystack.len() || !bytes[end].is_ascii_alphanumeric();
        if boundary_before && boundary_after {
            return true;
        }
        from = start + 1;
    }
    false
}

/// First keyword (in declaration order) that matches whole-word.
pub fn first_word_match<'a>(haystack: &str, keywords: &'a [String]) -> Option<&'a str> {
    keywords
        .iter()
        .map(String::as_str)
        .find(|kw| contains_word(haystack, kw))
}

/// True when any keyword matches whole-word.
pub fn any_word_match(haystack: &str, keywords: &[String]) -> bool {
    first_word_match(haystack, keywords).is_some()
}

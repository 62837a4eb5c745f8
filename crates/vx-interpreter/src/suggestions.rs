//! Refinement suggestions for low-confidence interpretations.

use vx_protocol::entities::DetectedEntities;
use vx_protocol::parse::ProductFilters;

pub const MAX_SUGGESTIONS: usize = 3;

/// Hints for a weak report interpretation, keyed off which entity kinds
/// are missing.
pub fn report_suggestions(entities: &DetectedEntities) -> Vec<String> {
    let mut suggestions = Vec::new();

    if entities.clients.is_empty() {
        suggestions
            .push("Indica un cliente (ej: 'cliente Paul10' o 'Juan García')".to_string());
    }
    if entities.date_range.is_none() {
        suggestions
            .push("Agrega un período (ej: 'en noviembre' o 'últimos 30 días')".to_string());
    }
    if entities.categories.is_empty() && entities.products.is_empty() {
        suggestions.push(
            "Especifica un producto o categoría (ej: 'refrigeradores' o 'Refrigerador LG 500L')"
                .to_string(),
        );
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Hints for a weak product search.
pub fn search_suggestions(filters: &ProductFilters, has_term: bool) -> Vec<String> {
    let mut suggestions = Vec::new();

    if filters.category_slug.is_none() {
        suggestions
            .push("Menciona una categoría (ej: 'refrigeradores' o 'lavadoras')".to_string());
    }
    if filters.price_min.is_none() && filters.price_max.is_none() {
        suggestions
            .push("Acota el precio (ej: 'entre 200 y 500' o 'menos de 300')".to_string());
    }
    if !has_term {
        suggestions.push("Nombra el producto que buscas (ej: 'refrigerador LG')".to_string());
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

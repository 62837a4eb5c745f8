//! Category detection over the synonym dictionary.

use vx_catalog::CategoryDictionary;
use vx_protocol::entities::CategoryMatch;

use crate::lexicon::contains_word;

const CONFIDENCE: f64 = 0.9;

/// Longest whole-word synonym match wins; ties break toward the earlier
/// dictionary entry (and earlier synonym within an entry). At most one
/// category per command.
pub fn resolve_category(text: &str, categories: &CategoryDictionary) -> Option<CategoryMatch> {
    let mut best: Option<(usize, CategoryMatch)> = None;

    for entry in categories.entries() {
        for synonym in &entry.synonyms {
            if !contains_word(text, synonym) {
                continue;
            }
            let is_better = match &best {
                Some((len, _)) => synonym.len() > *len,
                None => true,
            };
            if is_better {
                best = Some((
                    synonym.len(),
                    CategoryMatch {
                        slug: entry.slug.clone(),
                        keyword: synonym.clone(),
                        confidence: CONFIDENCE,
                    },
                ));
            }
        }
    }

    best.map(|(_, m)| m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_plural_synonym() {
        let dict = CategoryDictionary::builtin_es();
        let found = resolve_category("buscar refrigeradores", &dict).unwrap();
        assert_eq!(found.slug, "refrigeracion");
        assert_eq!(found.keyword, "refrigeradores");
    }

    #[test]
    fn longest_synonym_wins() {
        let dict = CategoryDictionary::new(vec![
            ("a", vec!["aire"]),
            ("b", vec!["aire acondicionado"]),
        ]);
        let found = resolve_category("quiero un aire acondicionado", &dict).unwrap();
        assert_eq!(found.slug, "b");
    }

    #[test]
    fn tie_breaks_to_declaration_order() {
        let dict = CategoryDictionary::new(vec![("x", vec!["horno"]), ("y", vec!["anafe"])]);
        let found = resolve_category("horno y anafe", &dict).unwrap();
        assert_eq!(found.slug, "x");
    }

    #[test]
    fn requires_whole_word() {
        let dict = CategoryDictionary::builtin_es();
        // "aire" must not fire inside another word.
        assert!(resolve_category("multiaires industriales", &dict).is_none());
    }

    #[test]
    fn no_category_is_none() {
        let dict = CategoryDictionary::builtin_es();
        assert!(resolve_category("reporte de ventas", &dict).is_none());
    }
}

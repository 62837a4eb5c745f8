//! Category synonym dictionary.
//!
//! An ordered slug → synonyms map. Order matters: when two categories
//! match synonyms of equal length, the earlier declaration wins.

use serde::{Deserialize, Serialize};
use vx_protocol::normalize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub slug: String,
    pub synonyms: Vec<String>,
}

/// Immutable, injectable category dictionary. Built once at startup;
/// tests substitute synthetic tables via [`CategoryDictionary::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDictionary {
    entries: Vec<CategoryEntry>,
}

impl CategoryDictionary {
    /// Build from (slug, synonyms) pairs. Synonyms are normalized so the
    /// dictionary matches folded command text.
    pub fn new(entries: Vec<(impl Into<String>, Vec<&str>)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(slug, synonyms)| CategoryEntry {
                slug: slug.into(),
                synonyms: synonyms.into_iter().map(normalize).collect(),
            })
            .collect();
        Self { entries }
    }

    /// The storefront's appliance taxonomy.
    pub fn builtin_es() -> Self {
        Self::new(vec![
            (
                "refrigeracion",
                vec![
                    "refrigerador",
                    "refrigeradores",
                    "refri",
                    "nevera",
                    "neveras",
                    "frigorifico",
                    "frigo",
                    "congelador",
                    "congeladores",
                    "heladera",
                    "heladeras",
                    "freezer",
                ],
            ),
            (
                "lavado",
                vec![
                    "lavadora",
                    "lavadoras",
                    "secadora",
                    "secadoras",
                    "lavasecadora",
                    "lavarropas",
                    "lavasecarropas",
                    "lavavajilla",
                    "lavavajillas",
                ],
            ),
            (
                "cocina",
                vec![
                    "estufa", "estufas", "horno", "hornos", "parrilla", "cocineta", "anafe",
                    "anafes", "cocina", "cocinas",
                ],
            ),
            (
                "climatizacion",
                vec![
                    "aire",
                    "aires",
                    "acondicionado",
                    "climatizador",
                    "climatizadores",
                    "ventilador",
                    "ventiladores",
                    "calefactor",
                    "split",
                ],
            ),
            (
                "pequenos",
                vec![
                    "microondas",
                    "licuadora",
                    "licuadoras",
                    "batidora",
                    "batidoras",
                    "cafetera",
                    "cafeteras",
                    "tostadora",
                    "tostadoras",
                    "sandwichera",
                    "plancha",
                    "planchas",
                    "procesadora",
                ],
            ),
            (
                "audio-video",
                vec![
                    "tv",
                    "television",
                    "televisiones",
                    "televisor",
                    "televisores",
                    "parlante",
                    "parlantes",
                    "bocina",
                    "bocinas",
                    "auricular",
                    "auriculares",
                    "soundbar",
                ],
            ),
            (
                "computacion",
                vec![
                    "laptop",
                    "laptops",
                    "tablet",
                    "tablets",
                    "monitor",
                    "monitores",
                    "teclado",
                    "teclados",
                    "mouse",
                    "impresora",
                    "impresoras",
                ],
            ),
        ])
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    /// Slug for an exact (normalized) synonym, if any.
    pub fn resolve(&self, keyword: &str) -> Option<&str> {
        let keyword = normalize(keyword);
        self.entries
            .iter()
            .find(|e| e.synonyms.iter().any(|s| *s == keyword))
            .map(|e| e.slug.as_str())
    }

    /// Synonyms for a slug.
    pub fn synonyms(&self, slug: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.slug == slug)
            .map(|e| e.synonyms.as_slice())
    }

    /// Every synonym across all categories (for term stripping).
    pub fn all_synonyms(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|e| e.synonyms.iter().map(String::as_str))
    }
}

impl Default for CategoryDictionary {
    fn default() -> Self {
        Self::builtin_es()
    }
}

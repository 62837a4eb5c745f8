//! Sample data sets for tests and the demo CLI.

use crate::clients::{ClientRecord, InMemoryClientDirectory};
use crate::products::{InMemoryProductCatalog, ProductRecord};

impl InMemoryClientDirectory {
    /// Directory with a handful of storefront customers.
    pub fn with_sample_data() -> Self {
        fn rec(id: u64, username: &str, first: &str, last: &str) -> ClientRecord {
            ClientRecord {
                id,
                username: username.into(),
                first_name: first.into(),
                last_name: last.into(),
            }
        }
        Self::new(vec![
            rec(1, "Paul10", "Paul", "Martinez"),
            rec(2, "maria.lopez", "Maria", "Lopez"),
            rec(3, "jgarcia", "Juan", "Garcia"),
            rec(4, "ana_torres", "Ana", "Torres"),
            rec(5, "carlos88", "Carlos", "Ruiz"),
            rec(6, "lucia.perez", "Lucia", "Perez"),
        ])
    }
}

impl InMemoryProductCatalog {
    /// Catalog with a representative slice of the appliance inventory.
    pub fn with_sample_data() -> Self {
        fn rec(id: u64, name: &str) -> ProductRecord {
            ProductRecord {
                id,
                name: name.into(),
            }
        }
        Self::new(vec![
            rec(101, "Refrigerador LG 500L No Frost"),
            rec(102, "Lavadora Samsung EcoBubble 18kg"),
            rec(103, "Microondas Panasonic Inox"),
            rec(104, "Aire Acondicionado Split Inverter 12000 BTU"),
            rec(105, "Licuadora Oster Clasica"),
            rec(106, "Estufa Mabe 6 Quemadores"),
            rec(107, "Secadora Whirlpool 20kg"),
            rec(108, "Congelador Frigidaire Horizontal"),
        ])
    }
}

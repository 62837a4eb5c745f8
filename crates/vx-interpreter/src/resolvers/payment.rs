//! Payment method detection — first method whose keyword matches wins.

use vx_protocol::entities::PaymentMatch;

use crate::lexicon::{Lexicon, first_word_match};

const CONFIDENCE: f64 = 0.8;

pub fn resolve_payment(text: &str, lexicon: &Lexicon) -> Option<PaymentMatch> {
    for (method, keywords) in &lexicon.payments {
        if let Some(keyword) = first_word_match(text, keywords) {
            return Some(PaymentMatch {
                method: *method,
                keyword: keyword.to_string(),
                confidence: CONFIDENCE,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use vx_protocol::filters::PaymentMethod;

    #[test]
    fn card_keywords() {
        let lexicon = Lexicon::builtin_es();
        let found = resolve_payment("compras con tarjeta", &lexicon).unwrap();
        assert_eq!(found.method, PaymentMethod::Card);
        assert_eq!(found.keyword, "tarjeta");
    }

    #[test]
    fn cash_and_transfer() {
        let lexicon = Lexicon::builtin_es();
        assert_eq!(
            resolve_payment("pagos en efectivo", &lexicon).unwrap().method,
            PaymentMethod::Cash
        );
        assert_eq!(
            resolve_payment("por transferencia", &lexicon).unwrap().method,
            PaymentMethod::Transfer
        );
    }

    #[test]
    fn first_method_in_order_wins() {
        let lexicon = Lexicon::builtin_es();
        // Card is declared before cash.
        let found = resolve_payment("tarjeta o efectivo", &lexicon).unwrap();
        assert_eq!(found.method, PaymentMethod::Card);
    }

    #[test]
    fn none_without_keywords() {
        let lexicon = Lexicon::builtin_es();
        assert!(resolve_payment("reporte de ventas", &lexicon).is_none());
    }
}

//! Hand-off of a finished cart to the quote form page.

use url::form_urlencoded;

use crate::model::{Cart, Qualification};
use crate::util::format_amount;

/// Values posted by the cart's lead form alongside the contact fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuotePayload {
    pub products: String,
    pub total: String,
}

impl QuotePayload {
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            products: cart.summary(),
            total: format_amount(cart.total()),
        }
    }
}

/// `{form_action}?PRODUCTS=…&TOTAL=…`, plus whichever qualification answers
/// were given.
pub fn quote_url(form_action: &str, cart: &Cart, answers: &Qualification) -> String {
    let payload = QuotePayload::from_cart(cart);
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("PRODUCTS", &payload.products);
    query.append_pair("TOTAL", &payload.total);
    if let Some(p) = answers.project_type {
        query.append_pair("PROJECT_TYPE", p.label());
    }
    if let Some(t) = answers.timeline {
        query.append_pair("TIMELINE", t.label());
    }
    if let Some(s) = answers.scope {
        query.append_pair("SCOPE", s.label());
    }
    let sep = if form_action.contains('?') { '&' } else { '?' };
    format!("{form_action}{sep}{}", query.finish())
}

/// Leave the app for the quote form page.
pub fn redirect(url: &str) {
    log::info!(target: "quote", "redirecting to {url}");
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        log::error!(target: "quote", "redirect failed: {e:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartItem, FrameId, ProductDraft, ProjectType, Scope};
    use url::Url;

    fn cart() -> Cart {
        let draft = ProductDraft {
            width_text: "120".into(),
            height_text: "180".into(),
            quantity: 2,
            ..ProductDraft::default()
        };
        let mut cart = Cart::default();
        cart.push(CartItem::from_draft(
            FrameId::TiltTurn,
            true,
            &draft,
            draft.dimensions().unwrap(),
        )
        .unwrap());
        cart
    }

    fn params(url: &str) -> Vec<(String, String)> {
        Url::parse(&format!("https://shop.example{url}"))
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }

    #[test]
    fn url_carries_products_and_total() {
        let url = quote_url("/design/form", &cart(), &Qualification::default());
        assert!(url.starts_with("/design/form?PRODUCTS="));
        assert_eq!(
            params(&url),
            vec![
                (
                    "PRODUCTS".to_string(),
                    "2x Oscilobatantă - Cu sticlă - Antracit - Dreapta - 120x180cm - €2224.80"
                        .to_string()
                ),
                ("TOTAL".to_string(), "2224.80".to_string()),
            ]
        );
    }

    #[test]
    fn answers_are_appended_and_existing_query_kept() {
        let answers = Qualification {
            project_type: Some(ProjectType::Renovation),
            timeline: None,
            scope: Some(Scope::Small),
        };
        let url = quote_url("/design/form?lang=ro", &cart(), &answers);
        let p = params(&url);
        assert_eq!(p[0], ("lang".to_string(), "ro".to_string()));
        assert!(p.contains(&("PROJECT_TYPE".to_string(), "Renovare".to_string())));
        assert!(p.contains(&("SCOPE".to_string(), "1-5 produse".to_string())));
        assert!(!p.iter().any(|(k, _)| k == "TIMELINE"));
    }

    #[test]
    fn empty_cart_payload() {
        let p = QuotePayload::from_cart(&Cart::default());
        assert_eq!(p.products, "");
        assert_eq!(p.total, "0.00");
    }
}

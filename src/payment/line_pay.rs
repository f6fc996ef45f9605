//! LINE Pay redirect-flow payments.
//!
//! The flow always redirects: the frontend redirect and backend notify URLs
//! are required options and travel in the body's `result_url`. A dedicated
//! `line_pay_merchant_id` can route these payments to their own settlement
//! account.

use crate::config::Configuration;
use crate::errors::Error;

use super::{PaymentMethod, PaymentOptions, PaymentRequest};

pub fn pay(config: &Configuration, options: PaymentOptions) -> Result<PaymentRequest, Error> {
    PaymentRequest::new(config, PaymentMethod::LinePay, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_holder::CardHolder;

    fn options() -> PaymentOptions {
        PaymentOptions {
            amount: Some(100),
            details: Some("Test payment".to_string()),
            prime: Some("line_pay_prime".to_string()),
            frontend_redirect_url: Some("https://example.com/done".to_string()),
            backend_notify_url: Some("https://example.com/notify".to_string()),
            cardholder: Some(
                CardHolder::new("Test User", "test@example.com", "0912345678").into(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_options_include_redirect_urls_and_cardholder() {
        let config = Configuration::new()
            .with_partner_key("pk")
            .with_merchant_id("m");
        let err = pay(
            &config,
            PaymentOptions {
                amount: Some(100),
                details: Some("x".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required options: prime, frontend_redirect_url, backend_notify_url, cardholder"
        );
    }

    #[test]
    fn test_body_builds_result_url_from_flat_options() {
        let config = Configuration::new()
            .with_partner_key("pk")
            .with_merchant_id("m");
        let request = pay(&config, options()).unwrap();
        let value = serde_json::to_value(request.request_body().unwrap()).unwrap();
        assert_eq!(value["prime"], "line_pay_prime");
        assert_eq!(value["result_url"]["frontend_redirect_url"], "https://example.com/done");
        assert_eq!(value["result_url"]["backend_notify_url"], "https://example.com/notify");
        assert_eq!(value["cardholder"]["phone_number"], "0912345678");
    }

    #[test]
    fn test_merchant_id_fallback_chain() {
        // Channel override first.
        let config = Configuration::new()
            .with_partner_key("pk")
            .with_merchant_id("generic")
            .with_line_pay_merchant_id("line_pay_merchant");
        let body = pay(&config, options()).unwrap().request_body().unwrap();
        assert_eq!(body.merchant_id.as_deref(), Some("line_pay_merchant"));

        // Plain merchant id when no override is configured.
        let config = Configuration::new()
            .with_partner_key("pk")
            .with_merchant_id("generic");
        let body = pay(&config, options()).unwrap().request_body().unwrap();
        assert_eq!(body.merchant_id.as_deref(), Some("generic"));

        // A configured group id suppresses the channel override entirely.
        let config = Configuration::new()
            .with_partner_key("pk")
            .with_merchant_group_id("group")
            .with_line_pay_merchant_id("line_pay_merchant");
        let body = pay(&config, options()).unwrap().request_body().unwrap();
        assert_eq!(body.merchant_group_id.as_deref(), Some("group"));
        assert!(body.merchant_id.is_none());
    }

    #[test]
    fn test_posts_to_the_prime_endpoint() {
        let config = Configuration::new()
            .with_partner_key("pk")
            .with_merchant_id("m");
        let request = pay(&config, options()).unwrap();
        assert_eq!(request.endpoint_url().path(), "/tpc/payment/pay-by-prime");
    }
}

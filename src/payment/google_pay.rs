//! Google Pay device-wallet payments.

use crate::config::Configuration;
use crate::errors::Error;

use super::{PaymentMethod, PaymentOptions, PaymentRequest};

pub fn pay(config: &Configuration, options: PaymentOptions) -> Result<PaymentRequest, Error> {
    PaymentRequest::new(config, PaymentMethod::GooglePay, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_holder::CardHolder;

    fn options() -> PaymentOptions {
        PaymentOptions {
            amount: Some(100),
            details: Some("Test payment".to_string()),
            prime: Some("google_pay_prime".to_string()),
            cardholder: Some(
                CardHolder::new("Test User", "test@example.com", "0912345678").into(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_options() {
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
        assert_eq!(err.to_string(), "Missing required options: prime, cardholder");
    }

    #[test]
    fn test_merchant_id_override_and_group_suppression() {
        let config = Configuration::new()
            .with_partner_key("pk")
            .with_merchant_id("generic")
            .with_google_pay_merchant_id("google_pay_merchant");
        let body = pay(&config, options()).unwrap().request_body().unwrap();
        assert_eq!(body.merchant_id.as_deref(), Some("google_pay_merchant"));

        let config = Configuration::new()
            .with_partner_key("pk")
            .with_merchant_group_id("group")
            .with_google_pay_merchant_id("google_pay_merchant");
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

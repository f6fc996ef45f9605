//! Apple Pay device-wallet payments.
//!
//! The device produces the prime; the cardholder is required. An
//! `apple_pay_merchant_id` can route these payments to a dedicated
//! settlement account, unless a merchant group id is configured.

use crate::config::Configuration;
use crate::errors::Error;

use super::{PaymentMethod, PaymentOptions, PaymentRequest};

pub fn pay(config: &Configuration, options: PaymentOptions) -> Result<PaymentRequest, Error> {
    PaymentRequest::new(config, PaymentMethod::ApplePay, options)
}

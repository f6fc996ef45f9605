//! JKO Pay redirect-flow payments.
//!
//! Same shape as LINE Pay — always-redirect, flat URL options folded into
//! `result_url`, optional `jko_pay_merchant_id` routing — but without a
//! cardholder requirement.

use crate::config::Configuration;
use crate::errors::Error;

use super::{PaymentMethod, PaymentOptions, PaymentRequest};

pub fn pay(config: &Configuration, options: PaymentOptions) -> Result<PaymentRequest, Error> {
    PaymentRequest::new(config, PaymentMethod::JkoPay, options)
}

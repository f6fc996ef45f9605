//! Direct and instalment card payments.
//!
//! `pay_by_*` charge a card in full; `instalment_by_*` split the charge
//! over an accepted instalment count. Prime-token entry points consume a
//! single-use prime from the frontend SDK; token entry points reuse a
//! stored `card_key`/`card_token` pair.

use crate::config::Configuration;
use crate::errors::Error;

use super::{PaymentMethod, PaymentOptions, PaymentRequest};

/// Pays with a single-use prime token.
pub fn pay_by_prime(
    config: &Configuration,
    options: PaymentOptions,
) -> Result<PaymentRequest, Error> {
    PaymentRequest::new(config, PaymentMethod::PayByPrime, options)
}

/// Pays with a stored card key/token pair. Requires an explicit `currency`.
pub fn pay_by_token(
    config: &Configuration,
    options: PaymentOptions,
) -> Result<PaymentRequest, Error> {
    PaymentRequest::new(config, PaymentMethod::PayByToken, options)
}

/// Instalment payment with a single-use prime token.
pub fn instalment_by_prime(
    config: &Configuration,
    options: PaymentOptions,
) -> Result<PaymentRequest, Error> {
    PaymentRequest::new(config, PaymentMethod::InstalmentByPrime, options)
}

/// Instalment payment with a stored card key/token pair.
pub fn instalment_by_token(
    config: &Configuration,
    options: PaymentOptions,
) -> Result<PaymentRequest, Error> {
    PaymentRequest::new(config, PaymentMethod::InstalmentByToken, options)
}

//! The closed set of payment channels and their per-variant contracts.

use url::Url;

use crate::config::{Configuration, Mode};
use crate::endpoints;

use super::{PaymentOptions, RequestBody, ResultUrl};

/// Options a variant may require beyond the shared `{amount, details}` base.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RequiredField {
    Prime,
    CardKey,
    CardToken,
    Currency,
    Instalment,
    Cardholder,
    FrontendRedirectUrl,
    BackendNotifyUrl,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Prime => "prime",
            RequiredField::CardKey => "card_key",
            RequiredField::CardToken => "card_token",
            RequiredField::Currency => "currency",
            RequiredField::Instalment => "instalment",
            RequiredField::Cardholder => "cardholder",
            RequiredField::FrontendRedirectUrl => "frontend_redirect_url",
            RequiredField::BackendNotifyUrl => "backend_notify_url",
        }
    }
}

/// A payment channel.
///
/// Each variant fixes three things: the options it requires beyond the
/// shared base, the endpoint it posts to, and the merchant-identifier
/// fallback it applies when the call options carry no identifier of their
/// own. Dispatch is a plain `match` — the set is closed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Direct card payment with a single-use prime token.
    PayByPrime,
    /// Direct card payment with a stored card key/token pair.
    PayByToken,
    /// Instalment payment with a prime token.
    InstalmentByPrime,
    /// Instalment payment with a stored card key/token pair.
    InstalmentByToken,
    /// LINE Pay redirect-flow wallet payment.
    LinePay,
    /// JKO Pay redirect-flow wallet payment.
    JkoPay,
    /// Apple Pay device-wallet payment.
    ApplePay,
    /// Google Pay device-wallet payment.
    GooglePay,
}

impl PaymentMethod {
    /// Variant-specific required options, reported after the shared base
    /// set in missing-field messages.
    pub(crate) fn required_fields(&self) -> &'static [RequiredField] {
        use RequiredField::*;
        match self {
            PaymentMethod::PayByPrime => &[Prime],
            PaymentMethod::PayByToken => &[CardKey, CardToken, Currency],
            PaymentMethod::InstalmentByPrime => &[Prime, Instalment],
            PaymentMethod::InstalmentByToken => &[CardKey, CardToken, Instalment],
            PaymentMethod::LinePay => &[Prime, FrontendRedirectUrl, BackendNotifyUrl, Cardholder],
            PaymentMethod::JkoPay => &[Prime, FrontendRedirectUrl, BackendNotifyUrl],
            PaymentMethod::ApplePay | PaymentMethod::GooglePay => &[Prime, Cardholder],
        }
    }

    /// Token-based variants post to `pay-by-token`, everything else to
    /// `pay-by-prime`.
    pub(crate) fn endpoint_url(&self, mode: Mode) -> Url {
        match self {
            PaymentMethod::PayByToken | PaymentMethod::InstalmentByToken => {
                endpoints::pay_by_token_url(mode)
            }
            _ => endpoints::pay_by_prime_url(mode),
        }
    }

    /// Channel-level merchant identifier, consulted only when the call
    /// options carry no identifier. A configured `merchant_group_id`
    /// suppresses every channel override.
    pub(crate) fn channel_merchant_id(&self, config: &Configuration) -> Option<String> {
        if config.merchant_group_id.is_some() {
            return None;
        }
        let channel = match self {
            PaymentMethod::InstalmentByPrime | PaymentMethod::InstalmentByToken => {
                config.instalment_merchant_id.as_ref()
            }
            PaymentMethod::LinePay => config.line_pay_merchant_id.as_ref(),
            PaymentMethod::JkoPay => config.jko_pay_merchant_id.as_ref(),
            PaymentMethod::ApplePay => config.apple_pay_merchant_id.as_ref(),
            PaymentMethod::GooglePay => config.google_pay_merchant_id.as_ref(),
            PaymentMethod::PayByPrime | PaymentMethod::PayByToken => None,
        };
        channel.or(config.merchant_id.as_ref()).cloned()
    }

    /// Merges the variant's own fields into an assembled base body.
    pub(crate) fn apply_channel_fields(&self, options: &PaymentOptions, body: &mut RequestBody) {
        match self {
            PaymentMethod::PayByPrime | PaymentMethod::InstalmentByPrime => {
                body.prime = options.prime.clone();
                body.remember = Some(options.remember.unwrap_or(false));
            }
            PaymentMethod::PayByToken => {
                body.card_key = options.card_key.clone();
                body.card_token = options.card_token.clone();
            }
            PaymentMethod::InstalmentByToken => {
                body.card_key = options.card_key.clone();
                body.card_token = options.card_token.clone();
                body.ccv_prime = options.ccv_prime.clone();
            }
            PaymentMethod::LinePay | PaymentMethod::JkoPay => {
                body.prime = options.prime.clone();
                body.result_url = Some(ResultUrl {
                    frontend_redirect_url: options.frontend_redirect_url.clone(),
                    backend_notify_url: options.backend_notify_url.clone(),
                });
            }
            PaymentMethod::ApplePay | PaymentMethod::GooglePay => {
                body.prime = options.prime.clone();
            }
        }
    }
}

//! Payment request construction and validation.
//!
//! Every channel goes through the same path: a [`PaymentOptions`] record is
//! validated at construction ([`PaymentRequest::new`] — fallible, never
//! panics), the wire body is assembled lazily by
//! [`request_body`](PaymentRequest::request_body), and
//! [`execute`](PaymentRequest::execute) performs exactly one POST and
//! returns the classified outcome.
//!
//! The validation pipeline runs in a fixed order: required-option presence
//! (all missing names reported together, base fields before variant
//! fields), amount positivity, instalment membership, then result-URL
//! completeness when 3-D Secure is requested. Merchant-identity resolution
//! and cardholder normalization happen later, at body-assembly time.
//!
//! Merchant identity resolves with a strict precedence: an identifier in
//! the call options wins and suppresses configuration fallback for *both*
//! identifiers; otherwise the configured `merchant_group_id`, then the
//! variant's channel override, then the plain configured `merchant_id`.
//! Supplying both identifiers at the same level is an error, and the
//! assembled body always carries exactly one of the two keys.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::card_holder::CardHolderData;
use crate::client::{Client, GatewayResponse};
use crate::config::Configuration;
use crate::errors::Error;

pub mod apple_pay;
pub mod credit_card;
pub mod google_pay;
pub mod jko_pay;
pub mod line_pay;
pub mod method;

pub use method::{PaymentMethod, RequiredField};

/// Instalment counts the gateway accepts. `0` means no instalment.
pub const VALID_INSTALMENT_VALUES: [u32; 7] = [0, 3, 6, 12, 18, 24, 30];

/// Caller-supplied options for one payment request.
///
/// Transient: consumed by one builder and discarded after `execute`. Which
/// fields are required depends on the [`PaymentMethod`]; the rest are
/// optional everywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentOptions {
    pub amount: Option<i64>,
    pub details: Option<String>,
    /// Per-call merchant identifier. Setting either identifier here
    /// suppresses configuration fallback for both.
    pub merchant_id: Option<String>,
    pub merchant_group_id: Option<String>,
    pub currency: Option<String>,
    pub order_number: Option<String>,
    pub three_domain_secure: Option<bool>,
    pub cardholder: Option<CardHolderData>,
    pub result_url: Option<ResultUrl>,
    pub instalment: Option<u32>,
    pub prime: Option<String>,
    pub remember: Option<bool>,
    pub card_key: Option<String>,
    pub card_token: Option<String>,
    pub ccv_prime: Option<String>,
    pub frontend_redirect_url: Option<String>,
    pub backend_notify_url: Option<String>,
    /// Request timeout override for this call.
    pub timeout: Option<Duration>,
}

impl PaymentOptions {
    fn contains(&self, field: RequiredField) -> bool {
        match field {
            RequiredField::Prime => self.prime.is_some(),
            RequiredField::CardKey => self.card_key.is_some(),
            RequiredField::CardToken => self.card_token.is_some(),
            RequiredField::Currency => self.currency.is_some(),
            RequiredField::Instalment => self.instalment.is_some(),
            RequiredField::Cardholder => self.cardholder.is_some(),
            RequiredField::FrontendRedirectUrl => self.frontend_redirect_url.is_some(),
            RequiredField::BackendNotifyUrl => self.backend_notify_url.is_some(),
        }
    }
}

/// The 3-D Secure / redirect-flow URL pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultUrl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend_redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_notify_url: Option<String>,
}

impl ResultUrl {
    pub fn new(
        frontend_redirect_url: impl Into<String>,
        backend_notify_url: impl Into<String>,
    ) -> Self {
        Self {
            frontend_redirect_url: Some(frontend_redirect_url.into()),
            backend_notify_url: Some(backend_notify_url.into()),
        }
    }
}

/// The assembled wire body for a payment request.
///
/// Exactly one of `merchant_group_id` / `merchant_id` is present; the other
/// key is never written. `order_number` is always present (null when
/// unset), matching the gateway's wire format.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    pub partner_key: Option<String>,
    pub amount: i64,
    pub details: String,
    pub currency: String,
    pub order_number: Option<String>,
    pub three_domain_secure: bool,
    pub instalment: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<ResultUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ccv_prime: Option<String>,
}

enum MerchantIdentity {
    Group(String),
    Merchant(String),
}

/// A validated, immutable payment request for one channel.
#[derive(Debug)]
pub struct PaymentRequest {
    config: Configuration,
    method: PaymentMethod,
    options: PaymentOptions,
    client: Client,
}

impl PaymentRequest {
    /// Validates the options against the shared and variant rules and
    /// snapshots the configuration. Performs no I/O.
    pub fn new(
        config: &Configuration,
        method: PaymentMethod,
        options: PaymentOptions,
    ) -> Result<Self, Error> {
        validate_options(&options, method)?;
        let client = match options.timeout {
            Some(timeout) => Client::new().with_timeout(timeout),
            None => Client::new(),
        };
        Ok(Self {
            config: config.clone(),
            method,
            options,
            client,
        })
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// The endpoint this request posts to, derived from the channel and the
    /// configured mode.
    pub fn endpoint_url(&self) -> Url {
        self.method.endpoint_url(self.config.mode)
    }

    /// Assembles the wire body.
    ///
    /// Pure: the same builder yields an identical body on every call.
    /// Merchant-identity resolution and cardholder normalization run here,
    /// not at construction.
    pub fn request_body(&self) -> Result<RequestBody, Error> {
        let identity = self.resolve_merchant()?;
        let (merchant_group_id, merchant_id) = match identity {
            MerchantIdentity::Group(id) => (Some(id), None),
            MerchantIdentity::Merchant(id) => (None, Some(id)),
        };

        let cardholder = match &self.options.cardholder {
            Some(data) => Some(data.to_wire()?),
            None => None,
        };

        let mut body = RequestBody {
            merchant_group_id,
            merchant_id,
            partner_key: self.config.partner_key.clone(),
            amount: self.options.amount.unwrap_or_default(),
            details: self.options.details.clone().unwrap_or_default(),
            currency: self
                .options
                .currency
                .clone()
                .unwrap_or_else(|| self.config.currency.clone()),
            order_number: self.options.order_number.clone(),
            three_domain_secure: self.options.three_domain_secure.unwrap_or(false),
            instalment: self.options.instalment.unwrap_or(0),
            cardholder,
            result_url: self.options.result_url.clone(),
            prime: None,
            remember: None,
            card_key: None,
            card_token: None,
            ccv_prime: None,
        };
        self.method.apply_channel_fields(&self.options, &mut body);
        Ok(body)
    }

    /// Assembles the body and performs the single network round trip.
    pub async fn execute(&self) -> Result<GatewayResponse, Error> {
        let body = self.request_body()?;
        self.client
            .post(
                &self.endpoint_url(),
                self.config.partner_key.as_deref(),
                &body,
            )
            .await
    }

    fn resolve_merchant(&self) -> Result<MerchantIdentity, Error> {
        let options = &self.options;
        if options.merchant_group_id.is_some() && options.merchant_id.is_some() {
            return Err(Error::validation(
                "merchant_group_id and merchant_id cannot be used together",
            ));
        }
        if self.config.merchant_group_id.is_some() && self.config.merchant_id.is_some() {
            return Err(Error::validation(
                "merchant_group_id and merchant_id cannot be used together",
            ));
        }

        // A per-call identifier switches the identity source away from the
        // configuration entirely, for both keys.
        if let Some(group) = &options.merchant_group_id {
            return Ok(MerchantIdentity::Group(group.clone()));
        }
        if let Some(id) = &options.merchant_id {
            return Ok(MerchantIdentity::Merchant(id.clone()));
        }

        if let Some(group) = &self.config.merchant_group_id {
            return Ok(MerchantIdentity::Group(group.clone()));
        }
        match self.method.channel_merchant_id(&self.config) {
            Some(id) => Ok(MerchantIdentity::Merchant(id)),
            None => Err(Error::validation(
                "Either merchant_group_id or merchant_id must be provided",
            )),
        }
    }
}

fn validate_options(options: &PaymentOptions, method: PaymentMethod) -> Result<(), Error> {
    let mut missing: Vec<&'static str> = Vec::new();
    if options.amount.is_none() {
        missing.push("amount");
    }
    if options.details.is_none() {
        missing.push("details");
    }
    for field in method.required_fields() {
        if !options.contains(*field) {
            missing.push(field.as_str());
        }
    }
    if !missing.is_empty() {
        return Err(Error::validation(format!(
            "Missing required options: {}",
            missing.join(", ")
        )));
    }

    if let Some(amount) = options.amount {
        if amount <= 0 {
            return Err(Error::validation("amount must be greater than 0"));
        }
    }

    if let Some(instalment) = options.instalment {
        if !VALID_INSTALMENT_VALUES.contains(&instalment) {
            let accepted = VALID_INSTALMENT_VALUES
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(Error::validation(format!(
                "Instalment must be one of: {accepted}"
            )));
        }
    }

    if options.three_domain_secure == Some(true) {
        match &options.result_url {
            None => return Err(Error::validation("result_url must be a hash")),
            Some(result_url)
                if result_url.frontend_redirect_url.is_none()
                    || result_url.backend_notify_url.is_none() =>
            {
                return Err(Error::validation(
                    "result_url must contain both frontend_redirect_url and backend_notify_url",
                ));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

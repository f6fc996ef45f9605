//! Rust client for the [TapPay](https://www.tappaysdk.com) payment gateway.
//!
//! This crate builds, validates, and submits payment requests over TapPay's
//! JSON-over-HTTPS API, and classifies the gateway's responses into typed
//! outcomes. It covers direct card payments (by prime token or stored card
//! token), instalment payments, the redirect-flow wallets (LINE Pay,
//! JKO Pay), the device wallets (Apple Pay, Google Pay), transaction
//! queries, and refunds.
//!
//! # Modules
//!
//! - [`config`] — the [`Configuration`] record and sandbox/production [`Mode`].
//! - [`card_holder`] — payer identity, typed or raw.
//! - [`payment`] — request builders: the shared validation pipeline,
//!   merchant-identity resolution, and one submodule per channel.
//! - [`client`] — the HTTP transport and response classifier.
//! - [`transaction`] — transaction-record queries.
//! - [`refund`] — refunds.
//! - [`endpoints`] — pure mode-to-URL endpoint resolution.
//! - [`errors`] — the four-kind error taxonomy.
//!
//! # Example
//!
//! ```rust,no_run
//! use tappay::payment::{credit_card, PaymentOptions};
//! use tappay::{Configuration, Mode};
//!
//! # async fn run() -> Result<(), tappay::Error> {
//! let config = Configuration::new()
//!     .with_partner_key("partner_key")
//!     .with_merchant_id("merchant_id")
//!     .with_mode(Mode::Sandbox);
//! config.validate()?;
//!
//! let request = credit_card::pay_by_prime(
//!     &config,
//!     PaymentOptions {
//!         amount: Some(100),
//!         details: Some("Order #20240001".to_string()),
//!         prime: Some("prime_from_frontend_sdk".to_string()),
//!         ..Default::default()
//!     },
//! )?;
//! let response = request.execute().await?;
//! assert_eq!(response.status, 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Builders snapshot the [`Configuration`] at construction and own their
//! request body exclusively; each `execute()` is one network round trip
//! with a bounded timeout and no retries. Callers needing parallelism spawn
//! one task per independent request.
//!
//! # Telemetry
//!
//! With the `telemetry` feature enabled, transport calls are instrumented
//! with `tracing` spans and failed outcomes are recorded as error events.

pub mod card_holder;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod payment;
pub mod refund;
pub mod transaction;

pub use card_holder::{CardHolder, CardHolderData};
pub use client::{Client, DEFAULT_TIMEOUT, GatewayResponse};
pub use config::{Configuration, Mode};
pub use errors::Error;
pub use payment::{PaymentMethod, PaymentOptions, PaymentRequest, RequestBody, ResultUrl};
pub use refund::{Refund, RefundOptions};
pub use transaction::{OrderBy, Query, QueryResult, TimeRange, TradeRecord};

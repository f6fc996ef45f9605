//! Refunds of captured transactions.

use serde::Serialize;
use std::time::Duration;

use crate::client::{Client, GatewayResponse};
use crate::config::Configuration;
use crate::endpoints;
use crate::errors::Error;

/// Options for one refund. Omitting `amount` refunds the full transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefundOptions {
    pub transaction_id: Option<String>,
    pub amount: Option<i64>,
    pub timeout: Option<Duration>,
}

/// Wire body posted to the refund endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RefundBody {
    pub partner_key: Option<String>,
    pub rec_trade_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

/// One-shot refund request.
#[derive(Debug)]
pub struct Refund {
    config: Configuration,
    options: RefundOptions,
    client: Client,
}

impl Refund {
    /// Validates the options and snapshots the configuration.
    pub fn new(config: &Configuration, options: RefundOptions) -> Result<Self, Error> {
        if options.transaction_id.is_none() {
            return Err(Error::validation("Missing required options: transaction_id"));
        }
        let client = match options.timeout {
            Some(timeout) => Client::new().with_timeout(timeout),
            None => Client::new(),
        };
        Ok(Self {
            config: config.clone(),
            options,
            client,
        })
    }

    /// The wire body this refund posts.
    pub fn request_body(&self) -> RefundBody {
        RefundBody {
            partner_key: self.config.partner_key.clone(),
            rec_trade_id: self.options.transaction_id.clone().unwrap_or_default(),
            amount: self.options.amount,
        }
    }

    /// Posts the refund and returns the classified outcome.
    pub async fn execute(&self) -> Result<GatewayResponse, Error> {
        let body = self.request_body();
        self.client
            .post(
                &endpoints::refund_url(self.config.mode),
                self.config.partner_key.as_deref(),
                &body,
            )
            .await
    }
}

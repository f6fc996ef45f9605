//! Gateway configuration.
//!
//! [`Configuration`] is an explicit value handed to every builder by
//! reference; builders clone a snapshot at construction, so mutating a
//! configuration never affects requests already built. There is no global
//! state in this crate — processes that want a shared instance compose one
//! at the application boundary.
//!
//! The invariants ([`partner_key`](Configuration::partner_key) set, at least
//! one merchant identifier set) are enforced only by an explicit
//! [`validate()`](Configuration::validate) call, not on every mutation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// Operating mode selecting between the sandbox and production hosts.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// `https://sandbox.tappaysdk.com`
    #[default]
    Sandbox,
    /// `https://prod.tappaysdk.com`
    Production,
}

impl Mode {
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Mode::Sandbox)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Mode::Production)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Sandbox => "sandbox",
            Mode::Production => "production",
        };
        write!(f, "{}", s)
    }
}

/// Error returned when parsing an unrecognized mode string.
#[derive(Debug, thiserror::Error)]
#[error("Invalid mode: {0}. Must be sandbox or production")]
pub struct InvalidMode(pub String);

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sandbox" => Ok(Mode::Sandbox),
            "production" => Ok(Mode::Production),
            other => Err(InvalidMode(other.to_string())),
        }
    }
}

/// Settings consumed by every request builder.
///
/// The per-channel merchant identifiers (`instalment_merchant_id`,
/// `line_pay_merchant_id`, ...) take precedence over the plain
/// [`merchant_id`](Configuration::merchant_id) for their channel, and are all
/// suppressed when [`merchant_group_id`](Configuration::merchant_group_id)
/// is set. `merchant_id` and `merchant_group_id` are mutually exclusive at
/// request-build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub partner_key: Option<String>,
    pub mode: Mode,
    pub merchant_id: Option<String>,
    pub merchant_group_id: Option<String>,
    pub instalment_merchant_id: Option<String>,
    pub line_pay_merchant_id: Option<String>,
    pub jko_pay_merchant_id: Option<String>,
    pub apple_pay_merchant_id: Option<String>,
    pub google_pay_merchant_id: Option<String>,
    /// Default currency for payment bodies. `"TWD"` unless overridden.
    pub currency: String,
    pub api_version: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            partner_key: None,
            mode: Mode::default(),
            merchant_id: None,
            merchant_group_id: None,
            instalment_merchant_id: None,
            line_pay_merchant_id: None,
            jko_pay_merchant_id: None,
            apple_pay_merchant_id: None,
            google_pay_merchant_id: None,
            currency: "TWD".to_string(),
            api_version: "3".to_string(),
        }
    }
}

impl Configuration {
    /// Creates a configuration with sandbox mode, `TWD` currency, and API
    /// version `3`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partner_key(mut self, partner_key: impl Into<String>) -> Self {
        self.partner_key = Some(partner_key.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }

    pub fn with_merchant_group_id(mut self, merchant_group_id: impl Into<String>) -> Self {
        self.merchant_group_id = Some(merchant_group_id.into());
        self
    }

    pub fn with_instalment_merchant_id(mut self, id: impl Into<String>) -> Self {
        self.instalment_merchant_id = Some(id.into());
        self
    }

    pub fn with_line_pay_merchant_id(mut self, id: impl Into<String>) -> Self {
        self.line_pay_merchant_id = Some(id.into());
        self
    }

    pub fn with_jko_pay_merchant_id(mut self, id: impl Into<String>) -> Self {
        self.jko_pay_merchant_id = Some(id.into());
        self
    }

    pub fn with_apple_pay_merchant_id(mut self, id: impl Into<String>) -> Self {
        self.apple_pay_merchant_id = Some(id.into());
        self
    }

    pub fn with_google_pay_merchant_id(mut self, id: impl Into<String>) -> Self {
        self.google_pay_merchant_id = Some(id.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Checks that the configuration is usable for a live call.
    ///
    /// Callers invoke this once before first use; builders do not re-run it.
    pub fn validate(&self) -> Result<(), Error> {
        if self.partner_key.is_none() {
            return Err(Error::validation("partner_key is required"));
        }
        if self.merchant_id.is_none() && self.merchant_group_id.is_none() {
            return Err(Error::validation(
                "Either merchant_id or merchant_group_id is required",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::new();
        assert_eq!(config.mode, Mode::Sandbox);
        assert!(config.mode.is_sandbox());
        assert_eq!(config.currency, "TWD");
        assert_eq!(config.api_version, "3");
        assert!(config.partner_key.is_none());
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("sandbox".parse::<Mode>().unwrap(), Mode::Sandbox);
        assert_eq!("production".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!(Mode::Production.to_string(), "production");

        let err = "staging".parse::<Mode>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid mode: staging. Must be sandbox or production"
        );
    }

    #[test]
    fn test_validate_requires_partner_key() {
        let config = Configuration::new().with_merchant_id("merchant");
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "partner_key is required");
    }

    #[test]
    fn test_validate_requires_a_merchant_identifier() {
        let config = Configuration::new().with_partner_key("partner_key");
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Either merchant_id or merchant_group_id is required"
        );

        let with_group = Configuration::new()
            .with_partner_key("partner_key")
            .with_merchant_group_id("group");
        assert!(with_group.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = Configuration::new()
            .with_partner_key("pk")
            .with_mode(Mode::Production)
            .with_merchant_id("m1")
            .with_instalment_merchant_id("m2")
            .with_currency("USD");
        assert_eq!(config.partner_key.as_deref(), Some("pk"));
        assert!(config.mode.is_production());
        assert_eq!(config.instalment_merchant_id.as_deref(), Some("m2"));
        assert_eq!(config.currency, "USD");
    }
}

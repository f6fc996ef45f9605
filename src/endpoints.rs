//! Gateway endpoint resolution.
//!
//! Pure functions of [`Mode`]: sandbox and production differ only in host,
//! every action lives under a fixed `/tpc/...` path. No state.

use url::Url;

use crate::config::Mode;

const SANDBOX_HOST: &str = "https://sandbox.tappaysdk.com";
const PRODUCTION_HOST: &str = "https://prod.tappaysdk.com";

/// Path of the transaction-query action. The response classifier treats
/// gateway status `2` ("no records found") as success on this path only.
pub(crate) const TRANSACTION_QUERY_PATH: &str = "/tpc/transaction/query";

/// Base host for the given mode.
pub fn base_url(mode: Mode) -> Url {
    let host = match mode {
        Mode::Sandbox => SANDBOX_HOST,
        Mode::Production => PRODUCTION_HOST,
    };
    Url::parse(host).expect("known gateway host")
}

fn action_url(mode: Mode, path: &str) -> Url {
    base_url(mode).join(path).expect("known endpoint path")
}

pub fn pay_by_prime_url(mode: Mode) -> Url {
    action_url(mode, "/tpc/payment/pay-by-prime")
}

pub fn pay_by_token_url(mode: Mode) -> Url {
    action_url(mode, "/tpc/payment/pay-by-token")
}

pub fn query_url(mode: Mode) -> Url {
    action_url(mode, TRANSACTION_QUERY_PATH)
}

pub fn trade_history_url(mode: Mode) -> Url {
    action_url(mode, "/tpc/transaction/trade-history")
}

pub fn cap_url(mode: Mode) -> Url {
    action_url(mode, "/tpc/transaction/cap")
}

pub fn refund_url(mode: Mode) -> Url {
    action_url(mode, "/tpc/transaction/refund")
}

pub fn bind_card_url(mode: Mode) -> Url {
    action_url(mode, "/tpc/card/bind")
}

pub fn remove_card_url(mode: Mode) -> Url {
    action_url(mode, "/tpc/card/remove")
}

//! Transaction record queries.
//!
//! [`Query`] is a one-shot builder over the transaction-query endpoint:
//! filter by order number (optionally bounded by a time range), page
//! through the results, and get the raw records back as typed
//! [`TradeRecord`]s. An empty result set is reported by the gateway as
//! `status == 2` and surfaces here as a success with no records.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::client::{Client, GatewayResponse};
use crate::config::Configuration;
use crate::endpoints;
use crate::errors::Error;

const DEFAULT_RECORDS_PER_PAGE: u32 = 50;

/// Inclusive unix-millisecond bounds on the transaction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_time: i64,
    pub end_time: i64,
}

/// Result ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub attribute: String,
    #[serde(rename = "is_descending")]
    pub descending: bool,
}

/// Wire body posted to the query endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryBody {
    pub partner_key: Option<String>,
    pub records_per_page: u32,
    pub page: u32,
    pub filters: QueryFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryFilters {
    pub order_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeRange>,
}

/// One historical transaction entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TradeRecord {
    #[serde(default)]
    pub record_status: Option<i64>,
    #[serde(default)]
    pub rec_trade_id: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub acquirer: Option<String>,
    #[serde(default)]
    pub transaction_time: Option<String>,
    #[serde(default)]
    pub bank_transaction_id: Option<String>,
}

/// Typed query outcome: the gateway envelope, paging info, and the records.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QueryResult {
    pub status: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub records_per_page: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_page_count: Option<u32>,
    #[serde(default)]
    pub number_of_transactions: Option<u32>,
    #[serde(default)]
    pub trade_records: Vec<TradeRecord>,
}

impl QueryResult {
    fn from_response(response: GatewayResponse) -> Result<Self, Error> {
        serde_json::from_value(response.to_value())
            .map_err(|_| Error::Connection("Invalid JSON response".to_string()))
    }
}

/// One-shot transaction query.
pub struct Query {
    config: Configuration,
    order_number: String,
    time: Option<TimeRange>,
    records_per_page: u32,
    page: u32,
    order_by: Option<OrderBy>,
    client: Client,
}

impl Query {
    pub fn new(config: &Configuration, order_number: impl Into<String>) -> Self {
        Self {
            config: config.clone(),
            order_number: order_number.into(),
            time: None,
            records_per_page: DEFAULT_RECORDS_PER_PAGE,
            page: 0,
            order_by: None,
            client: Client::new(),
        }
    }

    pub fn with_time(mut self, time: TimeRange) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_records_per_page(mut self, records_per_page: u32) -> Self {
        self.records_per_page = records_per_page;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.with_timeout(timeout);
        self
    }

    /// The wire body this query posts.
    pub fn request_body(&self) -> QueryBody {
        QueryBody {
            partner_key: self.config.partner_key.clone(),
            records_per_page: self.records_per_page,
            page: self.page,
            filters: QueryFilters {
                order_number: self.order_number.clone(),
                time: self.time,
            },
            order_by: self.order_by.clone(),
        }
    }

    /// Posts the query and maps the response into a [`QueryResult`].
    pub async fn execute(&self) -> Result<QueryResult, Error> {
        let body = self.request_body();
        let response = self
            .client
            .post(
                &endpoints::query_url(self.config.mode),
                self.config.partner_key.as_deref(),
                &body,
            )
            .await?;
        QueryResult::from_response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> Configuration {
        Configuration::new()
            .with_partner_key("test_partner_key")
            .with_merchant_id("merchant")
    }

    #[test]
    fn test_request_body_defaults() {
        let query = Query::new(&config(), "ORDER123");
        let value = serde_json::to_value(query.request_body()).unwrap();
        assert_eq!(value["partner_key"], "test_partner_key");
        assert_eq!(value["records_per_page"], 50);
        assert_eq!(value["page"], 0);
        assert_eq!(value["filters"]["order_number"], "ORDER123");
        assert!(value["filters"].get("time").is_none());
        assert!(value.get("order_by").is_none());
    }

    #[test]
    fn test_request_body_with_filters_and_ordering() {
        let query = Query::new(&config(), "ORDER123")
            .with_time(TimeRange {
                start_time: 1_700_000_000_000,
                end_time: 1_700_086_400_000,
            })
            .with_records_per_page(10)
            .with_page(2)
            .with_order_by(OrderBy {
                attribute: "time".to_string(),
                descending: true,
            });
        let value = serde_json::to_value(query.request_body()).unwrap();
        assert_eq!(value["records_per_page"], 10);
        assert_eq!(value["page"], 2);
        assert_eq!(value["filters"]["time"]["start_time"], 1_700_000_000_000i64);
        assert_eq!(value["order_by"]["attribute"], "time");
        assert_eq!(value["order_by"]["is_descending"], true);
    }

    #[test]
    fn test_trade_records_are_mapped_into_typed_entries() {
        let response: GatewayResponse = serde_json::from_value(json!({
            "status": 0,
            "msg": "Success",
            "records_per_page": 50,
            "page": 0,
            "total_page_count": 1,
            "number_of_transactions": 1,
            "trade_records": [{
                "record_status": 0,
                "rec_trade_id": "RECTRADE123",
                "amount": 1000,
                "status": 0,
                "order_number": "ORDER123",
                "acquirer": "NCCC",
                "transaction_time": "2024-12-23 13:50:33",
                "bank_transaction_id": "BANK123",
            }],
        }))
        .unwrap();

        let result = QueryResult::from_response(response).unwrap();
        assert_eq!(result.number_of_transactions, Some(1));
        assert_eq!(result.trade_records.len(), 1);
        let record = &result.trade_records[0];
        assert_eq!(record.rec_trade_id.as_deref(), Some("RECTRADE123"));
        assert_eq!(record.amount, Some(1000));
        assert_eq!(record.acquirer.as_deref(), Some("NCCC"));
        assert_eq!(record.bank_transaction_id.as_deref(), Some("BANK123"));
    }

    #[test]
    fn test_no_records_found_maps_to_an_empty_result() {
        // The classifier lets status 2 through on the query endpoint.
        let response: GatewayResponse = serde_json::from_value(json!({
            "status": 2,
            "msg": "no records found",
        }))
        .unwrap();
        let result = QueryResult::from_response(response).unwrap();
        assert_eq!(result.status, 2);
        assert!(result.trade_records.is_empty());
        assert_eq!(result.number_of_transactions, None);
    }
}

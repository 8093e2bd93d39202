//! Soroban RPC client. Polls `getEvents` and decodes marketplace events.
//!
//! ## Resilience
//!
//! * Exponential back-off is applied when the RPC returns an error or rate-limit
//!   response, up to [`MAX_BACKOFF_SECS`] seconds.
//! * Transient network errors (connection reset, timeout) are retried silently.
//!
//! ## Topic and data shapes
//!
//! Depending on node version and `xdrFormat`, topics arrive as JSON objects
//! (`{"type":"symbol","value":"sold"}` or `{"symbol":"sold"}`) or as base64
//! XDR `ScVal`s. Marketplace topics only ever use symbols and `u64` ids, so
//! those two XDR arms are decoded here directly.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::{IndexerError, Result};
use crate::events::{EventKind, MarketEvent};

const MAX_BACKOFF_SECS: u64 = 60;
const INITIAL_BACKOFF_SECS: u64 = 2;

/// `ScValType` discriminants used by marketplace topics.
const SCV_U64: u32 = 5;
const SCV_SYMBOL: u32 = 15;

// ─────────────────────────────────────────────────────────
// JSON-RPC response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<EventsResult>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsResult {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawEvent {
    /// Topic list, JSON or base64 XDR per entry
    pub topic: Vec<String>,
    /// Event data
    pub value: Value,
    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    pub id: Option<String>,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
    #[serde(rename = "pagingToken")]
    pub paging_token: Option<String>,
}

// ─────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────

/// Fetch a page of events emitted by any of `contract_ids`.
///
/// * `start_ledger`: the ledger sequence to scan from (inclusive).
/// * `cursor`: optional opaque pagination cursor from a previous response.
/// * `limit`: maximum number of events to return.
///
/// Returns `(events, next_cursor, latest_ledger)`.
pub async fn fetch_events(
    client: &Client,
    rpc_url: &str,
    contract_ids: &[String],
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Result<(Vec<RawEvent>, Option<String>, Option<u64>)> {
    let mut backoff = INITIAL_BACKOFF_SECS;

    loop {
        let params = build_params(contract_ids, start_ledger, cursor, limit);

        let response = client
            .post(rpc_url)
            .json(&json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getEvents",
                "params": params,
            }))
            .send()
            .await;

        let resp = match response {
            Ok(resp) => resp,
            Err(e) => {
                warn!("RPC request failed (will retry in {backoff}s): {e}");
                tokio::time::sleep(Duration::from_secs(backoff)).await;
                backoff = (backoff * 2).min(MAX_BACKOFF_SECS);
                continue;
            }
        };

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Rate-limited by RPC (will retry in {backoff}s)");
            tokio::time::sleep(Duration::from_secs(backoff)).await;
            backoff = (backoff * 2).min(MAX_BACKOFF_SECS);
            continue;
        }

        let body: RpcResponse = resp.json().await?;

        if let Some(err) = body.error {
            // Invalid request / unknown method never succeed on retry.
            if err.code == -32600 || err.code == -32601 {
                return Err(IndexerError::Rpc {
                    code: err.code,
                    message: err.message,
                });
            }
            warn!(
                "RPC soft error (will retry in {backoff}s): {} {}",
                err.code, err.message
            );
            tokio::time::sleep(Duration::from_secs(backoff)).await;
            backoff = (backoff * 2).min(MAX_BACKOFF_SECS);
            continue;
        }

        let result = body
            .result
            .ok_or_else(|| IndexerError::EventParse("Empty result from getEvents".to_string()))?;

        debug!(
            "Fetched {} events (latest_ledger={:?})",
            result.events.len(),
            result.latest_ledger
        );

        return Ok((result.events, result.cursor, result.latest_ledger));
    }
}

fn build_params(
    contract_ids: &[String],
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Value {
    let mut params = json!({
        "filters": [
            {
                "type": "contract",
                "contractIds": contract_ids
            }
        ],
        "pagination": {
            "limit": limit
        }
    });

    if let Some(cur) = cursor {
        params["pagination"]["cursor"] = json!(cur);
    } else {
        params["startLedger"] = json!(start_ledger);
    }

    params
}

// ─────────────────────────────────────────────────────────
// Event decoding
// ─────────────────────────────────────────────────────────

/// Decode a page of raw RPC events into [`MarketEvent`]s.
///
/// Events from reverted invocations are dropped.
pub fn decode_events(raw: &[RawEvent], default_contract_id: &str) -> Vec<MarketEvent> {
    raw.iter()
        .enumerate()
        .filter(|(_, e)| e.in_successful_contract_call != Some(false))
        .filter_map(|(index, e)| decode_single(e, index, default_contract_id))
        .collect()
}

fn decode_single(raw: &RawEvent, index: usize, default_contract_id: &str) -> Option<MarketEvent> {
    let first_topic = raw.topic.first()?;
    let kind = EventKind::from_topic(&extract_symbol(first_topic));

    let contract_id = raw
        .contract_id
        .clone()
        .unwrap_or_else(|| default_contract_id.to_string());
    let ledger = raw.ledger.unwrap_or(0) as i64;
    let timestamp = raw
        .ledger_closed_at
        .as_deref()
        .and_then(parse_iso_to_unix)
        .unwrap_or(0);
    let tx_hash = raw.tx_hash.as_deref().and_then(normalize_tx_hash);

    let (subject_type, subject_id) = match (kind.subject(), raw.topic.get(1)) {
        (Some(subject), Some(topic)) => (
            Some(subject.as_str().to_string()),
            Some(extract_u64_or_raw(topic)),
        ),
        _ => (None, None),
    };

    let (actor_key, counterparty_key, amount_key) = kind.data_fields();
    let actor = actor_key.and_then(|k| data_field(&raw.value, k));
    let counterparty = counterparty_key.and_then(|k| data_field(&raw.value, k));
    let amount = amount_key.and_then(|k| data_field(&raw.value, k));

    let event_id = raw
        .id
        .clone()
        .or_else(|| raw.paging_token.clone())
        .unwrap_or_else(|| {
            format!(
                "{contract_id}-{ledger}-{}-{index}",
                tx_hash.as_deref().unwrap_or("notx")
            )
        });

    Some(MarketEvent {
        event_id,
        event_type: kind.as_str().to_string(),
        subject_type,
        subject_id,
        actor,
        counterparty,
        amount,
        ledger,
        timestamp,
        contract_id,
        tx_hash,
    })
}

/// Read `key` out of an event payload.
///
/// Accepts a flat JSON object (`{"owner": "G..."}`) or the `ScMap` rendering
/// (`{"map": [{"key": {"symbol": "owner"}, "val": {"address": "G..."}}]}`).
fn data_field(value: &Value, key: &str) -> Option<String> {
    if let Some(v) = value.get(key) {
        return scalar_to_string(v);
    }
    value
        .get("map")
        .and_then(Value::as_array)?
        .iter()
        .find(|entry| {
            entry
                .get("key")
                .map(|k| scalar_to_string(k).as_deref() == Some(key))
                .unwrap_or(false)
        })
        .and_then(|entry| entry.get("val"))
        .and_then(scalar_to_string)
}

/// Flatten a JSON-rendered `ScVal` scalar into a string.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => {
            if let (Some(hi), Some(lo)) = (map.get("hi"), map.get("lo")) {
                return i128_from_parts(hi, lo).map(|n| n.to_string());
            }
            ["value", "address", "symbol", "string", "i128", "u64", "u32"]
                .iter()
                .find_map(|k| map.get(*k))
                .and_then(scalar_to_string)
        }
        _ => None,
    }
}

fn i128_from_parts(hi: &Value, lo: &Value) -> Option<i128> {
    let hi = hi.as_i64().or_else(|| hi.as_str()?.parse().ok())?;
    let lo = lo.as_u64().or_else(|| lo.as_str()?.parse().ok())?;
    Some(((hi as i128) << 64) | lo as i128)
}

/// A topic scalar decoded from base64 XDR.
#[derive(Debug, PartialEq, Eq)]
enum XdrTopic {
    Symbol(String),
    U64(u64),
}

fn decode_xdr_topic(raw: &str) -> Option<XdrTopic> {
    let bytes = BASE64.decode(raw).ok()?;
    let tag = u32::from_be_bytes(bytes.get(0..4)?.try_into().ok()?);
    match tag {
        SCV_U64 => Some(XdrTopic::U64(u64::from_be_bytes(
            bytes.get(4..12)?.try_into().ok()?,
        ))),
        SCV_SYMBOL => {
            let len = u32::from_be_bytes(bytes.get(4..8)?.try_into().ok()?) as usize;
            let symbol = std::str::from_utf8(bytes.get(8..8 + len)?).ok()?;
            Some(XdrTopic::Symbol(symbol.to_string()))
        }
        _ => None,
    }
}

/// Extract a Soroban Symbol from a topic entry.
fn extract_symbol(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        if let Some(s) = v
            .get("value")
            .or_else(|| v.get("symbol"))
            .and_then(Value::as_str)
        {
            return s.to_string();
        }
    }
    if let Some(XdrTopic::Symbol(s)) = decode_xdr_topic(raw) {
        return s;
    }
    raw.to_string()
}

/// Extract a record id from a topic entry.
fn extract_u64_or_raw(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        if let Some(inner) = v.get("value").or_else(|| v.get("u64")) {
            if let Some(n) = inner.as_u64() {
                return n.to_string();
            }
            if let Some(s) = inner.as_str() {
                return s.to_string();
            }
        }
        if let Some(n) = v.as_u64() {
            return n.to_string();
        }
    }
    if let Some(XdrTopic::U64(n)) = decode_xdr_topic(raw) {
        return n.to_string();
    }
    raw.to_string()
}

/// Lower-case a transaction hash, dropping anything that is not 32 hex bytes.
fn normalize_tx_hash(raw: &str) -> Option<String> {
    match hex::decode(raw) {
        Ok(bytes) if bytes.len() == 32 => Some(hex::encode(bytes)),
        _ => {
            warn!("Ignoring malformed tx hash {raw}");
            None
        }
    }
}

/// Parse an ISO-8601 timestamp string into a Unix epoch (seconds).
fn parse_iso_to_unix(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────

//! Per-operation decoders over the raw JSON-RPC envelope.
//!
//! The set is closed: each operation picks exactly one decoder at its
//! call site. Decoders classify every outcome into the error taxonomy;
//! domain-absent outcomes (zero logs, missing receipt, unknown block)
//! come back as success values.

use primitive_types::U256;
use serde_json::Value;

use ethgate_core::error::DecodeError;
use ethgate_core::hex;
use ethgate_core::request::JsonRpcResponse;

use crate::error::ProviderError;
use crate::types::{Block, LogEntry, TransactionStatus};

/// Void calls: success iff the `result` key is present, whatever its
/// value (`null` included). Otherwise the embedded error is surfaced,
/// message passed through verbatim.
pub fn ack(resp: &JsonRpcResponse) -> Result<(), ProviderError> {
    if resp.result.is_some() {
        return Ok(());
    }
    Err(ProviderError::Rpc(resp.error.clone().unwrap_or_default()))
}

fn hex_result<'a>(resp: &'a JsonRpcResponse, what: &str) -> Result<&'a str, ProviderError> {
    if let Some(error) = &resp.error {
        return Err(ProviderError::Rpc(error.clone()));
    }
    match &resp.result {
        Some(Value::String(s)) => Ok(s),
        _ => Err(ProviderError::Decode(DecodeError::Shape(format!(
            "expected {what} string result"
        )))),
    }
}

/// Integer result in the hex convention. Malformed digits are a decode
/// failure, never a silent zero.
pub fn uint(resp: &JsonRpcResponse) -> Result<u64, ProviderError> {
    let s = hex_result(resp, "integer")?;
    hex::hex_to_u64(s).ok_or_else(|| {
        ProviderError::Decode(DecodeError::Shape(format!("malformed integer result: {s}")))
    })
}

/// Big unsigned integer result in the hex convention.
pub fn big_uint(resp: &JsonRpcResponse) -> Result<U256, ProviderError> {
    let s = hex_result(resp, "big integer")?;
    hex::hex_to_u256(s).ok_or_else(|| {
        ProviderError::Decode(DecodeError::Shape(format!("malformed big integer result: {s}")))
    })
}

/// Raw string result (contract call output, storage word).
pub fn hex_string(resp: &JsonRpcResponse) -> Result<String, ProviderError> {
    hex_result(resp, "hex").map(str::to_owned)
}

/// Log list: elements decode independently and malformed ones are
/// dropped. Absent, empty or non-array results are zero matches, not
/// failures.
pub fn logs(resp: &JsonRpcResponse) -> Vec<LogEntry> {
    let Some(Value::Array(items)) = &resp.result else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<LogEntry>(item.clone()) {
            Ok(log) => Some(log),
            Err(err) => {
                tracing::debug!(%err, "dropping malformed log element");
                None
            }
        })
        .collect()
}

/// Receipt status tri-state. An absent or unparseable receipt lands in
/// `NotFound`; only `status == 0` means `Failed`.
pub fn receipt_status(resp: &JsonRpcResponse) -> TransactionStatus {
    let Some(Value::Object(receipt)) = &resp.result else {
        return TransactionStatus::NotFound;
    };
    match receipt
        .get("status")
        .and_then(Value::as_str)
        .and_then(hex::hex_to_u64)
    {
        Some(0) => TransactionStatus::Failed,
        Some(_) => TransactionStatus::Success,
        None => TransactionStatus::NotFound,
    }
}

/// Existence check: did the result parse as a record at all. Never an
/// error, even when the node has no such record.
pub fn exists(resp: &JsonRpcResponse) -> bool {
    matches!(&resp.result, Some(Value::Object(_)))
}

/// Block lookup. A null or absent result is the domain-absent channel;
/// a present non-object result is a decode failure.
pub fn block(resp: &JsonRpcResponse) -> Result<Option<Block>, ProviderError> {
    if let Some(error) = &resp.error {
        return Err(ProviderError::Rpc(error.clone()));
    }
    match &resp.result {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Object(_)) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| ProviderError::Decode(DecodeError::Shape(format!("malformed block: {e}")))),
        Some(_) => Err(ProviderError::Decode(DecodeError::Shape(
            "block result is not an object".into(),
        ))),
    }
}

/// Gas estimate: three mutually exclusive channels. A string result is
/// the value; an error object carrying both a message and a numeric
/// code is a typed protocol error; anything else is a decode failure.
pub fn gas_estimate(resp: &JsonRpcResponse) -> Result<String, ProviderError> {
    if let Some(Value::String(s)) = &resp.result {
        return Ok(s.clone());
    }
    match &resp.error {
        Some(error) if error.code.is_some() && error.message.is_some() => {
            Err(ProviderError::Rpc(error.clone()))
        }
        _ => Err(ProviderError::Decode(DecodeError::Shape(
            "gas estimate: neither string result nor structured error".into(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethgate_core::request::JsonRpcError;
    use serde_json::json;

    fn with_result(result: Value) -> JsonRpcResponse {
        JsonRpcResponse::from_result(result)
    }

    fn with_error(code: Option<i64>, message: Option<&str>) -> JsonRpcResponse {
        JsonRpcResponse::from_error(JsonRpcError {
            code,
            message: message.map(str::to_owned),
            data: None,
        })
    }

    #[test]
    fn ack_succeeds_on_null_result() {
        assert!(ack(&with_result(Value::Null)).is_ok());
    }

    #[test]
    fn ack_surfaces_error_message() {
        let err = ack(&with_error(Some(-32000), Some("nonce too low"))).unwrap_err();
        match err {
            ProviderError::Rpc(e) => assert_eq!(e.message.as_deref(), Some("nonce too low")),
            other => panic!("expected rpc error, got {other:?}"),
        }
    }

    #[test]
    fn ack_without_error_object_yields_empty_message() {
        let resp: JsonRpcResponse =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1})).unwrap();
        let err = ack(&resp).unwrap_err();
        match err {
            ProviderError::Rpc(e) => assert_eq!(e.message.unwrap_or_default(), ""),
            other => panic!("expected rpc error, got {other:?}"),
        }
    }

    #[test]
    fn uint_decodes_hex() {
        assert_eq!(uint(&with_result(json!("0x10"))).unwrap(), 16);
    }

    #[test]
    fn uint_malformed_is_decode_failure_not_zero() {
        let err = uint(&with_result(json!("0xzz"))).unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[test]
    fn uint_missing_result_is_decode_failure() {
        let resp: JsonRpcResponse =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1})).unwrap();
        assert!(matches!(uint(&resp), Err(ProviderError::Decode(_))));
    }

    #[test]
    fn uint_rpc_error_is_protocol_failure() {
        let err = uint(&with_error(Some(-32601), Some("method not found"))).unwrap_err();
        assert!(matches!(err, ProviderError::Rpc(_)));
    }

    #[test]
    fn big_uint_decodes() {
        let n = big_uint(&with_result(json!("0xde0b6b3a7640000"))).unwrap();
        assert_eq!(n, U256::from(1_000_000_000_000_000_000u64));
    }

    #[test]
    fn logs_empty_array_is_success() {
        assert!(logs(&with_result(json!([]))).is_empty());
    }

    #[test]
    fn logs_absent_result_is_empty() {
        let resp: JsonRpcResponse =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1})).unwrap();
        assert!(logs(&resp).is_empty());
    }

    #[test]
    fn logs_skip_malformed_elements() {
        let decoded = logs(&with_result(json!([
            {"address": "0xaa", "topics": ["0x01"], "data": "0x"},
            {"topics": ["0x02"]},
            {"address": "0xbb", "topics": [], "data": "0xff"}
        ])));
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].address, "0xaa");
        assert_eq!(decoded[1].address, "0xbb");
    }

    #[test]
    fn receipt_tri_state() {
        let missing: JsonRpcResponse =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "result": null})).unwrap();
        assert_eq!(receipt_status(&missing), TransactionStatus::NotFound);
        assert_eq!(
            receipt_status(&with_result(json!({"status": "0x0"}))),
            TransactionStatus::Failed
        );
        assert_eq!(
            receipt_status(&with_result(json!({"status": "0x1"}))),
            TransactionStatus::Success
        );
        assert_eq!(
            receipt_status(&with_result(json!({"status": "0xqq"}))),
            TransactionStatus::NotFound
        );
        assert_eq!(
            receipt_status(&with_result(json!({"status": "0x+1"}))),
            TransactionStatus::NotFound
        );
    }

    #[test]
    fn exists_is_never_an_error() {
        assert!(exists(&with_result(json!({"hash": "0xaa"}))));
        assert!(!exists(&with_result(Value::Null)));
        let absent: JsonRpcResponse =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1})).unwrap();
        assert!(!exists(&absent));
    }

    #[test]
    fn block_null_is_domain_absent() {
        assert_eq!(block(&with_result(Value::Null)).unwrap(), None);
    }

    #[test]
    fn block_object_decodes() {
        let decoded = block(&with_result(json!({
            "number": "0x1",
            "parentHash": "0x00",
            "timestamp": "0x64"
        })))
        .unwrap()
        .unwrap();
        assert_eq!(decoded.height(), Some(1));
    }

    #[test]
    fn block_non_object_is_decode_failure() {
        assert!(matches!(
            block(&with_result(json!("0x1"))),
            Err(ProviderError::Decode(_))
        ));
    }

    #[test]
    fn gas_estimate_string_result() {
        assert_eq!(gas_estimate(&with_result(json!("0x5208"))).unwrap(), "0x5208");
    }

    #[test]
    fn gas_estimate_structured_error() {
        let err = gas_estimate(&with_error(Some(-32000), Some("gas required exceeds allowance")))
            .unwrap_err();
        match err {
            ProviderError::Rpc(e) => {
                assert_eq!(e.code, Some(-32000));
                assert_eq!(e.message.as_deref(), Some("gas required exceeds allowance"));
            }
            other => panic!("expected rpc error, got {other:?}"),
        }
    }

    #[test]
    fn gas_estimate_half_formed_error_is_decode_failure() {
        // message without code
        assert!(matches!(
            gas_estimate(&with_error(None, Some("boom"))),
            Err(ProviderError::Decode(_))
        ));
        // code without message
        assert!(matches!(
            gas_estimate(&with_error(Some(-32000), None)),
            Err(ProviderError::Decode(_))
        ));
        // numeric result instead of string
        assert!(matches!(
            gas_estimate(&with_result(json!(21000))),
            Err(ProviderError::Decode(_))
        ));
    }
}

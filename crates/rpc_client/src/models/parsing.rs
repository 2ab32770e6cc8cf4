// Copyright (C) 2015-2025 The Neo Project.
//
// parsing.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neo_nft_primitives::UInt256;
use serde_json::{Map, Value};

pub(crate) fn as_object<'a>(
    json: &'a Value,
    context: &str,
) -> Result<&'a Map<String, Value>, String> {
    json.as_object()
        .ok_or_else(|| format!("{context} result must be an object"))
}

pub(crate) fn required_str<'a>(
    object: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a str, String> {
    object
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("Missing or invalid '{field}' field"))
}

pub(crate) fn optional_str<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    object.get(field).and_then(Value::as_str)
}

/// Fee amounts are sent as decimal strings.
pub(crate) fn required_i64(object: &Map<String, Value>, field: &str) -> Result<i64, String> {
    match object.get(field) {
        Some(Value::String(text)) => text
            .parse::<i64>()
            .map_err(|_| format!("Invalid '{field}' value: {text}")),
        Some(Value::Number(number)) => number
            .as_i64()
            .ok_or_else(|| format!("Invalid '{field}' value: {number}")),
        _ => Err(format!("Missing or invalid '{field}' field")),
    }
}

pub(crate) fn parse_uint256(text: &str, field: &str) -> Result<UInt256, String> {
    UInt256::parse(text).map_err(|e| format!("Invalid '{field}' value '{text}': {e}"))
}

pub(crate) fn stack_of(object: &Map<String, Value>) -> Vec<Value> {
    object
        .get("stack")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

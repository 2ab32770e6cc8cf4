// Copyright (C) 2015-2025 The Neo Project.
//
// stack_item_json.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The `{"type": ..., "value": ...}` form nodes use for stack items.

use base64::{engine::general_purpose, Engine as _};
use neo_nft_vm::StackItem;
use num_bigint::BigInt;
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Why a JSON stack item could not become a [`StackItem`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackItemError {
    /// A well-formed item whose type has no counterpart in [`StackItem`].
    #[error("unsupported stack item type '{0}'")]
    Unsupported(String),

    #[error("malformed stack item: {0}")]
    Malformed(String),
}

fn malformed(message: impl Into<String>) -> StackItemError {
    StackItemError::Malformed(message.into())
}

fn value_of<'a>(
    object: &'a Map<String, Value>,
    item_type: &str,
) -> Result<&'a Value, StackItemError> {
    object
        .get("value")
        .ok_or_else(|| malformed(format!("{item_type} stack item missing 'value' field")))
}

fn array_of<'a>(
    object: &'a Map<String, Value>,
    item_type: &str,
) -> Result<&'a Vec<Value>, StackItemError> {
    value_of(object, item_type)?
        .as_array()
        .ok_or_else(|| malformed(format!("{item_type} stack item value must be an array")))
}

/// Parses a node's JSON stack item.
///
/// `Buffer` is read as a byte string and `Struct` as an array. `Any`,
/// `Pointer`, `InteropInterface` and unknown types are unsupported.
pub fn stack_item_from_json(json: &Value) -> Result<StackItem, StackItemError> {
    let object = json
        .as_object()
        .ok_or_else(|| malformed("stack item must be an object"))?;
    let item_type = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("stack item missing 'type' field"))?;

    match item_type {
        "Boolean" => match value_of(object, item_type)? {
            Value::Bool(flag) => Ok(StackItem::Boolean(*flag)),
            Value::String(text) => match text.as_str() {
                "true" => Ok(StackItem::Boolean(true)),
                "false" => Ok(StackItem::Boolean(false)),
                other => Err(malformed(format!("invalid boolean '{other}'"))),
            },
            _ => Err(malformed("Boolean stack item value must be a boolean")),
        },
        "Integer" => {
            let value = value_of(object, item_type)?;
            let text = match value {
                Value::String(text) => text.clone(),
                Value::Number(number) => number.to_string(),
                _ => return Err(malformed("Integer stack item value must be a string")),
            };
            BigInt::parse_bytes(text.as_bytes(), 10)
                .map(StackItem::Integer)
                .ok_or_else(|| malformed(format!("invalid integer '{text}'")))
        }
        "ByteString" | "Buffer" => {
            let text = value_of(object, item_type)?
                .as_str()
                .ok_or_else(|| malformed(format!("{item_type} stack item value must be base64")))?;
            general_purpose::STANDARD
                .decode(text)
                .map(StackItem::ByteString)
                .map_err(|e| malformed(format!("invalid base64 in {item_type}: {e}")))
        }
        "Array" | "Struct" => array_of(object, item_type)?
            .iter()
            .map(stack_item_from_json)
            .collect::<Result<Vec<_>, _>>()
            .map(StackItem::Array),
        "Map" => {
            let entries = array_of(object, item_type)?;
            let mut map = Vec::with_capacity(entries.len());
            for entry in entries {
                let key = entry
                    .get("key")
                    .ok_or_else(|| malformed("Map entry missing 'key'"))?;
                let value = entry
                    .get("value")
                    .ok_or_else(|| malformed("Map entry missing 'value'"))?;
                map.push((stack_item_from_json(key)?, stack_item_from_json(value)?));
            }
            Ok(StackItem::Map(map))
        }
        other => Err(StackItemError::Unsupported(other.to_string())),
    }
}

/// Renders a stack item in the node's JSON form.
pub fn stack_item_to_json(item: &StackItem) -> Value {
    match item {
        StackItem::Boolean(flag) => json!({"type": "Boolean", "value": flag}),
        StackItem::Integer(value) => json!({"type": "Integer", "value": value.to_string()}),
        StackItem::ByteString(bytes) => {
            json!({"type": "ByteString", "value": general_purpose::STANDARD.encode(bytes)})
        }
        StackItem::Array(items) => json!({
            "type": "Array",
            "value": items.iter().map(stack_item_to_json).collect::<Vec<_>>(),
        }),
        StackItem::Map(entries) => json!({
            "type": "Map",
            "value": entries
                .iter()
                .map(|(key, value)| json!({
                    "key": stack_item_to_json(key),
                    "value": stack_item_to_json(value),
                }))
                .collect::<Vec<_>>(),
        }),
    }
}

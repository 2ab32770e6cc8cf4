// Copyright (C) 2015-2025 The Neo Project.
//
// result_decoder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Turns invocation results into labelled, printable entries.

use neo_nft_vm::StackItem;
use std::collections::BTreeSet;

/// Map key rendered on its own line by default.
pub const ASCII_KEY: &str = "ascii";

/// How an entry is laid out when printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `label : value`
    Inline,
    /// `label :` then the value on the following line(s).
    Standalone,
}

/// One labelled value, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub label: String,
    pub value: String,
    pub layout: Layout,
}

/// Map keys whose values are printed below their label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPolicy {
    standalone_keys: BTreeSet<String>,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self {
            standalone_keys: BTreeSet::from([ASCII_KEY.to_string()]),
        }
    }
}

impl DisplayPolicy {
    /// A policy with no standalone keys.
    pub fn inline_only() -> Self {
        Self {
            standalone_keys: BTreeSet::new(),
        }
    }

    pub fn with_standalone_key(mut self, key: impl Into<String>) -> Self {
        self.standalone_keys.insert(key.into());
        self
    }

    pub fn layout_for(&self, key: &str) -> Layout {
        if self.standalone_keys.contains(key) {
            Layout::Standalone
        } else {
            Layout::Inline
        }
    }
}

/// Decodes stack items without touching them.
#[derive(Debug, Clone, Default)]
pub struct ResultDecoder {
    policy: DisplayPolicy,
}

impl ResultDecoder {
    pub fn new(policy: DisplayPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DisplayPolicy {
        &self.policy
    }

    /// Maps yield one entry per pair in their original order, arrays one
    /// entry per element labelled by index, anything else a single entry
    /// with an empty label.
    pub fn decode(&self, item: &StackItem) -> Vec<DisplayEntry> {
        match item {
            StackItem::Map(entries) => entries
                .iter()
                .map(|(key, value)| {
                    let label = Self::render_value(key);
                    let layout = self.policy.layout_for(&label);
                    DisplayEntry {
                        label,
                        value: Self::render_value(value),
                        layout,
                    }
                })
                .collect(),
            StackItem::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, value)| DisplayEntry {
                    label: index.to_string(),
                    value: Self::render_value(value),
                    layout: Layout::Inline,
                })
                .collect(),
            scalar => vec![DisplayEntry {
                label: String::new(),
                value: Self::render_value(scalar),
                layout: Layout::Inline,
            }],
        }
    }

    /// Text form of a single item. Byte strings that are not UTF-8 print as
    /// `0x` hex; nested containers print in brackets.
    pub fn render_value(item: &StackItem) -> String {
        match item {
            StackItem::Boolean(flag) => flag.to_string(),
            StackItem::Integer(value) => value.to_string(),
            StackItem::ByteString(bytes) => match std::str::from_utf8(bytes) {
                Ok(text) => text.to_string(),
                Err(_) => format!("0x{}", hex::encode(bytes)),
            },
            StackItem::Array(items) => {
                let parts: Vec<_> = items.iter().map(Self::render_value).collect();
                format!("[{}]", parts.join(", "))
            }
            StackItem::Map(entries) => {
                let parts: Vec<_> = entries
                    .iter()
                    .map(|(key, value)| {
                        format!("{}: {}", Self::render_value(key), Self::render_value(value))
                    })
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
        }
    }

    /// Prints entries, each followed by a blank line.
    pub fn render(entries: &[DisplayEntry]) -> String {
        let mut out = String::new();
        for entry in entries {
            let line = match entry.layout {
                Layout::Inline => format!("{} : {}\n\n", entry.label, entry.value),
                Layout::Standalone => format!("{} :\n{}\n\n", entry.label, entry.value),
            };
            out.push_str(&line);
        }
        out
    }
}

//! Legacy bypass adapter.
//!
//! Older clients send structured filters as a JSON payload in a regex filter
//! entry keyed `info_msg`, e.g. `{"author": "alice", "start": "0", "end": "0"}`.
//! This module decodes that payload into equivalent clauses.
//!
//! The format is deprecated and frozen. Only `author`, `recipient`, `start` and
//! `end` are understood, and no new filter kinds are accepted here.

use serde_json::Value;
use tracing::warn;

use crate::dsl::Clause;

/// Date bound meaning "unbounded".
pub const UNBOUNDED: &str = "0";

/// Decoded legacy filter payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyInfo {
    /// Author substring, empty for none.
    pub author: String,
    /// Recipient substring, empty for none.
    pub recipient: String,
    /// Lower date bound, [`UNBOUNDED`] for none.
    pub start: String,
    /// Upper date bound, [`UNBOUNDED`] for none.
    pub end: String,
}

impl Default for LegacyInfo {
    fn default() -> Self {
        Self {
            author: String::new(),
            recipient: String::new(),
            start: UNBOUNDED.to_string(),
            end: UNBOUNDED.to_string(),
        }
    }
}

impl LegacyInfo {
    /// Decodes a payload. Never fails.
    ///
    /// A payload that is not a JSON object decodes to the defaults. Within an
    /// object, strings are used as-is, numbers are rendered as text, and
    /// anything else falls back to the field's default.
    pub fn decode(payload: &str) -> Self {
        let mut info = Self::default();

        let object = match serde_json::from_str::<Value>(payload) {
            Ok(Value::Object(object)) => object,
            Ok(other) => {
                warn!(payload, kind = json_kind(&other), "legacy payload is not an object");
                return info;
            }
            Err(e) => {
                warn!(payload, error = %e, "malformed legacy payload");
                return info;
            }
        };

        let slots = [
            ("author", &mut info.author),
            ("recipient", &mut info.recipient),
            ("start", &mut info.start),
            ("end", &mut info.end),
        ];
        for (key, slot) in slots {
            match object.get(key) {
                None | Some(Value::Null) => {}
                Some(value) => match scalar_text(value) {
                    Some(text) => *slot = text,
                    None => warn!(key, kind = json_kind(value), "ignoring legacy field"),
                },
            }
        }

        info
    }

    /// Returns the equivalent clauses, in author, recipient, start, end order.
    pub fn clauses(&self) -> Vec<Clause> {
        let mut clauses = Vec::new();
        if !self.author.is_empty() {
            clauses.push(Clause::wildcard(
                "info_msg_author",
                format!("*{}*", self.author),
            ));
        }
        if !self.recipient.is_empty() {
            clauses.push(Clause::wildcard(
                "info_msg_recipient",
                format!("*{}*", self.recipient),
            ));
        }
        if self.start != UNBOUNDED {
            clauses.push(Clause::range_gte("info_msg_date", &self.start));
        }
        if self.end != UNBOUNDED {
            clauses.push(Clause::range_lte("info_msg_date", &self.end));
        }
        clauses
    }
}

/// Decodes a payload and returns its clauses.
pub fn bypass_clauses(payload: &str) -> Vec<Clause> {
    LegacyInfo::decode(payload).clauses()
}

/// Renders a string or number as text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Names a JSON value's type, for log messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

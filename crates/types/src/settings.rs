//! The persisted per-instance settings record

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::control::SWITCH_ON;

/// Raw settings record for one widget instance, keyed by control key.
///
/// The host editor writes these when the user edits a widget; render code
/// only reads them. Values are kept exactly as persisted, so lookups are
/// lenient: a missing or differently-typed value never fails, it just falls
/// back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(HashMap<String, Value>);

impl Settings {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Store a value under `key`, replacing any previous one. Hosts use this
    /// when seeding a fresh instance from control defaults.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value under `key`, if present and actually a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// String value under `key`, or `fallback` when absent or not a string
    pub fn str_or(&self, key: &str, fallback: &str) -> String {
        self.get_str(key).unwrap_or(fallback).to_string()
    }

    /// Whether a switch control stored its on value under `key`
    pub fn switch_on(&self, key: &str) -> bool {
        self.get_str(key) == Some(SWITCH_ON)
    }

    /// Deserialize the value under `key` into a typed control value.
    /// Absent or malformed values come back as `None`.
    pub fn typed<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.0
            .get(key)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

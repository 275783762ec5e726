use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Item-level answers for one assessment run: symptom key → severity 0–4.
///
/// Keys may be absent. An absent key means "symptom absent" and reads as
/// severity 0; evaluators distinguish absent from answered-zero only when
/// deciding whether a sub-domain has any data at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseSet {
    items: HashMap<String, u8>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, severity: u8) {
        self.items.insert(key.into(), severity);
    }

    /// Severity for a key; absent keys read as 0 (symptom absent).
    pub fn severity(&self, key: &str) -> u8 {
        self.items.get(key).copied().unwrap_or(0)
    }

    /// Severity only if the item was actually answered.
    pub fn answered(&self, key: &str) -> Option<u8> {
        self.items.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<HashMap<String, u8>> for ResponseSet {
    fn from(items: HashMap<String, u8>) -> Self {
        Self { items }
    }
}

impl FromIterator<(String, u8)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (String, u8)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, u8)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, u8)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

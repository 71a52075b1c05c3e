//! API response envelopes
//!
//! Every JSON body the API emits is wrapped in a single top-level key:
//! ```json
//! { "cafe": { ... } }
//! { "cafes": [ ... ] }
//! { "response": { "success": "..." } }
//! { "error": { "Not Found": "..." } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Single cafe envelope (`{"cafe": {...}}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeBody<T> {
    pub cafe: T,
}

/// Cafe list envelope (`{"cafes": [...]}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafesBody<T> {
    pub cafes: Vec<T>,
}

/// Success acknowledgement (`{"response": {"success": "..."}}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessBody {
    pub response: SuccessMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub success: String,
}

impl SuccessBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            response: SuccessMessage {
                success: message.into(),
            },
        }
    }
}

/// Error payload (`{"error": {"<reason>": "<message>"}}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: BTreeMap<String, String>,
}

impl ErrorBody {
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        let mut error = BTreeMap::new();
        error.insert(label.into(), message.into());
        Self { error }
    }

    /// The message stored under `label`, if any
    pub fn message(&self, label: &str) -> Option<&str> {
        self.error.get(label).map(String::as_str)
    }
}

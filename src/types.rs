//! Common types used throughout json2spark
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
///
/// With the `preserve_order` feature enabled this map keeps key insertion
/// order, which the inferrer relies on for field ordering.
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for HTTP retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_type_serde() {
        let backoff: BackoffType = serde_json::from_str("\"exponential\"").unwrap();
        assert_eq!(backoff, BackoffType::Exponential);

        let json = serde_json::to_string(&BackoffType::Constant).unwrap();
        assert_eq!(json, "\"constant\"");
    }

    #[test]
    fn test_backoff_type_default() {
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some("".to_string()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!("test".to_string().none_if_empty(), Some("test".to_string()));
        assert_eq!("".to_string().none_if_empty(), None);
    }

    #[test]
    fn test_json_object_preserves_insertion_order() {
        let mut obj = JsonObject::new();
        obj.insert("zeta".to_string(), JsonValue::from(1));
        obj.insert("alpha".to_string(), JsonValue::from(2));
        obj.insert("mid".to_string(), JsonValue::from(3));

        let keys: Vec<_> = obj.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{ReorderError, Result};

/// What to do with a move request that breaks the reorder preconditions (mismatched index
/// lists or indices outside the sequence).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidMovePolicy {
    /// Fail with a [`ReorderError`] and leave the sequence untouched.
    #[default]
    Reject,
    /// Drop every pair that has an invalid index and apply the rest.
    Skip,
    /// Clamp destinations to the last position, drop pairs with an invalid source and
    /// truncate to the shorter index list.
    Clamp,
}

/// Settings for a [`SortableList`](crate::SortableList).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SortableConfig {
    /// Several elements can be dragged at once; their handles get deselected after the new
    /// order is published.
    pub multi_drag: bool,
    pub invalid_moves: InvalidMovePolicy,
}

impl SortableConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| ReorderError::Config(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = SortableConfig::from_json("{}").unwrap();
        assert_eq!(config, SortableConfig::default());
        assert_eq!(config.invalid_moves, InvalidMovePolicy::Reject);
        assert!(!config.multi_drag);
    }

    #[test]
    fn parses_policy_names() {
        let config =
            SortableConfig::from_json(r#"{"multi_drag": true, "invalid_moves": "clamp"}"#).unwrap();
        assert!(config.multi_drag);
        assert_eq!(config.invalid_moves, InvalidMovePolicy::Clamp);
    }

    #[test]
    fn unknown_policy_is_a_config_error() {
        let err = SortableConfig::from_json(r#"{"invalid_moves": "explode"}"#).unwrap_err();
        assert!(matches!(err, ReorderError::Config(_)));
    }
}

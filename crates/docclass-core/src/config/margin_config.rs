use serde::{Deserialize, Serialize};

use super::defaults;

/// Margin profile configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginConfig {
    /// Minimum |review − non_review| for a definite label.
    pub threshold: f64,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_THRESHOLD,
        }
    }
}

//! Repair configuration for dataset-specific corrections.
//!
//! The cleaning stages encode no catalog facts of their own: every correction
//! value lives here, loadable from a JSON file, so the correction set can be
//! audited and versioned independently of the transformation code.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CleanError, Result};

/// Repair values for entries whose duration was recorded in the rating column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationSwapRepair {
    /// Entries known to carry this defect, by identifier
    pub show_ids: Vec<String>,
    /// Verified rating applied to every affected entry
    pub replacement_rating: String,
}

/// Externally supplied correction tables for the rating repair stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairConfig {
    /// Duration/rating swap repair values
    pub duration_swap: DurationSwapRepair,
    /// Verified rating for each entry shipped without one
    pub rating_fills: HashMap<String, String>,
}

impl RepairConfig {
    /// Load a repair configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CleanError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;

        serde_json::from_str(&text).map_err(|e| {
            CleanError::ConfigError(format!(
                "Invalid repair configuration in {}: {e}",
                path.display()
            ))
        })
    }

    /// Correction set verified against the 2021 catalog export
    ///
    /// The three swapped entries are stand-up specials rated for mature
    /// audiences; the fills come from the distributor's public listings.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            duration_swap: DurationSwapRepair {
                show_ids: vec![
                    "s5542".to_string(),
                    "s5795".to_string(),
                    "s5814".to_string(),
                ],
                replacement_rating: "TV-MA".to_string(),
            },
            rating_fills: [
                ("s5990", "TV-PG"),
                ("s6828", "TV-14"),
                ("s7313", "TV-PG"),
                ("s7538", "TV-14"),
            ]
            .into_iter()
            .map(|(show_id, rating)| (show_id.to_string(), rating.to_string()))
            .collect(),
        }
    }
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The reference set survives a JSON round trip unchanged
    #[test]
    fn reference_config_round_trips_through_json() {
        let reference = RepairConfig::reference();
        let json = serde_json::to_string(&reference).unwrap();
        let parsed: RepairConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.duration_swap.show_ids, reference.duration_swap.show_ids);
        assert_eq!(parsed.duration_swap.replacement_rating, "TV-MA");
        assert_eq!(parsed.rating_fills.len(), reference.rating_fills.len());
        assert_eq!(parsed.rating_fills.get("s5990").map(String::as_str), Some("TV-PG"));
    }
}

//! Simulated anomaly events: scenario catalog, event generator, shared event types.

mod catalog;
mod generator;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use catalog::{CatalogError, Scenario, ScenarioCatalog};
pub use generator::AnomalyGenerator;

/// One simulated detection, created by the generator and owned by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyEvent {
    /// Scenario id; not unique across draws
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    /// Nominally 0.0–1.0; only the random path clamps
    pub severity: f64,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl AnomalyEvent {
    /// Event stamped with the current time
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        severity: f64,
        location: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: Utc::now(),
            description: description.into(),
            severity,
            location: location.into(),
            kind: kind.into(),
        }
    }

    pub(crate) fn from_scenario(scenario: &Scenario, severity: f64) -> Self {
        Self::new(
            scenario.id.clone(),
            scenario.description.clone(),
            severity,
            scenario.location.clone(),
            scenario.kind.clone(),
        )
    }
}

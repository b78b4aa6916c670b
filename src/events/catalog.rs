//! Scenario catalog: the built-in campus reference table or an external JSON file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read scenario file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("scenario catalog is empty")]
    Empty,
    #[error("jitter {0} must be finite and at most 1.0")]
    InvalidJitter(f64),
}

/// Static template for one anomaly type.
///
/// Deserializes from either the built-in field names or the external
/// scenario file layout (`name`, `severity`, `nle`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    #[serde(rename = "type", alias = "name")]
    pub kind: String,
    #[serde(alias = "nle")]
    pub description: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(alias = "severity")]
    pub base_severity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Canned suggested corrective action shipped with the scenario
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sca: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_file: Option<String>,
    #[serde(default)]
    pub multisensory: bool,
}

fn default_location() -> String {
    "Unknown".to_string()
}

impl Scenario {
    fn builtin(id: &str, kind: &str, description: &str, location: &str, base_severity: f64) -> Self {
        Self {
            id: id.to_string(),
            kind: kind.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            base_severity,
            confidence: None,
            sca: None,
            video_file: None,
            multisensory: false,
        }
    }

    /// Multisensory flag set, or an `H-` (high) series id
    pub fn high_severity(&self) -> bool {
        self.multisensory || self.id.starts_with('H')
    }
}

/// Read-only scenario table, fixed at construction
#[derive(Debug, Clone, Default)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// Campus anomaly database (ten rows)
    pub fn builtin() -> Self {
        Self::new(vec![
            Scenario::builtin(
                "C-01",
                "Unauthorized Access",
                "Unauthorized person entering a lab in the Durham Center after hours.",
                "Durham Center Lab",
                0.3,
            ),
            Scenario::builtin(
                "C-02",
                "Unattended Object",
                "Unattended backpack left near the Memorial Union entrance for >10 mins.",
                "Memorial Union Entrance",
                0.6,
            ),
            Scenario::builtin(
                "C-05",
                "Security Breach",
                "Person observed propping open a fire door in a residence hall.",
                "Residence Hall",
                0.3,
            ),
            Scenario::builtin(
                "C-06",
                "Suspicious Activity",
                "Person attempting to climb the facade of Beardshear Hall.",
                "Beardshear Hall",
                0.65,
            ),
            Scenario::builtin(
                "C-09",
                "Suspicious Activity",
                "Individual ducking and hiding near a vehicle in a parking lot.",
                "Parking Lot",
                0.45,
            ),
            Scenario::builtin(
                "H-01",
                "Physical Altercation",
                "Physical altercation breaking out at a Jack Trice Stadium tailgate.",
                "Jack Trice Stadium",
                0.8,
            ),
            Scenario::builtin(
                "H-02",
                "Medical Emergency",
                "Individual collapsing suddenly in the Parks Library common area.",
                "Parks Library",
                0.85,
            ),
            Scenario::builtin(
                "H-03",
                "Weapon Detection",
                "Person brandishing a firearm in a classroom setting.",
                "Classroom",
                1.0,
            ),
            Scenario::builtin(
                "H-04",
                "Environmental Hazard",
                "Visual indicators of a flash flood (Squaw Creek area).",
                "Squaw Creek",
                0.9,
            ),
            Scenario::builtin(
                "C-03",
                "Vehicle Incident",
                "Low-speed fender bender in the Lied Recreation Center lot.",
                "Lied Rec Center",
                0.25,
            ),
        ])
    }

    /// Parse a JSON array of scenarios. Severities are taken as-is.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenarios: Vec<Scenario> =
            serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(scenarios))
    }

    /// Load the scenario file, degrading to an empty catalog when it is missing or unreadable
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_json_file(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "scenario catalog unavailable");
                Self::default()
            }
        }
    }

    /// Exact id match
    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(|s| s.id.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }

    pub fn as_slice(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_ten_rows() {
        let c = ScenarioCatalog::builtin();
        assert_eq!(c.len(), 10);
        assert_eq!(c.ids().next(), Some("C-01"));
        assert_eq!(c.ids().last(), Some("C-03"));
    }

    #[test]
    fn external_layout_maps_fields() {
        let json = r#"[{
            "id": "H-03",
            "name": "Weapon in Classroom",
            "severity": 0.98,
            "confidence": 0.91,
            "nle": "Firearm silhouette detected.",
            "sca": "Initiate lockdown.",
            "video_file": "h03.mp4",
            "multisensory": true
        }]"#;
        let s: Vec<Scenario> = serde_json::from_str(json).unwrap();
        assert_eq!(s[0].kind, "Weapon in Classroom");
        assert_eq!(s[0].description, "Firearm silhouette detected.");
        assert_eq!(s[0].base_severity, 0.98);
        assert_eq!(s[0].location, "Unknown");
        assert_eq!(s[0].sca.as_deref(), Some("Initiate lockdown."));
        assert!(s[0].multisensory);
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(ScenarioCatalog::builtin().get("does-not-exist").is_none());
    }
}

//! Dashboard session: one engine, one generator and the newest-first alert history.
//! Constructed once and passed to whatever renders it.

use crate::config::{GeneratorConfig, SundusConfig};
use crate::events::{AnomalyEvent, AnomalyGenerator, Scenario, ScenarioCatalog};
use crate::tiers::{Alert, Tier, TieredLogicEngine};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    /// Wall-clock `HH:MM:SS` at injection
    pub time: String,
    pub event: AnomalyEvent,
    pub alert: Alert,
}

/// One row of the event log table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRow {
    pub time: String,
    pub tier: u8,
    #[serde(rename = "type")]
    pub kind: String,
    pub explanation: String,
    pub severity: String,
}

impl From<&HistoryEntry> for LogRow {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            time: entry.time.clone(),
            tier: entry.alert.level,
            kind: entry.event.kind.clone(),
            explanation: entry.alert.nle.clone(),
            severity: format!("{:.2}", entry.event.severity),
        }
    }
}

pub struct Session {
    engine: TieredLogicEngine,
    /// None when the scenario catalog could not be loaded; interaction is disabled
    generator: Option<AnomalyGenerator>,
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new(engine: TieredLogicEngine, generator: Option<AnomalyGenerator>) -> Self {
        Self {
            engine,
            generator,
            history: Vec::new(),
        }
    }

    /// Build engine and generator from config. A missing or empty catalog yields a
    /// session with interaction disabled rather than an error.
    pub fn from_config(config: &SundusConfig) -> Self {
        let catalog = match &config.catalog_path {
            Some(path) => ScenarioCatalog::load_or_empty(path),
            None => ScenarioCatalog::builtin(),
        };
        let generator_config = if config.generator.is_valid() {
            config.generator.clone()
        } else {
            warn!(jitter = config.generator.jitter, "jitter out of range, using default");
            GeneratorConfig::default()
        };
        let generator = match AnomalyGenerator::with_catalog(catalog, &generator_config) {
            Ok(g) => Some(g),
            Err(e) => {
                warn!(error = %e, "scenario selection disabled");
                None
            }
        };
        Self::new(TieredLogicEngine::new(config.tiers.clone()), generator)
    }

    pub fn engine(&self) -> &TieredLogicEngine {
        &self.engine
    }

    pub fn generator(&self) -> Option<&AnomalyGenerator> {
        self.generator.as_ref()
    }

    pub fn catalog_available(&self) -> bool {
        self.generator.is_some()
    }

    pub fn scenario_ids(&self) -> Vec<String> {
        self.generator
            .as_ref()
            .map(|g| g.catalog().ids().map(String::from).collect())
            .unwrap_or_default()
    }

    /// Draw a random event, classify it and record it. None when the catalog is unavailable.
    pub fn inject_random(&mut self) -> Option<&HistoryEntry> {
        let event = self.generator.as_ref()?.generate_random();
        Some(self.record(event))
    }

    /// Replay a catalog scenario by id. Unknown ids are a no-op.
    pub fn play_scenario(&mut self, id: &str) -> Option<&HistoryEntry> {
        let event = match self.generator.as_ref()?.get_by_id(id) {
            Some(e) => e,
            None => {
                warn!(scenario_id = id, "scenario not found");
                return None;
            }
        };
        Some(self.record(event))
    }

    /// Record a synthetic test event for the given tier. None when the catalog is unavailable.
    pub fn force_tier(&mut self, tier: Tier) -> Option<&HistoryEntry> {
        let event = self.generator.as_ref()?.forced_tier_event(tier);
        Some(self.record(event))
    }

    /// Classify and record an externally built event
    pub fn record(&mut self, event: AnomalyEvent) -> &HistoryEntry {
        let alert = self.engine.classify(&event);
        info!(
            event_id = %event.id,
            severity = event.severity,
            tier = alert.level,
            "anomaly injected"
        );
        self.history.insert(
            0,
            HistoryEntry {
                id: Uuid::new_v4(),
                time: Local::now().format("%H:%M:%S").to_string(),
                event,
                alert,
            },
        );
        &self.history[0]
    }

    /// Catalog row an entry was drawn from; None for synthetic events
    pub fn scenario_for(&self, entry: &HistoryEntry) -> Option<&Scenario> {
        self.generator.as_ref()?.catalog().get(&entry.event.id)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.history.first()
    }

    /// Newest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn log_rows(&self) -> Vec<LogRow> {
        self.history.iter().map(LogRow::from).collect()
    }
}

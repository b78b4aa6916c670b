//! Maps event severity to a response tier through a fixed threshold table; produces the alert text.

use super::{Alert, AlertColor, Tier};
use crate::config::TiersConfig;
use crate::events::AnomalyEvent;
use tracing::{debug, warn};

/// One row of the tier table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRow {
    pub tier: Tier,
    /// Upper bound of the tier; the tier above starts strictly beyond it
    pub threshold: f64,
    pub color: AlertColor,
    pub label: &'static str,
}

/// Stateless apart from the table; share freely.
#[derive(Debug, Clone)]
pub struct TieredLogicEngine {
    tiers: [TierRow; 3],
}

impl Default for TieredLogicEngine {
    fn default() -> Self {
        Self::new(TiersConfig::default())
    }
}

impl TieredLogicEngine {
    /// Incoherent thresholds (caution not strictly below critical, or non-finite) are
    /// replaced by the defaults.
    pub fn new(config: TiersConfig) -> Self {
        let config = if config.is_valid() {
            config
        } else {
            warn!(
                caution = config.caution_threshold,
                critical = config.critical_threshold,
                "tier thresholds out of order, using defaults"
            );
            TiersConfig::default()
        };
        let row = |tier: Tier, threshold: f64| TierRow {
            tier,
            threshold,
            color: tier.color(),
            label: tier.label(),
        };
        Self {
            tiers: [
                row(Tier::Monitoring, config.caution_threshold),
                row(Tier::Caution, config.critical_threshold),
                row(Tier::Critical, 1.0),
            ],
        }
    }

    pub fn tiers(&self) -> &[TierRow; 3] {
        &self.tiers
    }

    /// Strict `>` on both thresholds: a severity equal to a threshold stays in the lower tier.
    /// Out-of-range and NaN severities are not rejected.
    pub fn tier_for(&self, severity: f64) -> Tier {
        if severity > self.tiers[1].threshold {
            Tier::Critical
        } else if severity > self.tiers[0].threshold {
            Tier::Caution
        } else {
            Tier::Monitoring
        }
    }

    pub fn classify(&self, event: &AnomalyEvent) -> Alert {
        let tier = self.tier_for(event.severity);
        debug!(event_id = %event.id, severity = event.severity, tier = tier.level(), "classified");
        self.alert(tier, event)
    }

    fn alert(&self, tier: Tier, event: &AnomalyEvent) -> Alert {
        let row = &self.tiers[usize::from(tier.level() - 1)];
        let location = &event.location;
        let kind = event.kind.to_lowercase();
        let (nle, sca) = match tier {
            Tier::Monitoring => (
                format!(
                    "System monitoring area '{location}'. No significant anomalies detected. \
                     Current activity level is strictly routine."
                ),
                format!("No action required. Continue routine monitoring of '{location}'."),
            ),
            Tier::Caution => (
                format!(
                    "Attention: Unusual pattern detected at '{location}'. Potential {kind} identified. \
                     Please verify camera feed."
                ),
                format!(
                    "Dispatch the nearest patrol unit to verify the {kind} at '{location}' \
                     and review adjacent camera feeds."
                ),
            ),
            Tier::Critical => (
                format!(
                    "CRITICAL ALERT: High-severity {kind} confirming at '{location}'. \
                     Immediate human intervention required. Initiating containment protocols."
                ),
                format!(
                    "Notify campus police and emergency services immediately. Restrict access to \
                     '{location}' and keep the live feed on the primary display."
                ),
            ),
        };
        Alert {
            level: tier.level(),
            tier,
            color: row.color,
            label: row.label.to_string(),
            nle,
            sca,
            audio_cue: tier != Tier::Monitoring,
            strobe: tier == Tier::Critical,
        }
    }
}

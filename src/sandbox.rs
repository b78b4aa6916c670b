//! Virtual sandbox: rapid-fire classification consistency and priority ordering self-check.

use crate::config::SandboxConfig;
use crate::events::AnomalyGenerator;
use crate::tiers::{Tier, TieredLogicEngine};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize)]
pub struct Inconsistency {
    pub event_id: String,
    pub severity: f64,
    pub level: u8,
    pub expected: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityCheck {
    Passed { low: u8, high: u8 },
    Inverted { low: u8, high: u8 },
    /// One of the reference scenarios is not in the catalog
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct SandboxReport {
    pub processed: usize,
    pub duration: Duration,
    pub inconsistencies: Vec<Inconsistency>,
    pub priority: PriorityCheck,
}

impl SandboxReport {
    pub fn passed(&self) -> bool {
        self.inconsistencies.is_empty() && !matches!(self.priority, PriorityCheck::Inverted { .. })
    }
}

pub fn run(engine: &TieredLogicEngine, generator: &AnomalyGenerator, config: &SandboxConfig) -> SandboxReport {
    let events: Vec<_> = (0..config.batch_size)
        .map(|_| generator.generate_random())
        .collect();

    let start = Instant::now();
    let alerts: Vec<_> = events.iter().map(|e| engine.classify(e)).collect();
    let duration = start.elapsed();

    let critical = engine.tiers()[1].threshold;
    let inconsistencies: Vec<Inconsistency> = events
        .iter()
        .zip(&alerts)
        .filter_map(|(evt, alert)| {
            let expected = engine.classify(evt).level;
            let critical_missed = evt.severity > critical && alert.tier != Tier::Critical;
            if alert.level != expected || critical_missed {
                Some(Inconsistency {
                    event_id: evt.id.clone(),
                    severity: evt.severity,
                    level: alert.level,
                    expected: if critical_missed { Tier::Critical.level() } else { expected },
                })
            } else {
                None
            }
        })
        .collect();

    let priority = match (
        generator.get_by_id(&config.low_scenario),
        generator.get_by_id(&config.high_scenario),
    ) {
        (Some(low), Some(high)) => {
            let low = engine.classify(&low).level;
            let high = engine.classify(&high).level;
            if high > low {
                PriorityCheck::Passed { low, high }
            } else {
                PriorityCheck::Inverted { low, high }
            }
        }
        _ => PriorityCheck::Skipped,
    };

    let report = SandboxReport {
        processed: events.len(),
        duration,
        inconsistencies,
        priority,
    };
    if report.passed() {
        info!(processed = report.processed, "sandbox passed");
    } else {
        warn!(
            inconsistencies = report.inconsistencies.len(),
            priority = ?report.priority,
            "sandbox failed"
        );
    }
    report
}

impl fmt::Display for SandboxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ">>> STARTING VIRTUAL SANDBOX TEST <<<")?;
        writeln!(f)?;
        writeln!(f, "[Test 1] Rapid Fire Logic Check...")?;
        writeln!(f, "Processed {} events in {:.4}s", self.processed, self.duration.as_secs_f64())?;
        for i in &self.inconsistencies {
            writeln!(
                f,
                "FAIL: Event {} severity {:.2} got Tier {} (expected {})",
                i.event_id, i.severity, i.level, i.expected
            )?;
        }
        if self.inconsistencies.is_empty() {
            writeln!(f, "SUCCESS: 0 Logic Inconsistencies found in rapid batch.")?;
        } else {
            writeln!(f, "FAILURE: {} Logic Inconsistencies found.", self.inconsistencies.len())?;
        }
        writeln!(f)?;
        writeln!(f, "[Test 2] Priority Override Check...")?;
        match self.priority {
            PriorityCheck::Passed { .. } => {
                writeln!(f, "SUCCESS: High tier correctly prioritized in logic flow.")
            }
            PriorityCheck::Inverted { low, high } => {
                writeln!(f, "FAILURE: Priority inversion detected (low tier {low}, high tier {high}).")
            }
            PriorityCheck::Skipped => writeln!(f, "SKIPPED: reference scenarios not in catalog."),
        }
    }
}

//! Severity tiers and the alerts derived from them.

mod engine;

pub use engine::{TierRow, TieredLogicEngine};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Monitoring,
    Caution,
    Critical,
}

impl Tier {
    /// 1, 2 or 3
    pub fn level(self) -> u8 {
        match self {
            Tier::Monitoring => 1,
            Tier::Caution => 2,
            Tier::Critical => 3,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Tier::Monitoring),
            2 => Some(Tier::Caution),
            3 => Some(Tier::Critical),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Monitoring => "MONITORING",
            Tier::Caution => "CAUTION",
            Tier::Critical => "CRITICAL",
        }
    }

    pub fn color(self) -> AlertColor {
        match self {
            Tier::Monitoring => AlertColor::Green,
            Tier::Caution => AlertColor::Orange,
            Tier::Critical => AlertColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertColor {
    Green,
    Orange,
    Red,
    /// Not produced by classification; rendering fallback only
    Grey,
}

impl AlertColor {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertColor::Green => "green",
            AlertColor::Orange => "orange",
            AlertColor::Red => "red",
            AlertColor::Grey => "grey",
        }
    }
}

impl std::fmt::Display for AlertColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert for a single event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: u8,
    pub tier: Tier,
    pub color: AlertColor,
    pub label: String,
    /// Natural-language explanation
    pub nle: String,
    /// Suggested corrective action
    pub sca: String,
    pub audio_cue: bool,
    pub strobe: bool,
}

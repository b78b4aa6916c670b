//! SUNDUS — tiered anomaly alert simulator for human-AI teaming demos.
//!
//! Modular structure:
//! - [`events`] — Scenario catalog, random/exact event generation
//! - [`tiers`] — Severity tier classification and alert text
//! - [`session`] — Dashboard session context and event history
//! - [`sandbox`] — Virtual sandbox self-check
//! - [`render`] — Terminal presentation
//! - [`logging`] — Structured logging

pub mod config;
pub mod events;
pub mod tiers;
pub mod session;
pub mod sandbox;
pub mod render;
pub mod logging;

pub use config::SundusConfig;
pub use events::{AnomalyEvent, AnomalyGenerator, Scenario, ScenarioCatalog};
pub use tiers::{Alert, AlertColor, Tier, TieredLogicEngine};
pub use session::{HistoryEntry, LogRow, Session};
pub use sandbox::SandboxReport;
pub use logging::StructuredLogger;

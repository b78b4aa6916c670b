//! Diagnostics for the SUNDUS dashboard: tier classifications (debug), injections (info),
//! catalog and config fallbacks (warn). They go to stderr; stdout carries only the
//! rendered dashboard or, with `--json`, history entries and scenarios as ndjson.

use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub struct StructuredLogger;

impl StructuredLogger {
    /// Install the process-wide subscriber from `log.json` / `log.level`; RUST_LOG wins over
    /// the configured level. Call once, after the config is loaded.
    pub fn init(json: bool, default_level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let registry = tracing_subscriber::registry().with(filter);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_span_events(FmtSpan::NONE);
        if json {
            registry.with(layer.json()).init();
        } else {
            registry.with(layer).init();
        }
    }

    /// Serialize one history entry, scenario or sandbox report as a single JSON line
    pub fn emit_json(value: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
        let line = serde_json::to_string(value)?;
        writeln!(w, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Line<'a> {
        tier: u8,
        color: &'a str,
    }

    #[test]
    fn emits_one_line_per_value() {
        let mut buf = Vec::new();
        StructuredLogger::emit_json(&Line { tier: 3, color: "red" }, &mut buf).unwrap();
        StructuredLogger::emit_json(&Line { tier: 1, color: "green" }, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, [r#"{"tier":3,"color":"red"}"#, r#"{"tier":1,"color":"green"}"#]);
    }
}

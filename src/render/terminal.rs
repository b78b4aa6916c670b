//! Plain-text dashboard. Alert colors resolve to status renderers through a fixed table.

use crate::config::RenderConfig;
use crate::events::ScenarioCatalog;
use crate::session::{LogRow, Session};
use crate::tiers::AlertColor;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Success,
    Warning,
    Error,
    Info,
}

impl StatusStyle {
    fn tag(self) -> &'static str {
        match self {
            StatusStyle::Success => "[ OK ]",
            StatusStyle::Warning => "[WARN]",
            StatusStyle::Error => "[CRIT]",
            StatusStyle::Info => "[INFO]",
        }
    }

    fn write(self, w: &mut dyn Write, msg: &str) -> io::Result<()> {
        writeln!(w, "{} {}", self.tag(), msg)
    }
}

pub type Renderer = fn(&mut dyn Write, &str) -> io::Result<()>;

fn success(w: &mut dyn Write, msg: &str) -> io::Result<()> {
    StatusStyle::Success.write(w, msg)
}

fn warning(w: &mut dyn Write, msg: &str) -> io::Result<()> {
    StatusStyle::Warning.write(w, msg)
}

fn error(w: &mut dyn Write, msg: &str) -> io::Result<()> {
    StatusStyle::Error.write(w, msg)
}

fn info(w: &mut dyn Write, msg: &str) -> io::Result<()> {
    StatusStyle::Info.write(w, msg)
}

const RENDERERS: [(AlertColor, Renderer); 3] = [
    (AlertColor::Green, success),
    (AlertColor::Orange, warning),
    (AlertColor::Red, error),
];

/// Unmapped colors fall back to the info renderer
pub fn renderer_for(color: AlertColor) -> Renderer {
    RENDERERS
        .iter()
        .find(|(c, _)| *c == color)
        .map(|(_, r)| *r)
        .unwrap_or(info)
}

pub fn render_status(w: &mut dyn Write, session: &Session, config: &RenderConfig) -> io::Result<()> {
    writeln!(w, "System Status")?;
    if !session.catalog_available() {
        return error(w, "Scenario catalog not found or empty. Selection disabled.");
    }
    let Some(latest) = session.latest() else {
        return success(w, "System Operational. No anomalies detected.");
    };
    let (event, alert) = (&latest.event, &latest.alert);
    let scenario = session.scenario_for(latest);

    if scenario.is_some_and(|s| s.high_severity()) {
        error(w, &format!("HIGH SEVERITY ALERT: {}", event.kind))?;
    }
    renderer_for(alert.color)(
        w,
        &format!("STATUS: {} - {}", alert.level, alert.color.as_str().to_uppercase()),
    )?;
    writeln!(w, "Detection: {}", event.kind)?;
    writeln!(w, "Location:  {}", event.location)?;
    writeln!(w, "Severity:  {:.2}", event.severity)?;
    if let Some(c) = scenario.and_then(|s| s.confidence) {
        writeln!(w, "Confidence: {:.2}", c)?;
    }
    if let Some(v) = scenario.and_then(|s| s.video_file.as_deref()) {
        writeln!(w, "Video feed: {}", v)?;
    }
    writeln!(w)?;
    writeln!(w, "AI Explanation (NLE)")?;
    info(w, &alert.nle)?;
    writeln!(w, "Suggested Corrective Action (SCA)")?;
    success(w, &alert.sca)?;
    if let Some(sca) = scenario.and_then(|s| s.sca.as_deref()) {
        success(w, &format!("Scenario guidance: {}", sca))?;
    }

    if alert.audio_cue {
        if config.bell {
            write!(w, "\x07")?;
        }
        writeln!(w, "(audio cue triggered)")?;
    }
    if alert.strobe {
        writeln!(w, "!! VISUAL STROBE ACTIVE !!")?;
    }
    Ok(())
}

pub fn render_log(w: &mut dyn Write, rows: &[LogRow]) -> io::Result<()> {
    writeln!(w, "Event Log")?;
    if rows.is_empty() {
        return writeln!(w, "(empty)");
    }
    writeln!(w, "{:<8}  {:>4}  {:<22}  {:>8}  Explanation", "Time", "Tier", "Type", "Severity")?;
    for r in rows {
        writeln!(
            w,
            "{:<8}  {:>4}  {:<22}  {:>8}  {}",
            r.time, r.tier, r.kind, r.severity, r.explanation
        )?;
    }
    Ok(())
}

pub fn render_catalog(w: &mut dyn Write, catalog: &ScenarioCatalog) -> io::Result<()> {
    for s in catalog.iter() {
        writeln!(
            w,
            "{:<6}  {:>4.2}  {:<22}  {:<24}  {}",
            s.id, s.base_severity, s.kind, s.location, s.description
        )?;
        if let Some(c) = s.confidence {
            writeln!(w, "        confidence: {:.2}", c)?;
        }
        if let Some(sca) = &s.sca {
            writeln!(w, "        sca: {}", sca)?;
        }
        if let Some(v) = &s.video_file {
            writeln!(w, "        video: {}", v)?;
        }
        if s.multisensory {
            writeln!(w, "        multisensory alert")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{AnomalyEvent, AnomalyGenerator};
    use crate::tiers::TieredLogicEngine;

    fn rendered(session: &Session) -> String {
        let mut buf = Vec::new();
        render_status(&mut buf, session, &RenderConfig::default()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn grey_falls_back_to_info() {
        let mut buf = Vec::new();
        renderer_for(AlertColor::Grey)(&mut buf, "x").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[INFO] x\n");
    }

    #[test]
    fn empty_history_is_operational() {
        let session = Session::new(TieredLogicEngine::default(), Some(AnomalyGenerator::new()));
        assert!(rendered(&session).contains("[ OK ] System Operational. No anomalies detected."));
    }

    #[test]
    fn critical_status_has_strobe() {
        let mut session = Session::new(TieredLogicEngine::default(), Some(AnomalyGenerator::new()));
        session.play_scenario("H-03");
        let out = rendered(&session);
        assert!(out.contains("[CRIT] STATUS: 3 - RED"));
        assert!(out.contains("Detection: Weapon Detection"));
        assert!(out.contains("VISUAL STROBE ACTIVE"));
    }

    #[test]
    fn monitoring_status_is_quiet() {
        let mut session = Session::new(TieredLogicEngine::default(), Some(AnomalyGenerator::new()));
        session.record(AnomalyEvent::new("T", "t", 0.1, "Lab", "Test"));
        let out = rendered(&session);
        assert!(out.contains("[ OK ] STATUS: 1 - GREEN"));
        assert!(!out.contains("audio cue"));
        assert!(!out.contains("STROBE"));
    }

    fn json_catalog() -> ScenarioCatalog {
        let json = r#"[{
            "id": "C-02",
            "name": "Unattended Bag",
            "severity": 0.6,
            "confidence": 0.83,
            "nle": "Backpack left near the entrance.",
            "sca": "Send an officer to inspect the bag.",
            "video_file": "c02.mp4",
            "multisensory": true
        }]"#;
        ScenarioCatalog::new(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn catalog_listing_shows_scenario_extras() {
        let mut buf = Vec::new();
        render_catalog(&mut buf, &json_catalog()).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("confidence: 0.83"));
        assert!(out.contains("sca: Send an officer to inspect the bag."));
        assert!(out.contains("video: c02.mp4"));
        assert!(out.contains("multisensory alert"));
    }

    #[test]
    fn status_shows_scenario_extras() {
        let generator =
            AnomalyGenerator::with_catalog(json_catalog(), &crate::config::GeneratorConfig::default()).unwrap();
        let mut session = Session::new(TieredLogicEngine::default(), Some(generator));
        session.play_scenario("C-02").unwrap();
        let out = rendered(&session);
        assert!(out.contains("[CRIT] HIGH SEVERITY ALERT: Unattended Bag"));
        assert!(out.contains("[WARN] STATUS: 2 - ORANGE"));
        assert!(out.contains("Confidence: 0.83"));
        assert!(out.contains("Scenario guidance: Send an officer to inspect the bag."));
        assert!(out.contains("Video feed: c02.mp4"));
    }

    #[test]
    fn high_series_id_raises_banner() {
        let mut session = Session::new(TieredLogicEngine::default(), Some(AnomalyGenerator::new()));
        session.play_scenario("H-01");
        assert!(rendered(&session).contains("HIGH SEVERITY ALERT: Physical Altercation"));
        session.play_scenario("C-01");
        assert!(!rendered(&session).contains("HIGH SEVERITY ALERT"));
    }

    #[test]
    fn unavailable_catalog_is_reported() {
        let session = Session::new(TieredLogicEngine::default(), None);
        assert!(rendered(&session).contains("Selection disabled"));
    }
}

//! Event generator: uniform random draw with severity jitter, or exact lookup by id.

use super::{AnomalyEvent, CatalogError, ScenarioCatalog};
use crate::config::GeneratorConfig;
use crate::tiers::Tier;
use chrono::Utc;
use rand::Rng;

pub struct AnomalyGenerator {
    catalog: ScenarioCatalog,
    jitter: f64,
}

impl Default for AnomalyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AnomalyGenerator {
    /// Built-in catalog, default jitter
    pub fn new() -> Self {
        Self {
            catalog: ScenarioCatalog::builtin(),
            jitter: GeneratorConfig::default().jitter,
        }
    }

    /// Fails on an empty catalog so random draws always have a scenario to pick, and on
    /// a jitter the uniform range cannot represent.
    pub fn with_catalog(catalog: ScenarioCatalog, config: &GeneratorConfig) -> Result<Self, CatalogError> {
        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }
        if !config.is_valid() {
            return Err(CatalogError::InvalidJitter(config.jitter));
        }
        Ok(Self {
            catalog,
            jitter: config.jitter.abs(),
        })
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    pub fn generate_random(&self) -> AnomalyEvent {
        self.generate_random_with(&mut rand::thread_rng())
    }

    /// Pick a scenario uniformly; severity = clamp(base + U[-jitter, jitter], 0, 1)
    pub fn generate_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> AnomalyEvent {
        let scenarios = self.catalog.as_slice();
        let scenario = &scenarios[rng.gen_range(0..scenarios.len())];
        let fluctuation = rng.gen_range(-self.jitter..=self.jitter);
        let severity = (scenario.base_severity + fluctuation).clamp(0.0, 1.0);
        AnomalyEvent::from_scenario(scenario, severity)
    }

    /// Base severity verbatim: no jitter, no clamp.
    pub fn get_by_id(&self, id: &str) -> Option<AnomalyEvent> {
        self.catalog
            .get(id)
            .map(|s| AnomalyEvent::from_scenario(s, s.base_severity))
    }

    /// Synthetic event that lands squarely inside the given tier under default thresholds.
    pub fn forced_tier_event(&self, tier: Tier) -> AnomalyEvent {
        let severity = match tier {
            Tier::Monitoring => 0.2,
            Tier::Caution => 0.55,
            Tier::Critical => 0.9,
        };
        AnomalyEvent::new(
            format!("test_{}_{}", tier.level(), Utc::now().timestamp()),
            "Forced Test Event",
            severity,
            "Test Grid",
            "Test Protocol",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Scenario;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single(base: f64) -> AnomalyGenerator {
        let catalog = ScenarioCatalog::new(vec![Scenario {
            id: "X-01".into(),
            kind: "Edge".into(),
            description: "edge".into(),
            location: "Lab".into(),
            base_severity: base,
            confidence: None,
            sca: None,
            video_file: None,
            multisensory: false,
        }]);
        AnomalyGenerator::with_catalog(catalog, &GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn random_severity_stays_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for base in [0.0, 1.0] {
            let g = single(base);
            for _ in 0..500 {
                let e = g.generate_random_with(&mut rng);
                assert!((0.0..=1.0).contains(&e.severity), "severity {}", e.severity);
            }
        }
    }

    #[test]
    fn random_severity_within_jitter_of_base() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = AnomalyGenerator::new();
        for _ in 0..200 {
            let e = g.generate_random_with(&mut rng);
            let base = g.catalog().get(&e.id).unwrap().base_severity;
            assert!((e.severity - base).abs() <= 0.05 + 1e-12);
        }
    }

    #[test]
    fn lookup_does_not_clamp() {
        let g = single(1.3);
        assert_eq!(g.get_by_id("X-01").unwrap().severity, 1.3);
    }

    #[test]
    fn lookup_weapon_detection() {
        let e = AnomalyGenerator::new().get_by_id("H-03").unwrap();
        assert_eq!(e.severity, 1.0);
        assert_eq!(e.kind, "Weapon Detection");
        assert_eq!(e.location, "Classroom");
    }

    #[test]
    fn lookup_miss() {
        assert!(AnomalyGenerator::new().get_by_id("does-not-exist").is_none());
    }

    #[test]
    fn empty_catalog_rejected() {
        let r = AnomalyGenerator::with_catalog(ScenarioCatalog::default(), &GeneratorConfig::default());
        assert!(matches!(r, Err(CatalogError::Empty)));
    }

    #[test]
    fn oversized_jitter_rejected() {
        for jitter in [1e308, f64::INFINITY, f64::NAN, 1.5] {
            let r = AnomalyGenerator::with_catalog(ScenarioCatalog::builtin(), &GeneratorConfig { jitter });
            assert!(matches!(r, Err(CatalogError::InvalidJitter(_))), "jitter {}", jitter);
        }
    }

    #[test]
    fn full_jitter_still_clamps() {
        let g = AnomalyGenerator::with_catalog(ScenarioCatalog::builtin(), &GeneratorConfig { jitter: 1.0 }).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let e = g.generate_random_with(&mut rng);
            assert!((0.0..=1.0).contains(&e.severity));
        }
    }

    #[test]
    fn forced_tier_ids() {
        let e = AnomalyGenerator::new().forced_tier_event(Tier::Caution);
        assert!(e.id.starts_with("test_2_"));
        assert_eq!(e.severity, 0.55);
        assert_eq!(e.location, "Test Grid");
    }
}

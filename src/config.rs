//! Tuning for the three page effects.
//!
//! Defaults reproduce the published behavior; a hosting page that wants a
//! different feel overrides individual fields via
//! `init_effects_with_config()` (feature `serde_json`).

/// Top-level tuning, one field per effect.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EffectsConfig {
    /// Fraction of a revealable element's area that must be visible before
    /// it is revealed.
    pub reveal_threshold: f64,
    /// Vertical scroll offset (px) past which the scroll-top button shows.
    pub scroll_show_px: f64,
    pub petals: PetalTuning,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.2,
            scroll_show_px: 350.0,
            petals: PetalTuning::default(),
        }
    }
}

#[cfg(feature = "serde_json")]
impl EffectsConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Spawn cadence and per-petal parameter ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PetalTuning {
    /// Milliseconds between spawns; one petal per tick, page lifetime.
    pub spawn_interval_ms: i32,
    pub size_min_px: f64,
    pub size_max_px: f64,
    pub fall_min_ms: f64,
    pub fall_max_ms: f64,
    /// Maximum horizontal sway amplitude; actual drift is drawn from
    /// [-drift_max_px, drift_max_px].
    pub drift_max_px: f64,
}

impl Default for PetalTuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 900,
            size_min_px: 8.0,
            size_max_px: 18.0,
            fall_min_ms: 8_000.0,
            fall_max_ms: 14_000.0,
            drift_max_px: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_tuning() {
        let cfg = EffectsConfig::default();
        assert!((cfg.reveal_threshold - 0.2).abs() < 1e-12);
        assert!((cfg.scroll_show_px - 350.0).abs() < 1e-12);
        assert_eq!(cfg.petals.spawn_interval_ms, 900);
        assert!((cfg.petals.size_min_px - 8.0).abs() < 1e-12);
        assert!((cfg.petals.size_max_px - 18.0).abs() < 1e-12);
        assert!((cfg.petals.fall_min_ms - 8_000.0).abs() < 1e-12);
        assert!((cfg.petals.fall_max_ms - 14_000.0).abs() < 1e-12);
        assert!((cfg.petals.drift_max_px - 40.0).abs() < 1e-12);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_overrides_merge_over_defaults() {
        let cfg = EffectsConfig::from_json(r#"{"scroll_show_px": 200.0}"#).unwrap();
        assert!((cfg.scroll_show_px - 200.0).abs() < 1e-12);
        // untouched fields keep their defaults
        assert!((cfg.reveal_threshold - 0.2).abs() < 1e-12);
        assert_eq!(cfg.petals, PetalTuning::default());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn nested_petal_overrides_merge_over_defaults() {
        let cfg =
            EffectsConfig::from_json(r#"{"petals": {"spawn_interval_ms": 450}}"#).unwrap();
        assert_eq!(cfg.petals.spawn_interval_ms, 450);
        assert!((cfg.petals.drift_max_px - 40.0).abs() < 1e-12);
    }
}

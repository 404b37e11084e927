// Integration tests (native) for the `petal-drift` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use petal_drift::{EffectsConfig, PetalTuning};

#[test]
fn default_tuning_is_internally_consistent() {
    let cfg = EffectsConfig::default();
    assert!(cfg.petals.size_min_px < cfg.petals.size_max_px);
    assert!(cfg.petals.fall_min_ms < cfg.petals.fall_max_ms);
    assert!(cfg.petals.drift_max_px >= 0.0);
    assert!(cfg.petals.spawn_interval_ms > 0);
    assert!(cfg.reveal_threshold > 0.0 && cfg.reveal_threshold <= 1.0);
    assert!(cfg.scroll_show_px >= 0.0);
}

// The spawn timer has no cap on live petals; the bound is emergent from the
// fall-duration range divided by the spawn interval. Keep the defaults in the
// regime where that bound stays small.
#[test]
fn steady_state_petal_count_stays_bounded() {
    let t = PetalTuning::default();
    let min_live = t.fall_min_ms / t.spawn_interval_ms as f64;
    let max_live = t.fall_max_ms / t.spawn_interval_ms as f64;
    assert!(min_live >= 8.0, "live-petal floor dropped below 8: {min_live}");
    assert!(max_live <= 16.0, "live-petal ceiling above 16: {max_live}");
}

#[cfg(feature = "serde_json")]
#[test]
fn malformed_config_json_is_rejected() {
    assert!(EffectsConfig::from_json("{not json").is_err());
}

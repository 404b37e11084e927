//! Petal Drift core crate.
//!
//! Page-enhancement effects for a host document: reveal-on-scroll sections,
//! a scroll-to-top button and a decorative falling-petal background. The
//! hosting page loads the wasm module and calls [`init_effects`] once after
//! the DOM is ready; each effect then runs autonomously on browser-driven
//! callbacks (intersection notifications, scroll events, interval ticks and
//! animation frames). The three effects never coordinate with each other.

use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::prelude::*;

mod config;
mod petals;
mod reveal;
mod scroll_top;

pub use config::{EffectsConfig, PetalTuning};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Guard so a second init call is a silent no-op (relevant during hot reload;
// the effects have no teardown path and must not be doubled up).
static INITIALIZED: AtomicBool = AtomicBool::new(false);

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

/// Start all three page effects with the default tuning. Call once, after the
/// DOM is ready. Missing optional elements (`.reveal`, `#scrollTopBtn`,
/// `.petals`) leave the corresponding effect dormant.
#[wasm_bindgen]
pub fn init_effects() -> Result<(), JsValue> {
    init_with(EffectsConfig::default())
}

/// Same as [`init_effects`], with tuning overrides parsed from JSON. Absent
/// fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn init_effects_with_config(json: &str) -> Result<(), JsValue> {
    let cfg = EffectsConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    init_with(cfg)
}

fn init_with(cfg: EffectsConfig) -> Result<(), JsValue> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    reveal::setup(&win, &doc, cfg.reveal_threshold)?;
    scroll_top::setup(&win, &doc, cfg.scroll_show_px)?;
    petals::start(&win, &doc, cfg.petals)?;
    Ok(())
}

pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

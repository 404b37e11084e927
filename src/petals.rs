//! Falling-petal background. A repeating timer spawns one petal per tick
//! into the `.petals` container; every petal then drives its own
//! `requestAnimationFrame` chain until it has fallen off screen.
//!
//! Per-frame visuals are a pure function of the petal's progress ratio
//! (elapsed / fall duration), so the laws below are unit-testable without a
//! browser: vertical fall to 110vh, sinusoidal sway, one full rotation, and
//! a piecewise-linear fade in/out.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window, window};

use crate::config::PetalTuning;

const CONTAINER_SELECTOR: &str = ".petals";

pub(crate) fn start(win: &Window, doc: &Document, tuning: PetalTuning) -> Result<(), JsValue> {
    let container = match doc.query_selector(CONTAINER_SELECTOR)? {
        Some(el) => el,
        None => return Ok(()),
    };

    let interval_ms = tuning.spawn_interval_ms;
    let doc_spawn = doc.clone();
    let closure = Closure::wrap(Box::new(move || {
        // A failed spawn (detached container, teardown races) skips one petal.
        spawn_petal(&doc_spawn, &container, &tuning).ok();
    }) as Box<dyn FnMut()>);
    win.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        interval_ms,
    )?;
    // The spawn timer runs for the remaining page lifetime.
    closure.forget();
    Ok(())
}

// --- Petal state & frame driver ----------------------------------------------

/// Parameters fixed when a petal spawns.
#[derive(Clone, Copy, Debug)]
struct PetalParams {
    size_px: f64,
    start_left_vw: f64,
    fall_ms: f64,
    drift_px: f64,
}

/// One live petal: its spawn parameters plus creation timestamp.
struct Petal {
    params: PetalParams,
    spawned_ms: f64,
}

/// Outcome of advancing a petal by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Done,
}

impl PetalTuning {
    fn sample(&self, mut rand: impl FnMut() -> f64) -> PetalParams {
        PetalParams {
            size_px: lerp(self.size_min_px, self.size_max_px, rand()),
            start_left_vw: lerp(0.0, 100.0, rand()),
            fall_ms: lerp(self.fall_min_ms, self.fall_max_ms, rand()),
            drift_px: lerp(-self.drift_max_px, self.drift_max_px, rand()),
        }
    }
}

impl Petal {
    fn progress(&self, now: f64) -> f64 {
        let dur = if self.params.fall_ms <= 0.0 {
            1.0
        } else {
            self.params.fall_ms
        };
        (now - self.spawned_ms) / dur
    }

    /// Write this frame's style, or report the petal finished.
    fn advance(&self, el: &Element, now: f64) -> Step {
        let p = self.progress(now);
        match step_at(p) {
            Step::Continue => {
                el.set_attribute("style", &self.params.style_at(p)).ok();
                Step::Continue
            }
            Step::Done => Step::Done,
        }
    }
}

impl PetalParams {
    /// Full inline style for a given progress. The element starts just above
    /// the viewport and sits behind the page content.
    fn style_at(&self, progress: f64) -> String {
        format!(
            "position:fixed; top:-10px; left:{left}vw; width:{w}px; height:{h}px; \
             border-radius:50%; background:rgba(255,182,193,0.9); \
             box-shadow:0 2px 6px rgba(0,0,0,0.15); pointer-events:none; z-index:-1; \
             transform:translate({x}px, {y}vh) rotate({r}deg); opacity:{o};",
            left = self.start_left_vw,
            w = self.size_px,
            h = self.size_px * 1.4,
            x = sway_px(progress, self.drift_px),
            y = fall_vh(progress),
            r = spin_deg(progress),
            o = opacity(progress),
        )
    }
}

// --- Progress laws -----------------------------------------------------------

fn lerp(lo: f64, hi: f64, u: f64) -> f64 {
    lo + (hi - lo) * u
}

fn step_at(progress: f64) -> Step {
    if progress >= 1.0 { Step::Done } else { Step::Continue }
}

/// Vertical position in vh; 110 at progress 1 so the petal fully exits the
/// viewport before removal.
fn fall_vh(progress: f64) -> f64 {
    progress * 110.0
}

/// Horizontal sway in px: two full sine oscillations over the lifetime.
fn sway_px(progress: f64, drift_px: f64) -> f64 {
    (progress * 4.0 * std::f64::consts::PI).sin() * drift_px
}

/// One full rotation over the lifetime.
fn spin_deg(progress: f64) -> f64 {
    progress * 360.0
}

/// Fade in over the first 10% of progress, hold, fade out over the last 20%.
fn opacity(progress: f64) -> f64 {
    if progress < 0.1 {
        progress * 10.0
    } else {
        1.0 - (progress - 0.8).max(0.0) * 5.0
    }
}

// --- Spawning ----------------------------------------------------------------

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn spawn_petal(doc: &Document, container: &Element, tuning: &PetalTuning) -> Result<(), JsValue> {
    let el = doc.create_element("span")?;
    let petal = Petal {
        params: tuning.sample(js_sys::Math::random),
        spawned_ms: crate::performance_now(),
    };
    el.set_attribute("style", &petal.params.style_at(0.0))?;
    container.append_child(&el)?;

    // Per-petal animation chain. The closure exclusively owns the petal and
    // its element; on Done it removes the element and drops itself, so no
    // further frame is ever scheduled for this petal.
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        match petal.advance(&el, now) {
            Step::Continue => {
                if let Some(w) = window() {
                    let _ = w
                        .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
                }
            }
            Step::Done => {
                el.remove();
                f.borrow_mut().take();
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    Ok(())
}

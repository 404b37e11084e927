//! Reveal-on-scroll: elements matching `.reveal` gain the `active` class the
//! first time at least 20% of their area enters the viewport. Browsers
//! without `IntersectionObserver` get the degraded path: everything is
//! revealed immediately, no animation, no error.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window};

const REVEAL_SELECTOR: &str = ".reveal";
const ACTIVE_CLASS: &str = "active";

pub(crate) fn setup(win: &Window, doc: &Document, threshold: f64) -> Result<(), JsValue> {
    let nodes = doc.query_selector_all(REVEAL_SELECTOR)?;
    if nodes.length() == 0 {
        return Ok(());
    }

    if !has_intersection_observer(win) {
        // Fallback: show everything if the browser doesn't support it.
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                el.class_list().add_1(ACTIVE_CLASS)?;
            }
        }
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    target.class_list().add_1(ACTIVE_CLASS).ok();
                    // Stop observing the element once it has been revealed
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)?;
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&el);
        }
    }
    // The observer outlives this call; its callback must too.
    callback.forget();
    Ok(())
}

fn has_intersection_observer(win: &Window) -> bool {
    js_sys::Reflect::has(win.as_ref(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

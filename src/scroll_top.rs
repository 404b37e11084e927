//! Scroll-to-top button: `#scrollTopBtn` shows once the page is scrolled
//! past a threshold and smooth-scrolls back to the top when clicked. The
//! whole component is optional; without the element nothing subscribes.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

const BUTTON_ID: &str = "scrollTopBtn";

pub(crate) fn setup(win: &Window, doc: &Document, show_px: f64) -> Result<(), JsValue> {
    let btn: HtmlElement = match doc.get_element_by_id(BUTTON_ID) {
        Some(el) => el.dyn_into()?,
        None => return Ok(()),
    };

    // Show/hide button based on scroll position. Recomputed from the live
    // offset on every scroll event; no state is kept between events.
    {
        let win_scroll = win.clone();
        let btn_scroll = btn.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            let offset = win_scroll.scroll_y().unwrap_or(0.0);
            let display = if visible_at(offset, show_px) { "block" } else { "none" };
            btn_scroll
                .set_attribute("style", &format!("display:{display};"))
                .ok();
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Smooth scroll to top when clicked
    {
        let win_click = win.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            win_click.scroll_to_with_scroll_to_options(&opts);
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Pure display predicate: the button is visible iff the offset exceeds the
/// threshold, independent of any earlier offset.
fn visible_at(offset_px: f64, show_px: f64) -> bool {
    offset_px > show_px
}

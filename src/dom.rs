//! Browser-side helpers: logging setup, viewport height mirroring, button
//! pulse animation and page navigation.

use crate::config::VIEWPORT_RECHECK_MS;
use gloo_timers::callback::Timeout;
use gloo_utils::{document, window};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const VIEWPORT_EVENTS: [&str; 2] = ["resize", "orientationchange"];
const PULSE_CLASS: &str = "single-pulse";

/// Install the panic hook and route `log` records to the browser console.
pub fn init_logging() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    {
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        wasm_logger::init(wasm_logger::Config::new(level));
    }
}

/// Set `--vh` on the root element to 1% of the window's inner height.
pub fn set_viewport_height() {
    let Some(height) = window().inner_height().ok().and_then(|h| h.as_f64()) else {
        warn!("Window inner height unavailable, --vh not updated");
        return;
    };
    let Some(root) = document()
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        warn!("No root element to set --vh on");
        return;
    };
    let vh = height * 0.01;
    if let Err(err) = root.style().set_property("--vh", &format!("{}px", vh)) {
        warn!("Failed to set --vh: {:?}", err);
    }
}

/// Mirror the viewport height now and once more shortly after, when mobile
/// browsers have settled their toolbars.
pub fn refresh_viewport_height() {
    set_viewport_height();
    Timeout::new(VIEWPORT_RECHECK_MS, set_viewport_height).forget();
}

/// Keeps `--vh` in sync with resizes and orientation changes until dropped.
pub struct ViewportWatcher {
    listener: Closure<dyn FnMut()>,
}

impl ViewportWatcher {
    pub fn install() -> Self {
        refresh_viewport_height();
        let listener = Closure::<dyn FnMut()>::new(refresh_viewport_height);
        for event in VIEWPORT_EVENTS {
            if let Err(err) =
                window().add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            {
                warn!("Failed to listen for {}: {:?}", event, err);
            }
        }
        Self { listener }
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        for event in VIEWPORT_EVENTS {
            let _ = window()
                .remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref());
        }
    }
}

/// Restart the one-shot pulse animation on `element`.
pub fn pulse(element: &HtmlElement) {
    let classes = element.class_list();
    let _ = classes.remove_1(PULSE_CLASS);
    // Reading layout forces a reflow so re-adding the class restarts the animation.
    let _ = element.offset_width();
    if let Err(err) = classes.add_1(PULSE_CLASS) {
        warn!("Failed to add pulse class: {:?}", err);
    }
}

/// Send the window to `href`.
pub fn navigate(href: &str) {
    if let Err(err) = window().location().set_href(href) {
        warn!("Navigation to {} failed: {:?}", href, err);
    }
}

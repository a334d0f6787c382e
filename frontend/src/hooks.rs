use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Window};
use yew::prelude::*;

use crate::config::TOUCH_BREAKPOINT_PX;
use crate::interaction::InputMode;
use crate::scroll::ScrollMetrics;

/// A window event subscription, removed again when dropped.
pub struct WindowListener {
    window: Window,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(events: &'static [&'static str], handler: impl FnMut() + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        for event in events {
            window
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .ok()?;
        }
        Some(Self { window, events, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in self.events {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

pub fn read_scroll_metrics() -> Option<ScrollMetrics> {
    let window = window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height() as f64;
    Some(ScrollMetrics {
        scroll_y,
        viewport_height,
        document_height,
    })
}

/// Live scroll geometry; re-renders the caller on scroll and resize.
#[hook]
pub fn use_scroll_metrics() -> ScrollMetrics {
    let metrics = use_state_eq(|| read_scroll_metrics().unwrap_or_default());

    {
        let metrics = metrics.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new(&["scroll", "resize"], move || {
                    if let Some(current) = read_scroll_metrics() {
                        metrics.set(current);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    *metrics
}

/// Decides once, at session start, whether the expertise grid runs in
/// hover or tap-to-reveal mode. Resizing later does not switch modes.
pub fn detect_input_mode() -> InputMode {
    let Some(window) = window() else {
        return InputMode::PointerHover;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(TOUCH_BREAKPOINT_PX);
    let can_hover = window
        .match_media("(hover: none)")
        .ok()
        .flatten()
        .map(|query| !query.matches())
        .unwrap_or(true);
    let mode = InputMode::for_viewport(width, can_hover);
    debug!("Input mode {:?} (width {}, hover {})", mode, width, can_hover);
    mode
}

/// Stops the page behind an overlay from scrolling while `locked` is true.
#[hook]
pub fn use_body_scroll_lock(locked: bool) {
    use_effect_with_deps(
        move |locked| {
            let body = window().and_then(|w| w.document()).and_then(|d| d.body());
            if let Some(body) = &body {
                if *locked {
                    let _ = body.set_attribute("style", "overflow: hidden;");
                } else {
                    let _ = body.remove_attribute("style");
                }
            }
            || ()
        },
        locked,
    );
}

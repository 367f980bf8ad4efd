//! Leptos Viewport Utilities
//!
//! Tracks the browser window size with a `resize` listener on `window`.
//! The listener lives as long as the reactive owner that registered it.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Window inner dimensions in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn from_window(win: &web_sys::Window) -> Self {
        Self::from_dimensions(
            win.inner_width().ok().as_ref().and_then(JsValue::as_f64),
            win.inner_height().ok().as_ref().and_then(JsValue::as_f64),
        )
    }

    /// Build from raw dimensions, treating missing or negative values as zero
    pub fn from_dimensions(width: Option<f64>, height: Option<f64>) -> Self {
        let clamp = |v: Option<f64>| v.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0);
        Self::new(clamp(width), clamp(height))
    }

    /// Whole-pixel (width, height), for style attributes
    pub fn to_px(&self) -> (u32, u32) {
        (self.width.round() as u32, self.height.round() as u32)
    }
}

/// Report the viewport size now and on every `resize` event.
///
/// The listener is removed when the current owner is cleaned up
/// (e.g. the component that called this unmounts).
pub fn track_viewport<F>(on_resize: F)
where
    F: Fn(ViewportSize) + 'static,
{
    let Some(win) = web_sys::window() else {
        tracing::warn!("no window, viewport tracking disabled");
        return;
    };

    on_resize(ViewportSize::from_window(&win));

    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Some(win) = web_sys::window() {
            on_resize(ViewportSize::from_window(&win));
        }
    });

    if win
        .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!("failed to register resize listener");
        return;
    }

    let listener = StoredValue::new_local(Some(listener));
    on_cleanup(move || {
        let Some(listener) = listener.try_update_value(Option::take).flatten() else {
            return;
        };
        if let Some(win) = web_sys::window() {
            let _ = win.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        }
        tracing::debug!("resize listener removed");
    });
}

use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Log a labelled value to the browser console.
pub fn console_log(label: &str, value: &JsValue) {
    web_sys::console::log_2(&JsValue::from(label), value);
}

/// A running `setInterval`. Dropping it clears the interval.
///
/// The tick closure returns [`ControlFlow::Break`] to halt its own interval; the closure
/// itself stays alive until the `Interval` is dropped.
pub struct Interval {
    id: Rc<Cell<Option<i32>>>,
    _tick: Closure<dyn FnMut()>,
}

impl Interval {
    /// Schedule `tick` every `period_ms` milliseconds.
    ///
    /// # Errors
    /// Returns an error if no browser `window` is available, the period does not fit
    /// the timer API, or the browser refuses to schedule the interval.
    pub fn start<F>(period_ms: u32, mut tick: F) -> Result<Self, JsValue>
    where
        F: FnMut() -> ControlFlow<()> + 'static,
    {
        let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let timeout = i32::try_from(period_ms)
            .map_err(|_| JsValue::from_str("interval period out of range"))?;
        let id: Rc<Cell<Option<i32>>> = Rc::default();
        let slot = Rc::clone(&id);
        let closure = Closure::wrap(Box::new(move || {
            if tick().is_break() {
                clear_interval(&slot);
            }
        }) as Box<dyn FnMut()>);
        let handle = win.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        )?;
        id.set(Some(handle));
        Ok(Self { id, _tick: closure })
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.id.get().is_some()
    }

    pub fn cancel(&self) {
        clear_interval(&self.id);
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn clear_interval(slot: &Cell<Option<i32>>) {
    if let Some(handle) = slot.take()
        && let Some(win) = window()
    {
        win.clear_interval_with_handle(handle);
    }
}

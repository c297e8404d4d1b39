use wasm_bindgen::{JsCast, JsValue};

/// Seam for the external reporting hook. Emission is best effort; an
/// implementation must never surface an error to the caller.
pub trait AnalyticsHook {
    fn emit(&self, name: &str, params: &[(&str, String)]);
}

/// Forwards events to the page's global `gtag` function when one is
/// registered. Missing hook or a hook that throws are both silently ignored.
pub struct Gtag;

impl AnalyticsHook for Gtag {
    fn emit(&self, name: &str, params: &[(&str, String)]) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(hook) = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) else {
            return;
        };
        let Some(hook) = hook.dyn_ref::<js_sys::Function>() else {
            return;
        };
        let bag = js_sys::Object::new();
        for (key, value) in params {
            let _ = js_sys::Reflect::set(
                &bag,
                &JsValue::from_str(key),
                &JsValue::from_str(value),
            );
        }
        // A throwing hook must not interrupt the interaction being tracked.
        let _ = hook.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(name),
            &bag,
        );
    }
}

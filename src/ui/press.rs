use web_sys::HtmlElement;
use yew::prelude::*;

const PRESSED_TRANSFORM: &str = "scale(0.995)";

/// Press/release scale feedback shared by every interactive element on the
/// page. Purely visual; independent of tracking.
pub fn on_press() -> Callback<PointerEvent> {
    Callback::from(|e: PointerEvent| set_transform(e.target_dyn_into::<HtmlElement>(), PRESSED_TRANSFORM))
}

pub fn on_release() -> Callback<PointerEvent> {
    Callback::from(|e: PointerEvent| clear_transform(e.target_dyn_into::<HtmlElement>()))
}

pub fn on_leave() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| clear_transform(e.target_dyn_into::<HtmlElement>()))
}

fn set_transform(target: Option<HtmlElement>, value: &str) {
    if let Some(element) = target {
        let _ = element.style().set_property("transform", value);
    }
}

fn clear_transform(target: Option<HtmlElement>) {
    if let Some(element) = target {
        let _ = element.style().remove_property("transform");
    }
}

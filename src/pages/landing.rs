use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::tracking::time;
use crate::tracking::tracker::{confirm_hero, default_tracker, WindowOpener};
use crate::ui::overlay::OverlayState;
use crate::ui::press;

struct LinkEntry {
    id: Option<&'static str>,
    label: &'static str,
    href: &'static str,
}

const LINKS: &[LinkEntry] = &[
    LinkEntry {
        id: Some("instagram"),
        label: "Instagram",
        href: "https://instagram.com/bennettstellaaa",
    },
    LinkEntry {
        id: Some("threads"),
        label: "Threads",
        href: "https://threads.net/@bennettstellaaa",
    },
];

// Explicit hero destination; `None` falls back to the configured default.
const HERO_HREF: Option<&str> = None;

fn current_path() -> String {
    web_sys::window()
        .map(|w| w.location())
        .and_then(|l| l.pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn focus_later(id: &'static str, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        if let Some(element) = element {
            let _ = element.focus();
        }
    })
    .forget();
}

fn blur_active() {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    {
        let _ = element.blur();
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let overlay = use_state(OverlayState::default);
    let tracker = use_memo(|_| default_tracker(), ());

    // Initial page view, plus reset + re-track when the page comes back out
    // of the back/forward cache.
    {
        let overlay = overlay.clone();
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |_| {
                tracker.page_view(&current_path());

                let window = web_sys::window().unwrap();
                let restore_overlay = overlay.clone();
                let restore_tracker = tracker.clone();
                let pageshow = Closure::wrap(Box::new(move |_: web_sys::Event| {
                    restore_overlay.set((*restore_overlay).page_restored());
                    restore_tracker.page_view(&current_path());
                }) as Box<dyn FnMut(web_sys::Event)>);
                window
                    .add_event_listener_with_callback(
                        "pageshow",
                        pageshow.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "pageshow",
                            pageshow.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_hero_click = {
        let overlay = overlay.clone();
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| {
            overlay.set((*overlay).hero_activated());
            focus_later("overlayOpen", config::OVERLAY_FOCUS_DELAY_MS);
            tracker.hero_view();
        })
    };

    // Cancel button and clicks on the backdrop behave the same.
    let close_overlay = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| {
            blur_active();
            overlay.set((*overlay).cancelled());
            focus_later("heroBtn", config::HERO_FOCUS_DELAY_MS);
        })
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_confirm = {
        let overlay = overlay.clone();
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| {
            if (*overlay).is_busy() {
                return;
            }
            overlay.set((*overlay).confirmed());

            // The destination opens before any telemetry is dispatched, so
            // the navigation never waits on the network.
            let href = HERO_HREF.unwrap_or(config::DEFAULT_HERO_HREF);
            confirm_hero(&WindowOpener, tracker.as_ref(), href);

            let overlay = overlay.clone();
            Timeout::new(config::OVERLAY_CLOSE_DELAY_MS, move || {
                blur_active();
                overlay.set((*overlay).close_timer_elapsed());
                focus_later("heroBtn", config::HERO_FOCUS_DELAY_MS);
            })
            .forget();
        })
    };

    html! {
        <div class="page">
            <style>
                {r#"
                    .page {
                        min-height: 100vh;
                        display: flex;
                        justify-content: center;
                        background: #0d0d0f;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .card {
                        width: 100%;
                        max-width: 480px;
                        padding: 3rem 1.5rem 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .profile { text-align: center; margin-bottom: 1rem; }
                    .profile h1 { margin: 0; font-size: 1.6rem; }
                    .tagline { color: #999; margin: 0.3rem 0 0; }
                    .hero-button {
                        padding: 1rem;
                        border: none;
                        border-radius: 14px;
                        background: linear-gradient(135deg, #ff5e99, #ff2d78);
                        color: #fff;
                        font-size: 1.1rem;
                        font-weight: bold;
                        cursor: pointer;
                        transition: transform 0.1s ease;
                    }
                    .links { display: flex; flex-direction: column; gap: 0.8rem; }
                    .link {
                        display: block;
                        padding: 0.9rem;
                        text-align: center;
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.08);
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        color: #fff;
                        text-decoration: none;
                        transition: transform 0.1s ease;
                    }
                    footer { text-align: center; color: #666; margin-top: 2rem; font-size: 0.85rem; }
                    .overlay {
                        position: fixed;
                        inset: 0;
                        display: none;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.7);
                    }
                    .overlay.visible { display: flex; }
                    .dialog {
                        background: #1a1a1c;
                        border-radius: 16px;
                        padding: 1.5rem;
                        max-width: 320px;
                        text-align: center;
                    }
                    .dialog h2 { margin-top: 0; font-size: 1.2rem; }
                    .dialog-actions { display: flex; gap: 0.8rem; justify-content: center; margin-top: 1rem; }
                    .btn {
                        padding: 0.7rem 1.4rem;
                        border-radius: 10px;
                        border: none;
                        cursor: pointer;
                        font-size: 1rem;
                        transition: transform 0.1s ease;
                    }
                    .btn.confirm { background: #ff2d78; color: #fff; }
                    .btn.confirm:disabled { opacity: 0.6; cursor: wait; }
                    .btn.cancel { background: rgba(255, 255, 255, 0.12); color: #fff; }
                    .spinner {
                        display: inline-block;
                        width: 1em;
                        height: 1em;
                        border: 2px solid rgba(255, 255, 255, 0.4);
                        border-top-color: #fff;
                        border-radius: 50%;
                        animation: spin 0.7s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .sr-only {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                        clip: rect(0 0 0 0);
                    }
                "#}
            </style>
            <main class="card">
                <header class="profile">
                    <h1>{"stellaa"}</h1>
                    <p class="tagline">{"la based. everything i do, below."}</p>
                </header>

                <button
                    id="heroBtn"
                    class="hero-button"
                    onclick={on_hero_click}
                    onpointerdown={press::on_press()}
                    onpointerup={press::on_release()}
                    onpointercancel={press::on_release()}
                    onmouseleave={press::on_leave()}
                >
                    {"my exclusive page"}
                </button>

                <nav class="links">
                    { for LINKS.iter().map(|link| {
                        let id = link.id.map(str::to_string).unwrap_or_else(|| link.href.to_string());
                        let href = link.href;
                        let tracker = tracker.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            tracker.link_click(&id, href);
                        });
                        html! {
                            <a
                                class="link"
                                href={link.href}
                                target="_blank"
                                rel="noopener"
                                {onclick}
                                onpointerdown={press::on_press()}
                                onpointerup={press::on_release()}
                                onpointercancel={press::on_release()}
                                onmouseleave={press::on_leave()}
                            >
                                { link.label }
                            </a>
                        }
                    }) }
                </nav>

                <footer>
                    {"© "}<span id="year">{ time::current_year() }</span>{" stellaa"}
                </footer>
            </main>

            <div
                id="heroOverlay"
                class={classes!("overlay", overlay.is_visible().then_some("visible"))}
                aria-hidden={(!overlay.is_visible()).to_string()}
                onclick={close_overlay.clone()}
            >
                <div class="dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                    <h2>{"open my exclusive page?"}</h2>
                    <p>{"this opens in a new tab."}</p>
                    <div class="dialog-actions">
                        <button
                            id="overlayOpen"
                            class="btn confirm"
                            disabled={overlay.is_busy()}
                            onclick={on_confirm}
                            onpointerdown={press::on_press()}
                            onpointerup={press::on_release()}
                            onpointercancel={press::on_release()}
                            onmouseleave={press::on_leave()}
                        >
                            {
                                if overlay.is_busy() {
                                    html! {
                                        <>
                                            <span class="spinner" aria-hidden="true"></span>
                                            <span class="sr-only">{"Opening..."}</span>
                                        </>
                                    }
                                } else {
                                    html! { {"Open link"} }
                                }
                            }
                        </button>
                        <button id="overlayCancel" class="btn cancel" onclick={close_overlay}>
                            {"Cancel"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

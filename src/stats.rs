use wasm_bindgen::prelude::*;

use crate::config;
use crate::tracking::counter;
use crate::tracking::event_log::{EventLog, LocalStore};
use crate::tracking::time;

/// Console helper for the page owner: dumps the current remote counter
/// values and the local event log. Callable from the browser console via
/// the wasm module's exports.
#[wasm_bindgen]
pub fn show_owner_stats() {
    wasm_bindgen_futures::spawn_local(async {
        let date = time::date_key();
        let keys = [
            format!("{}_pageviews", config::COUNTER_KEY_PREFIX),
            format!("{}_pageviews_{}", config::COUNTER_KEY_PREFIX, date),
            "hero_views".to_string(),
            format!("hero_views_{}", date),
            "hero_overall".to_string(),
            format!("hero_daily_{}", date),
            "link_instagram".to_string(),
            format!("link_instagram_{}", date),
            "link_threads".to_string(),
            format!("link_threads_{}", date),
        ];

        log::info!("counts (namespace {}):", config::COUNTER_NAMESPACE);
        for key in keys {
            match counter::fetch_count(config::COUNTER_NAMESPACE, &key).await {
                Some(value) => log::info!("{}: {}", key, value),
                None => log::info!("{}: n/a", key),
            }
        }

        let events = EventLog::new(LocalStore).read_all();
        log::info!("local events (this browser): {}", events.len());
        for event in events {
            log::info!("  {:?} {} at {}", event.kind, event.id, event.at);
        }
    });
}

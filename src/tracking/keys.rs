use crate::config;

/// Lifetime and per-day counter keys for a page view.
pub fn pageview_keys(date_key: &str) -> (String, String) {
    let lifetime = format!("{}_pageviews", config::COUNTER_KEY_PREFIX);
    let daily = format!("{}_{}", lifetime, date_key);
    (lifetime, daily)
}

/// Lifetime and per-day counter keys for one outbound link.
pub fn link_keys(id: &str, date_key: &str) -> (String, String) {
    let lifetime = format!("link_{}", id);
    let daily = format!("{}_{}", lifetime, date_key);
    (lifetime, daily)
}

/// Lifetime and per-day counter keys for the hero overlay being shown.
pub fn hero_view_keys(date_key: &str) -> (String, String) {
    ("hero_views".to_string(), format!("hero_views_{}", date_key))
}

/// Lifetime and per-day counter keys for a confirmed hero click.
pub fn hero_click_keys(date_key: &str) -> (String, String) {
    ("hero_overall".to_string(), format!("hero_daily_{}", date_key))
}

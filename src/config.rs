/// Namespace every counter key lives under at the hit-counter service.
pub const COUNTER_NAMESPACE: &str = "bennettstellaaa_global";

/// Prefix for the site-wide counter keys (page views).
pub const COUNTER_KEY_PREFIX: &str = "site";

/// localStorage key holding the serialized event log.
pub const EVENT_LOG_KEY: &str = "linkpage_events";

/// Where the hero button goes when no explicit destination is configured.
pub const DEFAULT_HERO_HREF: &str = "https://dfans.co/stellaa";

/// Delay before moving focus into the overlay, so it renders first.
pub const OVERLAY_FOCUS_DELAY_MS: u32 = 80;

/// Delay before returning focus to the hero button after the overlay closes.
pub const HERO_FOCUS_DELAY_MS: u32 = 50;

/// How long the confirm button stays in its busy state before the overlay closes.
pub const OVERLAY_CLOSE_DELAY_MS: u32 = 250;

pub fn get_counter_api_url() -> &'static str {
    "https://api.countapi.xyz"
}

use crate::config;
use crate::tracking::analytics::{AnalyticsHook, Gtag};
use crate::tracking::counter::{CounterClient, CounterTransport, FetchTransport};
use crate::tracking::event_log::{EventKind, EventLog, LocalStore, RecordStore};
use crate::tracking::{keys, time};

/// Seam for opening the hero destination, so the navigate-before-telemetry
/// ordering can be exercised in tests.
pub trait UrlOpener {
    fn open_new_tab(&self, url: &str);
}

pub struct WindowOpener;

impl UrlOpener for WindowOpener {
    fn open_new_tab(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener");
        }
    }
}

/// Composition root for tracking: every tracked interaction goes to the
/// analytics hook, the remote counter and the local event log. All three
/// are best effort and none of them ever blocks the interaction itself.
pub struct Tracker<A, T, S> {
    analytics: A,
    counter: CounterClient<T>,
    log: EventLog<S>,
}

pub type AppTracker = Tracker<Gtag, FetchTransport, LocalStore>;

/// The tracker used by the running page.
pub fn default_tracker() -> AppTracker {
    Tracker::new(
        Gtag,
        CounterClient::new(config::COUNTER_NAMESPACE, FetchTransport),
        EventLog::new(LocalStore),
    )
}

impl<A, T, S> Tracker<A, T, S>
where
    A: AnalyticsHook,
    T: CounterTransport,
    S: RecordStore,
{
    pub fn new(analytics: A, counter: CounterClient<T>, log: EventLog<S>) -> Self {
        Self {
            analytics,
            counter,
            log,
        }
    }

    pub fn page_view(&self, path: &str) {
        let la_time = time::la_time_iso();
        self.analytics.emit("page_view", &[("la_time", la_time)]);
        let (lifetime, daily) = keys::pageview_keys(&time::date_key());
        self.counter.hit(&lifetime);
        self.counter.hit(&daily);
        self.log.append(EventKind::PageView, path);
    }

    pub fn link_click(&self, id: &str, href: &str) {
        let la_time = time::la_time_iso();
        self.analytics.emit(
            "link_click",
            &[
                ("link_id", id.to_string()),
                ("link_url", href.to_string()),
                ("la_time", la_time),
            ],
        );
        let (lifetime, daily) = keys::link_keys(id, &time::date_key());
        self.counter.hit(&lifetime);
        self.counter.hit(&daily);
        self.log.append(EventKind::LinkClick, id);
    }

    pub fn hero_view(&self) {
        let (lifetime, daily) = keys::hero_view_keys(&time::date_key());
        self.counter.hit(&lifetime);
        self.counter.hit(&daily);
        self.log.append(EventKind::HeroView, "hero");
        self.analytics
            .emit("hero_view", &[("la_time", time::la_time_iso())]);
    }

    pub fn hero_click(&self, href: &str) {
        let la_time = time::la_time_iso();
        self.analytics.emit(
            "hero_link_click",
            &[
                ("link_id", "hero".to_string()),
                ("link_url", href.to_string()),
                ("la_time", la_time),
            ],
        );
        let (lifetime, daily) = keys::hero_click_keys(&time::date_key());
        self.counter.hit(&lifetime);
        self.counter.hit(&daily);
        self.log.append(EventKind::HeroClick, href);
    }
}

/// Confirmed hero activation: the destination opens first, so that no
/// telemetry call can ever delay or block the navigation.
pub fn confirm_hero<O, A, T, S>(opener: &O, tracker: &Tracker<A, T, S>, href: &str)
where
    O: UrlOpener,
    A: AnalyticsHook,
    T: CounterTransport,
    S: RecordStore,
{
    opener.open_new_tab(href);
    tracker.hero_click(href);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::counter::TelemetryBreaker;
    use crate::tracking::event_log::StoreError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<String>>>;

    struct JournalingHook {
        journal: Journal,
    }

    impl AnalyticsHook for JournalingHook {
        fn emit(&self, name: &str, params: &[(&str, String)]) {
            let rendered: Vec<String> = params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            self.journal
                .borrow_mut()
                .push(format!("emit {} {}", name, rendered.join(",")));
        }
    }

    struct JournalingTransport {
        journal: Journal,
        fail: bool,
    }

    impl CounterTransport for JournalingTransport {
        fn submit_hit(&self, _namespace: &str, key: &str, breaker: TelemetryBreaker) {
            self.journal.borrow_mut().push(format!("hit {}", key));
            if self.fail {
                breaker.trip();
            }
        }
    }

    struct JournalingStore {
        journal: Journal,
        map: RefCell<HashMap<String, String>>,
    }

    impl RecordStore for JournalingStore {
        fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.map.borrow().get(key).cloned())
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.journal.borrow_mut().push("save".to_string());
            self.map.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct JournalingOpener {
        journal: Journal,
    }

    impl UrlOpener for JournalingOpener {
        fn open_new_tab(&self, url: &str) {
            self.journal.borrow_mut().push(format!("open {}", url));
        }
    }

    fn tracker(
        fail: bool,
    ) -> (
        Tracker<JournalingHook, JournalingTransport, JournalingStore>,
        Journal,
    ) {
        let journal: Journal = Rc::new(RefCell::new(Vec::new()));
        let t = Tracker::new(
            JournalingHook {
                journal: journal.clone(),
            },
            CounterClient::new(
                config::COUNTER_NAMESPACE,
                JournalingTransport {
                    journal: journal.clone(),
                    fail,
                },
            ),
            EventLog::new(JournalingStore {
                journal: journal.clone(),
                map: RefCell::new(HashMap::new()),
            }),
        );
        (t, journal)
    }

    #[test]
    fn link_click_emits_keys_event_and_log_entry() {
        let (tracker, journal) = tracker(false);
        tracker.link_click("instagram", "https://instagram.com/x");

        let date = time::date_key();
        let journal = journal.borrow();
        assert!(journal[0].starts_with("emit link_click link_id=instagram,link_url=https://instagram.com/x,la_time="));
        assert_eq!(journal[1], "hit link_instagram");
        assert_eq!(journal[2], format!("hit link_instagram_{}", date));
        assert_eq!(journal[3], "save");

        let records = tracker.log.read_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, EventKind::LinkClick);
        assert_eq!(records[0].id, "instagram");
    }

    #[test]
    fn page_view_hits_site_keys() {
        let (tracker, journal) = tracker(false);
        tracker.page_view("/");

        let date = time::date_key();
        let journal = journal.borrow();
        assert!(journal[0].starts_with("emit page_view la_time="));
        assert_eq!(journal[1], "hit site_pageviews");
        assert_eq!(journal[2], format!("hit site_pageviews_{}", date));
        assert_eq!(journal[3], "save");
    }

    #[test]
    fn hero_view_records_counters_log_and_event() {
        let (tracker, journal) = tracker(false);
        tracker.hero_view();

        let date = time::date_key();
        let journal = journal.borrow();
        assert_eq!(journal[0], "hit hero_views");
        assert_eq!(journal[1], format!("hit hero_views_{}", date));
        assert_eq!(journal[2], "save");
        assert!(journal[3].starts_with("emit hero_view la_time="));

        let records = tracker.log.read_all();
        assert_eq!(records[0].kind, EventKind::HeroView);
        assert_eq!(records[0].id, "hero");
    }

    #[test]
    fn confirmed_hero_opens_before_any_telemetry() {
        let (tracker, journal) = tracker(false);
        let opener = JournalingOpener {
            journal: journal.clone(),
        };

        confirm_hero(&opener, &tracker, config::DEFAULT_HERO_HREF);

        let date = time::date_key();
        let journal = journal.borrow();
        assert_eq!(journal[0], "open https://dfans.co/stellaa");
        assert!(journal[1].starts_with("emit hero_link_click link_id=hero,link_url=https://dfans.co/stellaa"));
        assert_eq!(journal[2], "hit hero_overall");
        assert_eq!(journal[3], format!("hit hero_daily_{}", date));
        assert_eq!(journal[4], "save");

        let records = tracker.log.read_all();
        assert_eq!(records[0].kind, EventKind::HeroClick);
        assert_eq!(records[0].id, "https://dfans.co/stellaa");
    }

    #[test]
    fn one_failed_hit_stops_all_later_network_attempts() {
        let (tracker, journal) = tracker(true);
        tracker.page_view("/");
        for _ in 0..5 {
            tracker.link_click("instagram", "https://instagram.com/x");
            tracker.hero_view();
        }

        let attempts = journal
            .borrow()
            .iter()
            .filter(|entry| entry.starts_with("hit "))
            .count();
        assert_eq!(attempts, 1);
    }
}

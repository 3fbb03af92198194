use std::cell::RefCell;
use std::rc::Rc;

use chrono::{SecondsFormat, Utc};
use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::config::Config;

// Surface label stamped on every event so the collector can tell website
// traffic apart from the desktop clients.
const SOURCE: &str = "marketing_site";

const OPT_OUT_KEY: &str = "analytics_opt_out";
const VISITOR_ID_KEY: &str = "visitor_id";

/// One analytics event: a name plus a JSON object of properties.
///
/// Construction stamps `source` and an ISO-8601 `timestamp` into the
/// properties unless the caller already provided them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureEvent {
    pub event: String,
    pub properties: Value,
}

impl CaptureEvent {
    pub fn new(event: &str, properties: Value) -> Self {
        let mut props = match properties {
            Value::Object(map) => map,
            // Properties must be a JSON object; anything else is dropped.
            _ => Map::new(),
        };
        props
            .entry("source")
            .or_insert_with(|| Value::String(SOURCE.to_string()));
        props.entry("timestamp").or_insert_with(|| {
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
        });

        Self {
            event: event.to_string(),
            properties: Value::Object(props),
        }
    }
}

/// Delivery boundary for captured events. The default sink posts to the
/// configured collector; tests swap in a recording sink.
pub trait CaptureSink {
    fn deliver(&self, event: CaptureEvent);
}

thread_local! {
    static SINK: RefCell<Rc<dyn CaptureSink>> = RefCell::new(Rc::new(HttpSink));
}

/// Replaces the active delivery sink. Events captured after this call go to
/// `sink`.
pub fn set_sink(sink: Rc<dyn CaptureSink>) {
    SINK.with(|current| *current.borrow_mut() = sink);
}

/// Records an event. Fire-and-forget: never blocks, never fails the caller.
/// Opted-out visitors produce no delivery at all.
pub fn capture(event: &str, properties: Value) {
    if is_opted_out() {
        debug!("analytics opt-out set, dropping event: {}", event);
        return;
    }

    let event = CaptureEvent::new(event, properties);
    SINK.with(|sink| {
        let sink = sink.borrow().clone();
        sink.deliver(event);
    });
}

/// Stops all future event delivery for this browser.
pub fn opt_out() {
    if let Err(e) = LocalStorage::set(OPT_OUT_KEY, true) {
        warn!("failed to persist analytics opt-out: {}", e);
    }
}

/// Re-enables event delivery for this browser.
pub fn opt_in() {
    LocalStorage::delete(OPT_OUT_KEY);
}

pub fn is_opted_out() -> bool {
    LocalStorage::get::<bool>(OPT_OUT_KEY).unwrap_or(false)
}

/// Stable anonymous id for this browser, created on first use.
pub fn visitor_id() -> String {
    if let Ok(id) = LocalStorage::get::<String>(VISITOR_ID_KEY) {
        return id;
    }

    let id = Uuid::new_v4().to_string();
    if let Err(e) = LocalStorage::set(VISITOR_ID_KEY, &id) {
        warn!("failed to persist visitor id: {}", e);
    }
    id
}

/// Default sink: one POST to the collector's capture endpoint per event.
/// Failures are logged and swallowed; rendering never depends on them.
pub struct HttpSink;

impl CaptureSink for HttpSink {
    fn deliver(&self, event: CaptureEvent) {
        let api_key = match Config::analytics_key() {
            Some(key) => key,
            None => {
                debug!("no analytics key configured, dropping event: {}", event.event);
                return;
            }
        };

        let endpoint = capture_endpoint(Config::analytics_host());
        let body = wire_body(api_key, &visitor_id(), &event).to_string();
        let name = event.event;

        spawn_local(async move {
            match post_event(&endpoint, body).await {
                Ok(()) => debug!("captured event: {}", name),
                Err(e) => warn!("failed to deliver {}: {}", name, e),
            }
        });
    }
}

async fn post_event(endpoint: &str, body: String) -> Result<(), String> {
    let response = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| format!("failed to build capture request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("capture request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("capture endpoint returned HTTP {}", response.status()));
    }

    Ok(())
}

fn capture_endpoint(host: &str) -> String {
    format!("{}/capture/", host.trim_end_matches('/'))
}

fn wire_body(api_key: &str, distinct_id: &str, event: &CaptureEvent) -> Value {
    json!({
        "api_key": api_key,
        "distinct_id": distinct_id,
        "event": event.event,
        "properties": event.properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_event_stamps_source_and_timestamp() {
        let event = CaptureEvent::new("website_visitor", json!({ "page": "home" }));

        assert_eq!(event.event, "website_visitor");
        assert_eq!(event.properties["page"], "home");
        assert_eq!(event.properties["source"], "marketing_site");

        let timestamp = event.properties["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_capture_event_keeps_caller_values() {
        let event = CaptureEvent::new(
            "website_visitor",
            json!({ "source": "electron_app", "timestamp": "2024-01-01T00:00:00.000Z" }),
        );

        assert_eq!(event.properties["source"], "electron_app");
        assert_eq!(event.properties["timestamp"], "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_capture_event_rejects_non_object_properties() {
        let event = CaptureEvent::new("website_visitor", json!("not an object"));

        assert!(event.properties.is_object());
        assert_eq!(event.properties["source"], "marketing_site");
        assert!(event.properties.get("page").is_none());
    }

    #[test]
    fn test_wire_body_shape() {
        let event = CaptureEvent::new("download_intent", json!({ "button_location": "hero" }));
        let body = wire_body("phc_test_key", "visitor-123", &event);

        assert_eq!(body["api_key"], "phc_test_key");
        assert_eq!(body["distinct_id"], "visitor-123");
        assert_eq!(body["event"], "download_intent");
        assert_eq!(body["properties"]["button_location"], "hero");
    }

    #[test]
    fn test_capture_endpoint_joins_host() {
        assert_eq!(
            capture_endpoint("https://app.posthog.com"),
            "https://app.posthog.com/capture/"
        );
        assert_eq!(
            capture_endpoint("https://collector.example.com/"),
            "https://collector.example.com/capture/"
        );
        // Empty host keeps the endpoint relative for same-origin proxying.
        assert_eq!(capture_endpoint(""), "/capture/");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    struct CountingSink {
        delivered: Rc<Cell<usize>>,
    }

    impl CaptureSink for CountingSink {
        fn deliver(&self, _event: CaptureEvent) {
            self.delivered.set(self.delivered.get() + 1);
        }
    }

    #[wasm_bindgen_test]
    fn test_opt_out_round_trip() {
        opt_in();
        assert!(!is_opted_out());

        opt_out();
        assert!(is_opted_out());

        opt_in();
        assert!(!is_opted_out());
    }

    #[wasm_bindgen_test]
    fn test_opted_out_capture_delivers_nothing() {
        let delivered = Rc::new(Cell::new(0));
        set_sink(Rc::new(CountingSink {
            delivered: delivered.clone(),
        }));

        opt_out();
        capture("website_visitor", json!({ "page": "home" }));
        assert_eq!(delivered.get(), 0);

        opt_in();
        capture("website_visitor", json!({ "page": "home" }));
        assert_eq!(delivered.get(), 1);

        set_sink(Rc::new(HttpSink));
    }

    #[wasm_bindgen_test]
    fn test_visitor_id_is_stable() {
        let first = visitor_id();
        let second = visitor_id();

        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}

use serde_json::{json, Map, Value};
use web_sys::window;

use crate::analytics::capture::capture;

/// Records a page visit as a `website_visitor` event.
pub fn track_page_visit(page: &str) {
    track_page_visit_with(page, json!({}));
}

/// Page visit with extra properties, e.g. a campaign tag on a landing page.
pub fn track_page_visit_with(page: &str, additional: Value) {
    capture("website_visitor", Value::Object(visit_props(page, additional)));
}

/// Records a blog article view.
pub fn track_blog_view(slug: &str, title: &str) {
    capture("blog_post_view", Value::Object(blog_props(slug, title)));
}

/// Records a click on a download button before the platform picker opens.
pub fn track_download_intent(location: &str) {
    let mut props = intent_props(location);
    page_context(&mut props);
    page_title(&mut props);
    capture("download_intent", Value::Object(props));
}

/// Records the start of an installer download.
pub fn track_download_start(download_type: &str) {
    let mut props = start_props(download_type);
    page_context(&mut props);
    capture("download_start", Value::Object(props));
}

// Base builders stay free of browser lookups so the event shapes hold on any
// target; context fields are appended at the call edge.

// Caller extras land last so they can override the base fields.
fn visit_props(page: &str, additional: Value) -> Map<String, Value> {
    let mut props = Map::new();
    props.insert("page".into(), page.into());
    if let Value::Object(extra) = additional {
        for (key, value) in extra {
            props.insert(key, value);
        }
    }
    props
}

fn blog_props(slug: &str, title: &str) -> Map<String, Value> {
    let mut props = Map::new();
    props.insert("blog_slug".into(), slug.into());
    props.insert("blog_title".into(), title.into());
    props
}

fn intent_props(location: &str) -> Map<String, Value> {
    let mut props = Map::new();
    props.insert("button_location".into(), location.into());
    props
}

fn start_props(download_type: &str) -> Map<String, Value> {
    let mut props = Map::new();
    props.insert("download_type".into(), download_type.into());
    props
}

// Browsing context for the funnel reports. Absent values are skipped rather
// than sent as nulls.
fn page_context(props: &mut Map<String, Value>) {
    if let Some(window) = window() {
        if let Ok(agent) = window.navigator().user_agent() {
            props.insert("user_agent".into(), agent.into());
        }
        if let Ok(href) = window.location().href() {
            props.insert("page_url".into(), href.into());
        }
    }
}

fn page_title(props: &mut Map<String, Value>) {
    if let Some(document) = window().and_then(|w| w.document()) {
        props.insert("page_title".into(), document.title().into());
    }
}

use yew::prelude::*;

use crate::analytics::{track_blog_view, track_page_visit};

/// Deduplicates visit events across re-renders.
///
/// A component instance fires at most one visit per key: renders after the
/// first admit nothing, while a new instance (remount) starts fresh and
/// fires again. A changed key on a live instance also fires, so a route
/// swap that reuses the component still counts as a new visit.
#[derive(Debug, Default)]
pub struct VisitGuard {
    last_fired: Option<String>,
}

impl VisitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly when `key` has not been admitted by this guard yet.
    pub fn first_visit(&mut self, key: &str) -> bool {
        if self.last_fired.as_deref() == Some(key) {
            return false;
        }
        self.last_fired = Some(key.to_string());
        true
    }

    pub fn has_fired(&self) -> bool {
        self.last_fired.is_some()
    }
}

/// Reports a `website_visitor` event once per mount of the calling
/// component. Tracking failures stay inside the delivery layer, so the
/// caller renders normally either way.
#[hook]
pub fn use_page_tracking(page: &str) {
    let guard = use_mut_ref(VisitGuard::new);

    use_effect_with(page.to_string(), move |page| {
        if guard.borrow_mut().first_visit(page) {
            track_page_visit(page);
        }
        || ()
    });
}

/// Reports a `blog_post_view` event once per mount. Keyed by slug, so a
/// title correction on a live page does not double count the view.
#[hook]
pub fn use_blog_tracking(slug: &str, title: &str) {
    let guard = use_mut_ref(VisitGuard::new);

    use_effect_with(
        (slug.to_string(), title.to_string()),
        move |(slug, title)| {
            if guard.borrow_mut().first_visit(slug) {
                track_blog_view(slug, title);
            }
            || ()
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_admits_first_visit_only() {
        let mut guard = VisitGuard::new();

        assert!(!guard.has_fired());
        assert!(guard.first_visit("home"));
        assert!(guard.has_fired());

        assert!(!guard.first_visit("home"));
        assert!(!guard.first_visit("home"));
    }

    #[test]
    fn test_guard_admits_changed_key() {
        let mut guard = VisitGuard::new();

        assert!(guard.first_visit("home"));
        assert!(guard.first_visit("pricing"));
        assert!(!guard.first_visit("pricing"));
    }

    #[test]
    fn test_fresh_guard_fires_again() {
        let mut first = VisitGuard::new();
        assert!(first.first_visit("home"));

        let mut second = VisitGuard::new();
        assert!(second.first_visit("home"));
    }
}

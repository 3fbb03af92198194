pub struct Config;

impl Config {
    pub fn analytics_host() -> &'static str {
        // Overridable at build time for self-hosted collectors. An empty
        // value makes the capture endpoint relative, so Trunk in development
        // and nginx in production can proxy it to a same-origin collector.
        option_env!("ANALYTICS_HOST").unwrap_or("https://app.posthog.com")
    }

    /// Project API key for the capture endpoint. Builds without a key keep
    /// the site fully functional; events are dropped at the delivery layer.
    pub fn analytics_key() -> Option<&'static str> {
        option_env!("ANALYTICS_KEY")
    }
}

//! Browser timer helpers for transient messages and polling.

/// How long inline action messages stay visible.
pub const MESSAGE_TTL_MS: u32 = 3_000;

/// Dashboard re-fetch interval.
pub const POLL_INTERVAL_SECS: u64 = 10;

/// Run `f` once after `ms` milliseconds. No-op outside the browser.
pub fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(ms, f).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, f);
    }
}

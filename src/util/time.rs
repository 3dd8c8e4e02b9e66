//! Wall-clock access with an off-browser fallback.
//!
//! Client-side (hydrate): `js_sys::Date`. Off-browser: `SystemTime`, so
//! session-window logic runs under native tests with real timestamps.

/// Current time as milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| {
                #[allow(clippy::cast_precision_loss)]
                {
                    d.as_millis() as f64
                }
            })
    }
}

/// Current time as an ISO 8601 string, for request timestamps.
#[must_use]
pub fn iso_timestamp() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

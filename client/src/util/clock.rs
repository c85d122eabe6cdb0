//! Wall-clock helpers for chat timestamps.
//!
//! Browser builds read `Date`; native builds (SSR, tests) use `SystemTime`
//! and render in UTC.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0)
    }
}

/// `HH:MM` in the viewer's local time zone.
pub fn local_clock_label(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        // `getTimezoneOffset` is positive west of UTC.
        #[allow(clippy::cast_possible_truncation)]
        let offset = -(date.get_timezone_offset() as i32);
        format_clock(timestamp_ms, offset)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        format_clock(timestamp_ms, 0)
    }
}

/// `HH:MM` for an epoch timestamp shifted by `utc_offset_minutes`.
pub fn format_clock(timestamp_ms: f64, utc_offset_minutes: i32) -> String {
    const MINUTES_PER_DAY: i64 = 24 * 60;
    #[allow(clippy::cast_possible_truncation)]
    let minutes = (timestamp_ms / 60_000.0).floor() as i64 + i64::from(utc_offset_minutes);
    let of_day = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", of_day / 60, of_day % 60)
}

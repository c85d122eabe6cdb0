use super::*;

#[test]
fn format_clock_pads_hours_and_minutes() {
    // 2024-01-01T01:05:00Z
    assert_eq!(format_clock(1_704_071_100_000.0, 0), "01:05");
}

#[test]
fn format_clock_applies_positive_offset() {
    // 2024-01-01T20:30:00Z in UTC+8 is 04:30 the next day.
    assert_eq!(format_clock(1_704_141_000_000.0, 8 * 60), "04:30");
}

#[test]
fn format_clock_wraps_negative_offset() {
    // 2024-01-01T00:15:00Z in UTC-5 is 19:15 the previous day.
    assert_eq!(format_clock(1_704_068_100_000.0, -5 * 60), "19:15");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000.0);
}

use super::*;

#[test]
fn grouped_inserts_thousands_separators() {
    assert_eq!(grouped(125_000.0), "125,000");
    assert_eq!(grouped(8_500.0), "8,500");
    assert_eq!(grouped(999.0), "999");
    assert_eq!(grouped(1_000.0), "1,000");
    assert_eq!(grouped(1_234_567.0), "1,234,567");
}

#[test]
fn grouped_keeps_up_to_three_fraction_digits() {
    assert_eq!(grouped(1_234.5), "1,234.5");
    assert_eq!(grouped(1_234.5678), "1,234.568");
    assert_eq!(grouped(0.25), "0.25");
}

#[test]
fn grouped_handles_negative_and_zero() {
    assert_eq!(grouped(-12_345.0), "-12,345");
    assert_eq!(grouped(0.0), "0");
}

#[test]
fn grouped_count_formats_integers() {
    assert_eq!(grouped_count(450), "450");
    assert_eq!(grouped_count(12_000), "12,000");
}

#[test]
fn fixed2_always_has_two_decimals() {
    assert_eq!(fixed2(110_000.0), "110000.00");
    assert_eq!(fixed2(7_000.456), "7000.46");
}

#[test]
fn percent_uses_shortest_display() {
    assert_eq!(percent(88.0), "88%");
    assert_eq!(percent(5.6), "5.6%");
    assert_eq!(percent(0.0), "0%");
}

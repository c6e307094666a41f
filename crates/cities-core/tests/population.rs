use cities_core::{abbreviate_population, format_population};

#[test]
fn small_numbers_are_printed_verbatim() {
    assert_eq!(abbreviate_population(0), "0");
    assert_eq!(abbreviate_population(7), "7");
    assert_eq!(abbreviate_population(999), "999");
}

#[test]
fn thousands_round_to_whole_k() {
    assert_eq!(abbreviate_population(1_000), "1K");
    assert_eq!(abbreviate_population(15_000), "15K");
    assert_eq!(abbreviate_population(15_400), "15K");
    assert_eq!(abbreviate_population(15_600), "16K");
    // Rounds up across the unit boundary but stays in K.
    assert_eq!(abbreviate_population(999_999), "1000K");
}

#[test]
fn millions_keep_one_decimal_unless_zero() {
    assert_eq!(abbreviate_population(1_000_000), "1M");
    assert_eq!(abbreviate_population(2_500_000), "2.5M");
    assert_eq!(abbreviate_population(10_000_000), "10M");
    assert_eq!(abbreviate_population(22_315_474), "22.3M");
    assert_eq!(abbreviate_population(1_040_000), "1M");
}

#[test]
fn raw_column_parsing() {
    assert_eq!(format_population("15000"), "15K");
    assert_eq!(format_population(" 2500000 "), "2.5M");
    assert_eq!(format_population(""), "0");
    assert_eq!(format_population("n/a"), "0");
    assert_eq!(format_population("12.5"), "0");
}

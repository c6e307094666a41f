use cities_core::{parse_row, SkipReason};
use csv::StringRecord;

/// A GeoNames row with the columns the parser reads filled in.
fn geonames_row(name: &str, ascii: &str, lat: &str, lon: &str, pop: &str) -> StringRecord {
    let mut fields = vec![""; 19];
    fields[0] = "5419384";
    fields[1] = name;
    fields[2] = ascii;
    fields[4] = lat;
    fields[5] = lon;
    fields[6] = "P";
    fields[7] = "PPLA";
    fields[8] = "US";
    fields[10] = "CO";
    fields[14] = pop;
    StringRecord::from(fields)
}

#[test]
fn parses_the_used_columns() {
    let row = geonames_row("Denver", "Denver", "39.739154", "-104.9847", "715522");
    let record = parse_row(&row).expect("valid row");
    assert_eq!(record.name, "Denver");
    assert_eq!(record.latitude, 39.739154);
    assert_eq!(record.longitude, -104.9847);
    assert_eq!(record.country_code, "US");
    assert_eq!(record.region_code, "CO");
    assert_eq!(record.population, "715522");
}

#[test]
fn ascii_name_is_preferred() {
    let row = geonames_row("Zürich", "Zurich", "47.36667", "8.55", "341730");
    assert_eq!(parse_row(&row).unwrap().name, "Zurich");
}

#[test]
fn empty_ascii_name_falls_back_to_native() {
    let row = geonames_row("Łódź", "", "51.75", "19.46667", "768755");
    assert_eq!(parse_row(&row).unwrap().name, "Łódź");
}

#[test]
fn short_rows_are_skipped() {
    let row = StringRecord::from(vec!["1", "A", "A", "", "1.0", "2.0", "P", "PPL", "US", ""]);
    assert_eq!(
        parse_row(&row),
        Err(SkipReason::TooFewFields { found: 10 })
    );
}

#[test]
fn bad_coordinates_are_skipped() {
    let row = geonames_row("X", "X", "north", "8.55", "1");
    assert_eq!(
        parse_row(&row),
        Err(SkipReason::InvalidLatitude("north".to_string()))
    );

    let row = geonames_row("X", "X", "47.0", "", "1");
    assert_eq!(
        parse_row(&row),
        Err(SkipReason::InvalidLongitude(String::new()))
    );
}

#[test]
fn population_is_kept_raw() {
    let row = geonames_row("X", "X", "1", "2", "not-a-number");
    assert_eq!(parse_row(&row).unwrap().population, "not-a-number");
}

#[test]
fn non_finite_coordinates_are_skipped() {
    let row = geonames_row("X", "X", "nan", "8.55", "1");
    assert_eq!(
        parse_row(&row),
        Err(SkipReason::InvalidLatitude("nan".to_string()))
    );

    let row = geonames_row("X", "X", "47.0", "inf", "1");
    assert_eq!(
        parse_row(&row),
        Err(SkipReason::InvalidLongitude("inf".to_string()))
    );
}

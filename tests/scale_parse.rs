//! 눈금 문자열 해석과 기호 테이블 검증.
use temperature_toolbox::scale::{parse_scale, Scale, ALL_SCALES};

#[test]
fn parses_short_codes_and_names() {
    assert_eq!(parse_scale("C").unwrap(), Scale::Celsius);
    assert_eq!(parse_scale("celsius").unwrap(), Scale::Celsius);
    assert_eq!(parse_scale("°C").unwrap(), Scale::Celsius);
    assert_eq!(parse_scale("f").unwrap(), Scale::Fahrenheit);
    assert_eq!(parse_scale("Kelvin").unwrap(), Scale::Kelvin);
    assert_eq!(parse_scale("R").unwrap(), Scale::Rankine);
    assert_eq!(parse_scale("Ré").unwrap(), Scale::Reaumur);
    assert_eq!(parse_scale("reaumur").unwrap(), Scale::Reaumur);
    assert_eq!(parse_scale("réaumur").unwrap(), Scale::Reaumur);
    assert_eq!(parse_scale("De").unwrap(), Scale::Delisle);
    assert_eq!(parse_scale("delisle").unwrap(), Scale::Delisle);
}

#[test]
fn parse_ignores_surrounding_whitespace() {
    assert_eq!(parse_scale("  k \n").unwrap(), Scale::Kelvin);
}

#[test]
fn unknown_scale_is_rejected() {
    let err = parse_scale("x").unwrap_err();
    assert_eq!(err.0, "x");
    assert!(parse_scale("").is_err());
}

#[test]
fn symbol_table_matches_scales() {
    let expected = ["°C", "°F", "K", "°R", "°Ré", "°De"];
    for (scale, symbol) in ALL_SCALES.iter().zip(expected) {
        assert_eq!(scale.symbol(), symbol);
    }
}

#[test]
fn every_symbol_round_trips_through_parse() {
    for s in ALL_SCALES {
        assert_eq!(parse_scale(s.symbol()).unwrap(), s, "{s:?}");
        assert_eq!(parse_scale(s.name()).unwrap(), s, "{s:?}");
    }
}

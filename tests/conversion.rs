//! 변환 엔진 동작 검증: 항등/왕복/고정점/켈빈 하한/입력 해석.
use temperature_toolbox::conversion::{self, ConversionError, ConversionRequest};
use temperature_toolbox::scale::{self, Scale, ALL_SCALES};

const TOLERANCE: f64 = 1e-9;

fn convert_value(value: f64, from: Scale, to: Scale) -> f64 {
    conversion::convert(ConversionRequest {
        input_value: value,
        from,
        to,
    })
    .expect("conversion")
    .output_value
}

#[test]
fn identity_returns_input_unchanged() {
    // 같은 눈금은 피벗을 거치지 않으므로 비트 단위로 동일해야 한다
    for s in ALL_SCALES {
        for v in [0.0, 0.1, 36.6, 451.0] {
            assert_eq!(convert_value(v, s, s), v, "{s:?} identity for {v}");
        }
    }
    assert_eq!(convert_value(-40.0, Scale::Delisle, Scale::Delisle), -40.0);
}

#[test]
fn round_trip_all_scale_pairs() {
    // 섭씨 기준 샘플을 각 눈금으로 투영한 뒤 A→B→A 왕복을 확인한다
    for a in ALL_SCALES {
        for b in ALL_SCALES {
            for c in [-40.0, 0.0, 21.5, 100.0] {
                let x = scale::from_celsius(c, a);
                let there = convert_value(x, a, b);
                let back = convert_value(there, b, a);
                assert!(
                    (back - x).abs() < TOLERANCE,
                    "{a:?}→{b:?}→{a:?}: {x} became {back}"
                );
            }
        }
    }
}

#[test]
fn pivot_round_trip_per_scale() {
    for s in ALL_SCALES {
        for x in [-10.0, 0.0, 98.6, 300.0] {
            let back = scale::from_celsius(scale::to_celsius(x, s), s);
            assert!((back - x).abs() < TOLERANCE, "{s:?} pivot round trip {x}");
        }
    }
}

#[test]
fn known_fixed_points() {
    assert!((convert_value(0.0, Scale::Celsius, Scale::Fahrenheit) - 32.0).abs() < TOLERANCE);
    assert!((convert_value(100.0, Scale::Celsius, Scale::Fahrenheit) - 212.0).abs() < TOLERANCE);
    assert!((convert_value(0.0, Scale::Celsius, Scale::Kelvin) - 273.15).abs() < TOLERANCE);
    assert!((convert_value(0.0, Scale::Celsius, Scale::Rankine) - 491.67).abs() < TOLERANCE);
    assert!(convert_value(0.0, Scale::Celsius, Scale::Reaumur).abs() < TOLERANCE);
    assert!((convert_value(0.0, Scale::Celsius, Scale::Delisle) - 150.0).abs() < TOLERANCE);
    assert!((convert_value(0.0, Scale::Delisle, Scale::Celsius) - 100.0).abs() < TOLERANCE);
    // 역방향 대표값
    assert!((convert_value(98.6, Scale::Fahrenheit, Scale::Celsius) - 37.0).abs() < TOLERANCE);
    assert!((convert_value(0.0, Scale::Kelvin, Scale::Celsius) + 273.15).abs() < TOLERANCE);
}

#[test]
fn kelvin_below_zero_is_rejected() {
    let err = conversion::convert(ConversionRequest {
        input_value: -1.0,
        from: Scale::Kelvin,
        to: Scale::Celsius,
    })
    .unwrap_err();
    assert_eq!(err, ConversionError::BelowAbsoluteZero);
}

#[test]
fn kelvin_check_precedes_identity_short_circuit() {
    // 원본 동작: 켈빈 음수는 같은 눈금 변환이라도 거부한다
    let err = conversion::convert(ConversionRequest {
        input_value: -0.5,
        from: Scale::Kelvin,
        to: Scale::Kelvin,
    })
    .unwrap_err();
    assert_eq!(err, ConversionError::BelowAbsoluteZero);
}

#[test]
fn rankine_lower_bound_is_not_checked() {
    // 랭킨 절대영도 검사는 원본 정책대로 수행하지 않는다
    let c = convert_value(-10.0, Scale::Rankine, Scale::Celsius);
    assert!(c < -273.15);
}

#[test]
fn kelvin_zero_is_allowed() {
    let c = convert_value(0.0, Scale::Kelvin, Scale::Celsius);
    assert!((c + 273.15).abs() < TOLERANCE);
}

#[test]
fn empty_or_blank_text_is_rejected() {
    for text in ["", "   ", "\t\n"] {
        let err = conversion::convert_text(text, Scale::Celsius, Scale::Kelvin).unwrap_err();
        assert_eq!(err, ConversionError::EmptyInput, "input {text:?}");
    }
}

#[test]
fn non_numeric_text_is_rejected() {
    for text in ["abc", "12,5", "1.2.3", "NaN", "inf", "-inf"] {
        let err = conversion::convert_text(text, Scale::Celsius, Scale::Kelvin).unwrap_err();
        assert_eq!(err, ConversionError::InvalidNumber, "input {text:?}");
    }
}

#[test]
fn text_with_surrounding_whitespace_is_accepted() {
    let result = conversion::convert_text("  100 \n", Scale::Celsius, Scale::Fahrenheit)
        .expect("trimmed input");
    assert!((result.output_value - 212.0).abs() < TOLERANCE);
}

#[test]
fn non_finite_request_value_is_rejected() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = conversion::convert(ConversionRequest {
            input_value: v,
            from: Scale::Celsius,
            to: Scale::Celsius,
        })
        .unwrap_err();
        assert_eq!(err, ConversionError::InvalidNumber);
    }
}

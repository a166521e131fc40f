use serde::{Deserialize, Serialize};

/// 지원하는 온도 눈금을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
    Reaumur,
    Delisle,
}

/// 전체 눈금 목록. 메뉴 표시 순서를 겸한다.
pub const ALL_SCALES: [Scale; 6] = [
    Scale::Celsius,
    Scale::Fahrenheit,
    Scale::Kelvin,
    Scale::Rankine,
    Scale::Reaumur,
    Scale::Delisle,
];

impl Scale {
    /// 표시용 기호를 반환한다.
    pub fn symbol(&self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
            Scale::Rankine => "°R",
            Scale::Reaumur => "°Ré",
            Scale::Delisle => "°De",
        }
    }

    /// 눈금 명칭을 반환한다.
    pub fn name(&self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
            Scale::Kelvin => "Kelvin",
            Scale::Rankine => "Rankine",
            Scale::Reaumur => "Réaumur",
            Scale::Delisle => "Delisle",
        }
    }
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, scale: Scale) -> f64 {
    match scale {
        Scale::Celsius => value,
        Scale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        Scale::Kelvin => value - 273.15,
        Scale::Rankine => (value - 491.67) * 5.0 / 9.0,
        Scale::Reaumur => value * 5.0 / 4.0,
        Scale::Delisle => 100.0 - value * 2.0 / 3.0,
    }
}

/// 섭씨 값을 원하는 눈금으로 변환한다.
pub fn from_celsius(celsius: f64, scale: Scale) -> f64 {
    match scale {
        Scale::Celsius => celsius,
        Scale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        Scale::Kelvin => celsius + 273.15,
        Scale::Rankine => (celsius + 273.15) * 9.0 / 5.0,
        Scale::Reaumur => celsius * 4.0 / 5.0,
        Scale::Delisle => (100.0 - celsius) * 3.0 / 2.0,
    }
}

/// 온도를 서로 다른 눈금으로 변환한다. 섭씨를 피벗으로 사용한다.
pub fn convert_scale(value: f64, from: Scale, to: Scale) -> f64 {
    let c = to_celsius(value, from);
    from_celsius(c, to)
}

/// 알 수 없는 눈금 문자열 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScaleError(pub String);

impl std::fmt::Display for ParseScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "알 수 없는 눈금: {}", self.0)
    }
}

impl std::error::Error for ParseScaleError {}

/// 문자열로 전달된 눈금명을 enum으로 변환한다.
///
/// 눈금 문자열 예시는 `C`, `°F`, `kelvin`, `Ré`, `De` 등을 사용할 수 있다.
pub fn parse_scale(s: &str) -> Result<Scale, ParseScaleError> {
    match s.trim().to_lowercase().as_str() {
        "c" | "celsius" | "°c" => Ok(Scale::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(Scale::Fahrenheit),
        "k" | "kelvin" => Ok(Scale::Kelvin),
        "r" | "rankine" | "°r" => Ok(Scale::Rankine),
        "re" | "ré" | "reaumur" | "réaumur" | "°re" | "°ré" => Ok(Scale::Reaumur),
        "de" | "delisle" | "°de" => Ok(Scale::Delisle),
        _ => Err(ParseScaleError(s.trim().to_string())),
    }
}

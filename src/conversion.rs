use crate::scale::{self, Scale};

/// 온도 변환 시 발생 가능한 오류.
///
/// 모두 사용자가 수정 가능한 입력 오류이며 프로세스에 치명적이지 않다.
/// 사용자에게 보여줄 문장은 i18n 키로 처리하고, 여기서는 종류만 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// 입력이 비어 있거나 공백뿐임
    EmptyInput,
    /// 유한한 실수로 해석할 수 없는 입력
    InvalidNumber,
    /// 켈빈 절대영도 아래의 값
    BelowAbsoluteZero,
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::EmptyInput => write!(f, "값이 입력되지 않았습니다"),
            ConversionError::InvalidNumber => write!(f, "유효한 숫자가 아닙니다"),
            ConversionError::BelowAbsoluteZero => write!(f, "켈빈은 음수가 될 수 없습니다"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 한 번의 변환 요청을 표현한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub input_value: f64,
    pub from: Scale,
    pub to: Scale,
}

impl ConversionRequest {
    /// 사용자 입력 문자열과 눈금 선택으로 요청을 만든다.
    pub fn from_text(text: &str, from: Scale, to: Scale) -> Result<Self, ConversionError> {
        Ok(Self {
            input_value: parse_value(text)?,
            from,
            to,
        })
    }
}

/// 변환 결과를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub input_value: f64,
    pub from: Scale,
    pub output_value: f64,
    pub to: Scale,
}

impl ConversionResult {
    /// `0 °C = 32 °F` 형태의 표시 문자열을 만든다.
    pub fn display_line(&self) -> String {
        format!(
            "{} {} = {} {}",
            format_value(self.input_value),
            self.from.symbol(),
            format_value(self.output_value),
            self.to.symbol()
        )
    }
}

/// 사용자 입력 문자열을 f64로 해석한다. NaN/무한대는 거부한다.
pub fn parse_value(text: &str) -> Result<f64, ConversionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ConversionError::InvalidNumber)?;
    if !value.is_finite() {
        return Err(ConversionError::InvalidNumber);
    }
    Ok(value)
}

/// 변환을 수행한다.
///
/// 켈빈 음수 검증은 같은 눈금 변환보다 먼저 수행한다. 랭킨에도
/// 절대영도(0 °R)가 있지만 원본 정책에 맞춰 켈빈만 검사한다.
pub fn convert(request: ConversionRequest) -> Result<ConversionResult, ConversionError> {
    let ConversionRequest {
        input_value,
        from,
        to,
    } = request;
    if !input_value.is_finite() {
        return Err(ConversionError::InvalidNumber);
    }
    if from == Scale::Kelvin && input_value < 0.0 {
        return Err(ConversionError::BelowAbsoluteZero);
    }
    // 같은 눈금이면 피벗 왕복에 의한 부동소수점 오차를 피한다
    let output_value = if from == to {
        input_value
    } else {
        scale::convert_scale(input_value, from, to)
    };
    Ok(ConversionResult {
        input_value,
        from,
        output_value,
        to,
    })
}

/// 문자열 입력을 받아 해석과 변환까지 한 번에 수행한다.
pub fn convert_text(
    text: &str,
    from: Scale,
    to: Scale,
) -> Result<ConversionResult, ConversionError> {
    convert(ConversionRequest::from_text(text, from, to)?)
}

/// 소수점 둘째 자리까지 반올림하고 의미 없는 0을 제거해 표시한다.
///
/// 예: `100.00` → `100`, `98.60` → `98.6`
pub fn format_value(value: f64) -> String {
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

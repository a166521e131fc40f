use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_SWAP: &str = "main_menu.swap";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CONVERT_HEADING: &str = "convert.heading";
    pub const CONVERT_SCALE_OPTIONS: &str = "convert.scale_options";
    pub const CONVERT_NOTE_KELVIN: &str = "convert.note_kelvin";
    pub const CONVERT_PROMPT_VALUE: &str = "convert.prompt_value";
    pub const CONVERT_PROMPT_FROM: &str = "convert.prompt_from";
    pub const CONVERT_PROMPT_TO: &str = "convert.prompt_to";
    pub const CONVERT_RESULT: &str = "convert.result";

    pub const SWAP_DONE: &str = "swap.done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_DEFAULTS: &str = "settings.current_defaults";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_FROM: &str = "settings.prompt_from";
    pub const SETTINGS_PROMPT_TO: &str = "settings.prompt_to";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_LANGUAGE_NOTE: &str = "settings.language_note";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_EMPTY_INPUT: &str = "error.empty_input";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_BELOW_ABSOLUTE_ZERO: &str = "error.below_absolute_zero";
    pub const ERROR_UNKNOWN_SCALE: &str = "error.unknown_scale";

    pub const HELP_CONVERT: &str = "help.convert";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Temperature Toolbox ===",
        MAIN_MENU_CONVERT => "1) 온도 변환",
        MAIN_MENU_SWAP => "2) 기본 눈금 교환",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CONVERT_HEADING => "\n-- 온도 변환 --",
        CONVERT_SCALE_OPTIONS => {
            "1) Celsius(°C)  2) Fahrenheit(°F)  3) Kelvin(K)  4) Rankine(°R)  5) Réaumur(°Ré)  6) Delisle(°De)"
        }
        CONVERT_NOTE_KELVIN => "참고: 켈빈은 음수를 입력할 수 없습니다.",
        CONVERT_PROMPT_VALUE => "값 입력: ",
        CONVERT_PROMPT_FROM => "입력 눈금(번호 또는 C/F/K/R/Ré/De, 엔터=기본값): ",
        CONVERT_PROMPT_TO => "변환 눈금(번호 또는 C/F/K/R/Ré/De, 엔터=기본값): ",
        CONVERT_RESULT => "변환 결과:",
        SWAP_DONE => "기본 눈금을 교환했습니다:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_DEFAULTS => "현재 기본 눈금:",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_FROM => "기본 입력 눈금(엔터=유지): ",
        SETTINGS_PROMPT_TO => "기본 변환 눈금(엔터=유지): ",
        SETTINGS_PROMPT_LANGUAGE => "언어 (auto/ko/en, 엔터=유지): ",
        SETTINGS_LANGUAGE_NOTE => "언어 변경은 다음 실행부터 적용됩니다.",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        ERROR_EMPTY_INPUT => "값을 입력하세요.",
        ERROR_INVALID_NUMBER => "유효한 숫자를 입력하세요.",
        ERROR_BELOW_ABSOLUTE_ZERO => "켈빈은 음수가 될 수 없습니다.",
        ERROR_UNKNOWN_SCALE => "알 수 없는 눈금입니다. 다시 선택하세요.",
        HELP_CONVERT => "도움말: 값 → 입력/변환 눈금 순으로 입력 (예: C/F/K/R/Ré/De). 결과는 소수점 둘째 자리까지 표시됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Temperature Toolbox ===",
        MAIN_MENU_CONVERT => "1) Convert Temperature",
        MAIN_MENU_SWAP => "2) Swap Default Scales",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CONVERT_HEADING => "\n-- Temperature Conversion --",
        CONVERT_SCALE_OPTIONS => {
            "1) Celsius(°C)  2) Fahrenheit(°F)  3) Kelvin(K)  4) Rankine(°R)  5) Réaumur(°Ré)  6) Delisle(°De)"
        }
        CONVERT_NOTE_KELVIN => "Note: Kelvin cannot be negative.",
        CONVERT_PROMPT_VALUE => "Value: ",
        CONVERT_PROMPT_FROM => "From scale (number or C/F/K/R/Ré/De, enter=default): ",
        CONVERT_PROMPT_TO => "To scale (number or C/F/K/R/Ré/De, enter=default): ",
        CONVERT_RESULT => "Result:",
        SWAP_DONE => "Default scales swapped:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_DEFAULTS => "Current default scales:",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_FROM => "Default from scale (enter to keep): ",
        SETTINGS_PROMPT_TO => "Default to scale (enter to keep): ",
        SETTINGS_PROMPT_LANGUAGE => "Language (auto/ko/en, enter to keep): ",
        SETTINGS_LANGUAGE_NOTE => "Language change takes effect on next run.",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        ERROR_EMPTY_INPUT => "Please enter a value.",
        ERROR_INVALID_NUMBER => "Please enter a valid number.",
        ERROR_BELOW_ABSOLUTE_ZERO => "Kelvin cannot be negative.",
        ERROR_UNKNOWN_SCALE => "Unknown scale. Please try again.",
        HELP_CONVERT => "Help: enter value → from/to scales (C/F/K/R/Ré/De). Results show up to 2 decimal places.",
        _ => return None,
    })
}

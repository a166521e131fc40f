//! 설정 직렬화 검증: TOML 왕복에서 눈금/언어 필드가 보존되어야 한다.
use temperature_toolbox::config::Config;
use temperature_toolbox::scale::Scale;

#[test]
fn config_round_trips_through_toml() {
    let cfg = Config {
        language: "ko".to_string(),
        default_from: Scale::Reaumur,
        default_to: Scale::Delisle,
    };
    let serialized = toml::to_string_pretty(&cfg).expect("serialize");
    let restored: Config = toml::from_str(&serialized).expect("deserialize");
    assert_eq!(restored.language, "ko");
    assert_eq!(restored.default_from, Scale::Reaumur);
    assert_eq!(restored.default_to, Scale::Delisle);
}

#[test]
fn default_config_round_trips() {
    let cfg = Config::default();
    let serialized = toml::to_string_pretty(&cfg).expect("serialize");
    let restored: Config = toml::from_str(&serialized).expect("deserialize");
    assert_eq!(restored.language, cfg.language);
    assert_eq!(restored.default_from, cfg.default_from);
    assert_eq!(restored.default_to, cfg.default_to);
}

#[test]
fn saved_scale_names_stay_stable() {
    // 기존 config.toml과의 호환: enum 변형명이 그대로 파일 포맷이다
    let content = r#"
language = "en"
default_from = "Kelvin"
default_to = "Fahrenheit"
"#;
    let cfg: Config = toml::from_str(content).expect("parse");
    assert_eq!(cfg.default_from, Scale::Kelvin);
    assert_eq!(cfg.default_to, Scale::Fahrenheit);
}

use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion::{self, ConversionError};
use crate::i18n::{keys, Translator};
use crate::scale::{self, Scale, ALL_SCALES};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Swap,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_SWAP));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Swap),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 온도 변환 메뉴를 처리한다.
///
/// 입력 오류(빈 값/숫자 아님/켈빈 음수)는 일회성 안내만 출력하고
/// 메인 메뉴로 복귀한다.
pub fn handle_convert(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    println!("{}", tr.t(keys::CONVERT_SCALE_OPTIONS));
    println!("{}", tr.t(keys::CONVERT_NOTE_KELVIN));
    println!("{}", tr.t(keys::HELP_CONVERT));
    let text = read_line(tr.t(keys::CONVERT_PROMPT_VALUE))?;
    let from = read_scale(tr, keys::CONVERT_PROMPT_FROM, cfg.default_from)?;
    let to = read_scale(tr, keys::CONVERT_PROMPT_TO, cfg.default_to)?;
    match conversion::convert_text(&text, from, to) {
        Ok(result) => println!("{} {}", tr.t(keys::CONVERT_RESULT), result.display_line()),
        Err(err) => println!("{}", tr.t(conversion_error_key(err))),
    }
    Ok(())
}

/// 기본 입력/변환 눈금을 서로 교환한다.
pub fn handle_swap(tr: &Translator, cfg: &mut Config) {
    std::mem::swap(&mut cfg.default_from, &mut cfg.default_to);
    println!(
        "{} {} → {}",
        tr.t(keys::SWAP_DONE),
        cfg.default_from.symbol(),
        cfg.default_to.symbol()
    );
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}({}) → {}({})",
        tr.t(keys::SETTINGS_CURRENT_DEFAULTS),
        cfg.default_from.name(),
        cfg.default_from.symbol(),
        cfg.default_to.name(),
        cfg.default_to.symbol()
    );
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::CONVERT_SCALE_OPTIONS));
    cfg.default_from = read_scale(tr, keys::SETTINGS_PROMPT_FROM, cfg.default_from)?;
    cfg.default_to = read_scale(tr, keys::SETTINGS_PROMPT_TO, cfg.default_to)?;
    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let lang = lang.trim();
    if !lang.is_empty() {
        match lang.to_lowercase().as_str() {
            "auto" | "ko" | "en" => {
                cfg.language = lang.to_lowercase();
                println!("{}", tr.t(keys::SETTINGS_LANGUAGE_NOTE));
            }
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 변환 오류 종류를 사용자 안내용 i18n 키로 대응시킨다.
pub fn conversion_error_key(err: ConversionError) -> &'static str {
    match err {
        ConversionError::EmptyInput => keys::ERROR_EMPTY_INPUT,
        ConversionError::InvalidNumber => keys::ERROR_INVALID_NUMBER,
        ConversionError::BelowAbsoluteZero => keys::ERROR_BELOW_ABSOLUTE_ZERO,
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 눈금을 읽는다. 메뉴 번호와 눈금명 모두 허용하며 빈 입력은 기본값을 쓴다.
fn read_scale(tr: &Translator, prompt_key: &str, default: Scale) -> Result<Scale, AppError> {
    loop {
        let sel = read_line(tr.t(prompt_key))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(default);
        }
        if let Ok(n) = sel.parse::<usize>() {
            if (1..=ALL_SCALES.len()).contains(&n) {
                return Ok(ALL_SCALES[n - 1]);
            }
        } else if let Ok(sc) = scale::parse_scale(sel) {
            return Ok(sc);
        }
        println!("{}", tr.t(keys::ERROR_UNKNOWN_SCALE));
    }
}

use clap::Parser;

use temperature_toolbox::i18n::keys;
use temperature_toolbox::{app, config, conversion, i18n, scale, ui_cli};

/// 여섯 가지 온도 눈금을 변환하는 CLI.
#[derive(Debug, Parser)]
#[command(name = "temperature_toolbox", version)]
struct Cli {
    /// 언어 코드 (auto/ko/en 등)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,

    /// 일회성 변환: 값 (생략 시 대화형 메뉴 실행)
    #[arg(requires = "from", requires = "to")]
    value: Option<String>,

    /// 일회성 변환: 입력 눈금 (ex: C, K, °F)
    from: Option<String>,

    /// 일회성 변환: 변환 눈금 (ex: F, Ré, De)
    to: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);

    // 값/눈금이 모두 주어지면 한 번 변환하고 종료한다 (파이프라인 용도).
    // 입력 오류는 대화형 경로와 동일하게 i18n 키를 거쳐 안내한다.
    if let (Some(value), Some(from), Some(to)) = (&cli.value, &cli.from, &cli.to) {
        match convert_once(value, from, to) {
            Ok(line) => println!("{line}"),
            Err(key) => {
                eprintln!("{}: {}", tr.t(keys::ERROR_PREFIX), tr.t(key));
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    app::run(&mut cfg, &tr)?;
    Ok(())
}

/// 일회성 변환을 수행한다. 실패 시 사용자 안내용 i18n 키를 돌려준다.
fn convert_once(value: &str, from: &str, to: &str) -> Result<String, &'static str> {
    let from = scale::parse_scale(from).map_err(|_| keys::ERROR_UNKNOWN_SCALE)?;
    let to = scale::parse_scale(to).map_err(|_| keys::ERROR_UNKNOWN_SCALE)?;
    let result =
        conversion::convert_text(value, from, to).map_err(ui_cli::conversion_error_key)?;
    Ok(result.display_line())
}

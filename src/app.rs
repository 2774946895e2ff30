use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::error::EngineError;
use crate::input::StateInput;
use crate::property::PlotType;
use crate::session::PlotSession;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 물성 엔진 오류
    #[error("{0}")]
    Engine(#[from] EngineError),
}

/// 대화형 CLI 의 상태. 플롯용/상태점용 입력 쌍을 따로 둔다.
pub struct CliState {
    pub session: PlotSession,
    pub plot_input: StateInput,
    pub point_input: StateInput,
}

impl CliState {
    pub fn from_config(config: &Config) -> Self {
        let units = &config.default_units;
        Self {
            session: PlotSession::new(),
            plot_input: StateInput::new(units.pressure, units.temperature),
            point_input: StateInput::new(units.pressure, units.temperature),
        }
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 계산 오류는 메시지만 출력하고 루프를 이어 간다. 입출력/설정 오류만 루프를 끝낸다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    let mut state = CliState::from_config(config);
    if let Some(path) = config.database_path.clone() {
        if let Err(e) = state.session.select_database(&path) {
            println!("이전 데이터베이스를 열지 못했습니다: {e}");
            config.database_path = None;
        }
    }
    loop {
        let outcome = match ui_cli::main_menu()? {
            MenuChoice::SelectDatabase => ui_cli::handle_select_database(&mut state, config),
            MenuChoice::AddIsoBar => ui_cli::handle_add_iso_value(&mut state, PlotType::IsoBar),
            MenuChoice::AddIsoTherm => ui_cli::handle_add_iso_value(&mut state, PlotType::IsoTherm),
            MenuChoice::RemoveIsoValue => ui_cli::handle_remove_iso_value(&mut state, config),
            MenuChoice::Plot => ui_cli::handle_plot(&state, config),
            MenuChoice::StatePoint => ui_cli::handle_state_point(&mut state),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(),
            MenuChoice::Settings => {
                ui_cli::handle_settings(config, &mut state)?;
                config.save().map_err(AppError::from)
            }
            MenuChoice::Exit => {
                state.session.close();
                config.save()?;
                info!("종료");
                println!("프로그램을 종료합니다.");
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::Engine(e)) => println!("오류: {e}"),
            Err(other) => return Err(other),
        }
    }
    Ok(())
}

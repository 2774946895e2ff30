use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::{AppError, CliState};
use crate::config::Config;
use crate::conversion;
use crate::curve::PropertyPlot;
use crate::property::{PlotType, ThermodynamicProperty};
use crate::quantity::QuantityKind;
use crate::state_point::StatePoint;
use crate::units::{PressureUnit, TemperatureUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SelectDatabase,
    AddIsoBar,
    AddIsoTherm,
    RemoveIsoValue,
    Plot,
    StatePoint,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== IF97 Property Explorer ===");
    println!("1) 데이터베이스 선택");
    println!("2) 등압선 추가");
    println!("3) 등온선 추가");
    println!("4) 등값 삭제");
    println!("5) 플롯 계산");
    println!("6) 상태점 물성");
    println!("7) 단위 변환기");
    println!("8) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::SelectDatabase),
            "2" => return Ok(MenuChoice::AddIsoBar),
            "3" => return Ok(MenuChoice::AddIsoTherm),
            "4" => return Ok(MenuChoice::RemoveIsoValue),
            "5" => return Ok(MenuChoice::Plot),
            "6" => return Ok(MenuChoice::StatePoint),
            "7" => return Ok(MenuChoice::UnitConversion),
            "8" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 데이터베이스 파일을 선택한다. 실패하면 평가기 없는 상태로 돌아간다.
pub fn handle_select_database(state: &mut CliState, cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 데이터베이스 선택 --");
    let path = PathBuf::from(read_line("데이터베이스 파일 경로: ")?.trim());
    match state.session.select_database(&path) {
        Ok(()) => {
            println!("데이터베이스를 불러왔습니다: {}", state.session.evaluator_name());
            cfg.database_path = Some(path);
            Ok(())
        }
        Err(e) => {
            cfg.database_path = None;
            Err(e.into())
        }
    }
}

/// 현재 단위로 값을 받아 등압/등온 목록에 추가한다.
pub fn handle_add_iso_value(state: &mut CliState, plot_type: PlotType) -> Result<(), AppError> {
    let input = &mut state.plot_input;
    let stored = match plot_type {
        PlotType::IsoBar => {
            let range = input.pressure_range();
            let unit = input.pressure_unit();
            let v = read_f64(&format!(
                "압력 [{unit}] ({:.4} ~ {:.4}): ",
                range.min, range.max
            ))?;
            input.set_pressure(v);
            input.pressure_mpa()
        }
        PlotType::IsoTherm => {
            let range = input.temperature_range();
            let unit = input.temperature_unit();
            let v = read_f64(&format!(
                "온도 [{unit}] ({:.2} ~ {:.2}): ",
                range.min, range.max
            ))?;
            input.set_temperature(v);
            input.temperature_k()
        }
    };
    if state.session.add_iso_value(plot_type, stored) {
        println!("{} 목록에 추가: {}", plot_type, crate::curve::curve_title(plot_type, stored));
    } else {
        println!("이미 목록에 있는 값입니다.");
    }
    print_iso_values(state, plot_type);
    Ok(())
}

/// 목록 번호로 등값을 지우고 곧바로 다시 플롯한다.
pub fn handle_remove_iso_value(state: &mut CliState, cfg: &Config) -> Result<(), AppError> {
    let plot_type = cfg.plot_type;
    print_iso_values(state, plot_type);
    let values = state.session.iso_values(plot_type).values().to_vec();
    if values.is_empty() {
        return Ok(());
    }
    let sel = read_line("삭제할 번호(취소하려면 엔터): ")?;
    let Ok(n) = sel.trim().parse::<usize>() else {
        return Ok(());
    };
    match n.checked_sub(1).and_then(|i| values.get(i)) {
        Some(&value) => {
            state.session.remove_iso_value(plot_type, value);
            handle_plot(state, cfg)
        }
        None => {
            println!("지원하지 않는 번호입니다.");
            Ok(())
        }
    }
}

/// 설정된 물성/플롯 종류로 곡선을 계산하고 요약을 출력한다. CSV 저장은 선택.
pub fn handle_plot(state: &CliState, cfg: &Config) -> Result<(), AppError> {
    let plot = state.session.plot(cfg.property, cfg.plot_type)?;
    print_plot(&plot);
    let out = read_line("CSV 저장 경로(건너뛰려면 엔터): ")?;
    let out = out.trim();
    if !out.is_empty() {
        let mut file = io::BufWriter::new(std::fs::File::create(out)?);
        plot.write_csv(&mut file)?;
        file.flush()?;
        println!("저장했습니다: {out}");
    }
    Ok(())
}

/// 상태점 물성 전체를 계산한다.
pub fn handle_state_point(state: &mut CliState) -> Result<(), AppError> {
    println!("\n-- 상태점 물성 --");
    let input = &mut state.point_input;
    let p_range = input.pressure_range();
    let p = read_f64(&format!(
        "압력 [{}] ({:.4} ~ {:.4}): ",
        input.pressure_unit(),
        p_range.min,
        p_range.max
    ))?;
    input.set_pressure(p);
    let t_range = input.temperature_range();
    let t = read_f64(&format!(
        "온도 [{}] ({:.2} ~ {:.2}): ",
        input.temperature_unit(),
        t_range.min,
        t_range.max
    ))?;
    input.set_temperature(t);
    let point = state
        .session
        .evaluate_point(input.temperature_k(), input.pressure_mpa())?;
    print_state_point(&point);
    Ok(())
}

/// 압력/온도 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion() -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("1) 압력 (MPa, kPa, Pa)  2) 온도 (K, C)");
    let kind = loop {
        match read_line("항목 번호를 입력: ")?.trim() {
            "1" => break QuantityKind::Pressure,
            "2" => break QuantityKind::Temperature,
            _ => println!("지원하지 않는 번호입니다."),
        }
    };
    let value = read_f64("값 입력: ")?;
    let from = read_line("입력 단위: ")?;
    let to = read_line("출력 단위: ")?;
    let result = conversion::convert(kind, value, from.trim(), to.trim())?;
    println!("결과: {result:.6} {}", to.trim());
    Ok(())
}

/// 기본 단위, 물성, 플롯 종류를 바꾼다.
pub fn handle_settings(cfg: &mut Config, state: &mut CliState) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "현재: 물성={}, 플롯={}, 압력 단위={}, 온도 단위={}",
        cfg.property, cfg.plot_type, cfg.default_units.pressure, cfg.default_units.temperature
    );
    for (i, p) in ThermodynamicProperty::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, p.label());
    }
    let sel = read_line("물성 번호(유지하려면 엔터): ")?;
    if let Some(p) = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| ThermodynamicProperty::ALL.get(i))
    {
        cfg.property = *p;
    }
    let sel = read_line("플롯 종류 1) Iso-Bar 2) Iso-Therm (유지하려면 엔터): ")?;
    match sel.trim() {
        "1" => cfg.plot_type = PlotType::IsoBar,
        "2" => cfg.plot_type = PlotType::IsoTherm,
        _ => {}
    }
    cfg.default_units.pressure = read_pressure_unit(cfg.default_units.pressure)?;
    cfg.default_units.temperature = read_temperature_unit(cfg.default_units.temperature)?;
    for input in [&mut state.plot_input, &mut state.point_input] {
        input.set_pressure_unit(cfg.default_units.pressure);
        input.set_temperature_unit(cfg.default_units.temperature);
    }
    println!(
        "설정: 물성={}, 플롯={}, 압력 단위={}, 온도 단위={}",
        cfg.property, cfg.plot_type, cfg.default_units.pressure, cfg.default_units.temperature
    );
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("숫자를 입력하세요."),
        }
    }
}

fn read_pressure_unit(current: PressureUnit) -> Result<PressureUnit, AppError> {
    let s = read_line(&format!("압력 단위 (MPa, kPa, Pa) [{current}]: "))?;
    if s.trim().is_empty() {
        return Ok(current);
    }
    match s.trim().parse() {
        Ok(u) => Ok(u),
        Err(e) => {
            println!("{e}. 변경하지 않습니다.");
            Ok(current)
        }
    }
}

fn read_temperature_unit(current: TemperatureUnit) -> Result<TemperatureUnit, AppError> {
    let s = read_line(&format!("온도 단위 (K, C) [{current}]: "))?;
    if s.trim().is_empty() {
        return Ok(current);
    }
    match s.trim().parse() {
        Ok(u) => Ok(u),
        Err(e) => {
            println!("{e}. 변경하지 않습니다.");
            Ok(current)
        }
    }
}

fn print_iso_values(state: &CliState, plot_type: PlotType) {
    let values = state.session.iso_values(plot_type).values();
    if values.is_empty() {
        println!("{plot_type} 목록이 비어 있습니다.");
        return;
    }
    println!("{plot_type} 목록:");
    for (i, v) in values.iter().enumerate() {
        println!("  {}) {}", i + 1, crate::curve::curve_title(plot_type, *v));
    }
}

/// 플롯 요약(곡선별 점 수와 범위)을 출력한다.
pub fn print_plot(plot: &PropertyPlot) {
    println!("\n{}", plot.title);
    println!("x: {}  y: {}", plot.x_axis_title, plot.y_axis_title);
    if plot.curves.is_empty() {
        println!("그릴 곡선이 없습니다. 먼저 등값을 추가하세요.");
    }
    for curve in &plot.curves {
        let (lo, hi) = curve
            .ys()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| (lo.min(y), hi.max(y)));
        if curve.is_empty() {
            println!("- {:<14} 유효한 점 없음", curve.title);
        } else {
            println!(
                "- {:<14} 점 {:>4}개, y = {:.4} ~ {:.4}",
                curve.title,
                curve.len(),
                lo,
                hi
            );
        }
    }
}

pub fn print_state_point(point: &StatePoint) {
    println!(
        "T = {:.2} K, p = {:.4} MPa",
        point.temperature_k, point.pressure_mpa
    );
    for line in point.summary_lines() {
        println!("  {line}");
    }
}

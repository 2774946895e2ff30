use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use if97_property_explorer::{
    app::{self, AppError},
    config, conversion,
    domain::{pressure_input_bounds, temperature_input_bounds},
    quantity::QuantityKind,
    ui_cli,
    units::{to_kelvin, to_mpa, PressureUnit, TemperatureUnit},
    EngineError, PlotSession, PlotType, ThermodynamicProperty,
};

#[derive(Parser)]
#[command(name = "if97_property_explorer_cli")]
#[command(about = "IAPWS-IF97 water/steam property explorer", long_about = None)]
struct Cli {
    /// 디버그 로그 출력
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 대화형 메뉴 (기본값)
    Interactive,
    /// 등압/등온 곡선을 계산해 CSV 로 출력
    Plot {
        /// 데이터베이스(매니페스트) 경로
        #[arg(short, long)]
        database: PathBuf,
        /// density, enthalpy, entropy, volume, internal-energy, cp, cv, speed-of-sound
        #[arg(short, long, default_value = "density")]
        property: ThermodynamicProperty,
        /// iso-bar 또는 iso-therm
        #[arg(short = 't', long, default_value = "iso-bar")]
        plot_type: PlotType,
        /// 등값 (반복 지정 가능)
        #[arg(short = 'i', long = "value", required = true)]
        values: Vec<f64>,
        /// 등값 단위 (iso-bar: MPa/kPa/Pa, iso-therm: K/C)
        #[arg(short, long)]
        unit: Option<String>,
        /// 출력 CSV 경로 (생략하면 표준 출력)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 한 상태점의 물성 전체
    Point {
        #[arg(short, long)]
        database: PathBuf,
        #[arg(long)]
        temperature: f64,
        #[arg(long, default_value = "K")]
        temperature_unit: TemperatureUnit,
        #[arg(long)]
        pressure: f64,
        #[arg(long, default_value = "MPa")]
        pressure_unit: PressureUnit,
    },
    /// 입력 범위 확인
    Bounds {
        /// 온도 범위를 구할 압력 (--pressure-unit 단위)
        #[arg(long, default_value_t = 0.01)]
        pressure: f64,
        #[arg(long, default_value = "MPa")]
        pressure_unit: PressureUnit,
        #[arg(long, default_value = "K")]
        temperature_unit: TemperatureUnit,
    },
    /// 압력/온도 단위 변환
    Convert {
        /// pressure 또는 temperature
        kind: String,
        value: f64,
        from: String,
        to: String,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = try_run(cli.command.unwrap_or(Commands::Interactive)) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Interactive => {
            let mut cfg = config::load_or_default()?;
            app::run(&mut cfg)
        }
        Commands::Plot {
            database,
            property,
            plot_type,
            values,
            unit,
            output,
        } => cmd_plot(database, property, plot_type, &values, unit.as_deref(), output),
        Commands::Point {
            database,
            temperature,
            temperature_unit,
            pressure,
            pressure_unit,
        } => {
            let mut session = PlotSession::new();
            session.select_database(&database)?;
            let point = session.evaluate_point(
                to_kelvin(temperature, temperature_unit),
                to_mpa(pressure, pressure_unit),
            )?;
            ui_cli::print_state_point(&point);
            Ok(())
        }
        Commands::Bounds {
            pressure,
            pressure_unit,
            temperature_unit,
        } => {
            let p = pressure_input_bounds(pressure_unit);
            let t = temperature_input_bounds(to_mpa(pressure, pressure_unit), temperature_unit);
            println!("pressure:    {} ~ {} {pressure_unit}", p.min, p.max);
            println!(
                "temperature: {} ~ {} {temperature_unit} (at {pressure} {pressure_unit})",
                t.min, t.max
            );
            Ok(())
        }
        Commands::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let kind = match kind.to_ascii_lowercase().as_str() {
                "pressure" | "p" => QuantityKind::Pressure,
                "temperature" | "t" => QuantityKind::Temperature,
                other => {
                    return Err(EngineError::Configuration {
                        what: format!("알 수 없는 물리량: {other}"),
                    }
                    .into())
                }
            };
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("{result} {to}");
            Ok(())
        }
    }
}

fn cmd_plot(
    database: PathBuf,
    property: ThermodynamicProperty,
    plot_type: PlotType,
    values: &[f64],
    unit: Option<&str>,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let mut session = PlotSession::new();
    session.select_database(&database)?;
    for &value in values {
        let canonical = match plot_type {
            PlotType::IsoBar => conversion::to_canonical(
                QuantityKind::Pressure,
                value,
                unit.unwrap_or("MPa"),
            )?,
            PlotType::IsoTherm => conversion::to_canonical(
                QuantityKind::Temperature,
                value,
                unit.unwrap_or("K"),
            )?,
        };
        session.add_iso_value(plot_type, canonical);
    }
    let plot = session.plot(property, plot_type)?;
    match output {
        Some(path) => {
            let mut file = io::BufWriter::new(std::fs::File::create(&path)?);
            plot.write_csv(&mut file)?;
            file.flush()?;
            ui_cli::print_plot(&plot);
        }
        None => {
            let stdout = io::stdout();
            plot.write_csv(stdout.lock())?;
        }
    }
    Ok(())
}

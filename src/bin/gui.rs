#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::fs;
use std::path::{Path, PathBuf};

use eframe::{egui, App, Frame};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};
use rfd::FileDialog;
use if97_property_explorer::{
    config,
    curve::curve_title,
    input::StateInput,
    units::{PressureUnit, TemperatureUnit},
    PlotSession, PlotType, PropertyPlot, StatePoint, ThermodynamicProperty,
};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("IF97 Property Explorer")
            .with_inner_size([1280.0, 820.0]),
        ..Default::default()
    };
    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "설정을 읽지 못해 기본값 사용");
        config::Config::default()
    });
    eframe::run_native(
        "IF97 Property Explorer",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

/// 오류 메시지의 한글 표시용 폴백 글꼴을 등록한다. 기본 글꼴 뒤에 붙는다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(name.to_string());
    }
    ctx.set_fonts(fonts);
}

fn font_candidates() -> Vec<PathBuf> {
    let mut out = vec![PathBuf::from("assets/fonts/malgun.ttf")];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc", "batang.ttc"] {
            out.push(fonts.join(cand));
        }
    }
    out.extend(
        [
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .map(PathBuf::from),
    );
    out
}

fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    for path in font_candidates() {
        if path.exists() {
            let bytes = fs::read(&path)
                .map_err(|e| format!("Failed to read font file ({}): {e}", path.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; messages may not render.".into())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

struct GuiApp {
    config: config::Config,
    session: PlotSession,
    plot_type: PlotType,
    property: ThermodynamicProperty,
    // 등값 입력 슬라이더
    plot_input: StateInput,
    // 상태점 계산 슬라이더
    point_input: StateInput,
    plot: Option<PropertyPlot>,
    point: Option<StatePoint>,
    error: Option<String>,
    notice: Option<String>,
    reset_plot_view: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let units = config.default_units.clone();
        let mut app = Self {
            plot_type: config.plot_type,
            property: config.property,
            plot_input: StateInput::new(units.pressure, units.temperature),
            point_input: StateInput::new(units.pressure, units.temperature),
            session: PlotSession::new(),
            config,
            plot: None,
            point: None,
            error: None,
            notice: None,
            reset_plot_view: false,
        };
        if let Some(path) = app.config.database_path.clone() {
            if let Err(e) = app.session.select_database(&path) {
                app.error = Some(format!("Failed to load the database: {e}"));
                app.config.database_path = None;
            }
        }
        app
    }

    fn persist_config(&mut self) {
        self.config.plot_type = self.plot_type;
        self.config.property = self.property;
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "설정 저장 실패");
        }
    }

    fn pick_database(&mut self) {
        let Some(path) = FileDialog::new()
            .set_title("Select Database File")
            .add_filter("Database Files", &["toml", "db", "sqlite"])
            .add_filter("All Files", &["*"])
            .pick_file()
        else {
            return;
        };
        match self.session.select_database(&path) {
            Ok(()) => {
                self.config.database_path = Some(path);
                self.notice = Some("Database loaded successfully.".to_string());
            }
            Err(e) => {
                self.config.database_path = None;
                self.plot = None;
                self.point = None;
                self.error = Some(format!("Failed to load the database: {e}"));
            }
        }
        self.persist_config();
    }

    /// 실패하면 이전 플롯을 그대로 둔다.
    fn replot(&mut self) {
        match self.session.plot(self.property, self.plot_type) {
            Ok(plot) => self.plot = Some(plot),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn calculate_point(&mut self) {
        match self
            .session
            .evaluate_point(self.point_input.temperature_k(), self.point_input.pressure_mpa())
        {
            Ok(point) => self.point = Some(point),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn ui_plot_controls(&mut self, ui: &mut egui::Ui) {
        heading_with_tip(
            ui,
            "Iso-lines",
            "Build a set of iso-bars or iso-therms and plot one property along them.",
        );
        ui.add_space(6.0);

        let previous_type = self.plot_type;
        let previous_property = self.property;
        egui::Grid::new("plot_selection").num_columns(2).show(ui, |ui| {
            ui.label("Plot type");
            egui::ComboBox::from_id_source("plot_type")
                .selected_text(self.plot_type.label())
                .show_ui(ui, |ui| {
                    for t in PlotType::ALL {
                        ui.selectable_value(&mut self.plot_type, t, t.label());
                    }
                });
            ui.end_row();
            ui.label("Property");
            egui::ComboBox::from_id_source("property")
                .selected_text(self.property.label())
                .width(230.0)
                .show_ui(ui, |ui| {
                    for p in ThermodynamicProperty::ALL {
                        ui.selectable_value(&mut self.property, p, p.label());
                    }
                });
            ui.end_row();
        });
        if previous_type != self.plot_type {
            self.reset_plot_view = true;
        }
        if previous_type != self.plot_type || previous_property != self.property {
            self.persist_config();
        }

        ui.separator();
        match self.plot_type {
            PlotType::IsoBar => {
                pressure_row(ui, &mut self.plot_input, "plot_p_unit");
                if ui.button("Add Iso-Bar").clicked() {
                    self.session
                        .add_iso_value(PlotType::IsoBar, self.plot_input.pressure_mpa());
                }
            }
            PlotType::IsoTherm => {
                pressure_row(ui, &mut self.plot_input, "plot_p_unit");
                temperature_row(ui, &mut self.plot_input, "plot_t_unit");
                if ui.button("Add Iso-Therm").clicked() {
                    self.session
                        .add_iso_value(PlotType::IsoTherm, self.plot_input.temperature_k());
                }
            }
        }

        ui.add_space(6.0);
        let mut removed = None;
        egui::ScrollArea::vertical()
            .max_height(220.0)
            .id_source("iso_values")
            .show(ui, |ui| {
                for &value in self.session.iso_values(self.plot_type).values() {
                    ui.horizontal(|ui| {
                        if ui.small_button("✖").on_hover_text("Remove").clicked() {
                            removed = Some(value);
                        }
                        ui.label(curve_title(self.plot_type, value));
                    });
                }
            });
        if let Some(value) = removed {
            self.session.remove_iso_value(self.plot_type, value);
            self.replot();
        }

        ui.add_space(6.0);
        if ui.button("Plot").clicked() {
            self.replot();
        }
    }

    fn ui_state_point(&mut self, ui: &mut egui::Ui) {
        heading_with_tip(
            ui,
            "State point",
            "Evaluate every property at one temperature/pressure.",
        );
        ui.add_space(6.0);
        pressure_row(ui, &mut self.point_input, "point_p_unit");
        temperature_row(ui, &mut self.point_input, "point_t_unit");
        if ui.button("Calculate Properties").clicked() {
            self.calculate_point();
        }
        ui.separator();
        if let Some(point) = &self.point {
            label_with_tip(
                ui,
                &format!(
                    "T = {:.2} K, p = {:.4} MPa",
                    point.temperature_k, point.pressure_mpa
                ),
                "State used for the last calculation",
            );
            for line in point.summary_lines() {
                ui.label(line);
            }
        }
    }

    fn ui_plot_area(&mut self, ui: &mut egui::Ui) {
        let Some(plot) = &self.plot else {
            ui.centered_and_justified(|ui| {
                ui.label("Select a database, add iso-values and press Plot.");
            });
            return;
        };
        ui.heading(&plot.title);
        let mut view = Plot::new("property_plot")
            .legend(Legend::default().position(Corner::RightTop))
            .x_axis_label(plot.x_axis_title)
            .y_axis_label(plot.y_axis_title);
        if self.reset_plot_view {
            view = view.reset();
            self.reset_plot_view = false;
        }
        view.show(ui, |plot_ui| {
            for curve in &plot.curves {
                let points = PlotPoints::from(curve.points.clone());
                plot_ui.line(Line::new(points).name(&curve.title));
            }
        });
    }
}

/// 압력 슬라이더와 단위 콤보. 범위는 선택 단위 기준.
fn pressure_row(ui: &mut egui::Ui, input: &mut StateInput, id: &str) {
    ui.horizontal(|ui| {
        ui.label("Pressure");
        let range = input.pressure_range();
        let mut value = input.pressure_display();
        if ui
            .add(egui::Slider::new(&mut value, range.min..=range.max).logarithmic(true))
            .changed()
        {
            input.set_pressure(value);
        }
        let mut unit = input.pressure_unit();
        egui::ComboBox::from_id_source(id)
            .selected_text(unit.symbol())
            .show_ui(ui, |ui| {
                for u in PressureUnit::ALL {
                    ui.selectable_value(&mut unit, u, u.symbol());
                }
            });
        if unit != input.pressure_unit() {
            input.set_pressure_unit(unit);
        }
    });
}

/// 온도 슬라이더와 단위 콤보. 범위는 현재 압력에 따라 바뀐다.
fn temperature_row(ui: &mut egui::Ui, input: &mut StateInput, id: &str) {
    ui.horizontal(|ui| {
        ui.label("Temperature");
        let range = input.temperature_range();
        let mut value = input.temperature_display();
        if ui
            .add(egui::Slider::new(&mut value, range.min..=range.max))
            .changed()
        {
            input.set_temperature(value);
        }
        let mut unit = input.temperature_unit();
        egui::ComboBox::from_id_source(id)
            .selected_text(unit.symbol())
            .show_ui(ui, |ui| {
                for u in TemperatureUnit::ALL {
                    ui.selectable_value(&mut unit, u, u.symbol());
                }
            });
        if unit != input.temperature_unit() {
            input.set_temperature_unit(unit);
        }
    });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Set Database Path…").clicked() {
                        ui.close_menu();
                        self.pick_database();
                    }
                    if ui.button("Exit").clicked() {
                        ui.close_menu();
                        self.session.close();
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.separator();
                match self.session.database_path() {
                    Some(path) => ui.label(format!(
                        "{} | {}",
                        self.session.evaluator_name(),
                        path.display()
                    )),
                    None => ui.label("No database loaded"),
                };
            });
        });

        let ready = self.session.is_ready();

        egui::SidePanel::left("plot_controls")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(ready, |ui| self.ui_plot_controls(ui));
            });

        egui::SidePanel::right("state_point")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(ready, |ui| self.ui_state_point(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| self.ui_plot_area(ui));

        if let Some(msg) = self.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(msg);
                    if ui.button("OK").clicked() {
                        self.error = None;
                    }
                });
        } else if let Some(msg) = self.notice.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(msg);
                    if ui.button("OK").clicked() {
                        self.notice = None;
                    }
                });
        }
    }
}

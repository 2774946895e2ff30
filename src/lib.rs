//! IAPWS-IF97 물/증기 물성 탐색기의 핵심 로직.
//! 상태 샘플링과 곡선 조립을 라이브러리로 분리하여 CLI 와 GUI 가 함께 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod curve;
pub mod domain;
pub mod error;
pub mod evaluator;
pub mod grid;
pub mod input;
pub mod iso_values;
pub mod property;
pub mod quantity;
pub mod session;
pub mod state_point;
pub mod ui_cli;
pub mod units;

pub use curve::{Curve, CurveBuilder, PropertyPlot};
pub use error::{EngineError, EngineResult};
pub use evaluator::{EquationOfState, EvaluatorHandle};
pub use iso_values::IsoValueSet;
pub use property::{PlotType, ThermodynamicProperty};
pub use session::PlotSession;
pub use state_point::StatePoint;

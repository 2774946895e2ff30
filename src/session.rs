//! 플롯 세션: 평가기 핸들, 데이터베이스 경로, 등압/등온 목록을 묶는다.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::curve::{CurveBuilder, PropertyPlot};
use crate::error::{EngineError, EngineResult};
use crate::evaluator::EvaluatorHandle;
use crate::iso_values::IsoValueSet;
use crate::property::{PlotType, ThermodynamicProperty};
use crate::state_point::{self, StatePoint};

/// 평가기가 없을 때 플롯 제목에 쓰는 이름.
const FALLBACK_EOS_NAME: &str = "IAPWS IF97 Water/Steam";

/// 한 사용자 세션. 등값 목록은 비어 있는 상태로 시작하고 플롯 종류를 바꿔도 유지된다.
#[derive(Debug, Default)]
pub struct PlotSession {
    evaluator: Option<EvaluatorHandle>,
    database_path: Option<PathBuf>,
    iso_bars: IsoValueSet,
    iso_therms: IsoValueSet,
}

impl PlotSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 데이터베이스를 선택한다. 이전 평가기는 먼저 해제한다.
    ///
    /// # Errors
    ///
    /// 열기에 실패하면 [`EngineError::Initialization`] 을 돌려주고 세션은
    /// 평가기 없는 상태로 남는다.
    pub fn select_database(&mut self, path: impl AsRef<Path>) -> EngineResult<()> {
        let path = path.as_ref();
        self.close();
        match EvaluatorHandle::open(path) {
            Ok(handle) => {
                self.evaluator = Some(handle);
                self.database_path = Some(path.to_path_buf());
                Ok(())
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "데이터베이스 열기 실패");
                Err(err)
            }
        }
    }

    /// 이미 만들어진 평가기를 붙인다. 이전 평가기는 먼저 해제한다.
    pub fn attach(&mut self, handle: EvaluatorHandle) {
        self.close();
        self.evaluator = Some(handle);
    }

    /// 평가기를 해제한다. 여러 번 불러도 된다.
    pub fn close(&mut self) {
        if let Some(mut handle) = self.evaluator.take() {
            info!(path = ?self.database_path, "평가기 닫음");
            handle.close();
        }
        self.database_path = None;
    }

    /// 계산 기능을 쓸 수 있는지.
    pub fn is_ready(&self) -> bool {
        self.evaluator.as_ref().is_some_and(EvaluatorHandle::is_open)
    }

    pub fn database_path(&self) -> Option<&Path> {
        self.database_path.as_deref()
    }

    pub fn evaluator_name(&self) -> &str {
        self.evaluator
            .as_ref()
            .and_then(EvaluatorHandle::name)
            .unwrap_or(FALLBACK_EOS_NAME)
    }

    pub fn iso_values(&self, plot_type: PlotType) -> &IsoValueSet {
        match plot_type {
            PlotType::IsoBar => &self.iso_bars,
            PlotType::IsoTherm => &self.iso_therms,
        }
    }

    fn iso_values_mut(&mut self, plot_type: PlotType) -> &mut IsoValueSet {
        match plot_type {
            PlotType::IsoBar => &mut self.iso_bars,
            PlotType::IsoTherm => &mut self.iso_therms,
        }
    }

    /// 기준 단위 값(등압이면 MPa, 등온이면 K)을 추가한다. 이미 있으면 `false`.
    pub fn add_iso_value(&mut self, plot_type: PlotType, value: f64) -> bool {
        self.iso_values_mut(plot_type).add(value)
    }

    /// 값을 지운다. 없으면 `false`. 다시 그리는 것은 호출 측 몫이다.
    pub fn remove_iso_value(&mut self, plot_type: PlotType, value: f64) -> bool {
        self.iso_values_mut(plot_type).remove(value)
    }

    fn handle(&self) -> EngineResult<&EvaluatorHandle> {
        self.evaluator
            .as_ref()
            .filter(|h| h.is_open())
            .ok_or(EngineError::EvaluatorUnavailable)
    }

    /// 현재 등값 목록으로 곡선 전체를 새로 만든다.
    ///
    /// # Errors
    ///
    /// 곡선 하나라도 실패하면 전체 플롯을 중단한다. 이전 플롯을 들고 있는
    /// 호출 측 상태는 건드리지 않는다.
    pub fn plot(
        &self,
        property: ThermodynamicProperty,
        plot_type: PlotType,
    ) -> EngineResult<PropertyPlot> {
        let handle = self.handle()?;
        let iso_values = self.iso_values(plot_type).values();
        info!(%property, %plot_type, curves = iso_values.len(), "플롯 계산");
        let curves = CurveBuilder::new(handle).build(property, plot_type, iso_values)?;
        Ok(PropertyPlot {
            title: format!("{}: {}", self.evaluator_name(), property.label()),
            property,
            plot_type,
            x_axis_title: plot_type.sweep_axis_title(),
            y_axis_title: property.axis_title(),
            curves,
        })
    }

    /// 한 상태점의 물성 전체.
    pub fn evaluate_point(
        &self,
        temperature_k: f64,
        pressure_mpa: f64,
    ) -> EngineResult<StatePoint> {
        state_point::evaluate_all(self.handle()?, temperature_k, pressure_mpa)
    }
}

impl Drop for PlotSession {
    fn drop(&mut self) {
        self.close();
    }
}

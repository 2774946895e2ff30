//! 등압/등온 곡선 조립.
//!
//! 곡선마다 스윕 축을 [`SAMPLE_COUNT`](crate::grid::SAMPLE_COUNT) 개 점으로 나누고
//! 평가기를 한 번(배치 1000) 호출한 뒤 NaN 샘플을 버린다.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::domain::{pressure_bounds_for_temperature, temperature_bounds_for_pressure};
use crate::error::EngineResult;
use crate::evaluator::EvaluatorHandle;
use crate::grid;
use crate::property::{PlotType, ThermodynamicProperty};

/// 등값 하나에 대한 플롯 가능한 곡선.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// 고정된 값(등압이면 MPa, 등온이면 K)
    pub iso_value: f64,
    /// 범례 제목 (예: `10 MPa`)
    pub title: String,
    /// 스윕 순서를 유지한 (x, y). y 가 NaN 인 점은 빠진다.
    pub points: Vec<[f64; 2]>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p[0])
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p[1])
    }
}

/// 한 번의 플롯 요청 결과. 캐시하지 않고 요청마다 새로 만든다.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPlot {
    pub title: String,
    pub property: ThermodynamicProperty,
    pub plot_type: PlotType,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub curves: Vec<Curve>,
}

impl PropertyPlot {
    /// `curve,x,y` 형식 CSV 로 쓴다. 곡선 순서와 점 순서를 그대로 유지한다.
    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "# {}", self.title)?;
        writeln!(out, "curve,{},{}", self.x_axis_title, self.y_axis_title)?;
        for curve in &self.curves {
            for [x, y] in &curve.points {
                writeln!(out, "{},{x},{y}", curve.title)?;
            }
        }
        Ok(())
    }
}

/// 등값 곡선 제목. 값은 기준 단위 그대로 쓴다.
pub fn curve_title(plot_type: PlotType, iso_value: f64) -> String {
    match plot_type {
        PlotType::IsoBar => format!("{iso_value} MPa"),
        PlotType::IsoTherm => format!("{iso_value} K"),
    }
}

/// 스윕 축 값과 평가 결과를 짝지어 곡선을 만든다. NaN 인 y 만 버린다.
pub fn assemble_curve(iso_value: f64, title: String, xs: &[f64], ys: &[f64]) -> Curve {
    let points = xs
        .iter()
        .zip(ys)
        .filter(|(_, y)| !y.is_nan())
        .map(|(&x, &y)| [x, y])
        .collect();
    Curve {
        iso_value,
        title,
        points,
    }
}

/// 평가기 핸들을 빌려 곡선을 만든다.
pub struct CurveBuilder<'a> {
    evaluator: &'a EvaluatorHandle,
}

impl<'a> CurveBuilder<'a> {
    pub fn new(evaluator: &'a EvaluatorHandle) -> Self {
        Self { evaluator }
    }

    /// 압력(MPa)마다 온도를 스윕한다. x = 온도(K).
    ///
    /// # Errors
    ///
    /// 어느 한 배치라도 실패하면 전체를 중단하고 그 오류를 돌려준다.
    pub fn build_iso_bar_curves(
        &self,
        property: ThermodynamicProperty,
        pressures_mpa: &[f64],
    ) -> EngineResult<Vec<Curve>> {
        pressures_mpa
            .iter()
            .map(|&pressure| {
                let temperatures = grid::sample(temperature_bounds_for_pressure(pressure))?;
                let pressures = vec![pressure; temperatures.len()];
                let values = self
                    .evaluator
                    .evaluate(property, &temperatures, &pressures)
                    .inspect_err(|e| warn!(pressure, error = %e, "등압선 계산 실패"))?;
                Ok(self.finish(PlotType::IsoBar, pressure, &temperatures, &values))
            })
            .collect()
    }

    /// 온도(K)마다 압력을 스윕한다. x = 압력(MPa).
    ///
    /// # Errors
    ///
    /// 어느 한 배치라도 실패하면 전체를 중단하고 그 오류를 돌려준다.
    pub fn build_iso_therm_curves(
        &self,
        property: ThermodynamicProperty,
        temperatures_k: &[f64],
    ) -> EngineResult<Vec<Curve>> {
        temperatures_k
            .iter()
            .map(|&temperature| {
                let pressures = grid::sample(pressure_bounds_for_temperature(temperature))?;
                let temperatures = vec![temperature; pressures.len()];
                let values = self
                    .evaluator
                    .evaluate(property, &temperatures, &pressures)
                    .inspect_err(|e| warn!(temperature, error = %e, "등온선 계산 실패"))?;
                Ok(self.finish(PlotType::IsoTherm, temperature, &pressures, &values))
            })
            .collect()
    }

    pub fn build(
        &self,
        property: ThermodynamicProperty,
        plot_type: PlotType,
        iso_values: &[f64],
    ) -> EngineResult<Vec<Curve>> {
        match plot_type {
            PlotType::IsoBar => self.build_iso_bar_curves(property, iso_values),
            PlotType::IsoTherm => self.build_iso_therm_curves(property, iso_values),
        }
    }

    fn finish(&self, plot_type: PlotType, iso_value: f64, xs: &[f64], ys: &[f64]) -> Curve {
        let curve = assemble_curve(iso_value, curve_title(plot_type, iso_value), xs, ys);
        debug!(
            curve = %curve.title,
            kept = curve.len(),
            dropped = xs.len() - curve.len(),
            "곡선 조립"
        );
        curve
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_use_canonical_units() {
        assert_eq!(curve_title(PlotType::IsoBar, 10.0), "10 MPa");
        assert_eq!(curve_title(PlotType::IsoBar, 0.5), "0.5 MPa");
        assert_eq!(curve_title(PlotType::IsoTherm, 500.0), "500 K");
    }

    #[test]
    fn assemble_drops_nan_and_keeps_order() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [10.0, f64::NAN, 30.0, f64::NAN, 50.0];
        let curve = assemble_curve(7.0, "7 MPa".into(), &xs, &ys);
        assert_eq!(curve.points, vec![[1.0, 10.0], [3.0, 30.0], [5.0, 50.0]]);
        assert_eq!(curve.iso_value, 7.0);
    }
}

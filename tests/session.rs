//! 플롯 세션 수명주기와 오류 전파.
mod common;

use common::{if97_manifest, scratch_file, FailingBackend, FnBackend};
use if97_property_explorer::{
    EngineError, EvaluatorHandle, PlotSession, PlotType, ThermodynamicProperty as P,
};

#[test]
fn new_session_has_no_evaluator() {
    let session = PlotSession::new();
    assert!(!session.is_ready());
    assert!(session.database_path().is_none());
    assert!(matches!(
        session.plot(P::Density, PlotType::IsoBar),
        Err(EngineError::EvaluatorUnavailable)
    ));
    assert!(matches!(
        session.evaluate_point(300.0, 1.0),
        Err(EngineError::EvaluatorUnavailable)
    ));
}

#[test]
fn failed_selection_leaves_no_evaluator() {
    let mut session = PlotSession::new();
    session.select_database(if97_manifest("good.toml")).unwrap();
    assert!(session.is_ready());

    let bad = scratch_file("bad.toml", "formulation = 42");
    let err = session.select_database(&bad).unwrap_err();
    assert!(matches!(err, EngineError::Initialization { .. }));
    assert!(!session.is_ready());
    assert!(session.database_path().is_none());
}

#[test]
fn reselecting_releases_previous_evaluator_once() {
    let backend = FnBackend::new(|t: f64, _p: f64| t);
    let releases = backend.releases.clone();
    let mut session = PlotSession::new();
    session.attach(EvaluatorHandle::new(backend));

    session.select_database(if97_manifest("reselect.toml")).unwrap();
    assert_eq!(releases.get(), 1);
    session.close();
    session.close();
    drop(session);
    assert_eq!(releases.get(), 1);
}

#[test]
fn dropping_session_releases_evaluator() {
    let backend = FnBackend::new(|t: f64, _p: f64| t);
    let releases = backend.releases.clone();
    {
        let mut session = PlotSession::new();
        session.attach(EvaluatorHandle::new(backend));
    }
    assert_eq!(releases.get(), 1);
}

#[test]
fn iso_lists_are_kept_per_plot_type() {
    let mut session = PlotSession::new();
    assert!(session.add_iso_value(PlotType::IsoBar, 10.0));
    assert!(!session.add_iso_value(PlotType::IsoBar, 10.0));
    assert!(session.add_iso_value(PlotType::IsoTherm, 500.0));
    assert_eq!(session.iso_values(PlotType::IsoBar).values(), &[10.0]);
    assert_eq!(session.iso_values(PlotType::IsoTherm).values(), &[500.0]);

    assert!(session.remove_iso_value(PlotType::IsoBar, 10.0));
    assert!(!session.remove_iso_value(PlotType::IsoBar, 10.0));
    assert!(session.iso_values(PlotType::IsoBar).is_empty());
    assert_eq!(session.iso_values(PlotType::IsoTherm).len(), 1);
}

#[test]
fn plot_carries_titles_and_curve_order() {
    let mut session = PlotSession::new();
    session.attach(EvaluatorHandle::new(FnBackend::new(|t: f64, p: f64| t * p)));
    session.add_iso_value(PlotType::IsoBar, 20.0);
    session.add_iso_value(PlotType::IsoBar, 1.0);

    let plot = session.plot(P::SpecificEnthalpy, PlotType::IsoBar).unwrap();
    assert_eq!(plot.title, "Mock EOS: Specific Enthalpy");
    assert_eq!(plot.x_axis_title, "Temperature (K)");
    assert_eq!(plot.y_axis_title, P::SpecificEnthalpy.axis_title());
    let titles: Vec<&str> = plot.curves.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["20 MPa", "1 MPa"]);

    let iso_therm = session.plot(P::SpecificEnthalpy, PlotType::IsoTherm).unwrap();
    assert_eq!(iso_therm.x_axis_title, "Pressure (MPa)");
    assert!(iso_therm.curves.is_empty());
}

#[test]
fn plot_failure_returns_error_without_partial_curves() {
    let mut session = PlotSession::new();
    session.attach(EvaluatorHandle::new(FailingBackend {
        fail_on: P::Density,
        fail_pressure_above: 50.0,
    }));
    session.add_iso_value(PlotType::IsoBar, 10.0);
    session.add_iso_value(PlotType::IsoBar, 90.0);
    assert!(matches!(
        session.plot(P::Density, PlotType::IsoBar),
        Err(EngineError::Calculation { .. })
    ));
    // 실패 물성만 영향을 받는다
    assert_eq!(session.plot(P::Density, PlotType::IsoTherm).unwrap().curves.len(), 0);
}

#[test]
fn state_point_makes_one_single_sample_batch_per_property() {
    let backend = FnBackend::new(|t: f64, p: f64| t + p);
    let calls = backend.calls.clone();
    let batch_lens = backend.batch_lens.clone();
    let mut session = PlotSession::new();
    session.attach(EvaluatorHandle::new(backend));

    let point = session.evaluate_point(300.0, 3.0).unwrap();
    assert_eq!(point.values().len(), 8);
    assert_eq!(point.get(P::SpeedOfSound), Some(303.0));
    assert_eq!(calls.get(), 8);
    assert_eq!(*batch_lens.borrow(), vec![1; 8]);
}

#[test]
fn state_point_is_all_or_nothing() {
    let mut session = PlotSession::new();
    session.attach(EvaluatorHandle::new(FailingBackend {
        fail_on: P::SpeedOfSound,
        fail_pressure_above: 0.0,
    }));
    // 마지막 물성만 실패해도 앞선 7개 결과는 돌려주지 않는다
    let result = session.evaluate_point(300.0, 3.0);
    match result {
        Err(EngineError::Calculation { property, .. }) => assert_eq!(property, P::SpeedOfSound),
        other => panic!("expected calculation error, got {other:?}"),
    }
}

#[test]
fn nan_iso_value_never_reaches_the_evaluator() {
    let backend = FnBackend::new(|t: f64, _p: f64| t);
    let calls = backend.calls.clone();
    let mut session = PlotSession::new();
    session.attach(EvaluatorHandle::new(backend));
    assert!(!session.add_iso_value(PlotType::IsoBar, f64::NAN));
    assert!(!session.add_iso_value(PlotType::IsoBar, f64::NAN));
    assert!(!session.add_iso_value(PlotType::IsoTherm, f64::INFINITY));
    assert!(session.iso_values(PlotType::IsoBar).is_empty());

    let plot = session.plot(P::Density, PlotType::IsoBar).unwrap();
    assert!(plot.curves.is_empty());
    assert_eq!(calls.get(), 0);
}

#[test]
fn if97_state_point_lists_every_property() {
    let mut session = PlotSession::new();
    session.select_database(if97_manifest("point.toml")).unwrap();
    let point = session.evaluate_point(300.0, 3.0).unwrap();
    let lines = point.summary_lines();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with(P::ALL[0].label()));
    assert!(point.iter().all(|(_, v)| v.is_finite()));
}

use anyhow::Result;
use rmplot::charts::{self, axis_upper_bound, shared_upper_bound};
use rmplot::series::{ComparisonSeries, Metric};
use rmplot::variation::Variation;
use std::fs;
use tempfile::tempdir;

fn sample_series(metric: Metric) -> ComparisonSeries {
    ComparisonSeries {
        metric,
        resmgm: vec![(2.0, 10.0), (4.0, 12.0), (8.0, 14.0)],
        distrm: vec![(2.0, 15.0), (4.0, 18.0), (8.0, 21.0)],
    }
}

#[test]
fn test_axis_upper_bound_adds_headroom_over_the_maximum() {
    let bound = axis_upper_bound(&[2.0, 10.0, 7.0]);
    assert!((bound - 10.5).abs() < 1e-9);
}

#[test]
fn test_axis_upper_bound_floors_degenerate_columns() {
    assert_eq!(axis_upper_bound(&[]), 1.0);
    assert_eq!(axis_upper_bound(&[0.0, 0.0]), 1.0);
    assert_eq!(axis_upper_bound(&[f64::NAN]), 1.0);
}

#[test]
fn test_shared_upper_bound_is_the_maximum_of_both_ranges() {
    let lhs = [5.0, 7.0];
    let rhs = [40.0, 50.0];

    let shared = shared_upper_bound(&lhs, &rhs);
    assert_eq!(shared, axis_upper_bound(&rhs));
    assert_eq!(shared, shared_upper_bound(&rhs, &lhs));
}

#[test]
fn test_metric_chart_writes_raster_and_vector_files() -> Result<()> {
    rmplot::init_logging(true);

    let temp_dir = tempdir()?;
    let plots_dir = temp_dir.path().join("plots");
    fs::create_dir_all(&plots_dir)?;

    let series = sample_series(Metric::TlmRequests);
    charts::render_metric_chart(&Variation::VarDom, &series, &plots_dir)?;

    for name in ["var_dom-tlm.png", "var_dom-tlm.svg"] {
        let path = plots_dir.join(name);
        assert!(path.exists(), "missing chart output: {name}");
        assert!(fs::metadata(&path)?.len() > 0, "empty chart output: {name}");
    }

    Ok(())
}

#[test]
fn test_dual_axis_chart_writes_raster_and_vector_files() -> Result<()> {
    rmplot::init_logging(true);

    let temp_dir = tempdir()?;
    let plots_dir = temp_dir.path().join("plots");
    fs::create_dir_all(&plots_dir)?;

    let instructions = sample_series(Metric::Instructions);
    let time = ComparisonSeries {
        metric: Metric::Time,
        resmgm: vec![(2.0, 50.0), (4.0, 52.0), (8.0, 54.0)],
        distrm: vec![(2.0, 55.0), (4.0, 57.0), (8.0, 59.0)],
    };
    charts::render_dual_axis_chart(&Variation::VarDom, &instructions, &time, &plots_dir)?;

    for name in ["var_dom-inst-t.png", "var_dom-inst-t.svg"] {
        let path = plots_dir.join(name);
        assert!(path.exists(), "missing chart output: {name}");
        assert!(fs::metadata(&path)?.len() > 0, "empty chart output: {name}");
    }

    Ok(())
}

use crate::color::{FONT_SIZE, STROKE_WIDTH};
use crate::series::{Algorithm, ComparisonSeries};
use crate::variation::Variation;
use anyhow::Result;
use log::{debug, info};
use plotters::coord::Shift;
use plotters::element::TriangleMarker;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const SINGLE_CHART_SIZE: (u32, u32) = (640, 480);
pub const OVERVIEW_CHART_SIZE: (u32, u32) = (1600, 400);
pub const DUAL_AXIS_CHART_SIZE: (u32, u32) = (800, 480);

const AXIS_HEADROOM: f64 = 1.05;
const MARKER_SIZE: i32 = 3;

/// Upper bound of a dependent axis: the largest finite value plus fixed
/// headroom, floored at 1.0 so empty or all-zero columns still produce a
/// drawable range.
pub fn axis_upper_bound(values: &[f64]) -> f64 {
    let max = values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(0.0f64, f64::max);
    (max * AXIS_HEADROOM).max(1.0)
}

/// Shared upper limit of a dual-axis chart: the maximum of both axes'
/// computed ranges.
pub fn shared_upper_bound(lhs: &[f64], rhs: &[f64]) -> f64 {
    axis_upper_bound(lhs).max(axis_upper_bound(rhs))
}

fn x_axis_range(points: &[(f64, f64)]) -> Range<f64> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    for (x, _) in points {
        x_min = x_min.min(*x);
        x_max = x_max.max(*x);
    }

    if !x_min.is_finite() || !x_max.is_finite() {
        return 0.0..1.0;
    }
    if x_max <= x_min {
        // Degenerate single-point sweep, widen so the axis still draws.
        return x_min..(x_min + 1.0);
    }
    x_min..x_max
}

fn draw_comparison_panel<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    caption: &str,
    x_desc: &str,
    series: &ComparisonSeries,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let x_range = x_axis_range(&series.resmgm);
    let y_max = axis_upper_bound(&series.y_values());

    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", FONT_SIZE).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(series.metric.axis_desc())
        .axis_desc_style(("sans-serif", FONT_SIZE).into_font())
        .label_style(("sans-serif", 15).into_font())
        .draw()?;

    for algorithm in Algorithm::iter_variants() {
        let color = algorithm.get_color();
        let points = series.points(algorithm);

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(STROKE_WIDTH),
            ))?
            .label(algorithm.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(STROKE_WIDTH))
            });

        chart.draw_series(
            points
                .iter()
                .map(|(x, y)| Circle::new((*x, *y), MARKER_SIZE, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_overview<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    variation: &Variation,
    panels: &[ComparisonSeries],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let areas = root.split_evenly((1, panels.len()));
    for (area, series) in areas.iter().zip(panels) {
        draw_comparison_panel(area, series.metric.label(), variation.x_desc(), series)?;
    }

    Ok(())
}

fn draw_dual_axis<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    variation: &Variation,
    primary: &ComparisonSeries,
    secondary: &ComparisonSeries,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let x_range = x_axis_range(&primary.resmgm);
    let y_max = shared_upper_bound(&primary.y_values(), &secondary.y_values());

    let mut chart = ChartBuilder::on(root)
        .caption(variation.title(), ("sans-serif", FONT_SIZE).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), 0f64..y_max)?
        .set_secondary_coord(x_range, 0f64..y_max);

    chart
        .configure_mesh()
        .x_desc(variation.x_desc())
        .y_desc(primary.metric.axis_desc())
        .axis_desc_style(("sans-serif", FONT_SIZE).into_font())
        .label_style(("sans-serif", 15).into_font())
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc(secondary.metric.axis_desc())
        .draw()?;

    for algorithm in Algorithm::iter_variants() {
        let color = algorithm.get_color();
        let points = primary.points(algorithm);

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(STROKE_WIDTH),
            ))?
            .label(format!("{} ({})", algorithm.label(), primary.metric.label()))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(STROKE_WIDTH))
            });

        chart.draw_series(
            points
                .iter()
                .map(|(x, y)| Circle::new((*x, *y), MARKER_SIZE, color.filled())),
        )?;
    }

    for algorithm in Algorithm::iter_variants() {
        let color = algorithm.get_color();
        let points = secondary.points(algorithm);

        chart
            .draw_secondary_series(DashedLineSeries::new(
                points.iter().copied(),
                8,
                4,
                color.stroke_width(STROKE_WIDTH),
            ))?
            .label(format!(
                "{} ({})",
                algorithm.label(),
                secondary.metric.label()
            ))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(STROKE_WIDTH))
            });

        chart.draw_secondary_series(
            points
                .iter()
                .map(|(x, y)| TriangleMarker::new((*x, *y), MARKER_SIZE + 1, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn output_paths(plots_dir: &Path, base_name: &str) -> (PathBuf, PathBuf) {
    let base = plots_dir.join(base_name);
    (base.with_extension("png"), base.with_extension("svg"))
}

/// One metric, one axis, two line series, saved as `<var>-<metric>.{png,svg}`.
pub fn render_metric_chart(
    variation: &Variation,
    series: &ComparisonSeries,
    plots_dir: &Path,
) -> Result<()> {
    let (png_path, svg_path) =
        output_paths(plots_dir, &format!("{variation}-{}", series.metric));

    {
        let root = BitMapBackend::new(&png_path, SINGLE_CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        draw_comparison_panel(&root, &variation.title(), variation.x_desc(), series)?;
        root.present()?;
    }
    {
        let root = SVGBackend::new(&svg_path, SINGLE_CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        draw_comparison_panel(&root, &variation.title(), variation.x_desc(), series)?;
        root.present()?;
    }

    info!("rmplot: generated plot at: {}", png_path.display());
    debug!("rmplot: generated plot at: {}", svg_path.display());

    Ok(())
}

/// Several metrics side by side over the same independent variable, saved as
/// `<var>.{png,svg}`.
pub fn render_overview_chart(
    variation: &Variation,
    panels: &[ComparisonSeries],
    plots_dir: &Path,
) -> Result<()> {
    let (png_path, svg_path) = output_paths(plots_dir, &format!("{variation}"));

    {
        let root = BitMapBackend::new(&png_path, OVERVIEW_CHART_SIZE).into_drawing_area();
        draw_overview(&root, variation, panels)?;
        root.present()?;
    }
    {
        let root = SVGBackend::new(&svg_path, OVERVIEW_CHART_SIZE).into_drawing_area();
        draw_overview(&root, variation, panels)?;
        root.present()?;
    }

    info!("rmplot: generated plot at: {}", png_path.display());
    debug!("rmplot: generated plot at: {}", svg_path.display());

    Ok(())
}

/// Two metrics with different scales over one shared independent axis, saved
/// as `<var>-<primary>-<secondary>.{png,svg}`.
pub fn render_dual_axis_chart(
    variation: &Variation,
    primary: &ComparisonSeries,
    secondary: &ComparisonSeries,
    plots_dir: &Path,
) -> Result<()> {
    let (png_path, svg_path) = output_paths(
        plots_dir,
        &format!("{variation}-{}-{}", primary.metric, secondary.metric),
    );

    {
        let root = BitMapBackend::new(&png_path, DUAL_AXIS_CHART_SIZE).into_drawing_area();
        draw_dual_axis(&root, variation, primary, secondary)?;
        root.present()?;
    }
    {
        let root = SVGBackend::new(&svg_path, DUAL_AXIS_CHART_SIZE).into_drawing_area();
        draw_dual_axis(&root, variation, primary, secondary)?;
        root.present()?;
    }

    info!("rmplot: generated plot at: {}", png_path.display());
    debug!("rmplot: generated plot at: {}", svg_path.display());

    Ok(())
}

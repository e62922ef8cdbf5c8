use crate::charts;
use crate::series::{ComparisonSeries, Metric};
use crate::table::BenchmarkTable;
use crate::variation::Variation;
use anyhow::{bail, Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Metrics shown in the per-variation overview chart, one panel each.
const OVERVIEW_METRICS: [Metric; 4] = [
    Metric::TlmRequests,
    Metric::Instructions,
    Metric::Memory,
    Metric::Time,
];

/// Generate every comparison chart for the benchmark results under
/// `results_dir`, writing the output pairs to `<results_dir>/plots/`.
///
/// A missing required sweep aborts the run; the optional hybrid-load sweep
/// is skipped when its input file is absent.
pub fn generate(results_dir: &Path) -> Result<()> {
    let plots_dir = results_dir.join("plots");
    fs::create_dir_all(&plots_dir).with_context(|| {
        format!(
            "rmplot: failed to create plots directory at {}",
            plots_dir.display()
        )
    })?;

    for variation in Variation::iter_variants() {
        let data_file = variation.data_file(results_dir);

        if !data_file.exists() {
            if variation.is_required() {
                bail!(
                    "rmplot: missing required benchmark results: {}",
                    data_file.display()
                );
            }
            debug!(
                "rmplot: no {variation} results at {}, skipping",
                data_file.display()
            );
            continue;
        }

        generate_variation(variation, &data_file, &plots_dir)?;
    }

    Ok(())
}

fn generate_variation(variation: &Variation, data_file: &Path, plots_dir: &Path) -> Result<()> {
    let columns = variation.columns();
    let table = BenchmarkTable::load(data_file, &columns)?;
    debug!(
        "rmplot: loaded {} rows from {}",
        table.num_rows(),
        data_file.display()
    );

    // One single-axis chart per metric.
    for metric in Metric::iter_variants() {
        let series = ComparisonSeries::select(&table, variation.x_column(), *metric)?;
        charts::render_metric_chart(variation, &series, plots_dir)?;
    }

    // The combined overview, all panels sharing the independent variable.
    let overview = OVERVIEW_METRICS
        .iter()
        .map(|metric| ComparisonSeries::select(&table, variation.x_column(), *metric))
        .collect::<Result<Vec<_>, _>>()?;
    charts::render_overview_chart(variation, &overview, plots_dir)?;

    // Instructions against time on the shared-bound dual axis.
    let instructions = ComparisonSeries::select(&table, variation.x_column(), Metric::Instructions)?;
    let time = ComparisonSeries::select(&table, variation.x_column(), Metric::Time)?;
    charts::render_dual_axis_chart(variation, &instructions, &time, plots_dir)?;

    Ok(())
}

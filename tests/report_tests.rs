use anyhow::Result;
use rmplot::report;
use rmplot::variation::Variation;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

// Three rows of the documented eleven-column schema; the first row is the
// one the schema documentation uses as its example.
static SWEEP_ROWS: &str = "2;10;20;100;5;50;15;25;120;6;55\n\
                           4;12;22;110;7;52;18;28;130;8;57\n\
                           8;14;24;120;9;54;21;31;140;10;59\n";

fn write_sweep(results_dir: &Path, variation: &Variation) -> Result<()> {
    let data_file = variation.data_file(results_dir);
    fs::create_dir_all(data_file.parent().unwrap())?;
    fs::write(data_file, SWEEP_ROWS)?;
    Ok(())
}

fn assert_chart_pair(plots_dir: &Path, base_name: &str) {
    for ext in ["png", "svg"] {
        let path = plots_dir.join(format!("{base_name}.{ext}"));
        assert!(path.exists(), "missing chart output: {base_name}.{ext}");
        assert!(
            fs::metadata(&path).unwrap().len() > 0,
            "empty chart output: {base_name}.{ext}"
        );
    }
}

fn assert_variation_charts(plots_dir: &Path, variation: &str) {
    assert_chart_pair(plots_dir, variation);
    for metric in ["tlm", "inst", "mem", "msg", "t"] {
        assert_chart_pair(plots_dir, &format!("{variation}-{metric}"));
    }
    assert_chart_pair(plots_dir, &format!("{variation}-inst-t"));
}

#[test]
fn test_end_to_end_generates_charts_for_required_sweeps() -> Result<()> {
    rmplot::init_logging(true);

    let temp_dir = tempdir()?;
    write_sweep(temp_dir.path(), &Variation::VarDom)?;
    write_sweep(temp_dir.path(), &Variation::VarAg)?;

    report::generate(temp_dir.path())?;

    let plots_dir = temp_dir.path().join("plots");
    assert_variation_charts(&plots_dir, "var_dom");
    assert_variation_charts(&plots_dir, "var_ag");

    // The hybrid-load sweep was absent, so none of its charts may exist.
    for entry in fs::read_dir(&plots_dir)? {
        let file_name = entry?.file_name();
        let file_name = file_name.to_string_lossy().into_owned();
        assert!(
            !file_name.starts_with("var_hyb"),
            "unexpected hybrid-sweep output: {file_name}"
        );
    }

    Ok(())
}

#[test]
fn test_hybrid_sweep_charts_are_gated_on_its_input_file() -> Result<()> {
    rmplot::init_logging(true);

    let temp_dir = tempdir()?;
    for variation in Variation::iter_variants() {
        write_sweep(temp_dir.path(), variation)?;
    }

    report::generate(temp_dir.path())?;

    assert_variation_charts(&temp_dir.path().join("plots"), "var_hyb");

    Ok(())
}

#[test]
fn test_missing_required_sweep_aborts_without_output() -> Result<()> {
    rmplot::init_logging(true);

    let temp_dir = tempdir()?;
    // Only the agent sweep is present; the tile sweep is required and absent.
    write_sweep(temp_dir.path(), &Variation::VarAg)?;

    let err = report::generate(temp_dir.path()).unwrap_err();
    assert!(err.to_string().contains("var_dom"));

    let plots_dir = temp_dir.path().join("plots");
    if plots_dir.exists() {
        assert_eq!(fs::read_dir(&plots_dir)?.count(), 0);
    }

    Ok(())
}

#[test]
fn test_rendering_the_same_input_twice_is_byte_stable() -> Result<()> {
    rmplot::init_logging(true);

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let temp_dir = tempdir()?;
        write_sweep(temp_dir.path(), &Variation::VarDom)?;
        write_sweep(temp_dir.path(), &Variation::VarAg)?;

        report::generate(temp_dir.path())?;

        let plots_dir = temp_dir.path().join("plots");
        outputs.push((
            fs::read(plots_dir.join("var_dom.svg"))?,
            fs::read(plots_dir.join("var_dom-tlm.svg"))?,
        ));
    }

    assert_eq!(outputs[0].0, outputs[1].0);
    assert_eq!(outputs[0].1, outputs[1].1);

    Ok(())
}

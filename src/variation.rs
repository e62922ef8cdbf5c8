use crate::series::{Algorithm, Metric};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A benchmark sweep dimension. Each variation has its own input file under
/// the results directory and its own set of output charts. The hybrid-load
/// sweep is optional: its charts are only produced when its input exists.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Variation {
    VarDom,
    VarAg,
    VarHyb,
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variation::VarDom => write!(f, "var_dom"),
            Variation::VarAg => write!(f, "var_ag"),
            Variation::VarHyb => write!(f, "var_hyb"),
        }
    }
}

impl FromStr for Variation {
    type Err = ();

    fn from_str(input: &str) -> Result<Variation, Self::Err> {
        match input {
            "var_dom" => Ok(Variation::VarDom),
            "var_ag" => Ok(Variation::VarAg),
            "var_hyb" => Ok(Variation::VarHyb),
            _ => Err(()),
        }
    }
}

impl Variation {
    pub fn iter_variants() -> std::slice::Iter<'static, Variation> {
        static VARIANTS: [Variation; 3] = [Variation::VarDom, Variation::VarAg, Variation::VarHyb];
        VARIANTS.iter()
    }

    /// Name of the independent-variable column in this sweep's table.
    pub fn x_column(&self) -> &'static str {
        match self {
            Variation::VarDom => "tiles",
            Variation::VarAg => "agents",
            Variation::VarHyb => "load",
        }
    }

    pub fn x_desc(&self) -> &'static str {
        match self {
            Variation::VarDom => "Number of tiles",
            Variation::VarAg => "Number of agents",
            Variation::VarHyb => "Hybrid load",
        }
    }

    pub fn title(&self) -> String {
        let sweep = match self {
            Variation::VarDom => "#Tiles",
            Variation::VarAg => "#Agents",
            Variation::VarHyb => "Hybrid load",
        };
        format!("ResMGM vs DistRM ({sweep})")
    }

    /// Required sweeps abort the run when their input is missing; optional
    /// ones are skipped.
    pub fn is_required(&self) -> bool {
        !matches!(self, Variation::VarHyb)
    }

    pub fn data_file(&self, results_dir: &Path) -> PathBuf {
        results_dir
            .join(format!("{self}"))
            .join(format!("plot-{self}.csv"))
    }

    /// The declared column schema of this sweep's table: the independent
    /// variable first, then every metric column of each algorithm.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = vec![self.x_column().to_string()];
        for algorithm in Algorithm::iter_variants() {
            for metric in Metric::iter_variants() {
                columns.push(format!("{}{}", metric.key(), algorithm.column_suffix()));
            }
        }
        columns
    }
}

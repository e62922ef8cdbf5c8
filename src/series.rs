use crate::color::get_color_from_label;
use crate::table::{BenchmarkTable, TableError};
use plotters::style::RGBColor;
use std::fmt;
use std::str::FromStr;

/// The measured metrics, one dependent column per compared algorithm. The
/// short key doubles as the column-name prefix and the output file suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Metric {
    TlmRequests,
    Instructions,
    Memory,
    Messages,
    Time,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Metric {
    type Err = ();

    fn from_str(input: &str) -> Result<Metric, Self::Err> {
        match input {
            "tlm" => Ok(Metric::TlmRequests),
            "inst" => Ok(Metric::Instructions),
            "mem" => Ok(Metric::Memory),
            "msg" => Ok(Metric::Messages),
            "t" => Ok(Metric::Time),
            _ => Err(()),
        }
    }
}

impl Metric {
    pub fn iter_variants() -> std::slice::Iter<'static, Metric> {
        static VARIANTS: [Metric; 5] = [
            Metric::TlmRequests,
            Metric::Instructions,
            Metric::Memory,
            Metric::Messages,
            Metric::Time,
        ];
        VARIANTS.iter()
    }

    pub fn key(&self) -> &'static str {
        match self {
            Metric::TlmRequests => "tlm",
            Metric::Instructions => "inst",
            Metric::Memory => "mem",
            Metric::Messages => "msg",
            Metric::Time => "t",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::TlmRequests => "TLM requests",
            Metric::Instructions => "Instructions",
            Metric::Memory => "Memory usage",
            Metric::Messages => "Messages",
            Metric::Time => "Execution time",
        }
    }

    pub fn axis_desc(&self) -> &'static str {
        match self {
            Metric::TlmRequests => "Number of TLM requests",
            Metric::Instructions => "Number of instructions",
            Metric::Memory => "Memory usage [bytes]",
            Metric::Messages => "Number of messages",
            Metric::Time => "Time [ms]",
        }
    }
}

/// The two compared resource-management algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Algorithm {
    ResMgm,
    DistRm,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::ResMgm => write!(f, "resmgm"),
            Algorithm::DistRm => write!(f, "distrm"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ();

    fn from_str(input: &str) -> Result<Algorithm, Self::Err> {
        match input {
            "resmgm" => Ok(Algorithm::ResMgm),
            "distrm" => Ok(Algorithm::DistRm),
            _ => Err(()),
        }
    }
}

impl Algorithm {
    pub fn iter_variants() -> std::slice::Iter<'static, Algorithm> {
        static VARIANTS: [Algorithm; 2] = [Algorithm::ResMgm, Algorithm::DistRm];
        VARIANTS.iter()
    }

    /// Series label as it appears in chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::ResMgm => "ResMGM",
            Algorithm::DistRm => "DistRM",
        }
    }

    /// Suffix of this algorithm's dependent columns (`{metric}{suffix}`).
    pub fn column_suffix(&self) -> &'static str {
        match self {
            Algorithm::ResMgm => "mgm",
            Algorithm::DistRm => "distrm",
        }
    }

    pub fn get_color(&self) -> RGBColor {
        match self {
            Algorithm::ResMgm => get_color_from_label("dark-red"),
            Algorithm::DistRm => get_color_from_label("dark-blue"),
        }
    }
}

/// One metric's x/y-paired series for both algorithms, selected off a loaded
/// benchmark table by the `{metric}{variant}` column-naming convention.
#[derive(Debug)]
pub struct ComparisonSeries {
    pub metric: Metric,
    pub resmgm: Vec<(f64, f64)>,
    pub distrm: Vec<(f64, f64)>,
}

impl ComparisonSeries {
    pub fn select(
        table: &BenchmarkTable,
        x_column: &str,
        metric: Metric,
    ) -> Result<Self, TableError> {
        let x = table.column(x_column)?;

        let pair = |algorithm: &Algorithm| -> Result<Vec<(f64, f64)>, TableError> {
            let column = format!("{}{}", metric.key(), algorithm.column_suffix());
            let y = table.column(&column)?;
            Ok(x.iter().copied().zip(y.iter().copied()).collect())
        };

        Ok(Self {
            metric,
            resmgm: pair(&Algorithm::ResMgm)?,
            distrm: pair(&Algorithm::DistRm)?,
        })
    }

    pub fn points(&self, algorithm: &Algorithm) -> &[(f64, f64)] {
        match algorithm {
            Algorithm::ResMgm => &self.resmgm,
            Algorithm::DistRm => &self.distrm,
        }
    }

    /// All dependent values across both algorithms, for axis scaling.
    pub fn y_values(&self) -> Vec<f64> {
        self.resmgm
            .iter()
            .chain(self.distrm.iter())
            .map(|(_, y)| *y)
            .collect()
    }
}

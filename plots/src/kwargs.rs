use derive_builder::Builder;
use hv_elements::Ticks;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of a pass-through plotting keyword
///
/// Keywords such as `alpha`, `orientation`, `vert`, `c` or `s` are specific
/// to individual chart kinds and travel untyped until a chart method reads
/// them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KwValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Array(Vec<f64>),
}

impl KwValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            KwValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            KwValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            KwValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[f64]> {
        match self {
            KwValue::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl From<bool> for KwValue {
    fn from(value: bool) -> Self {
        KwValue::Bool(value)
    }
}

impl From<f64> for KwValue {
    fn from(value: f64) -> Self {
        KwValue::Number(value)
    }
}

impl From<i32> for KwValue {
    fn from(value: i32) -> Self {
        KwValue::Number(value as f64)
    }
}

impl From<&str> for KwValue {
    fn from(value: &str) -> Self {
        KwValue::Text(value.to_string())
    }
}

impl From<String> for KwValue {
    fn from(value: String) -> Self {
        KwValue::Text(value)
    }
}

impl From<Vec<f64>> for KwValue {
    fn from(value: Vec<f64>) -> Self {
        KwValue::Array(value)
    }
}

/// The legacy plotting keyword set
///
/// Every field mirrors a conventional `plot(...)` keyword. Keywords that only
/// some chart kinds understand go into `extra` through [`PlotKwargsBuilder::kw`].
/// The struct deserializes from JSON with every field optional, which is how
/// the command-line tool reads an options file.
///
/// # Example
///
/// ```rust
/// use hv_plots::PlotKwargs;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let kwargs = PlotKwargs::new()
///     .title("Quarterly sales")
///     .grid(true)
///     .kw("alpha", 0.5)
///     .build()?;
/// assert!(kwargs.legend);
/// assert_eq!(kwargs.extra["alpha"].as_f64(), Some(0.5));
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default)]
pub struct PlotKwargs {
    /// Column for the x coordinate
    pub x: Option<String>,

    /// Column for the y coordinate
    pub y: Option<String>,

    /// Grouping column (accepted, not used for grouping)
    pub by: Option<String>,

    pub title: Option<String>,

    pub xlim: Option<(f64, f64)>,

    pub ylim: Option<(f64, f64)>,

    pub xticks: Option<Ticks>,

    pub yticks: Option<Ticks>,

    /// Tick label rotation in degrees, applied to both axes
    pub rot: Option<f64>,

    pub grid: bool,

    pub logx: bool,

    pub logy: bool,

    /// Log scale on both axes
    pub loglog: bool,

    #[builder(default = "true")]
    pub legend: bool,

    /// Colormap name; conflicts with a `cmap` keyword in `extra`
    pub colormap: Option<String>,

    pub fontsize: Option<f64>,

    /// `None` lets each chart kind pick its default (area stacks, bars do not)
    pub stacked: Option<bool>,

    pub table: bool,

    #[builder(default = "true")]
    pub use_index: bool,

    pub secondary_y: bool,

    pub sort_columns: bool,

    pub figsize: Option<(f64, f64)>,

    pub layout: Option<(usize, usize)>,

    #[builder(default = "true")]
    pub sharex: bool,

    #[builder(default = "true")]
    pub sharey: bool,

    pub subplots: bool,

    /// Histogram bin count
    pub bins: Option<usize>,

    pub xerr: Option<KwValue>,

    pub yerr: Option<KwValue>,

    /// Pass-through keywords for chart-specific behavior
    pub extra: BTreeMap<String, KwValue>,
}

impl Default for PlotKwargs {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            by: None,
            title: None,
            xlim: None,
            ylim: None,
            xticks: None,
            yticks: None,
            rot: None,
            grid: false,
            logx: false,
            logy: false,
            loglog: false,
            legend: true,
            colormap: None,
            fontsize: None,
            stacked: None,
            table: false,
            use_index: true,
            secondary_y: false,
            sort_columns: false,
            figsize: None,
            layout: None,
            sharex: true,
            sharey: true,
            subplots: false,
            bins: None,
            xerr: None,
            yerr: None,
            extra: BTreeMap::new(),
        }
    }
}

impl PlotKwargs {
    /// Create a new builder for PlotKwargs
    pub fn new() -> PlotKwargsBuilder {
        PlotKwargsBuilder::default()
    }
}

impl PlotKwargsBuilder {
    /// Add a pass-through keyword
    pub fn kw(&mut self, key: impl Into<String>, value: impl Into<KwValue>) -> &mut Self {
        self.extra
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Tick placement for one axis
///
/// Either a number of ticks to place automatically or explicit positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ticks {
    Count(usize),
    Positions(Vec<f64>),
}

impl From<usize> for Ticks {
    fn from(count: usize) -> Self {
        Ticks::Count(count)
    }
}

impl From<Vec<f64>> for Ticks {
    fn from(positions: Vec<f64>) -> Self {
        Ticks::Positions(positions)
    }
}

/// Structural plot options attached to an element
///
/// These control axes, legends and how dimensions map onto visual channels
/// (stacking, color, marker size). Cosmetic settings live in [`StyleOpts`].
///
/// # Example
///
/// ```rust
/// use hv_elements::options::PlotOpts;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let opts = PlotOpts::new()
///     .show_grid(true)
///     .logy(true)
///     .xrotation(45.0)
///     .build()?;
/// assert!(opts.shared_axes);
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
pub struct PlotOpts {
    /// X-axis ticks
    pub xticks: Option<Ticks>,

    /// Y-axis ticks
    pub yticks: Option<Ticks>,

    /// Rotation of x tick labels in degrees
    pub xrotation: Option<f64>,

    /// Rotation of y tick labels in degrees
    pub yrotation: Option<f64>,

    pub show_grid: bool,

    pub logx: bool,

    pub logy: bool,

    /// Whether axes are linked with other plots in a layout
    #[builder(default = "true")]
    pub shared_axes: bool,

    #[builder(default = "true")]
    pub show_legend: bool,

    /// Swap the x and y axes (horizontal bars, horizontal histograms)
    pub invert_axes: bool,

    /// Position of the key dimension that bars are stacked by
    pub stack_index: Option<usize>,

    /// Value dimension mapped onto color
    pub color_index: Option<String>,

    pub colorbar: bool,

    /// Value dimension mapped onto marker size
    pub size_index: Option<String>,
}

impl Default for PlotOpts {
    fn default() -> Self {
        Self {
            xticks: None,
            yticks: None,
            xrotation: None,
            yrotation: None,
            show_grid: false,
            logx: false,
            logy: false,
            shared_axes: true,
            show_legend: true,
            invert_axes: false,
            stack_index: None,
            color_index: None,
            colorbar: false,
            size_index: None,
        }
    }
}

impl PlotOpts {
    /// Create a new builder for PlotOpts
    pub fn new() -> PlotOptsBuilder {
        PlotOptsBuilder::default()
    }
}

/// Rendering-level cosmetics attached to an element
#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
pub struct StyleOpts {
    pub fontsize: Option<f64>,

    /// Colormap name
    pub cmap: Option<String>,

    pub alpha: Option<f64>,

    /// Fixed marker size
    pub size: Option<f64>,

    pub color: Option<String>,
}

impl StyleOpts {
    /// Create a new builder for StyleOpts
    pub fn new() -> StyleOptsBuilder {
        StyleOptsBuilder::default()
    }
}

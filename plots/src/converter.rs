use crate::error::{PlotError, Result};
use crate::kwargs::{KwValue, PlotKwargs};
use hv_elements::{Chart, PlotOpts, StyleOpts};
use std::collections::BTreeMap;
use tracing::warn;

/// Default histogram bin count
pub const DEFAULT_BINS: usize = 10;

/// Label and title metadata for the produced chart
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementParams {
    pub label: Option<String>,
}

/// Explicit axis limits
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DimRanges {
    pub x: Option<(f64, f64)>,
    pub y: Option<(f64, f64)>,
}

/// Error bar input, kept but not drawn
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorBars {
    pub xerr: Option<KwValue>,
    pub yerr: Option<KwValue>,
}

/// Option translator
///
/// Normalizes the legacy plotting keywords into the plot options, element
/// parameters, style options and dimension ranges the element constructors
/// consume. Chart methods never mutate these; each takes its own copy of the
/// plot and style options.
#[derive(Clone, Debug)]
pub struct Converter {
    pub(crate) plot_opts: PlotOpts,
    pub(crate) element_params: ElementParams,
    pub(crate) dim_ranges: DimRanges,
    pub(crate) style_opts: StyleOpts,

    pub stacked: bool,
    pub table: bool,
    pub use_index: bool,
    pub secondary_y: bool,
    pub sort_columns: bool,
    pub subplots: bool,
    pub legend: bool,
    pub figsize: Option<(f64, f64)>,
    pub layout: Option<(usize, usize)>,
    pub bins: usize,
    pub errors: ErrorBars,

    kwds: BTreeMap<String, KwValue>,
}

impl Converter {
    /// Translate a keyword set
    ///
    /// # Errors
    /// Returns `PlotError::ConfigError` if both `colormap` and a `cmap`
    /// keyword are given
    pub fn new(kwargs: PlotKwargs) -> Result<Self> {
        let PlotKwargs {
            title,
            xlim,
            ylim,
            xticks,
            yticks,
            rot,
            grid,
            logx,
            logy,
            loglog,
            legend,
            colormap,
            fontsize,
            stacked,
            table,
            use_index,
            secondary_y,
            sort_columns,
            figsize,
            layout,
            sharex,
            sharey,
            subplots,
            bins,
            xerr,
            yerr,
            mut extra,
            ..
        } = kwargs;

        let cmap = match (extra.remove("cmap"), colormap) {
            (Some(_), Some(_)) => {
                return Err(PlotError::config(
                    "Only specify one of `cmap` and `colormap`.",
                ));
            }
            (Some(KwValue::Text(cmap)), None) => Some(cmap),
            (Some(_), None) => return Err(PlotError::invalid_keyword("cmap", "a colormap name")),
            (None, colormap) => colormap,
        };

        // Cannot be controlled per axis
        let shared_axes = sharex && sharey;

        let plot_opts = PlotOpts {
            xticks,
            yticks,
            xrotation: rot,
            yrotation: rot,
            show_grid: grid,
            logx: logx || loglog,
            logy: logy || loglog,
            shared_axes,
            show_legend: legend,
            ..PlotOpts::default()
        };
        let style_opts = StyleOpts {
            fontsize,
            cmap,
            ..StyleOpts::default()
        };

        if xerr.is_some() || yerr.is_some() {
            warn!("error bars are accepted but not drawn");
        }
        if secondary_y {
            warn!("secondary_y is not supported, plotting on the primary axis");
        }
        if subplots {
            warn!("subplots is not supported, plotting on a single set of axes");
        }

        Ok(Self {
            plot_opts,
            element_params: ElementParams { label: title },
            dim_ranges: DimRanges { x: xlim, y: ylim },
            style_opts,
            stacked: stacked.unwrap_or(false),
            table,
            use_index,
            secondary_y,
            sort_columns,
            subplots,
            legend,
            figsize,
            layout,
            bins: bins.unwrap_or(DEFAULT_BINS),
            errors: ErrorBars { xerr, yerr },
            kwds: extra,
        })
    }

    pub fn plot_opts(&self) -> &PlotOpts {
        &self.plot_opts
    }

    pub fn style_opts(&self) -> &StyleOpts {
        &self.style_opts
    }

    pub fn element_params(&self) -> &ElementParams {
        &self.element_params
    }

    pub fn dim_ranges(&self) -> &DimRanges {
        &self.dim_ranges
    }

    /// Raw pass-through keyword
    pub fn kw(&self, key: &str) -> Option<&KwValue> {
        self.kwds.get(key)
    }

    pub(crate) fn kw_bool(&self, key: &str, default: bool) -> Result<bool> {
        match self.kw(key) {
            None => Ok(default),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| PlotError::invalid_keyword(key, "a boolean")),
        }
    }

    pub(crate) fn kw_f64(&self, key: &str, default: f64) -> Result<f64> {
        match self.kw(key) {
            None => Ok(default),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| PlotError::invalid_keyword(key, "a number")),
        }
    }

    pub(crate) fn kw_str(&self, key: &str) -> Result<Option<&str>> {
        match self.kw(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| PlotError::invalid_keyword(key, "a string")),
        }
    }

    /// Options shared by histogram and density charts: `alpha` (default 1)
    /// as style, and inverted axes for `orientation = "horizontal"`
    pub(crate) fn distribution_opts(&self) -> Result<(PlotOpts, StyleOpts)> {
        let mut plot_opts = self.plot_opts.clone();
        plot_opts.invert_axes = self.kw_str("orientation")? == Some("horizontal");
        let style_opts = StyleOpts {
            alpha: Some(self.kw_f64("alpha", 1.0)?),
            ..self.style_opts.clone()
        };
        Ok((plot_opts, style_opts))
    }

    /// Apply axis limits to every element and the title to the chart
    pub(crate) fn finalize(&self, chart: Chart) -> Chart {
        let DimRanges { x, y } = self.dim_ranges;
        let chart = if x.is_some() || y.is_some() {
            chart.map_elements(|e| e.with_ranges(x, y))
        } else {
            chart
        };
        match &self.element_params.label {
            Some(title) if chart.label().is_empty() => chart.with_label(title.clone()),
            _ => chart,
        }
    }
}

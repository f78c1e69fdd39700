use crate::accessor::{FRAME_KINDS, PlotMethods};
use crate::converter::Converter;
use crate::data::{PlotFrame, melt};
use crate::error::{PlotError, Result};
use crate::kind::PlotKind;
use crate::kwargs::PlotKwargs;
use hv_elements::{Chart, Element, NdOverlay, Overlay, PlotOpts, histogram};
use polars::prelude::*;
use tracing::{debug, warn};

/// Group label column of the long-form reshape
pub const GROUP_DIM: &str = "Group";

/// Value column of the long-form reshape
pub const VALUE_DIM: &str = "Value";

/// Column injected into scatter data for per-point marker sizes
pub const SIZE_VAR: &str = "size_var";

/// Chart methods for multi-column data
///
/// Holds the frame by reference together with the translated options; every
/// method builds a fresh chart and leaves both untouched.
pub struct FrameConverter<'a> {
    data: &'a PlotFrame,
    converter: Converter,
}

impl<'a> FrameConverter<'a> {
    pub fn new(data: &'a PlotFrame, kwargs: PlotKwargs) -> Result<Self> {
        Ok(Self {
            data,
            converter: Converter::new(kwargs)?,
        })
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Dispatch to the chart method for `kind`
    pub fn call(&self, kind: PlotKind, x: Option<&str>, y: Option<&str>) -> Result<Chart> {
        debug!(%kind, ?x, ?y, columns = self.data.data().width(), "building frame chart");
        let chart = match kind {
            PlotKind::Line => self.line(x, y),
            PlotKind::Bar => self.bar(x, y),
            PlotKind::Barh => self.barh(x, y),
            PlotKind::Box => self.box_plot(x, y),
            PlotKind::Hist => self.hist(),
            PlotKind::Kde => self.kde(),
            PlotKind::Area => self.area(x, y),
            PlotKind::Scatter => self.scatter(x, y),
        }?;
        Ok(self.converter.finalize(chart))
    }

    /// Data columns in plotting order
    fn columns(&self) -> Vec<String> {
        let mut columns = self.data.column_names();
        if self.converter.sort_columns {
            columns.sort();
        }
        columns
    }

    /// The data with its index reset into the first column, and that
    /// column's name. Without `use_index` a positional index stands in.
    fn indexed(&self) -> Result<(String, DataFrame)> {
        let positional;
        let frame = if self.converter.use_index {
            self.data
        } else {
            positional = PlotFrame::new(self.data.data().clone());
            &positional
        };
        let index = frame.index_column_name();
        let df = frame.reset_index()?;
        let order: Vec<String> = std::iter::once(index.clone())
            .chain(self.columns())
            .collect();
        Ok((index, df.select(order)?))
    }

    /// Curve over (x, y), or one curve per column against the index
    pub fn line(&self, x: Option<&str>, y: Option<&str>) -> Result<Chart> {
        let plot_opts = self.converter.plot_opts.clone();
        let style_opts = self.converter.style_opts.clone();
        if let (Some(x), Some(y)) = (x, y) {
            let curve = Element::curve(self.data.data().clone(), [x], [y])?;
            return Ok(curve.opts(plot_opts, style_opts).into());
        }

        let (index, df) = self.indexed()?;
        let curves = self
            .columns()
            .into_iter()
            .map(|column| {
                let curve = Element::curve(df.clone(), [index.as_str()], [column.as_str()])?
                    .opts(plot_opts.clone(), style_opts.clone());
                Ok((column, curve))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(NdOverlay::new(curves).into())
    }

    /// Bars over (x, y), or grouped bars of the long-form data
    pub fn bar(&self, x: Option<&str>, y: Option<&str>) -> Result<Chart> {
        self.bar_with(x, y, self.converter.plot_opts.clone())
    }

    /// Horizontal bars: vertical bars with inverted axes
    pub fn barh(&self, x: Option<&str>, y: Option<&str>) -> Result<Chart> {
        let mut plot_opts = self.converter.plot_opts.clone();
        plot_opts.invert_axes = true;
        self.bar_with(x, y, plot_opts)
    }

    fn bar_with(&self, x: Option<&str>, y: Option<&str>, mut plot_opts: PlotOpts) -> Result<Chart> {
        let style_opts = self.converter.style_opts.clone();
        if let (Some(x), Some(y)) = (x, y) {
            let bars = Element::bars(self.data.data().clone(), [x], [y])?;
            return Ok(bars.opts(plot_opts, style_opts).into());
        }

        let (index, df) = self.indexed()?;
        let long = melt(&df, &index, GROUP_DIM, VALUE_DIM)?;
        // Stack on the group dimension, the second key dimension
        plot_opts.stack_index = self.converter.stacked.then_some(1);
        let bars = Element::bars(long, [index.as_str(), GROUP_DIM], [VALUE_DIM])?;
        Ok(bars.opts(plot_opts, style_opts).into())
    }

    /// Box-and-whisker of (x, y), or of every column grouped by name
    pub fn box_plot(&self, x: Option<&str>, y: Option<&str>) -> Result<Chart> {
        let mut plot_opts = self.converter.plot_opts.clone();
        plot_opts.invert_axes = !self.converter.kw_bool("vert", true)?;
        let style_opts = self.converter.style_opts.clone();
        if let (Some(x), Some(y)) = (x, y) {
            let boxes = Element::box_whisker(self.data.data().clone(), [x], [y])?;
            return Ok(boxes.opts(plot_opts, style_opts).into());
        }

        let (index, df) = self.indexed()?;
        let long = melt(&df, &index, GROUP_DIM, VALUE_DIM)?;
        let boxes = Element::box_whisker(long, [GROUP_DIM], [VALUE_DIM])?;
        Ok(boxes.opts(plot_opts, style_opts).into())
    }

    /// One histogram per column
    pub fn hist(&self) -> Result<Chart> {
        let (plot_opts, style_opts) = self.converter.distribution_opts()?;
        let hists = self
            .columns()
            .into_iter()
            .map(|column| {
                let hist = histogram(self.data.data(), &column, self.converter.bins)?
                    .opts(plot_opts.clone(), style_opts.clone());
                Ok((column, hist))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(NdOverlay::new(hists).into())
    }

    /// One density distribution per column
    pub fn kde(&self) -> Result<Chart> {
        let (plot_opts, style_opts) = self.converter.distribution_opts()?;
        let distributions = self
            .columns()
            .into_iter()
            .map(|column| {
                let distribution = Element::distribution(self.data.data().clone(), &column)?
                    .opts(plot_opts.clone(), style_opts.clone());
                Ok((column, distribution))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(NdOverlay::new(distributions).into())
    }

    /// Filled area over (x, y), or one area per column, stacked if requested
    pub fn area(&self, x: Option<&str>, y: Option<&str>) -> Result<Chart> {
        let plot_opts = self.converter.plot_opts.clone();
        let style_opts = self.converter.style_opts.clone();
        if let (Some(x), Some(y)) = (x, y) {
            let area = Element::area(self.data.data().clone(), [x], [y])?;
            return Ok(area.opts(plot_opts, style_opts).into());
        }

        let (index, df) = self.indexed()?;
        let areas = self
            .columns()
            .into_iter()
            .map(|column| {
                Ok(
                    Element::area(df.clone(), [index.as_str()], [column.as_str()])?
                        .with_label(column)
                        .opts(plot_opts.clone(), style_opts.clone()),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let overlay = Overlay::new(areas);
        if self.converter.stacked {
            Ok(overlay.stack_areas()?.into())
        } else {
            Ok(overlay.into())
        }
    }

    /// Points over (x, y)
    ///
    /// `c` names a column mapped onto color, `color` fixes a single color.
    /// `s` is the marker area: a number gives every point the same size, an
    /// array gives one size per row and is added to a copy of the data as
    /// [`SIZE_VAR`]. Sizes are square-rooted since the marker area, not its
    /// radius, should scale with the given value.
    pub fn scatter(&self, x: Option<&str>, y: Option<&str>) -> Result<Chart> {
        let x = x.ok_or_else(|| PlotError::missing_coordinates(PlotKind::Scatter, "x"))?;
        let y = y.ok_or_else(|| PlotError::missing_coordinates(PlotKind::Scatter, "y"))?;

        let mut data = self.data.data().clone();
        let mut vdims = vec![y.to_string()];
        let mut plot_opts = self.converter.plot_opts.clone();
        let mut style_opts = self.converter.style_opts.clone();

        if let Some(color) = self.converter.kw_str("color")? {
            style_opts.color = Some(color.to_string());
        }
        if let Some(c) = self.converter.kw_str("c")? {
            plot_opts.color_index = Some(c.to_string());
            plot_opts.colorbar = true;
            vdims.push(c.to_string());
        }
        if let Some(s) = self.converter.kw("s") {
            if let Some(size) = s.as_f64() {
                style_opts.size = Some(size.sqrt());
            } else if let Some(sizes) = s.as_array() {
                let sizes: Vec<f64> = sizes.iter().map(|s| s.sqrt()).collect();
                data.with_column(Column::new(SIZE_VAR.into(), sizes))?;
                plot_opts.size_index = Some(SIZE_VAR.to_string());
                vdims.push(SIZE_VAR.to_string());
            } else {
                return Err(PlotError::invalid_keyword(
                    "s",
                    "a number or an array of numbers",
                ));
            }
        }
        let label = self.converter.kw_str("label")?.unwrap_or_default().to_string();

        let scatter = Element::scatter(data, [x], vdims)?
            .with_label(label)
            .opts(plot_opts, style_opts);
        Ok(scatter.into())
    }
}

/// Plotting accessor for a [`PlotFrame`]
pub struct FramePlotMethods<'a> {
    data: &'a PlotFrame,
}

impl<'a> FramePlotMethods<'a> {
    pub fn new(data: &'a PlotFrame) -> Self {
        Self { data }
    }

    /// Scatter plot of `y` against `x`
    pub fn scatter(&self, x: &str, y: &str, mut kwargs: PlotKwargs) -> Result<Chart> {
        kwargs.x = Some(x.to_string());
        kwargs.y = Some(y.to_string());
        self.call(PlotKind::Scatter, kwargs)
    }
}

impl PlotMethods for FramePlotMethods<'_> {
    fn supported_kinds(&self) -> &'static [PlotKind] {
        FRAME_KINDS
    }

    fn call(&self, kind: PlotKind, kwargs: PlotKwargs) -> Result<Chart> {
        if !self.supports(kind) {
            return Err(PlotError::unsupported_kind(kind, "frame"));
        }
        if let Some(by) = &kwargs.by {
            warn!(by = %by, "grouping by a column is not supported, ignoring `by`");
        }
        let x = kwargs.x.clone();
        let y = kwargs.y.clone();
        FrameConverter::new(self.data, kwargs)?.call(kind, x.as_deref(), y.as_deref())
    }

    /// Area plots of frames stack unless told otherwise
    fn area(&self, mut kwargs: PlotKwargs) -> Result<Chart> {
        kwargs.stacked.get_or_insert(true);
        self.call(PlotKind::Area, kwargs)
    }
}

impl PlotFrame {
    /// Plotting accessor for this frame
    pub fn plot(&self) -> FramePlotMethods<'_> {
        FramePlotMethods::new(self)
    }
}

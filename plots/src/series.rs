use crate::accessor::{PlotMethods, SERIES_KINDS};
use crate::converter::Converter;
use crate::data::PlotSeries;
use crate::error::{PlotError, Result};
use crate::frame::VALUE_DIM;
use crate::kind::PlotKind;
use crate::kwargs::PlotKwargs;
use hv_elements::{Chart, Dimension, Element, PlotOpts, histogram};
use tracing::debug;

/// Chart methods for single-column data
pub struct SeriesConverter<'a> {
    data: &'a PlotSeries,
    converter: Converter,
}

impl<'a> SeriesConverter<'a> {
    pub fn new(data: &'a PlotSeries, kwargs: PlotKwargs) -> Result<Self> {
        Ok(Self {
            data,
            converter: Converter::new(kwargs)?,
        })
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Dispatch to the chart method for `kind`
    pub fn call(&self, kind: PlotKind) -> Result<Chart> {
        debug!(%kind, label = %self.data.label(), len = self.data.len(), "building series chart");
        let chart = match kind {
            PlotKind::Line => self.line(),
            PlotKind::Bar => self.bar(),
            PlotKind::Barh => self.barh(),
            PlotKind::Box => self.box_plot(),
            PlotKind::Hist => self.hist(),
            PlotKind::Kde => self.kde(),
            PlotKind::Area => self.area(),
            PlotKind::Scatter => Err(PlotError::unsupported_kind(kind, "series")),
        }?;
        Ok(self.converter.finalize(chart))
    }

    /// Curve of the values against the index
    pub fn line(&self) -> Result<Chart> {
        let df = self.data.reset_index()?;
        let curve = Element::curve(
            df,
            [self.data.index_column_name()],
            [self.data.column_name()],
        )?;
        Ok(curve
            .opts(
                self.converter.plot_opts.clone(),
                self.converter.style_opts.clone(),
            )
            .into())
    }

    pub fn bar(&self) -> Result<Chart> {
        self.bar_with(self.converter.plot_opts.clone())
    }

    /// Horizontal bars: vertical bars with inverted axes
    pub fn barh(&self) -> Result<Chart> {
        let mut plot_opts = self.converter.plot_opts.clone();
        plot_opts.invert_axes = true;
        self.bar_with(plot_opts)
    }

    /// Bars of the values against the index
    ///
    /// A timestamp label does not make a usable dimension name: the value
    /// column is renamed to `Value` and the timestamp becomes the chart label.
    fn bar_with(&self, plot_opts: PlotOpts) -> Result<Chart> {
        let mut df = self.data.reset_index()?;
        let x = self.data.index_column_name();
        let mut y = self.data.column_name();
        let mut label = String::new();
        if self.data.label().is_timestamp() {
            label = y.clone();
            df.rename(&y, VALUE_DIM.into())?;
            y = VALUE_DIM.to_string();
        }
        let bars = Element::bars(df, [x], [y])?
            .with_label(label)
            .opts(plot_opts, self.converter.style_opts.clone());
        Ok(bars.into())
    }

    /// Box-and-whisker of the values, no key dimension
    pub fn box_plot(&self) -> Result<Chart> {
        let mut plot_opts = self.converter.plot_opts.clone();
        plot_opts.invert_axes = !self.converter.kw_bool("vert", true)?;
        let boxes = Element::box_whisker(
            self.data.to_frame()?,
            Vec::<Dimension>::new(),
            [self.data.column_name()],
        )?;
        Ok(boxes
            .opts(plot_opts, self.converter.style_opts.clone())
            .into())
    }

    pub fn hist(&self) -> Result<Chart> {
        let (plot_opts, style_opts) = self.converter.distribution_opts()?;
        let hist = histogram(
            &self.data.to_frame()?,
            &self.data.column_name(),
            self.converter.bins,
        )?;
        Ok(hist.opts(plot_opts, style_opts).into())
    }

    pub fn kde(&self) -> Result<Chart> {
        let (plot_opts, style_opts) = self.converter.distribution_opts()?;
        let distribution = Element::distribution(self.data.to_frame()?, self.data.column_name())?;
        Ok(distribution.opts(plot_opts, style_opts).into())
    }

    /// Filled area of the values against the index
    pub fn area(&self) -> Result<Chart> {
        let df = self.data.reset_index()?;
        let area = Element::area(
            df,
            [self.data.index_column_name()],
            [self.data.column_name()],
        )?;
        Ok(area
            .opts(
                self.converter.plot_opts.clone(),
                self.converter.style_opts.clone(),
            )
            .into())
    }
}

/// Plotting accessor for a [`PlotSeries`]
pub struct SeriesPlotMethods<'a> {
    data: &'a PlotSeries,
}

impl<'a> SeriesPlotMethods<'a> {
    pub fn new(data: &'a PlotSeries) -> Self {
        Self { data }
    }
}

impl PlotMethods for SeriesPlotMethods<'_> {
    fn supported_kinds(&self) -> &'static [PlotKind] {
        SERIES_KINDS
    }

    fn call(&self, kind: PlotKind, kwargs: PlotKwargs) -> Result<Chart> {
        if !self.supports(kind) {
            return Err(PlotError::unsupported_kind(kind, "series"));
        }
        SeriesConverter::new(self.data, kwargs)?.call(kind)
    }
}

impl PlotSeries {
    /// Plotting accessor for this series
    pub fn plot(&self) -> SeriesPlotMethods<'_> {
        SeriesPlotMethods::new(self)
    }
}

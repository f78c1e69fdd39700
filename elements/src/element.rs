use crate::dimension::Dimension;
use crate::error::{ElementError, Result};
use crate::options::{PlotOpts, StyleOpts};
use crate::stats::density::KernelDensity;
use polars::prelude::*;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};

/// Element type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize)]
pub enum ElementKind {
    /// Continuous line over a key dimension
    Curve,
    /// Categorical bars, optionally grouped or stacked
    Bars,
    /// Box-and-whisker summary of a value dimension
    BoxWhisker,
    /// Pre-binned frequency counts
    Histogram,
    /// Raw samples rendered as a density estimate
    Distribution,
    /// Filled area between a value dimension and a baseline
    Area,
    /// Individual points
    Scatter,
}

/// A single chart primitive
///
/// An element owns its data as a polars `DataFrame`, the key and value
/// dimensions selecting columns of that frame, a label and the plot and
/// style options to render it with. Construction fails if any dimension is
/// not a column of the data.
///
/// # Example
///
/// ```rust
/// use hv_elements::Element;
/// use polars::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let df = DataFrame::new(vec![
///     Column::new("x".into(), vec![1.0, 2.0, 3.0]),
///     Column::new("y".into(), vec![2.0, 4.0, 8.0]),
/// ])?;
/// let curve = Element::curve(df, ["x"], ["y"])?.with_label("growth");
/// assert_eq!(curve.label(), "growth");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Element {
    kind: ElementKind,
    data: DataFrame,
    kdims: Vec<Dimension>,
    vdims: Vec<Dimension>,
    label: String,
    plot_opts: PlotOpts,
    style_opts: StyleOpts,
}

impl Element {
    pub fn new<K, V>(kind: ElementKind, data: DataFrame, kdims: K, vdims: V) -> Result<Self>
    where
        K: IntoIterator,
        K::Item: Into<Dimension>,
        V: IntoIterator,
        V::Item: Into<Dimension>,
    {
        let kdims: Vec<Dimension> = kdims.into_iter().map(Into::into).collect();
        let vdims: Vec<Dimension> = vdims.into_iter().map(Into::into).collect();

        for dim in kdims.iter().chain(vdims.iter()) {
            if data.column(&dim.name).is_err() {
                return Err(ElementError::missing_dimension(&dim.name, kind.as_ref()));
            }
        }

        Ok(Self {
            kind,
            data,
            kdims,
            vdims,
            label: String::new(),
            plot_opts: PlotOpts::default(),
            style_opts: StyleOpts::default(),
        })
    }

    pub fn curve<K, V>(data: DataFrame, kdims: K, vdims: V) -> Result<Self>
    where
        K: IntoIterator,
        K::Item: Into<Dimension>,
        V: IntoIterator,
        V::Item: Into<Dimension>,
    {
        Self::new(ElementKind::Curve, data, kdims, vdims)
    }

    pub fn bars<K, V>(data: DataFrame, kdims: K, vdims: V) -> Result<Self>
    where
        K: IntoIterator,
        K::Item: Into<Dimension>,
        V: IntoIterator,
        V::Item: Into<Dimension>,
    {
        Self::new(ElementKind::Bars, data, kdims, vdims)
    }

    pub fn box_whisker<K, V>(data: DataFrame, kdims: K, vdims: V) -> Result<Self>
    where
        K: IntoIterator,
        K::Item: Into<Dimension>,
        V: IntoIterator,
        V::Item: Into<Dimension>,
    {
        Self::new(ElementKind::BoxWhisker, data, kdims, vdims)
    }

    pub fn histogram<K, V>(data: DataFrame, kdims: K, vdims: V) -> Result<Self>
    where
        K: IntoIterator,
        K::Item: Into<Dimension>,
        V: IntoIterator,
        V::Item: Into<Dimension>,
    {
        Self::new(ElementKind::Histogram, data, kdims, vdims)
    }

    /// A distribution over the samples of a single key dimension
    pub fn distribution(data: DataFrame, dimension: impl Into<Dimension>) -> Result<Self> {
        Self::new(
            ElementKind::Distribution,
            data,
            [dimension.into()],
            Vec::<Dimension>::new(),
        )
    }

    pub fn area<K, V>(data: DataFrame, kdims: K, vdims: V) -> Result<Self>
    where
        K: IntoIterator,
        K::Item: Into<Dimension>,
        V: IntoIterator,
        V::Item: Into<Dimension>,
    {
        Self::new(ElementKind::Area, data, kdims, vdims)
    }

    pub fn scatter<K, V>(data: DataFrame, kdims: K, vdims: V) -> Result<Self>
    where
        K: IntoIterator,
        K::Item: Into<Dimension>,
        V: IntoIterator,
        V::Item: Into<Dimension>,
    {
        Self::new(ElementKind::Scatter, data, kdims, vdims)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_plot_opts(mut self, plot_opts: PlotOpts) -> Self {
        self.plot_opts = plot_opts;
        self
    }

    pub fn with_style_opts(mut self, style_opts: StyleOpts) -> Self {
        self.style_opts = style_opts;
        self
    }

    /// Apply plot and style options in one call
    pub fn opts(self, plot_opts: PlotOpts, style_opts: StyleOpts) -> Self {
        self.with_plot_opts(plot_opts).with_style_opts(style_opts)
    }

    /// Set display ranges on the first key dimension (x) and the first value
    /// dimension (y). Elements without a value dimension take the y range on
    /// nothing.
    pub fn with_ranges(mut self, x: Option<(f64, f64)>, y: Option<(f64, f64)>) -> Self {
        if let Some(kdim) = self.kdims.first_mut() {
            *kdim = kdim.clone().with_range(x);
        }
        if let Some(vdim) = self.vdims.first_mut() {
            *vdim = vdim.clone().with_range(y);
        }
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn kdims(&self) -> &[Dimension] {
        &self.kdims
    }

    pub fn vdims(&self) -> &[Dimension] {
        &self.vdims
    }

    pub fn kdim_names(&self) -> Vec<&str> {
        self.kdims.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn vdim_names(&self) -> Vec<&str> {
        self.vdims.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn plot_opts(&self) -> &PlotOpts {
        &self.plot_opts
    }

    pub fn style_opts(&self) -> &StyleOpts {
        &self.style_opts
    }

    /// Values of a dimension cast to `f64`; nulls stay `None`
    ///
    /// # Errors
    /// Will return `Err` if the column is missing or cannot be cast to a float
    pub fn dimension_values(&self, name: &str) -> Result<Vec<Option<f64>>> {
        column_f64(&self.data, name)
    }

    /// Evaluate the kernel density estimate of a distribution element
    ///
    /// # Errors
    /// Will return `Err` for any element that is not a `Distribution`, or when
    /// the samples are too few for a density estimate
    pub fn kde(&self, n_points: usize) -> Result<KernelDensity> {
        if self.kind != ElementKind::Distribution {
            return Err(ElementError::invalid_data(format!(
                "density estimate requested on a {} element",
                self.kind
            )));
        }
        let dim = self
            .kdims
            .first()
            .ok_or_else(|| ElementError::invalid_data("distribution has no key dimension"))?;
        let samples: Vec<f64> = self
            .dimension_values(&dim.name)?
            .into_iter()
            .flatten()
            .collect();
        KernelDensity::estimate(&samples, 1.0, n_points)
    }
}

/// Read a column of a frame as `f64` values
pub(crate) fn column_f64(data: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let casted = data.column(name)?.cast(&DataType::Float64)?;
    let values = casted.f64()?;
    Ok(values.into_iter().collect())
}

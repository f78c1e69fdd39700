//! # hv-plots
//!
//! A plotting backend that renders polars data through declarative chart
//! elements instead of drawing directly.
//!
//! ## Overview
//!
//! A conventional `plot(kind = ...)` call with the legacy keyword set
//! (axis limits, log scales, legend, grid, colormap, font size, stacking,
//! ...) is translated into constructor calls on the `hv-elements` primitives:
//! curves, bars, box-whiskers, histograms, distributions, areas and scatters,
//! combined into overlays where a frame has several columns.
//!
//! ## Basic Usage
//!
//! ```rust
//! use hv_plots::{PlotFrame, PlotKwargs, PlotMethods};
//! use polars::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let df = DataFrame::new(vec![
//!     Column::new("A".into(), vec![1.0, 2.0, 3.0]),
//!     Column::new("B".into(), vec![3.0, 1.0, 2.0]),
//! ])?;
//! let frame = PlotFrame::new(df);
//!
//! let kwargs = PlotKwargs::new().title("Two series").grid(true).build()?;
//! let chart = frame.plot().line(kwargs)?;
//! assert_eq!(chart.as_nd_overlay().map(|o| o.len()), Some(2));
//!
//! let bars = frame.plot().call_named("bar", PlotKwargs::default())?;
//! println!("{}", bars.to_json_string()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `converter`: the option translator turning keywords into plot options,
//!   element parameters, style options and axis ranges
//! - `frame`: chart methods and the accessor for multi-column data
//! - `series`: chart methods and the accessor for single-column data
//! - `accessor`: the shared [`PlotMethods`] interface and the engine registry
//! - `data`: frames and series with an explicit row index, index reset and melt
//! - `kind`: the closed set of chart kinds
//! - `kwargs`: the keyword set, buildable in code or deserializable from JSON

pub mod accessor;
pub mod converter;
pub mod data;
pub mod error;
pub mod frame;
pub mod kind;
pub mod kwargs;
pub mod series;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use accessor::{ENGINE_NAME, EngineInfo, PlotMethods, engine, engine_names};
pub use converter::{Converter, DimRanges, ElementParams, ErrorBars};
pub use data::{Index, Label, PlotFrame, PlotSeries, melt};
pub use error::{PlotError, Result};
pub use frame::{FrameConverter, FramePlotMethods, GROUP_DIM, SIZE_VAR, VALUE_DIM};
pub use hv_elements::{Chart, Element, ElementKind, NdOverlay, Overlay, PlotOpts, StyleOpts};
pub use kind::PlotKind;
pub use kwargs::{KwValue, PlotKwargs, PlotKwargsBuilder};
pub use series::{SeriesConverter, SeriesPlotMethods};

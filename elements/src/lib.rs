//! # hv-elements
//!
//! Declarative chart elements backed by polars data.
//!
//! ## Overview
//!
//! An [`Element`] couples a polars `DataFrame` with the key dimensions
//! (independent axes) and value dimensions (measured quantities) that select
//! its columns, a label, and plot and style options. Elements compose into
//! overlays: an [`Overlay`] layers elements in drawing order and an
//! [`NdOverlay`] keys them by name. Nothing here renders; a [`Chart`]
//! serializes to a JSON description for a downstream renderer.
//!
//! ## Basic Usage
//!
//! ```rust
//! use hv_elements::{Chart, Element, NdOverlay, PlotOpts};
//! use polars::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let df = DataFrame::new(vec![
//!     Column::new("t".into(), vec![0.0, 1.0, 2.0]),
//!     Column::new("a".into(), vec![1.0, 3.0, 2.0]),
//!     Column::new("b".into(), vec![2.0, 2.5, 4.0]),
//! ])?;
//! let opts = PlotOpts::new().show_grid(true).build()?;
//! let overlay = NdOverlay::new(vec![
//!     ("a", Element::curve(df.clone(), ["t"], ["a"])?.with_plot_opts(opts.clone())),
//!     ("b", Element::curve(df, ["t"], ["b"])?.with_plot_opts(opts)),
//! ]);
//! let json = Chart::from(overlay).to_json_string()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `element`: the [`Element`] type and its per-kind constructors
//! - `chart`: overlays, area stacking and JSON export
//! - `operation`: derived elements (histogram binning)
//! - `options`: plot and style options using the builder pattern
//! - `stats`: kernel density estimation for distributions

pub mod chart;
pub mod dimension;
pub mod element;
pub mod error;
pub mod operation;
pub mod options;
pub mod stats;


// Re-export commonly used types
pub use chart::{BASELINE_DIM, Chart, NdOverlay, OVERLAY_KEY_DIM, Overlay};
pub use dimension::Dimension;
pub use element::{Element, ElementKind};
pub use error::{ElementError, Result};
pub use operation::histogram;
pub use options::{PlotOpts, PlotOptsBuilder, StyleOpts, StyleOptsBuilder, Ticks};
pub use stats::KernelDensity;

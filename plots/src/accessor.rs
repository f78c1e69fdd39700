//! The plotting accessor interface and the engine registry.
//!
//! `frame.plot()` and `series.plot()` both return a [`PlotMethods`]
//! implementation: one `call` entry point that dispatches on [`PlotKind`],
//! plus a convenience method per chart kind.

use crate::error::{PlotError, Result};
use crate::kind::PlotKind;
use crate::kwargs::PlotKwargs;
use hv_elements::Chart;
use itertools::Itertools;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Name this backend registers under
pub const ENGINE_NAME: &str = "holoviews";

/// Chart kinds implemented for frames
pub const FRAME_KINDS: &[PlotKind] = &[
    PlotKind::Line,
    PlotKind::Bar,
    PlotKind::Barh,
    PlotKind::Box,
    PlotKind::Hist,
    PlotKind::Kde,
    PlotKind::Area,
    PlotKind::Scatter,
];

/// Chart kinds implemented for series
pub const SERIES_KINDS: &[PlotKind] = &[
    PlotKind::Line,
    PlotKind::Bar,
    PlotKind::Barh,
    PlotKind::Box,
    PlotKind::Hist,
    PlotKind::Kde,
    PlotKind::Area,
];

/// A registered plotting engine
#[derive(Debug)]
pub struct EngineInfo {
    pub name: &'static str,
    pub frame_kinds: &'static [PlotKind],
    pub series_kinds: &'static [PlotKind],
}

static ENGINES: Lazy<FxHashMap<&'static str, EngineInfo>> = Lazy::new(|| {
    let mut engines = FxHashMap::default();
    engines.insert(
        ENGINE_NAME,
        EngineInfo {
            name: ENGINE_NAME,
            frame_kinds: FRAME_KINDS,
            series_kinds: SERIES_KINDS,
        },
    );
    engines
});

/// Look up a plotting engine by name
///
/// # Errors
/// Returns `PlotError::UnknownEngine` if nothing is registered under `name`
pub fn engine(name: &str) -> Result<&'static EngineInfo> {
    ENGINES
        .get(name)
        .ok_or_else(|| PlotError::UnknownEngine(name.to_string()))
}

/// Names of all registered engines, sorted
pub fn engine_names() -> Vec<&'static str> {
    ENGINES.keys().copied().sorted().collect()
}

/// Plotting accessor
///
/// Implementations translate the keyword set, dispatch on the chart kind and
/// hand back the constructed chart. Kinds outside [`supported_kinds`]
/// fail with `PlotError::UnsupportedKind`.
///
/// [`supported_kinds`]: PlotMethods::supported_kinds
pub trait PlotMethods {
    fn engine_name(&self) -> &'static str {
        ENGINE_NAME
    }

    fn supported_kinds(&self) -> &'static [PlotKind];

    fn supports(&self, kind: PlotKind) -> bool {
        self.supported_kinds().contains(&kind)
    }

    /// Build a chart of the given kind
    fn call(&self, kind: PlotKind, kwargs: PlotKwargs) -> Result<Chart>;

    /// Build a chart from a kind name such as `"bar"` or `"density"`
    fn call_named(&self, kind: &str, kwargs: PlotKwargs) -> Result<Chart> {
        self.call(PlotKind::from_name(kind)?, kwargs)
    }

    fn line(&self, kwargs: PlotKwargs) -> Result<Chart> {
        self.call(PlotKind::Line, kwargs)
    }

    fn bar(&self, kwargs: PlotKwargs) -> Result<Chart> {
        self.call(PlotKind::Bar, kwargs)
    }

    fn barh(&self, kwargs: PlotKwargs) -> Result<Chart> {
        self.call(PlotKind::Barh, kwargs)
    }

    fn box_plot(&self, kwargs: PlotKwargs) -> Result<Chart> {
        self.call(PlotKind::Box, kwargs)
    }

    fn hist(&self, kwargs: PlotKwargs) -> Result<Chart> {
        self.call(PlotKind::Hist, kwargs)
    }

    fn kde(&self, kwargs: PlotKwargs) -> Result<Chart> {
        self.call(PlotKind::Kde, kwargs)
    }

    fn density(&self, kwargs: PlotKwargs) -> Result<Chart> {
        self.kde(kwargs)
    }

    fn area(&self, kwargs: PlotKwargs) -> Result<Chart> {
        self.call(PlotKind::Area, kwargs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_lookup() {
        let info = engine("holoviews").unwrap();
        assert_eq!(info.name, ENGINE_NAME);
        assert!(info.frame_kinds.contains(&PlotKind::Scatter));
        assert!(!info.series_kinds.contains(&PlotKind::Scatter));
        assert_eq!(engine_names(), vec!["holoviews"]);
    }

    #[test]
    fn test_unknown_engine() {
        assert!(matches!(
            engine("matplotlib"),
            Err(PlotError::UnknownEngine(name)) if name == "matplotlib"
        ));
    }
}

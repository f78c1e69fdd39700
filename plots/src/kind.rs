use crate::error::{PlotError, Result};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Chart kind enumeration
///
/// Kind names parse case-sensitively from the conventional lowercase names;
/// `density` is an alias of `kde`.
///
/// ```rust
/// use hv_plots::PlotKind;
///
/// assert_eq!(PlotKind::from_name("barh").unwrap(), PlotKind::Barh);
/// assert_eq!(PlotKind::from_name("density").unwrap(), PlotKind::Kde);
/// assert!(PlotKind::from_name("pie").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    Line,
    Bar,
    Barh,
    Box,
    Hist,
    #[strum(to_string = "kde", serialize = "density")]
    #[serde(alias = "density")]
    Kde,
    Area,
    Scatter,
}

impl PlotKind {
    /// Parse a kind name
    ///
    /// # Errors
    /// Returns `PlotError::UnknownKind` for names that match no chart kind
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| PlotError::UnknownKind(name.to_string()))
    }
}

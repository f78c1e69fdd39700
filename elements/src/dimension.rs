use serde::Serialize;

/// A named axis of an element
///
/// Key dimensions are the independent variables of an element, value
/// dimensions the measured ones. Each dimension names a column of the
/// element data and may carry an explicit display range.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dimension {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<(f64, f64)>,
}

impl Dimension {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range: None,
        }
    }

    /// Replace the display range (a `None` leaves the current range)
    pub fn with_range(mut self, range: Option<(f64, f64)>) -> Self {
        if range.is_some() {
            self.range = range;
        }
        self
    }
}

impl From<&str> for Dimension {
    fn from(name: &str) -> Self {
        Dimension::new(name)
    }
}

impl From<String> for Dimension {
    fn from(name: String) -> Self {
        Dimension::new(name)
    }
}

impl From<&String> for Dimension {
    fn from(name: &String) -> Self {
        Dimension::new(name.as_str())
    }
}

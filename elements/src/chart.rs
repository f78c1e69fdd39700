use crate::element::{Element, ElementKind, column_f64};
use crate::error::{ElementError, Result};
use crate::options::PlotOpts;
use polars::prelude::*;
use serde::Serialize;
use serde_json::{Value, json};

/// Name of the value dimension holding the lower boundary of stacked areas
pub const BASELINE_DIM: &str = "Baseline";

/// Key dimension of an [`NdOverlay`]
pub const OVERLAY_KEY_DIM: &str = "Element";

/// Elements layered on shared axes, in drawing order
#[derive(Clone, Debug, Default)]
pub struct Overlay {
    layers: Vec<Element>,
    label: String,
}

impl Overlay {
    pub fn new(layers: impl IntoIterator<Item = Element>) -> Self {
        Self {
            layers: layers.into_iter().collect(),
            label: String::new(),
        }
    }

    pub fn layers(&self) -> &[Element] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Stack area layers on top of each other, in layer order
    ///
    /// Each area is rebuilt with two value dimensions: its own dimension now
    /// holding the cumulative upper boundary, and [`BASELINE_DIM`] holding
    /// the sum of all earlier layers. Nulls count as zero.
    ///
    /// # Errors
    /// Will return `Err` if a layer is not an area, has no value dimension,
    /// or does not share the row count of the first layer
    pub fn stack_areas(self) -> Result<Overlay> {
        let mut baseline: Option<Vec<f64>> = None;
        let mut stacked = Vec::with_capacity(self.layers.len());

        for area in self.layers {
            if area.kind() != ElementKind::Area {
                return Err(ElementError::stacking_error(format!(
                    "cannot stack a {} layer",
                    area.kind()
                )));
            }
            let (Some(kdim), Some(vdim)) = (area.kdims().first(), area.vdims().first()) else {
                return Err(ElementError::stacking_error(
                    "area layer needs a key and a value dimension",
                ));
            };

            let values: Vec<f64> = column_f64(area.data(), &vdim.name)?
                .into_iter()
                .map(|v| v.unwrap_or(0.0))
                .collect();
            let lower = baseline.unwrap_or_else(|| vec![0.0; values.len()]);
            if lower.len() != values.len() {
                return Err(ElementError::stacking_error(format!(
                    "layer '{}' has {} rows, expected {}",
                    vdim.name,
                    values.len(),
                    lower.len()
                )));
            }
            let upper: Vec<f64> = lower.iter().zip(&values).map(|(b, v)| b + v).collect();

            let data = DataFrame::new(vec![
                area.data().column(&kdim.name)?.clone(),
                Column::new(vdim.name.as_str().into(), upper.clone()),
                Column::new(BASELINE_DIM.into(), lower),
            ])?;
            let rebuilt = Element::area(
                data,
                [kdim.clone()],
                [vdim.clone(), BASELINE_DIM.into()],
            )?
            .with_label(area.label())
            .opts(area.plot_opts().clone(), area.style_opts().clone());

            stacked.push(rebuilt);
            baseline = Some(upper);
        }

        Ok(Overlay {
            layers: stacked,
            label: self.label,
        })
    }
}

/// Elements keyed by name, in insertion order
#[derive(Clone, Debug, Default)]
pub struct NdOverlay {
    items: Vec<(String, Element)>,
    label: String,
}

impl NdOverlay {
    pub fn new<S: Into<String>>(items: impl IntoIterator<Item = (S, Element)>) -> Self {
        Self {
            items: items.into_iter().map(|(k, e)| (k.into(), e)).collect(),
            label: String::new(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Element> {
        self.items.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.items.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Anything the plotting backend can hand back to a caller
#[derive(Clone, Debug)]
pub enum Chart {
    Element(Element),
    Overlay(Overlay),
    NdOverlay(NdOverlay),
}

impl From<Element> for Chart {
    fn from(element: Element) -> Self {
        Chart::Element(element)
    }
}

impl From<Overlay> for Chart {
    fn from(overlay: Overlay) -> Self {
        Chart::Overlay(overlay)
    }
}

impl From<NdOverlay> for Chart {
    fn from(overlay: NdOverlay) -> Self {
        Chart::NdOverlay(overlay)
    }
}

impl Chart {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Chart::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_overlay(&self) -> Option<&Overlay> {
        match self {
            Chart::Overlay(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_nd_overlay(&self) -> Option<&NdOverlay> {
        match self {
            Chart::NdOverlay(o) => Some(o),
            _ => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Chart::Element(e) => e.label(),
            Chart::Overlay(o) => o.label(),
            Chart::NdOverlay(o) => o.label(),
        }
    }

    pub fn with_label(self, label: impl Into<String>) -> Self {
        match self {
            Chart::Element(e) => Chart::Element(e.with_label(label)),
            Chart::Overlay(o) => Chart::Overlay(o.with_label(label)),
            Chart::NdOverlay(o) => Chart::NdOverlay(o.with_label(label)),
        }
    }

    /// Rewrite every element of the chart
    pub fn map_elements(self, f: impl Fn(Element) -> Element) -> Self {
        match self {
            Chart::Element(e) => Chart::Element(f(e)),
            Chart::Overlay(o) => Chart::Overlay(Overlay {
                layers: o.layers.into_iter().map(&f).collect(),
                label: o.label,
            }),
            Chart::NdOverlay(o) => Chart::NdOverlay(NdOverlay {
                items: o.items.into_iter().map(|(k, e)| (k, f(e))).collect(),
                label: o.label,
            }),
        }
    }

    /// All elements of the chart in drawing order
    pub fn elements(&self) -> Vec<&Element> {
        match self {
            Chart::Element(e) => vec![e],
            Chart::Overlay(o) => o.layers.iter().collect(),
            Chart::NdOverlay(o) => o.items.iter().map(|(_, e)| e).collect(),
        }
    }

    /// Describe the chart as JSON: element types, dimensions, options and data
    pub fn to_json(&self) -> Result<Value> {
        match self {
            Chart::Element(e) => element_to_json(e),
            Chart::Overlay(o) => {
                let layers = o
                    .layers
                    .iter()
                    .map(element_to_json)
                    .collect::<Result<Vec<_>>>()?;
                Ok(json!({ "type": "Overlay", "label": o.label, "layers": layers }))
            }
            Chart::NdOverlay(o) => {
                let items = o
                    .items
                    .iter()
                    .map(|(key, e)| -> Result<Value> {
                        Ok(json!({ "key": key, "element": element_to_json(e)? }))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(json!({
                    "type": "NdOverlay",
                    "label": o.label,
                    "kdim": OVERLAY_KEY_DIM,
                    "items": items,
                }))
            }
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json()?)?)
    }
}

#[derive(Serialize)]
struct ColumnRecord {
    name: String,
    values: Vec<Value>,
}

#[derive(Serialize)]
struct ElementRecord<'a> {
    #[serde(rename = "type")]
    kind: ElementKind,
    label: &'a str,
    kdims: &'a [crate::Dimension],
    vdims: &'a [crate::Dimension],
    plot: &'a PlotOpts,
    style: &'a crate::StyleOpts,
    data: Vec<ColumnRecord>,
}

fn element_to_json(element: &Element) -> Result<Value> {
    let data = element
        .data()
        .get_columns()
        .iter()
        .map(|column| -> Result<ColumnRecord> {
            let values = (0..column.len())
                .map(|i| column.get(i).map(any_value_to_json))
                .collect::<PolarsResult<Vec<_>>>()?;
            Ok(ColumnRecord {
                name: column.name().to_string(),
                values,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let record = ElementRecord {
        kind: element.kind(),
        label: element.label(),
        kdims: element.kdims(),
        vdims: element.vdims(),
        plot: element.plot_opts(),
        style: element.style_opts(),
        data,
    };
    Ok(serde_json::to_value(record)?)
}

fn any_value_to_json(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::Int8(v) => json!(v),
        AnyValue::Int16(v) => json!(v),
        AnyValue::Int32(v) => json!(v),
        AnyValue::Int64(v) => json!(v),
        AnyValue::UInt8(v) => json!(v),
        AnyValue::UInt16(v) => json!(v),
        AnyValue::UInt32(v) => json!(v),
        AnyValue::UInt64(v) => json!(v),
        AnyValue::Float32(v) => json!(v),
        AnyValue::Float64(v) => json!(v),
        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        other => Value::String(other.to_string()),
    }
}

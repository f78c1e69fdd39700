//! Host data types: polars frames and series with an explicit row index.
//!
//! Polars frames have no row index, while the plotting conventions this
//! backend follows plot against one by default. `PlotFrame` and `PlotSeries`
//! carry that index next to the data and provide the two reshapes the chart
//! methods need: resetting the index into a column, and melting wide data
//! into long form.

use crate::error::{PlotError, Result};
use chrono::NaiveDateTime;
use polars::prelude::*;
use std::fmt;

/// Column name used for an index without a name
pub const DEFAULT_INDEX_NAME: &str = "index";

/// Column name for an unnamed index when the data already has an `index` column
pub const FALLBACK_INDEX_NAME: &str = "level_0";

/// Label of a series
///
/// Series labels are usually names, but a series taken from a frame with
/// time-stamped columns is labelled by a timestamp.
#[derive(Clone, Debug, PartialEq)]
pub enum Label {
    Name(String),
    Timestamp(NaiveDateTime),
    Unnamed,
}

impl Label {
    /// The column name this label takes when the series becomes a frame column
    pub fn column_name(&self) -> String {
        match self {
            Label::Name(name) => name.clone(),
            Label::Timestamp(ts) => ts.to_string(),
            Label::Unnamed => "0".to_string(),
        }
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, Label::Timestamp(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.column_name())
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::Name(name.to_string())
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Label::Name(name)
    }
}

impl From<NaiveDateTime> for Label {
    fn from(ts: NaiveDateTime) -> Self {
        Label::Timestamp(ts)
    }
}

/// Row labels of a frame or series
#[derive(Clone, Debug)]
pub struct Index {
    name: Option<String>,
    values: Column,
}

impl Index {
    /// Positional index `0..len`
    pub fn range(len: usize) -> Self {
        Self {
            name: None,
            values: Column::new(
                DEFAULT_INDEX_NAME.into(),
                (0..len as i64).collect::<Vec<i64>>(),
            ),
        }
    }

    pub fn new(name: Option<String>, values: Column) -> Self {
        Self { name, values }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Column name of the index once reset into data; `default_taken` says
    /// whether that data already has a column named [`DEFAULT_INDEX_NAME`]
    fn reset_name(&self, default_taken: bool) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None if default_taken => FALLBACK_INDEX_NAME.to_string(),
            None => DEFAULT_INDEX_NAME.to_string(),
        }
    }

    pub fn values(&self) -> &Column {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn as_column(&self, name: &str) -> Column {
        self.values.clone().with_name(name.into())
    }
}

/// A polars `DataFrame` with a row index
#[derive(Clone, Debug)]
pub struct PlotFrame {
    data: DataFrame,
    index: Index,
}

impl PlotFrame {
    /// Wrap a frame with a positional index
    pub fn new(data: DataFrame) -> Self {
        let index = Index::range(data.height());
        Self { data, index }
    }

    /// Wrap a frame with an explicit index
    ///
    /// # Errors
    /// Will return `Err` if the index length differs from the frame height
    pub fn with_index(data: DataFrame, index: Index) -> Result<Self> {
        if index.len() != data.height() {
            return Err(PlotError::IndexLength {
                expected: data.height(),
                actual: index.len(),
            });
        }
        Ok(Self { data, index })
    }

    /// Move a column out of the frame to become its index
    ///
    /// # Errors
    /// Will return `Err` if the column does not exist
    pub fn set_index(mut data: DataFrame, column: &str) -> Result<Self> {
        let values = data.drop_in_place(column)?;
        Ok(Self {
            data,
            index: Index::new(Some(column.to_string()), values),
        })
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// One column as a series sharing this frame's index
    pub fn column(&self, name: &str) -> Result<PlotSeries> {
        let values = self.data.column(name)?.clone();
        Ok(PlotSeries {
            label: Label::Name(name.to_string()),
            values,
            index: self.index.clone(),
        })
    }

    /// Column name the index takes in [`reset_index`](Self::reset_index)
    pub fn index_column_name(&self) -> String {
        self.index.reset_name(self.data.column(DEFAULT_INDEX_NAME).is_ok())
    }

    /// The data with the index inserted as its first column
    ///
    /// # Errors
    /// Will return `Err` if a named index collides with a data column
    pub fn reset_index(&self) -> Result<DataFrame> {
        let mut df = self.data.clone();
        df.insert_column(0, self.index.as_column(&self.index_column_name()))?;
        Ok(df)
    }
}

/// A single polars column with a label and a row index
#[derive(Clone, Debug)]
pub struct PlotSeries {
    label: Label,
    values: Column,
    index: Index,
}

impl PlotSeries {
    /// Wrap a column with a positional index
    pub fn new(label: impl Into<Label>, values: Column) -> Self {
        let index = Index::range(values.len());
        Self {
            label: label.into(),
            values,
            index,
        }
    }

    /// Wrap a column with an explicit index
    ///
    /// # Errors
    /// Will return `Err` if the index length differs from the series length
    pub fn with_index(label: impl Into<Label>, values: Column, index: Index) -> Result<Self> {
        if index.len() != values.len() {
            return Err(PlotError::IndexLength {
                expected: values.len(),
                actual: index.len(),
            });
        }
        Ok(Self {
            label: label.into(),
            values,
            index,
        })
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn values(&self) -> &Column {
        &self.values
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Column name of the values in frame form
    pub fn column_name(&self) -> String {
        self.label.column_name()
    }

    /// The series as a single-column frame
    pub fn to_frame(&self) -> Result<DataFrame> {
        let column = self.values.clone().with_name(self.column_name().into());
        Ok(DataFrame::new(vec![column])?)
    }

    /// Column name the index takes in [`reset_index`](Self::reset_index)
    pub fn index_column_name(&self) -> String {
        self.index.reset_name(self.column_name() == DEFAULT_INDEX_NAME)
    }

    /// A two-column frame: the index, then the values
    pub fn reset_index(&self) -> Result<DataFrame> {
        let mut df = self.to_frame()?;
        df.insert_column(0, self.index.as_column(&self.index_column_name()))?;
        Ok(df)
    }
}

/// Reshape wide data to long form
///
/// Every column other than `id_var` contributes one block of rows, in column
/// order: the `id_var` values, the column name under `var_name`, and the
/// column values (cast to `f64`) under `value_name`. The result has
/// `rows × value columns` rows.
///
/// # Errors
/// Will return `Err` if a value column cannot be cast to `f64` without
/// losing values, such as a column of text
pub fn melt(data: &DataFrame, id_var: &str, var_name: &str, value_name: &str) -> Result<DataFrame> {
    let ids = data.column(id_var)?;
    let value_columns: Vec<&Column> = data
        .get_columns()
        .iter()
        .filter(|c| c.name().as_str() != id_var)
        .collect();

    let mut long: Option<DataFrame> = None;
    for column in value_columns {
        let block = DataFrame::new(vec![
            ids.clone(),
            Column::new(
                var_name.into(),
                vec![column.name().to_string(); data.height()],
            ),
            column
                .strict_cast(&DataType::Float64)?
                .with_name(value_name.into()),
        ])?;
        long = Some(match long {
            Some(acc) => acc.vstack(&block)?,
            None => block,
        });
    }

    match long {
        Some(df) => Ok(df),
        None => Ok(DataFrame::new(vec![
            ids.slice(0, 0),
            Column::new(var_name.into(), Vec::<String>::new()),
            Column::new(value_name.into(), Vec::<f64>::new()),
        ])?),
    }
}

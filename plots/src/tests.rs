// Tests for hv-plots
//
// Host data reshapes and the frame and series chart methods.

use crate::accessor::PlotMethods;
use crate::data::{Index, Label, PlotFrame, PlotSeries, melt};
use crate::error::PlotError;
use crate::frame::{FrameConverter, GROUP_DIM, VALUE_DIM};
use crate::kind::PlotKind;
use crate::kwargs::PlotKwargs;
use crate::series::SeriesConverter;
use hv_elements::{ElementKind, Ticks};
use polars::prelude::*;

fn test_frame() -> PlotFrame {
    let df = DataFrame::new(vec![
        Column::new("A".into(), vec![1.0, 2.0, 3.0]),
        Column::new("B".into(), vec![4.0, 5.0, 6.0]),
        Column::new("C".into(), vec![7.0, 8.0, 9.0]),
    ])
    .expect("Failed to create test DataFrame");
    PlotFrame::new(df)
}

fn named_index_frame() -> PlotFrame {
    let df = DataFrame::new(vec![
        Column::new("year".into(), vec![2001i64, 2002, 2003]),
        Column::new("A".into(), vec![1.0, 2.0, 3.0]),
        Column::new("B".into(), vec![4.0, 5.0, 6.0]),
    ])
    .expect("Failed to create test DataFrame");
    PlotFrame::set_index(df, "year").unwrap()
}

// ============================================================================
// Data Tests
// ============================================================================

#[test]
fn test_reset_index_default_name() {
    let frame = test_frame();
    let df = frame.reset_index().unwrap();
    let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    assert_eq!(names, vec!["index", "A", "B", "C"]);
    // The frame itself is untouched
    assert_eq!(frame.data().width(), 3);
}

#[test]
fn test_set_index_moves_column() {
    let frame = named_index_frame();
    assert_eq!(frame.column_names(), vec!["A", "B"]);
    assert_eq!(frame.index().name(), Some("year"));
    let df = frame.reset_index().unwrap();
    assert_eq!(df.get_column_names()[0].as_str(), "year");
}

#[test]
fn test_index_length_mismatch() {
    let df = DataFrame::new(vec![Column::new("A".into(), vec![1.0, 2.0])]).unwrap();
    let index = Index::new(None, Column::new("i".into(), vec![1i64, 2, 3]));
    assert!(matches!(
        PlotFrame::with_index(df, index),
        Err(PlotError::IndexLength { expected: 2, actual: 3 })
    ));
}

#[test]
fn test_melt_shape_and_order() {
    let df = test_frame().reset_index().unwrap();
    let long = melt(&df, "index", GROUP_DIM, VALUE_DIM).unwrap();

    assert_eq!(long.height(), 9);
    let groups: Vec<String> = long
        .column(GROUP_DIM)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|g| g.unwrap_or_default().to_string())
        .collect();
    assert_eq!(groups, vec!["A", "A", "A", "B", "B", "B", "C", "C", "C"]);

    let values: Vec<f64> = long
        .column(VALUE_DIM)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
}

#[test]
fn test_melt_without_value_columns() {
    let df = DataFrame::new(vec![Column::new("index".into(), vec![0i64, 1])]).unwrap();
    let long = melt(&df, "index", GROUP_DIM, VALUE_DIM).unwrap();
    assert_eq!(long.height(), 0);
    assert_eq!(long.width(), 3);
}

#[test]
fn test_melt_rejects_text_columns() {
    let df = DataFrame::new(vec![
        Column::new("A".into(), vec![1.0, 2.0]),
        Column::new("S".into(), vec!["x", "y"]),
    ])
    .unwrap();
    let frame = PlotFrame::new(df);

    let indexed = frame.reset_index().unwrap();
    assert!(melt(&indexed, "index", GROUP_DIM, VALUE_DIM).is_err());
    assert!(matches!(
        frame.plot().bar(PlotKwargs::default()),
        Err(PlotError::PolarsError(_))
    ));
    assert!(matches!(
        frame.plot().box_plot(PlotKwargs::default()),
        Err(PlotError::PolarsError(_))
    ));
}

#[test]
fn test_default_index_avoids_existing_index_column() {
    let df = DataFrame::new(vec![
        Column::new("index".into(), vec![10.0, 20.0]),
        Column::new("A".into(), vec![1.0, 2.0]),
    ])
    .unwrap();
    let frame = PlotFrame::new(df);
    assert_eq!(frame.index_column_name(), "level_0");

    let reset = frame.reset_index().unwrap();
    let names: Vec<String> = reset.get_column_names().iter().map(|s| s.to_string()).collect();
    assert_eq!(names, vec!["level_0", "index", "A"]);

    let chart = frame.plot().line(PlotKwargs::default()).unwrap();
    let overlay = chart.as_nd_overlay().unwrap();
    assert_eq!(overlay.keys().collect::<Vec<_>>(), vec!["index", "A"]);
    assert_eq!(overlay.get("A").unwrap().kdim_names(), vec!["level_0"]);
    assert!(frame.plot().bar(PlotKwargs::default()).is_ok());

    let series = PlotSeries::new("index", Column::new("s".into(), vec![1.0, 2.0]));
    assert_eq!(series.index_column_name(), "level_0");
    assert!(series.plot().line(PlotKwargs::default()).is_ok());
}

#[test]
fn test_series_reset_index() {
    let series = PlotSeries::new("sales", Column::new("s".into(), vec![1.0, 2.0]));
    let df = series.reset_index().unwrap();
    let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    assert_eq!(names, vec!["index", "sales"]);
}

#[test]
fn test_unnamed_series_column() {
    let series = PlotSeries::new(Label::Unnamed, Column::new("s".into(), vec![1.0]));
    assert_eq!(series.column_name(), "0");
}

// ============================================================================
// Frame Dispatch Tests
// ============================================================================

#[test]
fn test_frame_line_with_xy() {
    let frame = test_frame();
    let converter = FrameConverter::new(&frame, PlotKwargs::default()).unwrap();
    let chart = converter.call(PlotKind::Line, Some("A"), Some("B")).unwrap();

    let curve = chart.as_element().unwrap();
    assert_eq!(curve.kind(), ElementKind::Curve);
    assert_eq!(curve.kdim_names(), vec!["A"]);
    assert_eq!(curve.vdim_names(), vec!["B"]);
}

#[test]
fn test_frame_line_uses_index_name() {
    let frame = named_index_frame();
    let chart = frame.plot().line(PlotKwargs::default()).unwrap();
    let overlay = chart.as_nd_overlay().unwrap();
    assert_eq!(overlay.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(overlay.get("B").unwrap().kdim_names(), vec!["year"]);
}

#[test]
fn test_frame_line_only_x_falls_back_to_index() {
    let frame = test_frame();
    let converter = FrameConverter::new(&frame, PlotKwargs::default()).unwrap();
    let chart = converter.call(PlotKind::Line, Some("A"), None).unwrap();
    assert_eq!(chart.as_nd_overlay().unwrap().len(), 3);
}

#[test]
fn test_frame_sort_columns() {
    let df = DataFrame::new(vec![
        Column::new("b".into(), vec![1.0]),
        Column::new("a".into(), vec![2.0]),
    ])
    .unwrap();
    let frame = PlotFrame::new(df);
    let kwargs = PlotKwargs::new().sort_columns(true).build().unwrap();
    let chart = frame.plot().line(kwargs).unwrap();
    assert_eq!(
        chart.as_nd_overlay().unwrap().keys().collect::<Vec<_>>(),
        vec!["a", "b"]
    );
}

#[test]
fn test_frame_bar_with_xy() {
    let frame = test_frame();
    let converter = FrameConverter::new(&frame, PlotKwargs::default()).unwrap();
    let bars = converter.bar(Some("A"), Some("C")).unwrap();
    let bars = bars.as_element().unwrap();
    assert_eq!(bars.kdim_names(), vec!["A"]);
    assert_eq!(bars.vdim_names(), vec!["C"]);
    assert_eq!(bars.plot_opts().stack_index, None);
}

#[test]
fn test_frame_bar_long_form() {
    let frame = test_frame();
    let chart = frame.plot().bar(PlotKwargs::default()).unwrap();
    let bars = chart.as_element().unwrap();

    assert_eq!(bars.kind(), ElementKind::Bars);
    assert_eq!(bars.kdim_names(), vec!["index", GROUP_DIM]);
    assert_eq!(bars.vdim_names(), vec![VALUE_DIM]);
    assert_eq!(bars.data().height(), 9);
    assert_eq!(bars.plot_opts().stack_index, None);
    assert!(!bars.plot_opts().invert_axes);
}

#[test]
fn test_frame_bar_stacked() {
    let frame = test_frame();
    let kwargs = PlotKwargs::new().stacked(true).build().unwrap();
    let chart = frame.plot().bar(kwargs).unwrap();
    assert_eq!(chart.as_element().unwrap().plot_opts().stack_index, Some(1));
}

#[test]
fn test_frame_barh_inverts_axes_without_leaking() {
    let frame = test_frame();
    let converter = FrameConverter::new(&frame, PlotKwargs::default()).unwrap();

    let barh = converter.barh(None, None).unwrap();
    assert!(barh.as_element().unwrap().plot_opts().invert_axes);

    // A later call on the same translator starts from clean options
    let bar = converter.bar(None, None).unwrap();
    assert!(!bar.as_element().unwrap().plot_opts().invert_axes);
    assert!(!converter.converter().plot_opts().invert_axes);
}

#[test]
fn test_frame_box_vert() {
    let frame = test_frame();
    let chart = frame.plot().box_plot(PlotKwargs::default()).unwrap();
    let boxes = chart.as_element().unwrap();
    assert_eq!(boxes.kind(), ElementKind::BoxWhisker);
    assert_eq!(boxes.kdim_names(), vec![GROUP_DIM]);
    assert_eq!(boxes.data().height(), 9);
    assert!(!boxes.plot_opts().invert_axes);

    let kwargs = PlotKwargs::new().kw("vert", false).build().unwrap();
    let chart = frame.plot().box_plot(kwargs).unwrap();
    assert!(chart.as_element().unwrap().plot_opts().invert_axes);
}

#[test]
fn test_frame_hist() {
    let frame = test_frame();
    let kwargs = PlotKwargs::new()
        .bins(3usize)
        .kw("alpha", 0.5)
        .kw("orientation", "horizontal")
        .build()
        .unwrap();
    let chart = frame.plot().hist(kwargs).unwrap();
    let overlay = chart.as_nd_overlay().unwrap();

    assert_eq!(overlay.keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    let hist = overlay.get("B").unwrap();
    assert_eq!(hist.kind(), ElementKind::Histogram);
    assert_eq!(hist.data().height(), 3);
    assert_eq!(hist.style_opts().alpha, Some(0.5));
    assert!(hist.plot_opts().invert_axes);
}

#[test]
fn test_frame_hist_default_alpha() {
    let frame = test_frame();
    let chart = frame.plot().hist(PlotKwargs::default()).unwrap();
    let hist = chart.as_nd_overlay().unwrap().get("A").unwrap();
    assert_eq!(hist.style_opts().alpha, Some(1.0));
    assert!(!hist.plot_opts().invert_axes);
    assert_eq!(hist.data().height(), 10);
}

#[test]
fn test_frame_kde() {
    let frame = test_frame();
    let chart = frame.plot().density(PlotKwargs::default()).unwrap();
    let overlay = chart.as_nd_overlay().unwrap();
    assert_eq!(overlay.len(), 3);
    assert_eq!(overlay.get("C").unwrap().kind(), ElementKind::Distribution);
}

#[test]
fn test_frame_area_unstacked_call() {
    let frame = test_frame();
    let chart = frame
        .plot()
        .call(PlotKind::Area, PlotKwargs::default())
        .unwrap();
    let overlay = chart.as_overlay().unwrap();
    assert_eq!(overlay.len(), 3);
    assert_eq!(overlay.layers()[1].label(), "B");
    assert_eq!(overlay.layers()[1].vdim_names(), vec!["B"]);
}

#[test]
fn test_frame_area_method_stacks_by_default() {
    let frame = test_frame();
    let chart = frame.plot().area(PlotKwargs::default()).unwrap();
    let overlay = chart.as_overlay().unwrap();
    assert_eq!(overlay.layers()[2].vdim_names(), vec!["C", "Baseline"]);

    let kwargs = PlotKwargs::new().stacked(false).build().unwrap();
    let chart = frame.plot().area(kwargs).unwrap();
    assert_eq!(chart.as_overlay().unwrap().layers()[2].vdim_names(), vec!["C"]);
}

#[test]
fn test_frame_scatter_color_keywords() {
    let frame = test_frame();
    let kwargs = PlotKwargs::new()
        .kw("c", "C")
        .kw("color", "red")
        .kw("label", "points")
        .build()
        .unwrap();
    let chart = frame.plot().scatter("A", "B", kwargs).unwrap();
    let scatter = chart.as_element().unwrap();

    assert_eq!(scatter.kind(), ElementKind::Scatter);
    assert_eq!(scatter.vdim_names(), vec!["B", "C"]);
    assert_eq!(scatter.plot_opts().color_index.as_deref(), Some("C"));
    assert!(scatter.plot_opts().colorbar);
    assert_eq!(scatter.style_opts().color.as_deref(), Some("red"));
    assert_eq!(scatter.label(), "points");
}

#[test]
fn test_frame_scatter_requires_xy() {
    let frame = test_frame();
    let converter = FrameConverter::new(&frame, PlotKwargs::default()).unwrap();
    assert!(matches!(
        converter.call(PlotKind::Scatter, None, Some("B")),
        Err(PlotError::MissingCoordinates { missing: "x", .. })
    ));
    assert!(matches!(
        converter.call(PlotKind::Scatter, Some("A"), None),
        Err(PlotError::MissingCoordinates { missing: "y", .. })
    ));
}

#[test]
fn test_frame_missing_column_propagates() {
    let frame = test_frame();
    let kwargs = PlotKwargs::new().x("A").y("Z").build().unwrap();
    assert!(matches!(
        frame.plot().bar(kwargs),
        Err(PlotError::ElementError(_))
    ));
}

#[test]
fn test_title_and_ranges_applied() {
    let frame = test_frame();
    let kwargs = PlotKwargs::new()
        .title("Totals")
        .ylim((0.0, 10.0))
        .xticks(Ticks::Count(3))
        .build()
        .unwrap();
    let chart = frame.plot().line(kwargs).unwrap();
    assert_eq!(chart.label(), "Totals");
    for element in chart.elements() {
        assert_eq!(element.vdims()[0].range, Some((0.0, 10.0)));
        assert_eq!(element.kdims()[0].range, None);
        assert_eq!(element.plot_opts().xticks, Some(Ticks::Count(3)));
    }
}

#[test]
fn test_use_index_false() {
    let frame = named_index_frame();
    let kwargs = PlotKwargs::new().use_index(false).build().unwrap();
    let chart = frame.plot().line(kwargs).unwrap();
    let curve = chart.as_nd_overlay().unwrap().get("A").unwrap();
    assert_eq!(curve.kdim_names(), vec!["index"]);
}

#[test]
fn test_frame_named_kind_dispatch() {
    let frame = test_frame();
    assert!(frame.plot().call_named("barh", PlotKwargs::default()).is_ok());
    assert!(matches!(
        frame.plot().call_named("pie", PlotKwargs::default()),
        Err(PlotError::UnknownKind(kind)) if kind == "pie"
    ));
}

// ============================================================================
// Series Dispatch Tests
// ============================================================================

#[test]
fn test_series_bar() {
    let series = test_frame().column("B").unwrap();
    let chart = series.plot().bar(PlotKwargs::default()).unwrap();
    let bars = chart.as_element().unwrap();
    assert_eq!(bars.kdim_names(), vec!["index"]);
    assert_eq!(bars.vdim_names(), vec!["B"]);
    assert_eq!(bars.label(), "");
}

#[test]
fn test_series_barh() {
    let series = test_frame().column("A").unwrap();
    let converter = SeriesConverter::new(&series, PlotKwargs::default()).unwrap();
    let chart = converter.call(PlotKind::Barh).unwrap();
    assert!(chart.as_element().unwrap().plot_opts().invert_axes);
    assert!(!converter.converter().plot_opts().invert_axes);
}

#[test]
fn test_series_hist_and_kde() {
    let series = PlotSeries::new(
        "v",
        Column::new("v".into(), (0..40).map(|i| (i % 8) as f64).collect::<Vec<f64>>()),
    );
    let kwargs = PlotKwargs::new().kw("orientation", "horizontal").build().unwrap();
    let hist = series.plot().hist(kwargs.clone()).unwrap();
    let hist = hist.as_element().unwrap();
    assert_eq!(hist.kind(), ElementKind::Histogram);
    assert_eq!(hist.kdim_names(), vec!["v"]);
    assert!(hist.plot_opts().invert_axes);

    let kde = series.plot().kde(kwargs).unwrap();
    let kde = kde.as_element().unwrap();
    assert_eq!(kde.kind(), ElementKind::Distribution);
    assert_eq!(kde.style_opts().alpha, Some(1.0));
    assert!(kde.kde(32).is_ok());
}

#[test]
fn test_series_line_box_area() {
    let series = test_frame().column("C").unwrap();
    let line = series.plot().line(PlotKwargs::default()).unwrap();
    assert_eq!(line.as_element().unwrap().kind(), ElementKind::Curve);

    let boxes = series.plot().box_plot(PlotKwargs::default()).unwrap();
    let boxes = boxes.as_element().unwrap();
    assert!(boxes.kdims().is_empty());
    assert_eq!(boxes.vdim_names(), vec!["C"]);

    let area = series.plot().area(PlotKwargs::default()).unwrap();
    assert_eq!(area.as_element().unwrap().kind(), ElementKind::Area);
}

#[test]
fn test_series_scatter_unsupported() {
    let series = test_frame().column("A").unwrap();
    assert!(matches!(
        series.plot().call(PlotKind::Scatter, PlotKwargs::default()),
        Err(PlotError::UnsupportedKind { kind: PlotKind::Scatter, target: "series" })
    ));
}

#[test]
fn test_series_title_label() {
    let series = test_frame().column("A").unwrap();
    let kwargs = PlotKwargs::new().title("Column A").build().unwrap();
    let chart = series.plot().bar(kwargs).unwrap();
    assert_eq!(chart.label(), "Column A");
}

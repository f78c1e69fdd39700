use anyhow::{Context, Result};
use clap::Parser;
use hv_plots::{PlotFrame, PlotKwargs, PlotMethods, engine};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// hvplot - declarative charts from CSV data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "hvplot")]
#[command(about = "Turn CSV data into a JSON chart description", long_about = None)]
struct Cli {
    /// Path to the input CSV file (first row is the header)
    #[arg(value_name = "INPUT_CSV")]
    input: PathBuf,

    /// Chart kind: line, bar, barh, box, hist, kde/density, area or scatter
    #[arg(short, long, default_value = "line")]
    kind: String,

    /// Column for the x coordinate
    #[arg(short)]
    x: Option<String>,

    /// Column for the y coordinate
    #[arg(short)]
    y: Option<String>,

    /// Column to use as the row index instead of row positions
    #[arg(long, value_name = "COLUMN")]
    index: Option<String>,

    /// Plot a single column as a series instead of the whole frame
    #[arg(long, value_name = "COLUMN")]
    column: Option<String>,

    /// JSON file with plotting keywords (overridden by -x, -y and --title)
    #[arg(long, value_name = "JSON_PATH")]
    options: Option<PathBuf>,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Plotting engine
    #[arg(long, default_value = hv_plots::ENGINE_NAME)]
    engine: String,

    /// Write the chart description here instead of stdout
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Read a CSV file into a frame, moving `index` out of the data if given
fn load_frame(path: &Path, index: Option<&str>) -> Result<PlotFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
    debug!(rows = df.height(), columns = df.width(), "loaded CSV");

    match index {
        Some(column) => Ok(PlotFrame::set_index(df, column)?),
        None => Ok(PlotFrame::new(df)),
    }
}

/// Keywords from the options file, with command-line flags taking precedence
fn load_kwargs(args: &Cli) -> Result<PlotKwargs> {
    let mut kwargs = match &args.options {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read options file: {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid plotting options in {}", path.display()))?
        }
        None => PlotKwargs::default(),
    };
    if args.x.is_some() {
        kwargs.x = args.x.clone();
    }
    if args.y.is_some() {
        kwargs.y = args.y.clone();
    }
    if args.title.is_some() {
        kwargs.title = args.title.clone();
    }
    Ok(kwargs)
}

fn render(args: &Cli) -> Result<String> {
    let info = engine(&args.engine)?;
    debug!(engine = info.name, "using plotting engine");

    let frame = load_frame(&args.input, args.index.as_deref())?;
    let kwargs = load_kwargs(args)?;

    let chart = match &args.column {
        Some(column) => {
            info!(kind = %args.kind, column = %column, "plotting series");
            frame.column(column)?.plot().call_named(&args.kind, kwargs)?
        }
        None => {
            info!(kind = %args.kind, columns = frame.column_names().len(), "plotting frame");
            frame.plot().call_named(&args.kind, kwargs)?
        }
    };
    Ok(chart.to_json_string()?)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing subscriber with environment filter
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let json = render(&args)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Chart written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn cli(input: &Path, extra: &[&str]) -> Cli {
        let mut argv = vec!["hvplot", input.to_str().unwrap()];
        argv.extend_from_slice(extra);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_load_frame_with_index() {
        let csv = write_csv("day,a,b\n1,1.0,2.0\n2,3.0,4.0\n");
        let frame = load_frame(csv.path(), Some("day")).unwrap();
        assert_eq!(frame.column_names(), vec!["a", "b"]);
        assert_eq!(frame.index().name(), Some("day"));
    }

    #[test]
    fn test_render_frame_bars() {
        let csv = write_csv("a,b\n1.0,2.0\n3.0,4.0\n");
        let args = cli(csv.path(), &["--kind", "bar", "--title", "Totals"]);
        let json: serde_json::Value = serde_json::from_str(&render(&args).unwrap()).unwrap();
        assert_eq!(json["type"], "Bars");
        assert_eq!(json["label"], "Totals");
    }

    #[test]
    fn test_render_series() {
        let csv = write_csv("a,b\n1.0,2.0\n3.0,4.0\n5.0,1.0\n");
        let args = cli(csv.path(), &["--kind", "hist", "--column", "b"]);
        let json: serde_json::Value = serde_json::from_str(&render(&args).unwrap()).unwrap();
        assert_eq!(json["type"], "Histogram");
    }

    #[test]
    fn test_options_file_and_overrides() {
        let csv = write_csv("a,b\n1.0,2.0\n3.0,4.0\n");
        let mut options = NamedTempFile::new().unwrap();
        write!(options, r#"{{ "title": "From file", "grid": true }}"#).unwrap();
        let args = cli(
            csv.path(),
            &["--options", options.path().to_str().unwrap(), "--title", "Flag"],
        );
        let kwargs = load_kwargs(&args).unwrap();
        assert_eq!(kwargs.title.as_deref(), Some("Flag"));
        assert!(kwargs.grid);
    }

    #[test]
    fn test_unknown_kind_and_engine() {
        let csv = write_csv("a\n1.0\n");
        assert!(render(&cli(csv.path(), &["--kind", "pie"])).is_err());
        assert!(render(&cli(csv.path(), &["--engine", "matplotlib"])).is_err());
    }
}

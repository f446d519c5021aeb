//! CLI entry point for the salary insights tool.
//!
//! Provides subcommands for the world map averages, a per-country report
//! under a chosen selection, and a listing of the countries in the dataset.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use salary_insights::{
    aggregate::TimeRepr,
    config::{DEFAULT_SOURCE, FieldConfig, ViewOptions},
    fetch::load_records,
    output::{emit, log_map_summary, print_pretty, write_map_csv},
    selection::Selection,
    views::{CountryInsights, WorldMap, country_index},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "salary_insights")]
#[command(about = "Salary aggregates for the data-jobs world map and country pages", long_about = None)]
struct Cli {
    /// Path or URL of the survey CSV (defaults to $SALARY_DATA_SOURCE)
    #[arg(short, long, global = true, value_name = "FILE_OR_URL")]
    source: Option<String>,

    /// JSON file remapping dataset columns (defaults to $SALARY_FIELDS_PATH)
    #[arg(long, global = true)]
    fields: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum TimeArg {
    /// Bare year numbers
    Year,
    /// First-of-year dates
    Date,
}

impl From<TimeArg> for TimeRepr {
    fn from(arg: TimeArg) -> Self {
        match arg {
            TimeArg::Year => TimeRepr::Year,
            TimeArg::Date => TimeRepr::YearStart,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Average salary per country with the map's color domain
    WorldMap {
        /// JSON file to write the map to (logged when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Also write `code,average` rows to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },
    /// Chart series for one country under a selection
    Country {
        /// Country code as found in the dataset (e.g. "USA")
        #[arg(short, long)]
        code: String,

        /// Job category to toggle into the selection (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Company size to toggle into the selection (repeatable)
        #[arg(long = "size")]
        sizes: Vec<String>,

        /// Number of job categories in the ranking
        #[arg(short = 'n', long, default_value_t = 5)]
        top: usize,

        /// Time axis representation for the salary trend
        #[arg(long, value_enum, default_value_t = TimeArg::Year)]
        time: TimeArg,

        /// Drop rows whose salary is not a number
        #[arg(long, default_value_t = false)]
        skip_invalid: bool,

        /// Rank categories and sizes without their own selection applied
        #[arg(long, default_value_t = false)]
        unfiltered_selectors: bool,

        /// JSON file to write the report to (logged when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List the countries present in the dataset
    Countries,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/salary_insights.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("salary_insights.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let source = cli
        .source
        .or_else(|| std::env::var("SALARY_DATA_SOURCE").ok())
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());
    let fields_path = cli
        .fields
        .or_else(|| std::env::var("SALARY_FIELDS_PATH").ok());
    let fields = FieldConfig::load_or_default(fields_path.as_deref())?;

    let records = load_records(&source).await?;

    match cli.command {
        Commands::WorldMap { output, csv } => {
            let map = WorldMap::build(&records, &fields);
            log_map_summary(&map);

            if let Some(path) = csv {
                write_map_csv(&path, &map.scan)?;
                info!(path = %path, "Map CSV written");
            }
            emit(output.as_deref(), &map)?;
        }
        Commands::Country {
            code,
            categories,
            sizes,
            top,
            time,
            skip_invalid,
            unfiltered_selectors,
            output,
        } => {
            let options = ViewOptions {
                top_n: top,
                time_repr: time.into(),
                skip_invalid_measures: skip_invalid,
                unfiltered_selectors,
            };
            let mut view = CountryInsights::new(&records, &code, fields, options);
            if view.records().is_empty() {
                warn!(code = %code, "No records for country");
            }

            let mut selection = Selection::default();
            for category in &categories {
                selection.toggle_category(category);
            }
            for size in &sizes {
                selection.toggle_size(size);
            }
            view.set_selection(selection);

            let report = view.report();
            print_pretty(&report.selection);
            emit(output.as_deref(), &report)?;
        }
        Commands::Countries => {
            let countries = country_index(&records, &fields);

            info!(total = countries.len(), "Country list built");
            for country in &countries {
                info!(
                    code = %country.code,
                    name = %country.name,
                    records = country.records,
                    "Country"
                );
            }
        }
    }

    Ok(())
}

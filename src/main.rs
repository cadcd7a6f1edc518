use anyhow::Context;
use clap::{Parser, Subcommand};
use payroll_search::{
    config::Config,
    providers::create_source,
    search::{DocumentKind, SearchFilters, SearchService},
    AppError,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "payroll-search")]
#[command(about = "Search payroll records from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (overrides PAYROLL_SEARCH_CONFIG)
    #[arg(short, long, global = true, env = "PAYROLL_SEARCH_CONFIG")]
    config: Option<PathBuf>,

    /// Print Prometheus metrics to stderr after the command
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranked keyword search
    Search {
        #[arg(value_name = "QUERY")]
        query: String,

        /// Restrict to a record kind (repeatable)
        #[arg(short = 't', long = "type", value_name = "KIND")]
        types: Vec<DocumentKind>,

        /// Restrict employees to a department (repeatable)
        #[arg(short, long = "department", value_name = "DEPARTMENT")]
        departments: Vec<String>,

        /// Restrict by status, e.g. active, paid (repeatable)
        #[arg(short, long, value_name = "STATUS")]
        status: Vec<String>,
    },

    /// Autocomplete suggestions
    Suggest {
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Record counts per collection
    Stats,

    /// Index statistics
    Index,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code as u8)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(AppError::from)
    .context("Failed to load configuration")?;

    init_tracing(&config);

    if config.observability.metrics_enabled {
        if let Err(e) = payroll_search::metrics::init_metrics() {
            tracing::warn!("Failed to initialize metrics: {}", e);
        }
    }

    tracing::debug!(backend = ?config.source.backend, "Creating record source");
    let source = create_source(&config.source)?;
    let service = SearchService::load(source.as_ref(), config.search.clone())
        .await
        .map_err(AppError::from)?;

    match cli.command {
        Commands::Search {
            query,
            types,
            departments,
            status,
        } => {
            let filters = SearchFilters::new()
                .with_types(types)
                .with_departments(departments)
                .with_status(status);
            print_json(&service.search(&query, Some(&filters)))?;
        }
        Commands::Suggest { query } => print_json(&service.suggestions(&query))?,
        Commands::Stats => print_json(&service.quick_stats())?,
        Commands::Index => print_json(&service.index_stats())?,
    }

    if cli.metrics && config.observability.metrics_enabled {
        eprintln!("{}", payroll_search::metrics::gather_metrics());
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("payroll_search={}", config.observability.log_level).into()
    });

    // stdout carries command output; logs go to stderr
    let registry = tracing_subscriber::registry().with(filter);
    if config.observability.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

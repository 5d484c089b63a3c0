use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdm_core::charts::{anomaly_trend_chart, dashboard, gantt_chart, predicted_vs_actual_chart};
use pdm_core::common::time::parse_date;
use pdm_core::common::utils::slugify;
use pdm_core::schedule::builtin_plans;
use pdm_core::{
    ErrCode, Exporter, PdmConfig, PdmError, SensorDataset, SensorField, TrendAnalyzer,
};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "pdm", about = "Predictive maintenance trend estimation and chart data")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, env = "PDM_CONFIG")]
    config: Option<PathBuf>,

    /// Sensor dataset CSV
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Directory for figures and tables
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 2×2 sensor dashboard
    Dashboard,
    /// Anomaly trend, rolling band and failure projection for one asset
    Trend {
        #[arg(short, long)]
        asset: Option<String>,
        #[arg(short, long)]
        threshold: Option<f64>,
        #[arg(short, long)]
        window: Option<usize>,
    },
    /// Gantt charts of the maintenance plans
    Schedule {
        /// Plan start date, YYYY-MM-DD
        #[arg(short, long)]
        start: Option<String>,
    },
    /// Everything
    All,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        match error_code(&e) {
            Some(code) => error!(code = %code, error = %format!("{:#}", e), "pdm failed"),
            None => error!(error = %format!("{:#}", e), "pdm failed"),
        }
        std::process::exit(1);
    }
}

/// Code of the first `PdmError` in the cause chain
fn error_code(e: &anyhow::Error) -> Option<ErrCode> {
    e.chain()
        .find_map(|cause| cause.downcast_ref::<PdmError>())
        .map(PdmError::errcode)
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<PdmConfig> {
    let mut config = match &cli.config {
        Some(path) => PdmConfig::from_path(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => PdmConfig::default(),
    };

    if let Some(data) = &cli.data {
        config.data_path = data.clone();
    }
    if let Some(out) = &cli.out {
        config.output_dir = out.clone();
    }
    match &cli.command {
        Command::Trend {
            asset,
            threshold,
            window,
        } => {
            if let Some(asset) = asset {
                config.trend_asset = asset.clone();
            }
            if let Some(threshold) = threshold {
                config.failure_threshold = *threshold;
            }
            if let Some(window) = window {
                config.rolling_window = *window;
            }
        }
        Command::Schedule { start: Some(start) } => {
            config.schedule_start = parse_date(start)?;
        }
        _ => {}
    }

    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        data = %config.data_path.display(),
        out = %config.output_dir.display(),
        "starting"
    );

    let exporter = Exporter::new(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;

    match cli.command {
        Command::Dashboard => run_dashboard(&config, &exporter, &load_dataset(&config)?),
        Command::Trend { .. } => run_trend(&config, &exporter, &load_dataset(&config)?),
        Command::Schedule { .. } => run_schedule(&config, &exporter),
        Command::All => {
            let dataset = load_dataset(&config)?;
            run_dashboard(&config, &exporter, &dataset)?;
            run_trend(&config, &exporter, &dataset)?;
            run_schedule(&config, &exporter)
        }
    }
}

fn load_dataset(config: &PdmConfig) -> Result<SensorDataset> {
    SensorDataset::from_path(&config.data_path)
        .with_context(|| format!("loading dataset {}", config.data_path.display()))
}

fn run_dashboard(config: &PdmConfig, exporter: &Exporter, dataset: &SensorDataset) -> Result<()> {
    let figure = dashboard(dataset, &config.dashboard_assets)?;
    exporter.write_figure("dashboard", &figure)?;
    Ok(())
}

fn run_trend(config: &PdmConfig, exporter: &Exporter, dataset: &SensorDataset) -> Result<()> {
    let asset = &config.trend_asset;
    let series = dataset.filter_asset(asset)?.series(SensorField::AnomalyScore);
    let report = TrendAnalyzer::from_config(config)
        .analyze(asset, series)
        .with_context(|| format!("trend analysis for {}", asset))?;

    let slug = slugify(asset);
    exporter.write_figure(&format!("anomaly_trend_{}", slug), &anomaly_trend_chart(&report))?;
    exporter.write_figure(
        &format!("predicted_vs_actual_{}", slug),
        &predicted_vs_actual_chart(&report),
    )?;
    exporter.write_trend_table(&report)?;

    println!(
        "{}: slope={:.5} intercept={:.5} r2={:.3} failure threshold {} reached ≈ day {:.1}",
        asset,
        report.fit.slope,
        report.fit.intercept,
        report.fit.r_squared,
        report.projection.threshold_value,
        report.projection.projected_day
    );
    Ok(())
}

fn run_schedule(config: &PdmConfig, exporter: &Exporter) -> Result<()> {
    for plan in builtin_plans(config.schedule_start)? {
        let figure = gantt_chart(&plan, config.tick_interval_days);
        exporter.write_figure(&format!("gantt_{}", slugify(&plan.title)), &figure)?;
        exporter.write_schedule(&plan)?;
    }
    Ok(())
}

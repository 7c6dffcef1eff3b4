//! GFC report
//!
//! Prints the current open fiscal year and the pre-tax order totals of a
//! three-year window.
//!
//! Usage: `GFC__REPORT__REFERENCE_YEAR=2022 cargo run --bin gfc-report`

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use gfc_core::reports::{ReportError, ReportService, ThreeYearTotals};
use gfc_core::source::{FiscalYearSource, OrderSource};
use gfc_shared::types::format_amount;
use gfc_shared::{AppConfig, AppError, AppResult, LogConfig};
use gfc_store::{JsonFileSource, sample};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let err = AppError::from(e);
            eprintln!("error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    init_tracing(&config.log);

    match execute(&config) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = err.error_code(), error = %err, "Report failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Logs go to stderr so stdout only carries the report.
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn execute(config: &AppConfig) -> AppResult<String> {
    if let Some(path) = &config.report.dataset_path {
        info!(path = %path.display(), "Reading dataset file");
        let source = Arc::new(JsonFileSource::new(path.clone()));
        let service = ReportService::new(Arc::clone(&source), source);
        generate(&service, config.report.reference_year)
    } else {
        info!("Reading built-in sample dataset");
        let orders = sample::order_source().map_err(|e| AppError::DataSource(e.to_string()))?;
        let service = ReportService::new(Arc::new(sample::fiscal_year_source()), Arc::new(orders));
        generate(&service, config.report.reference_year)
    }
}

/// Runs both report operations and renders them.
///
/// Without a configured reference year the open fiscal year is used, and
/// failing to find it fails the whole report.
fn generate<F: FiscalYearSource, O: OrderSource>(
    service: &ReportService<F, O>,
    reference_year: Option<i32>,
) -> AppResult<String> {
    let open_year = service.current_open_fiscal_year();

    let reference_year = match (reference_year, &open_year) {
        (Some(year), _) => year,
        (None, Ok(year)) => *year,
        (None, Err(err)) => return Err(app_error(err)),
    };

    let totals = service
        .total_before_tax_over_three_years(reference_year)
        .map_err(|e| app_error(&e))?;

    Ok(render(&open_year, &totals))
}

fn app_error(err: &ReportError) -> AppError {
    match err {
        ReportError::NoOpenFiscalYear => AppError::NotFound(err.to_string()),
        ReportError::MultipleOpenFiscalYears(_) => AppError::BusinessRule(err.to_string()),
        ReportError::YearOutOfRange(_) => AppError::Validation(err.to_string()),
        ReportError::AmountOverflow { .. } | ReportError::Source(_) => {
            AppError::DataSource(err.to_string())
        }
    }
}

fn render(open_year: &Result<i32, ReportError>, totals: &ThreeYearTotals) -> String {
    let mut lines = Vec::with_capacity(6);

    lines.push(match open_year {
        Ok(year) => format!("Open fiscal year: {year}"),
        Err(err) => format!("Open fiscal year: none ({err})"),
    });

    let reference_year = totals.reference_year();
    lines.push(format!(
        "Pre-tax order totals, {}-{reference_year}:",
        reference_year - 2
    ));
    for (year, total) in totals.iter() {
        lines.push(format!("  {year:<6}{:>14}", format_amount(total)));
    }
    let grand_total = totals
        .grand_total()
        .map_or_else(|| "overflow".to_string(), format_amount);
    lines.push(format!("  {:<6}{grand_total:>14}", "Total"));

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

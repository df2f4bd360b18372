use compliance_gate::adapters::outbound::console::StderrLogger;
use compliance_gate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use compliance_gate::adapters::outbound::process::{
    CommandDependencyGraph, CommandLicenseInventory, SystemProcessRunner,
};
use compliance_gate::application::dto::{IgnoreCheckRequest, LicenseCheckRequest};
use compliance_gate::application::services::DEFAULT_MAX_HOPS;
use compliance_gate::application::use_cases::{CheckIgnoreEntriesUseCase, CheckLicensesUseCase};
use compliance_gate::cli::{Args, Command};
use compliance_gate::compliance::policies::DEFAULT_WARN_DAYS;
use compliance_gate::config::{discover_config, load_config_from_path, warn_unknown_fields, ConfigFile};
use compliance_gate::ports::outbound::{ComplianceLogger, ReportWriter};
use compliance_gate::shared::error::ExitCode;
use compliance_gate::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_APPROVED_FILE: &str = ".approved-dep.csv";
const DEFAULT_IGNORE_FILE: &str = ".trivyignore";

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    let logger = StderrLogger::new();

    // The checks block on external tools; keep the runtime free for the signal
    let worker = tokio::task::spawn_blocking(move || run(args, logger));

    let exit_code = tokio::select! {
        joined = worker => match joined {
            Ok(code) => code,
            Err(e) => {
                logger.fatal(&format!("An unexpected error occurred: {}", e));
                ExitCode::Failure
            }
        },
        _ = wait_for_interrupt() => {
            logger.critical("Operation interrupted by the user.");
            ExitCode::Interrupted
        }
    };

    process::exit(exit_code.as_i32());
}

/// Resolves on Ctrl-C; never resolves if the handler can't be installed
async fn wait_for_interrupt() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

fn run(args: Args, logger: StderrLogger) -> ExitCode {
    match execute(args, logger) {
        Ok(code) => code,
        Err(e) => {
            logger.fatal(&format!("An error occurred: {}", e));
            for cause in e.chain().skip(1) {
                logger.fatal(&format!("Caused by: {}", cause));
            }
            ExitCode::for_error(&e)
        }
    }
}

fn execute(args: Args, logger: StderrLogger) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref(), &logger)?;

    match args.command {
        Command::Licenses {
            approved_file,
            json_report,
        } => check_licenses(&config, approved_file, json_report, logger),
        Command::Ignores {
            max_days,
            ignore_file,
            warn_days,
        } => check_ignores(&config, max_days, ignore_file, warn_days, logger),
    }
}

/// Loads the explicit config file, or the one in the working directory if any
fn load_config(explicit: Option<&Path>, logger: &StderrLogger) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };

    match config {
        Some(config) => {
            warn_unknown_fields(&config, logger);
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

fn check_licenses(
    config: &ConfigFile,
    approved_file: Option<PathBuf>,
    json_report: Option<PathBuf>,
    logger: StderrLogger,
) -> Result<ExitCode> {
    logger.info("Starting dependency licenses check...");

    // Create adapters (Dependency Injection)
    let inventory_runner = SystemProcessRunner::new(logger);
    let inventory = match config.inventory_command() {
        Some(command) => CommandLicenseInventory::new(inventory_runner, command),
        None => CommandLicenseInventory::pip_licenses(inventory_runner),
    };
    let graph_runner = SystemProcessRunner::new(logger);
    let graph = match config.graph_command() {
        Some(template) => CommandDependencyGraph::new(graph_runner, template),
        None => CommandDependencyGraph::poetry(graph_runner),
    };

    let use_case = CheckLicensesUseCase::new(FileSystemReader::new(), inventory, graph, logger);

    // CLI flag > config file > default
    let approved_file = approved_file
        .or_else(|| config.approved_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_APPROVED_FILE));
    let max_hops = config.max_hops.unwrap_or(DEFAULT_MAX_HOPS);
    let request = LicenseCheckRequest::new(approved_file, max_hops);

    let outcome = use_case.execute(&request)?;

    if let Some(path) = json_report {
        let json = outcome.report().to_json()?;
        FileSystemWriter::new(path.clone()).write_report(&json)?;
        logger.info(&format!("JSON report written to {}", path.display()));
    }

    logger.info("Licenses check completed.");
    Ok(outcome.exit_code())
}

fn check_ignores(
    config: &ConfigFile,
    max_days: u32,
    ignore_file: Option<PathBuf>,
    warn_days: Option<u32>,
    logger: StderrLogger,
) -> Result<ExitCode> {
    let use_case = CheckIgnoreEntriesUseCase::new(FileSystemReader::new(), logger);

    let ignore_file = ignore_file
        .or_else(|| config.ignore_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_IGNORE_FILE));
    let warn_days = warn_days.or(config.warn_days).unwrap_or(DEFAULT_WARN_DAYS);
    let today = chrono::Local::now().date_naive();
    let request = IgnoreCheckRequest::new(ignore_file, max_days, warn_days, today);

    let outcome = use_case.execute(&request)?;
    Ok(outcome.exit_code())
}

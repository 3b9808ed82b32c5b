use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::GlobalConfig;

use chorebot::ChorebotError;
use chorebot::automation::{Credentials, DriverProcess, DriverProcessConfig, ScriptedAutomation};
use chorebot::counter::RunCounter;
use chorebot::journal::RunJournal;
use chorebot::publish::{ArtifactPublisher, GitPublisher, RecordingPublisher};
use chorebot::runner::{Driver, PublishPolicy, RunReport};
use chorebot::storage::{FileCounterStore, FileJournal};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chorebot")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("chorebot.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &GlobalConfig) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        // Default: perform one run
        None => handle_run(false, config),
        Some(Commands::Run { dry_run }) => handle_run(*dry_run, config),
        Some(Commands::Count) => handle_count(config),
        Some(Commands::Log { lines }) => handle_log(*lines, config),
        Some(Commands::Publish { message }) => handle_publish(message.clone(), config),
    }
}

fn publish_policy(config: &GlobalConfig) -> PublishPolicy {
    PublishPolicy {
        interval: if config.publish.enabled { config.publish.interval } else { 0 },
        artifact_paths: config.artifact_paths(),
        commit_message: config.publish.commit_message.clone(),
    }
}

fn handle_run(dry_run: bool, config: &GlobalConfig) -> Result<()> {
    info!("Performing run (dry_run: {})", dry_run);

    let counter = RunCounter::new(FileCounterStore::new(&config.files.counter_file));
    let journal = RunJournal::new(FileJournal::new(&config.files.journal_file));
    let target = config.automation.target();
    let script = config.automation.script();
    let policy = publish_policy(config);

    let report = if dry_run {
        println!("{}", "Dry run: using the in-process automation fake".yellow());
        let credentials = Credentials::new("dry-run@localhost", "unused");
        let mut driver = Driver::new(
            ScriptedAutomation::succeeding(),
            RecordingPublisher::new(),
            counter,
            journal,
            policy,
        );
        driver.run(&credentials, &target, &script)?
    } else {
        let credentials = match config::load_credentials(&config.credentials) {
            Ok(credentials) => credentials,
            Err(e) => return abort_run(journal, e),
        };
        let driver_command = match &config.automation.driver_command {
            Some(command) => command.clone(),
            None => {
                return abort_run(
                    journal,
                    ChorebotError::ConfigMissing("automation.driver-command is not configured".to_string()),
                );
            }
        };
        if config.automation.channel_url.is_empty() {
            return abort_run(
                journal,
                ChorebotError::ConfigMissing("automation.channel-url is not configured".to_string()),
            );
        }

        let automation = DriverProcess::new(DriverProcessConfig::new(
            driver_command,
            Duration::from_millis(config.automation.wait_timeout_ms),
        ));
        let publisher = GitPublisher::new(&config.publish.work_dir);
        let mut driver = Driver::new(automation, publisher, counter, journal, policy);
        driver.run(&credentials, &target, &script)?
    };

    report_run(&report);
    Ok(())
}

/// Journal a startup error, then fail the run with it.
fn abort_run(mut journal: RunJournal<FileJournal>, err: ChorebotError) -> Result<()> {
    journal.error(err.to_string());
    journal.separator();
    journal.flush();
    Err(err.into())
}

fn report_run(report: &RunReport) {
    if report.published {
        println!("{}", "Run artifacts published to remote.".cyan());
    }
    if report.outcome.succeeded() {
        println!("{} run #{}", "Run complete:".green(), report.execution);
    } else {
        println!("{} {}", "Run failed:".red(), report.outcome);
        std::process::exit(1);
    }
}

fn handle_count(config: &GlobalConfig) -> Result<()> {
    let counter = RunCounter::new(FileCounterStore::new(&config.files.counter_file));
    let count = counter.current()?;
    println!("{} {}", "Total executions:".green(), count);
    Ok(())
}

fn handle_log(lines: usize, config: &GlobalConfig) -> Result<()> {
    let journal = RunJournal::new(FileJournal::new(&config.files.journal_file));
    let entries = journal.tail(lines)?;

    if entries.is_empty() {
        println!("{}", "Journal is empty.".yellow());
        return Ok(());
    }
    for entry in entries {
        println!("{}", entry);
    }
    Ok(())
}

fn handle_publish(message: Option<String>, config: &GlobalConfig) -> Result<()> {
    let mut journal = RunJournal::new(FileJournal::new(&config.files.journal_file));
    let publisher = GitPublisher::new(&config.publish.work_dir);
    let message = message.unwrap_or_else(|| config.publish.commit_message.clone());

    match publisher.publish(&config.artifact_paths(), &message) {
        Ok(()) => {
            journal.info("Run artifacts pushed to remote repository.");
            journal.flush();
            println!("{}", "Run artifacts published to remote.".green());
            Ok(())
        }
        Err(e) => {
            journal.error(format!("Artifact publish failed: {}", e));
            journal.flush();
            Err(e.into())
        }
    }
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = GlobalConfig::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}

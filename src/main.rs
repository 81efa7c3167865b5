#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # tally
//!
//! Terminal driver for the GPA calculation engine: shows the saved record,
//! runs the calculation over it, or dumps it as JSON. The record itself is
//! produced by whatever front-end drives [`tally::Session`]; this binary is
//! the minimal collaborator for inspecting and computing over it.

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use tabled::{Table, settings::Style};
use tally::{GradingConfig, LoadOutcome, Record, RecordStore, Session};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Print the saved courses and prior standing
    Show,
    /// Compute semester GPA, cumulative GPA, and classification
    Calculate,
    /// Print the saved record as JSON
    Info,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    let show = pure(Cmd::Show)
        .to_options()
        .command("show")
        .help("Print the saved courses and prior standing");

    let calculate = pure(Cmd::Calculate)
        .to_options()
        .command("calculate")
        .help("Compute semester GPA, cumulative GPA, and classification");

    let info = pure(Cmd::Info)
        .to_options()
        .command("info")
        .help("Print the saved record as JSON");

    let cmd = construct!([show, calculate, info]);

    cmd.to_options().descr("Grade-point average calculator").run()
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let config = GradingConfig::from_env().context("configuration is not usable")?;
    let session = Session::new(config, RecordStore::at_default_location());

    match options() {
        Cmd::Show => show(&session)?,
        Cmd::Calculate => calculate(&session)?,
        Cmd::Info => info(&session)?,
    };

    Ok(())
}

/// Loads the saved record, reporting a friendly line when there is none yet.
fn load(session: &Session) -> Result<Option<Record>> {
    match session.load_record() {
        Ok(LoadOutcome::Record(record)) => Ok(Some(record)),
        Ok(LoadOutcome::NotFound) => {
            println!("No saved record at {} yet.", session.store().path().display());
            Ok(None)
        }
        Err(e) => Err(e).context("could not load the saved record"),
    }
}

/// Prints the saved course table and prior standing.
fn show(session: &Session) -> Result<()> {
    let Some(record) = load(session)? else {
        return Ok(());
    };

    if record.courses().is_empty() {
        println!("No courses saved.");
    } else {
        println!("{}", Table::new(record.courses()).with(Style::modern()));
    }

    match (record.prior_cgpa(), record.prior_units()) {
        (Some(cgpa), Some(units)) => {
            println!("Prior standing: CGPA {cgpa:.2} over {units} units");
        }
        _ => println!("No prior standing recorded."),
    }

    Ok(())
}

/// Runs the calculation over the saved record and prints the verdict.
fn calculate(session: &Session) -> Result<()> {
    let Some(record) = load(session)? else {
        return Ok(());
    };

    let result = session.calculate(
        record.courses(),
        &record.prior_cgpa_text(),
        &record.prior_units_text(),
    )?;

    println!("{}", Table::new([&result]).with(Style::modern()));

    let verdict = if result.classification() == session.config().classification().floor() {
        result.classification().red().bold()
    } else {
        result.classification().green().bold()
    };
    println!("Classification: {verdict}");

    Ok(())
}

/// Dumps the saved record as pretty JSON.
fn info(session: &Session) -> Result<()> {
    let Some(record) = load(session)? else {
        return Ok(());
    };
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # markbook
//!
//! CLI front end for the gradebook computation engine. Loads gradebook
//! JSON documents from disk or over http(s), prints computed result
//! tables, records normalized score edits, and exports results as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use markbook::{Gradebook, ScoreUpdate, ScoreValue, report};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Compute and print the whole gradebook
    Grade(String),
    /// Check the grading schema for configuration problems
    Check(String),
    /// Record one raw score
    Set(String, String, String, String),
    /// Export computed results as JSON
    Export(String, Option<PathBuf>),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the gradebook source
    fn b() -> impl Parser<String> {
        positional("BOOK").help("Path or http(s) URL of a gradebook JSON document")
    }

    /// parses the enrollment id
    fn e() -> impl Parser<String> {
        positional("ENROLLMENT").help("Enrollment id of the student")
    }

    /// parses the component key
    fn c() -> impl Parser<String> {
        positional("COMPONENT").help("Component key to record against")
    }

    /// parses the raw value
    fn v() -> impl Parser<String> {
        positional("VALUE").help("Raw value to record")
    }

    /// parses the optional export destination
    fn o() -> impl Parser<Option<PathBuf>> {
        short('o')
            .long("output")
            .help("Write results to this file instead of stdout")
            .argument::<PathBuf>("OUT")
            .optional()
    }

    let grade = construct!(Cmd::Grade(b()))
        .to_options()
        .command("grade")
        .help("Compute results for every student and print the gradebook");

    let check = construct!(Cmd::Check(b()))
        .to_options()
        .command("check")
        .help("Check the grading schema for configuration problems");

    let set = construct!(Cmd::Set(b(), e(), c(), v()))
        .to_options()
        .command("set")
        .help("Normalize and record a raw score, then save the book");

    let export = construct!(Cmd::Export(b(), o()))
        .to_options()
        .command("export")
        .help("Export computed results as JSON");

    let cmd = construct!([grade, check, set, export]);

    cmd.to_options().descr("Gradebook computation engine").run()
}

/// Logs every advisory schema warning in the loaded book.
fn warn_schema(book: &Gradebook) {
    for warning in book.config.check() {
        tracing::warn!("{warning}");
    }
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

    match options() {
        Cmd::Grade(source) => {
            let book = Gradebook::load(&source)?;
            warn_schema(&book);
            println!("{}", report::render(&book));
        }
        Cmd::Check(source) => {
            let book = Gradebook::load(&source)?;
            let warnings = book.config.check();
            if warnings.is_empty() {
                println!("{}", "Schema looks good.".green());
            } else {
                for warning in &warnings {
                    println!("{} {warning}", "warning:".yellow().bold());
                }
                std::process::exit(1);
            }
        }
        Cmd::Set(source, enrollment, component, value) => {
            if Gradebook::is_remote(&source) {
                bail!("cannot save edits back to a remote gradebook, download {source} first");
            }
            let mut book = Gradebook::load(&source)?;
            let update = ScoreUpdate::normalized(
                book.config.mode(),
                enrollment,
                component,
                ScoreValue::parse(&value),
            );
            book.apply(&update)
                .with_context(|| format!("could not record `{}`", update.component_key))?;
            book.save(Path::new(&source))?;

            if let Some(student) = book.student(&update.enrollment_id) {
                let result = book.config.compute(student);
                tracing::info!(
                    "recorded {} = {} for {}",
                    update.component_key,
                    update.value,
                    student.name
                );
                let status = result.status.map_or_else(
                    || "-".normal(),
                    |status| {
                        if status.is_passing() {
                            status.to_string().green()
                        } else {
                            status.to_string().red()
                        }
                    },
                );
                match result.score {
                    Some(score) => println!("{}: {score} {status}", student.name.bold()),
                    None => println!("{}: {status}", student.name.bold()),
                }
            }
        }
        Cmd::Export(source, out) => {
            let book = Gradebook::load(&source)?;
            warn_schema(&book);
            let results = report::export(&book);
            let json = serde_json::to_string_pretty(&results)
                .context("Failed to serialize computed results")?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Could not write {}", path.display()))?;
                    tracing::info!("wrote {}", path.display());
                }
                None => println!("{json}"),
            }
        }
    };

    Ok(())
}

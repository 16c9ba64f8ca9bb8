//! `dynon` CLI — reformat, query, and answer requests over JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print JSON (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | dynon fmt
//!
//! # Reformat from file to file, compact
//! dynon fmt -i data.json -o data.min.json --compact
//!
//! # Look up a dotted path (segments match case-insensitively)
//! dynon get hours.alice.monday -i timesheet.json
//!
//! # Answer an accounting request against a timesheet
//! dynon hours --request request.json --hours-file timesheet.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dynon_core::{Double, Map, Value};
use std::io::{self, Read};

/// Reply sent for messages that do not parse or are not addressed to
/// receiving.
const INVALID_REQUEST_REPLY: &str =
    r#"{"from":"receiving","response":"Invalid message request"}"#;

#[derive(Parser)]
#[command(
    name = "dynon",
    version,
    about = "DYNON (Dynamic Object Notation) CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reformat a JSON document
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit compact JSON instead of pretty
        #[arg(long)]
        compact: bool,
    },
    /// Look up a dotted path and print the subtree
    Get {
        /// Dotted path, e.g. "hours.Alice.Monday" (segments match
        /// case-insensitively)
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit compact JSON instead of pretty
        #[arg(long)]
        compact: bool,
    },
    /// Answer an accounting-department request against an hours file
    Hours {
        /// Request message file (reads from stdin if omitted)
        #[arg(long)]
        request: Option<String>,
        /// Timesheet file with the per-day hours
        #[arg(long, default_value = "./hours.json")]
        hours_file: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt {
            input,
            output,
            compact,
        } => {
            let text = read_input(input.as_deref())?;
            let doc = dynon_core::parse(&text).context("Failed to parse JSON input")?;
            write_output(output.as_deref(), &render(&doc, compact))?;
        }
        Commands::Get {
            path,
            input,
            output,
            compact,
        } => {
            let text = read_input(input.as_deref())?;
            let doc = dynon_core::parse(&text).context("Failed to parse JSON input")?;
            let node = doc
                .find_path(&path)
                .with_context(|| format!("No value at path: {}", path))?;
            write_output(output.as_deref(), &render(node, compact))?;
        }
        Commands::Hours {
            request,
            hours_file,
            output,
        } => {
            let msg = read_input(request.as_deref())?;
            let reply = answer_request(&msg, &hours_file);
            write_output(output.as_deref(), &reply)?;
        }
    }

    Ok(())
}

fn render(value: &Value, compact: bool) -> String {
    if compact {
        value.to_json()
    } else {
        value.to_json_pretty()
    }
}

/// Answer an accounting-department message against the hours file.
///
/// Failures are part of the protocol: a malformed or misaddressed message
/// and a missing or corrupt hours file all produce an error reply rather
/// than a process failure.
fn answer_request(msg: &str, hours_file: &str) -> String {
    let Ok(Value::Map(mut request)) = dynon_core::parse(msg) else {
        return INVALID_REQUEST_REPLY.to_string();
    };
    let addressed_here = request
        .find_case("to")
        .and_then(Value::as_str)
        .is_some_and(|to| to.eq_ignore_ascii_case("receiving"));
    if !addressed_here {
        return INVALID_REQUEST_REPLY.to_string();
    }

    let mut reply = Map::new();
    reply.append("from", "receiving");
    if let Some(sender) = request.find_case("from").and_then(Value::as_str) {
        reply.append("to", sender);
    }
    let request_kind = request
        .find_case("request")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    match request_kind.as_str() {
        "hours" => {
            let timesheet = dynon_core::parse_file(hours_file).ok();
            let sheet = timesheet
                .as_ref()
                .and_then(Value::as_map)
                .and_then(|m| m.find("hours"))
                .and_then(Value::as_map);
            match (request.extract("people"), sheet) {
                (Some(Value::Map(mut people)), Some(sheet)) => {
                    for (name, cell) in people.iter_mut() {
                        // Whatever the sender put in the cell, it becomes a
                        // two-decimal running total.
                        let total = cell.make_double(0.0);
                        total.set_precision(2);
                        if let Some(days) = sheet.find_case(name).and_then(Value::as_map) {
                            for (_, worked) in days {
                                if let Ok(hours) = worked.to_double() {
                                    *total += hours;
                                }
                            }
                        }
                    }
                    reply.append("people", people);
                }
                _ => {
                    reply.append("response", "Request failed: Hours file is corrupt");
                }
            }
        }
        "info" => {
            if let Some(employee) = request.find_case("employee").and_then(Value::as_str) {
                let mut total = Double::new(0.0);
                total.set_precision(2);
                if let Ok(timesheet) = dynon_core::parse_file(hours_file) {
                    if let Some(days) = timesheet
                        .find_path(&format!("hours.{employee}"))
                        .and_then(Value::as_map)
                    {
                        for (_, worked) in days {
                            if let Ok(hours) = worked.to_double() {
                                total += hours;
                            }
                        }
                    }
                }
                let mut summary = Map::new();
                summary.append(employee, total);
                reply.append("response", summary);
            } else {
                reply.append("response", "No employee given");
            }
        }
        other => {
            reply.append("response", format!("Requested item not known: {other}"));
        }
    }

    Value::from(reply).to_json()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

//! Output formatting: table, JSON, YAML, plain.
//!
//! List commands render in the format selected by `--output`. Table uses
//! `tabled`, structured formats use serde, plain emits one identifier per
//! line. Mutating commands bypass this entirely and print a one-line
//! status string.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a bordered table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).expect("serialization should not fail")
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(data).expect("serialization should not fail")
        }
        OutputFormat::Yaml => serde_yaml::to_string(data).expect("serialization should not fail"),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Print the one-line status of a mutating operation.
///
/// On success the raw JSON answer becomes the status; on failure the
/// error text itself does -- either way the command "succeeds". Callers
/// that need to distinguish must inspect the printed text, matching the
/// original tool's contract.
pub fn print_status(label: &str, result: Result<serde_json::Value, dnac_api::Error>) {
    match result {
        Ok(value) => println!("{label}: {value}"),
        Err(err) => println!("{label}: {err}"),
    }
}

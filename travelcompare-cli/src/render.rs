//! Rendering of travel reports for the terminal.

use std::io::Write;

use travelcompare_core::TravelDataReport;

use crate::CliError;

/// Shown in place of time and distance for modes without a route.
const NO_ROUTE: &str = "no route";

const MODE_WIDTH: usize = 18;
const TIME_WIDTH: usize = 12;

/// How the report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum OutputFormat {
    /// One aligned row per mode.
    #[default]
    Table,
    /// Pretty-printed JSON of the whole report.
    Json,
}

pub(crate) fn write_report(
    writer: &mut dyn Write,
    report: &TravelDataReport,
    format: OutputFormat,
) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Table => render_table(report),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).map_err(CliError::SerializeReport)?
        }
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

/// Render one row per mode in canonical order.
pub(crate) fn render_table(report: &TravelDataReport) -> String {
    let mut lines = vec![format!(
        "{:<MODE_WIDTH$}{:<TIME_WIDTH$}{}",
        "Mode", "Time", "Distance"
    )];
    lines.extend(report.formatted.iter().map(|(mode, entry)| match entry {
        Some(data) => format!(
            "{:<MODE_WIDTH$}{:<TIME_WIDTH$}{}",
            mode.label(),
            data.formatted_time,
            data.formatted_distance
        ),
        None => format!("{:<MODE_WIDTH$}{NO_ROUTE}", mode.label()),
    }));
    lines.join("\n")
}

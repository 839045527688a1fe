use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::report::Report;

pub fn render(report: &Report<Value>, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(report)?,
    }

    Ok(())
}

fn render_table(report: &Report<Value>) -> Result<(), CliError> {
    println!("request_id  : {}", report.meta.request_id);
    println!("generated_at: {}", report.meta.generated_at);
    if let Some(source) = report.meta.source {
        println!("source      : {source}");
    }
    println!("latency_ms  : {}", report.meta.latency_ms);

    if !report.meta.warnings.is_empty() {
        println!("warnings:");
        for warning in &report.meta.warnings {
            println!("  - {warning}");
        }
    }

    println!("data:");
    let pretty_data = serde_json::to_string_pretty(&report.data)?;
    for line in pretty_data.lines() {
        println!("  {line}");
    }

    Ok(())
}

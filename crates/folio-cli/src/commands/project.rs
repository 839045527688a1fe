use std::str::FromStr;
use std::time::Instant;

use serde_json::{json, Value};

use folio_core::{compute_projection, ContributionTiming, ProjectionParameters};

use crate::cli::ProjectArgs;
use crate::error::CliError;
use crate::report::Report;

pub fn run(args: &ProjectArgs) -> Result<Report<Value>, CliError> {
    let timing = ContributionTiming::from_str(&args.timing)?;
    let params = ProjectionParameters::new(
        args.start_amount,
        args.years,
        args.months,
        args.rate,
        args.contribution,
        timing,
    )?;

    let started = Instant::now();
    let trajectory = compute_projection(&params)?;
    let latency_ms = started.elapsed().as_millis() as u64;

    let data = json!({
        "start_amount": params.start_amount(),
        "total_months": params.total_months(),
        "annual_return_rate_pct": params.annual_return_rate_pct(),
        "monthly_growth_factor": params.monthly_growth_factor(),
        "contribution_amount": params.contribution_amount(),
        "timing": timing.as_str(),
        "final_value": trajectory.final_value(),
        "trajectory": trajectory.values(),
    });

    let mut report = Report::new(data).with_latency(latency_ms);
    if params.total_months() == 0 {
        report = report.with_warning("horizon is zero months; trajectory holds only the seed");
    }

    Ok(report)
}

//! Trend analysis command

use clap::Args;
use driftwatch_core::diff::{analyze_trends, TrendAnalysis};
use driftwatch_core::errors::{serialization_error, DriftwatchError};
use driftwatch_core::{log_op_end, log_op_error, log_op_start};
use driftwatch_core_types::CheckContext;

use super::OutputFormat;

#[derive(Debug, Args)]
pub struct TrendArgs {
    /// JSON file holding a chronological snapshot array, oldest first
    #[arg(long)]
    pub history: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn execute(args: TrendArgs) -> Result<i32, DriftwatchError> {
    let ctx = CheckContext::new();
    log_op_start!(
        "cli_trend",
        check_id = ctx.check_id.as_str(),
        history = args.history.as_str()
    );
    let start = std::time::Instant::now();

    let analysis = run(&args).map_err(|e| {
        log_op_error!(
            "cli_trend",
            &e,
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "cli_trend",
        duration_ms = start.elapsed().as_millis() as u64,
        snapshot_count = analysis.total_responses
    );

    match args.format {
        OutputFormat::Text => {
            println!("Trend analysis:");
            println!("  snapshots: {}", analysis.total_responses);
            println!("  period_ms: {}", analysis.period_ms);
            println!("  change_frequency: {:.2}", analysis.change_frequency);
            println!("  stability_score: {:.2}", analysis.stability_score);
            match &analysis.performance {
                Some(perf) => println!(
                    "  latency: {} (avg {:.0}ms)",
                    perf.direction.label(),
                    perf.average_response_time_ms
                ),
                None => println!("  latency: no measurements"),
            }
        }
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&analysis)
                .map_err(|e| serialization_error("render_output", "stdout", &e))?;
            println!("{}", rendered);
        }
    }

    Ok(0)
}

fn run(args: &TrendArgs) -> Result<TrendAnalysis, DriftwatchError> {
    let history = super::load_history(&args.history)?;
    Ok(analyze_trends(&history)?)
}

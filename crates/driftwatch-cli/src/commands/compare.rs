//! Snapshot comparison command

use clap::Args;
use driftwatch_core::diff::{compare_responses, render_human_summary, DiffResult};
use driftwatch_core::errors::{serialization_error, DriftwatchError};
use driftwatch_core::{log_op_end, log_op_error, log_op_start};
use driftwatch_core_types::CheckContext;

use super::OutputFormat;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Recorded snapshot file for the previous observation
    #[arg(long)]
    pub previous: String,

    /// Recorded snapshot file for the current observation
    #[arg(long)]
    pub current: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 2 when any breaking change is detected
    #[arg(long)]
    pub fail_on_breaking: bool,
}

pub fn execute(args: CompareArgs) -> Result<i32, DriftwatchError> {
    let ctx = CheckContext::new();
    log_op_start!(
        "cli_compare",
        check_id = ctx.check_id.as_str(),
        previous = args.previous.as_str(),
        current = args.current.as_str()
    );
    let start = std::time::Instant::now();

    let result = run(&args).map_err(|e| {
        log_op_error!(
            "cli_compare",
            &e,
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "cli_compare",
        duration_ms = start.elapsed().as_millis() as u64,
        total_changes = result.summary.total_changes,
        breaking_changes = result.summary.breaking_changes
    );

    match args.format {
        OutputFormat::Text => print!("{}", render_human_summary(&result)),
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&result)
                .map_err(|e| serialization_error("render_output", "stdout", &e))?;
            println!("{}", rendered);
        }
    }

    if args.fail_on_breaking && !result.breaking_changes.is_empty() {
        return Ok(2);
    }
    Ok(0)
}

fn run(args: &CompareArgs) -> Result<DiffResult, DriftwatchError> {
    let previous = super::load_snapshot(&args.previous)?;
    let current = super::load_snapshot(&args.current)?;
    Ok(compare_responses(Some(&previous), Some(&current))?)
}

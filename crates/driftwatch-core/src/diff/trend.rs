//! Trend analysis over a snapshot series.
//!
//! [`analyze_trends`] answers "how stable has this endpoint been" from a
//! chronological slice of recorded snapshots, reusing [`compare_responses`]
//! pairwise for change detection.

use crate::diff::engine::compare_responses;
use crate::diff::model::{PerformanceTrend, TrendAnalysis, TrendDirection};
use crate::errors::{insufficient_history, Result};
use crate::model::Response;

/// Analyze stability and latency drift over a chronological snapshot series.
///
/// # Arguments
///
/// * `snapshots` - Past responses for one endpoint, oldest first
///
/// # Errors
///
/// - `InsufficientHistory` — fewer than two snapshots supplied; a trend
///   needs at least one adjacent pair
pub fn analyze_trends(snapshots: &[Response]) -> Result<TrendAnalysis> {
    if snapshots.len() < 2 {
        return Err(insufficient_history(snapshots.len()));
    }

    let period_ms =
        (snapshots[snapshots.len() - 1].timestamp - snapshots[0].timestamp).num_milliseconds();

    // Change frequency over adjacent pairs. A pair that fails to compare
    // (unparseable body in either capture) counts as "no change observed"
    // and is skipped. Deliberately laxer than the fail-fast
    // `compare_responses` contract: one bad historical capture must not
    // make every trend over that window unanswerable.
    let pair_count = snapshots.len() - 1;
    let mut changed_pairs = 0usize;
    for pair in snapshots.windows(2) {
        if let Ok(result) = compare_responses(Some(&pair[0]), Some(&pair[1])) {
            if result.has_changes {
                changed_pairs += 1;
            }
        }
    }
    let change_frequency = changed_pairs as f64 / pair_count as f64;

    Ok(TrendAnalysis {
        total_responses: snapshots.len(),
        period_ms,
        change_frequency,
        stability_score: 1.0 - change_frequency,
        performance: performance_trend(snapshots),
    })
}

/// Coarse latency trend: first half of the series against the second.
///
/// Snapshots without a measured latency are left out of both averages;
/// `None` when either half has nothing to average. The second half counts
/// as degrading at 110% of the first half's average and improving at 90%.
fn performance_trend(snapshots: &[Response]) -> Option<PerformanceTrend> {
    let midpoint = snapshots.len() / 2;
    let first_avg = average_latency_ms(&snapshots[..midpoint])?;
    let second_avg = average_latency_ms(&snapshots[midpoint..])?;

    let direction = if second_avg >= first_avg * 1.10 {
        TrendDirection::Degrading
    } else if second_avg <= first_avg * 0.90 {
        TrendDirection::Improving
    } else {
        TrendDirection::Stable
    };

    Some(PerformanceTrend {
        average_response_time_ms: average_latency_ms(snapshots).unwrap_or(0.0),
        direction,
        percentile_deltas: Default::default(),
    })
}

/// Mean of the measured latencies in the slice, `None` when there are none.
fn average_latency_ms(snapshots: &[Response]) -> Option<f64> {
    let measured: Vec<u64> = snapshots
        .iter()
        .filter(|s| s.has_latency())
        .map(|s| s.latency_ms())
        .collect();
    if measured.is_empty() {
        return None;
    }
    Some(measured.iter().sum::<u64>() as f64 / measured.len() as f64)
}

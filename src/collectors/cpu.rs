use crate::error::{StatError, StatResult};
use crate::models::cpu::{CpuSnapshot, CpuUsage};
use crate::utils::file;
use log::{debug, error};
use std::path::Path;
use std::time::{Duration, Instant};

/// Window between the two samples of an instantaneous reading.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

pub async fn read_cpu_stat(path: &Path) -> StatResult<CpuSnapshot> {
    let contents = file::read_to_string(path).await?;
    parse_cpu_stat(&contents)
}

/// Parse the aggregate `cpu ` line. Per-core `cpuN` lines are ignored and
/// counters missing from the end of the line read as 0.
pub fn parse_cpu_stat(contents: &str) -> StatResult<CpuSnapshot> {
    let line = contents
        .lines()
        .find(|line| line.starts_with("cpu "))
        .ok_or_else(|| StatError::ParseDegenerate("No aggregate cpu line in stat source".into()))?;

    let mut counters = [0u64; 7];
    for (slot, token) in counters.iter_mut().zip(line.split_whitespace().skip(1)) {
        *slot = token.parse().map_err(|e| {
            StatError::ParseDegenerate(format!("Invalid cpu counter {:?}: {}", token, e))
        })?;
    }

    let [user, nice, system, idle, iowait, irq, softirq] = counters;
    Ok(CpuSnapshot {
        user,
        nice,
        system,
        idle,
        iowait,
        irq,
        softirq,
    })
}

/// CPU utilisation in percent over the last `SAMPLE_INTERVAL`. A failed read
/// counts as an all-zero snapshot, which lands on the 0.0 fallback.
pub async fn instantaneous_cpu_usage(path: &Path) -> f64 {
    sample_cpu_usage(path).await.instantaneous
}

/// One sampling window, also reporting the since-boot average of its first
/// snapshot so callers need no extra read.
pub async fn sample_cpu_usage(path: &Path) -> CpuUsage {
    let start = Instant::now();
    let first = sample(path).await;
    tokio::time::sleep(SAMPLE_INTERVAL).await;
    let second = sample(path).await;

    let result = CpuUsage {
        instantaneous: usage_between(&first, &second),
        since_boot: cumulative_cpu_usage(&first),
    };
    debug!("sample_cpu_usage took: {} ms", start.elapsed().as_millis());
    result
}

async fn sample(path: &Path) -> CpuSnapshot {
    read_cpu_stat(path).await.unwrap_or_else(|e| {
        error!("CPU load: error: {}", e);
        CpuSnapshot::default()
    })
}

/// Busy share of the ticks that elapsed between two snapshots.
pub fn usage_between(first: &CpuSnapshot, second: &CpuSnapshot) -> f64 {
    let delta_total = second.total().saturating_sub(first.total());
    if delta_total == 0 {
        return 0.0;
    }
    let delta_idle = second.idle_total().saturating_sub(first.idle_total());
    let delta_busy = delta_total.saturating_sub(delta_idle);
    delta_busy as f64 / delta_total as f64 * 100.0
}

/// Average utilisation since boot from a single snapshot.
pub fn cumulative_cpu_usage(snapshot: &CpuSnapshot) -> f64 {
    let total = snapshot.total();
    if total == 0 {
        return 0.0;
    }
    let active = total.saturating_sub(snapshot.idle_total());
    active as f64 / total as f64 * 100.0
}

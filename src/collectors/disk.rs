use crate::error::{StatError, StatResult};
use crate::models::disk::DiskRow;
use log::{debug, error};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Instant;
use tokio::process::Command;

// Filesystem, Size, Used, Avail, Use%, then the rest of the line as the mount point.
static DF_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(.+)$").expect("valid df row pattern")
});

pub async fn collect_disk_usage() -> StatResult<Vec<DiskRow>> {
    let start = Instant::now();
    let result = run_disk_tool("df", &["-h"]).await;
    if let Err(e) = &result {
        error!("Error running 'df -h': {}", e);
    }
    debug!(
        "collect_disk_usage (total) took: {} ms",
        start.elapsed().as_millis()
    );
    result
}

async fn run_disk_tool(program: &str, args: &[&str]) -> StatResult<Vec<DiskRow>> {
    let invocation = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");

    let cmd_start = Instant::now();
    let output = Command::new(program).args(args).output().await.map_err(|e| {
        StatError::ExternalToolFailure(format!("Failed to execute '{}': {}", invocation, e))
    })?;
    debug!(
        "{} command execution took: {} ms",
        program,
        cmd_start.elapsed().as_millis()
    );

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(StatError::ExternalToolFailure(format!(
            "'{}' exited with {}: {}",
            invocation,
            output.status,
            stderr.trim()
        )));
    }

    let parse_start = Instant::now();
    let rows = parse_df_output(&String::from_utf8_lossy(&output.stdout));
    debug!(
        "Disk usage parsing took: {} ms",
        parse_start.elapsed().as_millis()
    );
    Ok(rows)
}

/// Parse `df -h` output. The header is dropped, and lines with fewer than six
/// fields (wrapped long device names, for instance) are skipped.
pub fn parse_df_output(output: &str) -> Vec<DiskRow> {
    output
        .trim()
        .lines()
        .skip(1)
        .filter_map(|line| {
            DF_ROW.captures(line.trim()).map(|captures| DiskRow {
                mount_point: captures[6].to_string(),
                used: captures[3].to_string(),
                available: captures[4].to_string(),
            })
        })
        .collect()
}

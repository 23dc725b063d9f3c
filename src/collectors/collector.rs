use crate::collectors::{cpu, disk, memory, system};
use crate::models::{StatSources, SystemReport};
use log::debug;
use std::time::Instant;

/// Gather everything `/view-stats` shows. The reads run concurrently so the
/// whole report costs roughly the one-second CPU window.
pub async fn collect_system_report(sources: &StatSources) -> SystemReport {
    let start = Instant::now();

    let (memory, cpu_usage, uptime, disks) = tokio::join!(
        memory::read_memory_info(&sources.meminfo),
        cpu::sample_cpu_usage(&sources.stat),
        system::read_uptime(&sources.uptime),
        disk::collect_disk_usage(),
    );

    let report = SystemReport {
        memory,
        cpu_usage: cpu_usage.instantaneous,
        cpu_since_boot: cpu_usage.since_boot,
        uptime,
        disks,
    };

    debug!("{:?}", report);
    debug!(
        "collect_system_report took: {} ms",
        start.elapsed().as_millis()
    );
    report
}

use crate::error::StatResult;
use std::path::PathBuf;

pub mod cpu;
pub mod disk;
pub mod memory;
pub mod uptime;

/// Where the kernel stat readers look for their sources.
#[derive(Debug, Clone)]
pub struct StatSources {
    pub meminfo: PathBuf,
    pub stat: PathBuf,
    pub uptime: PathBuf,
}

impl Default for StatSources {
    fn default() -> Self {
        Self {
            meminfo: PathBuf::from("/proc/meminfo"),
            stat: PathBuf::from("/proc/stat"),
            uptime: PathBuf::from("/proc/uptime"),
        }
    }
}

/// Everything `/view-stats` shows. Failed reads stay in place as `Err` so the
/// renderer can put a placeholder in that cell and still render the rest.
#[derive(Debug)]
pub struct SystemReport {
    pub memory: StatResult<memory::MemoryInfo>,
    pub cpu_usage: f64,
    pub cpu_since_boot: f64,
    pub uptime: StatResult<uptime::UptimeInfo>,
    pub disks: StatResult<Vec<disk::DiskRow>>,
}

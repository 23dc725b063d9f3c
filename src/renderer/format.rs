use crate::error::StatResult;
use crate::models::memory::MemoryInfo;
use crate::models::uptime::UptimeInfo;

const KB_PER_GB: f64 = 1024.0 * 1024.0;

/// `"used GB / total GB"` where used is total minus available.
pub fn format_memory_usage(total_kb: u64, available_kb: u64) -> String {
    let used_kb = total_kb.saturating_sub(available_kb);
    let used_gb = used_kb as f64 / KB_PER_GB;
    let total_gb = total_kb as f64 / KB_PER_GB;
    format!("{:.2} GB / {:.2} GB", used_gb, total_gb)
}

pub fn format_memory_info(memory: &StatResult<MemoryInfo>) -> String {
    let info = match memory {
        Ok(info) => info,
        Err(e) => return format!("Error: {}", e),
    };

    match (info.kilobytes("MemTotal"), info.kilobytes("MemAvailable")) {
        (Some(total), Some(available)) => format_memory_usage(total, available),
        (None, _) => "Error: MemTotal missing or unreadable".to_string(),
        (_, None) => "Error: MemAvailable missing or unreadable".to_string(),
    }
}

/// `DDd:HHh:MMm:SSs`. Fractional seconds are truncated and days widen past
/// two digits as needed.
pub fn format_uptime(uptime_seconds: f64) -> String {
    let total_seconds = uptime_seconds.max(0.0) as u64;
    let days = total_seconds / 86400;
    let hours = (total_seconds % 86400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}d:{:02}h:{:02}m:{:02}s", days, hours, minutes, seconds)
}

pub fn format_uptime_info(uptime: &StatResult<UptimeInfo>) -> String {
    match uptime {
        Ok(info) => format_uptime(info.uptime_seconds),
        Err(e) => format!("Error: {}", e),
    }
}

pub fn format_cpu_usage(percent: f64) -> String {
    format!("{:.2}%", percent)
}

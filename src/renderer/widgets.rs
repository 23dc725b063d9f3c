use crate::error::StatResult;
use crate::models::disk::DiskRow;
use crate::models::SystemReport;
use crate::renderer::format;
use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::Table;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL_CONDENSED);
    table.set_header(header);
    table
}

/// Memory, CPU and uptime as a `Metric | Value` table.
pub fn render_system_table(report: &SystemReport) -> String {
    let mut table = new_table(vec!["Metric", "Value"]);
    table.add_row(vec![
        "Memory Usage".to_string(),
        format::format_memory_info(&report.memory),
    ]);
    table.add_row(vec![
        "CPU Usage".to_string(),
        format::format_cpu_usage(report.cpu_usage),
    ]);
    table.add_row(vec![
        "Uptime".to_string(),
        format::format_uptime_info(&report.uptime),
    ]);
    table.to_string()
}

pub fn render_disk_table(disks: &StatResult<Vec<DiskRow>>) -> String {
    let rows = match disks {
        Ok(rows) if rows.is_empty() => return "No disk usage data available".to_string(),
        Ok(rows) => rows,
        Err(e) => return format!("Error retrieving disk usage: {}", e),
    };

    let mut table = new_table(vec!["Mounted On", "Used", "Available"]);
    for row in rows {
        table.add_row(vec![
            row.mount_point.as_str(),
            row.used.as_str(),
            row.available.as_str(),
        ]);
    }
    table.to_string()
}

/// Wrap a rendered table for a Discord embed description.
pub fn code_block(text: &str) -> String {
    format!("```plaintext\n{}\n```", text)
}

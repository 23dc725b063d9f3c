#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UptimeInfo {
    pub uptime_seconds: f64,
    pub idle_seconds: f64,
}

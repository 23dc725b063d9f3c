/// Cumulative tick counters from the aggregate `cpu ` line of `/proc/stat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
}

/// Percentages from one sampling window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuUsage {
    /// Busy share of the ticks inside the window.
    pub instantaneous: f64,
    /// Busy share of all ticks since boot, from the first snapshot.
    pub since_boot: f64,
}

impl CpuSnapshot {
    pub fn total(&self) -> u64 {
        self.user
            .saturating_add(self.nice)
            .saturating_add(self.system)
            .saturating_add(self.idle)
            .saturating_add(self.iowait)
            .saturating_add(self.irq)
            .saturating_add(self.softirq)
    }

    /// Idle time, counting iowait as idle.
    pub fn idle_total(&self) -> u64 {
        self.idle.saturating_add(self.iowait)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let snapshot = CpuSnapshot {
            user: 10,
            nice: 1,
            system: 5,
            idle: 80,
            iowait: 2,
            irq: 1,
            softirq: 1,
        };
        assert_eq!(snapshot.total(), 100);
        assert_eq!(snapshot.idle_total(), 82);
    }
}

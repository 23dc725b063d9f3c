use indexmap::IndexMap;

/// Raw `/proc/meminfo` fields, values kept verbatim (e.g. `"16384 kB"`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryInfo {
    pub fields: IndexMap<String, String>,
}

impl MemoryInfo {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|s| s.as_str())
    }

    /// Leading numeric token of a field, which the kernel reports in kB.
    pub fn kilobytes(&self, key: &str) -> Option<u64> {
        self.get(key)?.split_whitespace().next()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilobytes() {
        let mut info = MemoryInfo::default();
        info.fields.insert("MemTotal".into(), "16384 kB".into());
        info.fields.insert("HugePages_Total".into(), "0".into());
        info.fields.insert("Broken".into(), "n/a kB".into());

        assert_eq!(info.kilobytes("MemTotal"), Some(16384));
        assert_eq!(info.kilobytes("HugePages_Total"), Some(0));
        assert_eq!(info.kilobytes("Broken"), None);
        assert_eq!(info.kilobytes("MemAvailable"), None);
    }
}

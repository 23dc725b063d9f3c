use crate::error::StatResult;
use crate::models::memory::MemoryInfo;
use crate::utils::file;
use log::{debug, error};
use std::path::Path;
use std::time::Instant;

pub async fn read_memory_info(path: &Path) -> StatResult<MemoryInfo> {
    let start = Instant::now();
    let result = file::read_to_string(path)
        .await
        .map(|contents| parse_memory_info(&contents));
    if let Err(e) = &result {
        error!("Memory statistics error getting stats: {}", e);
    }
    debug!("read_memory_info took: {} ms", start.elapsed().as_millis());
    result
}

/// Lines without a colon are dropped.
pub fn parse_memory_info(contents: &str) -> MemoryInfo {
    let fields = contents
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect();
    MemoryInfo { fields }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MEMINFO: &str = "MemTotal:       16777216 kB\n\
                           MemFree:         1048576 kB\n\
                           MemAvailable:    8388608 kB\n\
                           this line has no separator\n\
                           HugePages_Total:       0\n";

    #[test]
    fn test_parse_memory_info() {
        let info = parse_memory_info(MEMINFO);

        assert_eq!(info.get("MemTotal"), Some("16777216 kB"));
        assert_eq!(info.get("MemAvailable"), Some("8388608 kB"));
        assert_eq!(info.get("HugePages_Total"), Some("0"));
        assert_eq!(info.fields.len(), 4);
        assert!(info
            .fields
            .keys()
            .all(|key| !key.contains("separator")));
    }

    #[test]
    fn test_parse_keeps_source_order() {
        let info = parse_memory_info(MEMINFO);
        let keys: Vec<&str> = info.fields.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["MemTotal", "MemFree", "MemAvailable", "HugePages_Total"]
        );
    }

    #[test]
    fn test_parse_splits_on_first_colon() {
        let info = parse_memory_info("Odd: a:b\n");
        assert_eq!(info.get("Odd"), Some("a:b"));
    }

    #[tokio::test]
    async fn test_read_memory_info() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(MEMINFO.as_bytes()).unwrap();

        let info = read_memory_info(temp_file.path()).await.unwrap();
        assert_eq!(info.kilobytes("MemTotal"), Some(16777216));
    }

    #[tokio::test]
    async fn test_read_missing_source() {
        let result = read_memory_info(Path::new("/nonexistent/meminfo")).await;
        assert!(matches!(result, Err(StatError::SourceUnavailable { .. })));
    }
}

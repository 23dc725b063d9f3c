use crate::error::{StatError, StatResult};
use log::debug;
use std::path::Path;
use std::time::Instant;

/// Read a whole kernel text source without blocking the runtime.
pub async fn read_to_string(path: &Path) -> StatResult<String> {
    let start = Instant::now();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StatError::unavailable(path, e))?;
    debug!(
        "read_to_string({}) took: {} ms",
        path.display(),
        start.elapsed().as_millis()
    );
    Ok(contents)
}
